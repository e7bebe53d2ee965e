use serde::{Deserialize, Serialize};

use crate::{GridPos, GridSpan, Insets};

/// Where an element sits inside its cell area when it does not fill it.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Anchor {
  #[default]
  Center,
  North,
  NorthEast,
  East,
  SouthEast,
  South,
  SouthWest,
  West,
  NorthWest,
}

/// How an element stretches when its cell is larger than its natural size.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Fill {
  #[default]
  None,
  Horizontal,
  Vertical,
  Both,
}

/// Placement hints for one element managed by a grid-bag layout manager.
///
/// This is a passive value object: every field is public, nothing is
/// validated on mutation, and the layout manager that reads it owns the
/// policy for out-of-range combinations. The `with_*` helpers are plain
/// conveniences over the fields.
///
/// # Example
///
/// ```rust
/// use gridbag::{Fill, GridBagConstraints, GridSpan, Insets};
///
/// let hints = GridBagConstraints::new()
///   .at(0, 2)
///   .span(GridSpan::REMAINDER, 1)
///   .with_fill(Fill::Horizontal)
///   .with_weight(1.0, 0.0)
///   .with_insets(Insets::all(4));
/// assert_eq!(hints.grid_width, GridSpan::Remainder);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GridBagConstraints {
  /// Column to place the element in, or relative placement.
  pub grid_x: GridPos,
  /// Row to place the element in, or relative placement.
  pub grid_y: GridPos,
  /// Number of columns the element spans.
  pub grid_width: GridSpan,
  /// Number of rows the element spans.
  pub grid_height: GridSpan,
  pub fill: Fill,
  pub anchor: Anchor,
  /// Margin between the element and the boundary of its cell. Owned by this
  /// value; [`duplicate`](Self::duplicate) copies it so the copy stays
  /// independently mutable.
  pub insets: Insets,
  /// Extra width added to the element's minimum size.
  pub internal_pad_x: i32,
  /// Extra height added to the element's minimum size.
  pub internal_pad_y: i32,
  /// Relative share of horizontal slack space, `>= 0` by convention.
  /// `0.0` means the column never grows on this element's account.
  pub weight_x: f64,
  /// Relative share of vertical slack space, `>= 0` by convention.
  pub weight_y: f64,
}

impl GridBagConstraints {
  /// Default placement: relative position, a single-cell span, centered, no
  /// fill, no margins, no padding, zero weight.
  #[inline]
  pub fn new() -> Self { Self::default() }

  /// A copy sharing no mutable state with `self`. Always succeeds.
  ///
  /// Every field has value semantics, so this is the derived `Clone`; it is
  /// kept as a named operation because independent-copy is the one behavior
  /// this type contracts to its consumers.
  #[inline]
  #[must_use]
  pub fn duplicate(&self) -> Self { self.clone() }

  /// Place at the concrete column `x` and row `y`.
  #[inline]
  pub const fn at(mut self, x: i32, y: i32) -> Self {
    self.grid_x = GridPos::Cell(x);
    self.grid_y = GridPos::Cell(y);
    self
  }

  /// Span `width` columns and `height` rows, in the legacy raw encoding so
  /// [`GridSpan::RELATIVE`] and [`GridSpan::REMAINDER`] stay usable inline.
  #[inline]
  pub const fn span(mut self, width: i32, height: i32) -> Self {
    self.grid_width = GridSpan::from_raw(width);
    self.grid_height = GridSpan::from_raw(height);
    self
  }

  #[inline]
  pub const fn with_fill(mut self, fill: Fill) -> Self {
    self.fill = fill;
    self
  }

  #[inline]
  pub const fn with_anchor(mut self, anchor: Anchor) -> Self {
    self.anchor = anchor;
    self
  }

  #[inline]
  pub const fn with_insets(mut self, insets: Insets) -> Self {
    self.insets = insets;
    self
  }

  #[inline]
  pub const fn with_internal_pad(mut self, x: i32, y: i32) -> Self {
    self.internal_pad_x = x;
    self.internal_pad_y = y;
    self
  }

  #[inline]
  pub const fn with_weight(mut self, x: f64, y: f64) -> Self {
    self.weight_x = x;
    self.weight_y = y;
    self
  }
}
