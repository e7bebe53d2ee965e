use serde::{Deserialize, Serialize};

/// A column or row index in the virtual grid.
///
/// `Relative` places the element immediately after the previous element on
/// that axis, letting callers lay out a row or column without tracking
/// indices by hand.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GridPos {
  #[default]
  Relative,
  /// A concrete zero-based column/row index.
  Cell(i32),
}

impl GridPos {
  /// Raw encoding of `Relative` in the legacy integer form of the fields.
  pub const RELATIVE: i32 = -1;

  /// Decode the legacy integer form. Any value `>= 0` is a concrete cell;
  /// every negative value reads as relative placement.
  #[inline]
  pub const fn from_raw(raw: i32) -> Self {
    if raw >= 0 { Self::Cell(raw) } else { Self::Relative }
  }

  #[inline]
  pub const fn to_raw(self) -> i32 {
    match self {
      Self::Relative => Self::RELATIVE,
      Self::Cell(index) => index,
    }
  }

  #[inline]
  pub const fn cell(self) -> Option<i32> {
    match self {
      Self::Relative => None,
      Self::Cell(index) => Some(index),
    }
  }
}

impl From<i32> for GridPos {
  #[inline]
  fn from(raw: i32) -> Self { Self::from_raw(raw) }
}

/// How many cells an element spans along one axis.
///
/// `Relative` spans this element plus one more to follow; `Remainder`
/// consumes every remaining cell on the axis. A concrete span is expected to
/// be `>= 1`, but no validation is performed here; the layout manager decides
/// how to treat a nonsensical span.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GridSpan {
  /// A concrete cell count.
  Cells(i32),
  Relative,
  Remainder,
}

impl Default for GridSpan {
  #[inline]
  fn default() -> Self { Self::Cells(1) }
}

impl GridSpan {
  /// Raw encoding of `Relative` in the legacy integer form of the fields.
  pub const RELATIVE: i32 = -1;
  /// Raw encoding of `Remainder`. Negative so it can never collide with a
  /// concrete span or index.
  pub const REMAINDER: i32 = -2;

  #[inline]
  pub const fn from_raw(raw: i32) -> Self {
    match raw {
      Self::RELATIVE => Self::Relative,
      Self::REMAINDER => Self::Remainder,
      cells => Self::Cells(cells),
    }
  }

  #[inline]
  pub const fn to_raw(self) -> i32 {
    match self {
      Self::Cells(cells) => cells,
      Self::Relative => Self::RELATIVE,
      Self::Remainder => Self::REMAINDER,
    }
  }

  #[inline]
  pub const fn cells(self) -> Option<i32> {
    match self {
      Self::Cells(cells) => Some(cells),
      _ => None,
    }
  }
}

impl From<i32> for GridSpan {
  #[inline]
  fn from(raw: i32) -> Self { Self::from_raw(raw) }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn sentinels_are_distinct_negatives() {
    assert!(GridSpan::RELATIVE < 0);
    assert!(GridSpan::REMAINDER < 0);
    assert_ne!(GridSpan::RELATIVE, GridSpan::REMAINDER);
    assert_eq!(GridPos::RELATIVE, GridSpan::RELATIVE);
  }

  #[test]
  fn pos_raw_conversion() {
    assert_eq!(GridPos::from_raw(0), GridPos::Cell(0));
    assert_eq!(GridPos::from_raw(7), GridPos::Cell(7));
    assert_eq!(GridPos::from_raw(GridPos::RELATIVE), GridPos::Relative);
    // Out-of-band negatives read as relative placement too.
    assert_eq!(GridPos::from_raw(-9), GridPos::Relative);

    assert_eq!(GridPos::Cell(7).to_raw(), 7);
    assert_eq!(GridPos::Relative.to_raw(), GridPos::RELATIVE);
    assert_eq!(GridPos::Cell(3).cell(), Some(3));
    assert_eq!(GridPos::Relative.cell(), None);
  }

  #[test]
  fn span_raw_conversion() {
    assert_eq!(GridSpan::from_raw(1), GridSpan::Cells(1));
    assert_eq!(GridSpan::from_raw(GridSpan::RELATIVE), GridSpan::Relative);
    assert_eq!(GridSpan::from_raw(GridSpan::REMAINDER), GridSpan::Remainder);

    assert_eq!(GridSpan::Cells(4).to_raw(), 4);
    assert_eq!(GridSpan::Relative.to_raw(), GridSpan::RELATIVE);
    assert_eq!(GridSpan::Remainder.to_raw(), GridSpan::REMAINDER);

    assert_eq!(GridSpan::default(), GridSpan::Cells(1));
    assert_eq!(GridSpan::Remainder.cells(), None);
  }
}
