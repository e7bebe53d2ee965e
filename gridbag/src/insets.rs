use serde::{Deserialize, Serialize};

/// Extra space reserved between an element and the boundary of its cell.
///
/// A plain margin record. [`GridBagConstraints`](crate::GridBagConstraints)
/// always owns one; copying the constraints copies the insets with it, so the
/// copy is independently mutable.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Insets {
  pub top: i32,
  pub left: i32,
  pub bottom: i32,
  pub right: i32,
}

impl Insets {
  pub const ZERO: Self = Self { top: 0, left: 0, bottom: 0, right: 0 };

  #[inline]
  pub const fn new(top: i32, left: i32, bottom: i32, right: i32) -> Self {
    Self { top, left, bottom, right }
  }

  #[inline]
  pub const fn all(value: i32) -> Self { Self::new(value, value, value, value) }

  #[inline]
  pub const fn symmetrical(vertical: i32, horizontal: i32) -> Self {
    Self { top: vertical, bottom: vertical, left: horizontal, right: horizontal }
  }

  #[inline]
  pub const fn vertical(vertical: i32) -> Self {
    Self { top: vertical, bottom: vertical, ..Self::ZERO }
  }

  #[inline]
  pub const fn horizontal(horizontal: i32) -> Self {
    Self { left: horizontal, right: horizontal, ..Self::ZERO }
  }

  #[inline]
  pub const fn only_top(top: i32) -> Self { Self { top, ..Self::ZERO } }

  #[inline]
  pub const fn only_left(left: i32) -> Self { Self { left, ..Self::ZERO } }

  #[inline]
  pub const fn only_bottom(bottom: i32) -> Self { Self { bottom, ..Self::ZERO } }

  #[inline]
  pub const fn only_right(right: i32) -> Self { Self { right, ..Self::ZERO } }

  #[inline]
  pub const fn with_top(mut self, top: i32) -> Self {
    self.top = top;
    self
  }

  #[inline]
  pub const fn with_left(mut self, left: i32) -> Self {
    self.left = left;
    self
  }

  #[inline]
  pub const fn with_bottom(mut self, bottom: i32) -> Self {
    self.bottom = bottom;
    self
  }

  #[inline]
  pub const fn with_right(mut self, right: i32) -> Self {
    self.right = right;
    self
  }

  /// Total `(horizontal, vertical)` space these margins consume.
  #[inline]
  pub const fn thickness(&self) -> (i32, i32) {
    (self.left + self.right, self.top + self.bottom)
  }
}

impl std::ops::Add for Insets {
  type Output = Self;

  #[inline]
  fn add(mut self, rhs: Self) -> Self::Output {
    self += rhs;
    self
  }
}

impl std::ops::AddAssign for Insets {
  fn add_assign(&mut self, rhs: Self) {
    self.top += rhs.top;
    self.left += rhs.left;
    self.bottom += rhs.bottom;
    self.right += rhs.right;
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn constructors() {
    assert_eq!(Insets::default(), Insets::ZERO);
    assert_eq!(Insets::all(3), Insets::new(3, 3, 3, 3));
    assert_eq!(Insets::symmetrical(1, 2), Insets::new(1, 2, 1, 2));
    assert_eq!(Insets::vertical(4), Insets::new(4, 0, 4, 0));
    assert_eq!(Insets::horizontal(4), Insets::new(0, 4, 0, 4));
    assert_eq!(Insets::only_left(5), Insets::new(0, 5, 0, 0));
    assert_eq!(
      Insets::ZERO.with_top(1).with_left(2).with_bottom(3).with_right(4),
      Insets::new(1, 2, 3, 4)
    );
  }

  #[test]
  fn thickness_and_add() {
    assert_eq!(Insets::new(1, 2, 3, 4).thickness(), (6, 4));

    let mut sum = Insets::all(1);
    sum += Insets::new(0, 1, 2, 3);
    assert_eq!(sum, Insets::new(1, 2, 3, 4));
    assert_eq!(Insets::all(1) + Insets::all(2), Insets::all(3));
  }
}
