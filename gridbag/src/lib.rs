//! Placement hints for elements managed by a grid-bag layout manager.
//!
//! A grid-bag layout places elements into a virtual grid of rows and columns
//! with variable-size cells and weighted distribution of slack space. The
//! layout algorithm itself lives in the layout manager; this crate only
//! provides the passive value types an element is configured with: where it
//! goes ([`GridPos`]), how many cells it spans ([`GridSpan`]), how it sits
//! inside its cell ([`Anchor`], [`Fill`], [`Insets`]) and how it competes for
//! extra space (weights). All of them are bundled in [`GridBagConstraints`].

mod constraints;
mod grid;
mod insets;

pub use constraints::{Anchor, Fill, GridBagConstraints};
pub use grid::{GridPos, GridSpan};
pub use insets::Insets;
