//! The formatting backends themselves.
//!
//! Each submodule is one backend: a type implementing
//! [`Formatter`](../formatter/trait.Formatter.html), plus the free
//! functions (`build`, `capabilities`, `help`) that the registry stitches
//! into its table.

pub mod beats;
pub mod classic;
pub mod tokens;
