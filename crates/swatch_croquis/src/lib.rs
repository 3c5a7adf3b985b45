//! # swatch_croquis
//!
//! Croquis - Stylesheet scanning for Swatch.
//!
//! ## Name Origin
//!
//! A **croquis** is a quick sketch capturing the essential lines of a
//! subject. `swatch_croquis` does not build a CSS AST; it sketches the three
//! things the token checks need out of raw stylesheet text with regular
//! expressions:
//!
//! - custom properties referenced through `var(--name)`
//! - `property: value;` declarations inside `{ ... }` blocks
//! - custom properties declared in `:root { ... }` blocks
//!
//! Blocks are not nesting-aware: a block ends at the first `}`. Comments
//! inside blocks are not stripped.

mod scanner;

pub use scanner::{declarations, root_variables, used_variables, Declarations, RootVariables, Stylesheet};
