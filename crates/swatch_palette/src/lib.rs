//! # swatch_palette
//!
//! Palette - Design token trees for Swatch.
//!
//! ## Name Origin
//!
//! A **palette** is the board a painter mixes colors on: every hue used in
//! the work starts there. `swatch_palette` holds the single source of truth
//! for design tokens and derives the canonical CSS custom property name for
//! every token leaf.
//!
//! ## Usage
//!
//! ```
//! use swatch_palette::{default_tokens, flatten};
//!
//! let map = flatten(&default_tokens());
//! assert_eq!(map.value("color-primary"), Some("#1a43e8"));
//! assert_eq!(map.value("font-family-base"), Some("\"Roboto\", sans-serif"));
//! ```
//!
//! ## Naming
//!
//! Each leaf path (e.g. `colors.primary`) is turned into a variable name:
//!
//! 1. an exact alias entry wins (`typography.fontFamily` -> `font-family-base`)
//! 2. a single segment is kebab-cased (`gridUnit` -> `grid-unit`)
//! 3. otherwise the group is singularized and every remaining segment is
//!    kebab-cased (`colors.primary` -> `color-primary`)

mod codegen;
mod error;
mod flatten;
mod naming;
mod tree;

pub use error::{PaletteError, PaletteResult};
pub use flatten::{flatten, flatten_with, CanonicalMap, TokenBinding};
pub use naming::NamingRules;
pub use tree::{default_tokens, TokenNode, TokenTree, TokenValue};
