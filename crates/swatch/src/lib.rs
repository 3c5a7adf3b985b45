//! # Swatch
//!
//! Design token consistency checks for stylesheets, written in Rust.
//!
//! This crate re-exports all Swatch sub-crates for unified documentation,
//! and hosts the configuration and logging setup shared by the `swatch`
//! binary.
//!
//! ## Crates
//!
//! - [`carton`] - Shared containers and string helpers
//! - [`palette`] - Token trees, naming rules and flattening
//! - [`croquis`] - Regex-based stylesheet scanning
//! - [`patina`] - Usage and `:root` consistency checks

pub mod config;
pub mod logging;

/// Shared containers and string helpers.
pub use swatch_carton as carton;

/// Token trees, naming rules and flattening.
pub use swatch_palette as palette;

/// Regex-based stylesheet scanning.
pub use swatch_croquis as croquis;

/// Usage and `:root` consistency checks.
pub use swatch_patina as patina;
