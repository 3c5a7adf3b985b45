//! # swatch_patina
//!
//! Patina - The consistency checker for Swatch.
//!
//! ## Name Origin
//!
//! **Patina** is the layer that forms on metal over time and reveals whether
//! a piece is genuine. `swatch_patina` examines stylesheets to make sure
//! every color, size and font they use genuinely comes from the design
//! tokens.
//!
//! ## Checks
//!
//! Two independent checks share the flattening and normalization helpers:
//!
//! - **Usage audit** ([`TokenChecker::assert_all_scss_usages_match_tokens`],
//!   [`TokenChecker::assert_scss_component_matches_tokens`]): every
//!   `var(--name)` must name a token, and every declared literal must be a
//!   token value, a `var()`/`calc(var())` reference or a safe literal.
//! - **Root audit** ([`TokenChecker::assert_all_root_tokens_match_tokens_file`]):
//!   the `:root` block of the global stylesheet must declare every token
//!   with an equal value, optionally rejecting extra variables.
//!
//! Each check stops at the first violation and returns it as a
//! [`TokenCheckError`].
//!
//! ## Usage
//!
//! ```rust,ignore
//! use swatch_patina::{TokenChecker, RootAuditOptions};
//!
//! let checker = TokenChecker::default();
//! checker.assert_scss_component_matches_tokens("src/app/button/button.component.scss".as_ref())?;
//! checker.assert_all_root_tokens_match_tokens_file(&RootAuditOptions::default().strict())?;
//! ```

mod checker;
mod error;
pub mod normalize;
mod output;
mod root;
mod usage;

pub use checker::{
    assert_all_root_tokens_match_tokens_file, assert_all_scss_usages_match_tokens,
    assert_scss_component_matches_tokens, CheckSummary, RootAuditOptions, TokenChecker,
    UsageAuditOptions, DEFAULT_GLOBAL_STYLESHEET, DEFAULT_SOURCE_ROOT,
};
pub use error::{CheckResult, TokenCheckError};
pub use output::{format_report, format_summary, CheckReport, JsonError, OutputFormat};
