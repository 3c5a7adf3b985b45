//! Token checker entry points.

use crate::error::{CheckResult, TokenCheckError};
use std::path::{Path, PathBuf};
use swatch_carton::FxHashSet;
use swatch_palette::{default_tokens, flatten_with, CanonicalMap, NamingRules, TokenTree};

/// Default directory scanned by the usage check.
pub const DEFAULT_SOURCE_ROOT: &str = "src";

/// Default global stylesheet holding the `:root` token block.
pub const DEFAULT_GLOBAL_STYLESHEET: &str = "src/styles.scss";

/// Options for the stylesheet usage audit.
#[derive(Debug, Clone)]
pub struct UsageAuditOptions {
    /// Explicit stylesheet paths. When `None`, `source_root` is walked.
    pub scss_paths: Option<Vec<PathBuf>>,
    /// Directory walked for stylesheets when no explicit paths are given.
    pub source_root: PathBuf,
    /// File extensions (without dot) treated as stylesheets.
    pub extensions: Vec<String>,
}

impl Default for UsageAuditOptions {
    fn default() -> Self {
        Self {
            scss_paths: None,
            source_root: PathBuf::from(DEFAULT_SOURCE_ROOT),
            extensions: vec!["scss".to_string()],
        }
    }
}

impl UsageAuditOptions {
    /// Audit exactly the given stylesheets.
    pub fn with_paths<I, P>(paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self {
            scss_paths: Some(paths.into_iter().map(Into::into).collect()),
            ..Self::default()
        }
    }
}

/// Options for the `:root` equality audit.
#[derive(Debug, Clone, Default)]
pub struct RootAuditOptions {
    /// Explicit stylesheet paths. When `None`, the global stylesheet is used.
    pub css_paths: Option<Vec<PathBuf>>,
    /// Fail when `:root` declares variables that are not tokens.
    pub fail_on_extra_vars: bool,
}

impl RootAuditOptions {
    /// Audit the concatenation of the given stylesheets.
    pub fn with_paths<I, P>(paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self {
            css_paths: Some(paths.into_iter().map(Into::into).collect()),
            fail_on_extra_vars: false,
        }
    }

    /// Enable strict mode.
    #[inline]
    pub fn strict(mut self) -> Self {
        self.fail_on_extra_vars = true;
        self
    }
}

/// What a passing check looked at.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckSummary {
    /// Stylesheets that were read.
    pub files: Vec<PathBuf>,
    /// Number of canonical token variables compared against.
    pub variables: usize,
}

/// Checks stylesheets against a token tree.
///
/// The canonical mapping is derived afresh on every check, so a checker
/// never goes stale between runs.
#[derive(Debug, Clone)]
pub struct TokenChecker {
    tokens: TokenTree,
    rules: NamingRules,
    base_dir: PathBuf,
}

impl Default for TokenChecker {
    fn default() -> Self {
        Self::new(default_tokens())
    }
}

impl TokenChecker {
    /// Create a checker for a token tree, resolving paths against the
    /// current directory.
    pub fn new(tokens: TokenTree) -> Self {
        Self {
            tokens,
            rules: NamingRules::default(),
            base_dir: std::env::current_dir().unwrap_or_default(),
        }
    }

    /// Use custom naming rules.
    #[inline]
    pub fn with_rules(mut self, rules: NamingRules) -> Self {
        self.rules = rules;
        self
    }

    /// Resolve relative paths against `dir`.
    #[inline]
    pub fn with_base_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.base_dir = dir.into();
        self
    }

    /// Flatten the token tree into canonical variables.
    #[inline]
    pub fn canonical_map(&self) -> CanonicalMap {
        flatten_with(&self.tokens, &self.rules)
    }

    /// Resolve a path against the base directory.
    #[inline]
    pub(crate) fn resolve(&self, path: &Path) -> PathBuf {
        self.base_dir.join(path)
    }

    pub(crate) fn read(&self, path: &Path) -> CheckResult<String> {
        std::fs::read_to_string(path).map_err(|source| TokenCheckError::Io {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Canonical names lower-cased for lookup against scanned names, which the
/// scanner lower-cases.
pub(crate) fn lowercase_names(map: &CanonicalMap) -> FxHashSet<String> {
    map.names().map(str::to_lowercase).collect()
}

/// Audit every stylesheet under `src/` against the default tokens.
///
/// Fails on the first unknown variable or hardcoded literal.
pub fn assert_all_scss_usages_match_tokens(options: &UsageAuditOptions) -> CheckResult<CheckSummary> {
    TokenChecker::default().assert_all_scss_usages_match_tokens(options)
}

/// Audit a single stylesheet against the default tokens.
pub fn assert_scss_component_matches_tokens(path: impl AsRef<Path>) -> CheckResult<CheckSummary> {
    TokenChecker::default().assert_scss_component_matches_tokens(path.as_ref())
}

/// Compare the global `:root` block against the default tokens.
pub fn assert_all_root_tokens_match_tokens_file(options: &RootAuditOptions) -> CheckResult<CheckSummary> {
    TokenChecker::default().assert_all_root_tokens_match_tokens_file(options)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_usage_options_defaults() {
        let options = UsageAuditOptions::default();
        assert!(options.scss_paths.is_none());
        assert_eq!(options.source_root, PathBuf::from("src"));
        assert_eq!(options.extensions, ["scss"]);

        let options = UsageAuditOptions::with_paths(["a.scss", "b.scss"]);
        assert_eq!(options.scss_paths.map(|p| p.len()), Some(2));
    }

    #[test]
    fn test_root_options() {
        let options = RootAuditOptions::with_paths(["styles.scss"]).strict();
        assert!(options.fail_on_extra_vars);
        assert!(!RootAuditOptions::default().fail_on_extra_vars);
    }

    #[test]
    fn test_resolve_against_base_dir() {
        let checker = TokenChecker::default().with_base_dir("/project");
        assert_eq!(
            checker.resolve(Path::new("src/styles.scss")),
            PathBuf::from("/project/src/styles.scss")
        );
        assert_eq!(
            checker.resolve(Path::new("/abs/styles.scss")),
            PathBuf::from("/abs/styles.scss")
        );
    }

    #[test]
    fn test_lowercase_names() {
        let tokens = TokenTree::new().with_group("fontSizes", TokenTree::new().with_leaf("sm", "12px"));
        let names = lowercase_names(&TokenChecker::new(tokens).canonical_map());
        assert!(names.contains("fontsize-sm"));
        assert!(!names.contains("fontSize-sm"));
    }

    #[test]
    fn test_canonical_map_is_rederived() {
        let checker = TokenChecker::default();
        assert_eq!(checker.canonical_map().len(), 6);
        assert_eq!(checker.canonical_map().len(), 6);
    }
}
