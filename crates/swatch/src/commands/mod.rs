//! CLI subcommands.

pub mod check;
pub mod init_schema;
pub mod root;
pub mod tokens;
pub mod usage;

use clap::Args;
use std::path::PathBuf;
use swatch::config::{load_config, SwatchConfig};
use swatch_palette::{default_tokens, NamingRules, PaletteResult, TokenTree};
use swatch_patina::{
    format_report, CheckReport, CheckResult, CheckSummary, OutputFormat, TokenChecker,
};

/// All checks passed.
pub const EXIT_OK: i32 = 0;
/// A token violation was found.
pub const EXIT_VIOLATION: i32 = 1;
/// Tokens, config or input paths could not be used.
pub const EXIT_CONFIG: i32 = 2;

/// Flags shared by every subcommand.
#[derive(Args, Debug, Default, Clone)]
pub struct GlobalArgs {
    /// Config file path (default: ./swatch.config.json)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// JSON design token file (overrides the config)
    #[arg(short, long, global = true)]
    pub tokens: Option<PathBuf>,

    /// Output format (text, json; `tokens` also accepts css)
    #[arg(short, long, global = true, default_value = "text")]
    pub format: String,

    /// Quiet mode - only print failures
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub verbose: bool,
}

/// Everything a command needs: the loaded config and a ready checker.
pub struct Context {
    pub config: SwatchConfig,
    pub checker: TokenChecker,
    pub format: OutputFormat,
    pub quiet: bool,
}

impl Context {
    pub fn load(global: &GlobalArgs) -> PaletteResult<Self> {
        let config = load_config(global.config.as_deref(), None);

        let tokens = match global.tokens.as_ref().or(config.tokens.as_ref()) {
            Some(path) => {
                tracing::debug!(path = %path.display(), "loading tokens");
                TokenTree::load(path)?
            }
            None => default_tokens(),
        };

        let mut rules = NamingRules::default();
        rules.extend(config.aliases.iter().map(|(k, v)| (k.as_str(), v.as_str())));

        Ok(Self {
            checker: TokenChecker::new(tokens).with_rules(rules),
            config,
            format: OutputFormat::from_name(&global.format),
            quiet: global.quiet,
        })
    }

    /// Load the context or print why it failed.
    pub fn load_or_exit_code(global: &GlobalArgs) -> Result<Self, i32> {
        Self::load(global).map_err(|e| {
            eprintln!("Error: {}", e);
            EXIT_CONFIG
        })
    }

    /// Print one check outcome and return its exit code.
    pub fn report(&self, check: &'static str, result: &CheckResult<CheckSummary>) -> i32 {
        let report = CheckReport::from_result(check, result);
        if !(self.quiet && report.ok) {
            println!("{}", format_report(&report, self.format));
        }
        exit_code(result)
    }
}

/// Exit code for a check result.
pub fn exit_code(result: &CheckResult<CheckSummary>) -> i32 {
    match result {
        Ok(_) => EXIT_OK,
        Err(e) if e.is_violation() => EXIT_VIOLATION,
        Err(_) => EXIT_CONFIG,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use swatch_patina::TokenCheckError;

    #[test]
    fn test_exit_codes() {
        assert_eq!(exit_code(&Ok(CheckSummary::default())), EXIT_OK);

        let violation = TokenCheckError::MissingRootVariable {
            name: "grid-unit".into(),
            files: "src/styles.scss".into(),
        };
        assert_eq!(exit_code(&Err(violation)), EXIT_VIOLATION);

        let io = TokenCheckError::Io {
            path: PathBuf::from("src"),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        };
        assert_eq!(exit_code(&Err(io)), EXIT_CONFIG);
    }

    #[test]
    fn test_context_with_aliases_and_token_file() {
        let dir = tempfile::tempdir().unwrap();
        let tokens = dir.path().join("tokens.json");
        std::fs::write(&tokens, r#"{ "shape": { "corner": "4px" } }"#).unwrap();
        let config = dir.path().join("swatch.config.json");
        std::fs::write(&config, r#"{ "aliases": { "shape.corner": "radius" } }"#).unwrap();

        let global = GlobalArgs {
            config: Some(config),
            tokens: Some(tokens),
            ..GlobalArgs::default()
        };
        let ctx = Context::load(&global).unwrap();
        let map = ctx.checker.canonical_map();
        assert_eq!(map.value("radius"), Some("4px"));
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn test_context_missing_token_file() {
        let global = GlobalArgs {
            tokens: Some(PathBuf::from("/nonexistent/tokens.json")),
            ..GlobalArgs::default()
        };
        assert!(Context::load(&global).is_err());
    }
}
