//! Usage command - Audit stylesheets for unknown variables and hardcoded values

use super::{Context, GlobalArgs};
use clap::Args;
use std::path::PathBuf;
use swatch_patina::UsageAuditOptions;

#[derive(Args, Debug, Default)]
pub struct UsageArgs {
    /// Stylesheets to audit (default: walk the source root)
    pub paths: Vec<PathBuf>,

    /// Directory walked when no paths are given
    #[arg(long)]
    pub source_root: Option<PathBuf>,

    /// Stylesheet extension to collect (repeatable)
    #[arg(short, long = "ext")]
    pub extensions: Vec<String>,

    /// Audit a single component stylesheet; fails if it does not exist
    #[arg(long, conflicts_with_all = ["paths", "source_root"])]
    pub component: Option<PathBuf>,
}

impl UsageArgs {
    /// Command line values layered over the config.
    pub fn options(&self, ctx: &Context) -> UsageAuditOptions {
        let mut options = ctx.config.usage.to_options();
        if !self.paths.is_empty() {
            options.scss_paths = Some(self.paths.clone());
        }
        if let Some(root) = &self.source_root {
            options.source_root = root.clone();
        }
        if !self.extensions.is_empty() {
            options.extensions = self
                .extensions
                .iter()
                .map(|ext| ext.trim_start_matches('.').to_string())
                .collect();
        }
        options
    }
}

pub fn run(args: UsageArgs, global: &GlobalArgs) -> i32 {
    let ctx = match Context::load_or_exit_code(global) {
        Ok(ctx) => ctx,
        Err(code) => return code,
    };

    let result = match &args.component {
        Some(file) => ctx.checker.assert_scss_component_matches_tokens(file),
        None => ctx
            .checker
            .assert_all_scss_usages_match_tokens(&args.options(&ctx)),
    };
    ctx.report("usage", &result)
}
