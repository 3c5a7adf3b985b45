//! Root command - Compare the global `:root` block against the tokens

use super::{Context, GlobalArgs};
use clap::Args;
use std::path::PathBuf;
use swatch_patina::RootAuditOptions;

#[derive(Args, Debug, Default)]
pub struct RootArgs {
    /// Stylesheets holding the `:root` block (default: src/styles.scss)
    pub paths: Vec<PathBuf>,

    /// Fail on `:root` variables that are not design tokens
    #[arg(short, long)]
    pub strict: bool,
}

impl RootArgs {
    /// Command line values layered over the config.
    pub fn options(&self, ctx: &Context) -> RootAuditOptions {
        let mut options = ctx.config.root.to_options();
        if !self.paths.is_empty() {
            options.css_paths = Some(self.paths.clone());
        }
        if self.strict {
            options = options.strict();
        }
        options
    }
}

pub fn run(args: RootArgs, global: &GlobalArgs) -> i32 {
    let ctx = match Context::load_or_exit_code(global) {
        Ok(ctx) => ctx,
        Err(code) => return code,
    };

    let result = ctx
        .checker
        .assert_all_root_tokens_match_tokens_file(&args.options(&ctx));
    ctx.report("root", &result)
}
