//! Check command - Run the usage and `:root` audits with config defaults

use super::{exit_code, Context, GlobalArgs, EXIT_OK};
use swatch_patina::{format_report, format_summary, CheckReport, OutputFormat};

pub fn run(global: &GlobalArgs) -> i32 {
    let ctx = match Context::load_or_exit_code(global) {
        Ok(ctx) => ctx,
        Err(code) => return code,
    };

    let usage = ctx
        .checker
        .assert_all_scss_usages_match_tokens(&ctx.config.usage.to_options());
    let root = ctx
        .checker
        .assert_all_root_tokens_match_tokens_file(&ctx.config.root.to_options());

    let reports = [
        CheckReport::from_result("usage", &usage),
        CheckReport::from_result("root", &root),
    ];
    let failed = reports.iter().filter(|r| !r.ok).count();

    match ctx.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&reports).unwrap_or_default());
        }
        OutputFormat::Text => {
            for report in reports.iter().filter(|r| !(ctx.quiet && r.ok)) {
                println!("{}", format_report(report, OutputFormat::Text));
            }
            if !ctx.quiet || failed > 0 {
                println!("\n{}", format_summary(reports.len() - failed, failed));
            }
        }
    }

    // The most severe code wins: config problems over violations.
    [exit_code(&usage), exit_code(&root)]
        .into_iter()
        .max()
        .unwrap_or(EXIT_OK)
}
