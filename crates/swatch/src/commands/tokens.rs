//! Tokens command - Print the canonical CSS variable mapping

use super::{Context, GlobalArgs, EXIT_OK};
use swatch_palette::CanonicalMap;

pub fn run(global: &GlobalArgs) -> i32 {
    let ctx = match Context::load_or_exit_code(global) {
        Ok(ctx) => ctx,
        Err(code) => return code,
    };

    let map = ctx.checker.canonical_map();
    print!("{}", render(&map, &global.format));
    EXIT_OK
}

/// Render the mapping as `text`, `json` or `css`.
pub fn render(map: &CanonicalMap, format: &str) -> String {
    match format {
        "json" => serde_json::to_string_pretty(map).unwrap_or_default() + "\n",
        "css" => map.to_root_block(),
        _ => {
            let width = map.iter().map(|b| b.name.len()).max().unwrap_or(0) + 2;
            let mut out = String::new();
            for binding in map.iter() {
                out.push_str(&format!(
                    "--{:<width$} {:<24} {}\n",
                    binding.name.as_str(),
                    binding.value,
                    binding.path,
                    width = width
                ));
            }
            out
        }
    }
}
