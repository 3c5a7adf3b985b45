//! # swatch
//!
//! Swatch - Design token consistency checks for stylesheets.
//!
//! ## Name Origin
//!
//! A **swatch** is the small sample card a designer holds against the
//! finished piece to see whether the colors still match. `swatch` does the
//! same for stylesheets: it holds the design tokens against every
//! component stylesheet and the global `:root` block.

mod commands;

use clap::{Parser, Subcommand};
use commands::GlobalArgs;

#[derive(Parser)]
#[command(name = "swatch")]
#[command(about = "Design token consistency checks for stylesheets", long_about = None)]
#[command(version)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Audit stylesheets for unknown variables and hardcoded values
    #[command(visible_alias = "patina")]
    Usage(commands::usage::UsageArgs),

    /// Compare the global `:root` block against the tokens
    Root(commands::root::RootArgs),

    /// Print the canonical CSS variable mapping
    #[command(visible_alias = "palette")]
    Tokens,

    /// Run the usage and `:root` audits (default command)
    Check,

    /// Write the config JSON Schema for editor autocompletion
    InitSchema(commands::init_schema::InitSchemaArgs),
}

fn main() {
    let cli = Cli::parse();
    swatch::logging::init(cli.global.verbose);

    let code = match cli.command {
        Some(Commands::Usage(args)) => commands::usage::run(args, &cli.global),
        Some(Commands::Root(args)) => commands::root::run(args, &cli.global),
        Some(Commands::Tokens) => commands::tokens::run(&cli.global),
        Some(Commands::InitSchema(args)) => commands::init_schema::run(args),
        Some(Commands::Check) | None => commands::check::run(&cli.global),
    };
    std::process::exit(code);
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use std::path::PathBuf;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_usage() {
        let cli = Cli::parse_from([
            "swatch", "usage", "a.scss", "b.scss", "--ext", "css", "-f", "json",
        ]);
        assert_eq!(cli.global.format, "json");
        match cli.command {
            Some(Commands::Usage(args)) => {
                assert_eq!(args.paths, [PathBuf::from("a.scss"), PathBuf::from("b.scss")]);
                assert_eq!(args.extensions, ["css"]);
            }
            _ => panic!("expected usage command"),
        }
    }

    #[test]
    fn test_parse_aliases_and_globals() {
        let cli = Cli::parse_from(["swatch", "--tokens", "t.json", "patina", "--component", "x.scss"]);
        assert_eq!(cli.global.tokens, Some(PathBuf::from("t.json")));
        assert!(matches!(cli.command, Some(Commands::Usage(ref a)) if a.component.is_some()));

        let cli = Cli::parse_from(["swatch", "root", "--strict", "-q"]);
        assert!(cli.global.quiet);
        assert!(matches!(cli.command, Some(Commands::Root(ref a)) if a.strict));

        let cli = Cli::parse_from(["swatch"]);
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_component_conflicts_with_paths() {
        assert!(Cli::try_parse_from(["swatch", "usage", "a.scss", "--component", "b.scss"]).is_err());
    }
}
