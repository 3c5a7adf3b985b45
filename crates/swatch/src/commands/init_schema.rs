//! Init-schema command - Write the config JSON Schema for editors

use super::{EXIT_CONFIG, EXIT_OK};
use clap::Args;
use std::path::PathBuf;
use swatch::config::{write_schema, SCHEMA_FILE_NAME};

#[derive(Args, Debug, Default)]
pub struct InitSchemaArgs {
    /// Output path (default: ./swatch.config.schema.json)
    #[arg(short, long)]
    pub out: Option<PathBuf>,
}

pub fn run(args: InitSchemaArgs) -> i32 {
    let path = args.out.unwrap_or_else(|| PathBuf::from(SCHEMA_FILE_NAME));
    match write_schema(&path) {
        Ok(()) => {
            println!("Wrote {}", path.display());
            EXIT_OK
        }
        Err(e) => {
            eprintln!("Failed to write {}: {}", path.display(), e);
            EXIT_CONFIG
        }
    }
}
