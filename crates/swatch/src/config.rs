//! Configuration file loading for swatch.
//!
//! Reads `swatch.config.json` from the current working directory, or from
//! an explicit path. Also provides the JSON Schema for editor
//! autocompletion.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use swatch_patina::{RootAuditOptions, UsageAuditOptions};

/// Default config file name.
pub const CONFIG_FILE_NAME: &str = "swatch.config.json";

/// Default schema file name written by `swatch init-schema`.
pub const SCHEMA_FILE_NAME: &str = "swatch.config.schema.json";

/// Top-level swatch configuration.
#[derive(Debug, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SwatchConfig {
    /// JSON Schema reference (for editor autocompletion).
    #[serde(rename = "$schema", default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    /// JSON token file. The built-in tokens are used when omitted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tokens: Option<PathBuf>,

    /// Extra variable name aliases keyed by dotted token path
    /// (e.g. `{"spacing.md": "space-medium"}`).
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub aliases: BTreeMap<String, String>,

    /// Stylesheet usage audit settings.
    #[serde(default)]
    pub usage: UsageConfig,

    /// `:root` equality audit settings.
    #[serde(default)]
    pub root: RootConfig,
}

/// Configuration for the `usage` check.
#[derive(Debug, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageConfig {
    /// Stylesheets to audit instead of walking `sourceRoot`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scss_paths: Option<Vec<PathBuf>>,

    /// Directory walked for stylesheets (default: `src`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_root: Option<PathBuf>,

    /// File extensions treated as stylesheets (default: `["scss"]`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extensions: Option<Vec<String>>,
}

/// Configuration for the `root` check.
#[derive(Debug, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RootConfig {
    /// Stylesheets holding the `:root` block (default: `src/styles.scss`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub css_paths: Option<Vec<PathBuf>>,

    /// Reject `:root` variables that are not design tokens.
    #[serde(default)]
    pub fail_on_extra_vars: bool,
}

impl UsageConfig {
    /// Audit options with config values applied over the defaults.
    pub fn to_options(&self) -> UsageAuditOptions {
        let mut options = UsageAuditOptions::default();
        if let Some(paths) = &self.scss_paths {
            options.scss_paths = Some(paths.clone());
        }
        if let Some(root) = &self.source_root {
            options.source_root = root.clone();
        }
        if let Some(extensions) = &self.extensions {
            options.extensions = extensions.clone();
        }
        options
    }
}

impl RootConfig {
    /// Audit options with config values applied over the defaults.
    pub fn to_options(&self) -> RootAuditOptions {
        RootAuditOptions {
            css_paths: self.css_paths.clone(),
            fail_on_extra_vars: self.fail_on_extra_vars,
        }
    }
}

/// Load the configuration.
///
/// With an explicit path, that file is read and a missing file is reported.
/// Otherwise `swatch.config.json` in `dir` (or CWD if None) is used when
/// present. Unreadable or invalid files fall back to the defaults with a
/// warning.
pub fn load_config(explicit: Option<&Path>, dir: Option<&Path>) -> SwatchConfig {
    let config_path = match explicit {
        Some(path) => path.to_path_buf(),
        None => {
            let base = dir
                .map(|d| d.to_path_buf())
                .unwrap_or_else(|| std::env::current_dir().unwrap_or_default());
            let path = base.join(CONFIG_FILE_NAME);
            if !path.exists() {
                return SwatchConfig::default();
            }
            path
        }
    };

    match std::fs::read_to_string(&config_path) {
        Ok(content) => match serde_json::from_str(&content) {
            Ok(config) => {
                tracing::debug!(path = %config_path.display(), "loaded config");
                config
            }
            Err(e) => {
                tracing::warn!("Failed to parse {}: {}", config_path.display(), e);
                SwatchConfig::default()
            }
        },
        Err(e) => {
            tracing::warn!("Failed to read {}: {}", config_path.display(), e);
            SwatchConfig::default()
        }
    }
}

/// JSON Schema for `swatch.config.json`.
pub const SWATCH_CONFIG_SCHEMA: &str = r#"{
  "$schema": "http://json-schema.org/draft-07/schema#",
  "title": "Swatch Configuration",
  "description": "Configuration file for swatch - design token consistency checks",
  "type": "object",
  "properties": {
    "$schema": {
      "type": "string",
      "description": "JSON Schema reference for editor autocompletion"
    },
    "tokens": {
      "type": "string",
      "description": "Path to a JSON design token file. Built-in tokens are used when omitted."
    },
    "aliases": {
      "type": "object",
      "description": "CSS variable name overrides keyed by dotted token path.",
      "additionalProperties": { "type": "string" },
      "examples": [{ "typography.fontFamily": "font-family-base" }]
    },
    "usage": {
      "type": "object",
      "description": "Stylesheet usage audit",
      "properties": {
        "scssPaths": {
          "type": "array",
          "description": "Stylesheets to audit instead of walking sourceRoot",
          "items": { "type": "string" }
        },
        "sourceRoot": {
          "type": "string",
          "description": "Directory walked for stylesheets",
          "default": "src"
        },
        "extensions": {
          "type": "array",
          "description": "File extensions treated as stylesheets",
          "items": { "type": "string" },
          "default": ["scss"]
        }
      },
      "additionalProperties": false
    },
    "root": {
      "type": "object",
      "description": ":root equality audit",
      "properties": {
        "cssPaths": {
          "type": "array",
          "description": "Stylesheets holding the :root block",
          "items": { "type": "string" },
          "default": ["src/styles.scss"]
        },
        "failOnExtraVars": {
          "type": "boolean",
          "description": "Reject :root variables that are not design tokens",
          "default": false
        }
      },
      "additionalProperties": false
    }
  },
  "additionalProperties": false
}"#;

/// Write the JSON Schema to `path`.
pub fn write_schema(path: &Path) -> std::io::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, SWATCH_CONFIG_SCHEMA)
}
