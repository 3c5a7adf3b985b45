//! `:root` equality audit: the global stylesheet must declare every token
//! with its exact value.

use crate::checker::{
    lowercase_names, CheckSummary, RootAuditOptions, TokenChecker, DEFAULT_GLOBAL_STYLESHEET,
};
use crate::error::{CheckResult, TokenCheckError};
use crate::normalize::{normalize, NormalizeHint};
use std::path::{Path, PathBuf};
use swatch_croquis::root_variables;
use tracing::{debug, info};

impl TokenChecker {
    /// Compare the `:root` custom properties of the target stylesheet(s)
    /// against the tokens.
    ///
    /// All resolved files are concatenated before scanning, so a variable
    /// may be declared in any of them.
    pub fn assert_all_root_tokens_match_tokens_file(
        &self,
        options: &RootAuditOptions,
    ) -> CheckResult<CheckSummary> {
        let candidates: Vec<PathBuf> = match &options.css_paths {
            Some(paths) => paths.iter().map(|p| self.resolve(p)).collect(),
            None => vec![self.resolve(Path::new(DEFAULT_GLOBAL_STYLESHEET))],
        };

        let files: Vec<PathBuf> = candidates.iter().filter(|p| p.is_file()).cloned().collect();
        if files.is_empty() {
            return Err(TokenCheckError::NoStylesheetFound {
                searched: display_list(&candidates),
            });
        }

        let mut css = String::new();
        for file in &files {
            debug!(file = %file.display(), "reading root stylesheet");
            css.push_str(&self.read(file)?);
            css.push('\n');
        }

        let declared = root_variables(&css);
        let sources = display_list(&files);
        let map = self.canonical_map();

        // Declared names are lower-cased by the scanner; canonical names
        // keep the case of their token group.
        for binding in map.iter() {
            let key = binding.name.to_lowercase();
            let Some(actual) = declared.get(key.as_str()) else {
                return Err(TokenCheckError::MissingRootVariable {
                    name: binding.name.clone(),
                    files: sources,
                });
            };

            let hint = NormalizeHint::for_name(&key);
            let expected = normalize(&binding.value, hint);
            let actual = normalize(actual, hint);
            if expected != actual {
                return Err(TokenCheckError::ValueMismatch {
                    name: binding.name.clone(),
                    expected,
                    actual,
                    files: sources,
                });
            }
        }

        if options.fail_on_extra_vars {
            let known = lowercase_names(&map);
            if let Some(name) = declared.keys().find(|name| !known.contains(name.as_str())) {
                return Err(TokenCheckError::UnexpectedRootVariable {
                    name: name.clone(),
                    files: sources,
                });
            }
        }

        info!(files = files.len(), variables = map.len(), ":root matches design tokens");
        Ok(CheckSummary {
            files,
            variables: map.len(),
        })
    }
}

fn display_list(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
