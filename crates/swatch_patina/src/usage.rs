//! Stylesheet usage audit: every `var()` must name a token and every
//! literal must be a token value or a safe literal.

use crate::checker::{lowercase_names, CheckSummary, TokenChecker, UsageAuditOptions};
use crate::error::{CheckResult, TokenCheckError};
use crate::normalize::{is_calc_token, is_safe_literal, is_token_reference, normalize_literal};
use ignore::WalkBuilder;
use std::path::{Path, PathBuf};
use swatch_carton::{FxHashSet, FxIndexSet};
use swatch_croquis::Stylesheet;
use swatch_palette::CanonicalMap;
use tracing::{debug, info};

impl TokenChecker {
    /// Audit explicit stylesheets, or every stylesheet under the source root.
    pub fn assert_all_scss_usages_match_tokens(
        &self,
        options: &UsageAuditOptions,
    ) -> CheckResult<CheckSummary> {
        let files = self.resolve_usage_targets(options)?;
        let map = self.canonical_map();
        let known = lowercase_names(&map);
        let token_values = token_values(&map);

        for file in &files {
            let css = self.read(file)?;
            check_stylesheet(&css, file, &known, &token_values)?;
        }

        info!(files = files.len(), "stylesheet usages match design tokens");
        Ok(CheckSummary {
            files,
            variables: map.len(),
        })
    }

    /// Audit one stylesheet. Fails with `MissingFile` before reading
    /// anything when the file does not exist.
    pub fn assert_scss_component_matches_tokens(&self, path: &Path) -> CheckResult<CheckSummary> {
        let resolved = self.resolve(path);
        if !resolved.exists() {
            return Err(TokenCheckError::MissingFile { path: resolved });
        }

        let css = self.read(&resolved)?;
        let map = self.canonical_map();
        check_stylesheet(&css, &resolved, &lowercase_names(&map), &token_values(&map))?;

        info!(file = %resolved.display(), "component stylesheet matches design tokens");
        Ok(CheckSummary {
            files: vec![resolved],
            variables: map.len(),
        })
    }

    /// The stylesheets the usage audit will read.
    ///
    /// Explicit paths that do not exist are skipped. Without explicit paths
    /// the source root is walked recursively; symlinks are not followed.
    pub fn resolve_usage_targets(&self, options: &UsageAuditOptions) -> CheckResult<Vec<PathBuf>> {
        match &options.scss_paths {
            Some(paths) => {
                let existing: FxIndexSet<PathBuf> = paths
                    .iter()
                    .map(|p| self.resolve(p))
                    .filter(|p| {
                        let exists = p.exists();
                        if !exists {
                            debug!(path = %p.display(), "skipping missing stylesheet");
                        }
                        exists
                    })
                    .collect();
                Ok(existing.into_iter().collect())
            }
            None => collect_stylesheets(&self.resolve(&options.source_root), &options.extensions),
        }
    }
}

/// Walk `root` and collect every file with one of `extensions`, sorted.
fn collect_stylesheets(root: &Path, extensions: &[String]) -> CheckResult<Vec<PathBuf>> {
    std::fs::metadata(root).map_err(|source| TokenCheckError::Io {
        path: root.to_path_buf(),
        source,
    })?;

    let mut files = Vec::new();
    let walker = WalkBuilder::new(root)
        .standard_filters(false)
        .follow_links(false)
        .build();

    for entry in walker {
        let entry = entry?;
        if !entry.file_type().is_some_and(|ft| ft.is_file()) {
            continue;
        }
        let is_stylesheet = entry
            .path()
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| extensions.iter().any(|e| e == ext));
        if is_stylesheet {
            files.push(entry.into_path());
        }
    }

    files.sort();
    debug!(root = %root.display(), count = files.len(), "collected stylesheets");
    Ok(files)
}

fn token_values(map: &CanonicalMap) -> FxHashSet<String> {
    map.values().map(normalize_literal).collect()
}

/// `known` holds the lower-cased canonical names.
fn check_stylesheet(
    css: &str,
    file: &Path,
    known: &FxHashSet<String>,
    token_values: &FxHashSet<String>,
) -> CheckResult<()> {
    debug!(file = %file.display(), "checking stylesheet");
    let sheet = Stylesheet::parse(css);

    for name in sheet.used_variables {
        if !known.contains(name.as_str()) {
            return Err(TokenCheckError::UnknownVariable {
                file: file.to_path_buf(),
                name,
            });
        }
    }

    for (property, values) in sheet.declarations {
        for value in values {
            if is_token_reference(&value) || is_calc_token(&value) {
                continue;
            }
            let normalized = normalize_literal(&value);
            if token_values.contains(&normalized) || is_safe_literal(&normalized) {
                continue;
            }
            return Err(TokenCheckError::UnlistedLiteral {
                file: file.to_path_buf(),
                property,
                value,
            });
        }
    }

    Ok(())
}
