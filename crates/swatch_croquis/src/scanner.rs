//! Regex-driven stylesheet scanning.

use once_cell::sync::Lazy;
use regex::Regex;
use swatch_carton::{CompactString, FxIndexMap, FxIndexSet};

/// `var(--name)` or `var(--name, fallback)`
static VAR_USAGE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)var\(\s*--([a-z0-9-]+)\s*(?:,[^)]+)?\)").expect("valid var() pattern")
});

/// Rule block body up to the first closing brace.
static BLOCK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)\{(.*?)\}").expect("valid block pattern"));

/// `property: value;`
static DECLARATION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)([a-z-]+)\s*:\s*([^;]+);").expect("valid declaration pattern")
});

/// Innermost block together with the selector text in front of it.
static SELECTOR_BLOCK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([^{}]*)\{([^{}]*)\}").expect("valid selector block pattern"));

/// `--name: value;`
static CUSTOM_PROPERTY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)--([a-z0-9_-]+)\s*:\s*([^;]+);").expect("valid custom property pattern")
});

static BLOCK_COMMENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)/\*.*?\*/").expect("valid comment pattern"));

/// SCSS `// ...` comment running to the end of the line.
static LINE_COMMENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)//.*$").expect("valid line comment pattern"));

/// Property name -> distinct raw values, both in first-seen order.
pub type Declarations = FxIndexMap<CompactString, FxIndexSet<String>>;

/// Custom property name (lower-cased, no `--`) -> declared raw value.
pub type RootVariables = FxIndexMap<CompactString, String>;

/// Collect every custom property referenced through `var()`.
///
/// Names are lower-cased and stripped of the leading `--`.
pub fn used_variables(css: &str) -> FxIndexSet<CompactString> {
    VAR_USAGE
        .captures_iter(css)
        .map(|caps| CompactString::from(caps[1].to_lowercase()))
        .collect()
}

/// Collect `property: value;` pairs from every rule block.
///
/// Property names are lower-cased; values are trimmed but otherwise kept
/// verbatim.
pub fn declarations(css: &str) -> Declarations {
    let mut decls = Declarations::default();
    for block in BLOCK.captures_iter(css) {
        for decl in DECLARATION.captures_iter(&block[1]) {
            let property = CompactString::from(decl[1].to_lowercase());
            let value = decl[2].trim().to_string();
            decls.entry(property).or_default().insert(value);
        }
    }
    decls
}

/// Collect custom properties declared in blocks whose selector is exactly
/// `:root`.
///
/// When a variable is declared more than once the last value wins.
pub fn root_variables(css: &str) -> RootVariables {
    let mut vars = RootVariables::default();
    for block in SELECTOR_BLOCK.captures_iter(css) {
        if !is_root_selector(&block[1]) {
            continue;
        }
        for decl in CUSTOM_PROPERTY.captures_iter(&block[2]) {
            vars.insert(
                CompactString::from(decl[1].to_lowercase()),
                decl[2].trim().to_string(),
            );
        }
    }
    vars
}

/// Whether the text in front of a block selects `:root` alone.
///
/// Block and line comments are ignored, and anything up to the last `;`
/// belongs to a preceding statement such as `@use`. Line comments are
/// stripped after that cut so `@import url(//host/...);` stays intact.
fn is_root_selector(prelude: &str) -> bool {
    let prelude = BLOCK_COMMENT.replace_all(prelude, "");
    let selector = prelude.rsplit(';').next().unwrap_or_default();
    LINE_COMMENT.replace_all(selector, "").trim() == ":root"
}

/// The three scanned views of one stylesheet.
#[derive(Debug, Clone, Default)]
pub struct Stylesheet {
    pub used_variables: FxIndexSet<CompactString>,
    pub declarations: Declarations,
    pub root_variables: RootVariables,
}

impl Stylesheet {
    /// Scan stylesheet text.
    pub fn parse(css: &str) -> Self {
        Self {
            used_variables: used_variables(css),
            declarations: declarations(css),
            root_variables: root_variables(css),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values<'a>(decls: &'a Declarations, property: &str) -> Vec<&'a str> {
        decls
            .get(property)
            .map(|set| set.iter().map(String::as_str).collect())
            .unwrap_or_default()
    }

    #[test]
    fn test_used_variables() {
        let css = r#"
.btn {
  color: var(--Color-Primary);
  padding: calc(var(--grid-unit) * 2);
  margin: var( --grid-unit , 8px);
  font: var(--font-size-base) var(--font-family-base);
}
"#;
        let used: Vec<_> = used_variables(css).into_iter().collect();
        assert_eq!(
            used,
            ["color-primary", "grid-unit", "font-size-base", "font-family-base"]
        );
    }

    #[test]
    fn test_used_variables_ignores_non_var() {
        let used = used_variables(".a { --local: 1px; width: env(--x); }");
        assert!(used.is_empty());
    }

    #[test]
    fn test_declarations() {
        let css = r#"
.btn { Color: #FFF; background: var(--color-primary); }
.card { color: #FFF; color: red; border: 1px solid #ccc; }
"#;
        let decls = declarations(css);
        assert_eq!(values(&decls, "color"), ["#FFF", "red"]);
        assert_eq!(values(&decls, "background"), ["var(--color-primary)"]);
        assert_eq!(values(&decls, "border"), ["1px solid #ccc"]);
        assert_eq!(decls.keys().map(CompactString::as_str).collect::<Vec<_>>(), ["color", "background", "border"]);
    }

    #[test]
    fn test_declarations_include_custom_properties() {
        let decls = declarations(":root { --color-primary: #1a43e8; }");
        assert_eq!(values(&decls, "--color-primary"), ["#1a43e8"]);
    }

    #[test]
    fn test_declarations_nested_block_ends_at_first_brace() {
        let css = "@media (min-width: 600px) { .a { color: red; } width: 10px; }";
        let decls = declarations(css);
        // The outer block closes at the inner `}` and `width` is never seen
        assert_eq!(values(&decls, "color"), ["red"]);
        assert!(decls.get("width").is_none());
    }

    #[test]
    fn test_root_variables() {
        let css = r#"
@use 'sass:math';
/* design tokens */
:root {
  --Color-Primary: #1A43E8;
  --font-family-base: "Roboto", sans-serif;
}
.btn { --color-primary: red; }
"#;
        let vars = root_variables(css);
        assert_eq!(vars.len(), 2);
        assert_eq!(vars.get("color-primary").map(String::as_str), Some("#1A43E8"));
        assert_eq!(
            vars.get("font-family-base").map(String::as_str),
            Some("\"Roboto\", sans-serif")
        );
    }

    #[test]
    fn test_root_variables_last_write_wins() {
        let css = ":root { --a: 1px; }\n:root { --a: 2px; --b: 3px; }";
        let vars = root_variables(css);
        assert_eq!(vars.get("a").map(String::as_str), Some("2px"));
        assert_eq!(vars.keys().map(CompactString::as_str).collect::<Vec<_>>(), ["a", "b"]);
    }

    #[test]
    fn test_root_variables_after_line_comments() {
        let css = r#"@import url(//fonts.example.com/roboto.css);
// Design tokens
// keep in sync with the token file
:root { // inline note
  --grid-unit: 8px;
}
"#;
        let vars = root_variables(css);
        assert_eq!(vars.get("grid-unit").map(String::as_str), Some("8px"));
    }

    #[test]
    fn test_line_comment_does_not_hide_other_selectors() {
        let css = "// :root
.theme { --a: 1px; }";
        assert!(root_variables(css).is_empty());
    }

    #[test]
    fn test_root_variables_requires_exact_selector() {
        let css = "html:root { --a: 1; }\n:root.dark { --b: 2; }\n.x, :root { --c: 3; }";
        assert!(root_variables(css).is_empty());
    }

    #[test]
    fn test_stylesheet_parse() {
        let sheet = Stylesheet::parse(":root { --grid-unit: 8px; }\n.a { margin: var(--grid-unit); }");
        assert!(sheet.used_variables.contains("grid-unit"));
        assert_eq!(values(&sheet.declarations, "margin"), ["var(--grid-unit)"]);
        assert_eq!(sheet.root_variables.get("grid-unit").map(String::as_str), Some("8px"));
    }
}
