//! Value normalization for token comparison.

use once_cell::sync::Lazy;
use phf::{phf_set, Set};
use regex::Regex;

static TOKEN_REFERENCE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)var\(--[a-z0-9-]+\)").expect("valid var() pattern"));

static CALC_TOKEN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)calc\([^)]*var\(--[a-z0-9-]+\)[^)]*\)").expect("valid calc() pattern")
});

/// Values and properties that are structurally necessary and never need a
/// token. Compared against normalized values.
pub static SAFE_LITERALS: Set<&'static str> = phf_set! {
    "0",
    "none",
    "1px",
    "solid",
    "transparent",
    "display: inline-flex",
    "inline-flex",
    "center",
    "display",
    "flex",
};

/// How a value should be compared, derived from its variable name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NormalizeHint {
    /// `color-*` variables: hex shorthand is expanded.
    Color,
    /// The base font family: surrounding quotes are dropped.
    FontFamily,
    Generic,
}

impl NormalizeHint {
    /// Pick the hint for a canonical variable name (without `--`).
    #[inline]
    pub fn for_name(name: &str) -> Self {
        if name.starts_with("color-") {
            Self::Color
        } else if name == "font-family-base" {
            Self::FontFamily
        } else {
            Self::Generic
        }
    }
}

/// Normalize a value for comparison against a token value.
pub fn normalize(value: &str, hint: NormalizeHint) -> String {
    match hint {
        NormalizeHint::Color => expand_hex(value),
        NormalizeHint::FontFamily => strip_quotes(value).trim().to_lowercase(),
        NormalizeHint::Generic => {
            let v = value.trim().to_lowercase();
            if v.starts_with('#') {
                expand_hex(&v)
            } else {
                v
            }
        }
    }
}

/// Normalize a declared literal for lookup among token values.
///
/// Quotes are stripped first, then the value is lower-cased with hex
/// shorthand expanded.
#[inline]
pub fn normalize_literal(value: &str) -> String {
    expand_hex(strip_quotes(value))
}

/// Trim, lower-case and expand `#rgb`/`#rgba` to `#rrggbb`/`#rrggbbaa`.
///
/// Non-hex values are only trimmed and lower-cased.
pub fn expand_hex(value: &str) -> String {
    let v = value.trim().to_lowercase();
    let Some(hex) = v.strip_prefix('#') else {
        return v;
    };

    if (hex.len() == 3 || hex.len() == 4) && hex.chars().all(|c| c.is_ascii_hexdigit()) {
        let mut expanded = String::with_capacity(1 + hex.len() * 2);
        expanded.push('#');
        for c in hex.chars() {
            expanded.push(c);
            expanded.push(c);
        }
        return expanded;
    }

    v
}

/// Remove one matching pair of surrounding quotes.
///
/// Straight (`"`, `'`) and curly (`“”`, `‘’`) quotes are recognized.
pub fn strip_quotes(value: &str) -> &str {
    const PAIRS: [(char, char); 4] = [
        ('"', '"'),
        ('\'', '\''),
        ('\u{201C}', '\u{201D}'),
        ('\u{2018}', '\u{2019}'),
    ];

    let t = value.trim();
    for (open, close) in PAIRS {
        if let Some(inner) = t.strip_prefix(open).and_then(|rest| rest.strip_suffix(close)) {
            return inner;
        }
    }
    t
}

/// Whether a value references a token through `var(--name)`.
#[inline]
pub fn is_token_reference(value: &str) -> bool {
    TOKEN_REFERENCE.is_match(value)
}

/// Whether a value is a `calc()` expression built on a token reference.
#[inline]
pub fn is_calc_token(value: &str) -> bool {
    CALC_TOKEN.is_match(value)
}

/// Whether a normalized value is exempt from token matching.
#[inline]
pub fn is_safe_literal(normalized: &str) -> bool {
    SAFE_LITERALS.contains(normalized)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_hex() {
        assert_eq!(expand_hex("#FFF"), "#ffffff");
        assert_eq!(expand_hex(" #abc "), "#aabbcc");
        assert_eq!(expand_hex("#abcd"), "#aabbccdd");
        assert_eq!(expand_hex("#1A43E8"), "#1a43e8");
        assert_eq!(expand_hex("#12345"), "#12345");
        assert_eq!(expand_hex("#xyz"), "#xyz");
        assert_eq!(expand_hex("Red"), "red");
    }

    #[test]
    fn test_strip_quotes() {
        assert_eq!(strip_quotes("\"Roboto\""), "Roboto");
        assert_eq!(strip_quotes(" 'Roboto' "), "Roboto");
        assert_eq!(strip_quotes("\u{201C}Roboto\u{201D}"), "Roboto");
        assert_eq!(strip_quotes("\u{2018}Roboto\u{2019}"), "Roboto");
        assert_eq!(strip_quotes("\"Roboto'"), "\"Roboto'");
        assert_eq!(strip_quotes("\"Roboto\", sans-serif"), "\"Roboto\", sans-serif");
        assert_eq!(strip_quotes("\""), "\"");
    }

    #[test]
    fn test_normalize_hints() {
        assert_eq!(NormalizeHint::for_name("color-primary"), NormalizeHint::Color);
        assert_eq!(NormalizeHint::for_name("font-family-base"), NormalizeHint::FontFamily);
        assert_eq!(NormalizeHint::for_name("grid-unit"), NormalizeHint::Generic);

        assert_eq!(normalize("#FFF", NormalizeHint::Color), normalize("#ffffff", NormalizeHint::Color));
        assert_eq!(normalize("'Inter'", NormalizeHint::FontFamily), "inter");
        assert_eq!(normalize(" 8PX ", NormalizeHint::Generic), "8px");
        assert_eq!(normalize("#Abc", NormalizeHint::Generic), "#aabbcc");
    }

    #[test]
    fn test_normalize_literal() {
        assert_eq!(normalize_literal("\"#FFF\""), "#ffffff");
        assert_eq!(normalize_literal("Flex"), "flex");
        assert_eq!(normalize_literal("\"Roboto\", sans-serif"), "\"roboto\", sans-serif");
    }

    #[test]
    fn test_token_references() {
        assert!(is_token_reference("var(--color-primary)"));
        assert!(is_token_reference("1px solid VAR(--Color-Primary)"));
        assert!(!is_token_reference("var(--color-primary, red)"));
        assert!(!is_token_reference("#fff"));

        assert!(is_calc_token("calc(var(--grid-unit) * 2)"));
        assert!(is_calc_token("calc(100% - var(--grid-unit))"));
        assert!(!is_calc_token("calc(100% - 8px)"));
    }

    #[test]
    fn test_safe_literals() {
        for value in ["0", "none", "flex", "center", "transparent", "display: inline-flex"] {
            assert!(is_safe_literal(value), "{value} should be safe");
        }
        assert!(!is_safe_literal("block"));
        assert!(!is_safe_literal("Flex"));
    }
}
