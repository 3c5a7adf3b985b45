//! Identifier case conversion.

/// Convert a camelCase (or snake/space separated) identifier to kebab-case.
///
/// A hyphen is inserted between an ASCII lowercase letter or digit and a
/// following ASCII uppercase letter. Runs of underscores and whitespace
/// collapse into a single hyphen. The result is lower-cased.
///
/// Example: "fontSizeBase" -> "font-size-base"
pub fn camel_to_kebab(name: &str) -> String {
    let mut result = String::with_capacity(name.len() + 4);
    let mut prev: Option<char> = None;
    let mut in_separator = false;

    for ch in name.chars() {
        if ch == '_' || ch.is_whitespace() {
            if !in_separator {
                result.push('-');
                in_separator = true;
            }
            prev = Some(ch);
            continue;
        }
        in_separator = false;

        if ch.is_ascii_uppercase()
            && prev.is_some_and(|p| p.is_ascii_lowercase() || p.is_ascii_digit())
        {
            result.push('-');
        }
        result.extend(ch.to_lowercase());
        prev = Some(ch);
    }

    result
}

/// Reduce a group name to its singular form by stripping one trailing `s`.
///
/// Example: "colors" -> "color", "typography" -> "typography"
#[inline]
pub fn singularize(name: &str) -> &str {
    name.strip_suffix('s').unwrap_or(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_camel_to_kebab() {
        assert_eq!(camel_to_kebab("primary"), "primary");
        assert_eq!(camel_to_kebab("gridUnit"), "grid-unit");
        assert_eq!(camel_to_kebab("fontSizeBase"), "font-size-base");
        assert_eq!(camel_to_kebab("space2Xl"), "space2-xl");
    }

    #[test]
    fn test_camel_to_kebab_uppercase_runs() {
        // Only a lowercase/digit -> uppercase boundary gets a hyphen
        assert_eq!(camel_to_kebab("borderRGB"), "border-rgb");
        assert_eq!(camel_to_kebab("URLPath"), "urlpath");
    }

    #[test]
    fn test_camel_to_kebab_separators() {
        assert_eq!(camel_to_kebab("line_height"), "line-height");
        assert_eq!(camel_to_kebab("line__height"), "line-height");
        assert_eq!(camel_to_kebab("line height"), "line-height");
        assert_eq!(camel_to_kebab("line _ height"), "line-height");
    }

    #[test]
    fn test_singularize() {
        assert_eq!(singularize("colors"), "color");
        assert_eq!(singularize("typography"), "typography");
        assert_eq!(singularize("radius"), "radiu");
        assert_eq!(singularize("ss"), "s");
        assert_eq!(singularize(""), "");
    }
}
