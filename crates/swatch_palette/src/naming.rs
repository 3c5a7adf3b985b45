//! Canonical CSS variable naming.

use swatch_carton::{camel_to_kebab, singularize, CompactString, FxHashMap};

/// Naming rules for turning token paths into CSS variable names.
///
/// Irregular names are listed as aliases keyed by the full dotted path.
/// The default rules carry the aliases the design system has always used;
/// projects may add their own on top.
#[derive(Debug, Clone)]
pub struct NamingRules {
    aliases: FxHashMap<CompactString, CompactString>,
}

impl Default for NamingRules {
    fn default() -> Self {
        Self::empty()
            .with_alias("gridUnit", "grid-unit")
            .with_alias("typography.fontFamily", "font-family-base")
            .with_alias("typography.fontSizeBase", "font-size-base")
    }
}

impl NamingRules {
    /// Rules without any alias.
    #[inline]
    pub fn empty() -> Self {
        Self {
            aliases: FxHashMap::default(),
        }
    }

    /// Add (or replace) an alias for a dotted token path.
    #[inline]
    pub fn with_alias(mut self, path: impl Into<CompactString>, name: impl Into<CompactString>) -> Self {
        self.aliases.insert(path.into(), name.into());
        self
    }

    /// Add every alias from an iterator of `(path, name)` pairs.
    pub fn extend<P, N>(&mut self, aliases: impl IntoIterator<Item = (P, N)>)
    where
        P: Into<CompactString>,
        N: Into<CompactString>,
    {
        for (path, name) in aliases {
            self.aliases.insert(path.into(), name.into());
        }
    }

    /// Look up the alias registered for a dotted path.
    #[inline]
    pub fn alias(&self, path: &str) -> Option<&str> {
        self.aliases
            .get(path)
            .map(CompactString::as_str)
            .filter(|name| !name.is_empty())
    }

    /// Compute the CSS variable name (without leading `--`) for a leaf path.
    pub fn css_var_name<S: AsRef<str>>(&self, segments: &[S]) -> CompactString {
        let key = segments
            .iter()
            .map(AsRef::as_ref)
            .collect::<Vec<_>>()
            .join(".");
        if let Some(alias) = self.alias(&key) {
            return alias.into();
        }

        match segments {
            [] => CompactString::default(),
            [single] => camel_to_kebab(single.as_ref()).into(),
            [group, rest @ ..] => {
                let mut name = String::from(singularize(group.as_ref()));
                for segment in rest {
                    name.push('-');
                    name.push_str(&camel_to_kebab(segment.as_ref()));
                }
                name.into()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_segment() {
        let rules = NamingRules::empty();
        assert_eq!(rules.css_var_name(&["gridUnit"]), "grid-unit");
        assert_eq!(rules.css_var_name(&["zIndexModal"]), "z-index-modal");
    }

    #[test]
    fn test_group_is_singularized() {
        let rules = NamingRules::default();
        assert_eq!(rules.css_var_name(&["colors", "primary"]), "color-primary");
        assert_eq!(rules.css_var_name(&["spacing", "lg"]), "spacing-lg");
        assert_eq!(
            rules.css_var_name(&["colors", "brand", "darkBlue"]),
            "color-brand-dark-blue"
        );
    }

    #[test]
    fn test_group_is_not_kebab_cased() {
        let rules = NamingRules::empty();
        assert_eq!(rules.css_var_name(&["fontSizes", "sm"]), "fontSize-sm");
    }

    #[test]
    fn test_alias_precedence() {
        let rules = NamingRules::default();
        assert_eq!(
            rules.css_var_name(&["typography", "fontFamily"]),
            "font-family-base"
        );
        assert_eq!(
            rules.css_var_name(&["typography", "fontSizeBase"]),
            "font-size-base"
        );
        // Without the alias the generic rule would apply
        assert_eq!(
            NamingRules::empty().css_var_name(&["typography", "fontFamily"]),
            "typography-font-family"
        );
    }

    #[test]
    fn test_custom_alias() {
        let mut rules = NamingRules::default();
        rules.extend([("radii.pill", "radius-full")]);
        assert_eq!(rules.css_var_name(&["radii", "pill"]), "radius-full");
        assert_eq!(rules.alias("gridUnit"), Some("grid-unit"));
        assert_eq!(rules.alias("colors.primary"), None);
    }
}
