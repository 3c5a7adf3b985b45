//! Stylesheet generation from flattened tokens.

use crate::flatten::CanonicalMap;

impl CanonicalMap {
    /// Render a `:root` block declaring every token as a custom property.
    ///
    /// The output is what the global stylesheet is expected to contain, so
    /// it passes the root equality check by construction.
    pub fn to_root_block(&self) -> String {
        let mut css = String::with_capacity(16 + self.len() * 32);
        css.push_str(":root {\n");
        for binding in self.iter() {
            css.push_str("  --");
            css.push_str(&binding.name);
            css.push_str(": ");
            css.push_str(&binding.value);
            css.push_str(";\n");
        }
        css.push_str("}\n");
        css
    }
}

#[cfg(test)]
mod tests {
    use crate::{flatten, TokenTree};

    #[test]
    fn test_empty_root_block() {
        assert_eq!(flatten(&TokenTree::new()).to_root_block(), ":root {\n}\n");
    }

    #[test]
    fn test_root_block_keeps_quotes() {
        let tree = TokenTree::new().with_group(
            "typography",
            TokenTree::new().with_leaf("fontFamily", "'Inter', sans-serif"),
        );
        assert_eq!(
            flatten(&tree).to_root_block(),
            ":root {\n  --font-family-base: 'Inter', sans-serif;\n}\n"
        );
    }
}
