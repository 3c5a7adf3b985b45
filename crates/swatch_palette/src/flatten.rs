//! Depth-first flattening of a token tree into canonical CSS variables.

use crate::naming::NamingRules;
use crate::tree::{TokenNode, TokenTree};
use serde::ser::{Serialize, SerializeSeq, Serializer};
use swatch_carton::{CompactString, FxIndexMap};

/// A single flattened token.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct TokenBinding {
    /// Canonical variable name without the leading `--` (e.g. "color-primary")
    pub name: CompactString,
    /// Dotted token path (e.g. "colors.primary")
    pub path: CompactString,
    /// Expected value, stringified
    pub value: String,
}

/// Mapping from canonical CSS variable name to expected value.
///
/// Iterates in token declaration order. When two leaves produce the same
/// name the later one wins but keeps the earlier position.
#[derive(Debug, Clone, Default)]
pub struct CanonicalMap {
    bindings: FxIndexMap<CompactString, TokenBinding>,
}

impl CanonicalMap {
    /// Expected value for a variable name.
    #[inline]
    pub fn value(&self, name: &str) -> Option<&str> {
        self.bindings.get(name).map(|b| b.value.as_str())
    }

    #[inline]
    pub fn get(&self, name: &str) -> Option<&TokenBinding> {
        self.bindings.get(name)
    }

    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.bindings.contains_key(name)
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &TokenBinding> {
        self.bindings.values()
    }

    #[inline]
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.bindings.keys().map(CompactString::as_str)
    }

    #[inline]
    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.bindings.values().map(|b| b.value.as_str())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    fn insert(&mut self, binding: TokenBinding) {
        self.bindings.insert(binding.name.clone(), binding);
    }
}

impl Serialize for CanonicalMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for binding in self.iter() {
            seq.serialize_element(binding)?;
        }
        seq.end()
    }
}

/// Flatten a token tree using the default naming rules.
#[inline]
pub fn flatten(tree: &TokenTree) -> CanonicalMap {
    flatten_with(tree, &NamingRules::default())
}

/// Flatten a token tree using explicit naming rules.
pub fn flatten_with(tree: &TokenTree, rules: &NamingRules) -> CanonicalMap {
    let mut out = CanonicalMap::default();
    let mut path = Vec::new();
    walk(tree, rules, &mut path, &mut out);
    out
}

fn walk<'t>(
    tree: &'t TokenTree,
    rules: &NamingRules,
    path: &mut Vec<&'t str>,
    out: &mut CanonicalMap,
) {
    for (key, node) in tree.iter() {
        path.push(key);
        match node {
            TokenNode::Group(group) => walk(group, rules, path, out),
            TokenNode::Leaf(value) => out.insert(TokenBinding {
                name: rules.css_var_name(path.as_slice()),
                path: path.join(".").into(),
                value: value.to_string(),
            }),
        }
        path.pop();
    }
}
