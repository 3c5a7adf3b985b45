//! Token tree definitions.

use crate::error::{PaletteError, PaletteResult};
use serde_json::Value;
use std::fmt;
use std::path::Path;
use swatch_carton::{CompactString, FxIndexMap};

/// A leaf value in the token tree.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenValue {
    /// String literal, kept verbatim (quotes inside are preserved).
    String(String),
    /// Numeric literal.
    Number(f64),
    /// Boolean literal.
    Bool(bool),
    /// List of scalar literals, rendered comma-joined.
    List(Vec<TokenValue>),
}

impl fmt::Display for TokenValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String(s) => f.write_str(s),
            Self::Number(n) => f.write_str(&format_number(*n)),
            Self::Bool(b) => write!(f, "{}", b),
            Self::List(items) => {
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{}", item)?;
                }
                Ok(())
            }
        }
    }
}

impl From<&str> for TokenValue {
    #[inline]
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for TokenValue {
    #[inline]
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<f64> for TokenValue {
    #[inline]
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i32> for TokenValue {
    #[inline]
    fn from(value: i32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<bool> for TokenValue {
    #[inline]
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

/// A node in the token tree: either a leaf or a nested group.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenNode {
    Leaf(TokenValue),
    Group(TokenTree),
}

/// Render a number the way JavaScript's `String(n)` does: integral values
/// without a fraction, exponent notation below `1e-6` and from `1e21` up.
fn format_number(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n.is_infinite() {
        return if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if n == 0.0 {
        // Covers -0 as well
        return "0".to_string();
    }

    let abs = n.abs();
    if (1e-6..1e21).contains(&abs) {
        return n.to_string();
    }

    let exp = format!("{:e}", n);
    match exp.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{}e+{}", mantissa, exponent)
        }
        _ => exp,
    }
}

/// Nested design token definition.
///
/// Keys keep their insertion order, so flattening visits leaves in the
/// order they were declared.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TokenTree {
    entries: FxIndexMap<CompactString, TokenNode>,
}

impl TokenTree {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a node. An existing key is replaced in place.
    pub fn insert(&mut self, key: impl Into<CompactString>, node: TokenNode) {
        self.entries.insert(key.into(), node);
    }

    /// Builder-style leaf insertion.
    #[inline]
    pub fn with_leaf(mut self, key: impl Into<CompactString>, value: impl Into<TokenValue>) -> Self {
        self.insert(key, TokenNode::Leaf(value.into()));
        self
    }

    /// Builder-style group insertion.
    #[inline]
    pub fn with_group(mut self, key: impl Into<CompactString>, group: TokenTree) -> Self {
        self.insert(key, TokenNode::Group(group));
        self
    }

    #[inline]
    pub fn get(&self, key: &str) -> Option<&TokenNode> {
        self.entries.get(key)
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (&str, &TokenNode)> {
        self.entries.iter().map(|(k, node)| (k.as_str(), node))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Parse a token tree from JSON text.
    pub fn from_json_str(source: &str) -> PaletteResult<Self> {
        let value: Value = serde_json::from_str(source)?;
        Self::from_json_value(&value)
    }

    /// Build a token tree from a JSON value. The root must be an object.
    pub fn from_json_value(value: &Value) -> PaletteResult<Self> {
        match value {
            Value::Object(_) => Self::from_object(value, ""),
            other => Err(PaletteError::NotAnObject {
                found: json_kind(other),
            }),
        }
    }

    /// Load a token tree from a JSON file.
    pub fn load(path: &Path) -> PaletteResult<Self> {
        let source = std::fs::read_to_string(path).map_err(|source| PaletteError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&source)
    }

    fn from_object(value: &Value, prefix: &str) -> PaletteResult<Self> {
        let Value::Object(map) = value else {
            return Err(PaletteError::NotAnObject {
                found: json_kind(value),
            });
        };

        let mut tree = Self::new();
        for (key, child) in map {
            let path = if prefix.is_empty() {
                key.clone()
            } else {
                format!("{}.{}", prefix, key)
            };
            let node = match child {
                Value::Object(_) => TokenNode::Group(Self::from_object(child, &path)?),
                _ => TokenNode::Leaf(leaf_from_json(child, &path)?),
            };
            tree.insert(key.as_str(), node);
        }
        Ok(tree)
    }
}

fn leaf_from_json(value: &Value, path: &str) -> PaletteResult<TokenValue> {
    match value {
        Value::String(s) => Ok(TokenValue::String(s.clone())),
        Value::Bool(b) => Ok(TokenValue::Bool(*b)),
        Value::Number(n) => n
            .as_f64()
            .map(TokenValue::Number)
            .ok_or_else(|| PaletteError::InvalidToken {
                path: path.to_string(),
                reason: "number out of range",
            }),
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::Array(_) | Value::Object(_) | Value::Null => {
                    Err(PaletteError::InvalidToken {
                        path: path.to_string(),
                        reason: "lists may only contain scalars",
                    })
                }
                scalar => leaf_from_json(scalar, path),
            })
            .collect::<PaletteResult<Vec<_>>>()
            .map(TokenValue::List),
        Value::Null => Err(PaletteError::InvalidToken {
            path: path.to_string(),
            reason: "null",
        }),
        Value::Object(_) => Err(PaletteError::InvalidToken {
            path: path.to_string(),
            reason: "object in leaf position",
        }),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// The project's design tokens.
///
/// Components, the global stylesheet and the consistency checks all derive
/// from this one definition.
pub fn default_tokens() -> TokenTree {
    TokenTree::new()
        .with_leaf("gridUnit", "8px")
        .with_group(
            "colors",
            TokenTree::new()
                .with_leaf("primary", "#1a43e8")
                .with_leaf("secondary", "#e91e63")
                .with_leaf("background", "#ffffff"),
        )
        .with_group(
            "typography",
            TokenTree::new()
                .with_leaf("fontFamily", "\"Roboto\", sans-serif")
                .with_leaf("fontSizeBase", "16px"),
        )
}
