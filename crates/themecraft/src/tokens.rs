//! Design-token tables and token path addressing.
//!
//! A token table is a nested document (usually the host framework's resolved
//! theme configuration) addressed by paths such as
//! `backgroundColor.blue.500`, `height[1/2]` or `fontSize['lg']`. Dots
//! separate segments; a bracketed segment is taken literally, so values that
//! contain dots or slashes can be addressed.

use std::path::Path;

use serde_json::Value;

use crate::error::{Result, ThemeError};

/// Splits a token path into its segments.
///
/// ```rust
/// use themecraft::tokens::parse_path;
///
/// assert_eq!(parse_path("backgroundColor.blue.500"), vec!["backgroundColor", "blue", "500"]);
/// assert_eq!(parse_path("height[1/2]"), vec!["height", "1/2"]);
/// assert_eq!(parse_path("spacing[0.5]"), vec!["spacing", "0.5"]);
/// ```
pub fn parse_path(path: &str) -> Vec<String> {
    let mut segments = Vec::new();
    let mut current = String::new();
    let mut chars = path.chars();

    while let Some(c) = chars.next() {
        match c {
            '.' => {
                if !current.is_empty() {
                    segments.push(std::mem::take(&mut current));
                }
            }
            '[' => {
                if !current.is_empty() {
                    segments.push(std::mem::take(&mut current));
                }
                let mut inner = String::new();
                for c in chars.by_ref() {
                    if c == ']' {
                        break;
                    }
                    inner.push(c);
                }
                segments.push(strip_quotes(&inner).to_string());
            }
            _ => current.push(c),
        }
    }

    if !current.is_empty() {
        segments.push(current);
    }
    segments
}

fn strip_quotes(segment: &str) -> &str {
    for quote in ['\'', '"'] {
        if let Some(inner) = segment
            .strip_prefix(quote)
            .and_then(|s| s.strip_suffix(quote))
        {
            return inner;
        }
    }
    segment
}

/// A nested design-token table.
///
/// # Example
///
/// ```rust
/// use themecraft::TokenTable;
/// use serde_json::json;
///
/// let tokens = TokenTable::new(json!({
///     "backgroundColor": { "blue": { "500": "#3b82f6" } },
///     "padding": { "4": "1rem" }
/// }));
///
/// assert_eq!(tokens.lookup_str("backgroundColor.blue.500"), Some("#3b82f6"));
/// assert_eq!(tokens.lookup_str("padding[4]"), Some("1rem"));
/// assert_eq!(tokens.lookup_str("padding[18rem]"), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TokenTable {
    root: Value,
}

impl TokenTable {
    /// Wraps an already parsed token document.
    pub fn new(root: Value) -> Self {
        Self { root }
    }

    /// Parses a token table from YAML or JSON text.
    pub fn from_yaml(yaml: &str) -> std::result::Result<Self, serde_yaml::Error> {
        Ok(Self::new(serde_yaml::from_str(yaml)?))
    }

    /// Reads a token table file (`.json`, `.yaml` or `.yml`).
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ThemeError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml(&content).map_err(|e| ThemeError::Parse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Returns the value addressed by `path`, if any.
    ///
    /// Object segments match keys; array segments must be numeric indices.
    pub fn lookup(&self, path: &str) -> Option<&Value> {
        parse_path(path)
            .iter()
            .try_fold(&self.root, |node, segment| match node {
                Value::Object(map) => map.get(segment),
                Value::Array(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
                _ => None,
            })
    }

    /// Returns the value at `path` when it is a string.
    pub fn lookup_str(&self, path: &str) -> Option<&str> {
        self.lookup(path).and_then(Value::as_str)
    }

    /// Returns the underlying document.
    pub fn root(&self) -> &Value {
        &self.root
    }
}
