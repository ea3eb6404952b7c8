//! Theme definition struct with a fluent builder API.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::scalar;

/// Ordered mapping from abstract style property (`paddingTop`) to its raw
/// value, either a design-token reference (`4`, `blue-500`) or literal CSS
/// (`20px`).
pub type StyleMap = IndexMap<String, String>;

/// A named bundle of base styles plus zero or more modifier style maps.
///
/// `class_name` is a free-form label; it may contain spaces, mixed case or a
/// leading `.`. The name generator turns it into a canonical selector.
///
/// # Example
///
/// ```rust
/// use themecraft::ThemeDefinition;
///
/// let theme = ThemeDefinition::new("Primary Button")
///     .style("backgroundColor", "blue-500")
///     .style("paddingX", "4")
///     .modifier("hover", [("backgroundColor", "blue-700")]);
///
/// assert_eq!(theme.modifiers.as_ref().map(|m| m.len()), Some(1));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeDefinition {
    /// Human-authored class identifier.
    pub class_name: String,
    /// Base style map; compiled to the unsuffixed selector.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "scalar::optional_style_map"
    )]
    pub styles: Option<StyleMap>,
    /// Modifier name to style map; each compiles to a `--modifier` selector.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "scalar::optional_modifiers"
    )]
    pub modifiers: Option<IndexMap<String, StyleMap>>,
}

impl ThemeDefinition {
    /// Creates a definition with no styles and no modifiers.
    pub fn new(class_name: impl Into<String>) -> Self {
        Self {
            class_name: class_name.into(),
            styles: None,
            modifiers: None,
        }
    }

    /// Adds a base style entry, returning the updated definition for chaining.
    pub fn style(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
        self.styles
            .get_or_insert_with(StyleMap::new)
            .insert(property.into(), value.into());
        self
    }

    /// Adds (or replaces) a named modifier style map.
    pub fn modifier<I, K, V>(mut self, name: impl Into<String>, styles: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let map = styles
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        self.modifiers
            .get_or_insert_with(IndexMap::new)
            .insert(name.into(), map);
        self
    }

    /// Returns true when the definition has neither styles nor modifiers.
    pub fn is_empty(&self) -> bool {
        self.styles.is_none() && self.modifiers.is_none()
    }
}
