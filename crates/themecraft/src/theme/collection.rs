//! Ordered theme collections and their merge rules.

use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::definition::ThemeDefinition;
use crate::error::{Result, ThemeError};

/// Ordered mapping from theme name to [`ThemeDefinition`].
///
/// Names are unique. Merging follows "last writer wins": a later source
/// replaces the definition of a same-named theme, while the entry keeps the
/// position where the name was first seen. This keeps downstream selector
/// order stable no matter which source supplied the final definition.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ThemeCollection {
    themes: IndexMap<String, ThemeDefinition>,
}

impl ThemeCollection {
    /// Creates an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a collection from YAML (or JSON) text: a mapping of theme
    /// name to definition.
    pub fn from_yaml(yaml: &str) -> std::result::Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(yaml)
    }

    /// Reads and parses a theme file.
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

    /// Adds a theme, returning an updated collection for chaining.
    pub fn add(mut self, name: impl Into<String>, theme: ThemeDefinition) -> Self {
        self.insert(name, theme);
        self
    }

    /// Inserts a theme, replacing any same-named definition in place.
    pub fn insert(&mut self, name: impl Into<String>, theme: ThemeDefinition) {
        self.themes.insert(name.into(), theme);
    }

    /// Layers `other` on top of this collection.
    pub fn merge(&mut self, other: ThemeCollection) {
        for (name, theme) in other.themes {
            self.themes.insert(name, theme);
        }
    }

    /// Keeps only the listed theme names, in this collection's own order.
    ///
    /// Returns the filtered collection and the requested names that were not
    /// present.
    pub fn select<S: AsRef<str>>(mut self, names: &[S]) -> (Self, Vec<String>) {
        let missing = names
            .iter()
            .map(AsRef::as_ref)
            .filter(|name| !self.themes.contains_key(*name))
            .map(str::to_string)
            .collect();
        self.themes
            .retain(|name, _| names.iter().any(|wanted| wanted.as_ref() == name.as_str()));
        (self, missing)
    }

    /// Looks up a theme by name.
    pub fn get(&self, name: &str) -> Option<&ThemeDefinition> {
        self.themes.get(name)
    }

    /// Returns true if a theme with this name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.themes.contains_key(name)
    }

    /// Iterates over `(name, definition)` pairs in collection order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ThemeDefinition)> {
        self.themes.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Iterates over theme names in collection order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.themes.keys().map(String::as_str)
    }

    /// Returns the number of themes.
    pub fn len(&self) -> usize {
        self.themes.len()
    }

    /// Returns true if the collection holds no themes.
    pub fn is_empty(&self) -> bool {
        self.themes.is_empty()
    }
}

impl FromIterator<(String, ThemeDefinition)> for ThemeCollection {
    fn from_iter<I: IntoIterator<Item = (String, ThemeDefinition)>>(iter: I) -> Self {
        Self {
            themes: iter.into_iter().collect(),
        }
    }
}
