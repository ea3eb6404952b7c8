//! Pipeline configuration.
//!
//! A [`ThemeConfig`] names where themes come from and how selectors are
//! generated. It can be built in code or loaded from YAML/JSON:
//!
//! ```yaml
//! themes:
//!   - themes/**/*.yaml
//! presets:
//!   - buttons
//!   - name: forms
//!     themes: [input, select]
//! naming: kebab
//! presetDirs:
//!   - vendor/presets
//! ```
//!
//! `presets` also accepts a single preset name (`presets: buttons`).

use std::path::{Path, PathBuf};

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{Result, ThemeError};
use crate::name::Naming;

/// Selects themes from a named preset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PresetSelector {
    /// Every theme the preset defines.
    All(String),
    /// Only the listed themes, kept in the preset's own order.
    Subset {
        /// Preset name.
        name: String,
        /// Theme names to keep.
        themes: Vec<String>,
    },
}

impl PresetSelector {
    /// Returns the preset name.
    pub fn name(&self) -> &str {
        match self {
            PresetSelector::All(name) => name,
            PresetSelector::Subset { name, .. } => name,
        }
    }

    /// Returns the allow-list, if this selector filters.
    pub fn themes(&self) -> Option<&[String]> {
        match self {
            PresetSelector::All(_) => None,
            PresetSelector::Subset { themes, .. } => Some(themes),
        }
    }
}

impl From<&str> for PresetSelector {
    fn from(name: &str) -> Self {
        PresetSelector::All(name.to_string())
    }
}

impl From<String> for PresetSelector {
    fn from(name: String) -> Self {
        PresetSelector::All(name)
    }
}

fn presets_field<'de, D>(deserializer: D) -> std::result::Result<Vec<PresetSelector>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Presets {
        One(String),
        Many(Vec<PresetSelector>),
    }

    Ok(match Option::<Presets>::deserialize(deserializer)? {
        Some(Presets::One(name)) => vec![PresetSelector::All(name)],
        Some(Presets::Many(list)) => list,
        None => Vec::new(),
    })
}

/// Configuration for resolving and compiling themes.
///
/// # Example
///
/// ```rust
/// use themecraft::{Naming, ThemeConfig};
///
/// let config = ThemeConfig::new()
///     .theme("themes/*.yaml")
///     .preset("buttons")
///     .preset_subset("forms", ["input"])
///     .naming(Naming::Verbatim);
///
/// assert_eq!(config.presets.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ThemeConfig {
    /// Glob patterns of theme files; relative patterns are anchored at
    /// [`base_dir`](Self::base_dir).
    pub themes: Vec<String>,
    /// Presets layered on top of the theme files, left to right.
    #[serde(deserialize_with = "presets_field")]
    pub presets: Vec<PresetSelector>,
    /// Naming operation for generated selectors.
    pub naming: Naming,
    /// Extra directories searched for presets by name.
    pub preset_dirs: Vec<PathBuf>,
    /// Directory relative patterns and preset directories are resolved
    /// against. Defaults to the current directory.
    #[serde(skip)]
    pub base_dir: Option<PathBuf>,
}

impl ThemeConfig {
    /// Creates an empty configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a configuration from YAML or JSON text.
    pub fn from_yaml(yaml: &str) -> std::result::Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(yaml)
    }

    /// Reads a configuration file; its directory becomes the base directory.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ThemeError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let mut config = Self::from_yaml(&content).map_err(|e| ThemeError::Parse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        config.base_dir = path.parent().map(Path::to_path_buf);
        Ok(config)
    }

    /// Adds a theme file glob pattern.
    pub fn theme(mut self, pattern: impl Into<String>) -> Self {
        self.themes.push(pattern.into());
        self
    }

    /// Adds a preset whose themes are all loaded.
    pub fn preset(mut self, name: impl Into<String>) -> Self {
        self.presets.push(PresetSelector::All(name.into()));
        self
    }

    /// Adds a preset filtered to the listed theme names.
    pub fn preset_subset<I, S>(mut self, name: impl Into<String>, themes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.presets.push(PresetSelector::Subset {
            name: name.into(),
            themes: themes.into_iter().map(Into::into).collect(),
        });
        self
    }

    /// Sets the naming operation.
    pub fn naming(mut self, naming: Naming) -> Self {
        self.naming = naming;
        self
    }

    /// Adds a preset search directory.
    pub fn preset_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.preset_dirs.push(dir.into());
        self
    }

    /// Sets the base directory.
    pub fn base_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.base_dir = Some(dir.into());
        self
    }

    /// Returns the base directory, defaulting to the current directory.
    pub fn resolved_base_dir(&self) -> PathBuf {
        self.base_dir.clone().unwrap_or_else(|| PathBuf::from("."))
    }

    /// Returns the preset directories anchored at the base directory.
    pub fn resolved_preset_dirs(&self) -> Vec<PathBuf> {
        let base = self.resolved_base_dir();
        self.preset_dirs.iter().map(|dir| base.join(dir)).collect()
    }
}
