//! Named presets: externally distributed theme bundles.
//!
//! # Preset Resolution
//!
//! Presets are resolved by name using these rules:
//!
//! 1. **Inline presets** (added via [`PresetRegistry::add_inline`] or
//!    [`PresetRegistry::add_yaml`]) have highest priority
//! 2. **Search directories** are probed in registration order (first
//!    directory wins). In each directory the candidates are, in priority
//!    order:
//!
//! | Priority | Candidate | Description |
//! |----------|-----------|-------------|
//! | 1 | `<name>.yaml` | Single-file preset |
//! | 2 | `<name>.yml` | Single-file preset |
//! | 3 | `<name>.json` | Single-file preset |
//! | 4 | `<name>/` | Every theme file below the directory, sorted |

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use super::directory::{is_theme_file, walk_files, THEME_EXTENSIONS};
use super::ThemeSource;
use crate::config::PresetSelector;
use crate::error::{Result, ThemeError};
use crate::theme::ThemeCollection;

/// Where a preset's themes come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedPreset {
    /// Registered in memory.
    Inline(ThemeCollection),
    /// A single theme file.
    File(PathBuf),
    /// A directory of theme files.
    Directory(PathBuf),
}

/// Registry resolving preset names to theme collections.
///
/// # Example
///
/// ```rust
/// use themecraft::PresetRegistry;
///
/// let mut presets = PresetRegistry::new();
/// presets
///     .add_yaml("buttons", "primary:\n  className: btn-primary\n")
///     .unwrap();
///
/// let themes = presets.load("buttons").unwrap();
/// assert!(themes.contains("primary"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct PresetRegistry {
    inline: HashMap<String, ThemeCollection>,
    search_dirs: Vec<PathBuf>,
}

impl PresetRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an in-memory preset, shadowing any same-named file preset.
    pub fn add_inline(&mut self, name: impl Into<String>, themes: ThemeCollection) {
        self.inline.insert(name.into(), themes);
    }

    /// Registers an in-memory preset from YAML (or JSON) text, such as a
    /// file embedded with `include_str!`.
    pub fn add_yaml(&mut self, name: impl Into<String>, yaml: &str) -> Result<()> {
        let name = name.into();
        let themes = ThemeCollection::from_yaml(yaml).map_err(|e| ThemeError::Parse {
            path: PathBuf::from(format!("<preset {name}>")),
            message: e.to_string(),
        })?;
        self.add_inline(name, themes);
        Ok(())
    }

    /// Adds a directory to search for file presets.
    pub fn add_search_dir(&mut self, dir: impl Into<PathBuf>) {
        self.search_dirs.push(dir.into());
    }

    /// Returns the registry with extra search directories appended.
    pub fn with_search_dirs<I>(mut self, dirs: I) -> Self
    where
        I: IntoIterator<Item = PathBuf>,
    {
        self.search_dirs.extend(dirs);
        self
    }

    /// Returns the search directories in probe order.
    pub fn search_dirs(&self) -> &[PathBuf] {
        &self.search_dirs
    }

    /// Returns the names of inline presets, sorted.
    pub fn inline_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.inline.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Finds where a preset lives.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::PresetNotFound`] when neither an inline preset
    /// nor any search directory provides the name.
    pub fn resolve(&self, name: &str) -> Result<ResolvedPreset> {
        if let Some(themes) = self.inline.get(name) {
            return Ok(ResolvedPreset::Inline(themes.clone()));
        }

        for dir in &self.search_dirs {
            for ext in THEME_EXTENSIONS {
                let candidate = dir.join(format!("{name}{ext}"));
                if candidate.is_file() {
                    return Ok(ResolvedPreset::File(candidate));
                }
            }
            let candidate = dir.join(name);
            if candidate.is_dir() {
                return Ok(ResolvedPreset::Directory(candidate));
            }
        }

        Err(ThemeError::PresetNotFound {
            name: name.to_string(),
        })
    }

    /// Loads every theme of a preset, in the preset's declaration order.
    pub fn load(&self, name: &str) -> Result<ThemeCollection> {
        match self.resolve(name)? {
            ResolvedPreset::Inline(themes) => Ok(themes),
            ResolvedPreset::File(path) => ThemeCollection::from_path(path),
            ResolvedPreset::Directory(dir) => load_directory(&dir),
        }
    }
}

fn load_directory(dir: &Path) -> Result<ThemeCollection> {
    let mut files = Vec::new();
    walk_files(dir, &mut files)?;
    files.retain(|path| is_theme_file(path));
    files.sort();

    let mut themes = ThemeCollection::new();
    for file in files {
        themes.merge(ThemeCollection::from_path(&file)?);
    }
    Ok(themes)
}

/// A preset, optionally filtered to an allow-list of theme names.
#[derive(Debug, Clone)]
pub struct NamedPresetSource<'a> {
    registry: &'a PresetRegistry,
    selector: PresetSelector,
}

impl<'a> NamedPresetSource<'a> {
    /// Creates a source loading `selector` through `registry`.
    pub fn new(registry: &'a PresetRegistry, selector: impl Into<PresetSelector>) -> Self {
        Self {
            registry,
            selector: selector.into(),
        }
    }
}

impl ThemeSource for NamedPresetSource<'_> {
    fn list(&self) -> Result<ThemeCollection> {
        let name = self.selector.name();
        let themes = self.registry.load(name)?;
        debug!(preset = name, themes = themes.len(), "loaded preset");

        let Some(allowed) = self.selector.themes() else {
            return Ok(themes);
        };
        let (selected, missing) = themes.select(allowed);
        for theme in missing {
            warn!(preset = name, theme = %theme, "preset does not define requested theme");
        }
        Ok(selected)
    }

    fn describe(&self) -> String {
        match self.selector.themes() {
            Some(themes) => format!("preset {} [{}]", self.selector.name(), themes.join(", ")),
            None => format!("preset {}", self.selector.name()),
        }
    }
}
