//! Theme source resolution.
//!
//! Themes come from two kinds of [`ThemeSource`]:
//!
//! - [`DirectorySource`]: theme files matched by glob patterns
//! - [`NamedPresetSource`]: a named preset, optionally filtered
//!
//! [`resolve`] folds the sources a [`ThemeConfig`] describes into one
//! [`ThemeCollection`]: theme files first, then presets left to right.
//! Later sources overwrite same-named themes, so presets win over user
//! themes.

mod directory;
mod preset;

pub use directory::{expand_pattern, DirectorySource, THEME_EXTENSIONS};
pub use preset::{NamedPresetSource, PresetRegistry, ResolvedPreset};

use tracing::debug;

use crate::config::ThemeConfig;
use crate::error::{Result, ThemeError};
use crate::theme::ThemeCollection;

/// A provider of theme definitions.
pub trait ThemeSource {
    /// Loads this source's themes in declaration order.
    fn list(&self) -> Result<ThemeCollection>;

    /// Short human-readable description, used in logs.
    fn describe(&self) -> String;
}

/// Folds sources left to right into one collection.
///
/// # Errors
///
/// Propagates the first source error, and returns
/// [`ThemeError::NoThemesResolved`] if the merged collection is empty.
pub fn resolve_sources(sources: &[&dyn ThemeSource]) -> Result<ThemeCollection> {
    let themes = sources
        .iter()
        .try_fold(ThemeCollection::new(), |mut themes, source| {
            let loaded = source.list()?;
            debug!(source = %source.describe(), themes = loaded.len(), "resolved source");
            themes.merge(loaded);
            Ok::<_, ThemeError>(themes)
        })?;

    if themes.is_empty() {
        return Err(ThemeError::NoThemesResolved);
    }
    Ok(themes)
}

/// Resolves the themes a configuration describes.
///
/// The configuration's preset directories are searched after the
/// registry's own.
///
/// # Example
///
/// ```rust
/// use themecraft::{resolve, PresetRegistry, ThemeConfig};
///
/// let mut presets = PresetRegistry::new();
/// presets.add_yaml("buttons", "primary:\n  className: btn-primary\n").unwrap();
///
/// let themes = resolve(&ThemeConfig::new().preset("buttons"), &presets).unwrap();
/// assert_eq!(themes.names().collect::<Vec<_>>(), vec!["primary"]);
/// ```
pub fn resolve(config: &ThemeConfig, presets: &PresetRegistry) -> Result<ThemeCollection> {
    let registry = presets
        .clone()
        .with_search_dirs(config.resolved_preset_dirs());

    let directory = (!config.themes.is_empty()).then(|| {
        DirectorySource::new(config.resolved_base_dir()).patterns(config.themes.iter().cloned())
    });
    let named: Vec<NamedPresetSource<'_>> = config
        .presets
        .iter()
        .map(|selector| NamedPresetSource::new(&registry, selector.clone()))
        .collect();

    let mut sources: Vec<&dyn ThemeSource> = Vec::with_capacity(named.len() + 1);
    if let Some(directory) = &directory {
        sources.push(directory);
    }
    sources.extend(named.iter().map(|source| source as &dyn ThemeSource));

    resolve_sources(&sources)
}
