//! Host framework integration.
//!
//! A CSS framework drives the pipeline through its plugin lifecycle: it
//! hands the plugin a host exposing token lookup, escaping and an
//! `add_components` sink. The plugin resolves the configured themes,
//! compiles all of them against the host and calls `add_components`
//! exactly once with the full map.

use serde_json::Value;
use tracing::info;

use crate::config::ThemeConfig;
use crate::error::Result;
use crate::source::{resolve, PresetRegistry};
use crate::style::{CompiledComponent, Compiler};
use crate::theme::ThemeCollection;
use crate::tokens::TokenTable;
use crate::utilities::{escape_identifier, stored_utilities, TokenUtilities, Utilities};

/// The utility triple a host framework passes to plugins.
pub trait PluginHost: Utilities {
    /// Receives the compiled selector → declaration map.
    fn add_components(&mut self, components: CompiledComponent);
}

/// A configured theme plugin.
///
/// # Example
///
/// ```rust
/// use themecraft::{Plugin, PresetRegistry, StandaloneHost, ThemeConfig, TokenTable};
/// use serde_json::json;
///
/// let mut presets = PresetRegistry::new();
/// presets
///     .add_yaml("cards", "card:\n  className: Card\n  styles:\n    paddingTop: 4\n")
///     .unwrap();
///
/// let plugin = Plugin::new(ThemeConfig::new().preset("cards")).with_presets(presets);
/// let mut host = StandaloneHost::new(TokenTable::new(json!({ "padding": { "4": "1rem" } })));
/// plugin.register(&mut host).unwrap();
///
/// let component = &host.components()[0];
/// assert_eq!(component.get(".card").unwrap()["paddingTop"], "1rem");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Plugin {
    config: ThemeConfig,
    presets: PresetRegistry,
}

impl Plugin {
    /// Creates a plugin with an empty preset registry.
    pub fn new(config: ThemeConfig) -> Self {
        Self {
            config,
            presets: PresetRegistry::new(),
        }
    }

    /// Sets the registry used to resolve preset names.
    pub fn with_presets(mut self, presets: PresetRegistry) -> Self {
        self.presets = presets;
        self
    }

    /// Returns the configuration.
    pub fn config(&self) -> &ThemeConfig {
        &self.config
    }

    /// Resolves the configured themes.
    pub fn resolve(&self) -> Result<ThemeCollection> {
        resolve(&self.config, &self.presets)
    }

    /// Resolves and compiles all themes against `utilities`.
    pub fn compile<U: Utilities>(&self, utilities: U) -> Result<CompiledComponent> {
        let themes = self.resolve()?;
        let component = Compiler::new(utilities)
            .with_naming(self.config.naming)
            .compile_all(&themes)?;
        info!(
            themes = themes.len(),
            selectors = component.len(),
            "compiled theme components"
        );
        Ok(component)
    }

    /// Resolves and compiles against the utilities in the process-wide slot.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::UtilitiesUnavailable`](crate::ThemeError::UtilitiesUnavailable)
    /// when no utilities have been stored.
    pub fn compile_stored(&self) -> Result<CompiledComponent> {
        let utilities = stored_utilities()?;
        self.compile(utilities)
    }

    /// Compiles against the host and hands it the result.
    ///
    /// `add_components` is called exactly once on success and never on
    /// failure.
    pub fn register<H: PluginHost + ?Sized>(&self, host: &mut H) -> Result<()> {
        let component = self.compile(&*host)?;
        host.add_components(component);
        Ok(())
    }
}

/// Builds the callback a host framework invokes with its utilities.
pub fn plugin(
    config: ThemeConfig,
    presets: PresetRegistry,
) -> impl FnOnce(&mut dyn PluginHost) -> Result<()> {
    let plugin = Plugin::new(config).with_presets(presets);
    move |host: &mut dyn PluginHost| plugin.register(host)
}

/// A host backed by a token table, for running outside a CSS framework.
///
/// Every component passed to `add_components` is kept in order.
#[derive(Debug, Clone, Default)]
pub struct StandaloneHost {
    utilities: TokenUtilities,
    components: Vec<CompiledComponent>,
}

impl StandaloneHost {
    /// Creates a host over the given token table.
    pub fn new(tokens: TokenTable) -> Self {
        Self {
            utilities: TokenUtilities::new(tokens),
            components: Vec::new(),
        }
    }

    /// Returns every component received so far.
    pub fn components(&self) -> &[CompiledComponent] {
        &self.components
    }

    /// Consumes the host, returning the received components.
    pub fn into_components(self) -> Vec<CompiledComponent> {
        self.components
    }
}

impl Utilities for StandaloneHost {
    fn theme(&self, path: &str) -> Option<&Value> {
        self.utilities.theme(path)
    }

    fn escape(&self, class_name: &str) -> String {
        escape_identifier(class_name)
    }
}

impl PluginHost for StandaloneHost {
    fn add_components(&mut self, components: CompiledComponent) {
        self.components.push(components);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ThemeError;
    use crate::name::Naming;
    use crate::utilities::{clear_utilities, store_utilities};
    use serde_json::json;
    use serial_test::serial;
    use std::sync::Arc;

    fn presets() -> PresetRegistry {
        let mut presets = PresetRegistry::new();
        presets
            .add_yaml(
                "cards",
                r#"
card:
  className: Card Body
  styles:
    paddingTop: 4
  modifiers:
    hover:
      backgroundColor: blue-500
"#,
            )
            .unwrap();
        presets
    }

    fn tokens() -> TokenTable {
        TokenTable::new(json!({
            "backgroundColor": { "blue": { "500": "#3b82f6" } },
            "padding": { "4": "1rem" }
        }))
    }

    #[test]
    fn test_callback_adds_components_once() {
        let callback = plugin(ThemeConfig::new().preset("cards"), presets());
        let mut host = StandaloneHost::new(tokens());

        callback(&mut host).unwrap();

        assert_eq!(host.components().len(), 1);
        let component = &host.components()[0];
        let selectors: Vec<&str> = component.selectors().collect();
        assert_eq!(selectors, vec![".card-body", ".card-body--hover"]);
        assert_eq!(
            component.get(".card-body--hover").unwrap()["backgroundColor"],
            "#3b82f6"
        );
    }

    #[test]
    fn test_failed_compilation_adds_nothing() {
        let callback = plugin(ThemeConfig::new(), PresetRegistry::new());
        let mut host = StandaloneHost::new(tokens());

        let result = callback(&mut host);

        assert!(matches!(result, Err(ThemeError::NoThemesResolved)));
        assert!(host.components().is_empty());
    }

    #[test]
    fn test_register_honours_naming() {
        let config = ThemeConfig::new().preset("cards").naming(Naming::Verbatim);
        let plugin = Plugin::new(config).with_presets(presets());
        let mut host = StandaloneHost::new(tokens());

        plugin.register(&mut host).unwrap();

        assert!(host.components()[0].get(".Card\\ Body").is_some());
    }

    #[test]
    #[serial]
    fn test_compile_stored_requires_utilities() {
        clear_utilities();
        let plugin = Plugin::new(ThemeConfig::new().preset("cards")).with_presets(presets());
        let result = plugin.compile_stored();
        assert!(matches!(result, Err(ThemeError::UtilitiesUnavailable)));
    }

    #[test]
    #[serial]
    fn test_compile_stored_uses_installed_utilities() {
        store_utilities(Arc::new(TokenUtilities::new(tokens())));
        let plugin = Plugin::new(ThemeConfig::new().preset("cards")).with_presets(presets());

        let component = plugin.compile_stored().unwrap();
        assert_eq!(component.get(".card-body").unwrap()["paddingTop"], "1rem");

        clear_utilities();
    }
}
