//! Theme compilation into selector → declaration maps.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::registry::generator;
use crate::error::{Result, ThemeError};
use crate::name::Naming;
use crate::theme::{StyleMap, ThemeCollection, ThemeDefinition};
use crate::utilities::Utilities;

/// Ordered CSS property → value pairs for one selector.
pub type Declarations = IndexMap<String, String>;

/// Ordered mapping from generated selector to its declarations.
///
/// This is the sole output artifact of a compilation run, handed to an
/// external CSS-emission engine.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CompiledComponent {
    rules: IndexMap<String, Declarations>,
}

impl CompiledComponent {
    /// Creates an empty component.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the declarations for a selector, replacing any previous ones.
    pub fn insert(&mut self, selector: impl Into<String>, declarations: Declarations) {
        self.rules.insert(selector.into(), declarations);
    }

    /// Layers another component on top of this one, selector by selector.
    pub fn merge(&mut self, other: CompiledComponent) {
        self.rules.extend(other.rules);
    }

    /// Returns the declarations of a selector.
    pub fn get(&self, selector: &str) -> Option<&Declarations> {
        self.rules.get(selector)
    }

    /// Iterates over `(selector, declarations)` in output order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Declarations)> {
        self.rules.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Iterates over selectors in output order.
    pub fn selectors(&self) -> impl Iterator<Item = &str> {
        self.rules.keys().map(String::as_str)
    }

    /// Returns the number of selectors.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns true if no selectors were produced.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Consumes the component, returning the underlying map.
    pub fn into_inner(self) -> IndexMap<String, Declarations> {
        self.rules
    }
}

/// Compiles theme definitions against a set of host utilities.
///
/// The compiler borrows nothing from global state: token lookups and
/// escaping go through the utilities it was built with.
///
/// # Example
///
/// ```rust
/// use themecraft::{Compiler, ThemeDefinition, TokenTable, TokenUtilities};
/// use serde_json::json;
///
/// let tokens = TokenTable::new(json!({
///     "backgroundColor": { "blue": { "500": "#3b82f6" } },
///     "padding": { "4": "1rem" }
/// }));
/// let compiler = Compiler::new(TokenUtilities::new(tokens));
///
/// let theme = ThemeDefinition::new("my-theme")
///     .style("backgroundColor", "blue-500")
///     .style("paddingTop", "4");
///
/// let component = compiler.compile(&theme).unwrap();
/// let rule = component.get(".my-theme").unwrap();
/// assert_eq!(rule["backgroundColor"], "#3b82f6");
/// assert_eq!(rule["paddingTop"], "1rem");
/// ```
#[derive(Debug, Clone)]
pub struct Compiler<U> {
    utilities: U,
    naming: Naming,
}

impl<U: Utilities> Compiler<U> {
    /// Creates a compiler using kebab-case naming.
    pub fn new(utilities: U) -> Self {
        Self {
            utilities,
            naming: Naming::default(),
        }
    }

    /// Sets the naming operation, returning the updated compiler.
    pub fn with_naming(mut self, naming: Naming) -> Self {
        self.naming = naming;
        self
    }

    /// Returns the naming operation in use.
    pub fn naming(&self) -> Naming {
        self.naming
    }

    /// Returns the utilities this compiler resolves against.
    pub fn utilities(&self) -> &U {
        &self.utilities
    }

    /// Compiles one theme.
    ///
    /// Base styles become the unsuffixed selector; each modifier becomes a
    /// `--modifier` selector. A theme with neither compiles to an empty
    /// component.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::GeneratorNotFound`] if any style property has
    /// no registered generator. Nothing is returned for the theme in that
    /// case, not even the properties that did resolve.
    pub fn compile(&self, theme: &ThemeDefinition) -> Result<CompiledComponent> {
        let mut component = CompiledComponent::new();

        if let Some(styles) = &theme.styles {
            let selector = self.selector(theme, None);
            let declarations = self.compile_styles(&theme.class_name, styles)?;
            component.insert(selector, declarations);
        }

        if let Some(modifiers) = &theme.modifiers {
            for (modifier, styles) in modifiers {
                let selector = self.selector(theme, Some(modifier.as_str()));
                let declarations = self.compile_styles(&theme.class_name, styles)?;
                component.insert(selector, declarations);
            }
        }

        debug!(
            class_name = %theme.class_name,
            selectors = component.len(),
            "compiled theme"
        );
        Ok(component)
    }

    /// Compiles every theme of a collection, in collection order, into one
    /// component.
    ///
    /// Themes that generate the same selector overwrite earlier declarations
    /// for it.
    pub fn compile_all(&self, themes: &ThemeCollection) -> Result<CompiledComponent> {
        let mut component = CompiledComponent::new();
        for (name, theme) in themes.iter() {
            trace!(theme = name, "compiling");
            component.merge(self.compile(theme)?);
        }
        Ok(component)
    }

    /// Converts one abstract style map into concrete declarations.
    ///
    /// `theme` is only used to name the theme in errors.
    pub fn compile_styles(&self, theme: &str, styles: &StyleMap) -> Result<Declarations> {
        let mut declarations = Declarations::new();
        for (property, raw) in styles {
            let generator =
                generator(property).ok_or_else(|| ThemeError::GeneratorNotFound {
                    property: property.clone(),
                    theme: theme.to_string(),
                })?;
            let fragment = generator.generate(&self.utilities, raw);
            trace!(property = %property, raw = %raw, ?fragment, "generated declarations");
            declarations.extend(fragment);
        }
        Ok(declarations)
    }

    fn selector(&self, theme: &ThemeDefinition, modifier: Option<&str>) -> String {
        self.naming
            .generate(&self.utilities, &theme.class_name, modifier)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokens::TokenTable;
    use crate::utilities::TokenUtilities;
    use serde_json::json;

    fn compiler() -> Compiler<TokenUtilities> {
        Compiler::new(TokenUtilities::new(TokenTable::new(json!({
            "backgroundColor": { "blue": { "500": "#3b82f6", "700": "#1d4ed8" } },
            "padding": { "2": "0.5rem", "4": "1rem" },
            "height": { "1/2": "50%" }
        }))))
    }

    #[test]
    fn test_end_to_end_single_theme() {
        let theme = ThemeDefinition::new("my-theme")
            .style("backgroundColor", "blue-500")
            .style("paddingTop", "4");

        let component = compiler().compile(&theme).unwrap();

        let mut expected_rule = Declarations::new();
        expected_rule.insert("backgroundColor".into(), "#3b82f6".into());
        expected_rule.insert("paddingTop".into(), "1rem".into());
        let mut expected = CompiledComponent::new();
        expected.insert(".my-theme", expected_rule);

        assert_eq!(component, expected);
    }

    #[test]
    fn test_empty_theme_compiles_to_empty_component() {
        let component = compiler().compile(&ThemeDefinition::new("bare")).unwrap();
        assert!(component.is_empty());
    }

    #[test]
    fn test_empty_modifier_map_produces_no_rules() {
        let theme: ThemeDefinition =
            serde_yaml::from_str("className: plain\nmodifiers: {}\n").unwrap();
        assert!(compiler().compile(&theme).unwrap().is_empty());
    }

    #[test]
    fn test_modifiers_get_suffixed_selectors() {
        let theme = ThemeDefinition::new("Primary Button")
            .style("backgroundColor", "blue-500")
            .modifier("hover", [("backgroundColor", "blue-700")])
            .modifier("Compact", [("paddingY", "2")]);

        let component = compiler().compile(&theme).unwrap();

        let selectors: Vec<&str> = component.selectors().collect();
        assert_eq!(
            selectors,
            vec![
                ".primary-button",
                ".primary-button--hover",
                ".primary-button--compact"
            ]
        );
        assert_eq!(
            component.get(".primary-button--hover").unwrap()["backgroundColor"],
            "#1d4ed8"
        );
        let compact = component.get(".primary-button--compact").unwrap();
        assert_eq!(compact["paddingTop"], "0.5rem");
        assert_eq!(compact["paddingBottom"], "0.5rem");
    }

    #[test]
    fn test_modifiers_without_base_styles() {
        let theme = ThemeDefinition::new("link").modifier("active", [("textAlign", "left")]);
        let component = compiler().compile(&theme).unwrap();
        let selectors: Vec<&str> = component.selectors().collect();
        assert_eq!(selectors, vec![".link--active"]);
    }

    #[test]
    fn test_unresolvable_value_passes_through() {
        let theme = ThemeDefinition::new("wide").style("paddingX", "18rem");
        let component = compiler().compile(&theme).unwrap();
        let rule = component.get(".wide").unwrap();
        let pairs: Vec<(&str, &str)> = rule.iter().map(|(k, v)| (k.as_str(), v.as_str())).collect();
        assert_eq!(pairs, vec![("paddingRight", "18rem"), ("paddingLeft", "18rem")]);
    }

    #[test]
    fn test_unknown_property_fails_whole_theme() {
        let theme = ThemeDefinition::new("broken")
            .style("paddingTop", "4")
            .style("fooBar", "1");

        let err = compiler().compile(&theme).unwrap_err();
        match err {
            ThemeError::GeneratorNotFound { property, theme } => {
                assert_eq!(property, "fooBar");
                assert_eq!(theme, "broken");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_unknown_property_in_modifier_fails() {
        let theme = ThemeDefinition::new("broken").modifier("hover", [("colour", "red")]);
        let result = compiler().compile(&theme);
        assert!(matches!(result, Err(ThemeError::GeneratorNotFound { .. })));
    }

    #[test]
    fn test_later_property_wins_on_collision() {
        let theme = ThemeDefinition::new("box")
            .style("paddingY", "2")
            .style("paddingTop", "4");
        let component = compiler().compile(&theme).unwrap();
        let rule = component.get(".box").unwrap();
        assert_eq!(rule["paddingTop"], "1rem");
        assert_eq!(rule["paddingBottom"], "0.5rem");
    }

    #[test]
    fn test_verbatim_naming() {
        let theme = ThemeDefinition::new("My Theme").style("display", "flex");
        let component = compiler()
            .with_naming(Naming::Verbatim)
            .compile(&theme)
            .unwrap();
        assert!(component.get(".My\\ Theme").is_some());
    }

    #[test]
    fn test_compile_all_in_collection_order() {
        let themes = ThemeCollection::new()
            .add("b", ThemeDefinition::new("beta").style("display", "block"))
            .add("a", ThemeDefinition::new("alpha").style("display", "flex"));

        let component = compiler().compile_all(&themes).unwrap();
        let selectors: Vec<&str> = component.selectors().collect();
        assert_eq!(selectors, vec![".beta", ".alpha"]);
    }

    #[test]
    fn test_compile_all_aborts_on_first_error() {
        let themes = ThemeCollection::new()
            .add("ok", ThemeDefinition::new("ok").style("display", "flex"))
            .add("bad", ThemeDefinition::new("bad").style("nope", "x"));
        assert!(compiler().compile_all(&themes).is_err());
    }

    #[test]
    fn test_borrowed_utilities() {
        let utils = TokenUtilities::new(TokenTable::new(json!({ "height": { "1/2": "50%" } })));
        let compiler = Compiler::new(&utils);
        let theme = ThemeDefinition::new("half").style("height", "1/2");
        let component = compiler.compile(&theme).unwrap();
        assert_eq!(component.get(".half").unwrap()["height"], "50%");
    }

    #[test]
    fn test_component_serializes_as_plain_map() {
        let theme = ThemeDefinition::new("my-theme").style("paddingTop", "4");
        let component = compiler().compile(&theme).unwrap();
        let value = serde_json::to_value(&component).unwrap();
        assert_eq!(value, json!({ ".my-theme": { "paddingTop": "1rem" } }));
    }
}
