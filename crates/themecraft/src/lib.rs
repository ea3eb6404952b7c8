//! Theme compilation for utility-first CSS frameworks.
//!
//! Themecraft turns declarative theme definitions (a class name, base
//! styles and named modifiers, authored in YAML or JSON) into component
//! rules keyed by CSS selector, resolving each style value against the host
//! framework's design tokens.
//!
//! # Pipeline
//!
//! 1. **Resolve** ([`source`]): theme files matched by glob patterns and
//!    named presets are merged into one ordered [`ThemeCollection`]
//! 2. **Name** ([`name`]): each class name becomes an escaped selector such
//!    as `.primary-button--hover`
//! 3. **Compile** ([`style`]): every style property is looked up in a
//!    static generator table, which resolves the raw value through the
//!    host's token table and emits one or more declarations
//!
//! # Example
//!
//! ```rust
//! use themecraft::{Compiler, ThemeDefinition, TokenTable, TokenUtilities};
//! use serde_json::json;
//!
//! let tokens = TokenTable::new(json!({
//!     "backgroundColor": { "blue": { "500": "#3b82f6" } },
//!     "padding": { "4": "1rem" }
//! }));
//! let compiler = Compiler::new(TokenUtilities::new(tokens));
//!
//! let theme = ThemeDefinition::new("Primary Button")
//!     .style("paddingTop", "4")
//!     .modifier("hover", [("backgroundColor", "blue-500")]);
//!
//! let component = compiler.compile(&theme).unwrap();
//! assert_eq!(component.get(".primary-button").unwrap()["paddingTop"], "1rem");
//! assert_eq!(
//!     component.get(".primary-button--hover").unwrap()["backgroundColor"],
//!     "#3b82f6"
//! );
//! ```
//!
//! Inside a CSS framework, use [`plugin`] to resolve, compile and hand the
//! result to the host's `add_components` in one step.

pub mod config;
pub mod error;
pub mod name;
pub mod plugin;
pub mod source;
pub mod style;
pub mod theme;
pub mod tokens;
pub mod utilities;

pub use config::{PresetSelector, ThemeConfig};
pub use error::{Result, ThemeError};
pub use name::{class_name, kebab_case, verbatim_class_name, Naming, SELECTOR_MARKER};
pub use plugin::{plugin, Plugin, PluginHost, StandaloneHost};
pub use source::{
    expand_pattern, resolve, resolve_sources, DirectorySource, NamedPresetSource, PresetRegistry,
    ResolvedPreset, ThemeSource, THEME_EXTENSIONS,
};
pub use style::{
    generator, registered_properties, CompiledComponent, Compiler, Declarations, Resolve,
    ValueGenerator,
};
pub use theme::{StyleMap, ThemeCollection, ThemeDefinition};
pub use tokens::{parse_path, TokenTable};
pub use utilities::{
    clear_utilities, escape_identifier, store_utilities, stored_utilities, SharedUtilities,
    TokenUtilities, Utilities,
};
