//! Value generators: raw style value to CSS declarations.

use super::compiler::Declarations;
use crate::utilities::Utilities;

/// How a generator turns a raw value into a CSS value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolve {
    /// Look up `section.<value>` with the first `-` of the value turned into
    /// a path separator, so `blue-500` addresses `section.blue.500`.
    Dotted(&'static str),
    /// Look up `section[<value>]`, taking the value as a single key.
    Indexed(&'static str),
    /// Substitute a fixed keyword from the table.
    Alias(&'static [(&'static str, &'static str)]),
    /// Emit the raw value unchanged.
    Verbatim,
}

impl Resolve {
    /// Returns the token path for `raw`, if this strategy uses tokens.
    pub fn token_path(&self, raw: &str) -> Option<String> {
        match self {
            Resolve::Dotted(section) => Some(format!("{section}.{}", raw.replacen('-', ".", 1))),
            Resolve::Indexed(section) => Some(format!("{section}[{raw}]")),
            Resolve::Alias(_) | Resolve::Verbatim => None,
        }
    }
}

/// Maps one abstract style property's raw value to concrete declarations.
///
/// Most generators emit a single CSS property; axis generators (such as
/// `paddingX`) emit the same value for each physical side.
///
/// # Example
///
/// ```rust
/// use themecraft::{Resolve, TokenTable, TokenUtilities, ValueGenerator};
/// use serde_json::json;
///
/// let utils = TokenUtilities::new(TokenTable::new(json!({ "padding": { "4": "1rem" } })));
/// let padding_x = ValueGenerator::new(Resolve::Indexed("padding"), &["paddingRight", "paddingLeft"]);
///
/// let decls = padding_x.generate(&utils, "4");
/// assert_eq!(decls["paddingRight"], "1rem");
/// assert_eq!(decls["paddingLeft"], "1rem");
///
/// let literal = padding_x.generate(&utils, "18rem");
/// assert_eq!(literal["paddingLeft"], "18rem");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValueGenerator {
    resolve: Resolve,
    emits: &'static [&'static str],
}

impl ValueGenerator {
    /// Creates a generator emitting `emits` with values produced by `resolve`.
    pub const fn new(resolve: Resolve, emits: &'static [&'static str]) -> Self {
        Self { resolve, emits }
    }

    /// Returns the resolution strategy.
    pub fn resolve(&self) -> Resolve {
        self.resolve
    }

    /// Returns the CSS properties this generator emits, in order.
    pub fn emits(&self) -> &'static [&'static str] {
        self.emits
    }

    /// Resolves a raw value to its CSS value.
    ///
    /// Token strategies use a string token when the table has one and the
    /// raw value otherwise. Alias tables fall back to the raw value for
    /// keywords they do not know.
    pub fn resolve_value<U: Utilities + ?Sized>(&self, utilities: &U, raw: &str) -> String {
        match self.resolve {
            Resolve::Alias(aliases) => aliases
                .iter()
                .find(|(alias, _)| *alias == raw)
                .map_or(raw, |(_, keyword)| *keyword)
                .to_string(),
            Resolve::Verbatim => raw.to_string(),
            Resolve::Dotted(_) | Resolve::Indexed(_) => match self.resolve.token_path(raw) {
                Some(path) => utilities.theme_or(&path, raw),
                None => raw.to_string(),
            },
        }
    }

    /// Produces the declarations for a raw value.
    pub fn generate<U: Utilities + ?Sized>(&self, utilities: &U, raw: &str) -> Declarations {
        let value = self.resolve_value(utilities, raw);
        self.emits
            .iter()
            .map(|property| (property.to_string(), value.clone()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokens::TokenTable;
    use crate::utilities::TokenUtilities;
    use serde_json::json;

    fn utils() -> TokenUtilities {
        TokenUtilities::new(TokenTable::new(json!({
            "backgroundColor": {
                "blue": { "500": "#3b82f6" },
                "black": "#000",
                "light": { "blue-100": "#e0f2fe" }
            },
            "height": { "1/2": "50%" },
            "fontFamily": { "sans": ["Inter", "sans-serif"] }
        })))
    }

    #[test]
    fn test_dotted_path_replaces_first_hyphen() {
        let resolve = Resolve::Dotted("backgroundColor");
        assert_eq!(
            resolve.token_path("blue-500").as_deref(),
            Some("backgroundColor.blue.500")
        );
        assert_eq!(
            resolve.token_path("light-blue-100").as_deref(),
            Some("backgroundColor.light.blue-100")
        );
    }

    #[test]
    fn test_dotted_resolution() {
        let generator = ValueGenerator::new(Resolve::Dotted("backgroundColor"), &["backgroundColor"]);
        let u = utils();
        assert_eq!(generator.resolve_value(&u, "blue-500"), "#3b82f6");
        assert_eq!(generator.resolve_value(&u, "black"), "#000");
        assert_eq!(generator.resolve_value(&u, "light-blue-100"), "#e0f2fe");
        assert_eq!(generator.resolve_value(&u, "#ff00ff"), "#ff00ff");
    }

    #[test]
    fn test_indexed_resolution_with_slash() {
        let generator = ValueGenerator::new(Resolve::Indexed("height"), &["height"]);
        assert_eq!(generator.resolve_value(&utils(), "1/2"), "50%");
        assert_eq!(generator.resolve_value(&utils(), "20px"), "20px");
    }

    #[test]
    fn test_non_string_token_falls_back() {
        let generator = ValueGenerator::new(Resolve::Indexed("fontFamily"), &["fontFamily"]);
        assert_eq!(generator.resolve_value(&utils(), "sans"), "sans");
    }

    #[test]
    fn test_alias_table() {
        const ALIASES: &[(&str, &str)] = &[("border", "border-box"), ("content", "content-box")];
        let generator = ValueGenerator::new(Resolve::Alias(ALIASES), &["boxSizing"]);
        let u = utils();
        assert_eq!(generator.resolve_value(&u, "border"), "border-box");
        assert_eq!(generator.resolve_value(&u, "content"), "content-box");
        assert_eq!(generator.resolve_value(&u, "inherit"), "inherit");
    }

    #[test]
    fn test_verbatim_ignores_tokens() {
        let generator = ValueGenerator::new(Resolve::Verbatim, &["display"]);
        assert_eq!(generator.resolve_value(&utils(), "blue-500"), "blue-500");
        assert_eq!(Resolve::Verbatim.token_path("x"), None);
    }

    #[test]
    fn test_generate_emits_each_side_in_order() {
        let generator = ValueGenerator::new(Resolve::Indexed("padding"), &["paddingTop", "paddingBottom"]);
        let decls = generator.generate(&utils(), "2px");
        let pairs: Vec<(&str, &str)> = decls
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();
        assert_eq!(pairs, vec![("paddingTop", "2px"), ("paddingBottom", "2px")]);
    }
}
