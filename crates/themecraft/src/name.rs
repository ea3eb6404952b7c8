//! Selector name generation.
//!
//! Theme class names are free-form labels (`"Primary Button"`,
//! `".card_header"`). Two naming operations turn them into selectors:
//!
//! - [`class_name`]: strip the marker, append the modifier, kebab-case,
//!   escape, re-prefix. This is the canonical form.
//! - [`verbatim_class_name`]: the same steps without kebab-casing, for
//!   integrations whose consumers reference the label exactly as authored.
//!
//! [`Naming`] selects between them at compile time.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::utilities::Utilities;

/// Leading character marking a generated name as a class selector.
pub const SELECTOR_MARKER: char = '.';

static LOWER_UPPER: Lazy<Regex> = Lazy::new(|| Regex::new(r"([a-z])([A-Z])").unwrap());
static UPPER_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"([A-Z])([A-Z][a-z])").unwrap());
static SEPARATORS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[\s_]+").unwrap());

/// Which naming operation the compiler applies to class names.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Naming {
    /// Kebab-case before escaping ([`class_name`]).
    #[default]
    Kebab,
    /// Escape the label as authored ([`verbatim_class_name`]).
    Verbatim,
}

impl Naming {
    /// Generates a selector with this naming operation.
    pub fn generate<U: Utilities + ?Sized>(
        self,
        utilities: &U,
        raw_name: &str,
        modifier: Option<&str>,
    ) -> String {
        match self {
            Naming::Kebab => class_name(utilities, raw_name, modifier),
            Naming::Verbatim => verbatim_class_name(utilities, raw_name, modifier),
        }
    }
}

/// Converts text to lower kebab-case.
///
/// Hyphens are inserted at lower-to-upper transitions and before the last
/// capital of an uppercase run followed by a lowercase letter (`ABCd` becomes
/// `ab-cd`). Whitespace and underscore runs collapse to one hyphen. Other
/// characters, including existing hyphens, are kept.
///
/// ```rust
/// use themecraft::name::kebab_case;
///
/// assert_eq!(kebab_case("WithAModifier"), "with-a-modifier");
/// assert_eq!(kebab_case("The Class_Name"), "the-class-name");
/// assert_eq!(kebab_case("ABCd"), "ab-cd");
/// ```
pub fn kebab_case(text: &str) -> String {
    let text = LOWER_UPPER.replace_all(text, "$1-$2");
    let text = UPPER_RUN.replace_all(&text, "$1-$2");
    let text = SEPARATORS.replace_all(&text, "-");
    text.to_lowercase()
}

fn base_name(raw_name: &str, modifier: Option<&str>) -> String {
    let name = raw_name.strip_prefix(SELECTOR_MARKER).unwrap_or(raw_name);
    match modifier.filter(|m| !m.is_empty()) {
        Some(modifier) => format!("{name}--{modifier}"),
        None => name.to_string(),
    }
}

/// Generates the canonical, kebab-cased selector for a class name.
///
/// ```rust
/// use themecraft::{class_name, TokenUtilities};
///
/// let utils = TokenUtilities::default();
/// assert_eq!(
///     class_name(&utils, "The Class Name/With_Special:characters", Some("WithAModifier")),
///     ".the-class-name\\/with-special\\:characters--with-a-modifier",
/// );
/// assert_eq!(class_name(&utils, ".foo", None), ".foo");
/// ```
pub fn class_name<U: Utilities + ?Sized>(
    utilities: &U,
    raw_name: &str,
    modifier: Option<&str>,
) -> String {
    let name = kebab_case(&base_name(raw_name, modifier));
    format!("{SELECTOR_MARKER}{}", utilities.escape(&name))
}

/// Generates a selector without case normalization.
///
/// ```rust
/// use themecraft::{verbatim_class_name, TokenUtilities};
///
/// let utils = TokenUtilities::default();
/// assert_eq!(verbatim_class_name(&utils, "btn/Primary", Some("hover")), ".btn\\/Primary--hover");
/// ```
pub fn verbatim_class_name<U: Utilities + ?Sized>(
    utilities: &U,
    raw_name: &str,
    modifier: Option<&str>,
) -> String {
    let name = base_name(raw_name, modifier);
    format!("{SELECTOR_MARKER}{}", utilities.escape(&name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utilities::TokenUtilities;
    use proptest::prelude::*;

    fn utils() -> TokenUtilities {
        TokenUtilities::default()
    }

    #[test]
    fn test_marker_is_idempotent() {
        let u = utils();
        assert_eq!(class_name(&u, ".foo", None), ".foo");
        assert_eq!(class_name(&u, "foo", None), ".foo");
        assert_eq!(verbatim_class_name(&u, ".foo", None), ".foo");
    }

    #[test]
    fn test_only_one_marker_is_stripped() {
        assert_eq!(class_name(&utils(), "..foo", None), ".\\.foo");
    }

    #[test]
    fn test_empty_modifier_adds_no_suffix() {
        let u = utils();
        assert_eq!(class_name(&u, "card", Some("")), ".card");
        assert_eq!(verbatim_class_name(&u, "card", Some("")), ".card");
    }

    #[test]
    fn test_kebab_normalization_with_modifier() {
        assert_eq!(
            class_name(
                &utils(),
                "The Class Name/With_Special:characters",
                Some("WithAModifier")
            ),
            ".the-class-name\\/with-special\\:characters--with-a-modifier"
        );
    }

    #[test]
    fn test_mixed_cases_converge() {
        let u = utils();
        let expected = ".primary-button";
        assert_eq!(class_name(&u, "primary_button", None), expected);
        assert_eq!(class_name(&u, "primary-button", None), expected);
        assert_eq!(class_name(&u, "Primary Button", None), expected);
        assert_eq!(class_name(&u, "PrimaryButton", None), expected);
        assert_eq!(class_name(&u, "primary  __ button", None), expected);
    }

    #[test]
    fn test_uppercase_run_boundary() {
        assert_eq!(kebab_case("ABCd"), "ab-cd");
        assert_eq!(kebab_case("HTMLParser"), "html-parser");
        assert_eq!(kebab_case("ALLCAPS"), "allcaps");
    }

    #[test]
    fn test_verbatim_keeps_case_and_spaces() {
        assert_eq!(
            verbatim_class_name(&utils(), "My Theme", Some("Hover")),
            ".My\\ Theme--Hover"
        );
    }

    #[test]
    fn test_naming_dispatch() {
        let u = utils();
        assert_eq!(Naming::Kebab.generate(&u, "My Theme", None), ".my-theme");
        assert_eq!(
            Naming::Verbatim.generate(&u, "My Theme", None),
            ".My\\ Theme"
        );
        assert_eq!(Naming::default(), Naming::Kebab);
    }

    proptest! {
        #[test]
        fn prop_kebab_output_has_no_uppercase_or_whitespace(input in "[A-Za-z _-]{0,24}") {
            let out = kebab_case(&input);
            prop_assert!(!out.chars().any(|c| c.is_ascii_uppercase() || c.is_whitespace() || c == '_'));
        }

        #[test]
        fn prop_marker_prefix_never_changes_name(input in "[A-Za-z][A-Za-z0-9 _-]{0,24}") {
            let u = utils();
            let marked = format!(".{input}");
            prop_assert_eq!(class_name(&u, &input, None), class_name(&u, &marked, None));
        }

        #[test]
        fn prop_class_name_starts_with_single_marker(input in "[a-z][a-z0-9-]{0,24}") {
            let name = class_name(&utils(), &input, None);
            prop_assert!(name.starts_with('.'));
            prop_assert!(!name.starts_with(".."));
        }
    }
}
