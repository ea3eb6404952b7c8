//! Host utilities: design-token lookup and selector escaping.
//!
//! The compiler never owns a token table or an escaping routine itself; the
//! host framework supplies both through the [`Utilities`] trait. The primary
//! API passes utilities explicitly to a [`Compiler`](crate::Compiler), so
//! there is no "not yet injected" state on that path.
//!
//! Hosts that install their utilities once per process can use the slot
//! functions instead ([`store_utilities`], [`stored_utilities`],
//! [`clear_utilities`]). Reading the slot before anything is stored fails
//! fast with [`ThemeError::UtilitiesUnavailable`]. Concurrent compilations
//! sharing the slot race; each must store its own utilities first.

use std::sync::{Arc, RwLock};

use once_cell::sync::Lazy;
use serde_json::Value;

use crate::error::{Result, ThemeError};
use crate::tokens::TokenTable;

/// Token lookup and escaping primitives provided by the host framework.
pub trait Utilities {
    /// Returns the design token addressed by `path`, if any.
    fn theme(&self, path: &str) -> Option<&Value>;

    /// Escapes CSS-special characters in a selector fragment.
    fn escape(&self, class_name: &str) -> String;

    /// Returns the string token at `path`, or `default` when the token is
    /// missing or not a string.
    fn theme_or(&self, path: &str, default: &str) -> String {
        self.theme(path)
            .and_then(Value::as_str)
            .unwrap_or(default)
            .to_string()
    }
}

impl<U: Utilities + ?Sized> Utilities for &U {
    fn theme(&self, path: &str) -> Option<&Value> {
        (**self).theme(path)
    }

    fn escape(&self, class_name: &str) -> String {
        (**self).escape(class_name)
    }
}

impl<U: Utilities + ?Sized> Utilities for Arc<U> {
    fn theme(&self, path: &str) -> Option<&Value> {
        (**self).theme(path)
    }

    fn escape(&self, class_name: &str) -> String {
        (**self).escape(class_name)
    }
}

/// Escapes a selector fragment as a CSS identifier.
///
/// ```rust
/// use themecraft::escape_identifier;
///
/// assert_eq!(escape_identifier("w-1/2"), "w-1\\/2");
/// assert_eq!(escape_identifier("hover:bg"), "hover\\:bg");
/// ```
pub fn escape_identifier(class_name: &str) -> String {
    let mut escaped = String::with_capacity(class_name.len());
    // Writing into a String cannot fail.
    let _ = cssparser::serialize_identifier(class_name, &mut escaped);
    escaped
}

/// Utilities backed by a [`TokenTable`] and CSS identifier escaping.
///
/// This is the host used when the pipeline runs outside a CSS framework,
/// for example from the command line.
#[derive(Debug, Clone, Default)]
pub struct TokenUtilities {
    tokens: TokenTable,
}

impl TokenUtilities {
    /// Creates utilities over the given token table.
    pub fn new(tokens: TokenTable) -> Self {
        Self { tokens }
    }

    /// Returns the token table.
    pub fn tokens(&self) -> &TokenTable {
        &self.tokens
    }
}

impl Utilities for TokenUtilities {
    fn theme(&self, path: &str) -> Option<&Value> {
        self.tokens.lookup(path)
    }

    fn escape(&self, class_name: &str) -> String {
        escape_identifier(class_name)
    }
}

/// Utilities shareable through the process-wide slot.
pub type SharedUtilities = Arc<dyn Utilities + Send + Sync>;

static UTILITIES: Lazy<RwLock<Option<SharedUtilities>>> = Lazy::new(|| RwLock::new(None));

/// Installs the utilities read by [`stored_utilities`], replacing any
/// previously stored ones.
pub fn store_utilities(utilities: SharedUtilities) {
    let mut slot = UTILITIES.write().unwrap_or_else(|e| e.into_inner());
    *slot = Some(utilities);
}

/// Returns the stored utilities.
///
/// # Errors
///
/// Returns [`ThemeError::UtilitiesUnavailable`] when nothing has been stored.
pub fn stored_utilities() -> Result<SharedUtilities> {
    let slot = UTILITIES.read().unwrap_or_else(|e| e.into_inner());
    slot.clone().ok_or(ThemeError::UtilitiesUnavailable)
}

/// Empties the slot.
pub fn clear_utilities() {
    let mut slot = UTILITIES.write().unwrap_or_else(|e| e.into_inner());
    *slot = None;
}
