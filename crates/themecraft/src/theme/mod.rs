//! Theme data model.
//!
//! This module provides:
//!
//! - [`ThemeDefinition`]: A class name plus base styles and named modifiers
//! - [`StyleMap`]: Ordered abstract-property to raw-value mapping
//! - [`ThemeCollection`]: Ordered, de-duplicated theme name to definition map
//!
//! Definitions are read-only inputs. They are loaded once per compilation
//! and never mutated by the compiler.

mod collection;
mod definition;
mod scalar;

pub use collection::ThemeCollection;
pub use definition::{StyleMap, ThemeDefinition};
