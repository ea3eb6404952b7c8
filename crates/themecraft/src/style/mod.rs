//! Style compilation.
//!
//! This module provides the compiler half of the pipeline:
//!
//! - [`ValueGenerator`]: Turns one raw style value into CSS declarations
//! - [`generator`] / [`registered_properties`]: The fixed property registry
//! - [`Compiler`]: Compiles themes into a [`CompiledComponent`]
//!
//! Generators try to resolve raw values against the host's design tokens
//! and fall back to the raw value as literal CSS, so `"4"` can become
//! `"1rem"` while `"18rem"` passes through untouched.

mod compiler;
mod generator;
mod registry;

pub use compiler::{CompiledComponent, Compiler, Declarations};
pub use generator::{Resolve, ValueGenerator};
pub use registry::{generator, registered_properties};
