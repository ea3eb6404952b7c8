//! Error types for theme resolution and compilation.
//!
//! Every failure in the pipeline is a deterministic configuration or
//! integration defect, so nothing here is retried: errors propagate to the
//! invoking build step and the whole compilation aborts.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while resolving theme sources or compiling themes.
#[derive(Debug, Error)]
pub enum ThemeError {
    /// The configuration produced an empty theme collection.
    #[error("no themes resolved: configure at least one theme pattern or preset")]
    NoThemesResolved,

    /// A style property has no registered value generator.
    #[error("no value generator registered for property '{property}' (theme '{theme}')")]
    GeneratorNotFound {
        /// The unknown style property.
        property: String,
        /// Class name of the theme that used it.
        theme: String,
    },

    /// The process-wide utilities were read before a host installed them.
    #[error("theme utilities are not available: install them with store_utilities() before compiling")]
    UtilitiesUnavailable,

    /// A preset name could not be found inline or in any search directory.
    #[error("preset not found: \"{name}\"")]
    PresetNotFound {
        /// The requested preset name.
        name: String,
    },

    /// A theme glob pattern could not be compiled.
    #[error("invalid theme pattern \"{pattern}\": {message}")]
    InvalidPattern {
        /// The offending pattern.
        pattern: String,
        /// Error reported by the glob compiler.
        message: String,
    },

    /// A theme, preset, token or configuration file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        /// Path that failed to read.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// A file was read but its contents were not valid.
    #[error("failed to parse {}: {message}", path.display())]
    Parse {
        /// Path of the malformed file.
        path: PathBuf,
        /// Error message from the parser.
        message: String,
    },
}

/// Result type for theme operations.
pub type Result<T> = std::result::Result<T, ThemeError>;
