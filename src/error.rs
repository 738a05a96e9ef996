//! Error types for the configuration manager.
//!
//! Every extraction operation reports its outcome through [`Result`]; the
//! expected failure classes (missing section, value conversion) are variants
//! that callers match on to decide whether a failed section is fatal to the
//! whole document load.

use thiserror::Error;

/// Main error type for the configuration manager library.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// IO error while reading a configuration file.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// XML parsing failed.
    #[error("XML parsing failed: {0}")]
    XmlParse(#[from] roxmltree::Error),

    /// Document root element does not match the expected document type.
    #[error("expected root element <{expected}>, found <{found}>")]
    RootTagMismatch { expected: String, found: String },

    /// A required section tag is absent from the document.
    #[error("{filename} has no <{tag}>...</{tag}> section")]
    MissingSection { filename: String, tag: String },

    /// A value expected to be numeric could not be parsed as an integer.
    #[error("cannot convert '{value}' ({component}/{field}) into an integer")]
    ValueConversion {
        component: String,
        field: String,
        value: String,
    },

    /// Invalid component name supplied on the command line.
    #[error("Invalid component name: '{0}'. Expected an uppercase identifier (e.g. ORCHESTRATOR)")]
    InvalidComponentName(String),

    /// YAML serialization error.
    #[error("YAML serialization failed: {0}")]
    YamlSerialization(#[from] serde_yaml_ng::Error),
}

/// Result type alias for configuration manager operations.
pub type Result<T> = std::result::Result<T, ConfigError>;
