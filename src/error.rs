//! Error types for delegation

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DelegationError {
    /// No usable (source, attributes) pair could be established at
    /// decoration time. Carries the attempted values for diagnostics.
    #[error("invalid delegation configuration: src={src:?}, attrs={attrs:?}")]
    Configuration {
        src: Option<String>,
        attrs: Vec<String>,
    },

    /// The owner instance has no attribute of the configured source name.
    #[error("owner has no source attribute '{src}'")]
    SourceNotFound { src: String },

    /// The source attribute exists but does not hold an object.
    #[error("source attribute '{src}' does not hold an object")]
    SourceNotObject { src: String },

    /// An object has no attribute of the requested name.
    #[error("no attribute '{attr}'")]
    AttributeNotFound { attr: String },
}

pub type Result<T> = std::result::Result<T, DelegationError>;
