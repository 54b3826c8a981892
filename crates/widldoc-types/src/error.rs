//! Error types for widldoc.

use std::io;

/// Errors produced by widldoc.
///
/// A failed entity lookup is *not* an error; resolvers return `None` for
/// names they do not know. These variants cover corrupt entity data,
/// rejected comment text, and configuration loading.
#[derive(Debug, thiserror::Error)]
pub enum WidlError {
    #[error("duplicate entity name: {0}")]
    DuplicateEntity(String),

    #[error("invalid entity name: {0:?}")]
    InvalidEntityName(String),

    #[error("invalid character reference for `{name}`: {reference:?}")]
    InvalidReference { name: String, reference: String },

    #[error("unresolved entity `&{name};` at byte {offset}")]
    UnresolvedEntity { name: String, offset: usize },

    #[error("config error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, WidlError>;
