//! Comment-processing configuration.
//!
//! Loaded from a TOML document with an `[entities]` table:
//!
//! ```toml
//! [entities]
//! unresolved = "warn"
//! table = "extra-entities.toml"
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, WidlError};

/// What to do with a `&name;` span whose name is not in the entity table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UnresolvedPolicy {
    /// Copy the span through unchanged.
    #[default]
    PassThrough,
    /// Copy the span through unchanged and log a warning.
    Warn,
    /// Abort substitution with [`WidlError::UnresolvedEntity`].
    Reject,
}

/// Entity handling options (`[entities]`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EntityConfig {
    #[serde(default)]
    pub unresolved: UnresolvedPolicy,
    /// External entity file replacing the built-in table. Relative paths
    /// are resolved against the config file's directory by [`DocConfig::load`].
    #[serde(default)]
    pub table: Option<PathBuf>,
}

/// Top-level configuration document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct DocConfig {
    #[serde(default)]
    pub entities: EntityConfig,
}

impl DocConfig {
    /// Parse a configuration document.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let config: DocConfig = toml::from_str(s)?;
        if let Some(table) = &config.entities.table
            && table.as_os_str().is_empty()
        {
            return Err(WidlError::Config("entities.table must not be empty".into()));
        }
        Ok(config)
    }

    /// Read and parse a configuration file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let mut config = Self::from_toml_str(&text)?;
        if let Some(dir) = path.parent()
            && let Some(table) = config.entities.table.as_mut()
            && table.is_relative()
        {
            *table = dir.join(&*table);
        }
        log::debug!(
            "Loaded config from {} (unresolved entities: {:?})",
            path.display(),
            config.entities.unresolved
        );
        Ok(config)
    }
}
