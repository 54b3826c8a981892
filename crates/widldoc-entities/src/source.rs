//! Choose between the built-in table and a configured entity file.

use widldoc_types::config::EntityConfig;
use widldoc_types::error::Result;

use crate::file::EntityFile;
use crate::table::{BUILTIN, EntityTable};

/// Where entity definitions come from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum EntitySource {
    /// The built-in HTML 4 table.
    #[default]
    Builtin,
    /// A loaded entity file.
    File(EntityFile),
}

impl EntitySource {
    /// Resolve `config.table`: load the named file, or fall back to the
    /// built-in table when none is set.
    pub fn from_config(config: &EntityConfig) -> Result<Self> {
        match &config.table {
            Some(path) => Ok(Self::File(EntityFile::load(path)?)),
            None => Ok(Self::Builtin),
        }
    }

    /// Validate and return the table. The built-in table is returned as a
    /// borrowed view; file tables are built on each call, so callers should
    /// build once and keep the result.
    pub fn table(&self) -> Result<EntityTable<'_>> {
        match self {
            Self::Builtin => Ok(BUILTIN.view()),
            Self::File(file) => file.table(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use widldoc_types::error::WidlError;

    #[test]
    fn default_config_uses_builtin() {
        let source = EntitySource::from_config(&EntityConfig::default()).unwrap();
        assert_eq!(source, EntitySource::Builtin);
        let table = source.table().unwrap();
        assert_eq!(table.len(), BUILTIN.len());
        assert_eq!(table.lookup("euro"), Some("&#8364;"));
    }

    #[test]
    fn configured_file_replaces_builtin() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("extra.toml");
        std::fs::write(&path, "[[entity]]\nname = \"apos\"\nreference = \"&#39;\"\n").unwrap();

        let config = EntityConfig {
            table: Some(path),
            ..EntityConfig::default()
        };
        let source = EntitySource::from_config(&config).unwrap();
        let table = source.table().unwrap();
        assert_eq!(table.lookup("apos"), Some("&#39;"));
        assert_eq!(table.lookup("amp"), None);
    }

    #[test]
    fn missing_configured_file_fails() {
        let config = EntityConfig {
            table: Some(PathBuf::from("/nonexistent/widldoc/entities.toml")),
            ..EntityConfig::default()
        };
        let err = EntitySource::from_config(&config).unwrap_err();
        assert!(matches!(err, WidlError::Io(_)));
    }
}
