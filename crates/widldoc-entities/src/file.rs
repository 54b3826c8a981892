//! External entity files.
//!
//! An entity file replaces the built-in table with a caller-supplied set,
//! for example a newer or project-specific entity list. TOML form:
//!
//! ```toml
//! [[entity]]
//! name = "nbsp"
//! reference = "&#160;"
//! ```
//!
//! JSON form: `{"entity": [{"name": "nbsp", "reference": "&#160;"}]}`.

use std::path::Path;

use serde::{Deserialize, Serialize};

use widldoc_types::error::{Result, WidlError};

use crate::entry::EntityEntry;
use crate::table::EntityTable;

/// One `[[entity]]` record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EntityRecord {
    pub name: String,
    pub reference: String,
}

/// Parsed entity file. Records are kept in file order until [`EntityFile::table`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityFile {
    #[serde(default)]
    pub entity: Vec<EntityRecord>,
}

impl EntityFile {
    pub fn from_toml_str(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }

    pub fn from_json_str(s: &str) -> Result<Self> {
        Ok(serde_json::from_str(s)?)
    }

    /// Read an entity file. `.json` files are parsed as JSON, anything else
    /// as TOML.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        let file = if is_json {
            Self::from_json_str(&text)?
        } else {
            Self::from_toml_str(&text)?
        };
        log::info!(
            "Loaded {} entities from {}",
            file.entity.len(),
            path.display()
        );
        Ok(file)
    }

    /// Snapshot a table's entries, in name order.
    pub fn from_table(table: &EntityTable<'_>) -> Self {
        Self {
            entity: table
                .iter()
                .map(|entry| EntityRecord {
                    name: entry.name.to_string(),
                    reference: entry.reference.to_string(),
                })
                .collect(),
        }
    }

    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string(self)?)
    }

    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Validate the records and build a table borrowing from this file.
    pub fn table(&self) -> Result<EntityTable<'_>> {
        if self.entity.is_empty() {
            return Err(WidlError::Config("entity file defines no entities".into()));
        }
        EntityTable::build(
            self.entity
                .iter()
                .map(|record| EntityEntry::new(&record.name, &record.reference)),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::BUILTIN;

    const SAMPLE_TOML: &str = r#"
[[entity]]
name = "hellip"
reference = "&#8230;"

[[entity]]
name = "apos"
reference = "&#39;"
"#;

    #[test]
    fn parse_toml_and_build() {
        let file = EntityFile::from_toml_str(SAMPLE_TOML).unwrap();
        assert_eq!(file.entity.len(), 2);
        assert_eq!(file.entity[0].name, "hellip");

        let table = file.table().unwrap();
        assert_eq!(table.entries()[0].name, "apos");
        assert_eq!(table.lookup("apos"), Some("&#39;"));
        assert_eq!(table.lookup("amp"), None);
    }

    #[test]
    fn parse_json_and_build() {
        let json = r#"{"entity": [{"name": "trade", "reference": "&#8482;"}]}"#;
        let file = EntityFile::from_json_str(json).unwrap();
        assert_eq!(file.table().unwrap().lookup("trade"), Some("&#8482;"));
    }

    #[test]
    fn empty_file_has_no_table() {
        let file = EntityFile::from_toml_str("").unwrap();
        assert!(file.entity.is_empty());
        assert!(matches!(file.table().unwrap_err(), WidlError::Config(_)));
    }

    #[test]
    fn duplicate_records_are_rejected() {
        let doc = r#"
[[entity]]
name = "amp"
reference = "&#38;"

[[entity]]
name = "amp"
reference = "&#38;"
"#;
        let file = EntityFile::from_toml_str(doc).unwrap();
        assert!(matches!(file.table().unwrap_err(), WidlError::DuplicateEntity(n) if n == "amp"));
    }

    #[test]
    fn hex_reference_is_rejected() {
        let doc = "[[entity]]\nname = \"euro\"\nreference = \"&#x20AC;\"\n";
        let file = EntityFile::from_toml_str(doc).unwrap();
        assert!(matches!(
            file.table().unwrap_err(),
            WidlError::InvalidReference { .. }
        ));
    }

    #[test]
    fn unknown_record_field_is_parse_error() {
        let doc = "[[entity]]\nname = \"a\"\nreference = \"&#97;\"\nchar = \"a\"\n";
        assert!(matches!(
            EntityFile::from_toml_str(doc).unwrap_err(),
            WidlError::TomlParse(_)
        ));
    }

    #[test]
    fn builtin_survives_toml_export() {
        let exported = EntityFile::from_table(&BUILTIN).to_toml_string().unwrap();
        let file = EntityFile::from_toml_str(&exported).unwrap();
        assert_eq!(file.table().unwrap().entries(), BUILTIN.entries());
    }

    #[test]
    fn builtin_survives_json_export() {
        let exported = EntityFile::from_table(&BUILTIN).to_json_string().unwrap();
        let file = EntityFile::from_json_str(&exported).unwrap();
        assert_eq!(file.entity.len(), BUILTIN.len());
        assert_eq!(file.table().unwrap().entries(), BUILTIN.entries());
    }

    #[test]
    fn load_picks_format_from_extension() {
        let dir = tempfile::tempdir().unwrap();

        let toml_path = dir.path().join("extra.toml");
        std::fs::write(&toml_path, SAMPLE_TOML).unwrap();
        assert_eq!(EntityFile::load(&toml_path).unwrap().entity.len(), 2);

        let json_path = dir.path().join("extra.JSON");
        std::fs::write(&json_path, r#"{"entity": []}"#).unwrap();
        assert!(EntityFile::load(&json_path).unwrap().entity.is_empty());
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = EntityFile::load(&dir.path().join("nope.toml")).unwrap_err();
        assert!(matches!(err, WidlError::Io(_)));
    }
}
