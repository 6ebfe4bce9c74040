//! Schema file loading.
//!
//! A schema file lists models (one backing table each), their numeric
//! attributes and, optionally, fixture rows for the in-memory database.
//!
//! ```yaml
//! profile: full
//! models:
//!   - table: mm_products
//!     attributes:
//!       - col_name: price
//!         name: Price
//!         settings: { mandatory: true }
//!     rows:
//!       - { id: 1, price: 5 }
//!       - { id: 2, price: null }
//! ```

use attribute_core::{
    AttributeMeta, Database, DatabaseError, IdQuery, Identifier, MemoryDatabase, SqlValue,
    TableModel,
};
use attribute_numeric::{NumericAttribute, SettingsProfile};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::sync::Arc;

/// Error type for schema file operations.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Error reading schema file
    #[error("Failed to read schema file: {0}")]
    Io(#[from] std::io::Error),

    /// Error parsing YAML
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Attribute path not in `<table>.<column>` form
    #[error("Invalid attribute path '{0}', expected <table>.<column>")]
    InvalidAttributePath(String),

    /// Model not found in schema
    #[error("Model not found: {0}")]
    ModelNotFound(String),

    /// Attribute not found in model
    #[error("Attribute '{column}' not found in model '{table}'")]
    AttributeNotFound { table: String, column: String },

    /// Fixture rows could not be loaded
    #[error("Invalid fixture rows: {0}")]
    Fixture(#[from] DatabaseError),
}

/// One model of the schema file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelConfig {
    /// Backing table
    pub table: Identifier,

    /// Numeric attributes of this model
    #[serde(default)]
    pub attributes: Vec<AttributeMeta>,

    /// Fixture rows for the in-memory database
    #[serde(default)]
    pub rows: Vec<BTreeMap<String, SqlValue>>,
}

impl ModelConfig {
    pub fn get_attribute(&self, column: &str) -> Option<&AttributeMeta> {
        self.attributes.iter().find(|a| a.col_name.as_str() == column)
    }

    /// `id` followed by every attribute column.
    pub fn column_names(&self) -> Vec<&str> {
        let mut names = vec![IdQuery::ID_COLUMN];
        names.extend(self.attributes.iter().map(|a| a.col_name.as_str()));
        names
    }
}

/// Parsed schema file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchemaFile {
    /// Setting-name profile applied to every attribute
    #[serde(default)]
    pub profile: SettingsProfile,

    pub models: Vec<ModelConfig>,
}

impl SchemaFile {
    /// Load schema from a YAML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse schema from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    pub fn get_model(&self, table: &str) -> Option<&ModelConfig> {
        self.models.iter().find(|m| m.table.as_str() == table)
    }

    /// Resolve a `<table>.<column>` path.
    pub fn find_attribute(
        &self,
        path: &str,
    ) -> Result<(&ModelConfig, &AttributeMeta), ConfigError> {
        let (table, column) = path
            .split_once('.')
            .ok_or_else(|| ConfigError::InvalidAttributePath(path.to_string()))?;
        let model = self
            .get_model(table)
            .ok_or_else(|| ConfigError::ModelNotFound(table.to_string()))?;
        let meta = model
            .get_attribute(column)
            .ok_or_else(|| ConfigError::AttributeNotFound {
                table: table.to_string(),
                column: column.to_string(),
            })?;
        Ok((model, meta))
    }

    /// In-memory database holding the fixture rows of every model.
    pub fn memory_database(&self) -> Result<MemoryDatabase, ConfigError> {
        let mut db = MemoryDatabase::new();
        for model in &self.models {
            db = db.with_table(model.table.as_str(), model.column_names(), &model.rows)?;
        }
        Ok(db)
    }

    /// Build the numeric attribute at `path` on top of `database`.
    pub fn numeric_attribute(
        &self,
        path: &str,
        database: Arc<dyn Database>,
        profile: Option<SettingsProfile>,
    ) -> Result<NumericAttribute, ConfigError> {
        let (model, meta) = self.find_attribute(path)?;
        Ok(NumericAttribute::new(
            Arc::new(TableModel::new(model.table.clone())),
            meta.clone(),
            database,
            profile.unwrap_or(self.profile),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use attribute_core::ComparableAttribute;

    const SCHEMA: &str = r#"
profile: legacy
models:
  - table: mm_products
    attributes:
      - col_name: price
        name: Price
        description: Price in cents
        settings:
          mandatory: true
          filterable: true
      - col_name: stock
    rows:
      - { id: 1, price: 5, stock: 3 }
      - { id: 2, price: 10 }
      - { id: 3, price: null, stock: 0 }
  - table: mm_empty
"#;

    #[test]
    fn test_parse_schema() {
        let schema = SchemaFile::from_yaml(SCHEMA).unwrap();
        assert_eq!(schema.profile, SettingsProfile::Legacy);
        assert_eq!(schema.models.len(), 2);

        let products = schema.get_model("mm_products").unwrap();
        assert_eq!(products.column_names(), vec!["id", "price", "stock"]);
        assert_eq!(products.rows[2].get("price"), Some(&SqlValue::Null));

        let price = products.get_attribute("price").unwrap();
        assert_eq!(price.name, "Price");
        assert_eq!(price.settings["mandatory"], serde_json::json!(true));

        let empty = schema.get_model("mm_empty").unwrap();
        assert!(empty.attributes.is_empty() && empty.rows.is_empty());
    }

    #[test]
    fn test_profile_defaults_to_full() {
        let schema = SchemaFile::from_yaml("models: []").unwrap();
        assert_eq!(schema.profile, SettingsProfile::Full);
    }

    #[test]
    fn test_find_attribute_errors() {
        let schema = SchemaFile::from_yaml(SCHEMA).unwrap();
        assert!(matches!(
            schema.find_attribute("price"),
            Err(ConfigError::InvalidAttributePath(_))
        ));
        assert!(matches!(
            schema.find_attribute("mm_other.price"),
            Err(ConfigError::ModelNotFound(_))
        ));
        assert!(matches!(
            schema.find_attribute("mm_products.weight"),
            Err(ConfigError::AttributeNotFound { .. })
        ));
    }

    #[test]
    fn test_invalid_identifier_rejected() {
        let yaml = "models:\n  - table: \"mm products\"\n";
        assert!(matches!(
            SchemaFile::from_yaml(yaml),
            Err(ConfigError::Yaml(_))
        ));
    }

    #[test]
    fn test_unknown_fixture_column_rejected() {
        let yaml = r#"
models:
  - table: t
    attributes:
      - col_name: val
    rows:
      - { id: 1, other: 2 }
"#;
        let schema = SchemaFile::from_yaml(yaml).unwrap();
        assert!(matches!(
            schema.memory_database(),
            Err(ConfigError::Fixture(DatabaseError::ColumnNotFound(_)))
        ));
    }

    #[test]
    fn test_non_integer_fixture_cell_rejected() {
        let yaml = r#"
models:
  - table: t
    attributes:
      - col_name: val
    rows:
      - { id: 1, val: abc }
"#;
        let schema = SchemaFile::from_yaml(yaml).unwrap();
        assert!(matches!(
            schema.memory_database(),
            Err(ConfigError::Fixture(DatabaseError::InvalidValue { .. }))
        ));
    }

    #[test]
    fn test_numeric_attribute_over_fixtures() {
        let schema = SchemaFile::from_yaml(SCHEMA).unwrap();
        let db = Arc::new(schema.memory_database().unwrap());
        let price = schema
            .numeric_attribute("mm_products.price", db.clone(), None)
            .unwrap();
        assert_eq!(price.profile(), SettingsProfile::Legacy);
        assert_eq!(
            tokio_test::block_on(price.filter_greater_than(5.into(), true)).unwrap(),
            vec![1, 2]
        );

        let stock = schema
            .numeric_attribute("mm_products.stock", db, Some(SettingsProfile::Reduced))
            .unwrap();
        assert_eq!(stock.profile(), SettingsProfile::Reduced);
        assert_eq!(
            tokio_test::block_on(stock.filter_less_than(1.into(), false)).unwrap(),
            vec![3]
        );
    }
}
