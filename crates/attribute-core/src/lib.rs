//! Core attribute contracts for MetaModels-style dynamic record schemas.
//!
//! This crate provides the foundational pieces every attribute type builds on:
//!
//! - [`ScalarAttribute`] / [`ComparableAttribute`] - What an attribute type exposes
//! - [`BaseSimple`] - Shared defaults (setting names, field definition) held by composition
//! - [`Database`] - The injected query execution capability
//! - [`MetaModel`] - The owning record type that maps to a backing table
//! - [`FilterValue`] - Loosely typed filter input with a parse-or-zero integer cast
//!
//! # Architecture
//!
//! ```text
//! attribute-core (this crate)
//!    │
//!    ├─── attribute-numeric   (NumericAttribute on top of BaseSimple)
//!    ├─── mysql-database      (Database implementation over mysql_async)
//!    └─── metamodels-numeric  (schema file loading + CLI)
//! ```
//!
//! # Example
//!
//! ```rust
//! use attribute_core::{ComparisonOperator, FilterValue, IdQuery, Identifier};
//!
//! let query = IdQuery::new(
//!     Identifier::new("mm_products").unwrap(),
//!     Identifier::new("price").unwrap(),
//!     ComparisonOperator::GreaterThan,
//!     FilterValue::from("12abc").to_integer(),
//! );
//! assert_eq!(query.to_sql(), "SELECT id FROM mm_products WHERE price > 12");
//! ```

pub mod attribute;
pub mod base;
pub mod database;
pub mod field;
pub mod identifier;
pub mod memory;
pub mod model;
pub mod settings;
pub mod types;
pub mod value;

pub use attribute::{AttributeError, ComparableAttribute, ItemId, ScalarAttribute};
pub use base::{AttributeMeta, BaseSimple};
pub use database::{ComparisonOperator, Database, DatabaseError, IdQuery, ResultSet, SqlValue};
pub use field::FieldDefinition;
pub use identifier::{Identifier, IdentifierError};
pub use memory::MemoryDatabase;
pub use model::{MetaModel, TableModel};
pub use settings::SettingNames;
pub use types::{ColumnDefault, ColumnType, MySqlDdl, StorageType, ToDdl};
pub use value::FilterValue;
