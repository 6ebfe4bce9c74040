//! Capabilities an attribute type exposes to the host.

use crate::database::DatabaseError;
use crate::field::FieldDefinition;
use crate::identifier::IdentifierError;
use crate::settings::SettingNames;
use crate::types::StorageType;
use crate::value::FilterValue;
use async_trait::async_trait;
use serde_json::{Map, Value};

/// Record identifier as stored in the `id` column.
pub type ItemId = i64;

/// Error type for attribute operations.
#[derive(Debug, thiserror::Error)]
pub enum AttributeError {
    #[error("Invalid identifier: {0}")]
    Identifier(#[from] IdentifierError),

    /// Any fault of the injected database, passed through untouched
    #[error(transparent)]
    Database(#[from] DatabaseError),

    /// The `id` column held something that is not an integer
    #[error("Non-integer item id: {0}")]
    InvalidItemId(String),
}

/// Schema-facing side of an attribute type.
pub trait ScalarAttribute: Send + Sync {
    /// Column type, nullability and default of the backing column.
    fn storage_type(&self) -> StorageType;

    /// Setting keys this attribute type recognizes, base keys first.
    fn setting_names(&self) -> SettingNames;

    /// Admin-form descriptor with `overrides` applied.
    fn field_definition(&self, overrides: &Map<String, Value>) -> FieldDefinition;
}

/// Attributes whose values can be filtered by ordered comparison.
#[async_trait]
pub trait ComparableAttribute: ScalarAttribute {
    /// Ids of items whose value is above `value` (or equal when `inclusive`).
    async fn filter_greater_than(
        &self,
        value: FilterValue,
        inclusive: bool,
    ) -> Result<Vec<ItemId>, AttributeError>;

    /// Ids of items whose value is below `value` (or equal when `inclusive`).
    async fn filter_less_than(
        &self,
        value: FilterValue,
        inclusive: bool,
    ) -> Result<Vec<ItemId>, AttributeError>;

    /// Ids of items whose value differs from `value`. Items without a value never match.
    async fn filter_not_equal(&self, value: FilterValue) -> Result<Vec<ItemId>, AttributeError>;
}
