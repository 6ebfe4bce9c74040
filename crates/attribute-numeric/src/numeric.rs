//! The numeric attribute.

use crate::profile::SettingsProfile;
use async_trait::async_trait;
use attribute_core::{
    AttributeError, AttributeMeta, BaseSimple, ComparableAttribute, ComparisonOperator, Database,
    FieldDefinition, FilterValue, IdQuery, Identifier, ItemId, MetaModel, ScalarAttribute,
    SettingNames, StorageType,
};
use serde_json::{Map, Value};
use std::fmt;
use std::sync::Arc;
use tracing::debug;

/// Form input used for numeric attributes.
pub const INPUT_TYPE: &str = "text";
/// Validation pattern restricting input to digits.
pub const RGXP: &str = "digit";

/// Attribute storing an optional integer per item.
#[derive(Clone)]
pub struct NumericAttribute {
    model: Arc<dyn MetaModel>,
    base: BaseSimple,
    database: Arc<dyn Database>,
    profile: SettingsProfile,
}

impl NumericAttribute {
    pub fn new(
        model: Arc<dyn MetaModel>,
        meta: AttributeMeta,
        database: Arc<dyn Database>,
        profile: SettingsProfile,
    ) -> Self {
        Self {
            model,
            base: BaseSimple::new(meta),
            database,
            profile,
        }
    }

    pub fn col_name(&self) -> &Identifier {
        self.base.col_name()
    }

    pub fn table_name(&self) -> &Identifier {
        self.model.table_name()
    }

    pub fn profile(&self) -> SettingsProfile {
        self.profile
    }

    /// Ids of all items whose value satisfies `<column> <operator> <value>`.
    async fn ids_filtered(
        &self,
        value: &FilterValue,
        operator: ComparisonOperator,
    ) -> Result<Vec<ItemId>, AttributeError> {
        let query = IdQuery::new(
            self.table_name().clone(),
            self.col_name().clone(),
            operator,
            value.to_integer(),
        );
        debug!("Filtering numeric attribute: {query}");

        let result = self.database.execute_uncached(&query).await?;
        let ids = result
            .fetch_each(IdQuery::ID_COLUMN)?
            .into_iter()
            .map(|v| {
                v.as_i64()
                    .ok_or_else(|| AttributeError::InvalidItemId(format!("{v:?}")))
            })
            .collect::<Result<Vec<_>, _>>()?;

        debug!("{} items matched {}.{}", ids.len(), query.table, query.column);
        Ok(ids)
    }
}

impl fmt::Debug for NumericAttribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NumericAttribute")
            .field("table", self.table_name())
            .field("column", self.col_name())
            .field("profile", &self.profile)
            .finish_non_exhaustive()
    }
}

impl ScalarAttribute for NumericAttribute {
    fn storage_type(&self) -> StorageType {
        StorageType::nullable_int32()
    }

    fn setting_names(&self) -> SettingNames {
        self.base
            .setting_names()
            .extended(self.profile.extension_keys().iter().copied())
    }

    fn field_definition(&self, overrides: &Map<String, Value>) -> FieldDefinition {
        let mut def = self
            .base
            .field_definition(&self.setting_names(), overrides);
        def.set_input_type(INPUT_TYPE);
        def.set_eval("rgxp", RGXP);
        def
    }
}

#[async_trait]
impl ComparableAttribute for NumericAttribute {
    async fn filter_greater_than(
        &self,
        value: FilterValue,
        inclusive: bool,
    ) -> Result<Vec<ItemId>, AttributeError> {
        self.ids_filtered(&value, ComparisonOperator::greater(inclusive))
            .await
    }

    async fn filter_less_than(
        &self,
        value: FilterValue,
        inclusive: bool,
    ) -> Result<Vec<ItemId>, AttributeError> {
        self.ids_filtered(&value, ComparisonOperator::less(inclusive))
            .await
    }

    async fn filter_not_equal(&self, value: FilterValue) -> Result<Vec<ItemId>, AttributeError> {
        self.ids_filtered(&value, ComparisonOperator::NotEqual).await
    }
}
