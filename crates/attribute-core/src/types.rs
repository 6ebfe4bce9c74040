//! Storage types for attribute columns and their DDL rendering.
//!
//! An attribute declares a [`StorageType`] (column type, nullability and
//! default). Hosts that create or migrate the backing table render it through
//! a [`ToDdl`] implementation; [`MySqlDdl`] produces the MySQL dialect.

use crate::identifier::Identifier;
use serde::{Deserialize, Serialize};

/// Column type of an attribute's backing column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ColumnType {
    /// 32-bit signed integer with a display width
    Int32 {
        /// Display width (MySQL `int(N)`)
        display_width: u8,
    },

    /// 64-bit signed integer
    Int64,

    /// Variable-length character string with max length
    VarChar {
        /// Maximum length
        length: u16,
    },

    /// Unlimited text
    Text,
}

/// Default value clause of a column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum ColumnDefault {
    /// No DEFAULT clause
    None,
    /// `default NULL`
    Null,
    /// `default <integer>`
    Integer(i64),
    /// `default '<text>'`
    Text(String),
}

/// Full storage declaration of an attribute column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageType {
    pub column_type: ColumnType,
    pub nullable: bool,
    pub default: ColumnDefault,
}

impl StorageType {
    pub fn new(column_type: ColumnType, nullable: bool, default: ColumnDefault) -> Self {
        Self {
            column_type,
            nullable,
            default,
        }
    }

    /// Nullable 32-bit integer defaulting to NULL.
    ///
    /// Keeps "no value set" distinguishable from zero.
    pub fn nullable_int32() -> Self {
        Self::new(
            ColumnType::Int32 { display_width: 10 },
            true,
            ColumnDefault::Null,
        )
    }
}

/// Trait for generating DDL fragments.
pub trait ToDdl {
    /// Convert a column type to a DDL type string.
    fn to_ddl(&self, column_type: &ColumnType) -> String;

    /// Render the column definition fragment (type, nullability, default).
    fn to_column_definition(&self, storage: &StorageType) -> String;

    /// Generate the statement adding an attribute column to its table.
    fn to_add_column(
        &self,
        table: &Identifier,
        column: &Identifier,
        storage: &StorageType,
    ) -> String;
}

/// MySQL DDL generator.
pub struct MySqlDdl;

impl ToDdl for MySqlDdl {
    fn to_ddl(&self, column_type: &ColumnType) -> String {
        match column_type {
            ColumnType::Int32 { display_width } => format!("int({display_width})"),
            ColumnType::Int64 => "bigint(20)".to_string(),
            ColumnType::VarChar { length } => format!("varchar({length})"),
            ColumnType::Text => "text".to_string(),
        }
    }

    fn to_column_definition(&self, storage: &StorageType) -> String {
        let null_clause = if storage.nullable { "NULL" } else { "NOT NULL" };
        let mut definition = format!("{} {}", self.to_ddl(&storage.column_type), null_clause);
        match &storage.default {
            ColumnDefault::None => {}
            ColumnDefault::Null => definition.push_str(" default NULL"),
            ColumnDefault::Integer(i) => definition.push_str(&format!(" default '{i}'")),
            ColumnDefault::Text(s) => {
                definition.push_str(&format!(" default '{}'", s.replace('\'', "''")))
            }
        }
        definition
    }

    fn to_add_column(
        &self,
        table: &Identifier,
        column: &Identifier,
        storage: &StorageType,
    ) -> String {
        format!(
            "ALTER TABLE {table} ADD {column} {}",
            self.to_column_definition(storage)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_ddl() {
        let ddl = MySqlDdl;
        assert_eq!(
            ddl.to_ddl(&ColumnType::Int32 { display_width: 10 }),
            "int(10)"
        );
        assert_eq!(ddl.to_ddl(&ColumnType::Int64), "bigint(20)");
    }

    #[test]
    fn test_string_ddl() {
        let ddl = MySqlDdl;
        assert_eq!(
            ddl.to_ddl(&ColumnType::VarChar { length: 255 }),
            "varchar(255)"
        );
        assert_eq!(ddl.to_ddl(&ColumnType::Text), "text");
    }

    #[test]
    fn test_nullable_int32_definition() {
        let ddl = MySqlDdl;
        assert_eq!(
            ddl.to_column_definition(&StorageType::nullable_int32()),
            "int(10) NULL default NULL"
        );
    }

    #[test]
    fn test_column_definition_defaults() {
        let ddl = MySqlDdl;
        let not_null = StorageType::new(ColumnType::Int64, false, ColumnDefault::Integer(0));
        assert_eq!(
            ddl.to_column_definition(&not_null),
            "bigint(20) NOT NULL default '0'"
        );

        let text = StorageType::new(
            ColumnType::VarChar { length: 64 },
            false,
            ColumnDefault::Text("it's".to_string()),
        );
        assert_eq!(
            ddl.to_column_definition(&text),
            "varchar(64) NOT NULL default 'it''s'"
        );

        let bare = StorageType::new(ColumnType::Text, true, ColumnDefault::None);
        assert_eq!(ddl.to_column_definition(&bare), "text NULL");
    }

    #[test]
    fn test_add_column() {
        let ddl = MySqlDdl;
        let table = Identifier::new("mm_products").unwrap();
        let column = Identifier::new("price").unwrap();
        assert_eq!(
            ddl.to_add_column(&table, &column, &StorageType::nullable_int32()),
            "ALTER TABLE mm_products ADD price int(10) NULL default NULL"
        );
    }

    #[test]
    fn test_storage_type_serde() {
        let storage = StorageType::nullable_int32();
        let json = serde_json::to_value(&storage).unwrap();
        assert_eq!(json["column_type"]["type"], "int32");
        assert_eq!(json["column_type"]["display_width"], 10);
        assert_eq!(json["nullable"], true);
        assert_eq!(json["default"]["kind"], "null");
        let parsed: StorageType = serde_json::from_value(json).unwrap();
        assert_eq!(parsed, storage);
    }
}
