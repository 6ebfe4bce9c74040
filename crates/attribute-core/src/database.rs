//! Query execution capability injected into attributes.
//!
//! Attributes never reach for a process-wide connection. They are handed an
//! `Arc<dyn Database>` at construction and send it fully built [`IdQuery`]
//! predicates. Implementations decide how to run them: the MySQL backend sends
//! [`IdQuery::to_sql`] to the server, [`crate::MemoryDatabase`] evaluates the
//! predicate over rows held in memory.

use crate::identifier::Identifier;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Error type for database operations.
#[derive(Debug, thiserror::Error)]
pub enum DatabaseError {
    /// Could not obtain a connection
    #[error("Database connection failed: {0}")]
    Connection(String),

    /// The server rejected or failed the query
    #[error("Query failed: {query}: {message}")]
    Query { query: String, message: String },

    /// Table not known to the backend
    #[error("Table not found: {0}")]
    TableNotFound(String),

    /// Column not present in a table or result set
    #[error("Column not found: {0}")]
    ColumnNotFound(String),

    /// Cell value the integer column cannot hold
    #[error("Invalid value for column {column}: '{value}' is not an integer")]
    InvalidValue { column: String, value: String },
}

/// Comparison operator of a filter predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComparisonOperator {
    GreaterThan,
    GreaterThanOrEqual,
    LessThan,
    LessThanOrEqual,
    NotEqual,
}

impl ComparisonOperator {
    /// Operator for a lower bound, `>=` when the bound itself matches.
    pub fn greater(inclusive: bool) -> Self {
        if inclusive {
            Self::GreaterThanOrEqual
        } else {
            Self::GreaterThan
        }
    }

    /// Operator for an upper bound, `<=` when the bound itself matches.
    pub fn less(inclusive: bool) -> Self {
        if inclusive {
            Self::LessThanOrEqual
        } else {
            Self::LessThan
        }
    }

    pub fn as_sql(&self) -> &'static str {
        match self {
            Self::GreaterThan => ">",
            Self::GreaterThanOrEqual => ">=",
            Self::LessThan => "<",
            Self::LessThanOrEqual => "<=",
            Self::NotEqual => "!=",
        }
    }

    /// Evaluate `lhs <op> rhs` with SQL semantics: a NULL operand never matches.
    pub fn matches(&self, lhs: Option<i64>, rhs: i64) -> bool {
        let Some(lhs) = lhs else {
            return false;
        };
        match self {
            Self::GreaterThan => lhs > rhs,
            Self::GreaterThanOrEqual => lhs >= rhs,
            Self::LessThan => lhs < rhs,
            Self::LessThanOrEqual => lhs <= rhs,
            Self::NotEqual => lhs != rhs,
        }
    }
}

impl fmt::Display for ComparisonOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_sql())
    }
}

/// `SELECT id FROM <table> WHERE <column> <op> <value>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdQuery {
    pub table: Identifier,
    pub column: Identifier,
    pub operator: ComparisonOperator,
    pub value: i64,
}

impl IdQuery {
    /// Name of the column every query selects.
    pub const ID_COLUMN: &'static str = "id";

    pub fn new(
        table: Identifier,
        column: Identifier,
        operator: ComparisonOperator,
        value: i64,
    ) -> Self {
        Self {
            table,
            column,
            operator,
            value,
        }
    }

    /// SQL text of the query. The value is an integer, so interpolation is safe.
    pub fn to_sql(&self) -> String {
        format!(
            "SELECT {} FROM {} WHERE {} {} {}",
            Self::ID_COLUMN,
            self.table,
            self.column,
            self.operator,
            self.value
        )
    }
}

impl fmt::Display for IdQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_sql())
    }
}

/// A single cell of a result set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SqlValue {
    Null,
    Integer(i64),
    Text(String),
}

impl SqlValue {
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            SqlValue::Integer(i) => Some(*i),
            SqlValue::Text(s) => s.trim().parse().ok(),
            SqlValue::Null => None,
        }
    }
}

/// Rows returned by a query, column-addressable.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultSet {
    columns: Vec<String>,
    rows: Vec<Vec<SqlValue>>,
}

impl ResultSet {
    pub fn new(columns: Vec<String>, rows: Vec<Vec<SqlValue>>) -> Self {
        Self { columns, rows }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// All values of `column` in row order.
    pub fn fetch_each(&self, column: &str) -> Result<Vec<SqlValue>, DatabaseError> {
        let idx = self
            .columns
            .iter()
            .position(|c| c == column)
            .ok_or_else(|| DatabaseError::ColumnNotFound(column.to_string()))?;
        Ok(self
            .rows
            .iter()
            .map(|row| row.get(idx).cloned().unwrap_or(SqlValue::Null))
            .collect())
    }
}

/// Query execution capability.
///
/// Implementations must be usable from many tasks at once; a call performs one
/// round-trip and returns the complete result or an error.
#[async_trait]
pub trait Database: Send + Sync {
    /// Execute a query bypassing any result cache.
    async fn execute_uncached(&self, query: &IdQuery) -> Result<ResultSet, DatabaseError>;
}
