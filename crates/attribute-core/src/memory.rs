//! In-memory [`Database`] implementation.
//!
//! Holds tables as plain rows and evaluates [`IdQuery`] predicates with SQL
//! comparison semantics (a NULL cell never matches). Rows are returned in
//! insertion order. Used by tests and by the CLI when no server is configured.

use crate::database::{Database, DatabaseError, IdQuery, ResultSet, SqlValue};
use async_trait::async_trait;
use std::collections::{BTreeMap, HashMap};
use tracing::debug;

#[derive(Debug, Clone, Default)]
struct MemoryTable {
    columns: Vec<String>,
    rows: Vec<Vec<SqlValue>>,
}

impl MemoryTable {
    fn column_index(&self, column: &str) -> Result<usize, DatabaseError> {
        self.columns
            .iter()
            .position(|c| c == column)
            .ok_or_else(|| DatabaseError::ColumnNotFound(column.to_string()))
    }
}

/// Database over tables held in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryDatabase {
    tables: HashMap<String, MemoryTable>,
}

impl MemoryDatabase {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create (or replace) a table with the given columns.
    pub fn create_table<I, S>(&mut self, name: impl Into<String>, columns: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tables.insert(
            name.into(),
            MemoryTable {
                columns: columns.into_iter().map(Into::into).collect(),
                rows: Vec::new(),
            },
        );
    }

    /// Append a row; columns missing from `row` are stored as NULL.
    ///
    /// Every column holds integers, so a text cell must parse as one.
    pub fn insert_row(
        &mut self,
        table: &str,
        row: &BTreeMap<String, SqlValue>,
    ) -> Result<(), DatabaseError> {
        let t = self
            .tables
            .get_mut(table)
            .ok_or_else(|| DatabaseError::TableNotFound(table.to_string()))?;
        if let Some(unknown) = row.keys().find(|k| !t.columns.iter().any(|c| c == *k)) {
            return Err(DatabaseError::ColumnNotFound(format!("{table}.{unknown}")));
        }
        let values = t
            .columns
            .iter()
            .map(|c| match row.get(c) {
                Some(SqlValue::Text(s)) => s.trim().parse().map(SqlValue::Integer).map_err(|_| {
                    DatabaseError::InvalidValue {
                        column: format!("{table}.{c}"),
                        value: s.clone(),
                    }
                }),
                Some(value) => Ok(value.clone()),
                None => Ok(SqlValue::Null),
            })
            .collect::<Result<Vec<_>, _>>()?;
        t.rows.push(values);
        Ok(())
    }

    /// Builder-style [`Self::create_table`] followed by [`Self::insert_row`] for each row.
    pub fn with_table<I, S>(
        mut self,
        name: &str,
        columns: I,
        rows: &[BTreeMap<String, SqlValue>],
    ) -> Result<Self, DatabaseError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.create_table(name, columns);
        for row in rows {
            self.insert_row(name, row)?;
        }
        Ok(self)
    }

    pub fn row_count(&self, table: &str) -> Option<usize> {
        self.tables.get(table).map(|t| t.rows.len())
    }
}

#[async_trait]
impl Database for MemoryDatabase {
    async fn execute_uncached(&self, query: &IdQuery) -> Result<ResultSet, DatabaseError> {
        debug!("Executing in memory: {query}");

        let table = self
            .tables
            .get(query.table.as_str())
            .ok_or_else(|| DatabaseError::TableNotFound(query.table.to_string()))?;
        let id_idx = table.column_index(IdQuery::ID_COLUMN)?;
        let value_idx = table.column_index(query.column.as_str())?;

        let rows = table
            .rows
            .iter()
            .filter(|row| query.operator.matches(row[value_idx].as_i64(), query.value))
            .map(|row| vec![row[id_idx].clone()])
            .collect();

        Ok(ResultSet::new(vec![IdQuery::ID_COLUMN.to_string()], rows))
    }
}
