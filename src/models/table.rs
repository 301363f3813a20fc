// src/models/table.rs

use serde::Serialize;
use serde_json::Value;
use sqlx::PgPool;
use thiserror::Error;

use crate::db::{self, Param, Record};

#[derive(Debug, Error, PartialEq)]
pub enum TableError {
    #[error("row {row} has {found} values but the table has {expected} columns")]
    ArityMismatch { row: usize, expected: usize, found: usize },
    #[error("unknown column '{0}'")]
    UnknownColumn(String),
}

/// Labeled result set: ordered columns, ordered rows.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Record>,
}

impl Table {
    pub fn new<S: Into<String>>(
        columns: impl IntoIterator<Item = S>,
        rows: Vec<Record>,
    ) -> Result<Self, TableError> {
        let columns: Vec<String> = columns.into_iter().map(Into::into).collect();
        if let Some((row, r)) = rows.iter().enumerate().find(|(_, r)| r.len() != columns.len()) {
            return Err(TableError::ArityMismatch { row, expected: columns.len(), found: r.len() });
        }
        Ok(Self { columns, rows })
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Record] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// All values of one column, top to bottom.
    pub fn column(&self, name: &str) -> Result<Vec<&Value>, TableError> {
        let idx = self
            .column_index(name)
            .ok_or_else(|| TableError::UnknownColumn(name.to_owned()))?;
        Ok(self.rows.iter().map(|r| &r[idx]).collect())
    }
}

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("table error: {0}")]
    Table(#[from] TableError),
}

/// Runs the query and labels its rows with `columns`.
pub async fn table_from_query(
    pool: &PgPool,
    sql: &str,
    columns: &[&str],
    params: &[Param],
) -> Result<Table, ReportError> {
    let rows = db::fetch_rows(pool, sql, params).await?;
    Ok(Table::new(columns.iter().copied(), rows)?)
}
