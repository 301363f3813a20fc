// src/db/mod.rs

use serde_json::Value;
use sqlx::postgres::{PgPool, PgPoolOptions, PgRow};
use sqlx::{Column, Row, TypeInfo};

use crate::config::Config;

/// One result row, cells in select-list order.
pub type Record = Vec<Value>;

pub async fn connect(config: &Config) -> anyhow::Result<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(config.db_acquire_timeout)
        .connect(&config.database_url)
        .await?;

    tracing::info!(max_connections = config.db_max_connections, "connected to PostgreSQL");
    Ok(pool)
}

/// Positional bind value for `$1..$n` placeholders.
#[derive(Debug, Clone, PartialEq)]
pub enum Param {
    Int(i64),
    Text(String),
}

impl From<i64> for Param {
    fn from(v: i64) -> Self {
        Param::Int(v)
    }
}

impl From<i32> for Param {
    fn from(v: i32) -> Self {
        Param::Int(v.into())
    }
}

impl From<&str> for Param {
    fn from(v: &str) -> Self {
        Param::Text(v.to_owned())
    }
}

impl From<String> for Param {
    fn from(v: String) -> Self {
        Param::Text(v)
    }
}

/// Runs `sql` with `params` bound in order and returns every row.
///
/// The connection is checked out for the duration of this call only and goes
/// back to the pool when `conn` drops, whether the statement succeeded or not.
pub async fn fetch_rows(pool: &PgPool, sql: &str, params: &[Param]) -> Result<Vec<Record>, sqlx::Error> {
    let mut conn = pool.acquire().await?;

    let mut query = sqlx::query(sql);
    for p in params {
        query = match p {
            Param::Int(v) => query.bind(*v),
            Param::Text(s) => query.bind(s.clone()),
        };
    }

    let rows = query.fetch_all(&mut *conn).await?;
    tracing::debug!(rows = rows.len(), params = params.len(), "fetched");

    rows.iter().map(decode_row).collect()
}

/// First column of every row as text; NULLs are skipped. Used for filter options.
pub async fn fetch_column(pool: &PgPool, sql: &str, params: &[Param]) -> Result<Vec<String>, sqlx::Error> {
    let rows = fetch_rows(pool, sql, params).await?;
    Ok(rows
        .into_iter()
        .filter_map(|mut r| if r.is_empty() { None } else { Some(r.swap_remove(0)) })
        .filter_map(|v| match v {
            Value::String(s) => Some(s),
            Value::Null => None,
            other => Some(other.to_string()),
        })
        .collect())
}

pub async fn ping(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CellKind {
    Int2,
    Int4,
    Int8,
    Float4,
    Float8,
    Bool,
    Text,
}

fn cell_kind(type_name: &str) -> Option<CellKind> {
    match type_name {
        "INT2" => Some(CellKind::Int2),
        "INT4" => Some(CellKind::Int4),
        "INT8" => Some(CellKind::Int8),
        "FLOAT4" => Some(CellKind::Float4),
        "FLOAT8" => Some(CellKind::Float8),
        "BOOL" => Some(CellKind::Bool),
        "TEXT" | "VARCHAR" | "BPCHAR" | "CHAR" | "NAME" => Some(CellKind::Text),
        _ => None,
    }
}

fn decode_row(row: &PgRow) -> Result<Record, sqlx::Error> {
    (0..row.len()).map(|i| decode_cell(row, i)).collect()
}

fn decode_cell(row: &PgRow, idx: usize) -> Result<Value, sqlx::Error> {
    let column = row.column(idx);
    let type_name = column.type_info().name();

    let Some(kind) = cell_kind(type_name) else {
        return Err(sqlx::Error::ColumnDecode {
            index: column.name().to_string(),
            source: format!("unsupported column type {type_name}").into(),
        });
    };

    let value = match kind {
        CellKind::Int2 => row.try_get::<Option<i16>, _>(idx)?.map(Value::from),
        CellKind::Int4 => row.try_get::<Option<i32>, _>(idx)?.map(Value::from),
        CellKind::Int8 => row.try_get::<Option<i64>, _>(idx)?.map(Value::from),
        CellKind::Float4 => row.try_get::<Option<f32>, _>(idx)?.map(|v| Value::from(f64::from(v))),
        CellKind::Float8 => row.try_get::<Option<f64>, _>(idx)?.map(Value::from),
        CellKind::Bool => row.try_get::<Option<bool>, _>(idx)?.map(Value::from),
        CellKind::Text => row.try_get::<Option<String>, _>(idx)?.map(Value::from),
    };
    Ok(value.unwrap_or(Value::Null))
}
