// ABOUTME: SQLite query executor backed by an sqlx connection pool
// ABOUTME: Binds positional parameters and decodes rows into JSON scalars
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LightBnB

//! `SQLite` executor
//!
//! `SQLite` accepts `$n` placeholders, so compiled statements run unchanged.
//! In-memory databases live as long as their connection; the pool for them is
//! pinned to one connection that never expires.

use super::QueryExecutor;
use crate::config::DatabaseConfig;
use crate::models::{Row, SqlValue};
use async_trait::async_trait;
use lightbnb_core::errors::{StoreError, StoreResult};
use serde_json::{Number, Value};
use sqlx::query::Query;
use sqlx::sqlite::{
    SqliteArguments, SqliteConnectOptions, SqlitePool, SqlitePoolOptions, SqliteRow,
};
use sqlx::{Column, Row as _, Sqlite, TypeInfo, ValueRef};
use std::str::FromStr;
use std::time::Duration;

/// `SQLite` executor
#[derive(Clone)]
pub struct SqliteExecutor {
    pool: SqlitePool,
}

impl SqliteExecutor {
    /// Open a pool for the configured database, creating the file if needed
    ///
    /// # Errors
    ///
    /// Returns `QueryExecution` if the URL is malformed or the database cannot be opened
    pub async fn connect(config: &DatabaseConfig) -> StoreResult<Self> {
        let options = SqliteConnectOptions::from_str(&config.url.to_connection_string())?
            .create_if_missing(true);

        let mut pool_options = SqlitePoolOptions::new()
            .acquire_timeout(Duration::from_secs(config.acquire_timeout_secs));
        pool_options = if config.url.is_memory() {
            pool_options
                .max_connections(1)
                .min_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
        } else {
            pool_options.max_connections(config.max_connections)
        };

        let pool = pool_options.connect_with(options).await?;
        Ok(Self { pool })
    }

    /// Wrap an existing pool
    #[must_use]
    pub const fn from_pool(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Underlying pool
    #[must_use]
    pub const fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[async_trait]
impl QueryExecutor for SqliteExecutor {
    async fn execute(&self, statement: &str, parameters: &[SqlValue]) -> StoreResult<Vec<Row>> {
        let query = parameters
            .iter()
            .fold(sqlx::query(statement), |query, value| bind_value(query, value));

        let rows = query.fetch_all(&self.pool).await?;
        rows.iter().map(decode_row).collect()
    }
}

fn bind_value<'q>(
    query: Query<'q, Sqlite, SqliteArguments<'q>>,
    value: &SqlValue,
) -> Query<'q, Sqlite, SqliteArguments<'q>> {
    match value {
        SqlValue::Null => query.bind(Option::<i64>::None),
        SqlValue::Boolean(flag) => query.bind(*flag),
        SqlValue::Integer(number) => query.bind(*number),
        SqlValue::Real(number) => query.bind(*number),
        SqlValue::Numeric(text) => {
            if let Ok(number) = text.parse::<i64>() {
                query.bind(number)
            } else if let Ok(number) = text.parse::<f64>() {
                query.bind(number)
            } else {
                query.bind(text.clone())
            }
        }
        SqlValue::Text(text) => query.bind(text.clone()),
    }
}

fn decode_row(row: &SqliteRow) -> StoreResult<Row> {
    let mut decoded = Row::new();
    for column in row.columns() {
        let index = column.ordinal();
        let raw = row.try_get_raw(index)?;
        let value = if raw.is_null() {
            Value::Null
        } else {
            let type_name = raw.type_info().name().to_owned();
            match type_name.as_str() {
                "INTEGER" | "BOOLEAN" => Value::from(row.try_get::<i64, _>(index)?),
                "REAL" => Number::from_f64(row.try_get::<f64, _>(index)?)
                    .map_or(Value::Null, Value::Number),
                "BLOB" => Value::from(row.try_get::<Vec<u8>, _>(index)?),
                "TEXT" | "DATE" | "DATETIME" | "TIME" => {
                    Value::String(row.try_get::<String, _>(index)?)
                }
                other => {
                    return Err(StoreError::row_decode(format!(
                        "unsupported SQLite type {other} in column '{}'",
                        column.name()
                    )))
                }
            }
        };
        decoded.insert(column.name().to_owned(), value);
    }
    Ok(decoded)
}
