// ABOUTME: PostgreSQL query executor backed by an sqlx connection pool
// ABOUTME: Binds positional parameters with concrete types and decodes rows into JSON scalars
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LightBnB

//! `PostgreSQL` executor
//!
//! Parameters are sent with concrete types, so textual decimals are bound as
//! `INT8` when integral and as `NUMERIC` otherwise. `NULL` is sent without a
//! declared type so the server infers it from the target column. Aggregates
//! such as `avg(rating)` come back as `NUMERIC` and are decoded as JSON numbers.

use super::QueryExecutor;
use crate::config::DatabaseConfig;
use crate::models::{Row, SqlValue};
use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use lightbnb_core::errors::{StoreError, StoreResult};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde_json::{Number, Value};
use sqlx::encode::{Encode, IsNull};
use sqlx::error::BoxDynError;
use sqlx::postgres::types::Oid;
use sqlx::postgres::{PgArgumentBuffer, PgArguments, PgPool, PgPoolOptions, PgRow, PgTypeInfo};
use sqlx::query::Query;
use sqlx::{Column, Postgres, Row as _, Type, TypeInfo, ValueRef};
use std::str::FromStr;
use std::time::Duration;

/// `PostgreSQL` executor
#[derive(Clone)]
pub struct PostgresExecutor {
    pool: PgPool,
}

impl PostgresExecutor {
    /// Open a pool for the configured database
    ///
    /// # Errors
    ///
    /// Returns `QueryExecution` if the server cannot be reached
    pub async fn connect(config: &DatabaseConfig) -> StoreResult<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(Duration::from_secs(config.acquire_timeout_secs))
            .connect(&config.url.to_connection_string())
            .await?;
        Ok(Self { pool })
    }

    /// Wrap an existing pool
    #[must_use]
    pub const fn from_pool(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Underlying pool
    #[must_use]
    pub const fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl QueryExecutor for PostgresExecutor {
    async fn execute(&self, statement: &str, parameters: &[SqlValue]) -> StoreResult<Vec<Row>> {
        let query = parameters
            .iter()
            .fold(sqlx::query(statement), |query, value| bind_value(query, value));

        let rows = query.fetch_all(&self.pool).await?;
        rows.iter().map(decode_row).collect()
    }
}

/// `NULL` parameter declared with OID 0, leaving its type to the server
struct UntypedNull;

impl Type<Postgres> for UntypedNull {
    fn type_info() -> PgTypeInfo {
        PgTypeInfo::with_oid(Oid(0))
    }
}

impl Encode<'_, Postgres> for UntypedNull {
    fn encode_by_ref(&self, _buf: &mut PgArgumentBuffer) -> Result<IsNull, BoxDynError> {
        Ok(IsNull::Yes)
    }
}

/// Wire form of a textual decimal
#[derive(Debug, PartialEq)]
enum NumericParameter {
    Integer(i64),
    Decimal(Decimal),
    Text(String),
}

fn numeric_parameter(text: &str) -> NumericParameter {
    if let Ok(number) = text.parse::<i64>() {
        NumericParameter::Integer(number)
    } else if let Ok(number) = Decimal::from_str(text) {
        NumericParameter::Decimal(number)
    } else {
        NumericParameter::Text(text.to_owned())
    }
}

fn bind_value<'q>(
    query: Query<'q, Postgres, PgArguments>,
    value: &SqlValue,
) -> Query<'q, Postgres, PgArguments> {
    match value {
        SqlValue::Null => query.bind(UntypedNull),
        SqlValue::Boolean(flag) => query.bind(*flag),
        SqlValue::Integer(number) => query.bind(*number),
        SqlValue::Real(number) => query.bind(*number),
        SqlValue::Numeric(text) => match numeric_parameter(text) {
            NumericParameter::Integer(number) => query.bind(number),
            NumericParameter::Decimal(number) => query.bind(number),
            NumericParameter::Text(text) => query.bind(text),
        },
        SqlValue::Text(text) => query.bind(text.clone()),
    }
}

fn float(number: Option<f64>) -> Value {
    number
        .and_then(Number::from_f64)
        .map_or(Value::Null, Value::Number)
}

fn decode_row(row: &PgRow) -> StoreResult<Row> {
    let mut decoded = Row::new();
    for column in row.columns() {
        let index = column.ordinal();
        let raw = row.try_get_raw(index)?;
        let value = if raw.is_null() {
            Value::Null
        } else {
            let type_name = raw.type_info().name().to_owned();
            match type_name.as_str() {
                "INT2" => Value::from(row.try_get::<i16, _>(index)?),
                "INT4" => Value::from(row.try_get::<i32, _>(index)?),
                "INT8" => Value::from(row.try_get::<i64, _>(index)?),
                "FLOAT4" => float(Some(f64::from(row.try_get::<f32, _>(index)?))),
                "FLOAT8" => float(Some(row.try_get::<f64, _>(index)?)),
                "NUMERIC" => float(row.try_get::<Decimal, _>(index)?.to_f64()),
                "BOOL" => Value::Bool(row.try_get::<bool, _>(index)?),
                "TEXT" | "VARCHAR" | "BPCHAR" | "NAME" => {
                    Value::String(row.try_get::<String, _>(index)?)
                }
                "DATE" => Value::String(row.try_get::<NaiveDate, _>(index)?.to_string()),
                "TIMESTAMP" => {
                    Value::String(row.try_get::<NaiveDateTime, _>(index)?.to_string())
                }
                "TIMESTAMPTZ" => {
                    Value::String(row.try_get::<DateTime<Utc>, _>(index)?.to_rfc3339())
                }
                other => {
                    return Err(StoreError::row_decode(format!(
                        "unsupported PostgreSQL type {other} in column '{}'",
                        column.name()
                    )))
                }
            }
        };
        decoded.insert(column.name().to_owned(), value);
    }
    Ok(decoded)
}
