// ABOUTME: Database factory selecting the executor backend from the connection URL
// ABOUTME: Provides one executor type for SQLite and PostgreSQL with dispatch logging
//! Database factory for creating query executors
//!
//! The backend is chosen from the URL scheme. Every statement dispatched
//! through [`Database`] is logged with its parameter count, row count, and
//! duration; failures are logged and returned unchanged.

use super::sqlite::SqliteExecutor;
use super::QueryExecutor;
use crate::config::{DatabaseConfig, DatabaseUrl};
use crate::errors::{AppError, AppResult};
use crate::logging::StoreLogger;
use crate::models::{Row, SqlValue};
use async_trait::async_trait;
use lightbnb_core::errors::StoreResult;
use std::time::Instant;
use tracing::{debug, info};

#[cfg(feature = "postgresql")]
use super::postgres::PostgresExecutor;

/// Supported database types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatabaseType {
    /// Embedded `SQLite`
    SQLite,
    /// `PostgreSQL` server
    PostgreSQL,
}

/// Executor that delegates to the configured backend
#[derive(Clone)]
pub enum Database {
    /// `SQLite` backend
    SQLite(SqliteExecutor),
    /// `PostgreSQL` backend
    #[cfg(feature = "postgresql")]
    PostgreSQL(PostgresExecutor),
}

impl Database {
    /// Descriptive string for the current backend
    #[must_use]
    pub const fn backend_info(&self) -> &'static str {
        match self {
            Self::SQLite(_) => "SQLite (Local Development)",
            #[cfg(feature = "postgresql")]
            Self::PostgreSQL(_) => "PostgreSQL (Production)",
        }
    }

    /// Backend type
    #[must_use]
    pub const fn database_type(&self) -> DatabaseType {
        match self {
            Self::SQLite(_) => DatabaseType::SQLite,
            #[cfg(feature = "postgresql")]
            Self::PostgreSQL(_) => DatabaseType::PostgreSQL,
        }
    }

    /// Connect to the configured database
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `PostgreSQL` is requested without the `postgresql` feature
    /// - The database cannot be reached or opened
    pub async fn connect(config: &DatabaseConfig) -> AppResult<Self> {
        let db_type = detect_database_type(&config.url)?;
        debug!(url = %config.url, "Detected database type: {:?}", db_type);

        match db_type {
            DatabaseType::SQLite => {
                let executor = SqliteExecutor::connect(config).await?;
                info!("SQLite database connected");
                Ok(Self::SQLite(executor))
            }
            #[cfg(feature = "postgresql")]
            DatabaseType::PostgreSQL => {
                let executor = PostgresExecutor::connect(config).await?;
                info!("PostgreSQL database connected");
                Ok(Self::PostgreSQL(executor))
            }
            #[cfg(not(feature = "postgresql"))]
            DatabaseType::PostgreSQL => postgres_disabled(),
        }
    }
}

#[cfg(not(feature = "postgresql"))]
fn postgres_disabled() -> AppResult<Database> {
    Err(AppError::config(
        "PostgreSQL support not enabled. Enable the 'postgresql' feature flag.",
    ))
}

#[async_trait]
impl QueryExecutor for Database {
    async fn execute(&self, statement: &str, parameters: &[SqlValue]) -> StoreResult<Vec<Row>> {
        let operation = statement_kind(statement);
        let started = Instant::now();
        debug!(
            db.backend = self.backend_info(),
            db.statement = %statement,
            db.parameters = parameters.len(),
            "Dispatching statement"
        );

        let result = match self {
            Self::SQLite(executor) => executor.execute(statement, parameters).await,
            #[cfg(feature = "postgresql")]
            Self::PostgreSQL(executor) => executor.execute(statement, parameters).await,
        };

        let duration_ms = started.elapsed().as_millis() as u64;
        match &result {
            Ok(rows) => StoreLogger::log_database_operation(
                operation,
                parameters.len(),
                rows.len(),
                duration_ms,
            ),
            Err(error) => StoreLogger::log_database_failure(operation, error, duration_ms),
        }
        result
    }
}

/// Detect the backend from a parsed URL
///
/// # Errors
///
/// Returns an error if a `PostgreSQL` URL is given without the `postgresql` feature
pub fn detect_database_type(url: &DatabaseUrl) -> AppResult<DatabaseType> {
    if url.is_sqlite() {
        return Ok(DatabaseType::SQLite);
    }

    if cfg!(feature = "postgresql") {
        Ok(DatabaseType::PostgreSQL)
    } else {
        Err(AppError::config(
            "PostgreSQL connection string detected, but PostgreSQL support is not enabled. \
             Enable the 'postgresql' feature flag in Cargo.toml",
        ))
    }
}

/// Leading SQL keyword, used as the operation name in logs
fn statement_kind(statement: &str) -> &str {
    statement
        .split_whitespace()
        .next()
        .unwrap_or("UNKNOWN")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_sqlite_urls() {
        let memory = DatabaseUrl::parse_url("sqlite::memory:").unwrap();
        assert_eq!(detect_database_type(&memory).unwrap(), DatabaseType::SQLite);

        let file = DatabaseUrl::parse_url("sqlite:./data/lightbnb.db").unwrap();
        assert_eq!(detect_database_type(&file).unwrap(), DatabaseType::SQLite);
    }

    #[cfg(not(feature = "postgresql"))]
    #[test]
    fn test_postgres_requires_feature() {
        let url = DatabaseUrl::parse_url("postgres://localhost/lightbnb").unwrap();
        assert!(detect_database_type(&url).is_err());
    }

    #[test]
    fn test_statement_kind() {
        assert_eq!(statement_kind("  SELECT * FROM users"), "SELECT");
        assert_eq!(statement_kind("INSERT INTO users"), "INSERT");
        assert_eq!(statement_kind(""), "UNKNOWN");
    }
}
