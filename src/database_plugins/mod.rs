// ABOUTME: Query executor abstraction for the LightBnB store
// ABOUTME: Plugin architecture with SQLite and PostgreSQL backends behind one trait

use crate::database::CompiledQuery;
use crate::models::{Row, SqlValue};
use async_trait::async_trait;
use lightbnb_core::errors::StoreResult;
use std::sync::Arc;

pub mod factory;
pub mod sqlite;

#[cfg(feature = "postgresql")]
pub mod postgres;

/// Sends statements to the data store.
///
/// Implementations own their connection pool and serve concurrent calls. A
/// failure is always an `Err(StoreError::QueryExecution { .. })`; an empty
/// result set is `Ok(vec![])`. Executors never retry.
#[async_trait]
pub trait QueryExecutor: Send + Sync {
    /// Execute `statement`, binding `parameters[i]` to placeholder `$(i + 1)`
    async fn execute(&self, statement: &str, parameters: &[SqlValue]) -> StoreResult<Vec<Row>>;

    /// Execute a compiled query
    async fn run(&self, query: &CompiledQuery) -> StoreResult<Vec<Row>> {
        self.execute(query.statement(), query.parameters()).await
    }
}

#[async_trait]
impl<E: QueryExecutor + ?Sized> QueryExecutor for Arc<E> {
    async fn execute(&self, statement: &str, parameters: &[SqlValue]) -> StoreResult<Vec<Row>> {
        (**self).execute(statement, parameters).await
    }
}
