// ABOUTME: Property repository implementation
// ABOUTME: Runs compiled property searches and ordered property inserts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LightBnB

use super::{decode_rows, returned_row, PropertyRepository};
use crate::constants::tables;
use crate::database::{OrderedInsertBinder, PredicateCompiler};
use crate::database_plugins::QueryExecutor;
use crate::models::{FilterOptions, PropertyListing, PropertyRecord, Row};
use async_trait::async_trait;
use lightbnb_core::errors::StoreResult;
use tracing::debug;

/// `PropertyRepository` over any executor
pub struct PropertyRepositoryImpl<E> {
    executor: E,
}

impl<E: QueryExecutor> PropertyRepositoryImpl<E> {
    /// Create a new `PropertyRepository` with the given executor
    #[must_use]
    pub const fn new(executor: E) -> Self {
        Self { executor }
    }

    async fn search(
        &self,
        compiler: PredicateCompiler,
        options: &FilterOptions,
        limit: Option<u32>,
    ) -> StoreResult<Vec<PropertyListing>> {
        let query = compiler.compile(options, limit);
        let rows = self.executor.run(&query).await?;
        debug!(rows = rows.len(), "Property search completed");
        decode_rows(rows)
    }
}

#[async_trait]
impl<E: QueryExecutor> PropertyRepository for PropertyRepositoryImpl<E> {
    async fn get_all_properties(
        &self,
        options: &FilterOptions,
        limit: Option<u32>,
    ) -> StoreResult<Vec<PropertyListing>> {
        self.search(PredicateCompiler::SUMMARY, options, limit).await
    }

    async fn get_all_properties_detailed(
        &self,
        options: &FilterOptions,
        limit: Option<u32>,
    ) -> StoreResult<Vec<PropertyListing>> {
        self.search(PredicateCompiler::DETAILED, options, limit).await
    }

    async fn add_property(&self, record: PropertyRecord) -> StoreResult<Row> {
        let query = OrderedInsertBinder::PROPERTIES.bind_record(record)?;
        let rows = self.executor.run(&query).await?;
        returned_row(rows, tables::PROPERTIES)
    }
}
