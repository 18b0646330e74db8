// ABOUTME: Ordered insert binder for positional INSERT statements
// ABOUTME: Binds record fields by declared column position and scales the currency column
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LightBnB

use super::money::scale_value;
use super::params::{CompiledQuery, QueryParams};
use crate::constants::{columns, tables};
use crate::models::{PropertyRecord, SqlValue};
use lightbnb_core::errors::{StoreError, StoreResult};
use tracing::trace;

/// Builds `INSERT ... RETURNING *` statements for one table.
///
/// Field `i` of a record is bound to `columns[i]`; the binder never reorders or
/// looks at names. A record with a different field count is rejected before a
/// statement is produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderedInsertBinder {
    table: &'static str,
    columns: &'static [&'static str],
    currency_column: Option<usize>,
}

impl OrderedInsertBinder {
    /// Property inserts, with the nightly cost scaled to minor units
    pub const PROPERTIES: Self = Self::new(tables::PROPERTIES, &columns::PROPERTY_INSERT)
        .with_currency_column(columns::PROPERTY_COST_INDEX);

    /// User inserts
    pub const USERS: Self = Self::new(tables::USERS, &columns::USER_INSERT);

    /// Binder for `table` with the declared column order
    #[must_use]
    pub const fn new(table: &'static str, columns: &'static [&'static str]) -> Self {
        Self {
            table,
            columns,
            currency_column: None,
        }
    }

    /// Scale the field at `index` from major to minor currency units before binding
    #[must_use]
    pub const fn with_currency_column(mut self, index: usize) -> Self {
        self.currency_column = Some(index);
        self
    }

    /// Target table
    #[must_use]
    pub const fn table(&self) -> &'static str {
        self.table
    }

    /// Declared column order
    #[must_use]
    pub const fn columns(&self) -> &'static [&'static str] {
        self.columns
    }

    /// Bind fields that are already in canonical column order
    ///
    /// # Errors
    ///
    /// Returns `FieldCountMismatch` if `values` does not have one field per column
    pub fn bind(&self, values: Vec<SqlValue>) -> StoreResult<CompiledQuery> {
        if values.len() != self.columns.len() {
            return Err(StoreError::FieldCountMismatch {
                table: self.table,
                expected: self.columns.len(),
                actual: values.len(),
            });
        }

        let mut params = QueryParams::new();
        let placeholders: Vec<String> = values
            .into_iter()
            .enumerate()
            .map(|(index, value)| {
                if self.currency_column == Some(index) {
                    params.push(scale_value(value))
                } else {
                    params.push(value)
                }
            })
            .collect();

        let statement = format!(
            "INSERT INTO {} ({}) VALUES ({}) RETURNING *",
            self.table,
            self.columns.join(", "),
            placeholders.join(", ")
        );
        trace!(table = self.table, statement = %statement, "Bound insert");
        Ok(params.finish(statement))
    }

    /// Bind a property record
    ///
    /// # Errors
    ///
    /// Returns `FieldCountMismatch` if the record does not have one field per column
    pub fn bind_record(&self, record: PropertyRecord) -> StoreResult<CompiledQuery> {
        self.bind(record.into_values())
    }
}
