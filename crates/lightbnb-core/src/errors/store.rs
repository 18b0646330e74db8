// ABOUTME: Store error types for statement building and execution
// ABOUTME: Separates binder contract violations from executor failures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LightBnB

//! # Store Error Types
//!
//! Every failure of the data-access layer is one of these variants. An empty
//! result set is never an error: lookups return `Ok(vec![])` or `Ok(None)`, and
//! anything that went wrong on the way to the store is an `Err`.

/// Errors produced by the statement builders and the query executors
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// Reserved for stricter filter validation; the current compiler accepts every combination
    #[error("Invalid filter combination: {reason}")]
    InvalidFilterCombination {
        /// Why the combination was rejected
        reason: String,
    },

    /// A record handed to an insert binder did not match the table's column count
    #[error("Field count mismatch for '{table}': expected {expected} fields, got {actual}")]
    FieldCountMismatch {
        /// Target table of the insert
        table: &'static str,
        /// Number of canonical columns
        expected: usize,
        /// Number of fields supplied
        actual: usize,
    },

    /// A named record lacks one of the canonical columns
    #[error("Missing field '{column}' for '{table}'")]
    MissingField {
        /// Target table of the insert
        table: &'static str,
        /// Canonical column that was absent
        column: &'static str,
    },

    /// The executor failed (connectivity, malformed SQL, constraint violation)
    #[error("Query execution failed: {context}")]
    QueryExecution {
        /// Diagnostic reported by the underlying driver
        context: String,
    },

    /// A returned row could not be converted into the requested shape
    #[error("Failed to decode row: {context}")]
    RowDecode {
        /// What went wrong during decoding
        context: String,
    },
}

impl StoreError {
    /// Create a query execution error from any driver diagnostic
    #[must_use]
    pub fn query_execution(context: impl Into<String>) -> Self {
        Self::QueryExecution {
            context: context.into(),
        }
    }

    /// Create a row decode error
    #[must_use]
    pub fn row_decode(context: impl Into<String>) -> Self {
        Self::RowDecode {
            context: context.into(),
        }
    }

    /// Whether the failure happened before anything was sent to the store
    #[must_use]
    pub const fn is_contract_violation(&self) -> bool {
        matches!(
            self,
            Self::InvalidFilterCombination { .. }
                | Self::FieldCountMismatch { .. }
                | Self::MissingField { .. }
        )
    }
}

#[cfg(feature = "database-errors")]
impl From<sqlx::Error> for StoreError {
    fn from(error: sqlx::Error) -> Self {
        Self::QueryExecution {
            context: error.to_string(),
        }
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(error: serde_json::Error) -> Self {
        Self::RowDecode {
            context: error.to_string(),
        }
    }
}

/// Result alias used across the data-access layer
pub type StoreResult<T> = Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_count_mismatch_message() {
        let error = StoreError::FieldCountMismatch {
            table: "properties",
            expected: 14,
            actual: 13,
        };
        assert_eq!(
            error.to_string(),
            "Field count mismatch for 'properties': expected 14 fields, got 13"
        );
        assert!(error.is_contract_violation());
    }

    #[test]
    fn test_execution_errors_are_not_contract_violations() {
        let error = StoreError::query_execution("connection refused");
        assert!(!error.is_contract_violation());
        assert_eq!(error.to_string(), "Query execution failed: connection refused");
    }

    #[test]
    fn test_serde_error_becomes_row_decode() {
        let parse_error = serde_json::from_str::<i64>("\"nope\"").unwrap_err();
        let error = StoreError::from(parse_error);
        assert!(matches!(error, StoreError::RowDecode { .. }));
    }
}
