// ABOUTME: Positional parameter bookkeeping shared by the compiler and binder
// ABOUTME: Each pushed value returns the placeholder that refers to it
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LightBnB

use crate::models::SqlValue;

/// Ordered parameter list under construction.
///
/// The placeholder handed back by [`QueryParams::push`] is always `$n` where `n`
/// is the new length of the list, so placeholders must be written into the
/// statement in the same order the values are pushed.
#[derive(Debug, Default)]
pub struct QueryParams {
    values: Vec<SqlValue>,
}

impl QueryParams {
    /// Empty parameter list
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a value and return its placeholder
    pub fn push(&mut self, value: impl Into<SqlValue>) -> String {
        self.values.push(value.into());
        format!("${}", self.values.len())
    }

    /// Number of values pushed so far
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether nothing was pushed yet
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Pair the parameters with their statement
    #[must_use]
    pub fn finish(self, statement: String) -> CompiledQuery {
        CompiledQuery {
            statement,
            parameters: self.values,
        }
    }
}

/// A statement and the parameters its placeholders refer to
#[derive(Debug, Clone, PartialEq)]
pub struct CompiledQuery {
    statement: String,
    parameters: Vec<SqlValue>,
}

impl CompiledQuery {
    /// Statement text with `$n` placeholders
    #[must_use]
    pub fn statement(&self) -> &str {
        &self.statement
    }

    /// Parameters, where `parameters()[i]` binds placeholder `$(i + 1)`
    #[must_use]
    pub fn parameters(&self) -> &[SqlValue] {
        &self.parameters
    }

    /// Split into statement and parameters
    #[must_use]
    pub fn into_parts(self) -> (String, Vec<SqlValue>) {
        (self.statement, self.parameters)
    }

    /// Placeholder indices in the order they appear in the statement
    #[must_use]
    pub fn placeholder_indices(&self) -> Vec<usize> {
        let mut indices = Vec::new();
        let mut chars = self.statement.char_indices().peekable();
        while let Some((_, ch)) = chars.next() {
            if ch != '$' {
                continue;
            }
            let mut digits = String::new();
            while let Some((_, digit)) = chars.next_if(|(_, c)| c.is_ascii_digit()) {
                digits.push(digit);
            }
            if let Ok(index) = digits.parse() {
                indices.push(index);
            }
        }
        indices
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_numbers_placeholders_by_position() {
        let mut params = QueryParams::new();
        assert_eq!(params.push("%Vancouver%"), "$1");
        assert_eq!(params.push(7_i64), "$2");
        assert_eq!(params.len(), 2);
    }

    #[test]
    fn test_placeholder_indices_in_statement_order() {
        let mut params = QueryParams::new();
        let first = params.push(1_i64);
        let second = params.push(2_i64);
        let query = params.finish(format!("SELECT * FROM t WHERE a = {first} LIMIT {second}"));
        assert_eq!(query.placeholder_indices(), vec![1, 2]);
        assert_eq!(query.parameters().len(), 2);
    }
}
