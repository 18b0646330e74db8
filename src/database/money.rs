// ABOUTME: Currency scaling from major to minor units
// ABOUTME: Scaling is textual so the submitted digits are preserved exactly
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LightBnB

use crate::constants::money::MINOR_UNIT_SUFFIX;
use crate::models::SqlValue;

/// Express a whole major-unit amount in minor units by appending two zeros.
///
/// Only integer-valued inputs are supported; `"12.5"` becomes `"12.500"`.
#[must_use]
pub fn scale_to_minor_units(major: &str) -> String {
    format!("{major}{MINOR_UNIT_SUFFIX}")
}

/// Scale a bound value, leaving `NULL` untouched
#[must_use]
pub fn scale_value(value: SqlValue) -> SqlValue {
    value
        .as_text()
        .map_or(SqlValue::Null, |major| SqlValue::Numeric(scale_to_minor_units(&major)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_appends_two_zero_digits() {
        assert_eq!(scale_to_minor_units("120"), "12000");
        assert_eq!(scale_to_minor_units("5"), "500");
    }

    #[test]
    fn test_scale_value_keeps_integers_textual() {
        assert_eq!(scale_value(SqlValue::Integer(150)), SqlValue::numeric("15000"));
        assert_eq!(scale_value(SqlValue::from("80")), SqlValue::numeric("8000"));
        assert_eq!(scale_value(SqlValue::Null), SqlValue::Null);
    }
}
