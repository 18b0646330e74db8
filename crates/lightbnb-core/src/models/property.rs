// ABOUTME: Property creation records and listing rows
// ABOUTME: Records are positional and follow the declared canonical column order
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LightBnB

use crate::constants::{columns, tables};
use crate::errors::{StoreError, StoreResult};
use crate::models::value::SqlValue;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A new rental property as submitted by its owner
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewProperty {
    /// Listing title
    pub title: String,
    /// Free-form description
    pub description: String,
    /// Bedroom count
    pub number_of_bedrooms: i64,
    /// Bathroom count
    pub number_of_bathrooms: i64,
    /// Parking spaces
    pub parking_spaces: i64,
    /// Nightly cost in major currency units ("120" means 120.00)
    pub cost_per_night: String,
    /// Thumbnail image
    pub thumbnail_photo_url: String,
    /// Cover image
    pub cover_photo_url: String,
    /// Street address
    pub street: String,
    /// Country
    pub country: String,
    /// City
    pub city: String,
    /// Province or state
    pub province: String,
    /// Postal code
    pub post_code: String,
    /// Owning user
    pub owner_id: i64,
}

/// Positional property record in canonical column order.
///
/// Position `i` is bound to column `columns::PROPERTY_INSERT[i]`. The record
/// itself does not check its length; the insert binder rejects records whose
/// field count differs from the column count.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyRecord {
    values: Vec<SqlValue>,
}

impl PropertyRecord {
    /// Wrap values that are already in canonical order
    #[must_use]
    pub const fn from_values(values: Vec<SqlValue>) -> Self {
        Self { values }
    }

    /// Build a record from a loosely-typed object, reading fields by column name.
    ///
    /// The object's own key order is never consulted.
    ///
    /// # Errors
    ///
    /// Returns `FieldCountMismatch` if the object does not have exactly one key
    /// per canonical column, and `MissingField` if a canonical column is absent.
    pub fn from_json_object(object: &Map<String, Value>) -> StoreResult<Self> {
        if object.len() != columns::PROPERTY_INSERT.len() {
            return Err(StoreError::FieldCountMismatch {
                table: tables::PROPERTIES,
                expected: columns::PROPERTY_INSERT.len(),
                actual: object.len(),
            });
        }

        let values = columns::PROPERTY_INSERT
            .iter()
            .map(|&column| {
                object
                    .get(column)
                    .map(SqlValue::from_json)
                    .ok_or(StoreError::MissingField {
                        table: tables::PROPERTIES,
                        column,
                    })
            })
            .collect::<StoreResult<Vec<_>>>()?;

        Ok(Self { values })
    }

    /// Number of fields
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the record has no fields
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Fields in canonical order
    #[must_use]
    pub fn values(&self) -> &[SqlValue] {
        &self.values
    }

    /// Consume the record, yielding fields in canonical order
    #[must_use]
    pub fn into_values(self) -> Vec<SqlValue> {
        self.values
    }
}

impl From<NewProperty> for PropertyRecord {
    fn from(property: NewProperty) -> Self {
        // Must mirror columns::PROPERTY_INSERT
        Self::from_values(vec![
            SqlValue::Text(property.title),
            SqlValue::Text(property.description),
            SqlValue::Integer(property.number_of_bedrooms),
            SqlValue::Integer(property.number_of_bathrooms),
            SqlValue::Integer(property.parking_spaces),
            SqlValue::Numeric(property.cost_per_night),
            SqlValue::Text(property.thumbnail_photo_url),
            SqlValue::Text(property.cover_photo_url),
            SqlValue::Text(property.street),
            SqlValue::Text(property.country),
            SqlValue::Text(property.city),
            SqlValue::Text(property.province),
            SqlValue::Text(property.post_code),
            SqlValue::Integer(property.owner_id),
        ])
    }
}

/// One row of a property search
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyListing {
    /// Property id
    pub id: i64,
    /// Listing title
    pub title: String,
    /// Nightly cost in minor units
    pub cost_per_night: i64,
    /// Thumbnail image
    pub thumbnail_photo_url: String,
    /// Cover image
    pub cover_photo_url: String,
    /// Average of all review ratings
    pub average_rating: f64,
    /// Bedroom count (detailed listings only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number_of_bedrooms: Option<i64>,
    /// Bathroom count (detailed listings only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number_of_bathrooms: Option<i64>,
    /// Parking spaces (detailed listings only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parking_spaces: Option<i64>,
}
