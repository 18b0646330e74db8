// ABOUTME: Sparse property search filters
// ABOUTME: Every field is optional and any subset may be combined
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LightBnB

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Number;

/// Optional constraints for a property search.
///
/// A missing field places no constraint on its dimension. Empty strings count as
/// missing, since search forms submit blank inputs as empty values. Prices are
/// decimals in major currency units and ratings are decimals, both kept in
/// their textual form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterOptions {
    /// Substring of the property's city
    pub city: Option<String>,
    /// Owning user
    #[serde(alias = "ownerId", deserialize_with = "deserialize_owner_id")]
    pub owner_id: Option<i64>,
    /// Lowest acceptable nightly cost in major units
    #[serde(alias = "minPricePerNight", deserialize_with = "deserialize_decimal")]
    pub minimum_price_per_night: Option<String>,
    /// Highest acceptable nightly cost in major units
    #[serde(alias = "maxPricePerNight", deserialize_with = "deserialize_decimal")]
    pub maximum_price_per_night: Option<String>,
    /// Lowest acceptable average review rating
    #[serde(alias = "minimumRating", deserialize_with = "deserialize_decimal")]
    pub minimum_rating: Option<String>,
}

impl FilterOptions {
    /// Options with no constraints
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict to cities containing `city`
    #[must_use]
    pub fn with_city(mut self, city: impl Into<String>) -> Self {
        self.city = Some(city.into());
        self
    }

    /// Restrict to one owner
    #[must_use]
    pub const fn with_owner(mut self, owner_id: i64) -> Self {
        self.owner_id = Some(owner_id);
        self
    }

    /// Restrict to a lowest nightly cost
    #[must_use]
    pub fn with_minimum_price(mut self, price: impl Into<String>) -> Self {
        self.minimum_price_per_night = Some(price.into());
        self
    }

    /// Restrict to a highest nightly cost
    #[must_use]
    pub fn with_maximum_price(mut self, price: impl Into<String>) -> Self {
        self.maximum_price_per_night = Some(price.into());
        self
    }

    /// Restrict to a lowest average rating
    #[must_use]
    pub fn with_minimum_rating(mut self, rating: impl Into<String>) -> Self {
        self.minimum_rating = Some(rating.into());
        self
    }

    /// City filter, if present
    #[must_use]
    pub fn city(&self) -> Option<&str> {
        non_empty(self.city.as_deref())
    }

    /// Lowest nightly cost, if present
    #[must_use]
    pub fn minimum_price(&self) -> Option<&str> {
        non_empty(self.minimum_price_per_night.as_deref())
    }

    /// Highest nightly cost, if present
    #[must_use]
    pub fn maximum_price(&self) -> Option<&str> {
        non_empty(self.maximum_price_per_night.as_deref())
    }

    /// Lowest average rating, if present
    #[must_use]
    pub fn minimum_rating(&self) -> Option<&str> {
        non_empty(self.minimum_rating.as_deref())
    }

    /// Whether no constraint is present at all
    #[must_use]
    pub fn is_unconstrained(&self) -> bool {
        self.city().is_none()
            && self.owner_id.is_none()
            && self.minimum_price().is_none()
            && self.maximum_price().is_none()
            && self.minimum_rating().is_none()
    }
}

/// A form value submitted either as JSON text or as a JSON number
#[derive(Deserialize)]
#[serde(untagged)]
enum FormScalar {
    Text(String),
    Number(Number),
}

/// Decimal field accepted as a string or a number, kept in textual form
fn deserialize_decimal<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(
        Option::<FormScalar>::deserialize(deserializer)?.map(|scalar| match scalar {
            FormScalar::Text(text) => text,
            FormScalar::Number(number) => number.to_string(),
        }),
    )
}

/// Owner id accepted as a number or a numeric string; blank strings are absent
fn deserialize_owner_id<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<FormScalar>::deserialize(deserializer)? {
        None => Ok(None),
        Some(FormScalar::Number(number)) => number.as_i64().map(Some).ok_or_else(|| {
            serde::de::Error::custom(format!("Invalid owner id: {number}"))
        }),
        Some(FormScalar::Text(text)) => match text.trim() {
            "" => Ok(None),
            trimmed => trimmed.parse().map(Some).map_err(|_| {
                serde::de::Error::custom(format!("Invalid owner id: '{text}'"))
            }),
        },
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|text| !text.is_empty())
}
