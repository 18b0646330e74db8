// ABOUTME: Table names, canonical column orders, and listing defaults
// ABOUTME: The single declared source of positional layout for every insert
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LightBnB

//! Constants module
//!
//! Column orders here are the declared field-to-position mappings used by the
//! insert binders. They must match the column order of the target tables.

/// Table names
pub mod tables {
    /// Rental properties
    pub const PROPERTIES: &str = "properties";
    /// Guest reviews of properties
    pub const PROPERTY_REVIEWS: &str = "property_reviews";
    /// Registered users (guests and owners)
    pub const USERS: &str = "users";
    /// Guest reservations
    pub const RESERVATIONS: &str = "reservations";
}

/// Canonical column orders for inserts
pub mod columns {
    /// Canonical column order of a property insert
    pub const PROPERTY_INSERT: [&str; 14] = [
        "title",
        "description",
        "number_of_bedrooms",
        "number_of_bathrooms",
        "parking_spaces",
        "cost_per_night",
        "thumbnail_photo_url",
        "cover_photo_url",
        "street",
        "country",
        "city",
        "province",
        "post_code",
        "owner_id",
    ];

    /// Position of the nightly cost inside [`PROPERTY_INSERT`]
    pub const PROPERTY_COST_INDEX: usize = 5;

    /// Canonical column order of a user insert
    pub const USER_INSERT: [&str; 3] = ["email", "name", "password"];
}

/// Property listing defaults
pub mod listing {
    /// Rows returned when the caller does not pass a limit
    pub const DEFAULT_LIMIT: u32 = 10;

    /// Rows returned by a reservation lookup when the caller does not pass a limit
    pub const DEFAULT_RESERVATION_LIMIT: u32 = 10;

    /// Non-aggregated columns of the summary listing
    pub const SUMMARY_COLUMNS: &[&str] = &[
        "properties.id",
        "title",
        "cost_per_night",
        "thumbnail_photo_url",
        "cover_photo_url",
    ];

    /// Non-aggregated columns of the detailed listing
    pub const DETAILED_COLUMNS: &[&str] = &[
        "properties.id",
        "title",
        "cost_per_night",
        "thumbnail_photo_url",
        "cover_photo_url",
        "number_of_bedrooms",
        "number_of_bathrooms",
        "parking_spaces",
    ];
}

/// Money representation
pub mod money {
    /// Digits appended to a major-unit amount to express it in minor units
    pub const MINOR_UNIT_SUFFIX: &str = "00";
}
