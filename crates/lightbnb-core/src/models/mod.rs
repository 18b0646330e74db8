// ABOUTME: Data models for the LightBnB data-access layer
// ABOUTME: Scalar values, filter options, and property/user record shapes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LightBnB

/// Sparse property search filters
pub mod filter;
/// Property creation records and listing rows
pub mod property;
/// User records
pub mod user;
/// Scalar parameter and column values
pub mod value;

pub use filter::FilterOptions;
pub use property::{NewProperty, PropertyListing, PropertyRecord};
pub use user::{NewUser, User};
pub use value::{Row, SqlValue};
