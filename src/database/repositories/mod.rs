// ABOUTME: Repository traits for properties, users, and reservations
// ABOUTME: Each repository owns an injected executor and returns explicit outcomes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LightBnB

//! # Repositories
//!
//! Lookups distinguish three outcomes: `Ok(Some(_))` or a non-empty `Vec` for a
//! match, `Ok(None)` or an empty `Vec` for no match, and `Err` when the statement
//! could not be built or executed.

mod property_repository;
mod reservation_repository;
mod user_repository;

pub use property_repository::PropertyRepositoryImpl;
pub use reservation_repository::ReservationRepositoryImpl;
pub use user_repository::UserRepositoryImpl;

use crate::models::{FilterOptions, NewUser, PropertyListing, PropertyRecord, Row, User};
use async_trait::async_trait;
use lightbnb_core::errors::{StoreError, StoreResult};
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Property search and creation
#[async_trait]
pub trait PropertyRepository: Send + Sync {
    /// Search properties with summary columns, cheapest first
    async fn get_all_properties(
        &self,
        options: &FilterOptions,
        limit: Option<u32>,
    ) -> StoreResult<Vec<PropertyListing>>;

    /// Search properties including bedroom, bathroom, and parking counts
    async fn get_all_properties_detailed(
        &self,
        options: &FilterOptions,
        limit: Option<u32>,
    ) -> StoreResult<Vec<PropertyListing>>;

    /// Insert a property and return the stored row
    async fn add_property(&self, record: PropertyRecord) -> StoreResult<Row>;
}

/// User lookup and registration
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by email
    async fn get_user_with_email(&self, email: &str) -> StoreResult<Option<User>>;

    /// Find a user by id
    async fn get_user_with_id(&self, id: i64) -> StoreResult<Option<User>>;

    /// Register a user and return the stored record
    async fn add_user(&self, user: NewUser) -> StoreResult<User>;
}

/// Reservation lookup
#[async_trait]
pub trait ReservationRepository: Send + Sync {
    /// Reservations of one guest joined with their properties
    async fn get_all_reservations(&self, guest_id: i64, limit: Option<u32>)
        -> StoreResult<Vec<Row>>;
}

/// Decode rows into a typed shape
fn decode_rows<T: DeserializeOwned>(rows: Vec<Row>) -> StoreResult<Vec<T>> {
    rows.into_iter().map(decode_row).collect()
}

fn decode_row<T: DeserializeOwned>(row: Row) -> StoreResult<T> {
    Ok(serde_json::from_value(Value::Object(row))?)
}

/// The single row an `INSERT ... RETURNING *` must produce
fn returned_row(rows: Vec<Row>, table: &str) -> StoreResult<Row> {
    rows.into_iter().next().ok_or_else(|| {
        StoreError::query_execution(format!("insert into {table} returned no row"))
    })
}
