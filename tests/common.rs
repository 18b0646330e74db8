// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides executor doubles, logging setup, and sample records
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LightBnB
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test utilities for `lightbnb_store`

use async_trait::async_trait;
use lightbnb_core::errors::{StoreError, StoreResult};
use lightbnb_store::config::DatabaseConfig;
use lightbnb_store::database_plugins::factory::Database;
use lightbnb_store::database_plugins::QueryExecutor;
use lightbnb_store::models::{NewProperty, Row, SqlValue};
use serde_json::Value;
use std::collections::VecDeque;
use std::sync::{Mutex, Once};

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            Ok("WARN" | "ERROR") | _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// A statement as it reached the executor
#[derive(Debug, Clone, PartialEq)]
pub struct Dispatched {
    pub statement: String,
    pub parameters: Vec<SqlValue>,
}

/// Executor that records every call and replies with queued row sets
#[derive(Default)]
pub struct RecordingExecutor {
    calls: Mutex<Vec<Dispatched>>,
    replies: Mutex<VecDeque<Vec<Row>>>,
}

impl RecordingExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue the rows returned by the next call; calls past the queue get no rows
    pub fn reply_with(self, rows: Vec<Value>) -> Self {
        let rows = rows
            .into_iter()
            .map(|row| match row {
                Value::Object(map) => map,
                other => panic!("reply rows must be objects, got {other}"),
            })
            .collect();
        self.replies.lock().unwrap().push_back(rows);
        self
    }

    pub fn calls(&self) -> Vec<Dispatched> {
        self.calls.lock().unwrap().clone()
    }

    pub fn single_call(&self) -> Dispatched {
        let calls = self.calls();
        assert_eq!(calls.len(), 1, "expected exactly one dispatched statement");
        calls.into_iter().next().unwrap()
    }
}

#[async_trait]
impl QueryExecutor for RecordingExecutor {
    async fn execute(&self, statement: &str, parameters: &[SqlValue]) -> StoreResult<Vec<Row>> {
        self.calls.lock().unwrap().push(Dispatched {
            statement: statement.to_owned(),
            parameters: parameters.to_vec(),
        });
        Ok(self.replies.lock().unwrap().pop_front().unwrap_or_default())
    }
}

/// Executor whose every call fails like an unreachable store
pub struct FailingExecutor;

#[async_trait]
impl QueryExecutor for FailingExecutor {
    async fn execute(&self, _statement: &str, _parameters: &[SqlValue]) -> StoreResult<Vec<Row>> {
        Err(StoreError::query_execution("connection refused"))
    }
}

/// Fresh in-memory `SQLite` database with the LightBnB schema
pub async fn create_test_database() -> Database {
    init_test_logging();
    let config = DatabaseConfig::for_url("sqlite::memory:").unwrap();
    let database = Database::connect(&config).await.unwrap();
    for statement in SCHEMA {
        database.execute(statement, &[]).await.unwrap();
    }
    database
}

const SCHEMA: &[&str] = &[
    "CREATE TABLE users (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        email TEXT NOT NULL,
        password TEXT NOT NULL
    )",
    "CREATE TABLE properties (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        owner_id INTEGER NOT NULL REFERENCES users (id),
        title TEXT NOT NULL,
        description TEXT,
        thumbnail_photo_url TEXT NOT NULL,
        cover_photo_url TEXT NOT NULL,
        cost_per_night INTEGER NOT NULL DEFAULT 0,
        parking_spaces INTEGER NOT NULL DEFAULT 0,
        number_of_bathrooms INTEGER NOT NULL DEFAULT 0,
        number_of_bedrooms INTEGER NOT NULL DEFAULT 0,
        country TEXT NOT NULL,
        street TEXT NOT NULL,
        city TEXT NOT NULL,
        province TEXT NOT NULL,
        post_code TEXT NOT NULL,
        active BOOLEAN NOT NULL DEFAULT 1
    )",
    "CREATE TABLE reservations (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        start_date TEXT NOT NULL,
        end_date TEXT NOT NULL,
        property_id INTEGER NOT NULL REFERENCES properties (id),
        guest_id INTEGER NOT NULL REFERENCES users (id)
    )",
    "CREATE TABLE property_reviews (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        guest_id INTEGER NOT NULL REFERENCES users (id),
        property_id INTEGER NOT NULL REFERENCES properties (id),
        reservation_id INTEGER NOT NULL REFERENCES reservations (id),
        rating INTEGER NOT NULL DEFAULT 0,
        message TEXT
    )",
];

/// A property owned by `owner_id` at the given major-unit price
pub fn sample_property(owner_id: i64, title: &str, city: &str, cost: &str) -> NewProperty {
    NewProperty {
        title: title.to_owned(),
        description: "description".to_owned(),
        number_of_bedrooms: 2,
        number_of_bathrooms: 1,
        parking_spaces: 1,
        cost_per_night: cost.to_owned(),
        thumbnail_photo_url: "https://images.example.com/thumb.jpg".to_owned(),
        cover_photo_url: "https://images.example.com/cover.jpg".to_owned(),
        street: "1 Main St".to_owned(),
        country: "Canada".to_owned(),
        city: city.to_owned(),
        province: "BC".to_owned(),
        post_code: "V5K 0A1".to_owned(),
        owner_id,
    }
}
