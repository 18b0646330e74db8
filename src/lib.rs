// ABOUTME: Main library entry point for the LightBnB data-access layer
// ABOUTME: Compiles property searches and inserts into parameterized SQL and runs them
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LightBnB

#![deny(unsafe_code)]

//! # LightBnB Store
//!
//! Data-access layer for the LightBnB rental platform. Property searches with any
//! combination of optional filters are compiled into a single parameterized
//! `SELECT`, and creation requests are bound positionally into `INSERT`
//! statements. Statements are executed by an injected [`QueryExecutor`].
//!
//! ## Architecture
//!
//! - **Database**: `PredicateCompiler`, `OrderedInsertBinder`, and the repositories
//!   that pair them with an executor
//! - **Database plugins**: the `QueryExecutor` seam with `SQLite` and `PostgreSQL` backends
//! - **Config**: environment-driven database settings
//! - **Logging**: `tracing` subscriber setup
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use lightbnb_store::config::DatabaseConfig;
//! use lightbnb_store::database::repositories::{PropertyRepository, PropertyRepositoryImpl};
//! use lightbnb_store::database_plugins::factory::Database;
//! use lightbnb_store::errors::AppResult;
//! use lightbnb_store::models::FilterOptions;
//!
//! #[tokio::main]
//! async fn main() -> AppResult<()> {
//!     let config = DatabaseConfig::from_env()?;
//!     let database = Database::connect(&config).await?;
//!     let properties = PropertyRepositoryImpl::new(database);
//!
//!     let options = FilterOptions::new().with_city("Vancouver").with_minimum_rating("4");
//!     let listings = properties.get_all_properties(&options, Some(5)).await?;
//!     println!("{} matching properties", listings.len());
//!     Ok(())
//! }
//! ```
//!
//! [`QueryExecutor`]: database_plugins::QueryExecutor

/// Environment-driven configuration
pub mod config;

/// Statement compilation, binding, and repositories
pub mod database;

/// Query executor abstraction and backends
pub mod database_plugins;

/// Application error type and error codes
pub mod errors;

/// Structured logging setup
pub mod logging;

/// Core data models re-exported from `lightbnb-core`
pub mod models {
    pub use lightbnb_core::models::*;
}

/// Constants re-exported from `lightbnb-core`
pub mod constants {
    pub use lightbnb_core::constants::*;
}
