// ABOUTME: Configuration module for the LightBnB data-access layer
// ABOUTME: Environment-only configuration for database connectivity
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LightBnB

/// Database URL and pool configuration
pub mod database;

pub use database::{DatabaseConfig, DatabaseUrl};
