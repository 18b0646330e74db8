// ABOUTME: Core types and constants for the LightBnB data-access layer
// ABOUTME: Foundation crate with store errors, scalar values, records, and column layouts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LightBnB

#![deny(unsafe_code)]

//! # LightBnB Core
//!
//! Foundation crate providing the shared types of the LightBnB data-access layer.
//! This crate has no I/O of its own; the executor backends and the statement
//! builders live in the `lightbnb_store` crate.
//!
//! ## Modules
//!
//! - **errors**: `StoreError`, the error taxonomy of statement building and execution
//! - **constants**: table names, canonical column orders, and listing defaults
//! - **models**: `SqlValue`, `FilterOptions`, property/user records and row shapes

/// Store error taxonomy shared by the compiler, binder, and executors
pub mod errors;

/// Table names, canonical column orders, and listing defaults
pub mod constants;

/// Scalar values, filter options, and record types
pub mod models;
