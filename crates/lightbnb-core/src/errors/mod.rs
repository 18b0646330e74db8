// ABOUTME: Error module for the LightBnB core crate
// ABOUTME: Re-exports the store error taxonomy
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LightBnB

/// Errors raised while building or executing statements
pub mod store;

pub use store::{StoreError, StoreResult};
