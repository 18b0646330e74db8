// ABOUTME: User records for guest and owner accounts
// ABOUTME: Creation fields are laid out in the users table's insert order
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LightBnB

use crate::models::value::SqlValue;
use serde::{Deserialize, Serialize};

/// A stored user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// User id
    pub id: i64,
    /// Display name
    pub name: String,
    /// Login email
    pub email: String,
    /// Stored password digest, never serialized back out
    #[serde(skip_serializing, default)]
    pub password: String,
}

/// A user to be created
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewUser {
    /// Display name
    pub name: String,
    /// Login email
    pub email: String,
    /// Password digest, hashed by the caller
    pub password: String,
}

impl NewUser {
    /// Fields in `columns::USER_INSERT` order
    #[must_use]
    pub fn into_values(self) -> Vec<SqlValue> {
        vec![
            SqlValue::Text(self.email),
            SqlValue::Text(self.name),
            SqlValue::Text(self.password),
        ]
    }
}
