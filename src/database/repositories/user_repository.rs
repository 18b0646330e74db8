// ABOUTME: User account repository implementation
// ABOUTME: Handles user lookup by email or id and user registration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LightBnB

use super::{decode_row, decode_rows, returned_row, UserRepository};
use crate::constants::tables;
use crate::database::{OrderedInsertBinder, QueryParams};
use crate::database_plugins::QueryExecutor;
use crate::models::{NewUser, SqlValue, User};
use async_trait::async_trait;
use lightbnb_core::errors::StoreResult;

/// `UserRepository` over any executor
pub struct UserRepositoryImpl<E> {
    executor: E,
}

impl<E: QueryExecutor> UserRepositoryImpl<E> {
    /// Create a new `UserRepository` with the given executor
    #[must_use]
    pub const fn new(executor: E) -> Self {
        Self { executor }
    }

    async fn find_one(&self, column: &str, value: SqlValue) -> StoreResult<Option<User>> {
        let mut params = QueryParams::new();
        let placeholder = params.push(value);
        let query = params.finish(format!(
            "SELECT * FROM {} WHERE {column} = {placeholder}",
            tables::USERS
        ));
        let rows = self.executor.run(&query).await?;
        Ok(decode_rows(rows)?.into_iter().next())
    }
}

#[async_trait]
impl<E: QueryExecutor> UserRepository for UserRepositoryImpl<E> {
    async fn get_user_with_email(&self, email: &str) -> StoreResult<Option<User>> {
        self.find_one("email", SqlValue::from(email)).await
    }

    async fn get_user_with_id(&self, id: i64) -> StoreResult<Option<User>> {
        self.find_one("id", SqlValue::from(id)).await
    }

    async fn add_user(&self, user: NewUser) -> StoreResult<User> {
        let query = OrderedInsertBinder::USERS.bind(user.into_values())?;
        let rows = self.executor.run(&query).await?;
        decode_row(returned_row(rows, tables::USERS)?)
    }
}
