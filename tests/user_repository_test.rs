// ABOUTME: Integration tests for the user and reservation repositories
// ABOUTME: Verifies lookup statements and the found, not-found, and failed outcomes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LightBnB
#![allow(clippy::unwrap_used, missing_docs)]

mod common;

use common::{FailingExecutor, RecordingExecutor};
use lightbnb_core::errors::StoreError;
use lightbnb_store::database::repositories::{
    ReservationRepository, ReservationRepositoryImpl, UserRepository, UserRepositoryImpl,
};
use lightbnb_store::models::{NewUser, SqlValue};
use serde_json::json;
use std::sync::Arc;

fn user_row() -> serde_json::Value {
    json!({
        "id": 1,
        "name": "Devin Sanders",
        "email": "tristanjacobs@gmail.com",
        "password": "$2a$10$FB/BOAVhpuLvpOREQVmvmezD4ED/.JBIDRh70tGevYzYzQgFId2u.",
    })
}

#[tokio::test]
async fn test_get_user_with_email_found() {
    let executor = Arc::new(RecordingExecutor::new().reply_with(vec![user_row()]));
    let users = UserRepositoryImpl::new(Arc::clone(&executor));

    let user = users
        .get_user_with_email("tristanjacobs@gmail.com")
        .await
        .unwrap()
        .unwrap();

    assert_eq!(user.id, 1);
    assert_eq!(user.name, "Devin Sanders");
    let call = executor.single_call();
    assert_eq!(call.statement, "SELECT * FROM users WHERE email = $1");
    assert_eq!(call.parameters, vec![SqlValue::from("tristanjacobs@gmail.com")]);
}

#[tokio::test]
async fn test_get_user_with_id_not_found() {
    let executor = Arc::new(RecordingExecutor::new());
    let users = UserRepositoryImpl::new(Arc::clone(&executor));

    assert!(users.get_user_with_id(99).await.unwrap().is_none());
    let call = executor.single_call();
    assert_eq!(call.statement, "SELECT * FROM users WHERE id = $1");
    assert_eq!(call.parameters, vec![SqlValue::Integer(99)]);
}

#[tokio::test]
async fn test_lookup_failure_is_not_a_miss() {
    let users = UserRepositoryImpl::new(FailingExecutor);

    let error = users.get_user_with_email("nobody@example.com").await.unwrap_err();
    assert!(matches!(error, StoreError::QueryExecution { .. }));
}

#[tokio::test]
async fn test_add_user_binds_email_name_password() {
    let executor = Arc::new(RecordingExecutor::new().reply_with(vec![user_row()]));
    let users = UserRepositoryImpl::new(Arc::clone(&executor));

    let created = users
        .add_user(NewUser {
            name: "Devin Sanders".to_owned(),
            email: "tristanjacobs@gmail.com".to_owned(),
            password: "hashed".to_owned(),
        })
        .await
        .unwrap();

    assert_eq!(created.email, "tristanjacobs@gmail.com");
    let call = executor.single_call();
    assert_eq!(
        call.statement,
        "INSERT INTO users (email, name, password) VALUES ($1, $2, $3) RETURNING *"
    );
    assert_eq!(
        call.parameters,
        vec![
            SqlValue::from("tristanjacobs@gmail.com"),
            SqlValue::from("Devin Sanders"),
            SqlValue::from("hashed"),
        ]
    );
}

#[tokio::test]
async fn test_serialized_user_omits_password() {
    let executor = Arc::new(RecordingExecutor::new().reply_with(vec![user_row()]));
    let users = UserRepositoryImpl::new(executor);

    let user = users.get_user_with_id(1).await.unwrap().unwrap();
    let serialized = serde_json::to_value(&user).unwrap();

    assert!(serialized.get("password").is_none());
    assert_eq!(serialized["email"], json!("tristanjacobs@gmail.com"));
}

#[tokio::test]
async fn test_reservations_default_limit() {
    let executor = Arc::new(
        RecordingExecutor::new().reply_with(vec![json!({"id": 5, "guest_id": 1, "title": "Loft"})]),
    );
    let reservations = ReservationRepositoryImpl::new(Arc::clone(&executor));

    let rows = reservations.get_all_reservations(1, None).await.unwrap();

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["title"], json!("Loft"));
    let call = executor.single_call();
    assert_eq!(
        call.statement,
        "SELECT * FROM reservations JOIN properties \
         ON reservations.property_id = properties.id WHERE guest_id = $1 LIMIT $2"
    );
    assert_eq!(
        call.parameters,
        vec![SqlValue::Integer(1), SqlValue::Integer(10)]
    );
}

#[tokio::test]
async fn test_reservations_explicit_limit() {
    let executor = Arc::new(RecordingExecutor::new());
    let reservations = ReservationRepositoryImpl::new(Arc::clone(&executor));

    let rows = reservations.get_all_reservations(2, Some(3)).await.unwrap();

    assert!(rows.is_empty());
    assert_eq!(executor.single_call().parameters[1], SqlValue::Integer(3));
}
