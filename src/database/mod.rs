// ABOUTME: Statement compilation, binding, and repositories for the LightBnB store
// ABOUTME: Pure statement builders paired with executor-backed repositories
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LightBnB

//! # Database
//!
//! The builders in this module are pure: `PredicateCompiler::compile` and
//! `OrderedInsertBinder::bind` only produce a [`CompiledQuery`]. The repositories
//! pair them with a [`QueryExecutor`](crate::database_plugins::QueryExecutor).

/// Ordered insert binding
pub mod binder;
/// Dynamic property search compilation
pub mod compiler;
/// Major-to-minor currency scaling
pub mod money;
/// Parameter list and placeholder bookkeeping
pub mod params;
/// Executor-backed repositories
pub mod repositories;

pub use binder::OrderedInsertBinder;
pub use compiler::PredicateCompiler;
pub use money::scale_to_minor_units;
pub use params::{CompiledQuery, QueryParams};
