// ABOUTME: Main library entry point for the exercise tracker
// ABOUTME: Validated CRUD for exercisers and their workout sessions over SQLite
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Exercise Tracker Project

#![deny(unsafe_code)]

//! # Exercise Tracker
//!
//! A personal fitness tracker managing exercisers and their exercise
//! sessions with validated create/read/update/delete operations over a
//! SQLite store.
//!
//! ## Architecture
//!
//! - **Models**: persisted entities and the partial-update merge rules
//! - **Validation**: pure request validators run before any persistence
//! - **Services**: orchestration of validation, referential checks, and
//!   repository calls
//! - **Database**: SQLite store behind pluggable repository traits, with
//!   storage faults normalized into the [`errors::TrackerError`] taxonomy
//! - **Mapping**: read-time computation of derived fields (age, total
//!   duration, session counts)
//!
//! Every operation is async, takes a cancellation token, and returns
//! [`errors::TrackerResult`]; expected failures are values, not panics.

/// Environment-based runtime configuration
pub mod config;

/// SQLite store, schema migration, and repository implementations
pub mod database;

/// Request and response payloads exchanged with callers
pub mod dtos;

/// Unified error taxonomy and result alias
pub mod errors;

/// Tracing subscriber setup
pub mod logging;

/// Entity-to-view mapping and derived-field computation
pub mod mapping;

/// Core domain entities
pub mod models;

/// Domain services enforcing the business invariants
pub mod services;

/// Pure request validators
pub mod validation;
