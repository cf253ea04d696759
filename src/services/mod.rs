// ABOUTME: Domain service layer orchestrating validation, referential checks, and persistence
// ABOUTME: Services are the only callers of the repositories and the only producers of views
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Exercise Tracker Project

//! # Domain Services
//!
//! One service per entity. Every operation validates first and
//! short-circuits before any store call; repository failures propagate
//! with their message untouched. Methods are async and take the caller's
//! cancellation token, which the repositories race in-flight operations
//! against.

mod exercisers;
mod exercises;

pub use exercisers::ExerciserService;
pub use exercises::ExerciseService;

use tracing::warn;

use crate::errors::TrackerError;

/// Join the collected violations into a single validation failure and log
/// the rejected request.
pub(crate) fn validation_failure(violations: Vec<String>) -> TrackerError {
    let error = TrackerError::validation(violations.join(", "));
    warn!("{error}");
    error
}
