// ABOUTME: Unified error taxonomy and result alias for the exercise tracker
// ABOUTME: Maps validation, lookup, storage, and cancellation failures onto one type
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Exercise Tracker Project

//! # Unified Error Handling
//!
//! Every expected failure in the system is expressed as a [`TrackerError`]
//! variant carrying a human-readable message. Services and repositories
//! return [`TrackerResult`] instead of panicking; unexpected faults are
//! caught at the repository boundary and folded into this taxonomy so no
//! raw storage error reaches a caller.

use thiserror::Error;

/// Application error covering every expected failure path
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TrackerError {
    /// One or more request fields violate a validation rule; the message
    /// lists every violation
    #[error("{0}")]
    Validation(String),

    /// A referenced id does not exist
    #[error("{0}")]
    NotFound(String),

    /// A dependent entity references a parent that does not exist
    #[error("{0}")]
    ReferentialViolation(String),

    /// The underlying store rejected the operation
    #[error("{0}")]
    Database(String),

    /// The operation was aborted through its cancellation signal
    #[error("{0}")]
    Canceled(String),

    /// Catch-all for faults outside the expected taxonomy
    #[error("{0}")]
    Internal(String),
}

/// Result type alias using [`TrackerError`]
pub type TrackerResult<T> = Result<T, TrackerError>;

impl TrackerError {
    /// Validation failure with the joined violation messages
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Referenced id does not exist
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    /// Child entity references a nonexistent parent
    pub fn referential_violation(message: impl Into<String>) -> Self {
        Self::ReferentialViolation(message.into())
    }

    /// Storage-layer fault
    pub fn database(message: impl Into<String>) -> Self {
        Self::Database(message.into())
    }

    /// Operation aborted via cancellation signal
    pub fn canceled(message: impl Into<String>) -> Self {
        Self::Canceled(message.into())
    }

    /// Unexpected fault
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }
}
