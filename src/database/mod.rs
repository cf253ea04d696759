// ABOUTME: SQLite-backed durable store for exercisers and exercise sessions
// ABOUTME: Owns the connection pool, schema migration, and storage error normalization
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Exercise Tracker Project

//! # Database Management
//!
//! Two tables, one foreign key: `exercises.exerciser_id` references
//! `exercisers(id)` with cascade delete. All storage faults are caught at
//! this boundary, logged, and converted into [`TrackerError`] values; no
//! raw `sqlx` error escapes.

mod exercisers;
mod exercises;
pub mod repositories;

use sqlx::SqlitePool;
use tracing::error;

use crate::errors::{TrackerError, TrackerResult};

/// Durable store for exercisers and their exercise sessions
#[derive(Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Open (creating if necessary) the database at `database_url` and run
    /// migrations.
    pub async fn new(database_url: &str) -> TrackerResult<Self> {
        // Ensure SQLite creates the database file if it doesn't exist
        let connection_options = if database_url.starts_with("sqlite:") {
            format!("{database_url}?mode=rwc")
        } else {
            database_url.to_owned()
        };

        let pool = SqlitePool::connect(&connection_options)
            .await
            .map_err(|e| {
                let error = TrackerError::database(format!(
                    "Failed to open database at {database_url}: {e}"
                ));
                error!("{error}");
                error
            })?;

        let db = Self { pool };
        db.migrate().await?;

        Ok(db)
    }

    /// Get a reference to the pool for advanced operations
    #[must_use]
    pub const fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Run schema migrations
    pub async fn migrate(&self) -> TrackerResult<()> {
        self.migrate_exercisers().await?;
        self.migrate_exercises().await?;
        Ok(())
    }
}

/// Normalize a `sqlx` failure into the tracker taxonomy: storage rejections
/// become [`TrackerError::Database`], anything else is an unexpected fault.
/// The failure is logged with its context before conversion.
pub(crate) fn store_error(context: &str, err: &sqlx::Error) -> TrackerError {
    let error = if matches!(err, sqlx::Error::Database(_)) {
        TrackerError::database(format!("Database error during {context}: {err}"))
    } else {
        TrackerError::internal(format!(
            "An unexpected error has occurred during {context}: {err}"
        ))
    };
    error!("{error}");
    error
}

/// Build, and log, the failure for a lookup that found nothing.
pub(crate) fn not_found(message: String) -> TrackerError {
    let error = TrackerError::not_found(message);
    error!("{error}");
    error
}
