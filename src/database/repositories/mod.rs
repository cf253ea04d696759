// ABOUTME: Repository traits consumed by the service layer plus shared cancellation plumbing
// ABOUTME: The store stays pluggable behind these seams; SQLite impls live alongside
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Exercise Tracker Project

//! # Repositories
//!
//! The pluggable persistence seam. Services depend on these traits, never
//! on [`super::Database`] directly; the SQLite-backed implementations
//! delegate to it and race every in-flight operation against the caller's
//! cancellation token so an abort surfaces as a distinct `Canceled`
//! failure rather than a generic storage error.

mod exercise_repository;
mod exerciser_repository;

pub use exercise_repository::SqlExerciseRepository;
pub use exerciser_repository::SqlExerciserRepository;

use std::future::Future;

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;
use tracing::warn;

use crate::errors::{TrackerError, TrackerResult};
use crate::models::{Exercise, Exerciser};

/// Durable CRUD access to exercisers
#[async_trait]
pub trait ExerciserRepository: Send + Sync {
    /// Insert a new exerciser and return it with its store-assigned id
    async fn create(
        &self,
        exerciser: Exerciser,
        cancel: &CancellationToken,
    ) -> TrackerResult<Exerciser>;

    /// Persist the full record of an existing exerciser
    async fn update(
        &self,
        exerciser: Exerciser,
        cancel: &CancellationToken,
    ) -> TrackerResult<Exerciser>;

    /// Delete an exerciser by id, cascading to its sessions
    async fn delete(&self, id: i64, cancel: &CancellationToken) -> TrackerResult<()>;

    /// Fetch an exerciser by id with sessions eagerly loaded
    async fn get_by_id(&self, id: i64, cancel: &CancellationToken) -> TrackerResult<Exerciser>;

    /// Fetch every exerciser with sessions eagerly loaded
    async fn get_all(&self, cancel: &CancellationToken) -> TrackerResult<Vec<Exerciser>>;
}

/// Durable CRUD access to exercise sessions
#[async_trait]
pub trait ExerciseRepository: Send + Sync {
    /// Insert a new session and return it with its store-assigned id
    async fn create(
        &self,
        exercise: Exercise,
        cancel: &CancellationToken,
    ) -> TrackerResult<Exercise>;

    /// Persist the full record of an existing session
    async fn update(
        &self,
        exercise: Exercise,
        cancel: &CancellationToken,
    ) -> TrackerResult<Exercise>;

    /// Delete a session by id
    async fn delete(&self, id: i64, cancel: &CancellationToken) -> TrackerResult<()>;

    /// Fetch a session by id with its owner eagerly loaded
    async fn get_by_id(&self, id: i64, cancel: &CancellationToken) -> TrackerResult<Exercise>;

    /// Fetch every session owned by one exerciser
    async fn get_by_exerciser_id(
        &self,
        exerciser_id: i64,
        cancel: &CancellationToken,
    ) -> TrackerResult<Vec<Exercise>>;

    /// Fetch every session in the system
    async fn get_all(&self, cancel: &CancellationToken) -> TrackerResult<Vec<Exercise>>;
}

/// Run a store operation unless/until `cancel` fires. Checked once before
/// the operation starts and raced against it while in flight.
pub(crate) async fn run_cancellable<T, F>(
    cancel: &CancellationToken,
    context: &str,
    operation: F,
) -> TrackerResult<T>
where
    F: Future<Output = TrackerResult<T>> + Send,
{
    if cancel.is_cancelled() {
        return Err(canceled(context));
    }
    tokio::select! {
        biased;
        () = cancel.cancelled() => Err(canceled(context)),
        result = operation => result,
    }
}

fn canceled(context: &str) -> TrackerError {
    let error = TrackerError::canceled(format!("Operation canceled during {context}."));
    warn!("{error}");
    error
}
