// ABOUTME: SQLite implementation of the exerciser repository
// ABOUTME: Delegates to the Database operations, adding cancellation racing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Exercise Tracker Project

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use super::{run_cancellable, ExerciserRepository};
use crate::database::Database;
use crate::errors::TrackerResult;
use crate::models::Exerciser;

/// SQLite-backed [`ExerciserRepository`]
pub struct SqlExerciserRepository {
    db: Database,
}

impl SqlExerciserRepository {
    /// Create a repository over the given database
    #[must_use]
    pub const fn new(db: Database) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ExerciserRepository for SqlExerciserRepository {
    async fn create(
        &self,
        exerciser: Exerciser,
        cancel: &CancellationToken,
    ) -> TrackerResult<Exerciser> {
        run_cancellable(cancel, "exerciser creation", self.db.insert_exerciser(&exerciser)).await
    }

    async fn update(
        &self,
        exerciser: Exerciser,
        cancel: &CancellationToken,
    ) -> TrackerResult<Exerciser> {
        run_cancellable(cancel, "exerciser update", self.db.update_exerciser(&exerciser)).await?;
        Ok(exerciser)
    }

    async fn delete(&self, id: i64, cancel: &CancellationToken) -> TrackerResult<()> {
        run_cancellable(cancel, "deletion of exerciser", self.db.delete_exerciser(id)).await
    }

    async fn get_by_id(&self, id: i64, cancel: &CancellationToken) -> TrackerResult<Exerciser> {
        run_cancellable(cancel, "retrieval of exerciser", self.db.get_exerciser_by_id(id)).await
    }

    async fn get_all(&self, cancel: &CancellationToken) -> TrackerResult<Vec<Exerciser>> {
        run_cancellable(cancel, "retrieval of all exercisers", self.db.get_exercisers()).await
    }
}
