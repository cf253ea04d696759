// ABOUTME: SQLite implementation of the exercise session repository
// ABOUTME: Delegates to the Database operations, adding cancellation racing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Exercise Tracker Project

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use super::{run_cancellable, ExerciseRepository};
use crate::database::Database;
use crate::errors::TrackerResult;
use crate::models::Exercise;

/// SQLite-backed [`ExerciseRepository`]
pub struct SqlExerciseRepository {
    db: Database,
}

impl SqlExerciseRepository {
    /// Create a repository over the given database
    #[must_use]
    pub const fn new(db: Database) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ExerciseRepository for SqlExerciseRepository {
    async fn create(
        &self,
        exercise: Exercise,
        cancel: &CancellationToken,
    ) -> TrackerResult<Exercise> {
        run_cancellable(
            cancel,
            "exercise session creation",
            self.db.insert_exercise(&exercise),
        )
        .await
    }

    async fn update(
        &self,
        exercise: Exercise,
        cancel: &CancellationToken,
    ) -> TrackerResult<Exercise> {
        run_cancellable(
            cancel,
            "exercise session update",
            self.db.update_exercise(&exercise),
        )
        .await?;
        Ok(exercise)
    }

    async fn delete(&self, id: i64, cancel: &CancellationToken) -> TrackerResult<()> {
        run_cancellable(
            cancel,
            "deletion of exercise session",
            self.db.delete_exercise(id),
        )
        .await
    }

    async fn get_by_id(&self, id: i64, cancel: &CancellationToken) -> TrackerResult<Exercise> {
        run_cancellable(
            cancel,
            "retrieval of exercise session",
            self.db.get_exercise_by_id(id),
        )
        .await
    }

    async fn get_by_exerciser_id(
        &self,
        exerciser_id: i64,
        cancel: &CancellationToken,
    ) -> TrackerResult<Vec<Exercise>> {
        run_cancellable(
            cancel,
            "retrieval of exercise sessions for exerciser",
            self.db.get_exercises_by_exerciser_id(exerciser_id),
        )
        .await
    }

    async fn get_all(&self, cancel: &CancellationToken) -> TrackerResult<Vec<Exercise>> {
        run_cancellable(
            cancel,
            "retrieval of all exercises",
            self.db.get_exercises(),
        )
        .await
    }
}
