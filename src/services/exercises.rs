// ABOUTME: Exercise session service: validated CRUD with referential integrity checks
// ABOUTME: A session is only ever created against an exerciser that already exists
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Exercise Tracker Project

use std::sync::Arc;

use chrono::Utc;
use tokio_util::sync::CancellationToken;
use tracing::warn;

use super::validation_failure;
use crate::database::repositories::{ExerciseRepository, ExerciserRepository};
use crate::dtos::{CreateExerciseRequest, ExerciseView, UpdateExerciseRequest};
use crate::errors::{TrackerError, TrackerResult};
use crate::mapping;
use crate::models::Exercise;
use crate::validation::{validate_create_exercise, validate_update_exercise};

/// Business operations on exercise sessions
pub struct ExerciseService {
    repository: Arc<dyn ExerciseRepository>,
    exerciser_repository: Arc<dyn ExerciserRepository>,
}

impl ExerciseService {
    /// Create a service over the session repository and the exerciser
    /// repository used for referential checks
    pub fn new(
        repository: Arc<dyn ExerciseRepository>,
        exerciser_repository: Arc<dyn ExerciserRepository>,
    ) -> Self {
        Self {
            repository,
            exerciser_repository,
        }
    }

    /// Record a new session for an existing exerciser and return its view.
    ///
    /// The referenced exerciser is fetched before anything is persisted;
    /// when it does not exist the request is rejected as a referential
    /// violation and the store's insert is never reached.
    pub async fn create(
        &self,
        request: &CreateExerciseRequest,
        cancel: &CancellationToken,
    ) -> TrackerResult<ExerciseView> {
        let now = Utc::now();
        let violations = validate_create_exercise(request, now);
        if !violations.is_empty() {
            return Err(validation_failure(violations));
        }

        let exerciser = match self
            .exerciser_repository
            .get_by_id(request.exerciser_id, cancel)
            .await
        {
            Ok(exerciser) => exerciser,
            Err(TrackerError::NotFound(_)) => {
                let error = TrackerError::referential_violation(format!(
                    "Exerciser with id {} does not exist.",
                    request.exerciser_id
                ));
                warn!("{error}");
                return Err(error);
            }
            Err(error) => return Err(error),
        };

        let exercise = Exercise {
            id: 0,
            exerciser_id: request.exerciser_id,
            start_time: request.start_time,
            end_time: request.end_time,
            exercise_type: request.exercise_type,
            comments: request.comments.clone(),
            exerciser: None,
        };

        let created = self.repository.create(exercise, cancel).await?;
        Ok(mapping::exercise_view(
            &created,
            Some(&exerciser),
            now.date_naive(),
        ))
    }

    /// Apply a partial update to an existing session and return the
    /// updated view. Fields left unset on the request keep their stored
    /// values.
    pub async fn update(
        &self,
        request: &UpdateExerciseRequest,
        cancel: &CancellationToken,
    ) -> TrackerResult<ExerciseView> {
        let now = Utc::now();
        let violations = validate_update_exercise(request, now);
        if !violations.is_empty() {
            return Err(validation_failure(violations));
        }

        let mut existing = self.repository.get_by_id(request.id, cancel).await?;
        existing.apply_update(request);

        let updated = self.repository.update(existing, cancel).await?;
        Ok(mapping::exercise_view(&updated, None, now.date_naive()))
    }

    /// Delete a session by id. The fetch before the delete exists to
    /// produce a precise not-found message.
    pub async fn delete(&self, id: i64, cancel: &CancellationToken) -> TrackerResult<()> {
        self.repository.get_by_id(id, cancel).await?;
        self.repository.delete(id, cancel).await
    }

    /// Fetch one session with its owner denormalized in.
    pub async fn get_by_id(
        &self,
        id: i64,
        cancel: &CancellationToken,
    ) -> TrackerResult<ExerciseView> {
        let exercise = self.repository.get_by_id(id, cancel).await?;
        Ok(mapping::exercise_view(
            &exercise,
            None,
            Utc::now().date_naive(),
        ))
    }

    /// Fetch every session owned by one exerciser.
    pub async fn get_by_exerciser_id(
        &self,
        exerciser_id: i64,
        cancel: &CancellationToken,
    ) -> TrackerResult<Vec<ExerciseView>> {
        let exercises = self
            .repository
            .get_by_exerciser_id(exerciser_id, cancel)
            .await?;
        Ok(Self::views(&exercises))
    }

    /// Fetch every session in the system.
    pub async fn get_all(&self, cancel: &CancellationToken) -> TrackerResult<Vec<ExerciseView>> {
        let exercises = self.repository.get_all(cancel).await?;
        Ok(Self::views(&exercises))
    }

    fn views(exercises: &[Exercise]) -> Vec<ExerciseView> {
        let today = Utc::now().date_naive();
        exercises
            .iter()
            .map(|exercise| mapping::exercise_view(exercise, None, today))
            .collect()
    }
}
