// ABOUTME: Exerciser service: validated CRUD over the exerciser repository
// ABOUTME: Applies partial-update merges and builds views with read-time derived fields
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Exercise Tracker Project

use std::sync::Arc;

use chrono::Utc;
use tokio_util::sync::CancellationToken;

use super::validation_failure;
use crate::database::repositories::ExerciserRepository;
use crate::dtos::{CreateExerciserRequest, ExerciserView, UpdateExerciserRequest};
use crate::errors::TrackerResult;
use crate::mapping;
use crate::models::Exerciser;
use crate::validation::{validate_create_exerciser, validate_update_exerciser};

/// Business operations on exercisers
pub struct ExerciserService {
    repository: Arc<dyn ExerciserRepository>,
}

impl ExerciserService {
    /// Create a service over the given repository
    pub fn new(repository: Arc<dyn ExerciserRepository>) -> Self {
        Self { repository }
    }

    /// Register a new exerciser and return its view, id included.
    pub async fn create(
        &self,
        request: &CreateExerciserRequest,
        cancel: &CancellationToken,
    ) -> TrackerResult<ExerciserView> {
        let today = Utc::now().date_naive();
        let violations = validate_create_exerciser(request, today);
        if !violations.is_empty() {
            return Err(validation_failure(violations));
        }

        let exerciser = Exerciser {
            id: 0,
            name: request.name.clone(),
            birth_date: request.birth_date,
            body_weight: request.body_weight,
            fitness_goal: request.fitness_goal.clone(),
            exercises: Vec::new(),
        };

        let created = self.repository.create(exerciser, cancel).await?;
        Ok(mapping::exerciser_view(&created, today))
    }

    /// Apply a partial update to an existing exerciser and return the
    /// updated view. Fields left unset on the request keep their stored
    /// values.
    pub async fn update(
        &self,
        request: &UpdateExerciserRequest,
        cancel: &CancellationToken,
    ) -> TrackerResult<ExerciserView> {
        let today = Utc::now().date_naive();
        let violations = validate_update_exerciser(request, today);
        if !violations.is_empty() {
            return Err(validation_failure(violations));
        }

        let mut existing = self.repository.get_by_id(request.id, cancel).await?;
        existing.apply_update(request);

        let updated = self.repository.update(existing, cancel).await?;
        Ok(mapping::exerciser_view(&updated, today))
    }

    /// Delete an exerciser by id, cascading to its sessions. The fetch
    /// before the delete exists to produce a precise not-found message.
    pub async fn delete(&self, id: i64, cancel: &CancellationToken) -> TrackerResult<()> {
        self.repository.get_by_id(id, cancel).await?;
        self.repository.delete(id, cancel).await
    }

    /// Fetch one exerciser with derived fields computed as of today.
    pub async fn get_by_id(
        &self,
        id: i64,
        cancel: &CancellationToken,
    ) -> TrackerResult<ExerciserView> {
        let exerciser = self.repository.get_by_id(id, cancel).await?;
        Ok(mapping::exerciser_view(&exerciser, Utc::now().date_naive()))
    }

    /// Fetch every exerciser with derived fields computed as of today.
    pub async fn get_all(&self, cancel: &CancellationToken) -> TrackerResult<Vec<ExerciserView>> {
        let exercisers = self.repository.get_all(cancel).await?;
        let today = Utc::now().date_naive();
        Ok(exercisers
            .iter()
            .map(|exerciser| mapping::exerciser_view(exerciser, today))
            .collect())
    }
}
