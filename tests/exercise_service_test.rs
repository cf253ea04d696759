// ABOUTME: Integration tests for the exercise session service
// ABOUTME: Covers referential integrity, derived durations, merges, and cascade deletes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Exercise Tracker Project

#![allow(missing_docs, clippy::unwrap_used)]

mod common;

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{Duration, Utc};
use exercise_tracker::database::repositories::{ExerciseRepository, ExerciserRepository};
use exercise_tracker::dtos::UpdateExerciseRequest;
use exercise_tracker::errors::{TrackerError, TrackerResult};
use exercise_tracker::models::{Exercise, ExerciseType, Exerciser};
use exercise_tracker::services::ExerciseService;
use tokio_util::sync::CancellationToken;

use common::{build_services, create_test_database, sample_exerciser, sample_session};

/// Exerciser repository stub whose lookups always miss
struct MissingExerciserRepository;

#[async_trait]
impl ExerciserRepository for MissingExerciserRepository {
    async fn create(
        &self,
        exerciser: Exerciser,
        _cancel: &CancellationToken,
    ) -> TrackerResult<Exerciser> {
        Ok(exerciser)
    }

    async fn update(
        &self,
        exerciser: Exerciser,
        _cancel: &CancellationToken,
    ) -> TrackerResult<Exerciser> {
        Ok(exerciser)
    }

    async fn delete(&self, _id: i64, _cancel: &CancellationToken) -> TrackerResult<()> {
        Ok(())
    }

    async fn get_by_id(&self, id: i64, _cancel: &CancellationToken) -> TrackerResult<Exerciser> {
        Err(TrackerError::not_found(format!(
            "Exerciser with id: {id} not found."
        )))
    }

    async fn get_all(&self, _cancel: &CancellationToken) -> TrackerResult<Vec<Exerciser>> {
        Ok(Vec::new())
    }
}

/// Session repository stub that counts how often an insert was attempted
#[derive(Default)]
struct RecordingExerciseRepository {
    inserts: AtomicUsize,
}

#[async_trait]
impl ExerciseRepository for RecordingExerciseRepository {
    async fn create(
        &self,
        exercise: Exercise,
        _cancel: &CancellationToken,
    ) -> TrackerResult<Exercise> {
        self.inserts.fetch_add(1, Ordering::SeqCst);
        Ok(exercise)
    }

    async fn update(
        &self,
        exercise: Exercise,
        _cancel: &CancellationToken,
    ) -> TrackerResult<Exercise> {
        Ok(exercise)
    }

    async fn delete(&self, _id: i64, _cancel: &CancellationToken) -> TrackerResult<()> {
        Ok(())
    }

    async fn get_by_id(&self, id: i64, _cancel: &CancellationToken) -> TrackerResult<Exercise> {
        Err(TrackerError::not_found(format!(
            "Exercise session with id: {id} not found."
        )))
    }

    async fn get_by_exerciser_id(
        &self,
        _exerciser_id: i64,
        _cancel: &CancellationToken,
    ) -> TrackerResult<Vec<Exercise>> {
        Ok(Vec::new())
    }

    async fn get_all(&self, _cancel: &CancellationToken) -> TrackerResult<Vec<Exercise>> {
        Ok(Vec::new())
    }
}

#[tokio::test]
async fn creating_against_a_missing_exerciser_never_inserts() {
    let sessions = Arc::new(RecordingExerciseRepository::default());
    let service = ExerciseService::new(
        Arc::clone(&sessions) as Arc<dyn ExerciseRepository>,
        Arc::new(MissingExerciserRepository),
    );
    let cancel = CancellationToken::new();

    let error = service
        .create(&sample_session(12, 2, 1), &cancel)
        .await
        .unwrap_err();

    assert_eq!(
        error,
        TrackerError::ReferentialViolation("Exerciser with id 12 does not exist.".to_owned())
    );
    assert_eq!(sessions.inserts.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn creating_against_a_missing_exerciser_fails_on_the_real_store_too() {
    let database = create_test_database().await;
    let (_, sessions) = build_services(&database);
    let cancel = CancellationToken::new();

    let error = sessions
        .create(&sample_session(99, 2, 1), &cancel)
        .await
        .unwrap_err();
    assert!(matches!(error, TrackerError::ReferentialViolation(_)));
}

#[tokio::test]
async fn track_then_get_round_trips_the_request() {
    let database = create_test_database().await;
    let (users, sessions) = build_services(&database);
    let cancel = CancellationToken::new();

    let owner = users
        .create(&sample_exerciser("Ada Lovelace"), &cancel)
        .await
        .unwrap();

    let mut request = sample_session(owner.id, 3, 1);
    request.exercise_type = ExerciseType::Yoga;
    request.comments = Some("Morning flow".to_owned());

    let created = sessions.create(&request, &cancel).await.unwrap();
    assert!(created.id > 0);
    assert_eq!(created.exerciser_name, "Ada Lovelace");

    let fetched = sessions.get_by_id(created.id, &cancel).await.unwrap();
    assert_eq!(fetched.start_time, request.start_time);
    assert_eq!(fetched.end_time, request.end_time);
    assert_eq!(fetched.exercise_type, ExerciseType::Yoga);
    assert_eq!(fetched.comments, Some("Morning flow".to_owned()));
    assert_eq!(fetched.duration, Duration::hours(2));
    assert_eq!(fetched.exerciser_name, "Ada Lovelace");
}

#[tokio::test]
async fn end_equal_to_start_is_rejected() {
    let database = create_test_database().await;
    let (users, sessions) = build_services(&database);
    let cancel = CancellationToken::new();

    let owner = users
        .create(&sample_exerciser("Edge Case"), &cancel)
        .await
        .unwrap();

    let mut request = sample_session(owner.id, 1, 1);
    request.end_time = request.start_time;

    let error = sessions.create(&request, &cancel).await.unwrap_err();
    let TrackerError::Validation(message) = error else {
        panic!("expected validation failure, got {error:?}");
    };
    assert!(message.contains("End time must be after start time."));
    assert!(message.contains("Exercise duration must be positive."));
}

#[tokio::test]
async fn total_duration_sums_the_owned_sessions() {
    let database = create_test_database().await;
    let (users, sessions) = build_services(&database);
    let cancel = CancellationToken::new();

    let owner = users
        .create(&sample_exerciser("Busy Bee"), &cancel)
        .await
        .unwrap();
    sessions
        .create(&sample_session(owner.id, 5, 4), &cancel)
        .await
        .unwrap();
    sessions
        .create(&sample_session(owner.id, 3, 1), &cancel)
        .await
        .unwrap();

    let view = users.get_by_id(owner.id, &cancel).await.unwrap();
    assert_eq!(view.number_of_sessions, 2);
    assert_eq!(view.total_exercise_duration, Duration::hours(3));
}

#[tokio::test]
async fn update_merges_only_the_provided_fields() {
    let database = create_test_database().await;
    let (users, sessions) = build_services(&database);
    let cancel = CancellationToken::new();

    let owner = users
        .create(&sample_exerciser("Merge Case"), &cancel)
        .await
        .unwrap();
    let created = sessions
        .create(&sample_session(owner.id, 2, 1), &cancel)
        .await
        .unwrap();

    let request = UpdateExerciseRequest {
        id: created.id,
        comments: Some("Felt strong".to_owned()),
        ..UpdateExerciseRequest::default()
    };
    let updated = sessions.update(&request, &cancel).await.unwrap();

    assert_eq!(updated.comments, Some("Felt strong".to_owned()));
    assert_eq!(updated.start_time, created.start_time);
    assert_eq!(updated.end_time, created.end_time);
    assert_eq!(updated.exercise_type, created.exercise_type);
}

#[tokio::test]
async fn empty_update_is_rejected() {
    let database = create_test_database().await;
    let (_, sessions) = build_services(&database);
    let cancel = CancellationToken::new();

    let request = UpdateExerciseRequest {
        id: 1,
        ..UpdateExerciseRequest::default()
    };
    let error = sessions.update(&request, &cancel).await.unwrap_err();
    assert!(matches!(error, TrackerError::Validation(_)));
}

#[tokio::test]
async fn deleting_a_missing_session_returns_not_found() {
    let database = create_test_database().await;
    let (_, sessions) = build_services(&database);
    let cancel = CancellationToken::new();

    let error = sessions.delete(1234, &cancel).await.unwrap_err();
    assert_eq!(
        error,
        TrackerError::NotFound("Exercise session with id: 1234 not found.".to_owned())
    );
}

#[tokio::test]
async fn deleting_an_exerciser_cascades_to_their_sessions() {
    let database = create_test_database().await;
    let (users, sessions) = build_services(&database);
    let cancel = CancellationToken::new();

    let owner = users
        .create(&sample_exerciser("Leaving Soon"), &cancel)
        .await
        .unwrap();
    let session = sessions
        .create(&sample_session(owner.id, 2, 1), &cancel)
        .await
        .unwrap();

    users.delete(owner.id, &cancel).await.unwrap();

    let error = sessions.get_by_id(session.id, &cancel).await.unwrap_err();
    assert!(matches!(error, TrackerError::NotFound(_)));
}

#[tokio::test]
async fn list_by_exerciser_filters_to_that_owner() {
    let database = create_test_database().await;
    let (users, sessions) = build_services(&database);
    let cancel = CancellationToken::new();

    let first = users
        .create(&sample_exerciser("First Owner"), &cancel)
        .await
        .unwrap();
    let second = users
        .create(&sample_exerciser("Second Owner"), &cancel)
        .await
        .unwrap();
    sessions
        .create(&sample_session(first.id, 4, 3), &cancel)
        .await
        .unwrap();
    sessions
        .create(&sample_session(second.id, 2, 1), &cancel)
        .await
        .unwrap();

    let views = sessions
        .get_by_exerciser_id(first.id, &cancel)
        .await
        .unwrap();
    assert_eq!(views.len(), 1);
    assert_eq!(views[0].exerciser_name, "First Owner");

    let all = sessions.get_all(&cancel).await.unwrap();
    assert_eq!(all.len(), 2);
}

#[tokio::test]
async fn views_embed_the_owner_age() {
    let database = create_test_database().await;
    let (users, sessions) = build_services(&database);
    let cancel = CancellationToken::new();

    let owner = users
        .create(&sample_exerciser("Aged Owner"), &cancel)
        .await
        .unwrap();
    let created = sessions
        .create(&sample_session(owner.id, 2, 1), &cancel)
        .await
        .unwrap();

    let expected_age = exercise_tracker::mapping::age_on(
        common::sample_exerciser("x").birth_date,
        Utc::now().date_naive(),
    );
    assert_eq!(created.exerciser_age, expected_age);

    let fetched = sessions.get_by_id(created.id, &cancel).await.unwrap();
    assert_eq!(fetched.exerciser_age, expected_age);
}
