// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides database, service wiring, and sample request helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Exercise Tracker Project

#![allow(missing_docs, dead_code, clippy::unwrap_used)]

use std::sync::{Arc, Once};

use chrono::{Duration, NaiveDate, Utc};
use exercise_tracker::database::repositories::{
    ExerciseRepository, ExerciserRepository, SqlExerciseRepository, SqlExerciserRepository,
};
use exercise_tracker::database::Database;
use exercise_tracker::dtos::{CreateExerciseRequest, CreateExerciserRequest};
use exercise_tracker::models::ExerciseType;
use exercise_tracker::services::{ExerciseService, ExerciserService};

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::WARN)
            .with_test_writer()
            .init();
    });
}

/// Standard in-memory test database
pub async fn create_test_database() -> Database {
    init_test_logging();
    Database::new("sqlite::memory:").await.unwrap()
}

/// Wire both services over SQLite repositories against `database`
pub fn build_services(database: &Database) -> (ExerciserService, ExerciseService) {
    let exerciser_repository: Arc<dyn ExerciserRepository> =
        Arc::new(SqlExerciserRepository::new(database.clone()));
    let exercise_repository: Arc<dyn ExerciseRepository> =
        Arc::new(SqlExerciseRepository::new(database.clone()));
    (
        ExerciserService::new(Arc::clone(&exerciser_repository)),
        ExerciseService::new(exercise_repository, exerciser_repository),
    )
}

/// A valid exerciser creation request
pub fn sample_exerciser(name: &str) -> CreateExerciserRequest {
    CreateExerciserRequest {
        name: name.to_owned(),
        birth_date: NaiveDate::from_ymd_opt(1990, 5, 15).unwrap(),
        body_weight: Some(165.0),
        fitness_goal: Some("Run a marathon".to_owned()),
    }
}

/// A valid session creation request starting `hours_ago_start` hours ago
/// and ending `hours_ago_end` hours ago
pub fn sample_session(
    exerciser_id: i64,
    hours_ago_start: i64,
    hours_ago_end: i64,
) -> CreateExerciseRequest {
    let now = Utc::now();
    CreateExerciseRequest {
        exerciser_id,
        start_time: now - Duration::hours(hours_ago_start),
        end_time: now - Duration::hours(hours_ago_end),
        exercise_type: ExerciseType::Cardio,
        comments: None,
    }
}
