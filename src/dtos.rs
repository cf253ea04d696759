// ABOUTME: Request and response payloads exchanged with callers of the service layer
// ABOUTME: Create/update requests carry raw input; views carry read-time derived fields
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Exercise Tracker Project

//! # Request and Response DTOs
//!
//! Four request types (create/update per entity) and two response views.
//! Update requests model partial updates: every mutable field is optional
//! and only the populated ones overwrite the stored record. Views embed
//! the derived fields computed by [`crate::mapping`].

use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::models::ExerciseType;

/// Request to register a new exerciser
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateExerciserRequest {
    /// Display name, 2-50 characters
    pub name: String,
    /// Date of birth
    pub birth_date: NaiveDate,
    /// Body weight in pounds (if provided, must be positive)
    pub body_weight: Option<f64>,
    /// Free-text fitness goal (if provided, at most 200 characters)
    pub fitness_goal: Option<String>,
}

/// Partial update for an existing exerciser; at least one optional field
/// must be populated
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateExerciserRequest {
    /// Id of the exerciser to update
    pub id: i64,
    /// New display name
    pub name: Option<String>,
    /// New date of birth
    pub birth_date: Option<NaiveDate>,
    /// New body weight in pounds
    pub body_weight: Option<f64>,
    /// New fitness goal
    pub fitness_goal: Option<String>,
}

/// Request to record a new exercise session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateExerciseRequest {
    /// Id of the owning exerciser; must already exist
    pub exerciser_id: i64,
    /// Session start, not in the future
    pub start_time: DateTime<Utc>,
    /// Session end, not in the future and strictly after the start
    pub end_time: DateTime<Utc>,
    /// Kind of workout performed
    pub exercise_type: ExerciseType,
    /// Optional free-text notes
    pub comments: Option<String>,
}

/// Partial update for an existing exercise session; at least one optional
/// field must be populated
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateExerciseRequest {
    /// Id of the session to update
    pub id: i64,
    /// New session start
    pub start_time: Option<DateTime<Utc>>,
    /// New session end
    pub end_time: Option<DateTime<Utc>>,
    /// New workout kind
    pub exercise_type: Option<ExerciseType>,
    /// New notes
    pub comments: Option<String>,
}

/// Read model for an exerciser, including derived fields computed at the
/// time of the read
#[derive(Debug, Clone, PartialEq)]
pub struct ExerciserView {
    /// Store-assigned identifier
    pub id: i64,
    /// Display name
    pub name: String,
    /// Completed years of age as of the read date
    pub age: i32,
    /// Recorded body weight in pounds
    pub body_weight: Option<f64>,
    /// Recorded fitness goal
    pub fitness_goal: Option<String>,
    /// Sum of all owned session durations; zero when there are none
    pub total_exercise_duration: Duration,
    /// Number of owned sessions
    pub number_of_sessions: usize,
    /// The owned sessions
    pub exercises: Vec<ExerciseView>,
}

/// Read model for an exercise session with the owning exerciser
/// denormalized in
#[derive(Debug, Clone, PartialEq)]
pub struct ExerciseView {
    /// Store-assigned identifier
    pub id: i64,
    /// Id of the owning exerciser
    pub exerciser_id: i64,
    /// Owner's name; sentinel when the relation was not loaded
    pub exerciser_name: String,
    /// Owner's age as of the read date; 0 when the relation was not loaded
    pub exerciser_age: i32,
    /// Kind of workout performed
    pub exercise_type: ExerciseType,
    /// Free-text notes
    pub comments: Option<String>,
    /// Session start
    pub start_time: DateTime<Utc>,
    /// Session end
    pub end_time: DateTime<Utc>,
    /// Session length
    pub duration: Duration,
}
