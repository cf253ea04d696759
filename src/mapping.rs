// ABOUTME: Pure entity-to-view mapping with read-time derived field computation
// ABOUTME: Age, total duration, and session counts are calculated here, never persisted
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Exercise Tracker Project

//! # Mapping
//!
//! Transformations from persisted entities to response views. Every
//! function takes the evaluation date explicitly so the derived values
//! are deterministic and testable; callers supply `Utc::now().date_naive()`.

use chrono::{Datelike, Duration, NaiveDate};

use crate::dtos::{ExerciseView, ExerciserView};
use crate::models::{Exercise, Exerciser};

/// Sentinel owner name used when an exercise's relation was not loaded
pub const UNKNOWN_EXERCISER: &str = "unknown";

/// Completed years between `birth_date` and `today`, accounting for
/// whether the birthday has occurred yet this year.
#[must_use]
pub fn age_on(birth_date: NaiveDate, today: NaiveDate) -> i32 {
    let mut age = today.year() - birth_date.year();
    if (today.month(), today.day()) < (birth_date.month(), birth_date.day()) {
        age -= 1;
    }
    age
}

/// Sum of the durations of `exercises`; zero when the slice is empty.
#[must_use]
pub fn total_duration(exercises: &[Exercise]) -> Duration {
    exercises
        .iter()
        .fold(Duration::zero(), |total, exercise| {
            total + exercise.duration()
        })
}

/// Build the read model for an exerciser, computing derived fields as of
/// `today`.
#[must_use]
pub fn exerciser_view(exerciser: &Exerciser, today: NaiveDate) -> ExerciserView {
    ExerciserView {
        id: exerciser.id,
        name: exerciser.name.clone(),
        age: age_on(exerciser.birth_date, today),
        body_weight: exerciser.body_weight,
        fitness_goal: exerciser.fitness_goal.clone(),
        total_exercise_duration: total_duration(&exerciser.exercises),
        number_of_sessions: exerciser.exercises.len(),
        exercises: exerciser
            .exercises
            .iter()
            .map(|exercise| exercise_view(exercise, Some(exerciser), today))
            .collect(),
    }
}

/// Build the read model for an exercise session. The owner is taken from
/// `owner` when given, falling back to the relation loaded on the entity;
/// when neither is present the denormalized fields get sentinel values.
#[must_use]
pub fn exercise_view(exercise: &Exercise, owner: Option<&Exerciser>, today: NaiveDate) -> ExerciseView {
    let owner = owner.or(exercise.exerciser.as_deref());
    ExerciseView {
        id: exercise.id,
        exerciser_id: exercise.exerciser_id,
        exerciser_name: owner.map_or_else(|| UNKNOWN_EXERCISER.to_owned(), |o| o.name.clone()),
        exerciser_age: owner.map_or(0, |o| age_on(o.birth_date, today)),
        exercise_type: exercise.exercise_type,
        comments: exercise.comments.clone(),
        start_time: exercise.start_time,
        end_time: exercise.end_time,
        duration: exercise.duration(),
    }
}
