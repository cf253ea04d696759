// ABOUTME: Pure request validators applied before any persistence is attempted
// ABOUTME: Each validator returns the ordered list of human-readable violations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Exercise Tracker Project

//! # Request Validation
//!
//! Each request type has one validator: a pure function over the payload
//! and an explicitly supplied evaluation instant. Validators collect every
//! violation rather than stopping at the first, so callers can surface the
//! full list in one message. The exercise type needs no membership rule
//! here: it reaches these functions already parsed against the closed
//! [`crate::models::ExerciseType`] set.

use chrono::{DateTime, Months, NaiveDate, Utc};

use crate::dtos::{
    CreateExerciseRequest, CreateExerciserRequest, UpdateExerciseRequest, UpdateExerciserRequest,
};

/// Minimum length of an exerciser name, in characters
pub const NAME_MIN_LENGTH: usize = 2;
/// Maximum length of an exerciser name, in characters
pub const NAME_MAX_LENGTH: usize = 50;
/// Maximum length of a fitness goal, in characters
pub const GOAL_MAX_LENGTH: usize = 200;
/// Maximum length of session comments, in characters
pub const COMMENTS_MAX_LENGTH: usize = 200;
/// Oldest accepted age: a birth date exactly this many years back is valid
pub const MAX_AGE_YEARS: u32 = 120;

/// Validate a request to register a new exerciser as of `today`.
#[must_use]
pub fn validate_create_exerciser(request: &CreateExerciserRequest, today: NaiveDate) -> Vec<String> {
    let mut violations = Vec::new();

    check_name(&request.name, false, &mut violations);
    check_birth_date(request.birth_date, today, false, &mut violations);
    check_body_weight(request.body_weight, &mut violations);
    check_fitness_goal(request.fitness_goal.as_deref(), &mut violations);

    violations
}

/// Validate a partial exerciser update as of `today`.
#[must_use]
pub fn validate_update_exerciser(request: &UpdateExerciserRequest, today: NaiveDate) -> Vec<String> {
    let mut violations = Vec::new();

    if request.id <= 0 {
        violations.push("Exerciser id must be greater than 0.".to_owned());
    }
    if let Some(name) = &request.name {
        check_name(name, true, &mut violations);
    }
    if let Some(birth_date) = request.birth_date {
        check_birth_date(birth_date, today, true, &mut violations);
    }
    check_body_weight(request.body_weight, &mut violations);
    check_fitness_goal(request.fitness_goal.as_deref(), &mut violations);

    if request.name.is_none()
        && request.birth_date.is_none()
        && request.body_weight.is_none()
        && request.fitness_goal.is_none()
    {
        violations.push(
            "At least one field (name, birth date, body weight, fitness goal) must be provided for update."
                .to_owned(),
        );
    }

    violations
}

/// Validate a request to record a new exercise session as of `now`.
#[must_use]
pub fn validate_create_exercise(request: &CreateExerciseRequest, now: DateTime<Utc>) -> Vec<String> {
    let mut violations = Vec::new();

    if request.exerciser_id <= 0 {
        violations.push("Exerciser ID must be greater than 0.".to_owned());
    }
    if request.start_time > now {
        violations.push("Start time cannot be in the future.".to_owned());
    }
    if request.end_time > now {
        violations.push("End time cannot be in the future.".to_owned());
    }
    if request.end_time <= request.start_time {
        violations.push("End time must be after start time.".to_owned());
    }
    // Redundant with the ordering rule above, kept as an explicit guard on
    // the derived duration.
    if (request.end_time - request.start_time) <= chrono::Duration::zero() {
        violations.push("Exercise duration must be positive.".to_owned());
    }
    check_comments(request.comments.as_deref(), &mut violations);

    violations
}

/// Validate a partial exercise update as of `now`.
#[must_use]
pub fn validate_update_exercise(request: &UpdateExerciseRequest, now: DateTime<Utc>) -> Vec<String> {
    let mut violations = Vec::new();

    if request.id <= 0 {
        violations.push("Exercise id must be greater than 0.".to_owned());
    }
    if request.start_time.is_some_and(|start| start > now) {
        violations.push("Start time cannot be in the future if provided.".to_owned());
    }
    if request.end_time.is_some_and(|end| end > now) {
        violations.push("End time cannot be in the future if provided.".to_owned());
    }
    if let (Some(start), Some(end)) = (request.start_time, request.end_time) {
        if end <= start {
            violations.push("End time must be after start time.".to_owned());
        }
        if (end - start) <= chrono::Duration::zero() {
            violations
                .push("Exercise duration must be positive if start and end times are provided.".to_owned());
        }
    }
    check_comments(request.comments.as_deref(), &mut violations);

    if request.start_time.is_none()
        && request.end_time.is_none()
        && request.exercise_type.is_none()
        && request.comments.is_none()
    {
        violations.push(
            "At least one field (start time, end time, exercise type, comments) must be provided for update."
                .to_owned(),
        );
    }

    violations
}

fn check_name(name: &str, on_update: bool, violations: &mut Vec<String>) {
    let suffix = if on_update { " if provided." } else { "." };
    if name.trim().is_empty() {
        violations.push(format!("Name cannot be empty{suffix}"));
        return;
    }
    let length = name.chars().count();
    if length < NAME_MIN_LENGTH || length > NAME_MAX_LENGTH {
        violations.push(format!(
            "Name must be between {NAME_MIN_LENGTH} and {NAME_MAX_LENGTH} characters{suffix}"
        ));
    }
}

fn check_birth_date(
    birth_date: NaiveDate,
    today: NaiveDate,
    on_update: bool,
    violations: &mut Vec<String>,
) {
    let suffix = if on_update { " if provided." } else { "." };
    if birth_date >= today {
        violations.push(format!("Birth date must be in the past{suffix}"));
    }
    let earliest = today.checked_sub_months(Months::new(MAX_AGE_YEARS * 12));
    if earliest.is_some_and(|earliest| birth_date < earliest) {
        violations.push(format!(
            "Birth date cannot be more than {MAX_AGE_YEARS} years in the past{suffix}"
        ));
    }
}

fn check_body_weight(body_weight: Option<f64>, violations: &mut Vec<String>) {
    if body_weight.is_some_and(|weight| weight <= 0.0) {
        violations.push("Body weight must be greater than 0 if provided.".to_owned());
    }
}

fn check_fitness_goal(fitness_goal: Option<&str>, violations: &mut Vec<String>) {
    if fitness_goal.is_some_and(|goal| goal.chars().count() > GOAL_MAX_LENGTH) {
        violations.push(format!(
            "Fitness goal cannot exceed {GOAL_MAX_LENGTH} characters if provided."
        ));
    }
}

fn check_comments(comments: Option<&str>, violations: &mut Vec<String>) {
    let Some(comments) = comments else {
        return;
    };
    if comments.trim().is_empty() {
        violations.push("Comments cannot be empty if provided.".to_owned());
    }
    if comments.chars().count() > COMMENTS_MAX_LENGTH {
        violations.push(format!(
            "Comments cannot exceed {COMMENTS_MAX_LENGTH} characters if provided."
        ));
    }
}
