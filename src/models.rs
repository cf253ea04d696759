// ABOUTME: Core domain entities for the exercise tracker
// ABOUTME: Defines Exerciser, Exercise, ExerciseType and the partial-update merge rules
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Exercise Tracker Project

//! # Data Models
//!
//! Domain entities as persisted by the store. Derived values (age, total
//! duration, session counts) are never stored on these types; they are
//! computed at read time by the [`crate::mapping`] module.

use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::dtos::{UpdateExerciseRequest, UpdateExerciserRequest};
use crate::errors::TrackerError;

/// A tracked user of the fitness system
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Exerciser {
    /// Store-assigned identifier (0 until persisted)
    pub id: i64,
    /// Display name, 2-50 characters
    pub name: String,
    /// Date of birth; must lie in the past and within 120 years of today
    pub birth_date: NaiveDate,
    /// Body weight in pounds, when the user chose to record it
    pub body_weight: Option<f64>,
    /// Free-text fitness goal, at most 200 characters
    pub fitness_goal: Option<String>,
    /// Owned exercise sessions, eagerly loaded on fetch
    #[serde(default)]
    pub exercises: Vec<Exercise>,
}

impl Exerciser {
    /// Apply a partial update: fields present on the request overwrite,
    /// fields left unset keep their current value.
    pub fn apply_update(&mut self, request: &UpdateExerciserRequest) {
        if let Some(name) = &request.name {
            self.name.clone_from(name);
        }
        if let Some(birth_date) = request.birth_date {
            self.birth_date = birth_date;
        }
        if let Some(body_weight) = request.body_weight {
            self.body_weight = Some(body_weight);
        }
        if let Some(fitness_goal) = &request.fitness_goal {
            self.fitness_goal = Some(fitness_goal.clone());
        }
    }
}

/// A single recorded workout session owned by one [`Exerciser`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Exercise {
    /// Store-assigned identifier (0 until persisted)
    pub id: i64,
    /// Owning exerciser; required, enforced by the store with cascade delete
    pub exerciser_id: i64,
    /// Session start, never in the future
    pub start_time: DateTime<Utc>,
    /// Session end, strictly after the start
    pub end_time: DateTime<Utc>,
    /// Kind of workout performed
    pub exercise_type: ExerciseType,
    /// Optional free-text notes, non-empty and at most 200 characters
    pub comments: Option<String>,
    /// Owning exerciser record when the fetch loaded the relation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exerciser: Option<Box<Exerciser>>,
}

impl Exercise {
    /// Session length, always positive for a valid record
    #[must_use]
    pub fn duration(&self) -> Duration {
        self.end_time - self.start_time
    }

    /// Apply a partial update: fields present on the request overwrite,
    /// fields left unset keep their current value. The loaded relation is
    /// untouched.
    pub fn apply_update(&mut self, request: &UpdateExerciseRequest) {
        if let Some(start_time) = request.start_time {
            self.start_time = start_time;
        }
        if let Some(end_time) = request.end_time {
            self.end_time = end_time;
        }
        if let Some(exercise_type) = request.exercise_type {
            self.exercise_type = exercise_type;
        }
        if let Some(comments) = &request.comments {
            self.comments = Some(comments.clone());
        }
    }
}

/// Kind of workout recorded for a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ExerciseType {
    /// Resistance training with weights
    Weights,
    /// Cardiovascular training
    Cardio,
    /// Yoga practice
    Yoga,
    /// Bodyweight training
    Calisthenics,
    /// Anything that does not fit the other categories
    #[default]
    Other,
}

impl ExerciseType {
    /// Every valid member, in declaration order. Used for both validation
    /// and display-name lookup.
    pub const ALL: [Self; 5] = [
        Self::Weights,
        Self::Cardio,
        Self::Yoga,
        Self::Calisthenics,
        Self::Other,
    ];

    /// Display and storage name
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Weights => "Weights",
            Self::Cardio => "Cardio",
            Self::Yoga => "Yoga",
            Self::Calisthenics => "Calisthenics",
            Self::Other => "Other",
        }
    }

    /// Comma-separated list of the valid member names
    #[must_use]
    pub fn members() -> String {
        Self::ALL
            .iter()
            .map(Self::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl Display for ExerciseType {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExerciseType {
    type Err = TrackerError;

    /// Parse a member name, case-insensitively, against the closed set.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .iter()
            .find(|member| member.as_str().eq_ignore_ascii_case(trimmed))
            .copied()
            .ok_or_else(|| {
                TrackerError::validation(format!(
                    "Invalid exercise type '{s}'. Must be one of: {}.",
                    Self::members()
                ))
            })
    }
}
