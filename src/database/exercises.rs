// ABOUTME: Exercise session table operations: schema, CRUD, and owner eager loading
// ABOUTME: Rows store start/end instants as RFC 3339 strings and the type by display name
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Exercise Tracker Project

use chrono::{DateTime, Utc};
use sqlx::sqlite::SqliteRow;
use sqlx::Row;

use super::{not_found, store_error, Database};
use crate::errors::{TrackerError, TrackerResult};
use crate::models::{Exercise, ExerciseType, Exerciser};

impl Database {
    /// Create the exercises table and its foreign-key index
    pub(super) async fn migrate_exercises(&self) -> TrackerResult<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS exercises (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                exerciser_id INTEGER NOT NULL REFERENCES exercisers(id) ON DELETE CASCADE,
                start_time TEXT NOT NULL,
                end_time TEXT NOT NULL,
                exercise_type TEXT NOT NULL,
                comments TEXT
            )
            ",
        )
        .execute(self.pool())
        .await
        .map_err(|e| store_error("exercises schema migration", &e))?;

        sqlx::query(
            "CREATE INDEX IF NOT EXISTS idx_exercises_exerciser_id ON exercises(exerciser_id)",
        )
        .execute(self.pool())
        .await
        .map_err(|e| store_error("exercises schema migration", &e))?;

        Ok(())
    }

    /// Insert a new session and return it with its store-assigned id.
    pub async fn insert_exercise(&self, exercise: &Exercise) -> TrackerResult<Exercise> {
        let result = sqlx::query(
            r"
            INSERT INTO exercises (exerciser_id, start_time, end_time, exercise_type, comments)
            VALUES ($1, $2, $3, $4, $5)
            ",
        )
        .bind(exercise.exerciser_id)
        .bind(exercise.start_time.to_rfc3339())
        .bind(exercise.end_time.to_rfc3339())
        .bind(exercise.exercise_type.as_str())
        .bind(&exercise.comments)
        .execute(self.pool())
        .await
        .map_err(|e| store_error("exercise session creation", &e))?;

        let mut created = exercise.clone();
        created.id = result.last_insert_rowid();
        Ok(created)
    }

    /// Persist the full record of an existing session.
    pub async fn update_exercise(&self, exercise: &Exercise) -> TrackerResult<()> {
        let result = sqlx::query(
            r"
            UPDATE exercises
            SET exerciser_id = $1, start_time = $2, end_time = $3, exercise_type = $4, comments = $5
            WHERE id = $6
            ",
        )
        .bind(exercise.exerciser_id)
        .bind(exercise.start_time.to_rfc3339())
        .bind(exercise.end_time.to_rfc3339())
        .bind(exercise.exercise_type.as_str())
        .bind(&exercise.comments)
        .bind(exercise.id)
        .execute(self.pool())
        .await
        .map_err(|e| store_error("exercise session update", &e))?;

        if result.rows_affected() == 0 {
            return Err(not_found(format!(
                "No exercise session with id: {} found. Nothing updated.",
                exercise.id
            )));
        }
        Ok(())
    }

    /// Delete a session by id.
    pub async fn delete_exercise(&self, id: i64) -> TrackerResult<()> {
        let existing = sqlx::query("SELECT id FROM exercises WHERE id = $1")
            .bind(id)
            .fetch_optional(self.pool())
            .await
            .map_err(|e| store_error("deletion of exercise session", &e))?;

        if existing.is_none() {
            return Err(not_found(format!(
                "No exercise session with id: {id} found. Nothing deleted."
            )));
        }

        sqlx::query("DELETE FROM exercises WHERE id = $1")
            .bind(id)
            .execute(self.pool())
            .await
            .map_err(|e| store_error("deletion of exercise session", &e))?;

        Ok(())
    }

    /// Fetch a session by id with its owner eagerly loaded.
    pub async fn get_exercise_by_id(&self, id: i64) -> TrackerResult<Exercise> {
        let row = sqlx::query(&with_owner_query("WHERE e.id = $1"))
            .bind(id)
            .fetch_optional(self.pool())
            .await
            .map_err(|e| store_error("retrieval of exercise session", &e))?;

        let Some(row) = row else {
            return Err(not_found(format!(
                "Exercise session with id: {id} not found."
            )));
        };

        row_to_exercise_with_owner(&row)
    }

    /// Fetch every session owned by `exerciser_id`, owners loaded. An
    /// unknown exerciser simply yields an empty list.
    pub async fn get_exercises_by_exerciser_id(
        &self,
        exerciser_id: i64,
    ) -> TrackerResult<Vec<Exercise>> {
        let rows = sqlx::query(&with_owner_query("WHERE e.exerciser_id = $1"))
            .bind(exerciser_id)
            .fetch_all(self.pool())
            .await
            .map_err(|e| store_error("retrieval of exercise sessions for exerciser", &e))?;

        rows.iter().map(row_to_exercise_with_owner).collect()
    }

    /// Fetch every session in the system, owners loaded.
    pub async fn get_exercises(&self) -> TrackerResult<Vec<Exercise>> {
        let rows = sqlx::query(&with_owner_query(""))
            .fetch_all(self.pool())
            .await
            .map_err(|e| store_error("retrieval of all exercises", &e))?;

        rows.iter().map(row_to_exercise_with_owner).collect()
    }
}

fn with_owner_query(filter: &str) -> String {
    format!(
        r"
        SELECT e.id, e.exerciser_id, e.start_time, e.end_time, e.exercise_type, e.comments,
               x.name AS owner_name, x.birth_date AS owner_birth_date,
               x.body_weight AS owner_body_weight, x.fitness_goal AS owner_fitness_goal
        FROM exercises e
        LEFT JOIN exercisers x ON x.id = e.exerciser_id
        {filter}
        ORDER BY e.start_time
        "
    )
}

pub(super) fn row_to_exercise(row: &SqliteRow) -> TrackerResult<Exercise> {
    let start_time_str: String = row.get("start_time");
    let end_time_str: String = row.get("end_time");
    let exercise_type_str: String = row.get("exercise_type");

    Ok(Exercise {
        id: row.get("id"),
        exerciser_id: row.get("exerciser_id"),
        start_time: parse_instant(&start_time_str)?,
        end_time: parse_instant(&end_time_str)?,
        exercise_type: exercise_type_str
            .parse::<ExerciseType>()
            .map_err(|_| {
                TrackerError::internal(format!(
                    "Invalid exercise type in store: {exercise_type_str}"
                ))
            })?,
        comments: row.get("comments"),
        exerciser: None,
    })
}

fn row_to_exercise_with_owner(row: &SqliteRow) -> TrackerResult<Exercise> {
    let mut exercise = row_to_exercise(row)?;

    let owner_name: Option<String> = row.get("owner_name");
    if let Some(name) = owner_name {
        let birth_date_str: String = row.get("owner_birth_date");
        exercise.exerciser = Some(Box::new(Exerciser {
            id: exercise.exerciser_id,
            name,
            birth_date: birth_date_str
                .parse()
                .map_err(|e| TrackerError::internal(format!("Invalid birth date in store: {e}")))?,
            body_weight: row.get("owner_body_weight"),
            fitness_goal: row.get("owner_fitness_goal"),
            exercises: Vec::new(),
        }));
    }

    Ok(exercise)
}

fn parse_instant(value: &str) -> TrackerResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| TrackerError::internal(format!("Invalid datetime in store: {e}")))
}
