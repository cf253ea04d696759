// ABOUTME: Exerciser table operations: schema, CRUD, and eager loading of owned sessions
// ABOUTME: Rows store the birth date as an ISO-8601 date string
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Exercise Tracker Project

use std::collections::HashMap;

use sqlx::sqlite::SqliteRow;
use sqlx::Row;

use super::{not_found, store_error, Database};
use crate::errors::{TrackerError, TrackerResult};
use crate::models::{Exercise, Exerciser};

impl Database {
    /// Create the exercisers table
    pub(super) async fn migrate_exercisers(&self) -> TrackerResult<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS exercisers (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                birth_date TEXT NOT NULL,
                body_weight REAL,
                fitness_goal TEXT
            )
            ",
        )
        .execute(self.pool())
        .await
        .map_err(|e| store_error("exercisers schema migration", &e))?;

        Ok(())
    }

    /// Insert a new exerciser and return it with its store-assigned id.
    pub async fn insert_exerciser(&self, exerciser: &Exerciser) -> TrackerResult<Exerciser> {
        let result = sqlx::query(
            r"
            INSERT INTO exercisers (name, birth_date, body_weight, fitness_goal)
            VALUES ($1, $2, $3, $4)
            ",
        )
        .bind(&exerciser.name)
        .bind(exerciser.birth_date.to_string())
        .bind(exerciser.body_weight)
        .bind(&exerciser.fitness_goal)
        .execute(self.pool())
        .await
        .map_err(|e| store_error("exerciser creation", &e))?;

        let mut created = exerciser.clone();
        created.id = result.last_insert_rowid();
        created.exercises = Vec::new();
        Ok(created)
    }

    /// Persist the full record of an existing exerciser.
    pub async fn update_exerciser(&self, exerciser: &Exerciser) -> TrackerResult<()> {
        let result = sqlx::query(
            r"
            UPDATE exercisers
            SET name = $1, birth_date = $2, body_weight = $3, fitness_goal = $4
            WHERE id = $5
            ",
        )
        .bind(&exerciser.name)
        .bind(exerciser.birth_date.to_string())
        .bind(exerciser.body_weight)
        .bind(&exerciser.fitness_goal)
        .bind(exerciser.id)
        .execute(self.pool())
        .await
        .map_err(|e| store_error("exerciser update", &e))?;

        if result.rows_affected() == 0 {
            return Err(not_found(format!(
                "No exerciser with id: {} found. Nothing updated.",
                exerciser.id
            )));
        }
        Ok(())
    }

    /// Delete an exerciser by id; owned sessions go with it via the cascade.
    pub async fn delete_exerciser(&self, id: i64) -> TrackerResult<()> {
        let existing = sqlx::query("SELECT id FROM exercisers WHERE id = $1")
            .bind(id)
            .fetch_optional(self.pool())
            .await
            .map_err(|e| store_error("deletion of exerciser", &e))?;

        if existing.is_none() {
            return Err(not_found(format!(
                "No exerciser with id: {id} found. Nothing deleted."
            )));
        }

        sqlx::query("DELETE FROM exercisers WHERE id = $1")
            .bind(id)
            .execute(self.pool())
            .await
            .map_err(|e| store_error("deletion of exerciser", &e))?;

        Ok(())
    }

    /// Fetch an exerciser by id with its sessions eagerly loaded.
    pub async fn get_exerciser_by_id(&self, id: i64) -> TrackerResult<Exerciser> {
        let row = sqlx::query(
            r"
            SELECT id, name, birth_date, body_weight, fitness_goal
            FROM exercisers
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(self.pool())
        .await
        .map_err(|e| store_error("retrieval of exerciser", &e))?;

        let Some(row) = row else {
            return Err(not_found(format!("Exerciser with id: {id} not found.")));
        };

        let mut exerciser = row_to_exerciser(&row)?;
        exerciser.exercises = self.load_sessions(id).await?;
        Ok(exerciser)
    }

    /// Fetch every exerciser with sessions eagerly loaded.
    pub async fn get_exercisers(&self) -> TrackerResult<Vec<Exerciser>> {
        let rows = sqlx::query(
            r"
            SELECT id, name, birth_date, body_weight, fitness_goal
            FROM exercisers
            ORDER BY id
            ",
        )
        .fetch_all(self.pool())
        .await
        .map_err(|e| store_error("retrieval of all exercisers", &e))?;

        let mut exercisers = rows
            .iter()
            .map(row_to_exerciser)
            .collect::<TrackerResult<Vec<_>>>()?;

        let session_rows = sqlx::query(
            r"
            SELECT id, exerciser_id, start_time, end_time, exercise_type, comments
            FROM exercises
            ORDER BY start_time
            ",
        )
        .fetch_all(self.pool())
        .await
        .map_err(|e| store_error("retrieval of all exercisers", &e))?;

        let mut by_owner: HashMap<i64, Vec<Exercise>> = HashMap::new();
        for row in &session_rows {
            let session = super::exercises::row_to_exercise(row)?;
            by_owner.entry(session.exerciser_id).or_default().push(session);
        }
        for exerciser in &mut exercisers {
            exerciser.exercises = by_owner.remove(&exerciser.id).unwrap_or_default();
        }

        Ok(exercisers)
    }

    async fn load_sessions(&self, exerciser_id: i64) -> TrackerResult<Vec<Exercise>> {
        let rows = sqlx::query(
            r"
            SELECT id, exerciser_id, start_time, end_time, exercise_type, comments
            FROM exercises
            WHERE exerciser_id = $1
            ORDER BY start_time
            ",
        )
        .bind(exerciser_id)
        .fetch_all(self.pool())
        .await
        .map_err(|e| store_error("retrieval of exerciser", &e))?;

        rows.iter().map(super::exercises::row_to_exercise).collect()
    }
}

fn row_to_exerciser(row: &SqliteRow) -> TrackerResult<Exerciser> {
    let birth_date_str: String = row.get("birth_date");
    Ok(Exerciser {
        id: row.get("id"),
        name: row.get("name"),
        birth_date: birth_date_str
            .parse()
            .map_err(|e| TrackerError::internal(format!("Invalid birth date in store: {e}")))?,
        body_weight: row.get("body_weight"),
        fitness_goal: row.get("fitness_goal"),
        exercises: Vec::new(),
    })
}
