// ABOUTME: Session command handlers: track, update, delete, get, list
// ABOUTME: Parses console times and exercise types before handing off to the service
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Exercise Tracker Project

use anyhow::Result;
use exercise_tracker::dtos::{CreateExerciseRequest, UpdateExerciseRequest};
use exercise_tracker::models::ExerciseType;
use exercise_tracker::services::ExerciseService;
use tokio_util::sync::CancellationToken;

use super::parse_date_time;
use crate::helpers::display::{print_session, print_session_line};
use crate::SessionCommand;

/// Execute one `session` subcommand against the service.
pub async fn run(
    command: SessionCommand,
    service: &ExerciseService,
    cancel: &CancellationToken,
) -> Result<()> {
    match command {
        SessionCommand::Track {
            exerciser_id,
            start,
            end,
            exercise_type,
            comments,
        } => {
            let request = CreateExerciseRequest {
                exerciser_id,
                start_time: parse_date_time(&start)?,
                end_time: parse_date_time(&end)?,
                exercise_type: exercise_type.parse::<ExerciseType>()?,
                comments,
            };
            let view = service.create(&request, cancel).await?;
            println!("Tracked session #{} for {}", view.id, view.exerciser_name);
        }

        SessionCommand::Update {
            id,
            start,
            end,
            exercise_type,
            comments,
        } => {
            let request = UpdateExerciseRequest {
                id,
                start_time: start.as_deref().map(parse_date_time).transpose()?,
                end_time: end.as_deref().map(parse_date_time).transpose()?,
                exercise_type: exercise_type
                    .as_deref()
                    .map(str::parse::<ExerciseType>)
                    .transpose()?,
                comments,
            };
            let view = service.update(&request, cancel).await?;
            println!("Updated session #{}", view.id);
            print_session(&view);
        }

        SessionCommand::Delete { id } => {
            service.delete(id, cancel).await?;
            println!("Deleted session #{id}");
        }

        SessionCommand::Get { id } => {
            let view = service.get_by_id(id, cancel).await?;
            print_session(&view);
        }

        SessionCommand::List { exerciser_id } => {
            let views = match exerciser_id {
                Some(owner) => service.get_by_exerciser_id(owner, cancel).await?,
                None => service.get_all(cancel).await?,
            };
            if views.is_empty() {
                println!("No sessions tracked yet");
            }
            for view in &views {
                print_session_line(view);
            }
        }
    }

    Ok(())
}
