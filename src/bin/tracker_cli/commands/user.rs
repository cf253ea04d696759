// ABOUTME: User command handlers: add, update, delete, get, list
// ABOUTME: Builds validated service requests from console arguments
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Exercise Tracker Project

use anyhow::Result;
use exercise_tracker::dtos::{CreateExerciserRequest, UpdateExerciserRequest};
use exercise_tracker::services::ExerciserService;
use tokio_util::sync::CancellationToken;

use super::parse_birth_date;
use crate::helpers::display::{print_exerciser, print_exerciser_line};
use crate::UserCommand;

/// Execute one `user` subcommand against the service.
pub async fn run(
    command: UserCommand,
    service: &ExerciserService,
    cancel: &CancellationToken,
) -> Result<()> {
    match command {
        UserCommand::Add {
            name,
            birth_date,
            body_weight,
            fitness_goal,
        } => {
            let request = CreateExerciserRequest {
                name,
                birth_date: parse_birth_date(&birth_date)?,
                body_weight,
                fitness_goal,
            };
            let view = service.create(&request, cancel).await?;
            println!("Created exerciser #{} ({})", view.id, view.name);
        }

        UserCommand::Update {
            id,
            name,
            birth_date,
            body_weight,
            fitness_goal,
        } => {
            let birth_date = birth_date.as_deref().map(parse_birth_date).transpose()?;
            let request = UpdateExerciserRequest {
                id,
                name,
                birth_date,
                body_weight,
                fitness_goal,
            };
            let view = service.update(&request, cancel).await?;
            println!("Updated exerciser #{}", view.id);
            print_exerciser(&view);
        }

        UserCommand::Delete { id } => {
            service.delete(id, cancel).await?;
            println!("Deleted exerciser #{id} and all of their sessions");
        }

        UserCommand::Get { id } => {
            let view = service.get_by_id(id, cancel).await?;
            print_exerciser(&view);
        }

        UserCommand::List => {
            let views = service.get_all(cancel).await?;
            if views.is_empty() {
                println!("No exercisers in the system yet");
            }
            for view in &views {
                print_exerciser_line(view);
            }
        }
    }

    Ok(())
}
