// ABOUTME: Tracker CLI - command-line console for the exercise tracker
// ABOUTME: Exposes user and session CRUD operations as subcommands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Exercise Tracker Project
//!
//! Usage:
//! ```bash
//! # Register a user
//! tracker-cli user add --name "Ada Lovelace" --birth-date 12-10-1815
//!
//! # Track a session
//! tracker-cli session track --exerciser-id 1 \
//!     --start "06-01-2025 07:30" --end "06-01-2025 08:15" --type cardio
//!
//! # Inspect
//! tracker-cli user get --id 1
//! tracker-cli session list --exerciser-id 1
//! ```

mod commands;
mod helpers;

use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use exercise_tracker::config::{LogLevel, TrackerConfig};
use exercise_tracker::database::repositories::{
    ExerciseRepository, ExerciserRepository, SqlExerciseRepository, SqlExerciserRepository,
};
use exercise_tracker::database::Database;
use exercise_tracker::logging;
use exercise_tracker::services::{ExerciseService, ExerciserService};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

#[derive(Parser)]
#[command(
    name = "tracker-cli",
    about = "Exercise Tracker console",
    long_about = "Console for managing exercisers and their exercise sessions."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Database URL override
    #[arg(long, global = true)]
    database_url: Option<String>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Manage users of the tracker
    User {
        #[command(subcommand)]
        action: UserCommand,
    },

    /// Manage tracked exercise sessions
    Session {
        #[command(subcommand)]
        action: SessionCommand,
    },
}

/// Operations on exercisers
#[derive(Subcommand)]
pub enum UserCommand {
    /// Add a user to the system
    Add {
        /// User's name
        #[arg(long)]
        name: String,

        /// Birth date in MM-DD-YYYY format
        #[arg(long)]
        birth_date: String,

        /// Body weight in pounds
        #[arg(long)]
        body_weight: Option<f64>,

        /// Fitness goal
        #[arg(long)]
        fitness_goal: Option<String>,
    },

    /// Update a user; only the provided fields change
    Update {
        /// Id of the user to update
        #[arg(long)]
        id: i64,

        /// New name
        #[arg(long)]
        name: Option<String>,

        /// New birth date in MM-DD-YYYY format
        #[arg(long)]
        birth_date: Option<String>,

        /// New body weight in pounds
        #[arg(long)]
        body_weight: Option<f64>,

        /// New fitness goal
        #[arg(long)]
        fitness_goal: Option<String>,
    },

    /// Delete a user and all of their sessions
    Delete {
        /// Id of the user to delete
        #[arg(long)]
        id: i64,
    },

    /// View detailed information for one user
    Get {
        /// Id of the user to show
        #[arg(long)]
        id: i64,
    },

    /// View all users in the system
    List,
}

/// Operations on tracked exercise sessions
#[derive(Subcommand)]
pub enum SessionCommand {
    /// Track an exercise session
    Track {
        /// Id of the user the session belongs to
        #[arg(long)]
        exerciser_id: i64,

        /// Start time in "MM-DD-YYYY HH:MM" format
        #[arg(long)]
        start: String,

        /// End time in "MM-DD-YYYY HH:MM" format
        #[arg(long)]
        end: String,

        /// Exercise type: weights, cardio, yoga, calisthenics, other
        #[arg(long = "type")]
        exercise_type: String,

        /// Free-text comments
        #[arg(long)]
        comments: Option<String>,
    },

    /// Update a tracked session; only the provided fields change
    Update {
        /// Id of the session to update
        #[arg(long)]
        id: i64,

        /// New start time in "MM-DD-YYYY HH:MM" format
        #[arg(long)]
        start: Option<String>,

        /// New end time in "MM-DD-YYYY HH:MM" format
        #[arg(long)]
        end: Option<String>,

        /// New exercise type
        #[arg(long = "type")]
        exercise_type: Option<String>,

        /// New comments
        #[arg(long)]
        comments: Option<String>,
    },

    /// Delete a tracked session
    Delete {
        /// Id of the session to delete
        #[arg(long)]
        id: i64,
    },

    /// View detailed information for one session
    Get {
        /// Id of the session to show
        #[arg(long)]
        id: i64,
    },

    /// View tracked sessions, optionally for one user only
    List {
        /// Restrict to sessions of this user
        #[arg(long)]
        exerciser_id: Option<i64>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = TrackerConfig::from_env()?;
    let level = if cli.verbose {
        LogLevel::Debug
    } else {
        config.log_level.clone()
    };
    logging::init_from_env(&level)?;
    debug!("Configuration: {}", config.summary());

    let database_url = cli.database_url.unwrap_or(config.database_url);
    info!("Connecting to database: {database_url}");
    let database = Database::new(&database_url).await?;

    let exerciser_repository: Arc<dyn ExerciserRepository> =
        Arc::new(SqlExerciserRepository::new(database.clone()));
    let exercise_repository: Arc<dyn ExerciseRepository> =
        Arc::new(SqlExerciseRepository::new(database));

    let exerciser_service = ExerciserService::new(Arc::clone(&exerciser_repository));
    let exercise_service = ExerciseService::new(exercise_repository, exerciser_repository);

    // Ctrl-C aborts the in-flight operation through the token.
    let cancel = CancellationToken::new();
    let signal_token = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            signal_token.cancel();
        }
    });

    match cli.command {
        Command::User { action } => commands::user::run(action, &exerciser_service, &cancel).await,
        Command::Session { action } => {
            commands::session::run(action, &exercise_service, &cancel).await
        }
    }
}
