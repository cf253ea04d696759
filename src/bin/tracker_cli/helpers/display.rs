// ABOUTME: Plain-text rendering of exerciser and session views
// ABOUTME: Keeps all console formatting in one place, away from the domain layer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Exercise Tracker Project

use chrono::Duration;
use exercise_tracker::dtos::{ExerciseView, ExerciserView};

use crate::commands::DATE_TIME_FORMAT;

/// Render a duration as `HH:MM`, hours unbounded.
#[must_use]
pub fn format_duration(duration: Duration) -> String {
    let minutes = duration.num_minutes().max(0);
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}

/// Print the one-line summary used by `user list`.
pub fn print_exerciser_line(view: &ExerciserView) {
    println!(
        "#{} {} (age {}) - {} sessions, {} total",
        view.id,
        view.name,
        view.age,
        view.number_of_sessions,
        format_duration(view.total_exercise_duration)
    );
}

/// Print the detailed view used by `user get`.
pub fn print_exerciser(view: &ExerciserView) {
    println!("Exerciser #{}", view.id);
    println!("  Name:           {}", view.name);
    println!("  Age:            {}", view.age);
    match view.body_weight {
        Some(weight) => println!("  Body weight:    {weight} lbs"),
        None => println!("  Body weight:    -"),
    }
    println!(
        "  Fitness goal:   {}",
        view.fitness_goal.as_deref().unwrap_or("-")
    );
    println!("  Sessions:       {}", view.number_of_sessions);
    println!(
        "  Total duration: {}",
        format_duration(view.total_exercise_duration)
    );
    for session in &view.exercises {
        print!("  ");
        print_session_line(session);
    }
}

/// Print the one-line summary used by `session list`.
pub fn print_session_line(view: &ExerciseView) {
    println!(
        "#{} {} by {} - {} to {} ({})",
        view.id,
        view.exercise_type,
        view.exerciser_name,
        view.start_time.format(DATE_TIME_FORMAT),
        view.end_time.format(DATE_TIME_FORMAT),
        format_duration(view.duration)
    );
}

/// Print the detailed view used by `session get`.
pub fn print_session(view: &ExerciseView) {
    println!("Exercise session #{}", view.id);
    println!(
        "  Exerciser: #{} {} (age {})",
        view.exerciser_id, view.exerciser_name, view.exerciser_age
    );
    println!("  Type:      {}", view.exercise_type);
    println!("  Start:     {}", view.start_time.format(DATE_TIME_FORMAT));
    println!("  End:       {}", view.end_time.format(DATE_TIME_FORMAT));
    println!("  Duration:  {}", format_duration(view.duration));
    println!("  Comments:  {}", view.comments.as_deref().unwrap_or("-"));
}
