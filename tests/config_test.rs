// ABOUTME: Tests for environment-based configuration loading
// ABOUTME: Serialized because they mutate process environment variables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Exercise Tracker Project

#![allow(missing_docs, clippy::unwrap_used)]

use exercise_tracker::config::{LogLevel, TrackerConfig, DEFAULT_DATABASE_URL};
use serial_test::serial;

#[test]
#[serial]
fn defaults_apply_when_the_environment_is_empty() {
    std::env::remove_var("DATABASE_URL");
    std::env::remove_var("LOG_LEVEL");

    let config = TrackerConfig::from_env().unwrap();
    assert_eq!(config.database_url, DEFAULT_DATABASE_URL);
    assert_eq!(config.log_level, LogLevel::Info);
}

#[test]
#[serial]
fn environment_variables_override_the_defaults() {
    std::env::set_var("DATABASE_URL", "sqlite:/tmp/custom.db");
    std::env::set_var("LOG_LEVEL", "debug");

    let config = TrackerConfig::from_env().unwrap();
    assert_eq!(config.database_url, "sqlite:/tmp/custom.db");
    assert_eq!(config.log_level, LogLevel::Debug);

    std::env::remove_var("DATABASE_URL");
    std::env::remove_var("LOG_LEVEL");
}

#[test]
#[serial]
fn blank_database_url_is_rejected() {
    std::env::set_var("DATABASE_URL", "   ");
    let result = TrackerConfig::from_env();
    std::env::remove_var("DATABASE_URL");
    assert!(result.is_err());
}

#[test]
fn unknown_log_level_falls_back_to_info() {
    assert_eq!(LogLevel::from_str_or_default("verbose"), LogLevel::Info);
    assert_eq!(LogLevel::from_str_or_default("TRACE"), LogLevel::Trace);
}
