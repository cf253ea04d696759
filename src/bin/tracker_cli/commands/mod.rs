// ABOUTME: Subcommand handlers for the tracker CLI
// ABOUTME: Shared console input parsing lives here; one module per command group
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Exercise Tracker Project

pub mod session;
pub mod user;

use anyhow::{Context, Result};
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

/// Console format for birth dates
pub const BIRTH_DATE_FORMAT: &str = "%m-%d-%Y";
/// Console format for session start/end times
pub const DATE_TIME_FORMAT: &str = "%m-%d-%Y %H:%M";

/// Parse a console birth date (`MM-DD-YYYY`).
pub fn parse_birth_date(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value, BIRTH_DATE_FORMAT)
        .with_context(|| format!("Birth date must use the format MM-DD-YYYY, got '{value}'"))
}

/// Parse a console session time (`MM-DD-YYYY HH:MM`), interpreted as UTC.
pub fn parse_date_time(value: &str) -> Result<DateTime<Utc>> {
    NaiveDateTime::parse_from_str(value, DATE_TIME_FORMAT)
        .map(|dt| dt.and_utc())
        .with_context(|| format!("Time must use the format \"MM-DD-YYYY HH:MM\", got '{value}'"))
}
