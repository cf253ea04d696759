// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Handles environment variables and runtime configuration parsing
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Environment-based configuration; no config files, variables only.

use std::env;

use anyhow::{ensure, Result};

/// Default store location when `DATABASE_URL` is unset
pub const DEFAULT_DATABASE_URL: &str = "sqlite:exercise_tracker.db";

/// Strongly typed log level configuration
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LogLevel {
    /// Errors only
    Error,
    /// Warnings and errors
    Warn,
    /// Standard operational logging
    #[default]
    Info,
    /// Verbose diagnostics
    Debug,
    /// Everything
    Trace,
}

impl LogLevel {
    /// Directive string for the tracing env filter
    #[must_use]
    pub const fn as_filter(&self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
        }
    }

    /// Parse from string with fallback to the default level
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "error" => Self::Error,
            "warn" => Self::Warn,
            "debug" => Self::Debug,
            "trace" => Self::Trace,
            _ => Self::Info,
        }
    }
}

/// Runtime configuration for the tracker
#[derive(Debug, Clone)]
pub struct TrackerConfig {
    /// Connection string for the SQLite store
    pub database_url: String,
    /// Default log level when `RUST_LOG` is unset
    pub log_level: LogLevel,
}

impl TrackerConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        let database_url =
            env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_owned());
        ensure!(!database_url.trim().is_empty(), "DATABASE_URL must not be empty");

        let log_level = env::var("LOG_LEVEL")
            .map(|value| LogLevel::from_str_or_default(&value))
            .unwrap_or_default();

        Ok(Self {
            database_url,
            log_level,
        })
    }

    /// One-line summary for startup logging
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "database_url={}, log_level={}",
            self.database_url,
            self.log_level.as_filter()
        )
    }
}
