// ABOUTME: Logging configuration and structured logging setup for diagnostics
// ABOUTME: Configures the tracing subscriber from the environment with a sensible default
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Structured logging setup with env-filter support

use anyhow::{anyhow, Result};
use tracing_subscriber::EnvFilter;

use crate::config::LogLevel;

/// Initialize the global tracing subscriber. `RUST_LOG` wins when set;
/// otherwise `default_level` applies.
pub fn init_from_env(default_level: &LogLevel) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level.as_filter()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow!("Failed to initialize logging: {e}"))
}
