//! Runtime configuration from command-line flags and environment.
//!
//! Every flag has an environment fallback so the dashboard can be driven
//! entirely from a `.env` file:
//! - `VITALSCOPE_ASSESSMENT`: path to an assessment JSON export (demo data when absent)
//! - `VITALSCOPE_TICK_MS`: session clock tick period in milliseconds, default 1000
//! - `VITALSCOPE_NO_TIMER`: disable the session clock entirely

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

pub const DEFAULT_TICK_MS: u64 = 1000;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("tick period must be greater than zero")]
    ZeroTickPeriod,
}

#[derive(Parser, Debug, Clone)]
#[command(name = "vitalscope", about = "Progressive-disclosure health assessment dashboard")]
pub struct Config {
    /// Assessment JSON file to present.
    #[arg(long, env = "VITALSCOPE_ASSESSMENT")]
    pub assessment: Option<PathBuf>,

    /// Session clock tick period in milliseconds.
    #[arg(long, env = "VITALSCOPE_TICK_MS", default_value_t = DEFAULT_TICK_MS)]
    pub tick_ms: u64,

    /// Run without the session clock.
    #[arg(long, env = "VITALSCOPE_NO_TIMER")]
    pub no_timer: bool,
}

impl Config {
    /// Tick period, or `None` when the clock is disabled.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ZeroTickPeriod`] for a zero period.
    pub fn tick_period(&self) -> Result<Option<Duration>, ConfigError> {
        if self.no_timer {
            return Ok(None);
        }
        if self.tick_ms == 0 {
            return Err(ConfigError::ZeroTickPeriod);
        }
        Ok(Some(Duration::from_millis(self.tick_ms)))
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
