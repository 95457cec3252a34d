//! Command-line interface.

use crate::config::Config;
use crate::view::{Button, Strategy};
use clap::{Parser, Subcommand};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Parser)]
#[command(name = "countercraft", version, about = "Five counters, five ways to manage state")]
pub struct Cli {
    /// Path to the config file (default: ~/.config/countercraft/config.toml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override the initial value of every counter
    #[arg(long, value_name = "N", allow_negative_numbers = true)]
    pub initial: Option<i64>,

    /// Override the step of the reducer cell
    #[arg(long, value_name = "N", allow_negative_numbers = true)]
    pub step: Option<i64>,

    /// Write logs to this file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Apply button presses without a terminal UI and print every counter.
    Press {
        /// Presses such as `local:+` or `store:-`
        #[arg(value_name = "SECTION:BUTTON")]
        presses: Vec<Press>,
    },
}

impl Cli {
    /// Apply command-line overrides on top of a loaded config.
    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(initial) = self.initial {
            config.counters.initial_value = initial;
        }
        if let Some(step) = self.step {
            config.counters.reducer_step = step;
        }
        if let Some(path) = &self.log_file {
            config.logging.file = Some(path.clone());
        }
    }
}

/// One `section:button` activation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Press {
    pub strategy: Strategy,
    pub button: Button,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PressParseError {
    #[error("expected SECTION:BUTTON, got '{0}'")]
    Malformed(String),
    #[error("unknown section '{0}' (expected local, reducer, store, atom or external)")]
    UnknownSection(String),
    #[error("unknown button '{0}' (expected + or -)")]
    UnknownButton(String),
}

impl FromStr for Press {
    type Err = PressParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (section, button) = s
            .split_once(':')
            .ok_or_else(|| PressParseError::Malformed(s.to_string()))?;
        let strategy = Strategy::from_key(section.trim())
            .ok_or_else(|| PressParseError::UnknownSection(section.to_string()))?;
        let button = Button::from_label(button.trim())
            .ok_or_else(|| PressParseError::UnknownButton(button.to_string()))?;
        Ok(Press { strategy, button })
    }
}

impl fmt::Display for Press {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.strategy.key(), self.button.label())
    }
}
