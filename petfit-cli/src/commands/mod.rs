//! CLI command implementations

pub mod config;
pub mod exercise;
pub mod leaderboard;
pub mod logs;
pub mod pet;
pub mod quests;
pub mod signup;
pub mod travel;

use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::Serialize;

use petfit_core::{EntryPoint, LogEvent, LoggingService, OperationResult, PetfitContext};

/// Get the logging service for CLI operations
///
/// Returns None if logging fails to initialize (shouldn't block operations)
pub fn get_logger() -> Option<LoggingService> {
    let app_dir = get_app_dir().ok()?;
    std::fs::create_dir_all(&app_dir).ok()?;
    LoggingService::new(&app_dir, EntryPoint::Cli, env!("CARGO_PKG_VERSION")).ok()
}

/// Log an event, ignoring any errors (logging should never break the app)
pub fn log_event(logger: &Option<LoggingService>, event: LogEvent) {
    if let Some(l) = logger {
        let _ = l.log(event);
    }
}

/// Record a successful command
pub fn log_command(logger: &Option<LoggingService>, command: &str) {
    if let Some(l) = logger {
        let _ = l.log_command(command);
    }
}

/// Record a failed command with its error chain
pub fn log_failure(logger: &Option<LoggingService>, command: &str, error: &anyhow::Error) {
    if let Some(l) = logger {
        let message = format!("{}: {:#}", command, error);
        let _ = l.log_error("command_failed", &message, Some(&format!("{:?}", error)));
    }
}

/// Get the app directory from environment or default
pub fn get_app_dir() -> Result<PathBuf> {
    if let Ok(dir) = std::env::var("PETFIT_DIR") {
        return Ok(PathBuf::from(dir));
    }
    dirs::home_dir()
        .map(|home| home.join(".petfit"))
        .context("Could not find home directory; set PETFIT_DIR")
}

/// Get or create the PetFit context
pub fn get_context() -> Result<PetfitContext> {
    let app_dir = get_app_dir()?;
    PetfitContext::new(&app_dir, EntryPoint::Cli, env!("CARGO_PKG_VERSION"))
        .context("Failed to initialize petfit context")
}

/// Print a core result wrapped in an `OperationResult`
///
/// Exits with code 1 when the operation failed.
pub fn print_json<T: Serialize>(result: petfit_core::domain::result::Result<T>) -> Result<()> {
    let failed = result.is_err();
    let output: OperationResult<T> = result.into();
    println!("{}", serde_json::to_string_pretty(&output)?);
    if failed {
        std::process::exit(1);
    }
    Ok(())
}
