//! Logs command - view and manage the event log

use anyhow::Result;
use clap::Subcommand;
use colored::Colorize;
use dialoguer::Confirm;

use petfit_core::{EntryPoint, LogEntry, LoggingService};

use super::get_app_dir;
use crate::output;

#[derive(Subcommand)]
pub enum LogsCommands {
    /// Show recent log entries
    List {
        /// Number of entries to show
        #[arg(short, long, default_value = "50")]
        limit: usize,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show recent errors with details
    Errors {
        /// Number of entries to show
        #[arg(short, long, default_value = "10")]
        limit: usize,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Clear old log entries
    Clear {
        /// Delete logs older than N days
        #[arg(long, default_value = "30")]
        older_than_days: u64,
        /// Skip confirmation prompt
        #[arg(long, short = 'f')]
        force: bool,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

fn get_logging_service() -> Result<LoggingService> {
    let app_dir = get_app_dir()?;
    std::fs::create_dir_all(&app_dir)?;
    LoggingService::new(&app_dir, EntryPoint::Cli, env!("CARGO_PKG_VERSION"))
}

fn format_timestamp(timestamp_ms: i64) -> String {
    use chrono::{TimeZone, Utc};
    Utc.timestamp_millis_opt(timestamp_ms)
        .single()
        .map(|dt| dt.format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_else(|| timestamp_ms.to_string())
}

fn now_ms() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

const DAY_MS: i64 = 24 * 60 * 60 * 1000;

/// Unix ms of `now_ms` minus `days`, clamped instead of overflowing
fn cutoff_ms(now_ms: i64, days: u64) -> i64 {
    let span = i64::try_from(days)
        .unwrap_or(i64::MAX)
        .saturating_mul(DAY_MS);
    now_ms.saturating_sub(span)
}

pub fn run(command: LogsCommands) -> Result<()> {
    match command {
        LogsCommands::List { limit, json } => {
            let service = get_logging_service()?;
            let entries = service.get_recent(limit)?;

            if json {
                println!("{}", serde_json::to_string_pretty(&entries)?);
                return Ok(());
            }

            if entries.is_empty() {
                println!("No log entries found.");
                return Ok(());
            }

            print_entries(&entries);
            let total = service.count()?;
            println!(
                "{}",
                format!(
                    "Showing {} of {} entries. Log file: {}",
                    entries.len(),
                    total,
                    service.log_path().display()
                )
                .dimmed()
            );
        }
        LogsCommands::Errors { limit, json } => {
            let service = get_logging_service()?;
            let errors = service.get_errors(limit)?;

            if json {
                println!("{}", serde_json::to_string_pretty(&errors)?);
                return Ok(());
            }

            if errors.is_empty() {
                output::success("No errors logged.");
                return Ok(());
            }

            for err in &errors {
                println!(
                    "{} [{}]{}: {}",
                    format_timestamp(err.timestamp).dimmed(),
                    err.event.red(),
                    err.user_id
                        .as_deref()
                        .map(|u| format!(" user={}", u))
                        .unwrap_or_default(),
                    err.error_message.as_deref().unwrap_or("Unknown error")
                );
                if let Some(details) = &err.error_details {
                    println!("    {}", details.dimmed());
                }
            }
        }
        LogsCommands::Clear {
            older_than_days,
            force,
            json,
        } => {
            let service = get_logging_service()?;
            let cutoff = cutoff_ms(now_ms(), older_than_days);

            if !force && !json {
                if !Confirm::new()
                    .with_prompt(format!(
                        "Delete logs older than {} days?",
                        older_than_days
                    ))
                    .default(false)
                    .interact()?
                {
                    println!("Cancelled.");
                    return Ok(());
                }
            }

            let deleted = service.delete_before(cutoff)?;

            if json {
                println!("{}", serde_json::json!({"deleted": deleted}));
            } else {
                println!("Deleted {} log entries", deleted);
            }
        }
    }

    Ok(())
}

fn print_entries(entries: &[LogEntry]) {
    let mut table = output::create_table();
    table.set_header(vec!["Time", "Entry", "Event", "Context", "Error"]);

    for entry in entries {
        let context = [entry.command.as_deref(), entry.user_id.as_deref()]
            .iter()
            .filter_map(|&s| s)
            .collect::<Vec<_>>()
            .join(", ");

        let error_indicator = if entry.error_message.is_some() {
            "!".red().to_string()
        } else {
            String::new()
        };

        table.add_row(vec![
            format_timestamp(entry.timestamp),
            entry.entry_point.clone(),
            entry.event.clone(),
            context,
            error_indicator,
        ]);
    }

    println!("{}", table);
}
