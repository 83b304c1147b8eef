//! Config command - show and change API settings

use anyhow::Result;
use clap::Subcommand;
use colored::Colorize;

use petfit_core::config::{Config, API_BASE_URL_ENV};
use petfit_core::OperationResult;

use super::{get_app_dir, get_logger};
use crate::output;

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show the active configuration (default)
    Show {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Set the API base URL
    SetUrl {
        /// Base URL, e.g. https://pets.example.com
        url: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

pub fn run(command: Option<ConfigCommands>, json: bool) -> Result<()> {
    match command.unwrap_or(ConfigCommands::Show { json }) {
        ConfigCommands::Show { json } => run_show(json),
        ConfigCommands::SetUrl { url, json } => run_set_url(&url, json),
    }
}

fn config_json(config: &Config) -> serde_json::Value {
    serde_json::json!({
        "api_base_url": config.base_url(),
        "saved_api_base_url": config.api_base_url,
        "overridden_by_env": config.base_url_overridden(),
        "timeout_secs": config.timeout_secs,
    })
}

fn run_show(json: bool) -> Result<()> {
    let app_dir = get_app_dir()?;
    let config = Config::load(&app_dir)?;

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&OperationResult::ok(config_json(&config)))?
        );
        return Ok(());
    }

    let mut table = output::create_table();
    table.add_row(vec!["App directory".to_string(), app_dir.display().to_string()]);
    table.add_row(vec!["API base URL".to_string(), config.base_url().to_string()]);
    table.add_row(vec!["Timeout".to_string(), format!("{}s", config.timeout_secs)]);
    println!("{}", table);

    if config.base_url_overridden() {
        println!(
            "{}",
            format!(
                "{} is set; saved URL is {}",
                API_BASE_URL_ENV, config.api_base_url
            )
            .dimmed()
        );
    }

    Ok(())
}

fn run_set_url(url: &str, json: bool) -> Result<()> {
    let app_dir = get_app_dir()?;
    std::fs::create_dir_all(&app_dir)?;

    let mut config = Config::load(&app_dir)?;
    config.set_api_base_url(url)?;
    config.save(&app_dir)?;

    if let Some(logger) = get_logger() {
        let _ = logger.log_event("api_base_url_changed");
    }

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&OperationResult::ok(config_json(&config)))?
        );
        return Ok(());
    }

    println!("{} API base URL set to {}", "✓".green(), config.api_base_url);
    if config.base_url_overridden() {
        output::warning(&format!(
            "{} is set and takes precedence ({})",
            API_BASE_URL_ENV,
            config.base_url()
        ));
    }

    Ok(())
}
