//! PetFit CLI - raise a fitness pet from your terminal

use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod output;

use commands::{config, exercise, leaderboard, logs, pet, quests, signup, travel};

/// PetFit - raise a fitness pet from your terminal
#[derive(Parser)]
#[command(name = "petfit", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sign up with a TownPass identity (or the default user)
    Signup {
        /// External TownPass user ID
        #[arg(long, env = "TOWNPASS_USER_ID")]
        townpass_id: Option<String>,
        /// Name for the new pet
        #[arg(long)]
        pet_name: Option<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the signed-up user
    Whoami {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Forget the signed-up user
    Signout {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show or change your pet
    Pet {
        #[command(subcommand)]
        command: Option<pet::PetCommands>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Log an exercise session
    Exercise {
        /// Exercise type (e.g. Running, Walking)
        exercise_type: String,
        /// Duration in seconds
        #[arg(long, short)]
        duration: i64,
        /// Volume (distance in km, reps, ...)
        #[arg(long, default_value = "0")]
        volume: f64,
        /// Steps taken
        #[arg(long)]
        steps: Option<i64>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Apply yesterday's exercise check
    DailyCheck {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Daily quests
    Quests {
        #[command(subcommand)]
        command: Option<quests::QuestCommands>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Travel and breakthroughs
    Travel {
        #[command(subcommand)]
        command: travel::TravelCommands,
    },

    /// Show the level leaderboard
    Leaderboard {
        /// Number of entries
        #[arg(short, long, default_value = "10")]
        limit: u32,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// View and manage logs
    Logs {
        #[command(subcommand)]
        command: logs::LogsCommands,
    },

    /// Show or change configuration
    Config {
        #[command(subcommand)]
        command: Option<config::ConfigCommands>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let command = cli.command.name();
    let logger = commands::get_logger();

    let result = run(cli);

    match result {
        Ok(()) => {
            commands::log_command(&logger, command);
            ExitCode::SUCCESS
        }
        Err(e) => {
            commands::log_failure(&logger, command, &e);
            eprintln!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

impl Commands {
    /// Command name as typed on the command line
    fn name(&self) -> &'static str {
        match self {
            Commands::Signup { .. } => "signup",
            Commands::Whoami { .. } => "whoami",
            Commands::Signout { .. } => "signout",
            Commands::Pet { .. } => "pet",
            Commands::Exercise { .. } => "exercise",
            Commands::DailyCheck { .. } => "daily-check",
            Commands::Quests { .. } => "quests",
            Commands::Travel { .. } => "travel",
            Commands::Leaderboard { .. } => "leaderboard",
            Commands::Logs { .. } => "logs",
            Commands::Config { .. } => "config",
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Signup { townpass_id, pet_name, json } => signup::run(townpass_id, pet_name, json),
        Commands::Whoami { json } => signup::run_whoami(json),
        Commands::Signout { json } => signup::run_signout(json),
        Commands::Pet { command, json } => pet::run(command, json),
        Commands::Exercise { exercise_type, duration, volume, steps, json } => {
            exercise::run(&exercise_type, duration, volume, steps, json)
        }
        Commands::DailyCheck { json } => exercise::run_daily_check(json),
        Commands::Quests { command, json } => quests::run(command, json),
        Commands::Travel { command } => travel::run(command),
        Commands::Leaderboard { limit, json } => leaderboard::run(limit, json),
        Commands::Logs { command } => logs::run(command),
        Commands::Config { command, json } => config::run(command, json),
    }
}
