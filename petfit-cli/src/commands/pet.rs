//! Pet commands - show, rename and update the pet

use anyhow::Result;
use clap::Subcommand;
use colored::Colorize;

use petfit_core::domain::pet::{MAX_MOOD, MAX_STAMINA, MAX_STRENGTH};
use petfit_core::{Pet, PetStage, PetUpdate};

use super::{get_context, print_json};
use crate::output;

#[derive(Subcommand)]
pub enum PetCommands {
    /// Show the pet (default)
    Show {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Rename the pet
    Rename {
        /// New name
        name: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Set pet attributes directly
    Update {
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        strength: Option<i64>,
        #[arg(long)]
        stamina: Option<i64>,
        #[arg(long)]
        mood: Option<i64>,
        #[arg(long)]
        level: Option<i64>,
        /// Stage code (0 egg .. 4 buff chicken)
        #[arg(long, value_parser = parse_stage)]
        stage: Option<PetStage>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

fn parse_stage(s: &str) -> std::result::Result<PetStage, String> {
    let code: u8 = s.parse().map_err(|_| format!("invalid stage: {}", s))?;
    PetStage::try_from(code)
}

pub fn run(command: Option<PetCommands>, json: bool) -> Result<()> {
    match command.unwrap_or(PetCommands::Show { json }) {
        PetCommands::Show { json } => run_show(json),
        PetCommands::Rename { name, json } => run_rename(&name, json),
        PetCommands::Update {
            name,
            strength,
            stamina,
            mood,
            level,
            stage,
            json,
        } => {
            let update = PetUpdate {
                name,
                strength,
                stamina,
                mood,
                level,
                stage,
                ..Default::default()
            };
            run_update(&update, json)
        }
    }
}

fn run_show(json: bool) -> Result<()> {
    let ctx = get_context()?;

    if json {
        return print_json(ctx.pet_service.pet());
    }

    let pet = ctx.pet_service.pet()?;
    print_pet(&pet);
    Ok(())
}

fn run_rename(name: &str, json: bool) -> Result<()> {
    let ctx = get_context()?;

    if json {
        return print_json(ctx.pet_service.rename(name));
    }

    let pet = ctx.pet_service.rename(name)?;
    println!("{} Your pet is now called {}", "✓".green(), pet.display_name().bold());
    Ok(())
}

fn run_update(update: &PetUpdate, json: bool) -> Result<()> {
    if update.is_empty() {
        anyhow::bail!("Nothing to update. Pass at least one of --name, --strength, --stamina, --mood, --level, --stage.");
    }

    let ctx = get_context()?;

    if json {
        return print_json(ctx.pet_service.update(update));
    }

    let pet = ctx.pet_service.update(update)?;
    output::success("Pet updated");
    print_pet(&pet);
    Ok(())
}

/// Print a pet as a stat table
pub fn print_pet(pet: &Pet) {
    println!("{} the {}", pet.display_name().bold(), pet.stage.label());
    println!();

    let mut table = output::create_table();
    table.add_row(vec!["Level".to_string(), pet.level.to_string()]);
    table.add_row(vec![
        "Strength".to_string(),
        format!("{}/{}", pet.strength, MAX_STRENGTH),
    ]);
    table.add_row(vec![
        "Stamina".to_string(),
        format!("{}/{}", pet.stamina, MAX_STAMINA),
    ]);
    table.add_row(vec!["Mood".to_string(), format!("{}/{}", pet.mood, MAX_MOOD)]);
    table.add_row(vec![
        "Exercise today".to_string(),
        output::format_duration(pet.daily_exercise_seconds),
    ]);
    table.add_row(vec!["Steps today".to_string(), pet.daily_steps.to_string()]);
    println!("{}", table);

    if pet.needs_breakthrough() {
        println!();
        output::warning("Breakthrough needed! Run 'petfit travel start' to pick a destination.");
    }
}
