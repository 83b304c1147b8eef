//! Travel commands - attractions, check-ins and breakthroughs

use anyhow::Result;
use clap::Subcommand;
use colored::Colorize;

use petfit_core::TravelCheckinRequest;

use super::pet::print_pet;
use super::{get_context, print_json};
use crate::output;

#[derive(Subcommand)]
pub enum TravelCommands {
    /// List attractions
    Attractions {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// List your check-ins
    Checkins {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Check in at a location
    Checkin {
        /// Travel quest identifier
        quest_id: String,
        #[arg(long, allow_hyphen_values = true)]
        lat: f64,
        #[arg(long, allow_hyphen_values = true)]
        lng: f64,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Pick a destination for the pending breakthrough
    Start {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Finish the breakthrough
    Breakthrough {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

pub fn run(command: TravelCommands) -> Result<()> {
    match command {
        TravelCommands::Attractions { json } => run_attractions(json),
        TravelCommands::Checkins { json } => run_checkins(json),
        TravelCommands::Checkin {
            quest_id,
            lat,
            lng,
            json,
        } => run_checkin(TravelCheckinRequest::new(quest_id, lat, lng), json),
        TravelCommands::Start { json } => run_start(json),
        TravelCommands::Breakthrough { json } => run_breakthrough(json),
    }
}

fn format_coords(lat: Option<f64>, lng: Option<f64>) -> String {
    match (lat, lng) {
        (Some(lat), Some(lng)) => format!("{:.5}, {:.5}", lat, lng),
        _ => "-".to_string(),
    }
}

fn run_attractions(json: bool) -> Result<()> {
    let ctx = get_context()?;

    if json {
        return print_json(ctx.pet_service.attractions());
    }

    let attractions = ctx.pet_service.attractions()?;
    if attractions.is_empty() {
        println!("{}", "No attractions available".dimmed());
        return Ok(());
    }

    let mut table = output::create_table();
    table.set_header(vec!["ID", "Name", "Location", "Description"]);
    for a in attractions {
        table.add_row(vec![
            a.id.to_string(),
            a.name,
            format_coords(a.latitude, a.longitude),
            a.description.unwrap_or_default(),
        ]);
    }
    println!("{}", table);

    Ok(())
}

fn run_checkins(json: bool) -> Result<()> {
    let ctx = get_context()?;

    if json {
        return print_json(ctx.pet_service.checkins());
    }

    let checkins = ctx.pet_service.checkins()?;
    if checkins.is_empty() {
        println!("{}", "No check-ins yet".dimmed());
        return Ok(());
    }

    let mut table = output::create_table();
    table.set_header(vec!["Quest", "Location", "Completed"]);
    for c in &checkins {
        table.add_row(vec![
            c.quest_id.clone(),
            format_coords(Some(c.lat), Some(c.lng)),
            output::format_time(c.completed_at.as_ref()),
        ]);
    }
    println!("{}", table);

    Ok(())
}

fn run_checkin(checkin: TravelCheckinRequest, json: bool) -> Result<()> {
    let ctx = get_context()?;

    if json {
        return print_json(ctx.pet_service.check_in(&checkin));
    }

    let outcome = ctx.pet_service.check_in(&checkin)?;
    println!("{} Checked in at {}", "✓".green(), checkin.quest_id);
    if let Some(message) = &outcome.message {
        output::info(message);
    }

    Ok(())
}

fn run_start(json: bool) -> Result<()> {
    let ctx = get_context()?;

    if json {
        return print_json(ctx.pet_service.start_travel());
    }

    let attraction = ctx.pet_service.start_travel()?;
    println!("Your pet is heading to {}", attraction.name.bold());
    if let Some(description) = &attraction.description {
        println!("  {}", description.dimmed());
    }
    println!("  {}", format_coords(attraction.latitude, attraction.longitude));

    Ok(())
}

fn run_breakthrough(json: bool) -> Result<()> {
    let ctx = get_context()?;

    if json {
        return print_json(ctx.pet_service.complete_breakthrough());
    }

    let outcome = ctx.pet_service.complete_breakthrough()?;
    if outcome.success {
        output::success("Breakthrough complete!");
    } else {
        output::warning("Breakthrough not completed");
    }
    if let Some(message) = &outcome.message {
        println!("{}", message);
    }
    if let Some(pet) = &outcome.pet {
        println!();
        print_pet(pet);
    }

    Ok(())
}
