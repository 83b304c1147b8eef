//! Exercise commands - log a workout and run the daily check

use anyhow::Result;
use colored::Colorize;

use petfit_core::ExerciseLog;

use super::pet::print_pet;
use super::{get_context, print_json};
use crate::output;

pub fn run(
    exercise_type: &str,
    duration_seconds: i64,
    volume: f64,
    steps: Option<i64>,
    json: bool,
) -> Result<()> {
    let ctx = get_context()?;

    let mut log = ExerciseLog::new(exercise_type, duration_seconds, volume);
    if let Some(steps) = steps {
        log = log.with_steps(steps);
    }

    if json {
        return print_json(ctx.pet_service.log_exercise(&log));
    }

    let outcome = ctx.pet_service.log_exercise(&log)?;
    println!(
        "{} Logged {} of {}",
        "✓".green(),
        output::format_duration(duration_seconds),
        exercise_type
    );
    if let Some(message) = &outcome.message {
        output::info(message);
    }
    if outcome.breakthrough_required {
        output::warning("Strength is capped until the breakthrough is done.");
    }
    println!();
    print_pet(&outcome.pet);

    Ok(())
}

pub fn run_daily_check(json: bool) -> Result<()> {
    let ctx = get_context()?;

    if json {
        return print_json(ctx.pet_service.daily_check());
    }

    let outcome = ctx.pet_service.daily_check()?;
    if outcome.already_checked {
        println!("{}", "Already checked today".dimmed());
    } else {
        output::success("Daily check done");
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
