//! Signup commands - establish, show and forget the current user

use std::collections::HashMap;

use anyhow::Result;
use colored::Colorize;
use dialoguer::Input;

use petfit_core::ports::Session;
use petfit_core::{LogEvent, OnboardingOutcome, OperationResult};

use super::{get_context, get_logger, log_event};

pub fn run(townpass_id: Option<String>, pet_name: Option<String>, json: bool) -> Result<()> {
    let ctx = get_context()?;
    let external_id = townpass_id.filter(|id| !id.is_empty());

    // The pet name only matters when a user is actually created
    let pet_name = match (pet_name, &external_id) {
        (Some(name), _) => name,
        (None, Some(_)) if !json => Input::new()
            .with_prompt("Name your pet")
            .allow_empty(true)
            .interact_text()?,
        (None, _) => String::new(),
    };

    let outcome = ctx.sign_up(external_id.as_deref(), &pet_name);

    if json {
        let failed = matches!(outcome, OnboardingOutcome::Failed { .. });
        let output = match &outcome {
            OnboardingOutcome::Failed { error } => OperationResult::fail(error.clone()),
            _ => OperationResult::ok(&outcome),
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        if failed {
            std::process::exit(1);
        }
        return Ok(());
    }

    match outcome {
        OnboardingOutcome::Created { user_id } => {
            println!("{} Signed up as {}", "✓".green(), user_id.bold());
            if !pet_name.trim().is_empty() {
                println!("  Your egg {} is waiting. Try 'petfit pet'.", pet_name.trim());
            }
        }
        OnboardingOutcome::DefaultIdentity { user_id } => {
            println!(
                "{} No TownPass identity given, using default user {}",
                "!".yellow(),
                user_id.bold()
            );
        }
        OnboardingOutcome::Failed { error } => {
            eprintln!("{} Signup failed: {}", "✗".red(), error);
            eprintln!("{}", "See 'petfit logs errors' for details.".dimmed());
            std::process::exit(1);
        }
    }

    Ok(())
}

pub fn run_whoami(json: bool) -> Result<()> {
    let ctx = get_context()?;
    let user_id = ctx.session.user_id()?;
    let route = ctx.session.route()?;

    if json {
        let context = HashMap::from([
            ("route".to_string(), serde_json::json!(route)),
            ("api_base_url".to_string(), serde_json::json!(ctx.config.base_url())),
        ]);
        let output = OperationResult::ok_with_context(user_id, context);
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    match user_id.filter(|id| !id.is_empty()) {
        Some(id) => {
            println!("User: {}", id.bold());
            if let Some(route) = route {
                println!("Route: {}", route);
            }
        }
        None => println!("{}", "Not signed up. Run 'petfit signup'.".yellow()),
    }
    println!("API: {}", ctx.config.base_url().dimmed());

    Ok(())
}

pub fn run_signout(json: bool) -> Result<()> {
    let ctx = get_context()?;
    let previous = ctx.session.user_id()?;
    ctx.session.clear()?;

    let logger = get_logger();
    let mut event = LogEvent::new("signed_out").with_command("signout");
    if let Some(id) = &previous {
        event = event.with_user(id.clone());
    }
    log_event(&logger, event);

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&OperationResult::ok(serde_json::json!({
                "signed_out": previous,
            })))?
        );
        return Ok(());
    }

    match previous {
        Some(id) => println!("{} Signed out {}", "✓".green(), id),
        None => println!("{}", "Nobody was signed in".dimmed()),
    }
    Ok(())
}
