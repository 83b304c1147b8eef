//! Quest commands - list and complete today's quests

use anyhow::Result;
use clap::Subcommand;
use colored::Colorize;

use super::{get_context, print_json};
use crate::output;

#[derive(Subcommand)]
pub enum QuestCommands {
    /// List today's quests (default)
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Mark a quest as completed
    Complete {
        /// Quest ID as shown by 'petfit quests list'
        id: i64,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

pub fn run(command: Option<QuestCommands>, json: bool) -> Result<()> {
    match command.unwrap_or(QuestCommands::List { json }) {
        QuestCommands::List { json } => run_list(json),
        QuestCommands::Complete { id, json } => run_complete(id, json),
    }
}

fn run_list(json: bool) -> Result<()> {
    let ctx = get_context()?;

    if json {
        return print_json(ctx.pet_service.quests());
    }

    let quests = ctx.pet_service.quests()?;
    if quests.is_empty() {
        println!("{}", "No quests today".dimmed());
        return Ok(());
    }

    let mut table = output::create_table();
    table.set_header(vec!["ID", "Quest", "Reward", "Done"]);
    for q in &quests {
        let reward = [
            ("STR", q.quest.reward_strength),
            ("STA", q.quest.reward_stamina),
            ("MOOD", q.quest.reward_mood),
        ]
        .iter()
        .filter(|(_, v)| *v != 0)
        .map(|(k, v)| format!("+{} {}", v, k))
        .collect::<Vec<_>>()
        .join(", ");

        let done = if q.is_completed {
            "✓".green().to_string()
        } else {
            String::new()
        };

        table.add_row(vec![q.id.to_string(), q.quest.title.clone(), reward, done]);
    }
    println!("{}", table);

    let remaining = quests.iter().filter(|q| !q.is_completed).count();
    println!("{} of {} remaining", remaining, quests.len());

    Ok(())
}

fn run_complete(id: i64, json: bool) -> Result<()> {
    let ctx = get_context()?;

    if json {
        return print_json(ctx.pet_service.complete_quest(id));
    }

    let completion = ctx.pet_service.complete_quest(id)?;
    if completion.success {
        println!("{} Quest {} completed", "✓".green(), id);
    } else {
        println!("{} Quest {} not completed", "✗".red(), id);
    }
    if let Some(message) = &completion.message {
        println!("  {}", message);
    }

    Ok(())
}
