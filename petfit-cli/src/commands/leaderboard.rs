//! Leaderboard command - top pets by level

use anyhow::Result;

use super::{get_context, print_json};
use crate::output;

pub fn run(limit: u32, json: bool) -> Result<()> {
    let ctx = get_context()?;

    if json {
        return print_json(ctx.pet_service.leaderboard(limit));
    }

    let entries = ctx.pet_service.leaderboard(limit)?;
    if entries.is_empty() {
        println!("No pets on the leaderboard yet.");
        return Ok(());
    }

    let mut table = output::create_table();
    table.set_header(vec!["#", "User", "Level"]);
    for (rank, entry) in entries.into_iter().enumerate() {
        table.add_row(vec![
            (rank + 1).to_string(),
            entry.username,
            entry.value.to_string(),
        ]);
    }
    println!("{}", table);

    Ok(())
}
