use colored::Colorize;

use super::{Context, grid};

pub fn run(ctx: &Context, name: &str) -> Result<(), String> {
    let store = ctx.open_store()?;
    let table = store.get_table(name).map_err(|e| format!("{e}"))?;
    let meta = &table.meta;

    let title = if meta.title.is_empty() {
        &meta.name
    } else {
        &meta.title
    };
    println!("  {}", title.bold());
    if !meta.flavor_text.is_empty() {
        println!("  {}", meta.flavor_text.dimmed());
    }
    if !meta.campaign.is_empty() {
        println!("  {} {}", "Campaign:".dimmed(), meta.campaign);
    }
    if meta.rollable_table {
        println!("  {} {}", "Roll:".dimmed(), meta.roll_expression);
    }
    println!();
    println!("{}", grid(&table.records()));

    Ok(())
}
