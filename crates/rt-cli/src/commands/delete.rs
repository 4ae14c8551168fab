use colored::Colorize;

use super::Context;

pub fn run(ctx: &Context, name: &str) -> Result<(), String> {
    let store = ctx.open_store()?;
    store.delete_table(name).map_err(|e| format!("{e}"))?;
    println!("  {} table '{name}'", "Deleted".red().bold());
    Ok(())
}
