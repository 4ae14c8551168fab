use std::path::Path;

use colored::Colorize;
use rt_core::Table;

use super::Context;

/// Optional descriptive metadata attached to a loaded table.
pub struct Details {
    pub title: Option<String>,
    pub flavor: Option<String>,
    pub campaign: Option<String>,
}

pub fn run(
    ctx: &Context,
    csv: &Path,
    name: &str,
    roll: &str,
    details: Details,
) -> Result<(), String> {
    let records = rt_store::io::read_csv(csv).map_err(|e| format!("{e}"))?;
    let engine = ctx.engine();

    let mut table = Table::load(records, name, roll, &engine)
        .map_err(|e| format!("{}: {e}", csv.display()))?;
    if let Some(title) = details.title {
        table = table.with_title(title);
    }
    if let Some(flavor) = details.flavor {
        table = table.with_flavor_text(flavor);
    }
    if let Some(campaign) = details.campaign {
        table = table.with_campaign(campaign);
    }

    let store = ctx.open_store()?;
    store.save_table(&table).map_err(|e| format!("{e}"))?;

    println!(
        "  {} table '{}' ({} rows)",
        "Loaded".green().bold(),
        table.name(),
        table.rows.len()
    );
    Ok(())
}
