use comfy_table::{ContentArrangement, Table};

use super::Context;

pub fn run(ctx: &Context) -> Result<(), String> {
    let store = ctx.open_store()?;
    let summaries = store.list_tables().map_err(|e| format!("{e}"))?;

    if summaries.is_empty() {
        println!("  No tables found.");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Name", "Roll", "Rollable"]);

    // Summaries are "name,expression,rollable"; only the name may contain commas.
    for summary in &summaries {
        let mut fields = summary.rsplitn(3, ',');
        let rollable = fields.next().unwrap_or_default();
        let expression = fields.next().unwrap_or_default();
        let name = fields.next().unwrap_or_default();
        let expression = if expression.is_empty() { "—" } else { expression };
        table.add_row(vec![name, expression, rollable]);
    }

    println!("{table}");
    println!();
    println!("  {} tables", summaries.len());

    Ok(())
}
