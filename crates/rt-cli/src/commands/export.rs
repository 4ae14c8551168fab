use std::io::Write;
use std::path::Path;

use colored::Colorize;
use rt_store::io;

use super::Context;

pub fn run(ctx: &Context, name: &str, format: &str, output: Option<&Path>) -> Result<(), String> {
    let store = ctx.open_store()?;
    let table = store.get_table(name).map_err(|e| format!("{e}"))?;

    match (format, output) {
        ("csv", Some(path)) => io::write_csv(path, &table.records()).map_err(|e| format!("{e}"))?,
        ("csv", None) => {
            io::write_csv_to(std::io::stdout().lock(), &table.records())
                .map_err(|e| format!("{e}"))?;
        }
        ("json", Some(path)) => io::write_table_json(path, &table).map_err(|e| format!("{e}"))?,
        ("json", None) => {
            let json = serde_json::to_string_pretty(&table).map_err(|e| format!("{e}"))?;
            writeln!(std::io::stdout().lock(), "{json}").map_err(|e| format!("{e}"))?;
        }
        (other, _) => return Err(format!("unknown format: {other} (expected csv or json)")),
    }

    if let Some(path) = output {
        eprintln!(
            "  {} table '{name}' to {}",
            "Exported".green().bold(),
            path.display()
        );
    }
    Ok(())
}
