use rt_core::TableQuery;

use super::{Context, grid};

pub fn run(ctx: &Context, expression: &str) -> Result<(), String> {
    let query = TableQuery::parse(expression).map_err(|e| format!("{e}"))?;

    let store = ctx.open_store()?;
    let table = store.get_table(&query.table).map_err(|e| format!("{e}"))?;

    let mut engine = ctx.engine();
    let rows = table
        .query(&query, &mut engine)
        .map_err(|e| format!("{e}"))?;

    println!("{}", grid(&rows));
    Ok(())
}
