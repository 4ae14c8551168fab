use super::Context;

pub fn run(ctx: &Context, expression: &str) -> Result<(), String> {
    let mut engine = ctx.engine();
    let rolled = engine
        .roll_expression(expression)
        .map_err(|e| format!("{e}"))?;
    println!("{rolled}");
    Ok(())
}
