//! Brand listing command.

use anyhow::{Context as _, Result};

use crate::context::Context;

/// Run the brands command.
pub async fn run(ctx: &Context) -> Result<()> {
    let (session, _) = ctx.session()?;

    let spinner = ctx.output.spinner("Loading brands...");
    let companies = session.companies().await;
    spinner.finish_and_clear();
    let companies = companies.context("Failed to load brands")?;

    if ctx.output.is_json() {
        ctx.output.json(&companies);
        return Ok(());
    }

    ctx.output.header("Brands");
    if companies.is_empty() {
        ctx.output.info("No brands listed.");
        return Ok(());
    }

    ctx.output
        .table_row(&["NAME", "COUNTRY", "URL"], &[24, 20, 40]);
    for company in &companies {
        ctx.output.table_row(
            &[&company.name, &company.country, &company.url],
            &[24, 20, 40],
        );
    }
    ctx.output.info("");
    ctx.output
        .info(&format!("Total: {} brand(s)", companies.len()));

    Ok(())
}
