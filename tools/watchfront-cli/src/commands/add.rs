//! Add-to-cart command.

use anyhow::Result;
use serde_json::json;
use watchfront_commerce::ProductId;

use super::AddArgs;
use crate::context::Context;
use crate::output::describe_outcome;

/// Run the add command.
pub async fn run(args: AddArgs, ctx: &Context) -> Result<()> {
    let (mut session, _) = ctx.session()?;
    ctx.mount(&mut session).await?;

    let ids: Vec<ProductId> = args.ids.into_iter().map(ProductId::new).collect();

    let spinner = ctx.output.spinner(&format!("Adding {} product(s)...", ids.len()));
    let results = session.press_all(&ids).await;
    spinner.finish_and_clear();

    let mut failures = 0;
    let mut report = Vec::with_capacity(ids.len());
    for (id, result) in ids.iter().zip(results) {
        match result {
            Ok(outcome) => {
                ctx.output.success(&format!("{}: {}", id, describe_outcome(&outcome)));
                report.push(json!({ "id": id, "outcome": describe_outcome(&outcome) }));
            }
            Err(e) => {
                failures += 1;
                ctx.output.warn(&format!("{}: {}", id, e));
                report.push(json!({ "id": id, "error": e.to_string() }));
            }
        }
    }

    let cart = session.cart();
    if ctx.output.is_json() {
        ctx.output.json(&json!({ "results": report, "cart": cart }));
    } else {
        ctx.output.cart(&cart);
        if failures > 0 {
            ctx.output.warn(&format!(
                "{} click(s) failed; the cart was left unchanged for them",
                failures
            ));
        }
    }

    session.close();
    Ok(())
}
