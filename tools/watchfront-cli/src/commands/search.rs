//! Product search command.

use anyhow::Result;
use serde_json::json;

use super::SearchArgs;
use crate::context::{Context, Session};
use crate::output::{highlight, Output};

/// Run the search command.
pub async fn run(args: SearchArgs, ctx: &Context) -> Result<()> {
    let (mut session, navigator) = ctx.session()?;
    ctx.mount(&mut session).await?;

    session.type_query(args.query);
    render_suggestions(&session, &ctx.output);

    if args.open {
        match session.submit_query() {
            Some(_) => {
                if let Some(route) = navigator.current() {
                    ctx.output.success(&format!("Opening {}", route));
                }
            }
            None => ctx.output.warn("Nothing to open"),
        }
    }

    session.close();
    Ok(())
}

/// Print the numbered suggestion list for the session's query.
pub fn render_suggestions(session: &Session, output: &Output) {
    let suggestions = session.suggestions();

    if output.is_json() {
        let items: Vec<_> = suggestions
            .iter()
            .map(|m| {
                json!({
                    "id": m.product.id,
                    "name": m.product.name,
                    "match_start": m.match_start,
                    "match_end": m.match_end,
                })
            })
            .collect();
        output.json(&items);
        return;
    }

    let min_len = session.config().min_query_len;
    if session.query().chars().count() < min_len {
        output.info(&format!("Type at least {} characters to search.", min_len));
        return;
    }
    if suggestions.is_empty() {
        output.info(&format!("No products match \"{}\".", session.query()));
        return;
    }

    output.header(&format!("{} match(es)", suggestions.len()));
    for (i, m) in suggestions.iter().enumerate() {
        output.table_row(
            &[
                &format!("{}.", i + 1),
                &highlight(m),
                m.product.id.as_str(),
            ],
            &[4, 48, 8],
        );
    }
}
