//! Catalog listing command.

use anyhow::Result;
use serde_json::json;
use watchfront_commerce::catalog::PageSlice;

use super::ProductsArgs;
use crate::context::{Context, Session};
use crate::output::{button_badge, Output};

/// Run the products command.
pub async fn run(args: ProductsArgs, ctx: &Context) -> Result<()> {
    let (mut session, _) = ctx.session()?;
    ctx.mount(&mut session).await?;

    // Walk forward through gated "Next" presses, like the listing does.
    while session.page_index() < args.page {
        if !session.next_page() {
            let trailing_empty = session.page_index() > 1 && session.current_page().is_empty();
            ctx.output.warn(&overshoot_warning(
                args.page,
                session.page_index(),
                trailing_empty,
            ));
            break;
        }
    }

    render_page(&session, &ctx.output);
    session.close();
    Ok(())
}

/// Warning for a `--page` beyond where the gated walk stopped. A catalog
/// whose length is an exact multiple of the page size stops on an empty page.
fn overshoot_warning(requested: usize, reached: usize, trailing_empty: bool) -> String {
    if trailing_empty {
        format!(
            "Page {} does not exist, the catalog ends before page {}",
            requested, reached
        )
    } else {
        format!(
            "Page {} does not exist, showing the last page ({})",
            requested, reached
        )
    }
}

/// Print the current page with prices, stock and button labels.
pub fn render_page(session: &Session, output: &Output) {
    let products = match session.current_page() {
        PageSlice::Loaded(products) => products,
        PageSlice::Unloaded => {
            output.info("Loading...");
            return;
        }
    };

    if output.is_json() {
        let items: Vec<_> = products
            .iter()
            .map(|p| {
                json!({
                    "id": p.id,
                    "name": p.name,
                    "price": p.price.display(),
                    "stock": p.stock,
                    "button": session.button_state(&p.id).map(|s| s.label()),
                })
            })
            .collect();
        output.json(&json!({
            "page": session.page_index(),
            "page_count": session.page_count(),
            "can_go_prev": session.can_go_prev(),
            "can_go_next": session.can_go_next(),
            "products": items,
        }));
        return;
    }

    output.header(&format!(
        "Page {} of {}",
        session.page_index(),
        session.page_count().unwrap_or(1)
    ));

    if products.is_empty() {
        output.info("No products on this page.");
    } else {
        output.table_row(&["ID", "NAME", "PRICE", "STOCK", ""], &[8, 48, 10, 6, 14]);
        for product in products {
            let badge = session
                .button_state(&product.id)
                .map(button_badge)
                .unwrap_or_default();
            output.table_row(
                &[
                    product.id.as_str(),
                    &product.name,
                    &product.price.display(),
                    &product.stock.to_string(),
                    &badge,
                ],
                &[8, 48, 10, 6, 14],
            );
        }
    }

    let mut nav = Vec::new();
    if session.can_go_prev() {
        nav.push("prev");
    }
    if session.can_go_next() {
        nav.push("next");
    }
    if !nav.is_empty() {
        output.kv("navigation", &nav.join(" | "));
    }
}
