//! Interactive shopping session.

use anyhow::Result;
use dialoguer::Input;
use watchfront_commerce::ProductId;

use super::products::render_page;
use super::search::render_suggestions;
use crate::context::{Context, Session};
use crate::output::describe_outcome;

/// A parsed REPL line.
#[derive(Debug, PartialEq, Eq)]
enum ShopCommand {
    Next,
    Prev,
    Page,
    Search(String),
    Clear,
    Go,
    Pick(usize),
    Open(String),
    Add(String),
    Cart,
    Help,
    Quit,
    Unknown(String),
}

impl ShopCommand {
    fn parse(line: &str) -> Option<Self> {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        let command = match (word.to_lowercase().as_str(), rest) {
            ("next" | "n", _) => ShopCommand::Next,
            ("prev" | "p", _) => ShopCommand::Prev,
            ("page" | "ls", _) => ShopCommand::Page,
            ("search" | "s", q) if !q.is_empty() => ShopCommand::Search(q.to_string()),
            ("clear", _) => ShopCommand::Clear,
            ("go", _) => ShopCommand::Go,
            ("pick", n) => match n.parse::<usize>() {
                Ok(n) if n >= 1 => ShopCommand::Pick(n),
                _ => ShopCommand::Unknown(line.to_string()),
            },
            ("open", id) if !id.is_empty() => ShopCommand::Open(id.to_string()),
            ("add", id) if !id.is_empty() => ShopCommand::Add(id.to_string()),
            ("cart", _) => ShopCommand::Cart,
            ("help" | "?", _) => ShopCommand::Help,
            ("quit" | "exit" | "q", _) => ShopCommand::Quit,
            _ => ShopCommand::Unknown(line.to_string()),
        };
        Some(command)
    }
}

const HELP: &[(&str, &str)] = &[
    ("next, prev", "Move between catalog pages"),
    ("page", "Show the current page again"),
    ("search <text>", "Type into the search box"),
    ("pick <n>", "Open the n-th suggestion"),
    ("go", "Open the first suggestion"),
    ("clear", "Clear the search box"),
    ("open <id>", "Open a product's detail view"),
    ("add <id>", "Add a product to the cart"),
    ("cart", "Show the cart"),
    ("quit", "Leave the shop"),
];

/// Run the shop command.
pub async fn run(ctx: &Context) -> Result<()> {
    let (mut session, navigator) = ctx.session()?;
    ctx.mount(&mut session).await?;

    render_page(&session, &ctx.output);
    ctx.output.info("Type `help` for commands.");

    loop {
        let line: String = Input::new()
            .with_prompt("watchfront")
            .allow_empty(true)
            .interact_text()?;

        let Some(command) = ShopCommand::parse(&line) else {
            continue;
        };

        match command {
            ShopCommand::Next => {
                if session.next_page() {
                    render_page(&session, &ctx.output);
                } else {
                    ctx.output.warn("Already on the last page");
                }
            }
            ShopCommand::Prev => {
                if session.prev_page() {
                    render_page(&session, &ctx.output);
                } else {
                    ctx.output.warn("Already on the first page");
                }
            }
            ShopCommand::Page => render_page(&session, &ctx.output),
            ShopCommand::Search(query) => {
                session.type_query(query);
                render_suggestions(&session, &ctx.output);
            }
            ShopCommand::Clear => {
                session.clear_query();
                ctx.output.info("Search cleared");
            }
            ShopCommand::Go => match session.submit_query() {
                Some(id) => show_product(&session, &id, ctx),
                None => ctx.output.warn("No suggestion to open"),
            },
            ShopCommand::Pick(n) => match session.select_suggestion(n - 1) {
                Some(id) => show_product(&session, &id, ctx),
                None => ctx.output.warn(&format!("No suggestion #{}", n)),
            },
            ShopCommand::Open(id) => {
                let id = ProductId::new(id);
                session.open_product(&id);
                show_product(&session, &id, ctx);
            }
            ShopCommand::Add(id) => {
                let id = ProductId::new(id);
                match session.press_add_to_cart(&id).await {
                    Ok(outcome) => ctx
                        .output
                        .success(&format!("{}: {}", id, describe_outcome(&outcome))),
                    Err(e) => ctx.output.warn(&e.to_string()),
                }
            }
            ShopCommand::Cart => ctx.output.cart(&session.cart()),
            ShopCommand::Help => {
                ctx.output.header("Commands");
                for (usage, about) in HELP {
                    ctx.output.kv(usage, about);
                }
            }
            ShopCommand::Quit => break,
            ShopCommand::Unknown(line) => {
                ctx.output
                    .warn(&format!("Unknown command: {} (try `help`)", line));
            }
        }
    }

    session.close();
    if let Some(route) = navigator.current() {
        ctx.output.debug(&format!("Last view: {}", route));
    }
    ctx.output.cart(&session.cart());
    Ok(())
}

/// Print a product's detail view.
fn show_product(session: &Session, id: &ProductId, ctx: &Context) {
    let Some(product) = session.product(id) else {
        ctx.output.warn(&format!("No product with id {}", id));
        return;
    };

    ctx.output.header(&product.name);
    ctx.output.kv("id", product.id.as_str());
    ctx.output.kv("price", &product.price.display());
    ctx.output.kv("stock", &product.stock.to_string());
    if let Some(category) = &product.category {
        ctx.output.kv("category", category);
    }
    if let Some(location) = &product.body_location {
        ctx.output.kv("worn on", location);
    }
    if let Some(state) = session.button_state(id) {
        ctx.output.kv("button", state.label());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_commands() {
        assert_eq!(ShopCommand::parse(""), None);
        assert_eq!(ShopCommand::parse("  next "), Some(ShopCommand::Next));
        assert_eq!(
            ShopCommand::parse("search Rolex Sub"),
            Some(ShopCommand::Search("Rolex Sub".to_string()))
        );
        assert_eq!(ShopCommand::parse("pick 2"), Some(ShopCommand::Pick(2)));
        assert_eq!(
            ShopCommand::parse("add 6543"),
            Some(ShopCommand::Add("6543".to_string()))
        );
        assert_eq!(ShopCommand::parse("QUIT"), Some(ShopCommand::Quit));
    }

    #[test]
    fn test_parse_rejects_bad_arguments() {
        assert_eq!(
            ShopCommand::parse("pick 0"),
            Some(ShopCommand::Unknown("pick 0".to_string()))
        );
        assert_eq!(
            ShopCommand::parse("search"),
            Some(ShopCommand::Unknown("search".to_string()))
        );
        assert_eq!(
            ShopCommand::parse("dance"),
            Some(ShopCommand::Unknown("dance".to_string()))
        );
    }
}
