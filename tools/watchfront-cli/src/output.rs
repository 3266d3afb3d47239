//! Output formatting for the CLI.

use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use watchfront_commerce::cart::{ButtonState, Cart};
use watchfront_commerce::search::SearchMatch;
use watchfront_storefront::AddOutcome;

/// Output handler for CLI messages.
#[derive(Clone)]
pub struct Output {
    verbose: bool,
    json: bool,
}

impl Output {
    /// Create a new output handler.
    pub fn new(verbose: bool, json: bool) -> Self {
        Self { verbose, json }
    }

    /// Print an info message.
    pub fn info(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("{} {}", style("ℹ").blue(), msg);
    }

    /// Print a success message.
    pub fn success(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("{} {}", style("✓").green(), msg);
    }

    /// Print a warning message.
    pub fn warn(&self, msg: &str) {
        if self.json {
            return;
        }
        eprintln!("{} {}", style("⚠").yellow(), msg);
    }

    /// Print an error message.
    pub fn error(&self, msg: &str) {
        if self.json {
            eprintln!("{}", serde_json::json!({ "error": msg }));
            return;
        }
        eprintln!("{} {}", style("✗").red(), style(msg).red());
    }

    /// Print a debug message (only in verbose mode).
    pub fn debug(&self, msg: &str) {
        if !self.verbose || self.json {
            return;
        }
        eprintln!("{} {}", style("→").dim(), style(msg).dim());
    }

    /// Print a header/title.
    pub fn header(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("\n{}", style(msg).bold().underlined());
    }

    /// Print JSON output.
    pub fn json<T: serde::Serialize>(&self, value: &T) {
        if let Ok(json) = serde_json::to_string_pretty(value) {
            println!("{}", json);
        }
    }

    /// Print a key-value pair.
    pub fn kv(&self, key: &str, value: &str) {
        if self.json {
            return;
        }
        println!("  {}: {}", style(key).dim(), value);
    }

    /// Print a table row.
    pub fn table_row(&self, cols: &[&str], widths: &[usize]) {
        if self.json {
            return;
        }
        let formatted: Vec<String> = cols
            .iter()
            .zip(widths.iter())
            .map(|(col, width)| format!("{:width$}", col, width = width))
            .collect();
        println!("  {}", formatted.join("  "));
    }

    /// Create a spinner for indeterminate progress.
    pub fn spinner(&self, msg: &str) -> ProgressBar {
        if self.json {
            return ProgressBar::hidden();
        }

        let pb = ProgressBar::new_spinner();
        if let Ok(spinner_style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
            pb.set_style(spinner_style);
        }
        pb.set_message(msg.to_string());
        pb.enable_steady_tick(std::time::Duration::from_millis(100));
        pb
    }

    /// Check if JSON mode is enabled.
    pub fn is_json(&self) -> bool {
        self.json
    }

    /// Print the cart contents.
    pub fn cart(&self, cart: &Cart) {
        if self.json {
            self.json(cart);
            return;
        }
        if cart.is_empty() {
            self.info("Your cart is empty.");
            return;
        }
        self.header("Cart");
        self.table_row(&["PRODUCT", "QTY"], &[12, 5]);
        for line in cart.lines() {
            self.table_row(
                &[line.product_id.as_str(), &line.quantity.to_string()],
                &[12, 5],
            );
        }
        self.info(&format!(
            "{} item(s) across {} product(s)",
            cart.item_count(),
            cart.unique_item_count()
        ));
    }
}

/// Colored add-to-cart button label.
pub fn button_badge(state: ButtonState) -> String {
    match state {
        ButtonState::AddToCart => style(state.label()).green().to_string(),
        ButtonState::AddedToCart => style(state.label()).cyan().to_string(),
        ButtonState::OutOfStock => style(state.label()).dim().to_string(),
    }
}

/// A product name with the matched text highlighted.
pub fn highlight(m: &SearchMatch<'_>) -> String {
    format!(
        "{}{}{}",
        m.first_half(),
        style(m.highlighted()).bold().yellow(),
        m.second_half()
    )
}

/// One-line description of a click result.
pub fn describe_outcome(outcome: &AddOutcome) -> String {
    match outcome {
        AddOutcome::Added(line) => format!("added, quantity {}", line.quantity),
        AddOutcome::Updated { line, previous } => {
            format!("quantity {} -> {}", previous, line.quantity)
        }
        AddOutcome::Coalesced => "already pending, click ignored".to_string(),
        AddOutcome::Dropped => "session closed, response dropped".to_string(),
        AddOutcome::Blocked(state) => format!("button disabled ({})", state.label()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use watchfront_commerce::cart::CartLine;
    use watchfront_commerce::ProductId;

    #[test]
    fn test_describe_outcome() {
        let line = CartLine::new(ProductId::new("6543"), 2);
        assert_eq!(
            describe_outcome(&AddOutcome::Updated { line, previous: 1 }),
            "quantity 1 -> 2"
        );
        assert_eq!(
            describe_outcome(&AddOutcome::Blocked(ButtonState::OutOfStock)),
            "button disabled (Out of Stock)"
        );
    }
}
