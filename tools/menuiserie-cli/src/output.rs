//! Output formatting for the CLI.

use console::style;
use menuiserie_core::money::{Locale, Money};
use menuiserie_core::pricing::PriceBreakdown;

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

    /// Print a list item.
    pub fn list_item(&self, item: &str) {
        if self.json {
            return;
        }
        println!("  {} {}", style("•").dim(), item);
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

    /// Print a price breakdown, skipping zero components.
    pub fn breakdown(&self, breakdown: &PriceBreakdown, locale: Locale) {
        if self.json {
            return;
        }
        for (label, amount) in breakdown.components() {
            if label == "Base" || !amount.is_zero() {
                println!(
                    "  {:12} {:>14}",
                    style(label).dim(),
                    signed_amount(label == "Base", amount, locale)
                );
            }
        }
        println!(
            "  {:12} {:>14}",
            style("Total").bold(),
            style(breakdown.display_total(locale)).bold().green()
        );
    }

    /// Check if JSON mode is enabled.
    pub fn is_json(&self) -> bool {
        self.json
    }
}

/// Surcharges carry an explicit sign.
fn signed_amount(is_base: bool, amount: Money, locale: Locale) -> String {
    if is_base || amount.is_negative() {
        amount.display_in(locale)
    } else {
        format!("+{}", amount.display_in(locale))
    }
}

/// Multiplier in percent as a factor, e.g. `×1.35`.
pub fn format_multiplier(pct: u32) -> String {
    format!("×{}.{:02}", pct / 100, pct % 100)
}
