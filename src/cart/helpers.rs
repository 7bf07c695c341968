//! Shopping Cart Formatting Helpers
//!
//! Small, pure functions used across the views: USD price formatting and
//! one-line order summaries. Keeping them separated from the data models
//! makes them easy to test in isolation.

use super::models::LineItem;

/// Formats an amount as US dollars with thousands separators.
///
/// Example output: `"$1,234.50"`.
pub fn format_usd(amount: f64) -> String {
    let cents = (amount * 100.0).round() as i64;
    let sign = if cents < 0 { "-" } else { "" };
    let dollars = (cents / 100).abs();
    let rem = (cents % 100).abs();

    let mut digits = dollars.to_string();
    let mut grouped = String::new();
    while digits.len() > 3 {
        let split = digits.len() - 3;
        grouped = format!(",{}{}", &digits[split..], grouped);
        digits.truncate(split);
    }

    format!("{sign}${digits}{grouped}.{rem:02}")
}

/// Produces a human-readable one-line summary for a list of line items.
///
/// Example output: `"2x Backpack, 1x Gold Ring"`.
pub fn format_item_summary(items: &[LineItem]) -> String {
    items
        .iter()
        .map(|i| format!("{}x {}", i.quantity, i.product.title))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::models::Product;

    fn line(title: &str, quantity: u32) -> LineItem {
        LineItem {
            product: Product {
                id: 1,
                title: title.into(),
                price: 1.0,
                description: String::new(),
                category: "misc".into(),
                image: String::new(),
                rating: None,
            },
            quantity,
        }
    }

    #[test]
    fn formats_usd_amounts() {
        assert_eq!(format_usd(0.0), "$0.00");
        assert_eq!(format_usd(9.5), "$9.50");
        assert_eq!(format_usd(109.95), "$109.95");
        assert_eq!(format_usd(1234.5), "$1,234.50");
        assert_eq!(format_usd(1_000_000.0), "$1,000,000.00");
    }

    #[test]
    fn summarizes_line_items() {
        let items = vec![line("Backpack", 2), line("Gold Ring", 1)];
        assert_eq!(format_item_summary(&items), "2x Backpack, 1x Gold Ring");
    }
}
