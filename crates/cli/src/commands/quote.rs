//! Checkout quote command.
//!
//! Adds each `--item` once to a fresh cart, in the order given, and prints
//! the same summary the storefront checkout shows.
//!
//! ```bash
//! menu-cli quote crates/storefront/static/catalogue.json -i 1 -i 1 -i 4
//! ```

use menu_cart_core::{Cart, CheckoutSummary, ItemId, PricingEngine, SalesTax};
use rust_decimal::Decimal;

use super::{CommandError, load_catalogue};

/// Price the given items and print the summary.
///
/// # Errors
///
/// Returns `CommandError` if the catalogue fails to load, the divisor is not
/// positive, an item id is not in the catalogue, or an amount overflows.
pub async fn quote(
    source: &str,
    items: &[String],
    tax_divisor: Decimal,
) -> Result<(), CommandError> {
    let engine = PricingEngine::new(SalesTax::new(tax_divisor)?);
    let catalogue = load_catalogue(source).await?;

    let cart = build_cart(items);
    let summary = engine.compute_summary(&cart, &catalogue)?;

    #[allow(clippy::print_stdout)]
    {
        println!("{}", format_summary(&summary));
    }

    Ok(())
}

fn build_cart(items: &[String]) -> Cart {
    let mut cart = Cart::new();
    for item in items {
        cart.add_item(&ItemId::from(item.trim()));
    }
    cart
}

fn format_summary(summary: &CheckoutSummary) -> String {
    let mut lines: Vec<String> = summary
        .lines
        .iter()
        .map(|line| {
            let quantity = if line.quantity > 1 {
                format!(" x{}", line.quantity)
            } else {
                String::new()
            };
            format!("{:<32} {}{quantity}", line.name, line.price.display())
        })
        .collect();

    lines.push(format!("Subtotal: {}", summary.subtotal.display()));
    lines.push(format!("Tax: {}", summary.tax.display()));
    lines.push(format!("Total: {}", summary.total.display()));
    lines.join("\n")
}
