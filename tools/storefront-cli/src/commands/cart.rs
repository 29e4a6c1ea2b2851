//! Cart script replay.

use std::path::Path;

use anyhow::{Context as _, Result};
use storefront_cart::prelude::*;

use super::{CartArgs, CartSubcommand};
use crate::context::Context;

/// Run the cart command.
pub fn run(args: CartArgs, ctx: &Context) -> Result<()> {
    match args.command {
        CartSubcommand::Replay { script } => replay_script(&script, ctx),
    }
}

fn replay_script(script: &str, ctx: &Context) -> Result<()> {
    let commands = load_script(&ctx.resolve_path(script))?;
    ctx.output
        .debug(&format!("Loaded {} command(s) from {}", commands.len(), script));

    let provider = CartProvider::new(ctx.config.currency()?);
    let handle = provider.handle();
    let unchanged = apply_script(&handle, commands)?;
    if unchanged > 0 {
        ctx.output
            .debug(&format!("{} command(s) left the cart unchanged", unchanged));
    }

    let view = CartDrawer::new(handle).view()?;
    print_view(&view, ctx);
    Ok(())
}

/// Read a JSON array of cart commands.
pub fn load_script(path: &Path) -> Result<Vec<CartCommand>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read script: {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse script: {}", path.display()))
}

/// Apply commands in order through a session handle.
///
/// A line item in another currency stops the replay. Returns how many
/// commands changed nothing.
pub fn apply_script(handle: &CartHandle, commands: Vec<CartCommand>) -> Result<usize> {
    let mut unchanged = 0;
    for (index, command) in commands.into_iter().enumerate() {
        let action = command.as_str();
        let change = handle
            .dispatch(command)
            .with_context(|| format!("Command #{} ({}) failed", index + 1, action))?;
        if change.is_unchanged() {
            unchanged += 1;
        }
        tracing::debug!(index, action, change = ?change, "script command applied");
    }
    Ok(unchanged)
}

fn print_view(view: &DrawerView, ctx: &Context) {
    if ctx.output.is_json() {
        ctx.output.json(view);
        return;
    }

    ctx.output.header(&format!("Your Cart ({})", view.badge));

    if view.is_empty() {
        ctx.output.info("Your cart is empty");
        return;
    }

    let widths = [12, 28, 10, 5, 12];
    ctx.output
        .table_row(&["ID", "PRODUCT", "PRICE", "QTY", "LINE TOTAL"], &widths);
    for row in &view.rows {
        let price = row.unit_price.display();
        let quantity = row.quantity.to_string();
        let line_total = row.line_total.display();
        ctx.output.table_row(
            &[row.id.as_str(), &row.title, &price, &quantity, &line_total],
            &widths,
        );
    }

    ctx.output.block("");
    ctx.output.kv("Items", &view.total_items.to_string());
    ctx.output.kv("Subtotal", &view.subtotal.display());
    ctx.output.kv("Shipping", &view.shipping_label());
    ctx.output.kv("Total", &view.total.display());
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const SCRIPT: &str = r#"[
        {"action": "add_item", "item": {"id": "a", "title": "Rose Quartz", "price": {"amount_minor": 49900, "currency": "INR"}, "image": "/rq.jpg", "quantity": 1}},
        {"action": "increase_qty", "id": "a"},
        {"action": "decrease_qty", "id": "missing"},
        {"action": "remove_item", "id": "missing"}
    ]"#;

    #[test]
    fn test_apply_script() {
        let commands: Vec<CartCommand> = serde_json::from_str(SCRIPT).unwrap();
        let provider = CartProvider::new(Currency::INR);
        let handle = provider.handle();

        let unchanged = apply_script(&handle, commands).unwrap();

        assert_eq!(unchanged, 2);
        assert_eq!(handle.total_items().unwrap(), 2);
        assert_eq!(handle.total_price().unwrap(), Money::from_major(998, Currency::INR));
    }

    #[test]
    fn test_apply_script_rejects_foreign_currency() {
        let commands = vec![CartCommand::add(
            LineItem::new("a", "A", Money::from_major(5, Currency::USD), "", 1).unwrap(),
        )];
        let provider = CartProvider::new(Currency::INR);

        let err = apply_script(&provider.handle(), commands).unwrap_err();
        assert!(format!("{:#}", err).contains("Command #1 (add_item)"));
    }
}
