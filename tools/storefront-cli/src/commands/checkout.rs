//! WhatsApp checkout composition.

use anyhow::{bail, Result};
use dialoguer::Input;
use storefront_cart::prelude::*;

use super::cart::{apply_script, load_script};
use super::CheckoutArgs;
use crate::context::Context;

/// Run the checkout command.
pub fn run(args: CheckoutArgs, ctx: &Context) -> Result<()> {
    let commands = load_script(&ctx.resolve_path(&args.script))?;

    let provider = CartProvider::new(ctx.config.currency()?);
    apply_script(&provider.handle(), commands)?;

    let checkout = Checkout::new(
        provider.handle(),
        WhatsAppCheckout::from_config(&ctx.config.checkout),
    );
    let summary = checkout.summary()?;
    if summary.is_empty() {
        bail!("Cart is empty; nothing to check out");
    }

    if !ctx.output.is_json() {
        ctx.output.header("Order Summary");
        for line in &summary.lines {
            ctx.output.list_item(&format!(
                "{} \u{00d7} {} = {}",
                line.title, line.quantity, line.line_total
            ));
        }
        ctx.output.kv("Total", &summary.total.display());
    }

    let mut details = details_from_args(&args);
    if !args.no_input && !ctx.output.is_json() {
        prompt_missing(&mut details)?;
    }

    let handoff = checkout.place_order(&details)?;

    if ctx.output.is_json() {
        ctx.output.json(&handoff);
        return Ok(());
    }

    ctx.output.header("WhatsApp Message");
    ctx.output.block(&handoff.message);
    ctx.output.block("");
    ctx.output.success("Open this link to send the order:");
    ctx.output.block(&handoff.url);
    Ok(())
}

fn details_from_args(args: &CheckoutArgs) -> DeliveryDetails {
    DeliveryDetails::new(
        args.name.clone().unwrap_or_default(),
        args.phone.clone().unwrap_or_default(),
        args.street.clone().unwrap_or_default(),
        args.city.clone().unwrap_or_default(),
        args.pincode.clone().unwrap_or_default(),
    )
}

fn prompt_missing(details: &mut DeliveryDetails) -> Result<()> {
    for field in details.missing_fields() {
        let (prompt, slot) = match field {
            "name" => ("Full Name", &mut details.name),
            "phone" => ("Phone Number", &mut details.phone),
            "street" => ("Street Address", &mut details.street),
            "city" => ("City", &mut details.city),
            "pincode" => ("Pincode", &mut details.pincode),
            _ => continue,
        };
        *slot = Input::<String>::new().with_prompt(prompt).interact_text()?;
    }
    Ok(())
}
