//! Price a configuration.

use anyhow::{Context as _, Result};
use menuiserie_core::catalog::Catalogue;
use menuiserie_core::pricing::PricingMode;
use menuiserie_core::selection::{update_selection, Selection, SelectionPatch};
use serde_json::json;

use super::{parse_product_type, QuoteArgs};
use crate::context::Context;

/// Run the quote command.
pub fn run(args: QuoteArgs, ctx: &Context) -> Result<()> {
    let selection = build_selection(&args)?;
    let mode = pick_mode(&args, ctx)?;
    ctx.output.debug(&format!(
        "Pricing {} with {}",
        selection.product_type(),
        mode
    ));

    let breakdown = ctx
        .rules()
        .compute(&selection, mode)
        .context("Failed to price configuration")?;
    let cart_item = args
        .quantity
        .map(|quantity| selection.to_cart_item(quantity))
        .transpose()?;

    if ctx.output.is_json() {
        ctx.output.json(&json!({
            "selection": selection,
            "breakdown": breakdown,
            "cart_item": cart_item,
        }));
        return Ok(());
    }

    let title = match selection.product() {
        Some(product) => product.name.clone(),
        None => format!("Configuration de {}", selection.product_type().display_name()),
    };
    ctx.output.header(&title);
    if let Some(material) = selection.material() {
        ctx.output.kv("material", material.as_str());
    }
    if let Some(color) = selection.color() {
        ctx.output.kv("color", color.as_str());
    }
    if let Some(dimension) = selection.dimension() {
        ctx.output.kv("dimensions", &dimension.to_string());
    }
    if !selection.add_ons().is_empty() {
        let add_ons: Vec<&str> = selection.add_ons().iter().map(|a| a.as_str()).collect();
        ctx.output.kv("options", &add_ons.join(", "));
    }
    ctx.output.kv("mode", mode.as_str());

    ctx.output.header("Prix");
    ctx.output.breakdown(&breakdown, ctx.locale());

    if let Some(item) = cart_item {
        ctx.output.success(&format!(
            "{} × {} ready for the cart",
            item.quantity, item.product_id
        ));
    }

    Ok(())
}

fn build_selection(args: &QuoteArgs) -> Result<Selection> {
    let selection = match (&args.product, &args.product_type) {
        (Some(id), _) => Selection::for_product(Catalogue::builtin().require(id)?),
        (None, Some(product_type)) => Selection::new(parse_product_type(product_type)?),
        (None, None) => anyhow::bail!("Either --type or --product is required"),
    };

    let patch = SelectionPatch {
        material: args.material.clone(),
        color: args.color.clone(),
        dimension_mode: args.tier.clone(),
        width: args.width,
        height: args.height,
        ..SelectionPatch::default()
    };
    let mut selection = update_selection(&selection, &patch)?;

    // a repeated --add-on selects once
    for id in &args.add_ons {
        if !selection.has_add_on(id) {
            selection.toggle_add_on(id)?;
        }
    }

    Ok(selection)
}

/// `--mode` first, then the config file, then the configurator the
/// arguments describe.
fn pick_mode(args: &QuoteArgs, ctx: &Context) -> Result<PricingMode> {
    if let Some(mode) = &args.mode {
        return Ok(PricingMode::parse(mode)?);
    }
    if let Some(mode) = ctx.config.pricing.mode {
        return Ok(mode);
    }
    Ok(if args.product.is_some() {
        PricingMode::DimensionScaled
    } else {
        PricingMode::FlatTier
    })
}
