//! Product detail page.

use anyhow::Result;
use menuiserie_core::catalog::Catalogue;
use menuiserie_core::ids::OptionId;
use menuiserie_core::options::{OptionCatalog, OptionKind};

use super::ProductArgs;
use crate::context::Context;

/// Run the product command.
pub fn run(args: ProductArgs, ctx: &Context) -> Result<()> {
    let product = Catalogue::builtin().require(&args.id)?;

    if ctx.output.is_json() {
        ctx.output.json(product);
        return Ok(());
    }

    let options = OptionCatalog::resolve(product.category);
    let names = |kind: OptionKind, ids: &[OptionId]| -> String {
        ids.iter()
            .map(|id| {
                options
                    .find(kind, id.as_str())
                    .map_or(id.as_str(), |o| o.name)
            })
            .collect::<Vec<_>>()
            .join(", ")
    };

    ctx.output.header(&product.name);
    ctx.output.kv("id", product.id.as_str());
    ctx.output.kv("type", product.category.as_str());
    ctx.output
        .kv("price", &product.base_price.display_in(ctx.locale()));
    ctx.output
        .kv("materials", &names(OptionKind::Material, &product.materials));
    ctx.output.kv("colors", &names(OptionKind::Color, &product.colors));
    if !product.image.is_empty() {
        ctx.output.kv("image", &product.image);
    }

    if !product.description.is_empty() {
        ctx.output.header("Description");
        println!("  {}", product.description);
    }

    if !product.features.is_empty() {
        ctx.output.header("Caractéristiques");
        for feature in &product.features {
            ctx.output.list_item(feature);
        }
    }

    Ok(())
}
