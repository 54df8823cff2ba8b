//! Options offered for a product type.

use anyhow::Result;
use menuiserie_core::options::{OptionCatalog, OptionKind};

use super::{parse_product_type, OptionsArgs};
use crate::context::Context;
use crate::output::format_multiplier;

const SECTIONS: [(OptionKind, &str); 4] = [
    (OptionKind::Material, "Matériaux"),
    (OptionKind::Color, "Couleurs"),
    (OptionKind::DimensionTier, "Dimensions"),
    (OptionKind::AddOn, "Options"),
];

/// Run the options command.
pub fn run(args: OptionsArgs, ctx: &Context) -> Result<()> {
    let product_type = parse_product_type(&args.product_type)?;
    let catalog = OptionCatalog::resolve(product_type);

    if ctx.output.is_json() {
        ctx.output.json(&catalog);
        return Ok(());
    }

    ctx.output
        .info(&format!("Options pour {}", product_type.display_name()));

    let widths = [20, 26, 12, 6];
    for (kind, title) in SECTIONS {
        ctx.output.header(title);
        for option in catalog.options(kind) {
            let delta = format!("+{}", option.price_delta.display_in(ctx.locale()));
            let multiplier = if kind == OptionKind::Material {
                format_multiplier(option.multiplier_pct)
            } else {
                String::new()
            };
            ctx.output
                .table_row(&[option.id, option.name, &delta, &multiplier], &widths);
        }
    }

    Ok(())
}
