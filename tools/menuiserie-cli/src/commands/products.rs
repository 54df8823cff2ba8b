//! Catalogue listing.

use anyhow::Result;
use menuiserie_core::catalog::{Catalogue, Product};

use super::{parse_product_type, ProductsArgs};
use crate::context::Context;

/// Run the products command.
pub fn run(args: ProductsArgs, ctx: &Context) -> Result<()> {
    let catalogue = Catalogue::builtin();
    let category = args.category.as_deref().map(parse_product_type).transpose()?;

    let products: Vec<&Product> = match args.featured {
        Some(count) => {
            let n = count.unwrap_or(ctx.config.display.featured_count);
            if n > catalogue.len() {
                ctx.output.warn(&format!(
                    "Only {} products in the catalogue",
                    catalogue.len()
                ));
            }
            catalogue
                .featured(n)
                .iter()
                .filter(|p| category.map_or(true, |c| p.category == c))
                .filter(|p| args.search.as_deref().map_or(true, |t| p.matches_text(t)))
                .collect()
        }
        None => catalogue.search(category, args.search.as_deref().unwrap_or("")),
    };

    ctx.output
        .debug(&format!("{} of {} products match", products.len(), catalogue.len()));

    if ctx.output.is_json() {
        ctx.output.json(&products);
        return Ok(());
    }

    if products.is_empty() {
        ctx.output.info("No products match.");
        return Ok(());
    }

    ctx.output.header("Catalogue");
    let widths = [10, 28, 8, 14];
    ctx.output.table_row(&["ID", "NAME", "TYPE", "PRICE"], &widths);
    for product in products {
        let price = product.base_price.display_in(ctx.locale());
        ctx.output.table_row(
            &[
                product.id.as_str(),
                &product.name,
                product.category.as_str(),
                &price,
            ],
            &widths,
        );
    }

    Ok(())
}
