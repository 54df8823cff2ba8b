//! CLI command implementations.

pub mod config;
pub mod options;
pub mod product;
pub mod products;
pub mod quote;

use anyhow::Result;
use clap::{Args, Subcommand};
use menuiserie_core::catalog::ProductType;

/// Arguments for the products command.
#[derive(Args)]
pub struct ProductsArgs {
    /// Only this product type (window, door, shutter or fenetre, porte, volet).
    #[arg(long)]
    pub category: Option<String>,

    /// Case-insensitive text matched against name and description.
    #[arg(short, long)]
    pub search: Option<String>,

    /// Only the first products of the catalogue (count from config when omitted).
    #[arg(long, num_args = 0..=1, value_name = "N")]
    pub featured: Option<Option<usize>>,
}

/// Arguments for the product command.
#[derive(Args)]
pub struct ProductArgs {
    /// Product id, e.g. fenetre-1.
    pub id: String,
}

/// Arguments for the options command.
#[derive(Args)]
pub struct OptionsArgs {
    /// Product type.
    pub product_type: String,
}

/// Arguments for the quote command.
#[derive(Args)]
pub struct QuoteArgs {
    /// Product type, for a generic configuration.
    #[arg(short = 't', long = "type", required_unless_present = "product")]
    pub product_type: Option<String>,

    /// Catalogue product, for a per-product configuration.
    #[arg(short, long, conflicts_with = "product_type")]
    pub product: Option<String>,

    /// Pricing mode: flat-tier or dimension-scaled.
    #[arg(short, long)]
    pub mode: Option<String>,

    /// Material id.
    #[arg(long)]
    pub material: Option<String>,

    /// Color id.
    #[arg(long)]
    pub color: Option<String>,

    /// Dimension tier id.
    #[arg(long)]
    pub tier: Option<String>,

    /// Width in centimeters (clamped to 50-300).
    #[arg(long, allow_negative_numbers = true)]
    pub width: Option<i64>,

    /// Height in centimeters (clamped to 50-300).
    #[arg(long, allow_negative_numbers = true)]
    pub height: Option<i64>,

    /// Add-on id, repeatable.
    #[arg(long = "add-on", value_name = "ID")]
    pub add_ons: Vec<String>,

    /// Also print the cart line for this many units.
    #[arg(short, long)]
    pub quantity: Option<u32>,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show the active configuration
    Show,

    /// Write a default menuiserie.toml in the working directory
    Init {
        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },
}

/// Parse a product type given on the command line.
pub fn parse_product_type(s: &str) -> Result<ProductType> {
    Ok(ProductType::parse(s)?)
}
