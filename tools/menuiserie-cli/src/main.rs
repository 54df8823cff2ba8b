//! Menuiserie CLI - browse the catalogue and price configurations.
//!
//! Commands:
//! - `menuiserie products` - List products
//! - `menuiserie product` - Show one product
//! - `menuiserie options` - Show the options offered for a product type
//! - `menuiserie quote` - Price a configuration
//! - `menuiserie config` - Manage configuration

mod commands;
mod config;
mod context;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{ConfigArgs, OptionsArgs, ProductArgs, ProductsArgs, QuoteArgs};

/// Menuiserie CLI - windows, doors and shutters made to measure
#[derive(Parser)]
#[command(name = "menuiserie")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List catalogue products
    Products(ProductsArgs),

    /// Show a product's details
    Product(ProductArgs),

    /// Show the options offered for a product type
    Options(OptionsArgs),

    /// Price a configuration
    Quote(QuoteArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    // Setup output formatting
    let output = output::Output::new(cli.verbose, cli.json);

    let ctx = match context::Context::load(cli.config.as_deref(), output.clone()) {
        Ok(ctx) => ctx,
        Err(e) => {
            output.error(&format!("{:#}", e));
            std::process::exit(1);
        }
    };

    tracing::debug!(config = ?ctx.config_path, locale = ctx.locale().as_str(), "context loaded");

    let result = match cli.command {
        Commands::Products(args) => commands::products::run(args, &ctx),
        Commands::Product(args) => commands::product::run(args, &ctx),
        Commands::Options(args) => commands::options::run(args, &ctx),
        Commands::Quote(args) => commands::quote::run(args, &ctx),
        Commands::Config(args) => commands::config::run(args, &ctx),
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}

/// Engine logs go to stderr. `RUST_LOG` wins over `--verbose`.
fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
