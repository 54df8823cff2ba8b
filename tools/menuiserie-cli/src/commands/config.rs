//! Configuration management commands.

use std::fs;

use anyhow::{bail, Result};
use console::Term;
use dialoguer::Confirm;

use super::{ConfigArgs, ConfigCommand};
use crate::config::{generate_default_config, CliConfig};
use crate::context::Context;

/// Run the config command.
pub fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx),
        ConfigCommand::Init { force } => init_config(force, ctx),
    }
}

fn show_config(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    ctx.output.header("Current Configuration");
    match &ctx.config_path {
        Some(path) => ctx.output.kv("file", &path.display().to_string()),
        None => ctx.output.kv("file", "(defaults)"),
    }

    let pricing = &ctx.config.pricing;
    let rules = ctx.rules();
    let locale = ctx.locale();

    ctx.output.info("");
    ctx.output.info("[pricing]");
    ctx.output.kv(
        "mode",
        pricing.mode.map_or("(per configurator)", |m| m.as_str()),
    );
    ctx.output
        .kv("flat_base_price", &rules.flat_base_price.display_in(locale));
    ctx.output
        .kv("add_on_fee", &rules.scaled_add_on_fee.display_in(locale));
    ctx.output.kv(
        "reference size",
        &format!(
            "{} × {} cm",
            rules.reference_width_cm, rules.reference_height_cm
        ),
    );

    ctx.output.info("");
    ctx.output.info("[display]");
    ctx.output.kv("locale", ctx.config.display.locale.as_str());
    ctx.output.kv(
        "featured_count",
        &ctx.config.display.featured_count.to_string(),
    );

    Ok(())
}

/// Writes the commented TOML template, or plain `menuiserie.json` in JSON mode.
fn init_config(force: bool, ctx: &Context) -> Result<()> {
    let json = ctx.output.is_json();
    let config_path = ctx
        .cwd
        .join(if json { "menuiserie.json" } else { "menuiserie.toml" });

    if config_path.exists() && !force {
        let interactive = Term::stderr().is_term() && !json;
        let overwrite = interactive
            && Confirm::new()
                .with_prompt(format!("Overwrite {}?", config_path.display()))
                .default(false)
                .interact()?;
        if !overwrite {
            bail!(
                "Config file already exists: {}. Use --force to overwrite.",
                config_path.display()
            );
        }
    }

    if json {
        CliConfig::default().save(&config_path.to_string_lossy())?;
        ctx.output
            .json(&serde_json::json!({ "created": config_path.display().to_string() }));
    } else {
        fs::write(&config_path, generate_default_config())?;
        ctx.output
            .success(&format!("Created: {}", config_path.display()));
    }

    Ok(())
}
