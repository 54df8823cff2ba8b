//! CLI configuration.

use anyhow::{Context, Result};
use menuiserie_core::money::{Currency, Locale, Money};
use menuiserie_core::pricing::{PricingMode, PricingRules};
use serde::{Deserialize, Serialize};

/// File names looked up, in order, from the working directory upward.
pub const CONFIG_FILE_NAMES: [&str; 3] = ["menuiserie.toml", ".menuiserie.toml", "menuiserie.json"];

/// CLI configuration file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CliConfig {
    /// Pricing overrides.
    #[serde(default)]
    pub pricing: PricingConfig,

    /// Display preferences.
    #[serde(default)]
    pub display: DisplayConfig,
}

impl CliConfig {
    /// Load config from a file.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;

        if path.ends_with(".json") {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path))
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path))
        }
    }

    /// Save config to a file.
    pub fn save(&self, path: &str) -> Result<()> {
        let content = if path.ends_with(".json") {
            serde_json::to_string_pretty(self)?
        } else {
            toml::to_string_pretty(self)?
        };

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path))
    }
}

/// `[pricing]` section. Amounts are in euro cents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PricingConfig {
    /// Strategy used by `quote` when `--mode` is not given.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<PricingMode>,

    /// Base price of flat-tier quotes.
    pub flat_base_price_cents: i64,

    /// Fee per add-on in dimension-scaled quotes.
    pub add_on_fee_cents: i64,

    /// Size at which dimension-scaled quotes keep the catalogue price.
    pub reference_width_cm: u32,
    pub reference_height_cm: u32,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self::from_rules(&PricingRules::default())
    }
}

impl PricingConfig {
    fn from_rules(rules: &PricingRules) -> Self {
        Self {
            mode: None,
            flat_base_price_cents: rules.flat_base_price.amount_cents,
            add_on_fee_cents: rules.scaled_add_on_fee.amount_cents,
            reference_width_cm: rules.reference_width_cm,
            reference_height_cm: rules.reference_height_cm,
        }
    }

    /// Calculator constants with these overrides applied.
    pub fn rules(&self) -> PricingRules {
        PricingRules {
            flat_base_price: Money::new(self.flat_base_price_cents, Currency::EUR),
            scaled_add_on_fee: Money::new(self.add_on_fee_cents, Currency::EUR),
            reference_width_cm: self.reference_width_cm,
            reference_height_cm: self.reference_height_cm,
        }
    }

    /// Problems that make the section unusable.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();
        if self.flat_base_price_cents < 0 {
            errors.push("pricing.flat_base_price_cents must not be negative".to_string());
        }
        if self.add_on_fee_cents < 0 {
            errors.push("pricing.add_on_fee_cents must not be negative".to_string());
        }
        if self.reference_width_cm == 0 || self.reference_height_cm == 0 {
            errors.push("pricing.reference_width_cm and reference_height_cm must be positive".to_string());
        }
        errors
    }
}

/// `[display]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Price layout: `fr` (1 234,50 €) or `en` (€1,234.50).
    pub locale: Locale,

    /// Products shown by `products --featured` without a count.
    pub featured_count: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            locale: Locale::Fr,
            featured_count: 3,
        }
    }
}

/// Generate a default menuiserie.toml config file.
pub fn generate_default_config() -> String {
    let pricing = PricingConfig::default();
    format!(
        r#"# Menuiserie configurator settings

[pricing]
# Strategy used by `quote` when --mode is not given:
# "flat-tier" or "dimension-scaled". Without it, quotes for a --product
# are dimension-scaled and quotes for a --type are flat-tier.
# mode = "flat-tier"
flat_base_price_cents = {base}
add_on_fee_cents = {fee}
reference_width_cm = {width}
reference_height_cm = {height}

[display]
# "fr" or "en"
locale = "fr"
featured_count = 3
"#,
        base = pricing.flat_base_price_cents,
        fee = pricing.add_on_fee_cents,
        width = pricing.reference_width_cm,
        height = pricing.reference_height_cm,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_parses_to_defaults() {
        let config: CliConfig = toml::from_str(&generate_default_config()).unwrap();
        assert_eq!(config, CliConfig::default());
        assert_eq!(config.pricing.rules(), PricingRules::default());
    }

    #[test]
    fn test_partial_config() {
        let config: CliConfig = toml::from_str(
            r#"
            [pricing]
            mode = "dimension-scaled"
            flat_base_price_cents = 25000

            [display]
            locale = "en"
            "#,
        )
        .unwrap();
        assert_eq!(config.pricing.mode, Some(PricingMode::DimensionScaled));
        assert_eq!(config.pricing.rules().flat_base_price, Money::eur(250));
        assert_eq!(config.pricing.add_on_fee_cents, 3999);
        assert_eq!(config.display.locale, Locale::En);
        assert_eq!(config.display.featured_count, 3);
    }

    #[test]
    fn test_validate_pricing() {
        let mut pricing = PricingConfig::default();
        assert!(pricing.validate().is_empty());
        pricing.reference_width_cm = 0;
        pricing.add_on_fee_cents = -1;
        assert_eq!(pricing.validate().len(), 2);
    }

    #[test]
    fn test_json_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("menuiserie.json");
        let path = path.to_str().unwrap();

        let mut config = CliConfig::default();
        config.display.featured_count = 5;
        config.save(path).unwrap();
        assert_eq!(CliConfig::load(path).unwrap(), config);
    }
}
