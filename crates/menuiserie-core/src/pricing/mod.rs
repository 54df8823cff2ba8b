//! Price calculator.
//!
//! Two strategies coexist and are kept apart on purpose:
//!
//! - [`PricingMode::FlatTier`]: a fixed base plus flat surcharges for every
//!   selected option (the generic configurator).
//! - [`PricingMode::DimensionScaled`]: the product's own price scaled by a
//!   material multiplier and the surface, plus a fixed fee per add-on (the
//!   per-product configurator).

mod breakdown;
mod rules;

pub use breakdown::PriceBreakdown;
pub use rules::{PricingRules, DEFAULT_FLAT_BASE_PRICE, DEFAULT_SCALED_ADD_ON_FEE};

use crate::error::ConfiguratorError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Named pricing strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum PricingMode {
    /// Additive flat surcharges on a constant base.
    #[default]
    FlatTier,
    /// Multiplicative scaling of a product's base price.
    DimensionScaled,
}

impl PricingMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            PricingMode::FlatTier => "flat-tier",
            PricingMode::DimensionScaled => "dimension-scaled",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "flat-tier" | "flat" | "tier" => Some(PricingMode::FlatTier),
            "dimension-scaled" | "scaled" | "dimension" => Some(PricingMode::DimensionScaled),
            _ => None,
        }
    }

    pub fn parse(s: &str) -> Result<Self, ConfiguratorError> {
        Self::from_str(s).ok_or_else(|| ConfiguratorError::UnknownPricingMode(s.to_string()))
    }
}

impl fmt::Display for PricingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
