//! Pricing constants and the two calculation strategies.

use crate::error::ConfiguratorError;
use crate::ids::OptionId;
use crate::money::Money;
use crate::options::{OptionCatalog, OptionKind};
use crate::pricing::{PriceBreakdown, PricingMode};
use crate::selection::{Dimension, Selection, DEFAULT_DIMENSION_CM};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Base price of the generic configurator, independent of any product.
pub const DEFAULT_FLAT_BASE_PRICE: Money = Money::eur(200);

/// Per add-on fee of the per-product configurator.
pub const DEFAULT_SCALED_ADD_ON_FEE: Money = Money::eur_cents(3999);

/// Tunable constants of both strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PricingRules {
    /// Starting price for flat-tier pricing.
    pub flat_base_price: Money,
    /// Fee charged per add-on by dimension-scaled pricing.
    pub scaled_add_on_fee: Money,
    /// Width (cm) at which the dimension factor is 1.
    pub reference_width_cm: u32,
    /// Height (cm) at which the dimension factor is 1.
    pub reference_height_cm: u32,
}

impl Default for PricingRules {
    fn default() -> Self {
        Self {
            flat_base_price: DEFAULT_FLAT_BASE_PRICE,
            scaled_add_on_fee: DEFAULT_SCALED_ADD_ON_FEE,
            reference_width_cm: DEFAULT_DIMENSION_CM,
            reference_height_cm: DEFAULT_DIMENSION_CM,
        }
    }
}

impl PricingRules {
    /// Price a selection with the given strategy.
    ///
    /// Every option id in the selection is checked against the option table;
    /// an id the product type does not offer is an error, never a silent zero.
    pub fn compute(
        &self,
        selection: &Selection,
        mode: PricingMode,
    ) -> Result<PriceBreakdown, ConfiguratorError> {
        let breakdown = match mode {
            PricingMode::FlatTier => self.flat_tier(selection)?,
            PricingMode::DimensionScaled => self.dimension_scaled(selection)?,
        };
        debug!(
            selection_id = %selection.id(),
            mode = %mode,
            total = breakdown.total.amount_cents,
            "computed price"
        );
        Ok(breakdown)
    }

    /// `base + material + color + dimension tier + Σ add-ons`, all flat.
    fn flat_tier(&self, selection: &Selection) -> Result<PriceBreakdown, ConfiguratorError> {
        let options = OptionCatalog::resolve(selection.product_type());
        let zero = Money::zero(self.flat_base_price.currency);

        let delta = |kind: OptionKind, id: Option<&OptionId>| -> Result<Money, ConfiguratorError> {
            match id {
                Some(id) => Ok(options.require(kind, id.as_str())?.price_delta),
                None => Ok(zero),
            }
        };

        let material_delta = delta(OptionKind::Material, selection.material())?;
        let color_delta = delta(OptionKind::Color, selection.color())?;
        // measured dimensions have no tier and add nothing here
        let dimension_delta = match selection.dimension() {
            Some(Dimension::Tier { id }) => delta(OptionKind::DimensionTier, Some(id))?,
            Some(Dimension::Measured { .. }) | None => zero,
        };
        let mut options_delta = zero;
        for id in selection.add_ons() {
            options_delta = options_delta + delta(OptionKind::AddOn, Some(id))?;
        }

        let total =
            self.flat_base_price + material_delta + color_delta + dimension_delta + options_delta;
        Ok(PriceBreakdown {
            mode: PricingMode::FlatTier,
            base_price: self.flat_base_price,
            material_delta,
            color_delta,
            dimension_delta,
            options_delta,
            total,
        })
    }

    /// `base × material multiplier × max(1, surface factor) + n × add-on fee`.
    ///
    /// Intermediate amounts are exact rationals; the only rounding happens when
    /// a product reaches whole cents, so the deltas telescope to the total.
    fn dimension_scaled(&self, selection: &Selection) -> Result<PriceBreakdown, ConfiguratorError> {
        let product = selection.product().ok_or(ConfiguratorError::ProductRequired)?;
        let options = OptionCatalog::resolve(selection.product_type());

        let material = selection.material().or_else(|| product.default_material());
        let multiplier_pct = match material {
            Some(id) => options.require(OptionKind::Material, id.as_str())?.multiplier_pct,
            None => 100,
        };
        for id in selection.add_ons() {
            options.require(OptionKind::AddOn, id.as_str())?;
        }

        let (width, height) = match selection.dimension() {
            Some(Dimension::Measured {
                width_cm,
                height_cm,
            }) => (*width_cm, *height_cm),
            Some(Dimension::Tier { .. }) | None => {
                (self.reference_width_cm, self.reference_height_cm)
            }
        };
        let area = i128::from(width) * i128::from(height);
        let reference_area =
            i128::from(self.reference_width_cm) * i128::from(self.reference_height_cm);
        let multiplier = i128::from(multiplier_pct);

        let base = product.base_price;
        let after_material = base
            .scale_ratio(multiplier, 100)
            .ok_or(ConfiguratorError::PriceOverflow)?;
        // surfaces at or below the reference never discount
        let after_dimensions = if reference_area > 0 && area > reference_area {
            base.scale_ratio(multiplier * area, 100 * reference_area)
                .ok_or(ConfiguratorError::PriceOverflow)?
        } else {
            after_material
        };
        let options_delta = self.scaled_add_on_fee * selection.add_ons().len() as i64;
        let total = after_dimensions
            .checked_add(options_delta)
            .ok_or(ConfiguratorError::PriceOverflow)?;

        Ok(PriceBreakdown {
            mode: PricingMode::DimensionScaled,
            base_price: base,
            material_delta: after_material - base,
            color_delta: Money::zero(base.currency),
            dimension_delta: after_dimensions - after_material,
            options_delta,
            total,
        })
    }
}
