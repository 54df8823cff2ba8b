//! Price breakdown returned by the calculator.

use crate::money::{Locale, Money};
use crate::pricing::PricingMode;
use serde::{Deserialize, Serialize};

/// Decomposition of a configured price.
///
/// Derived fresh from a selection on every change; the components always add
/// up to `total` exactly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceBreakdown {
    /// Strategy that produced this breakdown.
    pub mode: PricingMode,
    /// Starting price (the flat base or the product's catalogue price).
    pub base_price: Money,
    pub material_delta: Money,
    pub color_delta: Money,
    pub dimension_delta: Money,
    /// Sum of all add-on surcharges.
    pub options_delta: Money,
    pub total: Money,
}

impl PriceBreakdown {
    /// Labelled components in display order, total excluded.
    pub fn components(&self) -> [(&'static str, Money); 5] {
        [
            ("Base", self.base_price),
            ("Matériau", self.material_delta),
            ("Couleur", self.color_delta),
            ("Dimensions", self.dimension_delta),
            ("Options", self.options_delta),
        ]
    }

    /// Sum of the components. Equals `total` for every breakdown the
    /// calculator produces.
    pub fn components_sum(&self) -> Money {
        let parts = self.components();
        Money::sum(parts.iter().map(|(_, m)| m), self.total.currency)
    }

    /// Total formatted for the storefront.
    pub fn display_total(&self, locale: Locale) -> String {
        self.total.display_in(locale)
    }
}
