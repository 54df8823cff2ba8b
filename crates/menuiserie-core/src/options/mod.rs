//! Option catalog resolver.
//!
//! Turns a product type into the materials, colors, dimension tiers and
//! add-ons the configurator may offer for it. The rendering layer uses the
//! result to draw choices; the selection state machine uses it to validate ids.

mod table;

use crate::catalog::ProductType;
use crate::error::ConfiguratorError;
use crate::money::Money;
use serde::Serialize;
use std::fmt;

/// Which list an option belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OptionKind {
    Material,
    Color,
    DimensionTier,
    AddOn,
}

impl OptionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            OptionKind::Material => "material",
            OptionKind::Color => "color",
            OptionKind::DimensionTier => "dimension tier",
            OptionKind::AddOn => "add-on",
        }
    }
}

impl fmt::Display for OptionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A priced customization choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OptionDefinition {
    /// Key, unique within its kind.
    pub id: &'static str,
    /// Label shown to the customer.
    pub name: &'static str,
    /// Flat surcharge used by flat-tier pricing.
    pub price_delta: Money,
    /// Base price multiplier in percent used by dimension-scaled pricing.
    /// Only materials carry a value other than 100.
    pub multiplier_pct: u32,
}

impl OptionDefinition {
    pub(crate) const fn flat(id: &'static str, name: &'static str, price_delta: Money) -> Self {
        Self {
            id,
            name,
            price_delta,
            multiplier_pct: 100,
        }
    }

    pub(crate) const fn material(
        id: &'static str,
        name: &'static str,
        price_delta: Money,
        multiplier_pct: u32,
    ) -> Self {
        Self {
            id,
            name,
            price_delta,
            multiplier_pct,
        }
    }
}

/// All options valid for one product type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OptionCatalog {
    pub product_type: ProductType,
    pub materials: Vec<&'static OptionDefinition>,
    pub colors: Vec<&'static OptionDefinition>,
    pub dimension_tiers: Vec<&'static OptionDefinition>,
    pub add_ons: Vec<&'static OptionDefinition>,
}

impl OptionCatalog {
    /// Resolve the option sets for a product type.
    pub fn resolve(product_type: ProductType) -> Self {
        let row = table::row(product_type);
        Self {
            product_type,
            materials: table::BASE_MATERIALS
                .iter()
                .chain(row.extra_materials)
                .collect(),
            colors: table::BASE_COLORS.iter().chain(row.extra_colors).collect(),
            dimension_tiers: table::DIMENSION_TIERS.iter().collect(),
            add_ons: row.add_ons.iter().collect(),
        }
    }

    /// Options of the given kind, in display order.
    pub fn options(&self, kind: OptionKind) -> &[&'static OptionDefinition] {
        match kind {
            OptionKind::Material => self.materials.as_slice(),
            OptionKind::Color => self.colors.as_slice(),
            OptionKind::DimensionTier => self.dimension_tiers.as_slice(),
            OptionKind::AddOn => self.add_ons.as_slice(),
        }
    }

    /// Look up an option by id.
    pub fn find(&self, kind: OptionKind, id: &str) -> Option<&'static OptionDefinition> {
        self.options(kind).iter().copied().find(|o| o.id == id)
    }

    /// Check whether an id is offered.
    pub fn contains(&self, kind: OptionKind, id: &str) -> bool {
        self.find(kind, id).is_some()
    }

    /// Look up an option by id, rejecting ids this product type does not offer.
    pub fn require(
        &self,
        kind: OptionKind,
        id: &str,
    ) -> Result<&'static OptionDefinition, ConfiguratorError> {
        self.find(kind, id)
            .ok_or_else(|| ConfiguratorError::InvalidOption {
                kind,
                id: id.to_string(),
                product_type: self.product_type,
            })
    }
}
