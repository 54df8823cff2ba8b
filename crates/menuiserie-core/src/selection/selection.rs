//! The selection value object and its validated mutations.

use crate::catalog::{Product, ProductType};
use crate::error::ConfiguratorError;
use crate::ids::{OptionId, SelectionId};
use crate::options::{OptionCatalog, OptionKind};
use crate::selection::{clamp_dimension, Axis, Dimension, DEFAULT_DIMENSION_CM};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// One configurator session's choices.
///
/// Every id held here is a member of the option set resolved for
/// `product_type` and, when the selection is bound to a product, of that
/// product's own material and color lists. Mutations that would break this
/// return `ConfiguratorError::InvalidOption` and leave the selection as it was.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Selection {
    id: SelectionId,
    product_type: ProductType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    product: Option<Product>,
    #[serde(default)]
    material: Option<OptionId>,
    #[serde(default)]
    color: Option<OptionId>,
    #[serde(default)]
    dimension: Option<Dimension>,
    #[serde(default)]
    add_ons: Vec<OptionId>,
}

impl Selection {
    /// Empty selection for the generic configurator.
    pub fn new(product_type: ProductType) -> Self {
        let selection = Self {
            id: SelectionId::generate(),
            product_type,
            product: None,
            material: None,
            color: None,
            dimension: None,
            add_ons: Vec::new(),
        };
        debug!(selection_id = %selection.id, %product_type, "selection created");
        selection
    }

    /// Selection for the per-product configurator: material and color start
    /// at the product's first entries and the size at 100 × 100 cm.
    pub fn for_product(product: &Product) -> Self {
        let selection = Self {
            id: SelectionId::generate(),
            product_type: product.category,
            product: Some(product.clone()),
            material: product.default_material().cloned(),
            color: product.default_color().cloned(),
            dimension: Some(Dimension::reference()),
            add_ons: Vec::new(),
        };
        debug!(
            selection_id = %selection.id,
            product_id = %product.id,
            "selection created for product"
        );
        selection
    }

    pub fn id(&self) -> &SelectionId {
        &self.id
    }

    pub fn product_type(&self) -> ProductType {
        self.product_type
    }

    /// Product bound by the per-product configurator.
    pub fn product(&self) -> Option<&Product> {
        self.product.as_ref()
    }

    pub fn material(&self) -> Option<&OptionId> {
        self.material.as_ref()
    }

    pub fn color(&self) -> Option<&OptionId> {
        self.color.as_ref()
    }

    pub fn dimension(&self) -> Option<&Dimension> {
        self.dimension.as_ref()
    }

    /// Selected add-ons in the order they were ticked.
    pub fn add_ons(&self) -> &[OptionId] {
        &self.add_ons
    }

    pub fn has_add_on(&self, id: &str) -> bool {
        self.add_ons.iter().any(|a| a == id)
    }

    /// Options valid for the current product type.
    pub fn options(&self) -> OptionCatalog {
        OptionCatalog::resolve(self.product_type)
    }

    /// Material, color and dimension are all chosen.
    pub fn is_complete(&self) -> bool {
        self.material.is_some() && self.color.is_some() && self.dimension.is_some()
    }

    pub fn select_material(&mut self, id: &str) -> Result<(), ConfiguratorError> {
        let id = self.check(OptionKind::Material, id)?;
        debug!(selection_id = %self.id, material = %id, "material selected");
        self.material = Some(id);
        Ok(())
    }

    pub fn select_color(&mut self, id: &str) -> Result<(), ConfiguratorError> {
        let id = self.check(OptionKind::Color, id)?;
        debug!(selection_id = %self.id, color = %id, "color selected");
        self.color = Some(id);
        Ok(())
    }

    pub fn select_dimension_tier(&mut self, id: &str) -> Result<(), ConfiguratorError> {
        let id = self.check(OptionKind::DimensionTier, id)?;
        debug!(selection_id = %self.id, tier = %id, "dimension tier selected");
        self.dimension = Some(Dimension::Tier { id });
        Ok(())
    }

    /// Set one measured axis, clamping into range. A selection without
    /// measurements starts from 100 × 100 cm. Returns the stored value.
    pub fn set_dimension(&mut self, axis: Axis, value: i64) -> u32 {
        let stored = clamp_dimension(value);
        let (mut width_cm, mut height_cm) = self
            .dimension
            .as_ref()
            .and_then(Dimension::measurements)
            .unwrap_or((DEFAULT_DIMENSION_CM, DEFAULT_DIMENSION_CM));
        match axis {
            Axis::Width => width_cm = stored,
            Axis::Height => height_cm = stored,
        }
        if i64::from(stored) != value {
            debug!(selection_id = %self.id, axis = axis.as_str(), value, stored, "dimension clamped");
        }
        self.dimension = Some(Dimension::Measured {
            width_cm,
            height_cm,
        });
        stored
    }

    /// Set both measured axes, clamping each.
    pub fn set_measurements(&mut self, width_cm: i64, height_cm: i64) {
        self.dimension = Some(Dimension::measured(width_cm, height_cm));
    }

    /// Tick or untick an add-on. Returns whether it is selected afterwards.
    pub fn toggle_add_on(&mut self, id: &str) -> Result<bool, ConfiguratorError> {
        let id = self.check(OptionKind::AddOn, id)?;
        if let Some(pos) = self.add_ons.iter().position(|a| *a == id) {
            self.add_ons.remove(pos);
            debug!(selection_id = %self.id, add_on = %id, "add-on removed");
            Ok(false)
        } else {
            debug!(selection_id = %self.id, add_on = %id, "add-on added");
            self.add_ons.push(id);
            Ok(true)
        }
    }

    /// Switch product type. Material, color, add-ons and the product binding
    /// are cleared even when an id would still be valid for the new type; the
    /// dimension is kept since every type shares the same tiers and range.
    /// Returns false when the type is unchanged.
    pub fn set_product_type(&mut self, product_type: ProductType) -> bool {
        if product_type == self.product_type {
            return false;
        }
        debug!(
            selection_id = %self.id,
            from = %self.product_type,
            to = %product_type,
            "product type changed, clearing choices"
        );
        self.product_type = product_type;
        self.product = None;
        self.material = None;
        self.color = None;
        self.add_ons.clear();
        true
    }

    /// Re-check every id, e.g. after deserializing a selection.
    pub fn validate(&self) -> Result<(), ConfiguratorError> {
        if let Some(product) = &self.product {
            if product.category != self.product_type {
                return Err(ConfiguratorError::ProductTypeMismatch {
                    product_id: product.id.to_string(),
                    product_type: self.product_type,
                });
            }
        }
        if let Some(id) = &self.material {
            self.check(OptionKind::Material, id.as_str())?;
        }
        if let Some(id) = &self.color {
            self.check(OptionKind::Color, id.as_str())?;
        }
        if let Some(id) = self.dimension.as_ref().and_then(Dimension::tier_id) {
            self.check(OptionKind::DimensionTier, id.as_str())?;
        }
        for id in &self.add_ons {
            self.check(OptionKind::AddOn, id.as_str())?;
        }
        Ok(())
    }

    /// Membership check against the option table and the bound product.
    fn check(&self, kind: OptionKind, id: &str) -> Result<OptionId, ConfiguratorError> {
        let offered_by_type = self.options().find(kind, id);
        let offered_by_product = match (&self.product, kind) {
            (Some(product), OptionKind::Material) => product.offers_material(id),
            (Some(product), OptionKind::Color) => product.offers_color(id),
            _ => true,
        };
        match offered_by_type {
            Some(option) if offered_by_product => Ok(OptionId::new(option.id)),
            _ => {
                warn!(
                    selection_id = %self.id,
                    product_type = %self.product_type,
                    kind = kind.as_str(),
                    id,
                    "option rejected"
                );
                Err(ConfiguratorError::InvalidOption {
                    kind,
                    id: id.to_string(),
                    product_type: self.product_type,
                })
            }
        }
    }
}
