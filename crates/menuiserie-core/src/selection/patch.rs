//! Partial updates applied to a selection as one atomic step.

use crate::catalog::ProductType;
use crate::error::ConfiguratorError;
use crate::options::OptionKind;
use crate::selection::{Axis, Dimension, Selection, DEFAULT_DIMENSION_CM};
use serde::{Deserialize, Serialize};

/// A partial change to a selection, as sent by a form or an API client.
///
/// Fields are applied in a fixed order: product type, material, color,
/// dimension, then the add-on toggle. When both a tier and measurements are
/// given, the measurements win. Unknown JSON fields are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SelectionPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_type: Option<ProductType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub material: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Dimension tier id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dimension_mode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<i64>,
    /// Add-on id to tick or untick.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub toggle_add_on: Option<String>,
}

impl SelectionPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json(json: &str) -> Result<Self, ConfiguratorError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn product_type(mut self, product_type: ProductType) -> Self {
        self.product_type = Some(product_type);
        self
    }

    pub fn material(mut self, id: impl Into<String>) -> Self {
        self.material = Some(id.into());
        self
    }

    pub fn color(mut self, id: impl Into<String>) -> Self {
        self.color = Some(id.into());
        self
    }

    pub fn dimension_tier(mut self, id: impl Into<String>) -> Self {
        self.dimension_mode = Some(id.into());
        self
    }

    pub fn width(mut self, width_cm: i64) -> Self {
        self.width = Some(width_cm);
        self
    }

    pub fn height(mut self, height_cm: i64) -> Self {
        self.height = Some(height_cm);
        self
    }

    pub fn toggle_add_on(mut self, id: impl Into<String>) -> Self {
        self.toggle_add_on = Some(id.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Apply in place. On error the selection may be partly updated; use
    /// [`update_selection`] for all-or-nothing semantics.
    pub(crate) fn apply_to(&self, selection: &mut Selection) -> Result<(), ConfiguratorError> {
        if let Some(product_type) = self.product_type {
            selection.set_product_type(product_type);
        }
        if let Some(id) = &self.material {
            selection.select_material(id)?;
        }
        if let Some(id) = &self.color {
            selection.select_color(id)?;
        }
        let measured = self.width.is_some() || self.height.is_some();
        match &self.dimension_mode {
            Some(id) if !measured => selection.select_dimension_tier(id)?,
            Some(id) => {
                // an overridden tier must still exist
                selection.options().require(OptionKind::DimensionTier, id)?;
            }
            None => {}
        }
        if measured && !matches!(selection.dimension(), Some(Dimension::Measured { .. })) {
            let default = i64::from(DEFAULT_DIMENSION_CM);
            selection.set_measurements(
                self.width.unwrap_or(default),
                self.height.unwrap_or(default),
            );
        } else {
            if let Some(width) = self.width {
                selection.set_dimension(Axis::Width, width);
            }
            if let Some(height) = self.height {
                selection.set_dimension(Axis::Height, height);
            }
        }
        if let Some(id) = &self.toggle_add_on {
            selection.toggle_add_on(id)?;
        }
        Ok(())
    }
}

/// Apply a patch and return the new selection.
///
/// Either every field applies or none does: on error the input selection is
/// untouched and the error names the first rejected option.
pub fn update_selection(
    selection: &Selection,
    patch: &SelectionPatch,
) -> Result<Selection, ConfiguratorError> {
    let mut next = selection.clone();
    patch.apply_to(&mut next)?;
    Ok(next)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_patch_from_json_ignores_unknown_fields() {
        let patch = SelectionPatch::from_json(
            r#"{"productType": "door", "material": "bois", "toggleAddOn": "judas", "quantity": 3}"#,
        )
        .unwrap();
        assert_eq!(patch.product_type, Some(ProductType::Door));
        assert_eq!(patch.material.as_deref(), Some("bois"));
        assert_eq!(patch.toggle_add_on.as_deref(), Some("judas"));
    }

    #[test]
    fn test_update_applies_in_order() {
        let selection = Selection::new(ProductType::Window);
        // rouge is only offered once the type has switched to door
        let patch = SelectionPatch::new()
            .product_type(ProductType::Door)
            .material("bois")
            .color("rouge")
            .toggle_add_on("judas");
        let updated = update_selection(&selection, &patch).unwrap();
        assert_eq!(updated.product_type(), ProductType::Door);
        assert_eq!(updated.material().unwrap(), "bois");
        assert_eq!(updated.color().unwrap(), "rouge");
        assert!(updated.has_add_on("judas"));
    }

    #[test]
    fn test_update_is_atomic() {
        let mut selection = Selection::new(ProductType::Window);
        selection.select_material("pvc").unwrap();

        let patch = SelectionPatch::new().material("bois").color("rouge");
        let err = update_selection(&selection, &patch).unwrap_err();
        assert_eq!(
            err,
            ConfiguratorError::InvalidOption {
                kind: OptionKind::Color,
                id: "rouge".into(),
                product_type: ProductType::Window,
            }
        );
        assert_eq!(selection.material().unwrap(), "pvc");
    }

    #[test]
    fn test_measurements_win_over_tier() {
        let selection = Selection::new(ProductType::Shutter);
        let patch = SelectionPatch::new()
            .dimension_tier("sur-mesure-grand")
            .width(400);
        let updated = update_selection(&selection, &patch).unwrap();
        assert_eq!(updated.dimension().unwrap().measurements(), Some((300, 100)));

        let bad_tier = SelectionPatch::new().dimension_tier("geant").width(120);
        assert!(update_selection(&selection, &bad_tier).is_err());
    }

    #[test]
    fn test_partial_measurement_keeps_other_axis() {
        let mut selection = Selection::new(ProductType::Window);
        selection.set_measurements(180, 140);
        let updated = update_selection(&selection, &SelectionPatch::new().height(20)).unwrap();
        assert_eq!(updated.dimension().unwrap().measurements(), Some((180, 50)));
    }

    #[test]
    fn test_tier_patch() {
        let selection = Selection::new(ProductType::Door);
        let updated =
            update_selection(&selection, &SelectionPatch::new().dimension_tier("sur-mesure-moyen"))
                .unwrap();
        assert_eq!(
            updated.dimension().and_then(Dimension::tier_id).unwrap(),
            "sur-mesure-moyen"
        );
    }

    #[test]
    fn test_empty_patch_is_identity() {
        let selection = Selection::new(ProductType::Door);
        let patch = SelectionPatch::new();
        assert!(patch.is_empty());
        assert_eq!(update_selection(&selection, &patch).unwrap(), selection);
    }
}
