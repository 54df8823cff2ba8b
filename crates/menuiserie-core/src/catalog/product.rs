//! Product and product type.

use crate::error::ConfiguratorError;
use crate::ids::{OptionId, ProductId};
use crate::money::Money;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The closed set of things the shop makes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductType {
    Window,
    Door,
    Shutter,
}

impl ProductType {
    pub const ALL: [ProductType; 3] = [ProductType::Window, ProductType::Door, ProductType::Shutter];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProductType::Window => "window",
            ProductType::Door => "door",
            ProductType::Shutter => "shutter",
        }
    }

    /// Slug used by the French storefront.
    pub fn slug(&self) -> &'static str {
        match self {
            ProductType::Window => "fenetre",
            ProductType::Door => "porte",
            ProductType::Shutter => "volet",
        }
    }

    /// Heading used by the configurator ("Configurez votre fenêtre").
    pub fn display_name(&self) -> &'static str {
        match self {
            ProductType::Window => "votre fenêtre",
            ProductType::Door => "votre porte",
            ProductType::Shutter => "votre volet",
        }
    }

    /// Accepts the English name or the storefront slug, any case.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "window" | "fenetre" | "fenêtre" => Some(ProductType::Window),
            "door" | "porte" => Some(ProductType::Door),
            "shutter" | "volet" => Some(ProductType::Shutter),
            _ => None,
        }
    }

    /// Like `from_str`, with an error naming the rejected input.
    pub fn parse(s: &str) -> Result<Self, ConfiguratorError> {
        Self::from_str(s).ok_or_else(|| ConfiguratorError::UnknownProductType(s.to_string()))
    }
}

impl fmt::Display for ProductType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A catalogue entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    pub category: ProductType,
    pub description: String,
    /// Price before any customization.
    pub base_price: Money,
    /// Image path served by the storefront.
    pub image: String,
    /// Selling points. Not priced.
    pub features: Vec<String>,
    /// Material option ids offered for this model, first is the default.
    pub materials: Vec<OptionId>,
    /// Color option ids offered for this model, first is the default.
    pub colors: Vec<OptionId>,
}

impl Product {
    pub fn new(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        category: ProductType,
        base_price: Money,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category,
            description: String::new(),
            base_price,
            image: String::new(),
            features: Vec::new(),
            materials: Vec::new(),
            colors: Vec::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    pub fn with_features<I, S>(mut self, features: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.features = features.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_materials<I, S>(mut self, materials: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<OptionId>,
    {
        self.materials = materials.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_colors<I, S>(mut self, colors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<OptionId>,
    {
        self.colors = colors.into_iter().map(Into::into).collect();
        self
    }

    /// Material preselected by the per-product configurator.
    pub fn default_material(&self) -> Option<&OptionId> {
        self.materials.first()
    }

    /// Color preselected by the per-product configurator.
    pub fn default_color(&self) -> Option<&OptionId> {
        self.colors.first()
    }

    pub fn offers_material(&self, id: &str) -> bool {
        self.materials.iter().any(|m| m == id)
    }

    pub fn offers_color(&self, id: &str) -> bool {
        self.colors.iter().any(|c| c == id)
    }

    /// Case-insensitive match on name or description.
    pub fn matches_text(&self, term: &str) -> bool {
        let term = term.trim().to_lowercase();
        term.is_empty()
            || self.name.to_lowercase().contains(&term)
            || self.description.to_lowercase().contains(&term)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Product {
        Product::new("fenetre-1", "Fenêtre Eco-Confort", ProductType::Window, Money::eur_cents(24999))
            .with_description("Fenêtre à double vitrage")
            .with_materials(["pvc", "aluminium"])
            .with_colors(["blanc", "gris"])
    }

    #[test]
    fn test_product_type_parsing() {
        assert_eq!(ProductType::from_str("fenetre"), Some(ProductType::Window));
        assert_eq!(ProductType::from_str("Door"), Some(ProductType::Door));
        assert_eq!(ProductType::from_str(" volet "), Some(ProductType::Shutter));
        assert_eq!(ProductType::from_str("garage"), None);
        assert_eq!(
            ProductType::parse("garage"),
            Err(ConfiguratorError::UnknownProductType("garage".into()))
        );
    }

    #[test]
    fn test_product_type_serde() {
        let json = serde_json::to_string(&ProductType::Shutter).unwrap();
        assert_eq!(json, "\"shutter\"");
        let back: ProductType = serde_json::from_str("\"door\"").unwrap();
        assert_eq!(back, ProductType::Door);
    }

    #[test]
    fn test_defaults_are_first_entries() {
        let product = sample();
        assert_eq!(product.default_material().unwrap(), "pvc");
        assert_eq!(product.default_color().unwrap(), "blanc");
        assert!(product.offers_material("aluminium"));
        assert!(!product.offers_color("noir"));
    }

    #[test]
    fn test_matches_text() {
        let product = sample();
        assert!(product.matches_text("eco"));
        assert!(product.matches_text("VITRAGE"));
        assert!(product.matches_text("  "));
        assert!(!product.matches_text("volet"));
    }
}
