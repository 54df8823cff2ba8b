//! Configurator error types.

use crate::catalog::ProductType;
use crate::options::OptionKind;
use thiserror::Error;

/// Errors that can occur while browsing the catalogue or configuring a product.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfiguratorError {
    /// Product not found.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// Option id is not offered for the product type (or the bound product).
    #[error("Invalid {kind} '{id}' for {product_type}")]
    InvalidOption {
        kind: OptionKind,
        id: String,
        product_type: ProductType,
    },

    /// Unrecognized product type name.
    #[error("Unknown product type: {0}")]
    UnknownProductType(String),

    /// Bound product belongs to another category than the selection.
    #[error("Product {product_id} is not a {product_type}")]
    ProductTypeMismatch {
        product_id: String,
        product_type: ProductType,
    },

    /// Dimension-scaled pricing needs a product's base price.
    #[error("Dimension-scaled pricing requires a selection bound to a product")]
    ProductRequired,

    /// A computed amount does not fit in cents.
    #[error("Price out of range")]
    PriceOverflow,

    /// Unrecognized pricing mode name.
    #[error("Unknown pricing mode: {0}")]
    UnknownPricingMode(String),

    /// Catalogue definition violates an invariant.
    #[error("Invalid catalogue: {0}")]
    InvalidCatalogue(String),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl ConfiguratorError {
    /// True for outcomes expected from ordinary user interaction.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            ConfiguratorError::ProductNotFound(_) | ConfiguratorError::InvalidOption { .. }
        )
    }
}

impl From<serde_json::Error> for ConfiguratorError {
    fn from(e: serde_json::Error) -> Self {
        ConfiguratorError::Serialization(e.to_string())
    }
}
