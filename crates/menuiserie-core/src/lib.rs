//! Configuration and pricing engine for Menuiserie Moderne.
//!
//! The storefront sells windows, doors and shutters. This crate holds
//! everything behind its configurators:
//!
//! - **Catalog**: the built-in products and their categories
//! - **Options**: materials, colors, dimension tiers and add-ons per product type
//! - **Pricing**: flat-tier and dimension-scaled price calculators
//! - **Selection**: the customer's choices, patches and the wizard session
//! - **Order**: cart line and order data shapes
//!
//! # Example
//!
//! ```rust
//! use menuiserie_core::prelude::*;
//!
//! let mut selection = create_selection(ProductType::Window);
//! selection = update_selection(
//!     &selection,
//!     &SelectionPatch::new()
//!         .material("aluminium")
//!         .color("gris")
//!         .dimension_tier("standard")
//!         .toggle_add_on("double-vitrage"),
//! )
//! .unwrap();
//!
//! let breakdown = compute_price(&selection, PricingMode::FlatTier).unwrap();
//! assert_eq!(breakdown.total, Money::eur(500));
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod catalog;
pub mod options;
pub mod order;
pub mod pricing;
pub mod selection;

pub use error::ConfiguratorError;
pub use ids::*;
pub use money::{Currency, Locale, Money};
pub use selection::update_selection;

use catalog::{Catalogue, Product, ProductType};
use options::OptionCatalog;
use pricing::{PriceBreakdown, PricingMode, PricingRules};
use selection::Selection;

/// Every built-in product, in catalogue order.
pub fn list_products() -> &'static [Product] {
    Catalogue::builtin().all()
}

/// Built-in product by id.
pub fn get_product(id: &str) -> Option<&'static Product> {
    Catalogue::builtin().get(id)
}

/// Built-in products of one category.
pub fn list_by_category(category: ProductType) -> Vec<&'static Product> {
    Catalogue::builtin().by_category(category)
}

/// Options valid for a product type.
pub fn get_option_catalog(product_type: ProductType) -> OptionCatalog {
    OptionCatalog::resolve(product_type)
}

/// Empty selection for the generic configurator.
pub fn create_selection(product_type: ProductType) -> Selection {
    Selection::new(product_type)
}

/// Price a selection with the default rules.
pub fn compute_price(
    selection: &Selection,
    mode: PricingMode,
) -> Result<PriceBreakdown, ConfiguratorError> {
    PricingRules::default().compute(selection, mode)
}

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::ConfiguratorError;
    pub use crate::ids::*;
    pub use crate::money::{Currency, Locale, Money};
    pub use crate::{
        compute_price, create_selection, get_option_catalog, get_product, list_by_category,
        list_products,
    };

    // Catalog
    pub use crate::catalog::{Catalogue, Product, ProductType};

    // Options
    pub use crate::options::{OptionCatalog, OptionDefinition, OptionKind};

    // Pricing
    pub use crate::pricing::{PriceBreakdown, PricingMode, PricingRules};

    // Selection
    pub use crate::selection::{
        update_selection, Axis, ConfiguratorSession, Dimension, EditingState, Selection,
        SelectionPatch, WizardStep,
    };

    // Order
    pub use crate::order::{CartItem, Customizations, Order, OrderStatus};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_boundary() {
        assert_eq!(list_products().len(), 6);
        assert_eq!(get_product("volet-2").unwrap().category, ProductType::Shutter);
        assert!(get_product("volet-9").is_none());
        assert_eq!(list_by_category(ProductType::Door).len(), 2);
    }

    #[test]
    fn test_create_and_price() {
        let selection = create_selection(ProductType::Door);
        let breakdown = compute_price(&selection, PricingMode::FlatTier).unwrap();
        assert_eq!(breakdown.total, Money::eur(200));
    }
}
