//! Cart and order data shapes.
//!
//! These types describe what a finished configuration turns into. There is
//! no cart or order workflow here; the only producer is
//! [`Selection::to_cart_item`].

use crate::error::ConfiguratorError;
use crate::ids::{OrderId, ProductId};
use crate::money::Money;
use crate::selection::Selection;
use serde::{Deserialize, Serialize};

/// Options recorded on a cart line.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customizations {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub material: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Width in centimeters.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    /// Height in centimeters.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    /// Add-on ids.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<String>,
}

/// A configured product in the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    pub product_id: ProductId,
    pub quantity: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customizations: Option<Customizations>,
}

/// Order lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    /// Order placed, awaiting confirmation.
    #[default]
    Pending,
    Confirmed,
    /// Being manufactured in the workshop.
    InProduction,
    Shipped,
    Delivered,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Confirmed => "confirmed",
            OrderStatus::InProduction => "in_production",
            OrderStatus::Shipped => "shipped",
            OrderStatus::Delivered => "delivered",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "En attente",
            OrderStatus::Confirmed => "Confirmé",
            OrderStatus::InProduction => "En production",
            OrderStatus::Shipped => "Expédié",
            OrderStatus::Delivered => "Livré",
        }
    }

    /// Check if order is in a terminal state.
    pub fn is_terminal(&self) -> bool {
        matches!(self, OrderStatus::Delivered)
    }
}

/// A placed order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub items: Vec<CartItem>,
    pub total_price: Money,
    /// Unix timestamp of creation.
    pub created_at: i64,
    pub status: OrderStatus,
    /// Free-text note attached to the current status.
    #[serde(default)]
    pub status_details: String,
    pub delivery_address: String,
}

impl Order {
    /// New pending order.
    pub fn new(items: Vec<CartItem>, total_price: Money, delivery_address: impl Into<String>) -> Self {
        Self {
            id: OrderId::new(generate_order_number()),
            items,
            total_price,
            created_at: current_timestamp(),
            status: OrderStatus::Pending,
            status_details: String::new(),
            delivery_address: delivery_address.into(),
        }
    }

    /// Total number of configured products.
    pub fn item_count(&self) -> u32 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    pub fn set_status(&mut self, status: OrderStatus, details: impl Into<String>) {
        self.status = status;
        self.status_details = details.into();
    }
}

impl Selection {
    /// Cart line for the product bound to this selection.
    ///
    /// Tier dimensions carry no measurements, so width and height are only
    /// filled for measured selections.
    pub fn to_cart_item(&self, quantity: u32) -> Result<CartItem, ConfiguratorError> {
        let product = self.product().ok_or(ConfiguratorError::ProductRequired)?;
        let (width, height) = match self.dimension().and_then(|d| d.measurements()) {
            Some((w, h)) => (Some(w), Some(h)),
            None => (None, None),
        };
        Ok(CartItem {
            product_id: product.id.clone(),
            quantity,
            customizations: Some(Customizations {
                material: self.material().map(|m| m.to_string()),
                color: self.color().map(|c| c.to_string()),
                width,
                height,
                options: self.add_ons().iter().map(|a| a.to_string()).collect(),
            }),
        })
    }
}

fn generate_order_number() -> String {
    format!("CMD-{}", current_timestamp())
}

/// Get current Unix timestamp.
fn current_timestamp() -> i64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Catalogue, ProductType};
    use crate::selection::Axis;

    #[test]
    fn test_cart_item_from_selection() {
        let product = Catalogue::builtin().get("volet-1").unwrap();
        let mut selection = Selection::for_product(product);
        selection.set_dimension(Axis::Width, 160);
        selection.toggle_add_on("motorisation").unwrap();

        let item = selection.to_cart_item(2).unwrap();
        assert_eq!(item.product_id, "volet-1");
        assert_eq!(item.quantity, 2);
        let custom = item.customizations.unwrap();
        assert_eq!(custom.material.as_deref(), Some("aluminium"));
        assert_eq!(custom.color.as_deref(), Some("blanc"));
        assert_eq!((custom.width, custom.height), (Some(160), Some(100)));
        assert_eq!(custom.options, vec!["motorisation".to_string()]);
    }

    #[test]
    fn test_cart_item_requires_product() {
        let selection = Selection::new(ProductType::Door);
        assert_eq!(
            selection.to_cart_item(1).unwrap_err(),
            ConfiguratorError::ProductRequired
        );
    }

    #[test]
    fn test_order_lifecycle() {
        let product = Catalogue::builtin().get("porte-1").unwrap();
        let item = Selection::for_product(product).to_cart_item(3).unwrap();
        let mut order = Order::new(vec![item], Money::eur_cents(269997), "12 rue des Artisans, Lyon");
        assert_eq!(order.status, OrderStatus::Pending);
        assert_eq!(order.item_count(), 3);
        assert!(order.id.as_str().starts_with("CMD-"));

        order.set_status(OrderStatus::InProduction, "Atelier de Lyon");
        assert_eq!(order.status.display_name(), "En production");
        assert!(!order.status.is_terminal());
    }

    #[test]
    fn test_order_status_serde() {
        assert_eq!(
            serde_json::to_string(&OrderStatus::InProduction).unwrap(),
            "\"in_production\""
        );
    }
}
