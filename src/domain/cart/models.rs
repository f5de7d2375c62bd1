//! Cart Models

use jiff::civil::DateTime;
use serde::{Deserialize, Serialize};

use crate::{domain::products::ProductId, session::UserId};

pub type CartItemId = i64;

/// A product line in a user's cart, flattened with product details.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    pub id: CartItemId,
    pub user_id: Option<UserId>,
    pub user_name: Option<String>,
    pub product_id: ProductId,
    pub product_name: Option<String>,
    pub product_description: Option<String>,
    pub product_price: Option<f64>,
    pub product_image_url: Option<String>,
    pub product_stock_quantity: Option<i64>,
    pub quantity: u32,
    pub created_at: Option<DateTime>,
    pub updated_at: Option<DateTime>,
}

impl CartItem {
    /// Line total at the current product price.
    #[must_use]
    pub fn subtotal(&self) -> f64 {
        self.product_price.unwrap_or_default() * f64::from(self.quantity)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddToCart {
    pub user_id: UserId,
    pub product_id: ProductId,
    pub quantity: u32,
}

impl AddToCart {
    /// Add a single unit of `product_id`.
    #[must_use]
    pub const fn one(user_id: UserId, product_id: ProductId) -> Self {
        Self {
            user_id,
            product_id,
            quantity: 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub(crate) struct QuantityUpdate {
    pub quantity: u32,
}
