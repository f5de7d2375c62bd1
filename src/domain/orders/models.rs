//! Order Models

use std::fmt::{Display, Formatter, Result as FmtResult};

use jiff::civil::DateTime;
use serde::{Deserialize, Serialize};

use crate::{
    domain::products::{Product, ProductId},
    session::UserId,
};

pub type OrderId = i64;

/// Fulfilment status as tracked by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    Pending,
    Confirmed,
    Shipped,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    pub const ALL: [Self; 5] = [
        Self::Pending,
        Self::Confirmed,
        Self::Shipped,
        Self::Delivered,
        Self::Cancelled,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Confirmed => "CONFIRMED",
            Self::Shipped => "SHIPPED",
            Self::Delivered => "DELIVERED",
            Self::Cancelled => "CANCELLED",
        }
    }

    /// Whether no further transitions are expected.
    #[must_use]
    pub const fn is_final(self) -> bool {
        matches!(self, Self::Delivered | Self::Cancelled)
    }
}

impl Display for OrderStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub id: Option<i64>,
    pub product: Option<Product>,
    pub quantity: u32,
    pub price: f64,
    pub total_price: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: OrderId,
    pub order_number: Option<String>,
    pub status: OrderStatus,
    #[serde(default)]
    pub total_amount: f64,
    #[serde(default)]
    pub order_items: Vec<OrderItem>,
    pub shipping_address: Option<String>,
    pub created_at: Option<DateTime>,
    pub updated_at: Option<DateTime>,
}

/// One requested product line of a new order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderLine {
    pub product_id: ProductId,
    pub quantity: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShippingInfo {
    pub name: String,
    pub phone: String,
    pub address: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Pending order created ahead of a payment handoff.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    pub user_id: UserId,
    pub order_items: Vec<OrderLine>,
    pub shipping_info: ShippingInfo,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub(crate) struct StatusUpdate {
    pub status: OrderStatus,
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn status_uses_wire_spelling() -> TestResult {
        for status in OrderStatus::ALL {
            let encoded = serde_json::to_string(&status)?;

            assert_eq!(encoded, format!("\"{status}\""));
            assert_eq!(serde_json::from_str::<OrderStatus>(&encoded)?, status);
        }

        Ok(())
    }

    #[test]
    fn create_request_matches_backend_shape() -> TestResult {
        let request = CreateOrderRequest {
            user_id: UserId::from(7),
            order_items: vec![OrderLine {
                product_id: 3,
                quantity: 2,
            }],
            shipping_info: ShippingInfo {
                name: "Kim".to_string(),
                phone: "010-1234-5678".to_string(),
                address: "Seoul".to_string(),
                notes: None,
            },
        };

        assert_eq!(
            serde_json::to_value(&request)?,
            serde_json::json!({
                "userId": 7,
                "orderItems": [{ "productId": 3, "quantity": 2 }],
                "shippingInfo": { "name": "Kim", "phone": "010-1234-5678", "address": "Seoul" },
            })
        );

        Ok(())
    }
}
