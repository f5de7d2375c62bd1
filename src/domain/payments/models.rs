//! Payment Models

use jiff::civil::DateTime;
use serde::{Deserialize, Serialize};

use crate::domain::orders::OrderId;

/// Publishable widget key used when the backend cannot supply one.
pub const FALLBACK_CLIENT_KEY: &str = "test_ck_D5GePWvyJnrK0W0k6q8gLzN97Eoq";

pub type PaymentId = i64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentStatus {
    Pending,
    Approved,
    Canceled,
    Failed,
    Refunded,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentMethod {
    #[default]
    Card,
    BankTransfer,
    VirtualAccount,
    MobilePhone,
    KakaoPay,
    NaverPay,
    TossPay,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    pub id: PaymentId,
    pub order_id: Option<OrderId>,
    pub payment_key: Option<String>,
    pub order_id_string: Option<String>,
    pub amount: f64,
    pub status: Option<PaymentStatus>,
    pub method: Option<PaymentMethod>,
    pub payment_provider: Option<String>,
    pub approved_at: Option<DateTime>,
    pub canceled_at: Option<DateTime>,
    pub failure_reason: Option<String>,
    pub created_at: Option<DateTime>,
    pub updated_at: Option<DateTime>,
}

/// Failure reported back by the payment widget's fail redirect.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentFailure {
    pub code: String,
    pub message: String,
    pub order_id: String,
}

/// Order details needed to open the payment widget.
#[derive(Debug, Clone, PartialEq)]
pub struct Checkout {
    pub order_number: String,
    pub order_name: String,
    pub total_amount: f64,
    pub customer_name: String,
    pub customer_email: String,
    pub method: PaymentMethod,
}

/// Everything the payment provider's widget is handed.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentWidgetRequest {
    pub client_key: String,
    pub method: PaymentMethod,
    pub amount: f64,
    pub order_id: String,
    pub order_name: String,
    pub customer_name: String,
    pub customer_email: String,
    pub success_url: String,
    pub fail_url: String,
}

impl PaymentWidgetRequest {
    #[must_use]
    pub fn new(client_key: String, checkout: Checkout, app_origin: &str) -> Self {
        let origin = app_origin.trim_end_matches('/');

        Self {
            client_key,
            method: checkout.method,
            amount: checkout.total_amount,
            order_id: checkout.order_number,
            order_name: checkout.order_name,
            customer_name: checkout.customer_name,
            customer_email: checkout.customer_email,
            success_url: format!("{origin}/payment/success"),
            fail_url: format!("{origin}/payment/fail"),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ClientKeyBody {
    pub client_key: Option<String>,
    pub data: Option<Box<ClientKeyBody>>,
}

impl ClientKeyBody {
    pub(crate) fn into_key(self) -> Option<String> {
        self.client_key
            .filter(|key| !key.trim().is_empty())
            .or_else(|| self.data.and_then(|data| data.into_key()))
    }
}
