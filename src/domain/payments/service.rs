//! Payments service.

use std::sync::Arc;

use async_trait::async_trait;
use mockall::automock;
use serde_json::Value;
use tracing::{debug, warn};

use crate::{
    domain::{
        ServiceError,
        payments::{
            Checkout, ClientKeyBody, FALLBACK_CLIENT_KEY, Payment, PaymentFailure, PaymentId,
            PaymentWidgetRequest,
        },
    },
    gateway::{ApiRequest, Gateway},
    session::UserId,
};

#[derive(Debug, Clone)]
pub struct HttpPaymentsService {
    gateway: Arc<Gateway>,
    app_origin: String,
}

impl HttpPaymentsService {
    #[must_use]
    pub fn new(gateway: Arc<Gateway>, app_origin: impl Into<String>) -> Self {
        Self {
            gateway,
            app_origin: app_origin.into(),
        }
    }
}

#[async_trait]
impl PaymentsService for HttpPaymentsService {
    async fn client_key(&self) -> String {
        match self
            .gateway
            .get_public::<ClientKeyBody>("/payments/client-key")
            .await
        {
            Ok(body) => body.into_key().unwrap_or_else(|| {
                warn!("backend returned no client key; using fallback");

                FALLBACK_CLIENT_KEY.to_string()
            }),
            Err(source) => {
                warn!("failed to fetch client key; using fallback: {source}");

                FALLBACK_CLIENT_KEY.to_string()
            }
        }
    }

    async fn confirm_payment(
        &self,
        payment_key: &str,
        order_id: &str,
        amount: f64,
    ) -> Result<Payment, ServiceError> {
        debug!(order_id, amount, "confirming payment");

        let request = ApiRequest::post("/payments/confirm")
            .query("paymentKey", payment_key)
            .query("orderId", order_id)
            .query("amount", amount);

        Ok(self.gateway.send(request).await?)
    }

    async fn report_failure(&self, failure: PaymentFailure) -> Result<(), ServiceError> {
        let _ack: Value = self
            .gateway
            .post("/payments/webhook/fail", &failure)
            .await?;

        Ok(())
    }

    async fn payment_history(&self, user: &UserId) -> Result<Vec<Payment>, ServiceError> {
        Ok(self.gateway.get(&format!("/payments/user/{user}")).await?)
    }

    async fn payment_detail(&self, id: PaymentId) -> Result<Payment, ServiceError> {
        Ok(self.gateway.get(&format!("/payments/{id}")).await?)
    }

    async fn payment_by_key(&self, payment_key: &str) -> Result<Payment, ServiceError> {
        Ok(self
            .gateway
            .get(&format!("/payments/key/{payment_key}"))
            .await?)
    }

    async fn cancel_payment(
        &self,
        payment_key: &str,
        reason: &str,
    ) -> Result<Payment, ServiceError> {
        let request = ApiRequest::post(format!("/payments/{payment_key}/cancel"))
            .query("cancelReason", reason);

        Ok(self.gateway.send(request).await?)
    }

    async fn prepare_widget(&self, checkout: Checkout) -> PaymentWidgetRequest {
        let client_key = self.client_key().await;

        PaymentWidgetRequest::new(client_key, checkout, &self.app_origin)
    }
}

#[automock]
#[async_trait]
pub trait PaymentsService: Send + Sync {
    /// Publishable key for the payment widget. Falls back to the test key
    /// when the backend cannot provide one.
    async fn client_key(&self) -> String;

    /// Settle a payment after the widget's success redirect.
    async fn confirm_payment(
        &self,
        payment_key: &str,
        order_id: &str,
        amount: f64,
    ) -> Result<Payment, ServiceError>;

    /// Forward the widget's fail redirect to the backend.
    async fn report_failure(&self, failure: PaymentFailure) -> Result<(), ServiceError>;

    async fn payment_history(&self, user: &UserId) -> Result<Vec<Payment>, ServiceError>;

    async fn payment_detail(&self, id: PaymentId) -> Result<Payment, ServiceError>;

    async fn payment_by_key(&self, payment_key: &str) -> Result<Payment, ServiceError>;

    async fn cancel_payment(
        &self,
        payment_key: &str,
        reason: &str,
    ) -> Result<Payment, ServiceError>;

    /// Build the handoff for the payment widget.
    async fn prepare_widget(&self, checkout: Checkout) -> PaymentWidgetRequest;
}
