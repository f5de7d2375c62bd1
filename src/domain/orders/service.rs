//! Orders service.

use std::sync::Arc;

use async_trait::async_trait;
use mockall::automock;

use crate::{
    domain::{
        ServiceError,
        orders::{CreateOrderRequest, Order, OrderId, OrderStatus, StatusUpdate},
    },
    gateway::{ApiRequest, Gateway},
    session::UserId,
};

#[derive(Debug, Clone)]
pub struct HttpOrdersService {
    gateway: Arc<Gateway>,
}

impl HttpOrdersService {
    #[must_use]
    pub fn new(gateway: Arc<Gateway>) -> Self {
        Self { gateway }
    }
}

#[async_trait]
impl OrdersService for HttpOrdersService {
    async fn user_orders(&self, user: &UserId) -> Result<Vec<Order>, ServiceError> {
        Ok(self.gateway.get(&format!("/orders/user/{user}")).await?)
    }

    async fn get_order(&self, id: OrderId) -> Result<Order, ServiceError> {
        Ok(self.gateway.get(&format!("/orders/{id}")).await?)
    }

    async fn all_orders(&self) -> Result<Vec<Order>, ServiceError> {
        Ok(self.gateway.get("/orders").await?)
    }

    async fn orders_by_status(&self, status: OrderStatus) -> Result<Vec<Order>, ServiceError> {
        Ok(self.gateway.get(&format!("/orders/status/{status}")).await?)
    }

    async fn update_status(&self, id: OrderId, status: OrderStatus) -> Result<Order, ServiceError> {
        Ok(self
            .gateway
            .put(&format!("/orders/{id}/status"), &StatusUpdate { status })
            .await?)
    }

    async fn cancel_order(&self, id: OrderId) -> Result<(), ServiceError> {
        Ok(self.gateway.delete(&format!("/orders/{id}")).await?)
    }

    async fn confirm_order(&self, id: OrderId) -> Result<Order, ServiceError> {
        Ok(self
            .gateway
            .send(ApiRequest::post(format!("/orders/{id}/confirm")))
            .await?)
    }

    async fn create_for_payment(&self, request: CreateOrderRequest) -> Result<Order, ServiceError> {
        Ok(self.gateway.post("/orders/payment", &request).await?)
    }
}

#[automock]
#[async_trait]
pub trait OrdersService: Send + Sync {
    async fn user_orders(&self, user: &UserId) -> Result<Vec<Order>, ServiceError>;

    async fn get_order(&self, id: OrderId) -> Result<Order, ServiceError>;

    /// Every order in the shop. Admin only.
    async fn all_orders(&self) -> Result<Vec<Order>, ServiceError>;

    async fn orders_by_status(&self, status: OrderStatus) -> Result<Vec<Order>, ServiceError>;

    async fn update_status(&self, id: OrderId, status: OrderStatus) -> Result<Order, ServiceError>;

    async fn cancel_order(&self, id: OrderId) -> Result<(), ServiceError>;

    /// Mark a paid order as confirmed.
    async fn confirm_order(&self, id: OrderId) -> Result<Order, ServiceError>;

    /// Create a pending order that a payment will later settle.
    async fn create_for_payment(&self, request: CreateOrderRequest) -> Result<Order, ServiceError>;
}
