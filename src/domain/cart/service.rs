//! Cart service.

use std::sync::Arc;

use async_trait::async_trait;
use mockall::automock;

use crate::{
    domain::{
        ServiceError,
        cart::{AddToCart, CartItem, CartItemId, QuantityUpdate},
    },
    gateway::Gateway,
    session::UserId,
};

#[derive(Debug, Clone)]
pub struct HttpCartService {
    gateway: Arc<Gateway>,
}

impl HttpCartService {
    #[must_use]
    pub fn new(gateway: Arc<Gateway>) -> Self {
        Self { gateway }
    }
}

#[async_trait]
impl CartService for HttpCartService {
    async fn cart_items(&self, user: &UserId) -> Result<Vec<CartItem>, ServiceError> {
        Ok(self.gateway.get(&format!("/cart/user/{user}")).await?)
    }

    async fn add_to_cart(&self, item: AddToCart) -> Result<CartItem, ServiceError> {
        Ok(self.gateway.post("/cart", &item).await?)
    }

    async fn update_quantity(
        &self,
        id: CartItemId,
        quantity: u32,
    ) -> Result<CartItem, ServiceError> {
        Ok(self
            .gateway
            .put(&format!("/cart/{id}"), &QuantityUpdate { quantity })
            .await?)
    }

    async fn remove_from_cart(&self, id: CartItemId) -> Result<(), ServiceError> {
        Ok(self.gateway.delete(&format!("/cart/{id}")).await?)
    }

    async fn clear_cart(&self, user: &UserId) -> Result<(), ServiceError> {
        Ok(self.gateway.delete(&format!("/cart/user/{user}")).await?)
    }

    async fn item_count(&self, user: &UserId) -> Result<u64, ServiceError> {
        Ok(self.gateway.get(&format!("/cart/user/{user}/count")).await?)
    }

    async fn total(&self, user: &UserId) -> Result<f64, ServiceError> {
        Ok(self.gateway.get(&format!("/cart/user/{user}/total")).await?)
    }
}

#[automock]
#[async_trait]
pub trait CartService: Send + Sync {
    async fn cart_items(&self, user: &UserId) -> Result<Vec<CartItem>, ServiceError>;

    async fn add_to_cart(&self, item: AddToCart) -> Result<CartItem, ServiceError>;

    async fn update_quantity(
        &self,
        id: CartItemId,
        quantity: u32,
    ) -> Result<CartItem, ServiceError>;

    async fn remove_from_cart(&self, id: CartItemId) -> Result<(), ServiceError>;

    /// Remove every line from the user's cart.
    async fn clear_cart(&self, user: &UserId) -> Result<(), ServiceError>;

    /// Number of lines in the user's cart.
    async fn item_count(&self, user: &UserId) -> Result<u64, ServiceError>;

    /// Sum of all line totals.
    async fn total(&self, user: &UserId) -> Result<f64, ServiceError>;
}
