//! Wishlist service.

use std::sync::Arc;

use async_trait::async_trait;
use mockall::automock;

use crate::{
    domain::{
        ServiceError,
        products::ProductId,
        wishlist::{Toggled, WishlistAck, WishlistCount, WishlistEntry, WishlistStatus},
    },
    gateway::{ApiRequest, Gateway},
    session::UserId,
};

#[derive(Debug, Clone)]
pub struct HttpWishlistService {
    gateway: Arc<Gateway>,
}

impl HttpWishlistService {
    #[must_use]
    pub fn new(gateway: Arc<Gateway>) -> Self {
        Self { gateway }
    }

    async fn acknowledge(&self, request: ApiRequest) -> Result<WishlistAck, ServiceError> {
        let ack: WishlistAck = self.gateway.send(request).await?;

        if !ack.success {
            return Err(ServiceError::Rejected {
                message: ack.message,
            });
        }

        Ok(ack)
    }
}

fn with_pair(request: ApiRequest, user: &UserId, product: ProductId) -> ApiRequest {
    request.query("userId", user).query("productId", product)
}

#[async_trait]
impl WishlistService for HttpWishlistService {
    async fn add(&self, user: &UserId, product: ProductId) -> Result<WishlistEntry, ServiceError> {
        let ack = self
            .acknowledge(with_pair(ApiRequest::post("/wishlist/add"), user, product))
            .await?;

        ack.wishlist.ok_or(ServiceError::MissingData("wishlist"))
    }

    async fn remove(&self, user: &UserId, product: ProductId) -> Result<(), ServiceError> {
        self.acknowledge(with_pair(
            ApiRequest::delete("/wishlist/remove"),
            user,
            product,
        ))
        .await?;

        Ok(())
    }

    async fn toggle(&self, user: &UserId, product: ProductId) -> Result<Toggled, ServiceError> {
        let ack = self
            .acknowledge(with_pair(ApiRequest::post("/wishlist/toggle"), user, product))
            .await?;

        match ack.added {
            Some(true) => Ok(Toggled::Added),
            Some(false) => Ok(Toggled::Removed),
            None => Err(ServiceError::MissingData("added")),
        }
    }

    async fn user_wishlist(&self, user: &UserId) -> Result<Vec<WishlistEntry>, ServiceError> {
        Ok(self.gateway.get(&format!("/wishlist/user/{user}")).await?)
    }

    async fn contains(&self, user: &UserId, product: ProductId) -> Result<bool, ServiceError> {
        let request = with_pair(ApiRequest::get("/wishlist/check").public(), user, product);

        let status: WishlistStatus = self.gateway.send(request).await?;

        Ok(status.is_in_wishlist)
    }

    async fn count(&self, user: &UserId) -> Result<u64, ServiceError> {
        let count: WishlistCount = self
            .gateway
            .get_public(&format!("/wishlist/count/{user}"))
            .await?;

        Ok(count.count)
    }
}

#[automock]
#[async_trait]
pub trait WishlistService: Send + Sync {
    async fn add(&self, user: &UserId, product: ProductId) -> Result<WishlistEntry, ServiceError>;

    async fn remove(&self, user: &UserId, product: ProductId) -> Result<(), ServiceError>;

    /// Add `product` if absent, remove it otherwise.
    async fn toggle(&self, user: &UserId, product: ProductId) -> Result<Toggled, ServiceError>;

    async fn user_wishlist(&self, user: &UserId) -> Result<Vec<WishlistEntry>, ServiceError>;

    async fn contains(&self, user: &UserId, product: ProductId) -> Result<bool, ServiceError>;

    async fn count(&self, user: &UserId) -> Result<u64, ServiceError>;
}
