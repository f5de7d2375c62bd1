//! Reviews service.

use std::sync::Arc;

use async_trait::async_trait;
use mockall::automock;
use serde_json::Value;

use crate::{
    domain::{
        ServiceError,
        products::ProductId,
        reviews::{
            Envelope, PageRequest, ReportRequest, Review, ReviewFilter, ReviewId, ReviewPage,
            ReviewRequest, ReviewSummary,
        },
    },
    gateway::{ApiRequest, Gateway},
};

#[derive(Debug, Clone)]
pub struct HttpReviewsService {
    gateway: Arc<Gateway>,
}

impl HttpReviewsService {
    #[must_use]
    pub fn new(gateway: Arc<Gateway>) -> Self {
        Self { gateway }
    }
}

#[async_trait]
impl ReviewsService for HttpReviewsService {
    async fn create_review(
        &self,
        product: ProductId,
        review: ReviewRequest,
    ) -> Result<Review, ServiceError> {
        let envelope: Envelope<Review> = self
            .gateway
            .post(&format!("/reviews/products/{product}"), &review)
            .await?;

        envelope.into_data()
    }

    async fn update_review(
        &self,
        id: ReviewId,
        review: ReviewRequest,
    ) -> Result<Review, ServiceError> {
        let envelope: Envelope<Review> = self
            .gateway
            .put(&format!("/reviews/{id}"), &review)
            .await?;

        envelope.into_data()
    }

    async fn delete_review(&self, id: ReviewId) -> Result<(), ServiceError> {
        let envelope: Envelope<Value> = self.gateway.delete(&format!("/reviews/{id}")).await?;

        envelope.into_optional().map(|_| ())
    }

    async fn product_reviews(
        &self,
        product: ProductId,
        page: PageRequest,
    ) -> Result<ReviewPage, ServiceError> {
        let request = ApiRequest::get(format!("/reviews/products/{product}"))
            .query("page", page.page)
            .query("size", page.size);

        let envelope: Envelope<Vec<Review>> = self.gateway.send(request).await?;

        envelope.into_page(page)
    }

    async fn review_summary(&self, product: ProductId) -> Result<ReviewSummary, ServiceError> {
        let envelope: Envelope<ReviewSummary> = self
            .gateway
            .get(&format!("/reviews/products/{product}/summary"))
            .await?;

        envelope.into_data()
    }

    async fn my_reviews(&self) -> Result<Vec<Review>, ServiceError> {
        let envelope: Envelope<Vec<Review>> = self.gateway.get("/reviews/users/me").await?;

        Ok(envelope.into_optional()?.unwrap_or_default())
    }

    async fn my_product_review(&self, product: ProductId) -> Result<Option<Review>, ServiceError> {
        let envelope: Envelope<Review> = self
            .gateway
            .get(&format!("/reviews/products/{product}/my-review"))
            .await?;

        envelope.into_optional()
    }

    async fn like_review(&self, id: ReviewId) -> Result<Review, ServiceError> {
        let envelope: Envelope<Review> = self
            .gateway
            .send(ApiRequest::post(format!("/reviews/enhanced/{id}/like")))
            .await?;

        envelope.into_data()
    }

    async fn unlike_review(&self, id: ReviewId) -> Result<Review, ServiceError> {
        let envelope: Envelope<Review> = self
            .gateway
            .delete(&format!("/reviews/enhanced/{id}/like"))
            .await?;

        envelope.into_data()
    }

    async fn report_review(&self, id: ReviewId, reason: &str) -> Result<(), ServiceError> {
        let envelope: Envelope<Value> = self
            .gateway
            .post(
                &format!("/reviews/enhanced/{id}/report"),
                &ReportRequest { reason },
            )
            .await?;

        envelope.into_optional().map(|_| ())
    }

    async fn filtered_reviews(
        &self,
        product: ProductId,
        filter: ReviewFilter,
        page: PageRequest,
    ) -> Result<ReviewPage, ServiceError> {
        let request = ApiRequest::get(format!("/reviews/enhanced/products/{product}/filtered"))
            .query("page", page.page)
            .query("size", page.size);

        let envelope: Envelope<Vec<Review>> = self.gateway.send(filter.apply(request)).await?;

        envelope.into_page(page)
    }
}

#[automock]
#[async_trait]
pub trait ReviewsService: Send + Sync {
    async fn create_review(
        &self,
        product: ProductId,
        review: ReviewRequest,
    ) -> Result<Review, ServiceError>;

    async fn update_review(
        &self,
        id: ReviewId,
        review: ReviewRequest,
    ) -> Result<Review, ServiceError>;

    async fn delete_review(&self, id: ReviewId) -> Result<(), ServiceError>;

    async fn product_reviews(
        &self,
        product: ProductId,
        page: PageRequest,
    ) -> Result<ReviewPage, ServiceError>;

    /// Average rating and per-star counts for a product.
    async fn review_summary(&self, product: ProductId) -> Result<ReviewSummary, ServiceError>;

    /// Reviews written by the logged-in user.
    async fn my_reviews(&self) -> Result<Vec<Review>, ServiceError>;

    /// The logged-in user's review of `product`, if they wrote one.
    async fn my_product_review(&self, product: ProductId) -> Result<Option<Review>, ServiceError>;

    async fn like_review(&self, id: ReviewId) -> Result<Review, ServiceError>;

    async fn unlike_review(&self, id: ReviewId) -> Result<Review, ServiceError>;

    async fn report_review(&self, id: ReviewId, reason: &str) -> Result<(), ServiceError>;

    async fn filtered_reviews(
        &self,
        product: ProductId,
        filter: ReviewFilter,
        page: PageRequest,
    ) -> Result<ReviewPage, ServiceError>;
}
