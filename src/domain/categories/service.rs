//! Categories service.

use std::sync::Arc;

use async_trait::async_trait;
use mockall::automock;

use crate::{
    domain::{
        ServiceError,
        categories::{Category, CategoryDraft, CategoryId},
    },
    gateway::Gateway,
};

#[derive(Debug, Clone)]
pub struct HttpCategoriesService {
    gateway: Arc<Gateway>,
}

impl HttpCategoriesService {
    #[must_use]
    pub fn new(gateway: Arc<Gateway>) -> Self {
        Self { gateway }
    }
}

#[async_trait]
impl CategoriesService for HttpCategoriesService {
    async fn list_categories(&self) -> Result<Vec<Category>, ServiceError> {
        Ok(self.gateway.get_public("/categories").await?)
    }

    async fn list_active_categories(&self) -> Result<Vec<Category>, ServiceError> {
        Ok(self.gateway.get_public("/categories/active").await?)
    }

    async fn get_category(&self, id: CategoryId) -> Result<Category, ServiceError> {
        Ok(self.gateway.get_public(&format!("/categories/{id}")).await?)
    }

    async fn create_category(&self, category: CategoryDraft) -> Result<Category, ServiceError> {
        Ok(self.gateway.post("/categories", &category).await?)
    }

    async fn update_category(
        &self,
        id: CategoryId,
        category: CategoryDraft,
    ) -> Result<Category, ServiceError> {
        Ok(self
            .gateway
            .put(&format!("/categories/{id}"), &category)
            .await?)
    }

    async fn delete_category(&self, id: CategoryId) -> Result<(), ServiceError> {
        Ok(self.gateway.delete(&format!("/categories/{id}")).await?)
    }
}

#[automock]
#[async_trait]
pub trait CategoriesService: Send + Sync {
    async fn list_categories(&self) -> Result<Vec<Category>, ServiceError>;

    /// Categories currently shown in the storefront.
    async fn list_active_categories(&self) -> Result<Vec<Category>, ServiceError>;

    async fn get_category(&self, id: CategoryId) -> Result<Category, ServiceError>;

    async fn create_category(&self, category: CategoryDraft) -> Result<Category, ServiceError>;

    async fn update_category(
        &self,
        id: CategoryId,
        category: CategoryDraft,
    ) -> Result<Category, ServiceError>;

    async fn delete_category(&self, id: CategoryId) -> Result<(), ServiceError>;
}
