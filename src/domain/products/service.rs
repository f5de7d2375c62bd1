//! Products service.

use std::sync::Arc;

use async_trait::async_trait;
use mockall::automock;

use crate::{
    domain::{
        ServiceError,
        products::{Product, ProductDraft, ProductId, ProductSearch},
    },
    gateway::{ApiRequest, Gateway},
};

#[derive(Debug, Clone)]
pub struct HttpProductsService {
    gateway: Arc<Gateway>,
}

impl HttpProductsService {
    #[must_use]
    pub fn new(gateway: Arc<Gateway>) -> Self {
        Self { gateway }
    }
}

#[async_trait]
impl ProductsService for HttpProductsService {
    async fn list_products(&self) -> Result<Vec<Product>, ServiceError> {
        Ok(self.gateway.get_public("/products").await?)
    }

    async fn get_product(&self, id: ProductId) -> Result<Product, ServiceError> {
        Ok(self.gateway.get_public(&format!("/products/{id}")).await?)
    }

    async fn search_products(&self, search: ProductSearch) -> Result<Vec<Product>, ServiceError> {
        let request = search.apply(ApiRequest::get("/products/search").public());

        Ok(self.gateway.send(request).await?)
    }

    async fn create_product(&self, product: ProductDraft) -> Result<Product, ServiceError> {
        Ok(self.gateway.post("/products", &product).await?)
    }

    async fn update_product(
        &self,
        id: ProductId,
        product: ProductDraft,
    ) -> Result<Product, ServiceError> {
        Ok(self.gateway.put(&format!("/products/{id}"), &product).await?)
    }

    async fn delete_product(&self, id: ProductId) -> Result<(), ServiceError> {
        Ok(self.gateway.delete(&format!("/products/{id}")).await?)
    }
}

#[automock]
#[async_trait]
pub trait ProductsService: Send + Sync {
    /// Retrieves the whole catalogue.
    async fn list_products(&self) -> Result<Vec<Product>, ServiceError>;

    /// Retrieve a single product.
    async fn get_product(&self, id: ProductId) -> Result<Product, ServiceError>;

    async fn search_products(&self, search: ProductSearch) -> Result<Vec<Product>, ServiceError>;

    async fn create_product(&self, product: ProductDraft) -> Result<Product, ServiceError>;

    async fn update_product(
        &self,
        id: ProductId,
        product: ProductDraft,
    ) -> Result<Product, ServiceError>;

    async fn delete_product(&self, id: ProductId) -> Result<(), ServiceError>;
}

#[cfg(test)]
mod tests {
    use reqwest::{Method, StatusCode, header::AUTHORIZATION};
    use serde_json::json;
    use testresult::TestResult;

    use crate::{
        domain::products::CategoryRef,
        gateway::{GatewayError, MockTransport},
        session::Role,
        test::{
            context::TestGateway,
            helpers::{empty_response, json_response, valid_session},
        },
    };

    use super::*;

    #[tokio::test]
    async fn catalogue_is_readable_anonymously() -> TestResult {
        let mut transport = MockTransport::new();

        transport
            .expect_execute()
            .once()
            .withf(|request| request.path == "/products/3" && request.headers.is_empty())
            .return_once(|_| {
                Ok(json_response(
                    StatusCode::OK,
                    &json!({ "id": 3, "name": "Green Tea", "price": 12000.0 }),
                ))
            });

        let ctx = TestGateway::storefront(transport);

        let product = HttpProductsService::new(ctx.gateway.clone())
            .get_product(3)
            .await?;

        assert_eq!(product.name, "Green Tea");

        Ok(())
    }

    #[tokio::test]
    async fn search_forwards_filters_as_query() -> TestResult {
        let mut transport = MockTransport::new();

        transport
            .expect_execute()
            .once()
            .withf(|request| {
                request.path == "/products/search"
                    && request.query
                        == vec![
                            ("name".to_string(), "green tea".to_string()),
                        ]
            })
            .return_once(|_| Ok(json_response(StatusCode::OK, &json!([]))));

        let ctx = TestGateway::storefront(transport);

        let products = HttpProductsService::new(ctx.gateway.clone())
            .search_products(ProductSearch::by_name("green tea"))
            .await?;

        assert!(products.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn create_product_is_authenticated() -> TestResult {
        let mut transport = MockTransport::new();

        transport
            .expect_execute()
            .once()
            .withf(|request| {
                request.method == Method::POST
                    && request.headers.contains_key(AUTHORIZATION)
                    && request.body
                        == Some(json!({
                            "name": "Oolong",
                            "price": 15000.0,
                            "category": { "id": 1 },
                        }))
            })
            .return_once(|_| {
                Ok(json_response(
                    StatusCode::OK,
                    &json!({ "id": 9, "name": "Oolong", "price": 15000.0 }),
                ))
            });

        let ctx = TestGateway::storefront(transport);

        ctx.sessions.save(&valid_session(Role::Admin))?;

        let product = HttpProductsService::new(ctx.gateway.clone())
            .create_product(ProductDraft {
                name: "Oolong".to_string(),
                description: None,
                price: 15_000.0,
                image_url: None,
                stock_quantity: None,
                category: Some(CategoryRef { id: 1 }),
                is_active: None,
            })
            .await?;

        assert_eq!(product.id, 9);

        Ok(())
    }

    #[tokio::test]
    async fn forbidden_delete_propagates_status() -> TestResult {
        let mut transport = MockTransport::new();

        transport
            .expect_execute()
            .once()
            .return_once(|_| Ok(empty_response(StatusCode::FORBIDDEN)));

        let ctx = TestGateway::storefront(transport);

        ctx.sessions.save(&valid_session(Role::Customer))?;

        let result = HttpProductsService::new(ctx.gateway.clone())
            .delete_product(9)
            .await;

        assert!(matches!(
            result,
            Err(ServiceError::Gateway(GatewayError::Status {
                status: StatusCode::FORBIDDEN,
                ..
            }))
        ));
        assert!(ctx.sessions.is_authenticated());

        Ok(())
    }
}
