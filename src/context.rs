//! Client Context

use std::sync::Arc;

use thiserror::Error;

use crate::{
    auth::{AuthService, HttpAuthService},
    config::ClientConfig,
    domain::{
        cart::{CartService, HttpCartService},
        categories::{CategoriesService, HttpCategoriesService},
        orders::{HttpOrdersService, OrdersService},
        payments::{HttpPaymentsService, PaymentsService},
        products::{HttpProductsService, ProductsService},
        reviews::{HttpReviewsService, ReviewsService},
        wishlist::{HttpWishlistService, WishlistService},
    },
    gateway::{Gateway, HttpTransport, Navigator, Transport, TransportError},
    session::{Console, SessionStorage, SessionStore},
};

#[derive(Debug, Error)]
pub enum ClientInitError {
    #[error("failed to build HTTP transport")]
    Transport(#[source] TransportError),
}

/// One application instance: a single session store and gateway shared by
/// every service.
#[derive(Clone)]
pub struct ClientContext {
    pub gateway: Arc<Gateway>,
    pub auth: Arc<dyn AuthService>,
    pub products: Arc<dyn ProductsService>,
    pub categories: Arc<dyn CategoriesService>,
    pub cart: Arc<dyn CartService>,
    pub orders: Arc<dyn OrdersService>,
    pub reviews: Arc<dyn ReviewsService>,
    pub wishlist: Arc<dyn WishlistService>,
    pub payments: Arc<dyn PaymentsService>,
}

impl ClientContext {
    /// Build a context talking to the backend described by `config`.
    ///
    /// # Errors
    ///
    /// Returns an error when the HTTP client cannot be initialised.
    pub fn connect(
        config: &ClientConfig,
        console: Console,
        storage: Arc<dyn SessionStorage>,
        navigator: Arc<dyn Navigator>,
    ) -> Result<Self, ClientInitError> {
        let transport = HttpTransport::new(config).map_err(ClientInitError::Transport)?;

        Ok(Self::with_transport(
            config,
            console,
            storage,
            Arc::new(transport),
            navigator,
        ))
    }

    /// Build a context over an arbitrary transport.
    #[must_use]
    pub fn with_transport(
        config: &ClientConfig,
        console: Console,
        storage: Arc<dyn SessionStorage>,
        transport: Arc<dyn Transport>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        let sessions = Arc::new(SessionStore::new(storage, console));
        let gateway = Arc::new(Gateway::new(transport, sessions, navigator));

        Self {
            auth: Arc::new(HttpAuthService::new(gateway.clone())),
            products: Arc::new(HttpProductsService::new(gateway.clone())),
            categories: Arc::new(HttpCategoriesService::new(gateway.clone())),
            cart: Arc::new(HttpCartService::new(gateway.clone())),
            orders: Arc::new(HttpOrdersService::new(gateway.clone())),
            reviews: Arc::new(HttpReviewsService::new(gateway.clone())),
            wishlist: Arc::new(HttpWishlistService::new(gateway.clone())),
            payments: Arc::new(HttpPaymentsService::new(
                gateway.clone(),
                config.app_origin.clone(),
            )),
            gateway,
        }
    }

    #[must_use]
    pub fn sessions(&self) -> &Arc<SessionStore> {
        self.gateway.sessions()
    }
}

impl std::fmt::Debug for ClientContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientContext")
            .field("gateway", &self.gateway)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use reqwest::StatusCode;
    use serde_json::json;
    use testresult::TestResult;

    use crate::{
        gateway::{MockNavigator, MockTransport},
        session::{MemoryStorage, Role},
        test::helpers::{json_response, valid_session},
    };

    use super::*;

    #[tokio::test]
    async fn consoles_share_storage_but_not_sessions() -> TestResult {
        let storage = Arc::new(MemoryStorage::new());
        let config = ClientConfig::default();

        let storefront = ClientContext::with_transport(
            &config,
            Console::Storefront,
            storage.clone(),
            Arc::new(MockTransport::new()),
            Arc::new(MockNavigator::new()),
        );

        let admin = ClientContext::with_transport(
            &config,
            Console::Admin,
            storage,
            Arc::new(MockTransport::new()),
            Arc::new(MockNavigator::new()),
        );

        storefront.sessions().save(&valid_session(Role::Customer))?;

        assert!(storefront.auth.is_logged_in());
        assert!(!admin.auth.is_logged_in());

        Ok(())
    }

    #[tokio::test]
    async fn services_share_one_gateway() -> TestResult {
        let mut transport = MockTransport::new();

        transport
            .expect_execute()
            .once()
            .withf(|request| request.headers.contains_key(reqwest::header::AUTHORIZATION))
            .return_once(|_| Ok(json_response(StatusCode::OK, &json!(2))));

        let ctx = ClientContext::with_transport(
            &ClientConfig::default(),
            Console::Storefront,
            Arc::new(MemoryStorage::new()),
            Arc::new(transport),
            Arc::new(MockNavigator::new()),
        );

        ctx.sessions().save(&valid_session(Role::Customer))?;

        let count = ctx.cart.item_count(&crate::session::UserId::from(7)).await?;

        assert_eq!(count, 2);

        Ok(())
    }
}
