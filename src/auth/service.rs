//! Auth service.

use std::sync::Arc;

use async_trait::async_trait;
use mockall::automock;
use serde_json::Value;
use tracing::{info, warn};

use crate::{
    auth::{AuthError, AuthResponse, LoginRequest, SignupRequest},
    gateway::Gateway,
    session::{Session, SessionStore},
};

#[derive(Debug, Clone)]
pub struct HttpAuthService {
    gateway: Arc<Gateway>,
}

impl HttpAuthService {
    #[must_use]
    pub fn new(gateway: Arc<Gateway>) -> Self {
        Self { gateway }
    }

    fn sessions(&self) -> &SessionStore {
        self.gateway.sessions()
    }

    fn establish(&self, response: AuthResponse) -> Result<Session, AuthError> {
        let session = Session::try_from(response)?;

        self.sessions().save(&session)?;

        info!(
            console = ?self.sessions().console(),
            user = %session.id,
            role = %session.role,
            "session established"
        );

        Ok(session)
    }

    fn discard(&self) {
        if let Err(source) = self.sessions().clear() {
            warn!("failed to clear session: {source}");
        }
    }
}

#[async_trait]
impl AuthService for HttpAuthService {
    async fn login(&self, email: &str, password: &str) -> Result<Session, AuthError> {
        let response: AuthResponse = self
            .gateway
            .post_public("/auth/login", &LoginRequest::new(email, password))
            .await?;

        self.establish(response)
    }

    async fn signup(&self, mut request: SignupRequest) -> Result<Session, AuthError> {
        if let Some(role) = self.sessions().console().signup_role() {
            request.role = Some(role);
        }

        let response: AuthResponse = self.gateway.post_public("/auth/signup", &request).await?;

        self.establish(response)
    }

    fn logout(&self) -> Result<(), AuthError> {
        self.sessions().clear()?;

        info!(console = ?self.sessions().console(), "logged out");

        Ok(())
    }

    async fn validate_token(&self) -> bool {
        if self.sessions().current().is_none() {
            return false;
        }

        match self.gateway.get::<Value>("/auth/validate").await {
            Ok(Value::Null | Value::Bool(false)) => {
                warn!("token validation returned no identity");
                self.discard();

                false
            }
            Ok(_) => true,
            Err(source) => {
                warn!("token validation failed: {source}");
                self.discard();

                false
            }
        }
    }

    fn current_user(&self) -> Option<Session> {
        self.sessions().current()
    }

    fn is_logged_in(&self) -> bool {
        self.sessions().is_authenticated()
    }

    fn is_admin(&self) -> bool {
        self.sessions().is_privileged()
    }
}

#[automock]
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Exchange credentials for a session and persist it.
    async fn login(&self, email: &str, password: &str) -> Result<Session, AuthError>;

    /// Register an account and persist the resulting session.
    async fn signup(&self, request: SignupRequest) -> Result<Session, AuthError>;

    /// End the current session.
    fn logout(&self) -> Result<(), AuthError>;

    /// Ask the backend whether the stored token is still accepted.
    ///
    /// Returns `false` without a network call when no session exists. Any
    /// failure evicts the session.
    async fn validate_token(&self) -> bool;

    fn current_user(&self) -> Option<Session>;

    fn is_logged_in(&self) -> bool;

    fn is_admin(&self) -> bool;
}
