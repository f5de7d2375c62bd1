//! API gateway: the single chokepoint for every backend call.

use std::{fmt, sync::Arc};

use reqwest::{
    StatusCode,
    header::{AUTHORIZATION, HeaderMap, HeaderValue},
};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use tracing::{debug, error, info, warn};

use crate::{
    gateway::{
        Access, ApiRequest, GatewayError, LOGIN_PATH, Navigator, OutgoingRequest, Transport,
        TransportResponse,
    },
    session::SessionStore,
};

/// Attaches credentials to outgoing calls and reacts to authorization
/// failures.
///
/// One gateway is built per application instance; domain services share it
/// through an `Arc`.
#[derive(Clone)]
pub struct Gateway {
    transport: Arc<dyn Transport>,
    sessions: Arc<SessionStore>,
    navigator: Arc<dyn Navigator>,
}

impl Gateway {
    #[must_use]
    pub fn new(
        transport: Arc<dyn Transport>,
        sessions: Arc<SessionStore>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        Self {
            transport,
            sessions,
            navigator,
        }
    }

    #[must_use]
    pub fn sessions(&self) -> &Arc<SessionStore> {
        &self.sessions
    }

    /// Dispatch `request` and decode a successful response body into `T`.
    ///
    /// An empty success body decodes as JSON `null`, so `()` and `Option<_>`
    /// are valid targets for endpoints that return nothing.
    ///
    /// # Errors
    ///
    /// - [`GatewayError::Unauthorized`] when an authenticated call is
    ///   rejected with 401; the session is evicted and the navigator sent to
    ///   the login view before this returns.
    /// - [`GatewayError::Status`] for every other non-success status.
    /// - [`GatewayError::Network`] when no response arrived in time.
    /// - [`GatewayError::Decode`] when the success body does not match `T`.
    pub async fn send<T: DeserializeOwned>(&self, request: ApiRequest) -> Result<T, GatewayError> {
        let access = request.access;
        let method = request.method.clone();
        let path = request.path.clone();

        let outgoing = self.prepare(request)?;

        let response = match self.transport.execute(outgoing).await {
            Ok(response) => response,
            Err(source) => {
                error!(%method, path = %path, ?access, "request failed without a response: {source}");

                return Err(GatewayError::Network(source));
            }
        };

        let TransportResponse { status, body } = response;

        if status.is_success() {
            debug!(%method, path = %path, ?access, %status, "request succeeded");

            return decode(&body);
        }

        if status == StatusCode::UNAUTHORIZED && access == Access::Authenticated {
            info!(%method, path = %path, "credentials rejected; ending session");

            self.evict();

            return Err(GatewayError::Unauthorized);
        }

        let message = error_message(&body);

        if status.is_server_error() {
            error!(%method, path = %path, ?access, %status, ?message, "request failed");
        } else {
            warn!(%method, path = %path, ?access, %status, ?message, "request rejected");
        }

        Err(GatewayError::Status { status, message })
    }

    /// # Errors
    ///
    /// See [`Gateway::send`].
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, GatewayError> {
        self.send(ApiRequest::get(path)).await
    }

    /// # Errors
    ///
    /// See [`Gateway::send`].
    pub async fn get_public<T: DeserializeOwned>(&self, path: &str) -> Result<T, GatewayError> {
        self.send(ApiRequest::get(path).public()).await
    }

    /// # Errors
    ///
    /// See [`Gateway::send`].
    pub async fn post<B, T>(&self, path: &str, body: &B) -> Result<T, GatewayError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.send(ApiRequest::post(path).json(body)?).await
    }

    /// # Errors
    ///
    /// See [`Gateway::send`].
    pub async fn post_public<B, T>(&self, path: &str, body: &B) -> Result<T, GatewayError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.send(ApiRequest::post(path).public().json(body)?).await
    }

    /// # Errors
    ///
    /// See [`Gateway::send`].
    pub async fn put<B, T>(&self, path: &str, body: &B) -> Result<T, GatewayError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.send(ApiRequest::put(path).json(body)?).await
    }

    /// # Errors
    ///
    /// See [`Gateway::send`].
    pub async fn patch<B, T>(&self, path: &str, body: &B) -> Result<T, GatewayError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.send(ApiRequest::patch(path).json(body)?).await
    }

    /// # Errors
    ///
    /// See [`Gateway::send`].
    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T, GatewayError> {
        self.send(ApiRequest::delete(path)).await
    }

    fn prepare(&self, request: ApiRequest) -> Result<OutgoingRequest, GatewayError> {
        let mut headers = HeaderMap::new();

        if request.access == Access::Authenticated
            && let Some(session) = self.sessions.current()
        {
            let mut value = HeaderValue::from_str(&format!("Bearer {}", session.token.expose()))
                .map_err(GatewayError::InvalidCredential)?;

            value.set_sensitive(true);

            headers.insert(AUTHORIZATION, value);
        }

        Ok(OutgoingRequest {
            method: request.method,
            path: request.path,
            query: request.query,
            headers,
            body: request.body,
        })
    }

    fn evict(&self) {
        if let Err(source) = self.sessions.clear() {
            error!("failed to clear rejected session: {source}");
        }

        self.navigator.navigate(LOGIN_PATH);
    }
}

impl fmt::Debug for Gateway {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Gateway")
            .field("sessions", &self.sessions)
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

fn decode<T: DeserializeOwned>(body: &[u8]) -> Result<T, GatewayError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return serde_json::from_slice(b"null").map_err(GatewayError::Decode);
    }

    serde_json::from_slice(body).map_err(GatewayError::Decode)
}

fn error_message(body: &[u8]) -> Option<String> {
    let message = serde_json::from_slice::<ErrorBody>(body)
        .ok()
        .and_then(|ErrorBody { message }| message)
        .filter(|message| !message.trim().is_empty());

    if message.is_some() {
        return message;
    }

    let text = String::from_utf8_lossy(body);
    let text = text.trim();

    (!text.is_empty()).then(|| text.to_string())
}
