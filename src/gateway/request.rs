//! Request descriptions handed to the gateway by domain services.

use std::fmt::Display;

use reqwest::Method;
use serde::Serialize;
use serde_json::Value;

use crate::gateway::GatewayError;

/// Whether a request carries the session's credentials.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// Attach the bearer token when a session exists; a 401 evicts it.
    Authenticated,

    /// Never attach a token; a 401 is an ordinary error.
    Public,
}

/// One API call, before credentials are resolved.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    pub(crate) method: Method,
    pub(crate) path: String,
    pub(crate) query: Vec<(String, String)>,
    pub(crate) body: Option<Value>,
    pub(crate) access: Access,
}

impl ApiRequest {
    #[must_use]
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            body: None,
            access: Access::Authenticated,
        }
    }

    #[must_use]
    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    #[must_use]
    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    #[must_use]
    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::PUT, path)
    }

    #[must_use]
    pub fn patch(path: impl Into<String>) -> Self {
        Self::new(Method::PATCH, path)
    }

    #[must_use]
    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path)
    }

    /// Mark this request as readable by anonymous visitors.
    #[must_use]
    pub fn public(mut self) -> Self {
        self.access = Access::Public;
        self
    }

    #[must_use]
    pub fn query(mut self, key: &str, value: impl Display) -> Self {
        self.query.push((key.to_string(), value.to_string()));
        self
    }

    /// Append `key=value` only when `value` is present.
    #[must_use]
    pub fn query_opt(self, key: &str, value: Option<impl Display>) -> Self {
        match value {
            Some(value) => self.query(key, value),
            None => self,
        }
    }

    /// Attach a JSON body.
    ///
    /// # Errors
    ///
    /// Returns an error if `body` cannot be represented as JSON.
    pub fn json<B: Serialize + ?Sized>(mut self, body: &B) -> Result<Self, GatewayError> {
        self.body = Some(serde_json::to_value(body).map_err(GatewayError::Encode)?);

        Ok(self)
    }

    #[must_use]
    pub fn method(&self) -> &Method {
        &self.method
    }

    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    #[must_use]
    pub const fn access(&self) -> Access {
        self.access
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn requests_default_to_authenticated() {
        assert_eq!(ApiRequest::get("/cart/user/1").access(), Access::Authenticated);
        assert_eq!(ApiRequest::get("/products").public().access(), Access::Public);
    }

    #[test]
    fn query_opt_skips_missing_values() {
        let request = ApiRequest::get("/products/search")
            .query_opt("keyword", Some("tea"))
            .query_opt("minPrice", None::<f64>)
            .query("page", 0);

        assert_eq!(
            request.query,
            vec![
                ("keyword".to_string(), "tea".to_string()),
                ("page".to_string(), "0".to_string()),
            ]
        );
    }

    #[test]
    fn json_body_is_captured() -> TestResult {
        let request = ApiRequest::put("/cart/4").json(&serde_json::json!({ "quantity": 2 }))?;

        assert_eq!(request.method(), &Method::PUT);
        assert_eq!(request.body, Some(serde_json::json!({ "quantity": 2 })));

        Ok(())
    }
}
