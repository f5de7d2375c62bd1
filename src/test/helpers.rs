//! Test Helpers

use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};
use jiff::Timestamp;
use reqwest::StatusCode;
use serde_json::Value;

use crate::{
    gateway::TransportResponse,
    session::{Role, Session, UserId},
    token::BearerToken,
};

/// A signed-looking token whose `exp` claim is `exp` seconds since the epoch.
pub(crate) fn token_expiring_at(exp: i64) -> String {
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
    let claims = URL_SAFE_NO_PAD.encode(format!(r#"{{"sub":"kim@example.com","exp":{exp}}}"#));

    format!("{header}.{claims}.c2lnbmF0dXJl")
}

/// A token expiring `seconds` from now; negative values are already expired.
pub(crate) fn token_expiring_in(seconds: i64) -> String {
    token_expiring_at(Timestamp::now().as_second() + seconds)
}

pub(crate) fn session_with_token(token: &str, role: Role) -> Session {
    Session {
        id: UserId::from(7),
        username: "kim".to_string(),
        email: "kim@example.com".to_string(),
        role,
        token: BearerToken::new(token),
    }
}

pub(crate) fn valid_session(role: Role) -> Session {
    session_with_token(&token_expiring_in(3_600), role)
}

pub(crate) fn json_response(status: StatusCode, body: &Value) -> TransportResponse {
    TransportResponse {
        status,
        body: body.to_string().into_bytes(),
    }
}

pub(crate) fn empty_response(status: StatusCode) -> TransportResponse {
    TransportResponse {
        status,
        body: Vec::new(),
    }
}

/// A real `reqwest` error for exercising transport failure paths.
pub(crate) fn transport_error() -> Result<reqwest::Error, &'static str> {
    reqwest::Client::new()
        .get("not a url")
        .build()
        .err()
        .ok_or("an unparsable URL should fail to build")
}
