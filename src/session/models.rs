//! Session Models

use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::{Deserialize, Serialize};

use crate::token::BearerToken;

/// Role that unlocks the admin console.
pub const PRIVILEGED_ROLE: Role = Role::Admin;

/// Account role as issued by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    #[serde(rename = "CUSTOMER", alias = "customer")]
    Customer,

    #[serde(rename = "ADMIN", alias = "admin")]
    Admin,
}

impl Role {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Customer => "CUSTOMER",
            Self::Admin => "ADMIN",
        }
    }

    #[must_use]
    pub const fn is_privileged(self) -> bool {
        matches!(self, Self::Admin)
    }
}

impl Display for Role {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

/// User identifier; numeric for this backend, but treated as opaque.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum UserId {
    Numeric(i64),
    Opaque(String),
}

impl Display for UserId {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::Numeric(id) => Display::fmt(id, f),
            Self::Opaque(id) => f.write_str(id),
        }
    }
}

impl From<i64> for UserId {
    fn from(value: i64) -> Self {
        Self::Numeric(value)
    }
}

/// Authenticated identity held by the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub id: UserId,

    /// Display name.
    #[serde(default, alias = "name")]
    pub username: String,

    #[serde(default)]
    pub email: String,

    pub role: Role,

    pub token: BearerToken,
}

impl Session {
    #[must_use]
    pub fn is_privileged(&self) -> bool {
        self.role.is_privileged()
    }
}

/// Which front end a session belongs to.
///
/// Each console persists its session under its own storage key, so a
/// storefront login never leaks into the admin console and vice versa.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Console {
    Storefront,
    Admin,
}

impl Console {
    /// Storage key holding this console's session.
    #[must_use]
    pub const fn storage_key(self) -> &'static str {
        match self {
            Self::Storefront => "user",
            Self::Admin => "admin",
        }
    }

    /// Role forced onto signups made from this console, if any.
    #[must_use]
    pub const fn signup_role(self) -> Option<Role> {
        match self {
            Self::Storefront => None,
            Self::Admin => Some(Role::Admin),
        }
    }
}

/// Derived authentication state of a console.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Anonymous,
    Authenticated,
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn session_deserializes_login_response_shape() -> TestResult {
        let session: Session = serde_json::from_str(
            r#"{"token":"a.b.c","type":"Bearer","id":7,"username":"kim","email":"kim@example.com","role":"CUSTOMER"}"#,
        )?;

        assert_eq!(session.id, UserId::Numeric(7));
        assert_eq!(session.username, "kim");
        assert_eq!(session.role, Role::Customer);
        assert_eq!(session.token.expose(), "a.b.c");

        Ok(())
    }

    #[test]
    fn session_accepts_name_alias_and_lowercase_role() -> TestResult {
        let session: Session =
            serde_json::from_str(r#"{"token":"t","id":"u-1","name":"Lee","role":"admin"}"#)?;

        assert_eq!(session.id, UserId::Opaque("u-1".to_string()));
        assert_eq!(session.username, "Lee");
        assert!(session.is_privileged());

        Ok(())
    }

    #[test]
    fn session_without_token_is_rejected() {
        let result = serde_json::from_str::<Session>(r#"{"id":1,"role":"CUSTOMER"}"#);

        assert!(result.is_err(), "partial sessions must not deserialize");
    }

    #[test]
    fn session_without_role_is_rejected() {
        let result = serde_json::from_str::<Session>(r#"{"id":1,"token":"t"}"#);

        assert!(result.is_err(), "partial sessions must not deserialize");
    }

    #[test]
    fn unknown_role_is_rejected() {
        let result =
            serde_json::from_str::<Session>(r#"{"id":1,"token":"t","role":"SUPERUSER"}"#);

        assert!(result.is_err(), "roles form a closed set");
    }

    #[test]
    fn session_serializes_with_wire_role() -> TestResult {
        let session = Session {
            id: UserId::from(3),
            username: "park".to_string(),
            email: "park@example.com".to_string(),
            role: Role::Admin,
            token: BearerToken::new("x.y.z"),
        };

        let value = serde_json::to_value(&session)?;

        assert_eq!(value["role"], "ADMIN");
        assert_eq!(value["token"], "x.y.z");
        assert_eq!(value["id"], 3);

        Ok(())
    }

    #[test]
    fn consoles_use_separate_storage_keys() {
        assert_eq!(Console::Storefront.storage_key(), "user");
        assert_eq!(Console::Admin.storage_key(), "admin");
        assert_eq!(Console::Admin.signup_role(), Some(PRIVILEGED_ROLE));
        assert_eq!(Console::Storefront.signup_role(), None);
    }
}
