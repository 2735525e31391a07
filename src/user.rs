use std::fmt;

use serde::Deserialize;
use serde::Serialize;

/// Access level attached to a user account and to every issued token.
///
/// `NotSet` is a sentinel: passed as a required role it means "no role
/// constraint, authentication is enough". It is never a legitimate role
/// for a logged-in user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    NotSet,
    User,
    Staff,
    Admin,
}

impl Role {
    /// Wire name of the role (uppercase, as carried in token payloads).
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::NotSet => "NOT_SET",
            Role::User => "USER",
            Role::Staff => "STAFF",
            Role::Admin => "ADMIN",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Persisted user record, immutable within a request.
///
/// Created and owned by the user store; this crate only reads it.
#[derive(Clone)]
pub struct User {
    /// Positive for persisted users.
    pub id: i64,
    pub username: String,
    pub email: String,
    /// Opaque output of the password hasher; never shown to callers.
    pub password_hash: String,
    pub role: Role,
}

// Manual impl so the hash cannot leak through debug logging.
impl fmt::Debug for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("User")
            .field("id", &self.id)
            .field("username", &self.username)
            .field("email", &self.email)
            .field("password_hash", &"<redacted>")
            .field("role", &self.role)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_wire_names() {
        assert_eq!(
            serde_json::to_string(&Role::NotSet).unwrap(),
            "\"NOT_SET\""
        );
        assert_eq!(serde_json::to_string(&Role::User).unwrap(), "\"USER\"");
        assert_eq!(serde_json::to_string(&Role::Staff).unwrap(), "\"STAFF\"");
        assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), "\"ADMIN\"");
    }

    #[test]
    fn test_role_rejects_unknown_name() {
        let result: Result<Role, _> = serde_json::from_str("\"SUPERUSER\"");
        assert!(result.is_err());

        // Wire names are uppercase only.
        let result: Result<Role, _> = serde_json::from_str("\"admin\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_debug_redacts_password_hash() {
        let user = User {
            id: 1,
            username: "admin".to_string(),
            email: "mail@inter.net".to_string(),
            password_hash: "$argon2id$v=19$secret-material".to_string(),
            role: Role::Admin,
        };

        let rendered = format!("{:?}", user);
        assert!(!rendered.contains("secret-material"));
        assert!(rendered.contains("<redacted>"));
        assert!(rendered.contains("admin"));
    }
}
