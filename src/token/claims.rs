use serde::Deserialize;
use serde::Serialize;

use crate::user::Role;

/// Claims carried by every issued token.
///
/// Exactly three fields, serialized in declaration order with no
/// whitespace, so that any two implementations sharing a secret produce
/// identical token bytes for the same claims. There is deliberately no
/// expiry or issued-at: tokens stay valid until the secret changes.
///
/// Decoding is strict about the three known keys (an unknown role name or
/// a non-integer id is a malformed token) but tolerates extra keys, which
/// keeps tokens minted by richer issuers acceptable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Persisted user id.
    pub id: i64,
    /// Username at issuance.
    pub sub: String,
    /// Role at issuance.
    pub role: Role,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_key_order_and_compactness() {
        let claims = Claims {
            id: 1,
            sub: "admin".to_string(),
            role: Role::Admin,
        };

        assert_eq!(
            serde_json::to_string(&claims).unwrap(),
            r#"{"id":1,"sub":"admin","role":"ADMIN"}"#
        );
    }

    #[test]
    fn test_subject_is_json_escaped() {
        let claims = Claims {
            id: 3,
            sub: "a\"b\\c".to_string(),
            role: Role::Staff,
        };

        let json = serde_json::to_string(&claims).unwrap();
        assert_eq!(json, r#"{"id":3,"sub":"a\"b\\c","role":"STAFF"}"#);
        assert_eq!(serde_json::from_str::<Claims>(&json).unwrap(), claims);
    }

    #[test]
    fn test_missing_key_rejected() {
        let result: Result<Claims, _> = serde_json::from_str(r#"{"id":1,"sub":"admin"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_extra_keys_tolerated() {
        let claims: Claims =
            serde_json::from_str(r#"{"id":1,"sub":"admin","role":"ADMIN","iat":12345}"#).unwrap();
        assert_eq!(claims.id, 1);
        assert_eq!(claims.role, Role::Admin);
    }

    #[test]
    fn test_non_integer_id_rejected() {
        let result: Result<Claims, _> =
            serde_json::from_str(r#"{"id":1.5,"sub":"admin","role":"ADMIN"}"#);
        assert!(result.is_err());

        let result: Result<Claims, _> =
            serde_json::from_str(r#"{"id":"1","sub":"admin","role":"ADMIN"}"#);
        assert!(result.is_err());

        // One past i64::MAX.
        let result: Result<Claims, _> =
            serde_json::from_str(r#"{"id":9223372036854775808,"sub":"x","role":"USER"}"#);
        assert!(result.is_err());
    }
}
