use std::future::{ready, Ready};

use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::config::get_jwt_secret;
use crate::error::PortalError;

/**
 * The five account roles of the portal. Authentication itself is
 * delegated to the token library; the portal only consumes the role to
 * gate admin and posting operations.
 */
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    Student,
    #[serde(rename = "PI")]
    Pi,
    Industry,
    Vendor,
    Admin,
}

impl Role {
    pub fn is_admin(&self) -> bool {
        matches!(self, Role::Admin)
    }

    /// Opportunities may only be posted by PIs and Admins.
    pub fn can_post_opportunities(&self) -> bool {
        matches!(self, Role::Pi | Role::Admin)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: i32,
    pub role: Role,
    pub exp: i64,
}

/**
 * Issue a signed bearer token for a user
 *
 * # Arguments
 * @param user_id: i32 - The user id stored in the sub claim
 * @param role: Role - The user's role
 *
 * # Returns
 * @return Result<String, PortalError> - The encoded token
 */
pub fn issue_token(user_id: i32, role: Role) -> Result<String, PortalError> {
    let claims = Claims {
        sub: user_id,
        role,
        exp: chrono::Utc::now().timestamp() + crate::config::get_token_ttl(),
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(get_jwt_secret().as_bytes()),
    )
    .map_err(|e| PortalError::Transient(e.to_string()))
}

/**
 * Decode and verify a bearer token
 *
 * # Arguments
 * @param token: &str - The raw token without the "Bearer " prefix
 *
 * # Returns
 * @return Result<Claims, PortalError> - The verified claims
 */
pub fn decode_token(token: &str) -> Result<Claims, PortalError> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(get_jwt_secret().as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|_| PortalError::Authorization("Invalid or expired token".to_string()))
}

/// Pull the token out of an Authorization header value.
pub fn bearer_token(header_value: &str) -> Option<&str> {
    header_value.strip_prefix("Bearer ")
}

/**
 * Request extractor for the authenticated principal. Handlers that need
 * a user take this as a parameter; requests without a valid token are
 * rejected before the handler runs.
 */
#[derive(Debug, Clone)]
pub struct AuthedUser(pub Claims);

impl FromRequest for AuthedUser {
    type Error = PortalError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(
            req.headers()
                .get("Authorization")
                .and_then(|hv| hv.to_str().ok())
                .and_then(bearer_token)
                .ok_or_else(|| PortalError::Authorization("Missing bearer token".to_string()))
                .and_then(decode_token)
                .map(AuthedUser),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_round_trip() {
        let token = issue_token(42, Role::Admin).unwrap();
        let claims = decode_token(&token).unwrap();
        assert_eq!(claims.sub, 42);
        assert_eq!(claims.role, Role::Admin);
    }

    #[test]
    fn test_tampered_token_is_rejected() {
        let token = issue_token(42, Role::Student).unwrap();
        let mut tampered = token.clone();
        tampered.push('x');
        assert!(decode_token(&tampered).is_err());
        assert!(decode_token("not-a-token").is_err());
    }

    #[test]
    fn test_bearer_prefix() {
        assert_eq!(bearer_token("Bearer abc"), Some("abc"));
        assert_eq!(bearer_token("Basic abc"), None);
    }

    #[test]
    fn test_role_gates() {
        assert!(Role::Admin.is_admin());
        assert!(!Role::Pi.is_admin());
        assert!(Role::Pi.can_post_opportunities());
        assert!(Role::Admin.can_post_opportunities());
        assert!(!Role::Student.can_post_opportunities());
        assert!(!Role::Vendor.can_post_opportunities());
    }
}
