use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;
use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use model::entities::user;
use sea_orm::EntityTrait;
use serde::{Deserialize, Serialize};

use crate::config::AuthConfig;
use crate::error::ApiError;
use crate::schemas::AppState;

/// Hash a password with Argon2id and a fresh random salt. The result is a
/// PHC-format string that carries its own salt and parameters.
pub fn hash_password(password: &str) -> Result<String, ApiError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| ApiError::Internal(format!("Failed to hash password: {e}")))
}

/// Verify a password against a stored PHC digest. Returns false for a
/// mismatch or an unparseable digest; the caller never sees why.
pub fn verify_password(password: &str, hashed: &str) -> bool {
    PasswordHash::new(hashed)
        .map(|parsed| {
            Argon2::default()
                .verify_password(password.as_bytes(), &parsed)
                .is_ok()
        })
        .unwrap_or(false)
}

/// Bearer token claims: the owning user id plus issue/expiry timestamps.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub iat: i64,
    pub exp: i64,
}

/// Issue an HS256 token for the given user id.
pub fn issue_token(user_id: &str, config: &AuthConfig) -> Result<String, ApiError> {
    let now = Utc::now();
    let claims = Claims {
        sub: user_id.to_string(),
        iat: now.timestamp(),
        exp: (now + Duration::minutes(config.token_expiry_minutes)).timestamp(),
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(config.jwt_secret.as_bytes()),
    )
    .map_err(|e| ApiError::Internal(format!("Failed to sign token: {e}")))
}

/// Verify signature and expiry; any failure collapses to 401.
pub fn decode_token(token: &str, config: &AuthConfig) -> Result<Claims, ApiError> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(config.jwt_secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|_| ApiError::Unauthorized("Could not validate credentials".to_string()))
}

/// The authenticated user, resolved from the `Authorization: Bearer` header
/// before any handler logic runs. Handlers take this as an argument, so no
/// store call happens without a verified identity.
#[derive(Debug, Clone)]
pub struct AuthUser(pub user::Model);

#[axum::async_trait]
impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or_else(|| ApiError::Unauthorized("Not authenticated".to_string()))?;

        let token = header
            .strip_prefix("Bearer ")
            .ok_or_else(|| ApiError::Unauthorized("Not authenticated".to_string()))?;

        let claims = decode_token(token, &state.auth)?;

        let user = user::Entity::find_by_id(claims.sub)
            .one(&state.db)
            .await?
            .ok_or_else(|| ApiError::Unauthorized("Could not validate credentials".to_string()))?;

        if !user.is_active {
            return Err(ApiError::BadRequest("Inactive user".to_string()));
        }

        Ok(AuthUser(user))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn test_config() -> AuthConfig {
        AuthConfig {
            jwt_secret: "unit-test-secret".to_string(),
            token_expiry_minutes: 30,
        }
    }

    #[test]
    fn test_password_hash_and_verify() {
        let hash = hash_password("hunter2-but-longer").unwrap();
        assert!(hash.starts_with("$argon2id$"));
        assert!(verify_password("hunter2-but-longer", &hash));
        assert!(!verify_password("wrong-password", &hash));
    }

    #[test]
    fn test_hashes_are_salted() {
        let first = hash_password("same-password").unwrap();
        let second = hash_password("same-password").unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn test_verify_rejects_garbage_digest() {
        assert!(!verify_password("anything", "not-a-phc-string"));
    }

    #[test]
    fn test_token_round_trip() {
        let config = test_config();
        let token = issue_token("user-123", &config).unwrap();
        let claims = decode_token(&token, &config).unwrap();
        assert_eq!(claims.sub, "user-123");
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn test_token_rejected_with_wrong_secret() {
        let config = test_config();
        let token = issue_token("user-123", &config).unwrap();

        let other = AuthConfig {
            jwt_secret: "a-different-secret".to_string(),
            token_expiry_minutes: 30,
        };
        assert!(decode_token(&token, &other).is_err());
    }

    #[test]
    fn test_expired_token_rejected() {
        // Expired well past the default leeway
        let config = AuthConfig {
            jwt_secret: "unit-test-secret".to_string(),
            token_expiry_minutes: -5,
        };
        let token = issue_token("user-123", &config).unwrap();
        assert!(decode_token(&token, &config).is_err());
    }
}
