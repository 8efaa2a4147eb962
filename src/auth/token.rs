// JWT token generation and validation service

use crate::auth::error::AuthError;
use chrono::Utc;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

/// Development-only fallback. Deployments must set JWT_SECRET.
const INSECURE_DEV_SECRET: &str = "insecure-dev-secret-change-me";

/// Read the signing secret from the environment, falling back to the
/// insecure development default.
pub fn jwt_secret_from_env() -> String {
    std::env::var("JWT_SECRET").unwrap_or_else(|_| INSECURE_DEV_SECRET.to_string())
}

/// True when the process is running on the fallback secret.
pub fn using_default_secret() -> bool {
    std::env::var("JWT_SECRET").is_err()
}

/// JWT claims structure
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: i32, // user id
    pub exp: i64, // expiration timestamp
    pub iat: i64, // issued at timestamp
}

/// Token service for JWT operations
#[derive(Clone)]
pub struct TokenService {
    secret: String,
    token_duration: i64, // in seconds
}

impl TokenService {
    /// Create a new TokenService with a secret key.
    /// Tokens expire in 7 days (604800 seconds).
    pub fn new(secret: String) -> Self {
        Self {
            secret,
            token_duration: 604800,
        }
    }

    /// Create a TokenService from the JWT_SECRET environment variable
    pub fn from_env() -> Self {
        Self::new(jwt_secret_from_env())
    }

    /// Generate a signed token for a user
    pub fn generate_token(&self, user_id: i32) -> Result<String, AuthError> {
        let now = Utc::now().timestamp();
        let exp = now + self.token_duration;

        let claims = Claims {
            sub: user_id,
            iat: now,
            exp,
        };

        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.secret.as_bytes()),
        )
        .map_err(|e| AuthError::TokenGenerationError(e.to_string()))
    }

    /// Validate a token and return its claims
    pub fn validate_token(&self, token: &str) -> Result<Claims, AuthError> {
        let validation = Validation::default();

        decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.secret.as_bytes()),
            &validation,
        )
        .map(|data| data.claims)
        .map_err(|e| match e.kind() {
            jsonwebtoken::errors::ErrorKind::ExpiredSignature => AuthError::ExpiredToken,
            _ => AuthError::InvalidToken,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn test_token_service() -> TokenService {
        TokenService::new("test_secret_key_for_testing_purposes".to_string())
    }

    #[test]
    fn test_token_expiration_is_7_days() {
        let service = test_token_service();
        let token = service.generate_token(1).unwrap();
        let claims = service.validate_token(&token).unwrap();

        let duration = claims.exp - claims.iat;
        assert_eq!(duration, 604800, "Token should expire in exactly 7 days");
    }

    #[test]
    fn test_token_claims_contain_user_identity() {
        let service = test_token_service();
        let user_id = 42;

        let token = service.generate_token(user_id).unwrap();
        let claims = service.validate_token(&token).unwrap();
        assert_eq!(claims.sub, user_id);
    }

    #[test]
    fn test_malformed_tokens_are_rejected() {
        let service = test_token_service();

        assert!(service.validate_token("").is_err());
        assert!(service.validate_token("not.a.token").is_err());
        assert!(service.validate_token("invalid_token_format").is_err());
        assert!(service
            .validate_token("eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9.invalid.signature")
            .is_err());
    }

    #[test]
    fn test_token_signature_verification() {
        let service1 = TokenService::new("secret1".to_string());
        let service2 = TokenService::new("secret2".to_string());

        let token = service1.generate_token(1).unwrap();

        assert!(service1.validate_token(&token).is_ok());
        assert!(service2.validate_token(&token).is_err());
    }

    #[test]
    fn test_expired_token_is_rejected() {
        let service = test_token_service();

        let claims = Claims {
            sub: 1,
            iat: Utc::now().timestamp() - 1000,
            exp: Utc::now().timestamp() - 500, // expired 500 seconds ago
        };

        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret("test_secret_key_for_testing_purposes".as_bytes()),
        )
        .unwrap();

        let result = service.validate_token(&token);
        assert!(matches!(result, Err(AuthError::ExpiredToken)));
    }

    proptest! {
        #[test]
        fn prop_tokens_round_trip_subject(user_id in 1i32..1000000) {
            let service = test_token_service();
            let token = service.generate_token(user_id)?;
            let claims = service.validate_token(&token)?;
            prop_assert_eq!(claims.sub, user_id);
        }

        #[test]
        fn prop_malformed_tokens_rejected(malformed in "[a-zA-Z0-9]{10,50}") {
            let service = test_token_service();
            let result = service.validate_token(&malformed);
            prop_assert!(result.is_err());
        }
    }
}
