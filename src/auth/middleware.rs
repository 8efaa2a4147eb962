// Authentication middleware for protected routes

use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{header, request::Parts},
};

use crate::auth::{error::AuthError, token::TokenService};

/// Authenticated user extractor for protected routes.
///
/// Rejects before the handler body runs, so protected routes never touch
/// the store on a missing (401) or invalid/expired (403) token.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user_id: i32,
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthenticatedUser
where
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get(header::AUTHORIZATION)
            .ok_or(AuthError::MissingToken)?
            .to_str()
            .map_err(|_| AuthError::InvalidToken)?;

        let token = auth_header
            .strip_prefix("Bearer ")
            .ok_or(AuthError::InvalidToken)?;

        let token_service = TokenService::from_env();
        let claims = token_service.validate_token(token)?;

        Ok(AuthenticatedUser {
            user_id: claims.sub,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request;
    use chrono::Utc;
    use jsonwebtoken::{encode, EncodingKey, Header};
    use proptest::prelude::*;

    use crate::auth::token::Claims;

    const TEST_SECRET: &str = "test_secret_key_for_testing_purposes";

    fn set_test_secret() {
        std::env::set_var("JWT_SECRET", TEST_SECRET);
    }

    fn create_parts_with_auth(auth_value: &str) -> Parts {
        let req = Request::builder()
            .uri("/")
            .header(header::AUTHORIZATION, auth_value)
            .body(())
            .unwrap();

        let (parts, _) = req.into_parts();
        parts
    }

    fn create_parts_without_auth() -> Parts {
        let req = Request::builder().uri("/").body(()).unwrap();
        let (parts, _) = req.into_parts();
        parts
    }

    #[tokio::test]
    async fn test_valid_token_is_accepted() {
        set_test_secret();

        let service = TokenService::new(TEST_SECRET.to_string());
        let user_id = 42;

        let token = service.generate_token(user_id).unwrap();
        let auth_header = format!("Bearer {}", token);

        let mut parts = create_parts_with_auth(&auth_header);
        let result = AuthenticatedUser::from_request_parts(&mut parts, &()).await;

        let user = result.unwrap();
        assert_eq!(user.user_id, user_id);
    }

    #[tokio::test]
    async fn test_missing_authorization_header() {
        let mut parts = create_parts_without_auth();
        let result = AuthenticatedUser::from_request_parts(&mut parts, &()).await;

        assert!(matches!(result, Err(AuthError::MissingToken)));
    }

    #[tokio::test]
    async fn test_expired_token_is_rejected() {
        set_test_secret();

        let claims = Claims {
            sub: 1,
            iat: Utc::now().timestamp() - 1000,
            exp: Utc::now().timestamp() - 500, // expired 500 seconds ago
        };

        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(TEST_SECRET.as_bytes()),
        )
        .unwrap();

        let auth_header = format!("Bearer {}", token);
        let mut parts = create_parts_with_auth(&auth_header);

        let result = AuthenticatedUser::from_request_parts(&mut parts, &()).await;
        assert!(matches!(result, Err(AuthError::ExpiredToken)));
    }

    #[tokio::test]
    async fn test_malformed_tokens_are_rejected() {
        set_test_secret();

        let malformed_tokens = vec![
            "Bearer invalid_token",
            "Bearer not.a.valid.jwt",
            "Bearer eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9.invalid.signature",
        ];

        for token in malformed_tokens {
            let mut parts = create_parts_with_auth(token);
            let result = AuthenticatedUser::from_request_parts(&mut parts, &()).await;

            assert!(result.is_err());
        }
    }

    #[tokio::test]
    async fn test_invalid_bearer_format() {
        set_test_secret();

        let invalid_formats = vec![
            "InvalidFormat token",
            "token_without_bearer",
            "Basic dXNlcjpwYXNz", // Basic auth instead of Bearer
        ];

        for auth_value in invalid_formats {
            let mut parts = create_parts_with_auth(auth_value);
            let result = AuthenticatedUser::from_request_parts(&mut parts, &()).await;

            assert!(matches!(result, Err(AuthError::InvalidToken)));
        }
    }

    proptest! {
        #[test]
        fn prop_valid_tokens_accepted(user_id in 1i32..1000000) {
            set_test_secret();

            let service = TokenService::new(TEST_SECRET.to_string());
            let token = service.generate_token(user_id)?;
            let auth_header = format!("Bearer {}", token);

            let mut parts = create_parts_with_auth(&auth_header);
            let rt = tokio::runtime::Runtime::new().unwrap();
            let result = rt.block_on(AuthenticatedUser::from_request_parts(&mut parts, &()));

            prop_assert!(result.is_ok());
            prop_assert_eq!(result.unwrap().user_id, user_id);
        }

        #[test]
        fn prop_malformed_tokens_rejected(malformed in "[a-zA-Z0-9]{10,50}") {
            set_test_secret();

            let auth_header = format!("Bearer {}", malformed);
            let mut parts = create_parts_with_auth(&auth_header);

            let rt = tokio::runtime::Runtime::new().unwrap();
            let result = rt.block_on(AuthenticatedUser::from_request_parts(&mut parts, &()));

            prop_assert!(result.is_err());
        }
    }
}
