// Authentication data models and DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// Identity provider a user registered through
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "text", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum AuthProvider {
    Email,
    Google,
    Facebook,
    Github,
}

impl AuthProvider {
    pub fn as_str(&self) -> &'static str {
        match self {
            AuthProvider::Email => "email",
            AuthProvider::Google => "google",
            AuthProvider::Facebook => "facebook",
            AuthProvider::Github => "github",
        }
    }
}

impl Default for AuthProvider {
    fn default() -> Self {
        AuthProvider::Email
    }
}

impl std::fmt::Display for AuthProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// User database model. password_hash is NULL for OAuth users.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: i32,
    pub name: Option<String>,
    pub email: String,
    pub password_hash: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub auth_provider: AuthProvider,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// User response model (excludes password_hash)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: i32,
    pub name: Option<String>,
    pub email: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub auth_provider: AuthProvider,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            phone: user.phone,
            address: user.address,
            auth_provider: user.auth_provider,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

/// Registration request DTO. name/email/password presence is checked in the
/// service so a missing field surfaces as a 400 with the documented message.
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    pub name: Option<String>,
    #[validate(email(message = "Email must be a valid email address"))]
    pub email: Option<String>,
    pub password: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
}

/// Login request DTO
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// OAuth-style passthrough login request DTO. The identity-provider
/// assertion is not verified anywhere; callers vouch for the email.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoogleLoginRequest {
    pub email: Option<String>,
    pub auth_provider: Option<AuthProvider>,
    pub name: Option<String>,
}

/// Profile update request DTO
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileRequest {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub current_password: Option<String>,
    pub new_password: Option<String>,
}

/// Authentication response DTO (register/login)
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub message: String,
    pub user: UserResponse,
    pub token: String,
}

/// google-login response carries no message field
#[derive(Debug, Serialize)]
pub struct OauthLoginResponse {
    pub user: UserResponse,
    pub token: String,
}

/// Profile update response DTO
#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    pub message: String,
    pub user: UserResponse,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_provider_wire_format_is_lowercase() {
        assert_eq!(serde_json::to_string(&AuthProvider::Google).unwrap(), "\"google\"");
        let parsed: AuthProvider = serde_json::from_str("\"github\"").unwrap();
        assert_eq!(parsed, AuthProvider::Github);
    }

    #[test]
    fn test_user_response_uses_camel_case_and_omits_hash() {
        let user = User {
            id: 1,
            name: Some("Demo User".to_string()),
            email: "demo@example.com".to_string(),
            password_hash: Some("$argon2id$...".to_string()),
            phone: Some("+1234567890".to_string()),
            address: Some("123 Demo Street, Demo City".to_string()),
            auth_provider: AuthProvider::Email,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let json = serde_json::to_string(&UserResponse::from(user)).unwrap();
        assert!(json.contains("\"authProvider\":\"email\""));
        assert!(json.contains("\"createdAt\""));
        assert!(!json.contains("password"));
    }

    #[test]
    fn test_register_request_tolerates_missing_fields() {
        // Presence is the service's job; deserialization must not fail
        let request: RegisterRequest = serde_json::from_str("{}").unwrap();
        assert!(request.name.is_none());
        assert!(request.email.is_none());
        assert!(request.password.is_none());
    }

    #[test]
    fn test_update_profile_request_camel_case_fields() {
        let json = r#"{"currentPassword": "old", "newPassword": "new"}"#;
        let request: UpdateProfileRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.current_password.as_deref(), Some("old"));
        assert_eq!(request.new_password.as_deref(), Some("new"));
    }
}
