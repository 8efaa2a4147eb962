// Authentication service - business logic layer

use validator::Validate;

use crate::auth::{
    error::AuthError,
    models::{
        AuthProvider, AuthResponse, GoogleLoginRequest, LoginRequest, OauthLoginResponse,
        ProfileResponse, RegisterRequest, UpdateProfileRequest, UserResponse,
    },
    password::PasswordService,
    repository::UserRepository,
    token::TokenService,
};

/// Authentication service coordinating all auth operations
#[derive(Clone)]
pub struct AuthService {
    user_repo: UserRepository,
    token_service: TokenService,
}

impl AuthService {
    /// Create a new AuthService
    pub fn new(user_repo: UserRepository, token_service: TokenService) -> Self {
        Self {
            user_repo,
            token_service,
        }
    }

    /// Register a new user
    ///
    /// 1. Checks that name, email, and password are present
    /// 2. Validates the email shape
    /// 3. Rejects emails that are already registered
    /// 4. Stores an Argon2id hash, issues a 7-day token
    pub async fn register(&self, request: RegisterRequest) -> Result<AuthResponse, AuthError> {
        let (Some(name), Some(email), Some(password)) = (
            request.name.as_deref(),
            request.email.as_deref(),
            request.password.as_deref(),
        ) else {
            return Err(AuthError::ValidationError(
                "Name, email, and password are required".to_string(),
            ));
        };

        request
            .validate()
            .map_err(|_| AuthError::ValidationError("Email must be a valid email address".to_string()))?;

        if self.user_repo.email_exists(email).await? {
            return Err(AuthError::EmailAlreadyExists);
        }

        let password_hash = PasswordService::hash_password(password)?;

        let user = self
            .user_repo
            .create_user(
                name,
                email,
                &password_hash,
                request.phone.as_deref(),
                request.address.as_deref(),
            )
            .await?;

        let token = self.token_service.generate_token(user.id)?;
        tracing::info!("Registered user {}", user.id);

        Ok(AuthResponse {
            message: "User registered successfully".to_string(),
            user: user.into(),
            token,
        })
    }

    /// Login with email and password.
    ///
    /// Unknown email, passwordless (OAuth) account, and hash mismatch all
    /// collapse into the same InvalidCredentials error.
    pub async fn login(&self, request: LoginRequest) -> Result<AuthResponse, AuthError> {
        let (Some(email), Some(password)) =
            (request.email.as_deref(), request.password.as_deref())
        else {
            return Err(AuthError::ValidationError(
                "Email and password are required".to_string(),
            ));
        };

        let user = self
            .user_repo
            .find_by_email(email)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        let hash = user
            .password_hash
            .as_deref()
            .ok_or(AuthError::InvalidCredentials)?;

        if !PasswordService::verify_password(password, hash)? {
            return Err(AuthError::InvalidCredentials);
        }

        let token = self.token_service.generate_token(user.id)?;

        Ok(AuthResponse {
            message: "Login successful".to_string(),
            user: user.into(),
            token,
        })
    }

    /// Find-or-create login for OAuth-style callers. No assertion from the
    /// identity provider is verified here.
    pub async fn google_login(
        &self,
        request: GoogleLoginRequest,
    ) -> Result<OauthLoginResponse, AuthError> {
        let email = request
            .email
            .as_deref()
            .ok_or_else(|| AuthError::ValidationError("Email is required".to_string()))?;

        let user = match self.user_repo.find_by_email(email).await? {
            Some(user) => user,
            None => {
                let provider = request.auth_provider.unwrap_or(AuthProvider::Google);
                self.user_repo
                    .create_oauth_user(email, request.name.as_deref(), provider)
                    .await?
            }
        };

        let token = self.token_service.generate_token(user.id)?;

        Ok(OauthLoginResponse {
            user: user.into(),
            token,
        })
    }

    /// Get the current user's sanitized record
    pub async fn get_current_user(&self, user_id: i32) -> Result<UserResponse, AuthError> {
        let user = self
            .user_repo
            .find_by_id(user_id)
            .await?
            .ok_or(AuthError::UserNotFound)?;

        Ok(user.into())
    }

    /// Update the current user's profile
    ///
    /// Applies present fields. When both password fields are given, the
    /// current password is verified against the stored hash before the
    /// replacement hash is written.
    pub async fn update_profile(
        &self,
        user_id: i32,
        request: UpdateProfileRequest,
    ) -> Result<ProfileResponse, AuthError> {
        let user = self
            .user_repo
            .find_by_id(user_id)
            .await?
            .ok_or(AuthError::UserNotFound)?;

        let new_hash = match (
            request.current_password.as_deref(),
            request.new_password.as_deref(),
        ) {
            (Some(current), Some(new)) => {
                let hash = user
                    .password_hash
                    .as_deref()
                    .ok_or(AuthError::IncorrectPassword)?;
                if !PasswordService::verify_password(current, hash)? {
                    return Err(AuthError::IncorrectPassword);
                }
                Some(PasswordService::hash_password(new)?)
            }
            _ => None,
        };

        let updated = self
            .user_repo
            .update_profile(
                user_id,
                request.name.as_deref(),
                request.phone.as_deref(),
                request.address.as_deref(),
                new_hash.as_deref(),
            )
            .await?;

        Ok(ProfileResponse {
            message: "Profile updated successfully".to_string(),
            user: updated.into(),
        })
    }
}
