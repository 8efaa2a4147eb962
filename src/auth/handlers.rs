// HTTP handlers for authentication endpoints

use axum::{extract::State, http::StatusCode, Json};

use crate::auth::{
    error::AuthError,
    middleware::AuthenticatedUser,
    models::{
        AuthResponse, GoogleLoginRequest, LoginRequest, OauthLoginResponse, ProfileResponse,
        RegisterRequest, UpdateProfileRequest, UserResponse,
    },
};
use crate::AppState;

/// Register a new user
/// POST /api/auth/register
pub async fn register_handler(
    State(state): State<AppState>,
    Json(request): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<AuthResponse>), AuthError> {
    let response = state.auth_service.register(request).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

/// Login a user
/// POST /api/auth/login
pub async fn login_handler(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<AuthResponse>, AuthError> {
    let response = state.auth_service.login(request).await?;
    Ok(Json(response))
}

/// OAuth-style passthrough login
/// POST /api/auth/google-login
pub async fn google_login_handler(
    State(state): State<AppState>,
    Json(request): Json<GoogleLoginRequest>,
) -> Result<Json<OauthLoginResponse>, AuthError> {
    let response = state.auth_service.google_login(request).await?;
    Ok(Json(response))
}

/// Get current user information (protected endpoint)
/// GET /api/auth/me
pub async fn me_handler(
    State(state): State<AppState>,
    user: AuthenticatedUser,
) -> Result<Json<UserResponse>, AuthError> {
    let response = state.auth_service.get_current_user(user.user_id).await?;
    Ok(Json(response))
}

/// Update the current user's profile (protected endpoint)
/// PUT /api/auth/profile
pub async fn update_profile_handler(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Json(request): Json<UpdateProfileRequest>,
) -> Result<Json<ProfileResponse>, AuthError> {
    let response = state
        .auth_service
        .update_profile(user.user_id, request)
        .await?;
    Ok(Json(response))
}
