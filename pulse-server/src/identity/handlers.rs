//! Identity REST handlers: register, login, refresh, logout.

use crate::{
    ApiError, ApiResult, IdentityState, LoginRequest, LoginResponse, MessageResponse,
    RefreshTokenRequest, RefreshTokenResponse, RegisterRequest, TokenResponse,
    identity::password,
};

use pulse_core::User;
use pulse_db::UserRepository;

use axum::{Json, extract::State, http::StatusCode};
use log::info;

/// POST /api/auth/register
pub async fn register(
    State(state): State<IdentityState>,
    Json(body): Json<RegisterRequest>,
) -> ApiResult<(StatusCode, Json<TokenResponse>)> {
    body.validate()?;

    let users = UserRepository::new(state.pool.clone());

    if users
        .find_by_email_or_user_name(&body.email, &body.user_name)
        .await?
        .is_some()
    {
        return Err(ApiError::validation("User already exists"));
    }

    let password_hash = password::hash(body.password).await?;
    let user = User::new(body.user_name, body.email, password_hash);

    users.create(&user).await?;

    let pair = state.tokens.issue_pair(&user).await?;

    info!("Registered user {}", user.id);

    Ok((
        StatusCode::CREATED,
        Json(TokenResponse {
            success: true,
            message: "User registered successfully".to_string(),
            access_token: pair.access_token,
            refresh_token: pair.refresh_token,
        }),
    ))
}

/// POST /api/auth/login
pub async fn login(
    State(state): State<IdentityState>,
    Json(body): Json<LoginRequest>,
) -> ApiResult<Json<LoginResponse>> {
    body.validate()?;

    let user = UserRepository::new(state.pool.clone())
        .find_by_email(&body.email)
        .await?
        .ok_or_else(|| ApiError::validation("Invalid credentials"))?;

    let verified = password::verify(body.password, user.password_hash.clone()).await?;
    if !verified {
        return Err(ApiError::validation("Invalid credentials"));
    }

    let pair = state.tokens.issue_pair(&user).await?;

    info!("User {} logged in", user.id);

    Ok(Json(LoginResponse {
        success: true,
        message: "Login successful".to_string(),
        access_token: pair.access_token,
        refresh_token: pair.refresh_token,
        user_id: user.id,
    }))
}

/// POST /api/auth/refresh-token
pub async fn refresh_token(
    State(state): State<IdentityState>,
    Json(body): Json<RefreshTokenRequest>,
) -> ApiResult<(StatusCode, Json<RefreshTokenResponse>)> {
    body.validate()?;

    let pair = state.tokens.refresh(&body.refresh_token).await?;

    Ok((
        StatusCode::CREATED,
        Json(RefreshTokenResponse {
            access_token: pair.access_token,
            refresh_token: pair.refresh_token,
        }),
    ))
}

/// POST /api/auth/logout
pub async fn logout(
    State(state): State<IdentityState>,
    Json(body): Json<RefreshTokenRequest>,
) -> ApiResult<Json<MessageResponse>> {
    body.validate()?;

    state.tokens.revoke(&body.refresh_token).await?;

    Ok(Json(MessageResponse::ok("Logged out successfully")))
}
