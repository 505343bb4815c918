//! Handlers for the `/auth` resource (signup, login, logout).
//!
//! Auth errors (invalid credentials, weak password, deactivated account)
//! are surfaced verbatim as inline text for the login form, unlike
//! generation and persistence errors which are sanitized.

use axum::extract::State;
use axum::http::header::SET_COOKIE;
use axum::http::StatusCode;
use axum::response::{AppendHeaders, IntoResponse};
use axum::Json;
use serde::Deserialize;
use validator::Validate;

use cineplan_core::error::CoreError;
use cineplan_db::models::user::{CreateUser, User, UserResponse};
use cineplan_db::repositories::UserRepo;

use crate::auth::cookie::{build_session_cookie, clear_session_cookie};
use crate::auth::jwt::{generate_session_token, JwtConfig};
use crate::auth::password::{hash_password, validate_password_strength, verify_password};
use crate::error::{AppError, AppResult};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// Request body for `POST /auth/signup`.
#[derive(Debug, Deserialize, Validate)]
pub struct SignupRequest {
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    pub password: String,
    /// Defaults to the local part of the email when omitted.
    pub display_name: Option<String>,
}

/// Request body for `POST /auth/login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /auth/signup
///
/// Create an account and open a session in one step. Duplicate emails map
/// to 409 via the `uq_users_email` constraint.
pub async fn signup(
    State(state): State<AppState>,
    Json(input): Json<SignupRequest>,
) -> AppResult<impl IntoResponse> {
    input
        .validate()
        .map_err(|e| AppError::Core(CoreError::Validation(e.to_string())))?;
    validate_password_strength(&input.password)?;

    let display_name = input
        .display_name
        .filter(|n| !n.trim().is_empty())
        .unwrap_or_else(|| {
            input
                .email
                .split('@')
                .next()
                .unwrap_or(&input.email)
                .to_string()
        });

    let password_hash = hash_password(&input.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let user = UserRepo::create(
        &state.pool,
        &CreateUser {
            email: input.email,
            display_name,
            password_hash,
        },
    )
    .await?;

    let (headers, body) = open_session(&state, &user)?;
    Ok((StatusCode::CREATED, headers, body))
}

/// POST /auth/login
///
/// Authenticate with email + password. Sets the session cookie on success.
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginRequest>,
) -> AppResult<impl IntoResponse> {
    let user = UserRepo::find_by_email(&state.pool, &input.email)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized("Invalid email or password".into()))
        })?;

    if !user.is_active {
        return Err(AppError::Core(CoreError::Forbidden(
            "Account is deactivated".into(),
        )));
    }

    let password_valid = verify_password(&input.password, &user.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;

    if !password_valid {
        return Err(AppError::Core(CoreError::Unauthorized(
            "Invalid email or password".into(),
        )));
    }

    let (headers, body) = open_session(&state, &user)?;
    Ok((StatusCode::OK, headers, body))
}

/// POST /auth/logout
///
/// Clear the session cookie. The token is stateless, so clearing the cookie
/// is the whole sign-out. Returns 204 No Content.
pub async fn logout() -> impl IntoResponse {
    (
        StatusCode::NO_CONTENT,
        AppendHeaders([(SET_COOKIE, clear_session_cookie())]),
        (),
    )
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

type SessionHeaders = AppendHeaders<[(axum::http::HeaderName, String); 1]>;

/// Issue a session token for the user and build the cookie header + body.
fn open_session(
    state: &AppState,
    user: &User,
) -> AppResult<(SessionHeaders, Json<UserResponse>)> {
    let jwt_config: &JwtConfig = state.config.auth.as_ref().ok_or_else(|| {
        AppError::InternalError("Identity layer is not configured (JWT_SECRET unset)".into())
    })?;

    let token = generate_session_token(user.id, &user.email, jwt_config)
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;

    let cookie = build_session_cookie(&token, jwt_config.session_expiry_secs());
    Ok((
        AppendHeaders([(SET_COOKIE, cookie)]),
        Json(UserResponse::from(user)),
    ))
}
