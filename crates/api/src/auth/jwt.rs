//! HS256 session-token generation and validation.
//!
//! The whole session lives in the signed token: there is no server-side
//! session table. The token travels in an HttpOnly cookie and is re-issued
//! by the session guard once it has passed half its lifetime.

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use cineplan_core::types::DbId;

/// JWT claims embedded in every session token.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Subject -- the user's internal database id.
    pub sub: DbId,
    /// The user's email, for display and logging.
    pub email: String,
    /// Expiration time (UTC Unix timestamp).
    pub exp: i64,
    /// Issued-at time (UTC Unix timestamp).
    pub iat: i64,
    /// Unique token identifier (UUID v4) for audit.
    pub jti: String,
}

/// Configuration for session token generation and validation.
///
/// Absence of this config (no `JWT_SECRET` in the environment) means the
/// identity layer is unconfigured and the session guard fails open.
#[derive(Debug, Clone)]
pub struct JwtConfig {
    /// HMAC-SHA256 secret used to sign and verify tokens.
    pub secret: String,
    /// Session lifetime in minutes (default: 1440, i.e. 24 hours).
    pub session_expiry_mins: i64,
}

/// Default session expiry in minutes.
const DEFAULT_SESSION_EXPIRY_MINS: i64 = 1440;

impl JwtConfig {
    /// Load JWT configuration from environment variables.
    ///
    /// | Env Var                    | Required | Default |
    /// |----------------------------|----------|---------|
    /// | `JWT_SECRET`               | no       | --      |
    /// | `JWT_SESSION_EXPIRY_MINS`  | no       | `1440`  |
    ///
    /// Returns `None` when `JWT_SECRET` is unset or empty; the guard then
    /// lets requests through unauthenticated instead of failing closed.
    pub fn from_env() -> Option<Self> {
        let secret = std::env::var("JWT_SECRET").ok().filter(|s| !s.is_empty())?;

        let session_expiry_mins: i64 = std::env::var("JWT_SESSION_EXPIRY_MINS")
            .unwrap_or_else(|_| DEFAULT_SESSION_EXPIRY_MINS.to_string())
            .parse()
            .expect("JWT_SESSION_EXPIRY_MINS must be a valid i64");

        Some(Self {
            secret,
            session_expiry_mins,
        })
    }

    /// Session lifetime in seconds, for cookie Max-Age.
    pub fn session_expiry_secs(&self) -> i64 {
        self.session_expiry_mins * 60
    }
}

/// Generate an HS256 session token for the given user.
pub fn generate_session_token(
    user_id: DbId,
    email: &str,
    config: &JwtConfig,
) -> Result<String, jsonwebtoken::errors::Error> {
    let now = chrono::Utc::now().timestamp();
    let exp = now + config.session_expiry_mins * 60;

    let claims = Claims {
        sub: user_id,
        email: email.to_string(),
        exp,
        iat: now,
        jti: Uuid::new_v4().to_string(),
    };

    encode(
        &Header::default(), // HS256
        &claims,
        &EncodingKey::from_secret(config.secret.as_bytes()),
    )
}

/// Validate and decode a session token, returning the embedded [`Claims`].
///
/// Validates the signature, expiration, and issued-at claims automatically.
pub fn validate_session_token(
    token: &str,
    config: &JwtConfig,
) -> Result<Claims, jsonwebtoken::errors::Error> {
    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(config.secret.as_bytes()),
        &Validation::default(), // HS256, validates exp
    )?;
    Ok(token_data.claims)
}

/// Whether a valid token has passed half its lifetime and should be
/// re-issued on the response (sliding session).
pub fn should_refresh(claims: &Claims) -> bool {
    let now = chrono::Utc::now().timestamp();
    let half_life = (claims.exp - claims.iat) / 2;
    now >= claims.iat + half_life
}
