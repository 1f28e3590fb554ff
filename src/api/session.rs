//! Admin login/logout endpoints.

use axum::{extract::State, http::HeaderMap, Json};
use serde::{Deserialize, Serialize};

use super::{success, ApiResult};
use crate::auth::{constant_time_compare, SESSION_TOKEN_HEADER};
use crate::errors::AppError;
use crate::AppState;

/// Request body for admin login.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Issued session token.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
}

/// POST /api/admin/login - Exchange admin credentials for a session token.
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> ApiResult<LoginResponse> {
    let (Some(email), Some(password)) = (
        state.config.admin_email.as_deref(),
        state.config.admin_password.as_deref(),
    ) else {
        return Err(AppError::Unauthorized(
            "Admin login is not configured".to_string(),
        ));
    };

    // Evaluate both comparisons so a wrong email costs the same as a
    // wrong password.
    let email_ok = constant_time_compare(&request.email, email);
    let password_ok = constant_time_compare(&request.password, password);
    if !(email_ok && password_ok) {
        return Err(AppError::Unauthorized(
            "Invalid email or password".to_string(),
        ));
    }

    let token = state.sessions.create();
    success(LoginResponse { token })
}

/// POST /api/admin/logout - Revoke the current session token.
///
/// Runs behind the session middleware, so the token in the header is known
/// to be valid when this handler revokes it.
pub async fn logout(State(state): State<AppState>, headers: HeaderMap) -> ApiResult<()> {
    let token = headers
        .get(SESSION_TOKEN_HEADER)
        .and_then(|v| v.to_str().ok())
        .or_else(|| {
            headers
                .get(axum::http::header::AUTHORIZATION)
                .and_then(|v| v.to_str().ok())
                .and_then(|s| s.strip_prefix("Bearer "))
        });
    if let Some(token) = token {
        state.sessions.revoke(token);
    }
    success(())
}
