//! Admin session authentication.
//!
//! A single login/logout transition guards the admin surface: login with
//! the configured credentials issues an opaque session token, logout
//! revokes it, and every admin route checks the token through a middleware
//! layer. Credential comparison is constant-time to mitigate timing
//! attacks.

use std::collections::HashSet;
use std::sync::{Arc, RwLock};

use axum::{
    extract::Request,
    http::{header, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use subtle::ConstantTimeEq;

use crate::errors::{codes, ErrorDetails, ErrorResponse};

/// Header name for the admin session token.
pub const SESSION_TOKEN_HEADER: &str = "x-session-token";

/// In-memory store of live admin session tokens.
#[derive(Clone, Default)]
pub struct SessionStore {
    tokens: Arc<RwLock<HashSet<String>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a fresh session token.
    pub fn create(&self) -> String {
        let token = uuid::Uuid::new_v4().to_string();
        self.tokens
            .write()
            .expect("session lock poisoned")
            .insert(token.clone());
        token
    }

    pub fn is_valid(&self, token: &str) -> bool {
        self.tokens
            .read()
            .expect("session lock poisoned")
            .contains(token)
    }

    /// Revoke a token. Revoking an unknown token is a no-op.
    pub fn revoke(&self, token: &str) {
        self.tokens
            .write()
            .expect("session lock poisoned")
            .remove(token);
    }
}

/// Middleware requiring a valid admin session token on the request.
pub async fn session_auth_layer(sessions: SessionStore, request: Request, next: Next) -> Response {
    let provided = request
        .headers()
        .get(SESSION_TOKEN_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(|s| s.to_string())
        .or_else(|| {
            // Also accept the token as a bearer token
            request
                .headers()
                .get(header::AUTHORIZATION)
                .and_then(|v| v.to_str().ok())
                .and_then(|s| s.strip_prefix("Bearer "))
                .map(|s| s.to_string())
        });

    match provided {
        Some(token) if sessions.is_valid(&token) => next.run(request).await,
        Some(_) => unauthorized_response("Invalid or expired session token"),
        None => unauthorized_response("Missing session token"),
    }
}

/// Perform constant-time string comparison.
pub fn constant_time_compare(a: &str, b: &str) -> bool {
    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    a_bytes.ct_eq(b_bytes).into()
}

/// Create an unauthorized response.
fn unauthorized_response(message: &str) -> Response {
    let body = ErrorResponse {
        success: false,
        error: ErrorDetails {
            code: codes::UNAUTHORIZED.to_string(),
            message: message.to_string(),
        },
    };

    (StatusCode::UNAUTHORIZED, Json(body)).into_response()
}
