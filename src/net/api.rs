//! REST adapter for the remote administration API.
//!
//! Browser builds (`csr` feature) issue real HTTP calls via `gloo-net`;
//! native builds stub the request out.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result` outputs instead of panics. A rejected login carries
//! the server's message when the error body has one; network failures and
//! unparsable bodies carry no message and the view falls back to a generic
//! one. Response interpretation is split into pure helpers so it can be
//! unit-tested without a browser.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use crate::net::types::{ApiMessage, LoginResponse, User};

#[cfg(feature = "csr")]
use crate::net::types::LoginRequest;

/// Base URL of the administration API.
pub const API_BASE: &str = "http://localhost:8000/api";

/// A failed login attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoginError {
    /// Server-provided message, if the error body carried one.
    pub message: Option<String>,
}

impl LoginError {
    fn opaque() -> Self {
        Self { message: None }
    }
}

/// Interpret a 2xx login response body.
pub(crate) fn interpret_success(body: &str) -> Result<User, LoginError> {
    serde_json::from_str::<LoginResponse>(body)
        .map(|response| response.user)
        .map_err(|_| LoginError::opaque())
}

/// Interpret a non-2xx login response body.
pub(crate) fn interpret_error(body: &str) -> LoginError {
    let message = serde_json::from_str::<ApiMessage>(body)
        .ok()
        .and_then(|body| body.message);
    LoginError { message }
}

/// POST credentials to the login endpoint and return the user record.
///
/// # Errors
///
/// Returns [`LoginError`] with the server's message when the server rejected
/// the attempt, or with no message on network or parse failure.
pub async fn login(email: &str, password: &str) -> Result<User, LoginError> {
    #[cfg(feature = "csr")]
    {
        let url = format!("{API_BASE}/login/");
        let request = gloo_net::http::Request::post(&url)
            .json(&LoginRequest { email, password })
            .map_err(|_| LoginError::opaque())?;
        let response = request.send().await.map_err(|_| LoginError::opaque())?;
        let body = response.text().await.map_err(|_| LoginError::opaque())?;
        if response.ok() {
            interpret_success(&body)
        } else {
            Err(interpret_error(&body))
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (email, password);
        Err(LoginError::opaque())
    }
}
