//! Wire DTOs for the administration API boundary.
//!
//! DESIGN
//! ======
//! `User` doubles as the storage format for the cached session record, so
//! typed deserialization is also the shape validation for stored text:
//! a missing or mistyped field fails the parse and reads as logged-out.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Authenticated user record returned by the login endpoint and cached in
/// browser storage. Stored and cleared as a whole, never field-by-field.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Display name.
    pub name: String,
    /// Login email.
    pub email: String,
    /// Account type (e.g. `"ADMIN"`, `"USUARIO"`).
    #[serde(rename = "accountType")]
    pub account_type: String,
}

/// JSON body for `POST /api/login/`.
#[derive(Clone, Debug, Serialize)]
pub struct LoginRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

/// Success body of the login endpoint. Fields beyond `user` are ignored.
#[derive(Clone, Debug, Deserialize)]
pub struct LoginResponse {
    pub user: User,
}

/// Error body of the login endpoint; `message` is displayed verbatim.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ApiMessage {
    #[serde(default)]
    pub message: Option<String>,
}
