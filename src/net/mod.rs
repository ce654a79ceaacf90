//! Networking: wire DTOs and the login API adapter.

pub mod api;
pub mod types;
