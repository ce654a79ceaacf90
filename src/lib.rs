//! # tecunify-admin
//!
//! Leptos + WASM front-end for the tecUnify administration console.
//! Provides session-based login against the remote administration API,
//! a protected dashboard route, and logout.
//!
//! The session is a single user record cached in browser `localStorage`;
//! presence of a parsable record is the sole definition of "authenticated".
//! The storage capability is injectable (see [`session`]) so the gate and
//! the login/logout flows unit-test against an in-memory fake.

pub mod app;
pub mod net;
pub mod pages;
pub mod session;
pub mod state;
pub mod util;
