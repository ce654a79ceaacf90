//! Cross-page helpers.

pub mod guard;
