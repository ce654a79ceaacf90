//! Login flow state: idle -> submitting -> success or failed.
//!
//! The `Submitting` phase doubles as the duplicate-request guard: at most
//! one login request is outstanding per form, serialized by
//! [`AuthState::begin_submit`].

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::User;

/// Shown when the server rejects a login without a usable message.
pub const GENERIC_LOGIN_ERROR: &str = "Unable to sign in. Please try again.";

/// Phase of the login submission flow.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum LoginPhase {
    /// No submission in flight.
    #[default]
    Idle,
    /// A request is outstanding; further submissions are ignored.
    Submitting,
    /// The last attempt failed; the message is displayed verbatim.
    Failed(String),
}

/// Authentication state tracking the current user and submission phase.
#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub user: Option<User>,
    pub phase: LoginPhase,
}

impl AuthState {
    /// Seed state from an existing session record, if any.
    #[must_use]
    pub fn with_user(user: Option<User>) -> Self {
        Self {
            user,
            phase: LoginPhase::Idle,
        }
    }

    /// Enter `Submitting`. Returns `false` (and changes nothing) when a
    /// submission is already in flight.
    pub fn begin_submit(&mut self) -> bool {
        if self.phase == LoginPhase::Submitting {
            return false;
        }
        self.phase = LoginPhase::Submitting;
        true
    }

    /// Record a successful login and return to a quiescent phase.
    pub fn complete(&mut self, user: User) {
        self.user = Some(user);
        self.phase = LoginPhase::Idle;
    }

    /// Record a failed login, keeping the flow resubmittable. An absent or
    /// empty server message falls back to [`GENERIC_LOGIN_ERROR`].
    pub fn fail(&mut self, message: Option<String>) {
        let message = message
            .filter(|text| !text.is_empty())
            .unwrap_or_else(|| GENERIC_LOGIN_ERROR.to_owned());
        self.phase = LoginPhase::Failed(message);
    }

    /// True while a submission is outstanding.
    #[must_use]
    pub fn submitting(&self) -> bool {
        self.phase == LoginPhase::Submitting
    }

    /// Error text to display, if the last attempt failed.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match &self.phase {
            LoginPhase::Failed(message) => Some(message),
            LoginPhase::Idle | LoginPhase::Submitting => None,
        }
    }
}
