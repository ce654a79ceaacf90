//! Route guard for protected pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every protected route component should apply identical unauthenticated
//! redirect behavior, so the redirect lives here rather than in each page.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::session::{Session, SessionStore};

/// True when an unauthenticated visitor must be sent to `/login`.
#[must_use]
pub fn should_redirect(store: &dyn SessionStore) -> bool {
    !store.is_authenticated()
}

/// Redirect to `/login` whenever no session record is present.
pub fn install_redirect<F>(session: Session, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if !session.is_authenticated() {
            navigate("/login", NavigateOptions::default());
        }
    });
}
