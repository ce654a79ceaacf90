use super::*;
use crate::net::api::{interpret_error, interpret_success};
use crate::session::{MemorySession, SessionStore};

fn admin() -> User {
    User {
        name: "Admin".to_owned(),
        email: "admin@tecunify.com".to_owned(),
        account_type: "ADMIN".to_owned(),
    }
}

// =============================================================================
// Phase transitions
// =============================================================================

#[test]
fn default_state_is_idle_with_no_user() {
    let state = AuthState::default();
    assert!(state.user.is_none());
    assert_eq!(state.phase, LoginPhase::Idle);
    assert!(!state.submitting());
    assert!(state.error().is_none());
}

#[test]
fn begin_submit_from_idle_starts_submission() {
    let mut state = AuthState::default();
    assert!(state.begin_submit());
    assert!(state.submitting());
}

#[test]
fn begin_submit_while_submitting_is_rejected() {
    let mut state = AuthState::default();
    assert!(state.begin_submit());
    assert!(!state.begin_submit());
    assert!(state.submitting());
}

#[test]
fn begin_submit_after_failure_is_allowed() {
    let mut state = AuthState::default();
    state.begin_submit();
    state.fail(Some("Invalid credentials".to_owned()));
    assert!(state.begin_submit());
}

#[test]
fn complete_records_user_and_returns_to_idle() {
    let mut state = AuthState::default();
    state.begin_submit();
    state.complete(admin());
    assert_eq!(state.user.as_ref().unwrap().email, "admin@tecunify.com");
    assert_eq!(state.phase, LoginPhase::Idle);
    assert!(!state.submitting());
}

// =============================================================================
// Failure messages
// =============================================================================

#[test]
fn fail_surfaces_server_message_verbatim() {
    let mut state = AuthState::default();
    state.begin_submit();
    state.fail(Some("Invalid credentials".to_owned()));
    assert_eq!(state.error(), Some("Invalid credentials"));
}

#[test]
fn fail_without_message_uses_generic_fallback() {
    let mut state = AuthState::default();
    state.begin_submit();
    state.fail(None);
    assert_eq!(state.error(), Some(GENERIC_LOGIN_ERROR));
}

#[test]
fn fail_with_empty_message_uses_generic_fallback() {
    let mut state = AuthState::default();
    state.begin_submit();
    state.fail(Some(String::new()));
    assert_eq!(state.error(), Some(GENERIC_LOGIN_ERROR));
}

#[test]
fn with_user_seeds_an_authenticated_idle_state() {
    let state = AuthState::with_user(Some(admin()));
    assert!(state.user.is_some());
    assert_eq!(state.phase, LoginPhase::Idle);
}

// =============================================================================
// End-to-end flow scenarios against the in-memory store
// =============================================================================

#[test]
fn successful_login_caches_record_and_opens_the_gate() {
    let store = MemorySession::new();
    let mut state = AuthState::default();

    assert!(state.begin_submit());
    let body = r#"{
        "message": "Login exitoso",
        "user": {"name": "Admin", "email": "admin@tecunify.com", "accountType": "ADMIN"}
    }"#;
    let user = interpret_success(body).unwrap();
    store.save(&user);
    state.complete(user);

    assert!(store.is_authenticated());
    assert_eq!(store.current().unwrap().email, "admin@tecunify.com");
    assert!(state.error().is_none());
    assert!(!state.submitting());
}

#[test]
fn rejected_login_surfaces_message_and_leaves_store_untouched() {
    let store = MemorySession::new();
    let mut state = AuthState::default();

    assert!(state.begin_submit());
    let err = interpret_error(r#"{"message": "Invalid credentials"}"#);
    state.fail(err.message);

    assert_eq!(state.error(), Some("Invalid credentials"));
    assert_eq!(store.current(), None);
    assert!(!store.is_authenticated());
}

#[test]
fn logout_clears_the_store_and_closes_the_gate() {
    let store = MemorySession::new();
    store.save(&admin());
    assert!(store.is_authenticated());

    store.clear();

    assert!(!store.is_authenticated());
    assert!(crate::util::guard::should_redirect(&store));
}
