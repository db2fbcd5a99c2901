use super::*;

// =============================================================
// AuthState defaults
// =============================================================

#[test]
fn auth_state_default_no_user() {
    let state = AuthState::default();
    assert!(state.user.is_none());
}

#[test]
fn auth_state_default_not_loading() {
    let state = AuthState::default();
    assert!(!state.loading);
}

#[test]
fn auth_state_default_does_not_redirect_before_first_check() {
    let state = AuthState::default();
    assert!(!state.should_redirect_to_login());
}

// =============================================================
// Transitions
// =============================================================

#[test]
fn signed_in_stores_profile() {
    let mut state = AuthState::default();
    state.begin();
    assert!(state.loading);
    state.signed_in(AdminProfile { email: Some("a@b.c".to_owned()), ..AdminProfile::default() });
    assert!(!state.loading);
    assert!(!state.should_redirect_to_login());
    assert_eq!(state.user.unwrap().display_name(), "a@b.c");
}

#[test]
fn failed_check_redirects() {
    let mut state = AuthState::default();
    state.begin();
    assert!(!state.should_redirect_to_login());
    state.failed("Authentication failed".to_owned());
    assert!(state.should_redirect_to_login());
    assert_eq!(state.error.as_deref(), Some("Authentication failed"));
}

#[test]
fn begin_clears_previous_error() {
    let mut state = AuthState::default();
    state.failed("x".to_owned());
    state.begin();
    assert!(state.error.is_none());
}

#[test]
fn signed_out_drops_user() {
    let mut state = AuthState::default();
    state.signed_in(AdminProfile::default());
    state.signed_out();
    assert!(state.user.is_none());
    assert!(state.should_redirect_to_login());
}
