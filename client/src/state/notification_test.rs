use super::*;

#[test]
fn notification_defaults_hidden() {
    let state = NotificationState::default();
    assert!(!state.visible);
    assert!(state.message.is_empty());
}

#[test]
fn success_and_error_set_severity() {
    let mut state = NotificationState::default();
    state.success("Event added successfully!");
    assert!(state.visible);
    assert_eq!(state.severity, Severity::Success);
    state.error("Failed to delete event");
    assert_eq!(state.severity, Severity::Error);
    assert_eq!(state.message, "Failed to delete event");
}

#[test]
fn stale_auto_hide_does_not_hide_newer_message() {
    let mut state = NotificationState::default();
    let first = state.success("one");
    let second = state.success("two");
    state.hide(first);
    assert!(state.visible);
    state.hide(second);
    assert!(!state.visible);
}

#[test]
fn dismiss_hides_immediately() {
    let mut state = NotificationState::default();
    state.error("x");
    state.dismiss();
    assert!(!state.visible);
}

#[test]
fn severity_css_modifiers() {
    assert_eq!(Severity::Success.css_modifier(), "notification--success");
    assert_eq!(Severity::Error.css_modifier(), "notification--error");
}
