use super::*;

#[test]
fn from_status_keeps_server_message() {
    let err = ApiError::from_status(409, r#"{"message":"Event is full","statusCode":409}"#);
    assert_eq!(err, ApiError::Status { status: 409, message: Some("Event is full".to_owned()) });
    assert_eq!(err.user_message("fallback"), "Event is full");
}

#[test]
fn from_status_tolerates_non_json_body() {
    let err = ApiError::from_status(502, "<html>Bad Gateway</html>");
    assert_eq!(err, ApiError::Status { status: 502, message: None });
    assert_eq!(err.user_message("Failed to add events"), "Failed to add events");
}

#[test]
fn network_errors_use_fallback_message() {
    let err = ApiError::Network("connection refused".to_owned());
    assert_eq!(err.user_message("An unexpected error occurred. Please try again."), "An unexpected error occurred. Please try again.");
    assert_eq!(err.to_string(), "network error: connection refused");
}

#[test]
fn unauthorized_covers_401_and_403_only() {
    assert!(ApiError::from_status(401, "").is_unauthorized());
    assert!(ApiError::from_status(403, "").is_unauthorized());
    assert!(!ApiError::from_status(500, "").is_unauthorized());
    assert!(!ApiError::Unavailable.is_unauthorized());
}
