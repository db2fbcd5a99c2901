use std::collections::HashMap;

use super::*;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| vars.get(key).cloned()
}

// =============================================================================
// defaults
// =============================================================================

#[test]
fn empty_environment_uses_defaults() {
    let config = ServerConfig::from_lookup(lookup(&[])).unwrap();
    assert_eq!(config.port, 3000);
    assert_eq!(config.api_url, "http://localhost:3001");
    assert_eq!(config.guard_timeout, Duration::from_secs(10));
    assert!(!config.cookie_secure);
}

#[test]
fn profile_url_joins_api_base() {
    let config = ServerConfig::from_lookup(lookup(&[("API_URL", "https://api.example.com/v1/")])).unwrap();
    assert_eq!(config.api_url, "https://api.example.com/v1");
    assert_eq!(config.profile_url(), "https://api.example.com/v1/auth/profile");
}

// =============================================================================
// overrides
// =============================================================================

#[test]
fn explicit_values_override_defaults() {
    let config = ServerConfig::from_lookup(lookup(&[
        ("PORT", "8080"),
        ("GUARD_TIMEOUT_SECS", "3"),
        ("COOKIE_SECURE", "yes"),
    ]))
    .unwrap();
    assert_eq!(config.port, 8080);
    assert_eq!(config.guard_timeout, Duration::from_secs(3));
    assert!(config.cookie_secure);
}

#[test]
fn access_token_cookie_name_is_not_configurable() {
    let config = ServerConfig::from_lookup(lookup(&[("ACCESS_TOKEN_COOKIE", "session")])).unwrap();
    assert_eq!(config, ServerConfig::from_lookup(lookup(&[])).unwrap());
}

// =============================================================================
// rejects
// =============================================================================

#[test]
fn invalid_port_is_rejected() {
    let err = ServerConfig::from_lookup(lookup(&[("PORT", "eighty")])).unwrap_err();
    assert_eq!(err, ConfigError::Invalid { var: "PORT", value: "eighty".to_owned() });
}

#[test]
fn zero_timeout_is_rejected() {
    let err = ServerConfig::from_lookup(lookup(&[("GUARD_TIMEOUT_SECS", "0")])).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { var: "GUARD_TIMEOUT_SECS", .. }));
}

#[test]
fn relative_api_url_is_rejected() {
    let err = ServerConfig::from_lookup(lookup(&[("API_URL", "localhost:3001")])).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { var: "API_URL", .. }));
}

#[test]
fn unrecognized_bool_is_rejected() {
    let err = ServerConfig::from_lookup(lookup(&[("COOKIE_SECURE", "maybe")])).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { var: "COOKIE_SECURE", .. }));
}

// =============================================================================
// parse_bool
// =============================================================================

#[test]
fn parse_bool_true_variants() {
    for val in ["1", "true", "yes", "on", "TRUE", "  On  "] {
        assert_eq!(parse_bool(val), Some(true), "expected true for {val:?}");
    }
}

#[test]
fn parse_bool_false_variants() {
    for val in ["0", "false", "no", "off", "False"] {
        assert_eq!(parse_bool(val), Some(false), "expected false for {val:?}");
    }
}

#[test]
fn parse_bool_rejects_empty_and_unknown() {
    assert_eq!(parse_bool(""), None);
    assert_eq!(parse_bool("maybe"), None);
}
