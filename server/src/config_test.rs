use std::collections::HashMap;

use super::*;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| map.get(key).cloned()
}

// =============================================================================
// defaults
// =============================================================================

#[test]
fn empty_environment_uses_defaults() {
    let config = HostConfig::from_lookup(lookup(&[])).unwrap();
    assert_eq!(config, HostConfig::default());
    assert_eq!(config.port, 3000);
    assert_eq!(config.backend_url, "http://localhost:7777");
    assert_eq!(config.backend_timeout, Duration::from_secs(60));
    assert_eq!(config.max_upload_bytes, 10_485_760);
}

#[test]
fn blank_values_fall_back_to_defaults() {
    let config = HostConfig::from_lookup(lookup(&[("PORT", " "), ("MAX_UPLOAD_BYTES", "")])).unwrap();
    assert_eq!(config.port, DEFAULT_PORT);
    assert_eq!(config.max_upload_bytes, DEFAULT_MAX_UPLOAD_BYTES);
}

// =============================================================================
// overrides
// =============================================================================

#[test]
fn explicit_values_override_defaults() {
    let config = HostConfig::from_lookup(lookup(&[
        ("PORT", "8080"),
        ("BACKEND_URL", "https://api.example.com/"),
        ("BACKEND_TIMEOUT_SECS", "5"),
        ("MAX_UPLOAD_BYTES", "1024"),
    ]))
    .unwrap();
    assert_eq!(config.port, 8080);
    assert_eq!(config.backend_url, "https://api.example.com");
    assert_eq!(config.backend_timeout, Duration::from_secs(5));
    assert_eq!(config.max_upload_bytes, 1024);
}

#[test]
fn backend_url_trailing_slashes_are_trimmed() {
    let config = HostConfig::from_lookup(lookup(&[("BACKEND_URL", "http://backend:7777//")])).unwrap();
    assert_eq!(config.backend_url, "http://backend:7777");
}

// =============================================================================
// failures
// =============================================================================

#[test]
fn invalid_port_is_rejected() {
    let err = HostConfig::from_lookup(lookup(&[("PORT", "eighty")])).unwrap_err();
    assert_eq!(err, ConfigError::Invalid { var: "PORT", value: "eighty".into() });
}

#[test]
fn zero_timeout_is_rejected() {
    let err = HostConfig::from_lookup(lookup(&[("BACKEND_TIMEOUT_SECS", "0")])).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { var: "BACKEND_TIMEOUT_SECS", .. }));
}

#[test]
fn backend_url_without_scheme_is_rejected() {
    let err = HostConfig::from_lookup(lookup(&[("BACKEND_URL", "localhost:7777")])).unwrap_err();
    assert_eq!(err, ConfigError::BackendScheme("localhost:7777".into()));
}

// =============================================================================
// from_env
// =============================================================================

#[test]
fn from_env_reads_process_environment() {
    unsafe {
        std::env::set_var("BACKEND_URL", "http://from-env:9000/");
        std::env::remove_var("PORT");
        std::env::remove_var("BACKEND_TIMEOUT_SECS");
        std::env::remove_var("MAX_UPLOAD_BYTES");
    }
    let config = HostConfig::from_env().unwrap();
    assert_eq!(config.backend_url, "http://from-env:9000");
    assert_eq!(config.port, DEFAULT_PORT);
    unsafe { std::env::remove_var("BACKEND_URL") };
}
