use pyxis_client::config::{PyxisConfig, get_env_or_default};
use pyxis_client::constants::{DEFAULT_BACKOFF_FACTOR, DEFAULT_RETRIES, DEFAULT_TIMEOUT_SECS};
use std::env;

#[test]
fn test_with_hostname_uses_crate_defaults() {
    let config = PyxisConfig::with_hostname("https://pyxis-prod-url/");

    assert_eq!(config.hostname, "https://pyxis-prod-url/");
    assert_eq!(config.retries, DEFAULT_RETRIES);
    assert_eq!(config.backoff_factor, DEFAULT_BACKOFF_FACTOR);
    assert!(config.verify);
    assert_eq!(config.timeout_secs, DEFAULT_TIMEOUT_SECS);
}

#[test]
fn test_new_reads_environment() {
    unsafe {
        env::set_var("PYXIS_SERVER", "https://pyxis-stage-url/");
        env::set_var("PYXIS_RETRIES", "7");
        env::set_var("PYXIS_BACKOFF_FACTOR", "0.5");
        env::set_var("PYXIS_SSL_VERIFY", "false");
        env::set_var("PYXIS_TIMEOUT_SECS", "5");
    }

    let config = PyxisConfig::new();
    assert_eq!(config.hostname, "https://pyxis-stage-url/");
    assert_eq!(config.retries, 7);
    assert_eq!(config.backoff_factor, 0.5);
    assert!(!config.verify);
    assert_eq!(config.timeout_secs, 5);

    unsafe {
        env::remove_var("PYXIS_SERVER");
        env::remove_var("PYXIS_RETRIES");
        env::remove_var("PYXIS_BACKOFF_FACTOR");
        env::remove_var("PYXIS_SSL_VERIFY");
        env::remove_var("PYXIS_TIMEOUT_SECS");
    }
}

#[test]
fn test_get_env_or_default_with_missing_var() {
    let result: String = get_env_or_default("PYXIS_TEST_MISSING_VAR", "default".to_string());
    assert_eq!(result, "default");
}

#[test]
fn test_get_env_or_default_with_existing_var() {
    unsafe {
        env::set_var("PYXIS_TEST_VAR_INT", "42");
    }
    let result: u32 = get_env_or_default("PYXIS_TEST_VAR_INT", 0);
    assert_eq!(result, 42);
    unsafe {
        env::remove_var("PYXIS_TEST_VAR_INT");
    }
}

#[test]
fn test_get_env_or_default_with_invalid_parse() {
    unsafe {
        env::set_var("PYXIS_TEST_VAR_INVALID", "not_a_number");
    }
    let result: u32 = get_env_or_default("PYXIS_TEST_VAR_INVALID", 99);
    assert_eq!(result, 99);
    unsafe {
        env::remove_var("PYXIS_TEST_VAR_INVALID");
    }
}
