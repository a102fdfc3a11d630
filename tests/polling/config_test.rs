/*!
 * Poll Configuration Tests
 *
 * Environment overrides mutate process-wide state, so these run serially.
 */

use pretty_assertions::assert_eq;
use probe_sync::timeout::{ENV_DURATION_SECS, ENV_POLL_INTERVAL_SECS};
use probe_sync::{PollConfig, Timeout};
use serial_test::serial;
use std::time::Duration;

fn clear_env() {
    std::env::remove_var(ENV_DURATION_SECS);
    std::env::remove_var(ENV_POLL_INTERVAL_SECS);
}

#[test]
#[serial]
fn test_from_env_defaults_when_unset() {
    clear_env();
    assert_eq!(PollConfig::from_env().unwrap(), PollConfig::new());
}

#[test]
#[serial]
fn test_from_env_applies_overrides() {
    clear_env();
    std::env::set_var(ENV_DURATION_SECS, "12.5");
    std::env::set_var(ENV_POLL_INTERVAL_SECS, " 0.05 ");

    let config = PollConfig::from_env().unwrap();
    clear_env();

    assert_eq!(config.duration, Duration::from_millis(12_500));
    assert_eq!(config.poll_interval, Duration::from_millis(50));
}

#[test]
#[serial]
fn test_from_env_rejects_non_numeric() {
    clear_env();
    std::env::set_var(ENV_DURATION_SECS, "forever");

    let err = PollConfig::from_env().unwrap_err();
    clear_env();

    assert!(err.is_contract_violation());
    assert!(err.message().contains(ENV_DURATION_SECS));
}

#[test]
#[serial]
fn test_from_env_rejects_negative() {
    clear_env();
    std::env::set_var(ENV_POLL_INTERVAL_SECS, "-1");

    let err = PollConfig::from_env().unwrap_err();
    clear_env();

    assert!(err.is_contract_violation());
}

#[test]
fn test_json_round_trip() {
    let config = PollConfig::relaxed();
    let json = serde_json::to_string(&config).unwrap();
    assert_eq!(json, r#"{"duration_secs":60.0,"poll_interval_secs":0.1}"#);
    assert_eq!(PollConfig::from_json(&json).unwrap(), config);
}

#[test]
fn test_timeout_from_config() {
    let timeout: Timeout = PollConfig::fast().timeout();
    assert_eq!(timeout.poll_interval(), Duration::from_millis(1));
    assert!(!timeout.timed_out());
}
