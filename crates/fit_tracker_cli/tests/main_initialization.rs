// Tests for main.rs initialization logic

use fit_tracker_core::Biometrics;
use serial_test::serial;

#[test]
fn test_log_env_priority() {
    // FIT_TRACKER_LOG_LEVEL takes priority over RUST_LOG
    let both = |k: &str| match k {
        "FIT_TRACKER_LOG_LEVEL" => Some("trace".to_string()),
        "RUST_LOG" => Some("error".to_string()),
        _ => None,
    };
    assert_eq!(fit_tracker_cli::log_level(both), "trace");

    let rust_log_only = |k: &str| (k == "RUST_LOG").then(|| "error".to_string());
    assert_eq!(fit_tracker_cli::log_level(rust_log_only), "error");
    assert_eq!(fit_tracker_cli::log_level(|_| None), "info");
}

#[test]
fn test_env_filter_creation() {
    for level in ["trace", "debug", "info", "warn", "error"] {
        let filter = fit_tracker_cli::env_filter(level);
        assert!(filter.to_string().contains(level));
    }
}

#[test]
#[serial]
fn test_biometrics_from_process_env() {
    // SAFETY: serialized with the other env-mutating tests in this binary.
    unsafe {
        std::env::set_var("FIT_TRACKER_WEIGHT_KG", "72");
        std::env::set_var("FIT_TRACKER_HEIGHT_CM", "180");
    }
    let profile = Biometrics::from_env().expect("profile");
    assert_eq!(profile, Biometrics::new(72.0, 180.0));
    unsafe {
        std::env::remove_var("FIT_TRACKER_WEIGHT_KG");
        std::env::remove_var("FIT_TRACKER_HEIGHT_CM");
    }
}

#[test]
#[serial]
fn test_biometrics_missing_env() {
    unsafe {
        std::env::remove_var("FIT_TRACKER_WEIGHT_KG");
        std::env::remove_var("FIT_TRACKER_HEIGHT_CM");
    }
    assert!(Biometrics::from_env().is_err());
}
