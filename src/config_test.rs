use std::sync::{Mutex, MutexGuard};

use super::*;
use crate::test_log::LogBuffer;

static ENV_LOCK: Mutex<()> = Mutex::new(());

fn env_guard() -> MutexGuard<'static, ()> {
    ENV_LOCK.lock().unwrap_or_else(std::sync::PoisonError::into_inner)
}

/// # Safety
/// Callers must hold `env_guard()` so env mutations do not race.
unsafe fn clear_likes_env() {
    unsafe {
        std::env::remove_var("LIKES_ENV");
        std::env::remove_var("LIKES_BASE_URL");
        std::env::remove_var("LIKES_REQUEST_TIMEOUT_SECS");
        std::env::remove_var("LIKES_CONNECT_TIMEOUT_SECS");
    }
}

#[test]
fn local_environment_targets_loopback() {
    let cfg = LikesConfig::for_environment(Environment::Local);
    assert_eq!(cfg.base_url, "http://127.0.0.1:5000");
    assert_eq!(cfg.timeouts, Timeouts::default());
}

#[test]
fn deployed_environment_targets_https_host() {
    let cfg = LikesConfig::for_environment(Environment::Deployed);
    assert!(cfg.base_url.starts_with("https://"));
}

#[test]
fn with_base_url_trims_trailing_slashes() {
    let cfg = LikesConfig::default().with_base_url("https://example.test//");
    assert_eq!(cfg.base_url, "https://example.test");
}

#[test]
fn environment_parses_known_names() {
    assert_eq!("local".parse::<Environment>().unwrap(), Environment::Local);
    assert_eq!("deployed".parse::<Environment>().unwrap(), Environment::Deployed);
    assert_eq!(Environment::Deployed.to_string(), "deployed");
}

#[test]
fn environment_rejects_unknown_names() {
    let err = "staging".parse::<Environment>().unwrap_err();
    assert!(matches!(err, LikeError::ConfigParse(_)));
    assert!(err.to_string().contains("unknown environment 'staging'"));
}

#[test]
fn parse_or_warn_logs_unknown_names() {
    let (logs, _guard) = LogBuffer::install();

    assert_eq!(Environment::parse_or_warn("deploy"), None);
    assert_eq!(Environment::parse_or_warn("deployed"), Some(Environment::Deployed));

    let out = logs.contents();
    assert!(out.contains("ignoring unknown likes environment"), "missing log: {out}");
    assert!(out.contains("deploy"));
}

#[test]
fn with_environment_switches_default_url() {
    let cfg = LikesConfig::for_environment(Environment::Local).with_environment(Environment::Deployed);
    assert_eq!(cfg.environment, Environment::Deployed);
    assert_eq!(cfg.base_url, DEPLOYED_BASE_URL);
}

#[test]
fn with_environment_keeps_overridden_url() {
    let cfg = LikesConfig::for_environment(Environment::Local)
        .with_base_url("https://likes.example.test")
        .with_environment(Environment::Deployed);
    assert_eq!(cfg.environment, Environment::Deployed);
    assert_eq!(cfg.base_url, "https://likes.example.test");
}

#[test]
fn from_env_defaults_to_local() {
    let _guard = env_guard();
    unsafe { clear_likes_env() };

    let cfg = LikesConfig::from_env().unwrap();
    assert_eq!(cfg, LikesConfig::for_environment(Environment::Local));
}

#[test]
fn from_env_applies_overrides() {
    let _guard = env_guard();
    unsafe {
        clear_likes_env();
        std::env::set_var("LIKES_ENV", "deployed");
        std::env::set_var("LIKES_BASE_URL", "https://likes.example.test/");
        std::env::set_var("LIKES_REQUEST_TIMEOUT_SECS", "5");
        std::env::set_var("LIKES_CONNECT_TIMEOUT_SECS", "2");
    }

    let cfg = LikesConfig::from_env().unwrap();
    assert_eq!(cfg.environment, Environment::Deployed);
    assert_eq!(cfg.base_url, "https://likes.example.test");
    assert_eq!(cfg.timeouts, Timeouts { request_secs: 5, connect_secs: 2 });

    unsafe { clear_likes_env() };
}

#[test]
fn from_env_unknown_environment_errors() {
    let _guard = env_guard();
    unsafe {
        clear_likes_env();
        std::env::set_var("LIKES_ENV", "prod");
    }

    let err = LikesConfig::from_env().unwrap_err().to_string();
    assert!(err.contains("unknown environment"));

    unsafe { clear_likes_env() };
}
