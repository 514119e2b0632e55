use std::collections::HashMap;
use std::env::VarError;

use super::*;

fn lookup_from_map<'a>(
    map: &'a HashMap<&'a str, &'a str>,
) -> impl Fn(&str) -> Result<String, VarError> + 'a {
    move |key| {
        map.get(key)
            .map(|v| (*v).to_string())
            .ok_or(VarError::NotPresent)
    }
}

#[test]
fn parse_environment_development() {
    assert_eq!(
        parse_environment("development").unwrap(),
        Environment::Development
    );
}

#[test]
fn parse_environment_test() {
    assert_eq!(parse_environment("test").unwrap(), Environment::Test);
}

#[test]
fn parse_environment_production() {
    assert_eq!(
        parse_environment("production").unwrap(),
        Environment::Production
    );
}

#[test]
fn parse_environment_unknown_fails() {
    let err = parse_environment("unknown").unwrap_err();
    assert!(matches!(err, ConfigError::InvalidEnvVar { ref var, .. } if var == "CLIPSCOUT_ENV"));
}

#[test]
fn build_app_config_defaults_with_empty_env() {
    let map: HashMap<&str, &str> = HashMap::new();
    let result = build_app_config(lookup_from_map(&map));
    assert!(result.is_ok(), "expected Ok, got: {result:?}");
    let cfg = result.unwrap();
    assert_eq!(cfg.env, Environment::Development);
    assert_eq!(cfg.log_level, "info");
    assert!(cfg.exa_api_key.is_none());
    assert_eq!(cfg.exa_base_url, "https://api.exa.ai");
    assert_eq!(cfg.max_results, 10);
    assert_eq!(cfg.search_results_per_query, 20);
    assert_eq!(cfg.search_max_retries, 2);
    assert_eq!(cfg.search_backoff_base_secs, 2);
    assert_eq!(cfg.request_timeout_secs, 30);
    assert_eq!(cfg.verify_timeout_secs, 10);
    assert_eq!(cfg.user_agent, "clipscout/0.1 (video-metadata)");
}

#[test]
fn build_app_config_reads_exa_api_key() {
    let mut map = HashMap::new();
    map.insert("EXA_API_KEY", "exa-secret");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.exa_api_key.as_deref(), Some("exa-secret"));
}

#[test]
fn build_app_config_blank_exa_api_key_is_none() {
    let mut map = HashMap::new();
    map.insert("EXA_API_KEY", "   ");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert!(cfg.exa_api_key.is_none());
}

#[test]
fn debug_output_redacts_exa_api_key() {
    let mut map = HashMap::new();
    map.insert("EXA_API_KEY", "exa-secret");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    let rendered = format!("{cfg:?}");
    assert!(!rendered.contains("exa-secret"));
    assert!(rendered.contains("[redacted]"));
}

#[test]
fn build_app_config_fails_with_invalid_env() {
    let mut map = HashMap::new();
    map.insert("CLIPSCOUT_ENV", "staging");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "CLIPSCOUT_ENV"),
        "expected InvalidEnvVar(CLIPSCOUT_ENV), got: {result:?}"
    );
}

#[test]
fn max_results_override() {
    let mut map = HashMap::new();
    map.insert("CLIPSCOUT_MAX_RESULTS", "25");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.max_results, 25);
}

#[test]
fn max_results_zero_is_rejected() {
    let mut map = HashMap::new();
    map.insert("CLIPSCOUT_MAX_RESULTS", "0");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "CLIPSCOUT_MAX_RESULTS"),
        "expected InvalidEnvVar(CLIPSCOUT_MAX_RESULTS), got: {result:?}"
    );
}

#[test]
fn max_results_invalid() {
    let mut map = HashMap::new();
    map.insert("CLIPSCOUT_MAX_RESULTS", "lots");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "CLIPSCOUT_MAX_RESULTS"),
        "expected InvalidEnvVar(CLIPSCOUT_MAX_RESULTS), got: {result:?}"
    );
}

#[test]
fn search_results_per_query_invalid() {
    let mut map = HashMap::new();
    map.insert("CLIPSCOUT_SEARCH_RESULTS_PER_QUERY", "-3");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "CLIPSCOUT_SEARCH_RESULTS_PER_QUERY"),
        "expected InvalidEnvVar(CLIPSCOUT_SEARCH_RESULTS_PER_QUERY), got: {result:?}"
    );
}

#[test]
fn request_timeout_secs_override() {
    let mut map = HashMap::new();
    map.insert("CLIPSCOUT_REQUEST_TIMEOUT_SECS", "60");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.request_timeout_secs, 60);
}

#[test]
fn verify_timeout_secs_invalid() {
    let mut map = HashMap::new();
    map.insert("CLIPSCOUT_VERIFY_TIMEOUT_SECS", "soon");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "CLIPSCOUT_VERIFY_TIMEOUT_SECS"),
        "expected InvalidEnvVar(CLIPSCOUT_VERIFY_TIMEOUT_SECS), got: {result:?}"
    );
}

#[test]
fn user_agent_and_base_url_override() {
    let mut map = HashMap::new();
    map.insert("CLIPSCOUT_USER_AGENT", "custom-agent/2.0");
    map.insert("CLIPSCOUT_EXA_BASE_URL", "http://127.0.0.1:9999");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.user_agent, "custom-agent/2.0");
    assert_eq!(cfg.exa_base_url, "http://127.0.0.1:9999");
}

#[test]
fn search_retry_overrides() {
    let mut map = HashMap::new();
    map.insert("CLIPSCOUT_SEARCH_MAX_RETRIES", "0");
    map.insert("CLIPSCOUT_SEARCH_BACKOFF_BASE_SECS", "5");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.search_max_retries, 0);
    assert_eq!(cfg.search_backoff_base_secs, 5);
}
