use crate::app_config::{AppConfig, Environment};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if values are invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if values are invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the process environment so tests can use a plain `HashMap`.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u32>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_usize = |var: &str, default: &str| -> Result<usize, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<usize>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let env = parse_environment(&or_default("CLIPSCOUT_ENV", "development"))?;
    let log_level = or_default("CLIPSCOUT_LOG_LEVEL", "info");

    let exa_api_key = lookup("EXA_API_KEY").ok().filter(|k| !k.trim().is_empty());
    let exa_base_url = or_default("CLIPSCOUT_EXA_BASE_URL", "https://api.exa.ai");

    let max_results = parse_usize("CLIPSCOUT_MAX_RESULTS", "10")?;
    if max_results == 0 {
        return Err(ConfigError::InvalidEnvVar {
            var: "CLIPSCOUT_MAX_RESULTS".to_string(),
            reason: "must be at least 1".to_string(),
        });
    }
    let search_results_per_query = parse_u32("CLIPSCOUT_SEARCH_RESULTS_PER_QUERY", "20")?;
    let search_max_retries = parse_u32("CLIPSCOUT_SEARCH_MAX_RETRIES", "2")?;
    let search_backoff_base_secs = parse_u64("CLIPSCOUT_SEARCH_BACKOFF_BASE_SECS", "2")?;

    let request_timeout_secs = parse_u64("CLIPSCOUT_REQUEST_TIMEOUT_SECS", "30")?;
    let verify_timeout_secs = parse_u64("CLIPSCOUT_VERIFY_TIMEOUT_SECS", "10")?;
    let user_agent = or_default("CLIPSCOUT_USER_AGENT", "clipscout/0.1 (video-metadata)");

    Ok(AppConfig {
        env,
        log_level,
        exa_api_key,
        exa_base_url,
        max_results,
        search_results_per_query,
        search_max_retries,
        search_backoff_base_secs,
        request_timeout_secs,
        verify_timeout_secs,
        user_agent,
    })
}

/// Parse a string into an `Environment` variant.
fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "CLIPSCOUT_ENV".to_string(),
            reason: format!("unknown environment \"{other}\""),
        }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
