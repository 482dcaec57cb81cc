use std::env;

use ais_dashboard::DashboardConfig;
use dotenv::dotenv;
use thiserror::Error;

use crate::cli::CliArgs;

pub const BASE_URL_ENV: &str = "AIS_DASHBOARD_URL";
pub const THRESHOLD_ENV: &str = "AIS_RISK_THRESHOLD";
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("backend URL must start with http:// or https://, got {0:?}")]
    InvalidBaseUrl(String),
}

/// Resolved settings for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub dashboard: DashboardConfig,
    /// Raw threshold text; validated by the risk form like the slider value.
    pub threshold: String,
}

/// Reads `.env`, then the process environment; command-line flags win.
pub fn load(args: &CliArgs) -> Result<Settings, ConfigError> {
    dotenv().ok();
    resolve(args, |key| env::var(key).ok())
}

pub fn resolve(
    args: &CliArgs,
    lookup: impl Fn(&str) -> Option<String>,
) -> Result<Settings, ConfigError> {
    let base_url = args
        .base_url
        .clone()
        .or_else(|| lookup(BASE_URL_ENV))
        .map(|url| url.trim().to_string())
        .filter(|url| !url.is_empty())
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

    if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
        return Err(ConfigError::InvalidBaseUrl(base_url));
    }

    let dashboard = DashboardConfig::with_base_url(base_url);
    let threshold = args
        .threshold
        .clone()
        .or_else(|| lookup(THRESHOLD_ENV))
        .unwrap_or_else(|| dashboard.default_threshold.to_string());

    Ok(Settings {
        dashboard,
        threshold,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::collections::HashMap;

    fn args(flags: &[&str]) -> CliArgs {
        CliArgs::try_parse_from(std::iter::once("ais-dashboard").chain(flags.iter().copied()))
            .unwrap()
    }

    fn env_of(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| ((*key).to_string(), (*value).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn falls_back_to_local_backend_and_default_threshold() {
        let settings = resolve(&args(&[]), env_of(&[])).unwrap();
        assert_eq!(settings.dashboard.base_url, DEFAULT_BASE_URL);
        assert_eq!(settings.threshold, "70");
    }

    #[test]
    fn environment_fills_unset_flags() {
        let settings = resolve(
            &args(&[]),
            env_of(&[(BASE_URL_ENV, "https://ais.example"), (THRESHOLD_ENV, "40")]),
        )
        .unwrap();
        assert_eq!(settings.dashboard.base_url, "https://ais.example");
        assert_eq!(settings.threshold, "40");
    }

    #[test]
    fn flags_override_environment() {
        let settings = resolve(
            &args(&["--base-url", "http://127.0.0.1:9000", "--threshold", "90"]),
            env_of(&[(BASE_URL_ENV, "https://ais.example"), (THRESHOLD_ENV, "40")]),
        )
        .unwrap();
        assert_eq!(settings.dashboard.base_url, "http://127.0.0.1:9000");
        assert_eq!(settings.threshold, "90");
    }

    #[test]
    fn rejects_non_http_backend() {
        let error = resolve(&args(&["--base-url", "ftp://ais"]), env_of(&[])).unwrap_err();
        assert_eq!(error, ConfigError::InvalidBaseUrl("ftp://ais".to_string()));
    }
}
