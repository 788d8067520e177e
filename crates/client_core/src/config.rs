use std::{fs, time::Duration};

use serde::Deserialize;
use thiserror::Error;
use url::Url;

pub const DEFAULT_API_BASE_URL: &str = "https://localhost:7045";
pub const DEFAULT_NOTIFICATION_TIMEOUT_SECS: u64 = 6;
pub const SETTINGS_FILE: &str = "customer_manager.toml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub api_base_url: String,
    pub notification_timeout: Duration,
    /// Local development backends usually serve a self-signed certificate.
    pub accept_invalid_certs: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.into(),
            notification_timeout: Duration::from_secs(DEFAULT_NOTIFICATION_TIMEOUT_SECS),
            accept_invalid_certs: false,
        }
    }
}

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to parse customer_manager.toml: {0}")]
    File(#[from] toml::de::Error),
    #[error("invalid api base url '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },
    #[error("invalid value for {name}: '{value}'")]
    InvalidEnv { name: &'static str, value: String },
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileSettings {
    api_url: Option<String>,
    notification_timeout_secs: Option<u64>,
    accept_invalid_certs: Option<bool>,
}

/// Defaults, then `customer_manager.toml` in the working directory, then the
/// environment.
pub fn load_settings() -> Result<Settings, SettingsError> {
    let file = fs::read_to_string(SETTINGS_FILE).ok();
    resolve_settings(file.as_deref(), |name| std::env::var(name).ok())
}

pub fn resolve_settings(
    file: Option<&str>,
    env: impl Fn(&str) -> Option<String>,
) -> Result<Settings, SettingsError> {
    let mut settings = Settings::default();

    if let Some(raw) = file {
        let file_cfg: FileSettings = toml::from_str(raw)?;
        if let Some(v) = file_cfg.api_url {
            settings.api_base_url = v;
        }
        if let Some(v) = file_cfg.notification_timeout_secs {
            settings.notification_timeout = Duration::from_secs(v);
        }
        if let Some(v) = file_cfg.accept_invalid_certs {
            settings.accept_invalid_certs = v;
        }
    }

    let read_env = |name: &str| env(name).filter(|value| !value.trim().is_empty());

    if let Some(v) = read_env("CUSTOMER_API_URL") {
        settings.api_base_url = v;
    }
    if let Some(v) = read_env("APP__API_URL") {
        settings.api_base_url = v;
    }

    if let Some(v) = read_env("APP__NOTIFICATION_TIMEOUT_SECS") {
        let secs = v.trim().parse::<u64>().map_err(|_| SettingsError::InvalidEnv {
            name: "APP__NOTIFICATION_TIMEOUT_SECS",
            value: v.clone(),
        })?;
        settings.notification_timeout = Duration::from_secs(secs);
    }

    if let Some(v) = read_env("APP__ACCEPT_INVALID_CERTS") {
        settings.accept_invalid_certs = parse_flag(&v).ok_or(SettingsError::InvalidEnv {
            name: "APP__ACCEPT_INVALID_CERTS",
            value: v.clone(),
        })?;
    }

    settings.api_base_url = normalize_base_url(&settings.api_base_url)?;
    Ok(settings)
}

/// Validates an http(s) base url and strips trailing slashes so route paths
/// can be appended directly.
pub fn normalize_base_url(raw: &str) -> Result<String, SettingsError> {
    let raw = raw.trim();
    let url = Url::parse(raw).map_err(|err| SettingsError::InvalidBaseUrl {
        url: raw.to_string(),
        reason: err.to_string(),
    })?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(SettingsError::InvalidBaseUrl {
            url: raw.to_string(),
            reason: format!("unsupported scheme '{}'", url.scheme()),
        });
    }

    Ok(url.as_str().trim_end_matches('/').to_string())
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
