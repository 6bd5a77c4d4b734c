use std::time::Duration;

use serde::{Deserialize, Serialize};

const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:8000";
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 120;

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum AppProfile {
    Dev,
    Prod,
}

impl AppProfile {
    pub fn from_env(value: Option<String>) -> Self {
        match value.as_deref() {
            Some("prod") | Some("production") => Self::Prod,
            _ => Self::Dev,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AppConfig {
    pub api_base_url: String,
    pub profile: AppProfile,
    pub request_timeout: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            profile: AppProfile::Dev,
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        #[cfg(not(target_arch = "wasm32"))]
        crate::config::load_dotenv();

        let mut config = Self::default();

        if let Some(url) = read_env("RFP_CONSOLE_API_BASE_URL") {
            config.api_base_url = url;
        }

        let profile_raw = read_env("RFP_CONSOLE_PROFILE");
        config.profile = AppProfile::from_env(profile_raw);

        if let Some(secs) =
            read_env("RFP_CONSOLE_REQUEST_TIMEOUT_SECS").and_then(|value| value.parse::<u64>().ok())
        {
            config.request_timeout = Duration::from_secs(secs.max(1));
        }

        config
    }
}

fn read_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .or_else(|| option_env_from_build(key).map(|s| s.to_string()))
}

fn option_env_from_build(key: &str) -> Option<&'static str> {
    match key {
        "RFP_CONSOLE_API_BASE_URL" => option_env!("RFP_CONSOLE_API_BASE_URL"),
        "RFP_CONSOLE_PROFILE" => option_env!("RFP_CONSOLE_PROFILE"),
        "RFP_CONSOLE_REQUEST_TIMEOUT_SECS" => option_env!("RFP_CONSOLE_REQUEST_TIMEOUT_SECS"),
        _ => None,
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn load_dotenv() {
    if let Err(err) = dotenvy::dotenv() {
        if !matches!(err, dotenvy::Error::Io(ref io_err) if io_err.kind() == std::io::ErrorKind::NotFound)
        {
            tracing::warn!("failed to load .env: {err}");
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[inline]
pub fn load_dotenv() {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_local_backend() {
        let config = AppConfig::default();
        assert_eq!(config.api_base_url, "http://127.0.0.1:8000");
        assert_eq!(config.profile, AppProfile::Dev);
    }

    #[test]
    fn profile_falls_back_to_dev() {
        assert_eq!(AppProfile::from_env(None), AppProfile::Dev);
        assert_eq!(
            AppProfile::from_env(Some("staging".into())),
            AppProfile::Dev
        );
        assert_eq!(
            AppProfile::from_env(Some("production".into())),
            AppProfile::Prod
        );
    }
}
