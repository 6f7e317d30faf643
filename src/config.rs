use std::env;

use crate::error::AppError;
use crate::riot::Platform;

#[derive(Debug, Clone)]
pub struct Config {
    pub discord_token: String,
    pub riot_api_key: String,
    pub command_prefix: String,
    pub default_platform: Platform,
    pub request_timeout_secs: u64,
    pub riot_api_base_url: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        Self::from_source(|key| env::var(key).ok())
    }

    /// Build the configuration from any key/value source.
    pub fn from_source<F>(var: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        const DEFAULT_COMMAND_PREFIX: &str = "!";
        const DEFAULT_PLATFORM: Platform = Platform::EUW1;
        const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

        let required = |key: &str| {
            var(key)
                .filter(|v| !v.trim().is_empty())
                .ok_or_else(|| AppError::Config(format!("{key} must be set")))
        };

        let discord_token = required("DISCORD_TOKEN")?;
        let riot_api_key = required("RIOT_API_KEY")?;

        let command_prefix = var("COMMAND_PREFIX")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_COMMAND_PREFIX.into());

        let default_platform = match var("DEFAULT_REGION") {
            Some(code) => code.parse::<Platform>().map_err(|_| {
                AppError::Config(format!("DEFAULT_REGION '{code}' is not a known region"))
            })?,
            None => DEFAULT_PLATFORM,
        };

        let request_timeout_secs = var("RIOT_REQUEST_TIMEOUT_SECS")
            .and_then(|v| v.parse().ok())
            .filter(|secs: &u64| *secs > 0)
            .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS);

        let riot_api_base_url = var("RIOT_API_BASE_URL").filter(|v| !v.trim().is_empty());

        Ok(Self {
            discord_token,
            riot_api_key,
            command_prefix,
            default_platform,
            request_timeout_secs,
            riot_api_base_url,
        })
    }
}
