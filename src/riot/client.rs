use std::fmt;
use std::time::Duration;

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::config::Config;
use crate::error::AppError;

#[derive(Debug, Error)]
pub enum RiotApiError {
    #[error("Reqwest error: {0}")]
    Reqwest(reqwest::Error),

    #[error("Decoding response body failed: {0}")]
    Decode(reqwest::Error),

    #[error("HTTP status error: {0}")]
    Status(StatusCode),
}

impl RiotApiError {
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Status(status) => Some(*status),
            Self::Reqwest(err) | Self::Decode(err) => err.status(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(StatusCode::NOT_FOUND)
    }
}

/// A call to Riot API can either result in a success with the success type or fail with a [`RiotApiError`].
pub type RiotApiResponse<T> = Result<T, RiotApiError>;

/// Where requests are sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiBase {
    /// `https://{cluster}.api.riotgames.com`
    Riot,
    /// Every cluster is served by the same base URL.
    Fixed(String),
}

impl ApiBase {
    pub fn url_for(&self, cluster: &str) -> String {
        match self {
            Self::Riot => format!("https://{}.api.riotgames.com", cluster),
            Self::Fixed(base) => base.trim_end_matches('/').to_string(),
        }
    }
}

#[derive(Clone)]
pub struct RiotClient {
    http: reqwest::Client,
    /// Riot API Key
    key: String,
    base: ApiBase,
}

impl fmt::Debug for RiotClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RiotClient")
            .field("base", &self.base)
            .field("key", &"<redacted>")
            .finish()
    }
}

impl RiotClient {
    pub fn new(config: &Config) -> Result<Self, AppError> {
        let base = match &config.riot_api_base_url {
            Some(url) => ApiBase::Fixed(url.clone()),
            None => ApiBase::Riot,
        };

        Self::with_base(
            config.riot_api_key.clone(),
            base,
            Duration::from_secs(config.request_timeout_secs),
        )
    }

    pub fn with_base(key: String, base: ApiBase, timeout: Duration) -> Result<Self, AppError> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self { http, key, base })
    }

    pub(crate) fn base_url(&self, cluster: &str) -> String {
        self.base.url_for(cluster)
    }

    /// Authenticated GET decoding a JSON body on `200 OK`.
    pub async fn get<T: DeserializeOwned>(&self, url: &str) -> RiotApiResponse<T> {
        let res = self.send(url).await?;

        match res.status() {
            StatusCode::OK => res.json().await.map_err(|e| {
                if e.is_decode() {
                    RiotApiError::Decode(e)
                } else {
                    RiotApiError::Reqwest(e)
                }
            }),
            status => Err(RiotApiError::Status(status)),
        }
    }

    /// Authenticated GET returning the raw response whatever its status.
    pub(crate) async fn send(&self, url: &str) -> RiotApiResponse<reqwest::Response> {
        tracing::trace!(url, "[RIOT::CLIENT] GET");

        self.http
            .get(url)
            .header("X-Riot-Token", &self.key)
            .send()
            .await
            .map_err(RiotApiError::Reqwest)
    }
}
