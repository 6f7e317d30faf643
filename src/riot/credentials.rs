//! One-shot diagnostic of the configured Riot API key.

use reqwest::StatusCode;
use tracing::{error, info, warn};

use crate::error::AppError;
use crate::riot::client::RiotClient;
use crate::riot::region::Region;

/// Known account probed to validate the key.
const PROBE_GAME_NAME: &str = "zeno";
const PROBE_TAG_LINE: &str = "csx";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialStatus {
    Valid,
    Forbidden,
    Unauthorized,
    RateLimited,
    Other(u16),
    Unreachable,
}

impl CredentialStatus {
    pub fn from_status(status: StatusCode) -> Self {
        match status {
            StatusCode::OK => Self::Valid,
            StatusCode::FORBIDDEN => Self::Forbidden,
            StatusCode::UNAUTHORIZED => Self::Unauthorized,
            StatusCode::TOO_MANY_REQUESTS => Self::RateLimited,
            other => Self::Other(other.as_u16()),
        }
    }

    /// `Err` only when the key itself was refused.
    pub fn into_result(self) -> Result<(), AppError> {
        match self {
            Self::Forbidden => Err(AppError::AuthRejected { status: 403 }),
            Self::Unauthorized => Err(AppError::AuthRejected { status: 401 }),
            _ => Ok(()),
        }
    }

    pub fn log(self) {
        match self {
            Self::Valid => info!("🔑 Riot API key valid"),
            Self::Forbidden => error!(status = 403, "❌ Riot API key rejected: 403 Forbidden"),
            Self::Unauthorized => error!(status = 401, "❌ Riot API key unauthorized: 401"),
            Self::RateLimited => {
                warn!(status = 429, "⚠️ Riot API rate limited: 429 Too Many Requests")
            }
            Self::Other(status) => error!(status, "❌ Riot API key check failed"),
            Self::Unreachable => error!("❌ Riot API unreachable during key check"),
        }
    }
}

impl RiotClient {
    /// Probe the Account-v1 API once and classify the answer.
    pub async fn check_credentials(&self) -> CredentialStatus {
        let url = format!(
            "{}/riot/account/v1/accounts/by-riot-id/{}/{}",
            self.base_url(Region::Europe.as_str()),
            PROBE_GAME_NAME,
            PROBE_TAG_LINE
        );

        match self.send(&url).await {
            Ok(res) => CredentialStatus::from_status(res.status()),
            Err(e) => {
                warn!(error = %e, "Riot API key check request failed");
                CredentialStatus::Unreachable
            }
        }
    }
}
