use std::fmt;

use thiserror::Error;

use crate::riot::Platform;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Discord error: {0}")]
    Discord(Box<serenity::Error>),

    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Riot API key rejected with status {status}")]
    AuthRejected { status: u16 },
}

impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::Discord(Box::new(err))
    }
}

/// Step of the ranked lookup chain an upstream failure happened in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupStep {
    Account,
    Summoner,
    League,
}

impl fmt::Display for LookupStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Account => "account",
            Self::Summoner => "summoner",
            Self::League => "ranked",
        };
        f.write_str(name)
    }
}

/// Every way a `summoner_data` invocation can fail.
///
/// The `Display` output is sent back to the user as is.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LookupError {
    #[error("Invalid region '{0}'. Valid regions are: {list}.", list = Platform::code_list())]
    InvalidRegion(String),

    #[error("Please provide a valid Riot ID in the format 'username#tagline'.")]
    InvalidIdentityFormat(String),

    #[error("Account lookup failed for {riot_id} @ {region}.")]
    AccountNotFound { riot_id: String, region: String },

    #[error("Account found for {riot_id} but no PUUID was returned.")]
    MalformedAccountPayload { riot_id: String },

    #[error("Couldn't fetch summoner data for {riot_id}.")]
    SummonerNotFound { riot_id: String },

    #[error("No ranked data found for {riot_id}.")]
    NoRankedData { riot_id: String },

    #[error("{riot_id} has no solo or flex ranked data.")]
    NoMatchingQueueType { riot_id: String },

    #[error("The Riot API couldn't complete the {step} lookup right now, please try again later.")]
    UpstreamUnavailable {
        step: LookupStep,
        status: Option<u16>,
    },
}
