//! Account -> summoner -> league lookup chain behind `summoner_data`.

use std::fmt;
use std::str::FromStr;

use reqwest::StatusCode;
use tracing::{debug, instrument, warn};

use crate::error::{LookupError, LookupStep};
use crate::riot::{LeagueEntryDto, Platform, RankedLookupApi, RiotApiError, resolve_routing};
use crate::stats::{RankedStats, format_ranked_stats};

/// A `gameName#tagLine` pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RiotIdentity {
    pub game_name: String,
    pub tag_line: String,
}

impl FromStr for RiotIdentity {
    type Err = LookupError;

    /// Splits on the first `#` only, both halves must be non-empty.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        match trimmed.split_once('#') {
            Some((game_name, tag_line)) if !game_name.is_empty() && !tag_line.is_empty() => {
                Ok(Self {
                    game_name: game_name.to_string(),
                    tag_line: tag_line.to_string(),
                })
            }
            _ => Err(LookupError::InvalidIdentityFormat(s.to_string())),
        }
    }
}

impl fmt::Display for RiotIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.game_name, self.tag_line)
    }
}

/// Raw arguments of a `summoner_data` invocation, not validated yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupRequest {
    pub region: String,
    pub riot_id: String,
}

impl LookupRequest {
    /// `<region> <gameName>#<tagLine>` or just `<gameName>#<tagLine>`.
    ///
    /// The first token is taken as the region when it is a known platform or looks like a
    /// platform code (`mars1`), so typos are still reported. Otherwise the whole input is
    /// the Riot ID and `default_platform` is used.
    pub fn parse(args: &str, default_platform: Platform) -> Self {
        let args = args.trim();
        match args.split_once(char::is_whitespace) {
            Some((region, riot_id))
                if region.parse::<Platform>().is_ok() || looks_like_platform_code(region) =>
            {
                Self {
                    region: region.to_lowercase(),
                    riot_id: riot_id.trim().to_string(),
                }
            }
            _ => Self {
                region: default_platform.as_str().to_string(),
                riot_id: args.to_string(),
            },
        }
    }
}

/// Letters followed by digits, e.g. `euw1`, `oc1`, `mars1`.
fn looks_like_platform_code(token: &str) -> bool {
    let letters = token.trim_end_matches(|c: char| c.is_ascii_digit());
    letters.len() < token.len()
        && !letters.is_empty()
        && token.len() <= 5
        && letters.chars().all(|c| c.is_ascii_alphabetic())
}

/// Everything the chain gathered about a player.
#[derive(Debug, Clone)]
pub struct RankedProfile {
    pub identity: RiotIdentity,
    pub platform: Platform,
    pub display_name: String,
    pub entries: Vec<LeagueEntryDto>,
}

fn upstream(step: LookupStep, err: &RiotApiError) -> LookupError {
    LookupError::UpstreamUnavailable {
        step,
        status: err.status().map(|s| s.as_u16()),
    }
}

/// Run the three Riot API calls for `request`, stopping at the first failure.
#[instrument(skip(api), fields(region = %request.region, riot_id = %request.riot_id))]
pub async fn resolve_profile<A>(
    api: &A,
    request: &LookupRequest,
) -> Result<RankedProfile, LookupError>
where
    A: RankedLookupApi + ?Sized,
{
    let (platform, region) = resolve_routing(&request.region)?;
    let identity: RiotIdentity = request.riot_id.parse()?;
    let riot_id = identity.to_string();

    debug!(%region, "fetching account");
    let account = api
        .get_account_by_riot_id(region, &identity.game_name, &identity.tag_line)
        .await
        .map_err(|e| {
            warn!(status = ?e.status(), error = %e, %riot_id, %platform, "account lookup failed");
            match &e {
                RiotApiError::Status(StatusCode::NOT_FOUND) => LookupError::AccountNotFound {
                    riot_id: riot_id.clone(),
                    region: platform.to_string(),
                },
                RiotApiError::Decode(_) => LookupError::MalformedAccountPayload {
                    riot_id: riot_id.clone(),
                },
                _ => upstream(LookupStep::Account, &e),
            }
        })?;

    let Some(puuid) = account.puuid.as_deref().filter(|p| !p.is_empty()) else {
        warn!(%riot_id, ?account, "account payload carries no puuid");
        return Err(LookupError::MalformedAccountPayload { riot_id });
    };

    debug!(%platform, "fetching summoner");
    let summoner = api
        .get_summoner_by_puuid(platform, puuid)
        .await
        .map_err(|e| {
            warn!(status = ?e.status(), error = %e, %riot_id, %platform, "summoner lookup failed");
            match &e {
                RiotApiError::Status(StatusCode::NOT_FOUND) | RiotApiError::Decode(_) => {
                    LookupError::SummonerNotFound {
                        riot_id: riot_id.clone(),
                    }
                }
                _ => upstream(LookupStep::Summoner, &e),
            }
        })?;

    let Some(summoner_id) = summoner.id.as_deref().filter(|id| !id.is_empty()) else {
        warn!(%riot_id, "summoner payload carries no id");
        return Err(LookupError::SummonerNotFound { riot_id });
    };

    debug!(%platform, "fetching league entries");
    let entries = api
        .get_league_entries_by_summoner(platform, summoner_id)
        .await
        .map_err(|e| {
            warn!(status = ?e.status(), error = %e, %riot_id, %platform, "league lookup failed");
            if e.is_not_found() {
                LookupError::NoRankedData {
                    riot_id: riot_id.clone(),
                }
            } else {
                upstream(LookupStep::League, &e)
            }
        })?;

    let display_name = summoner
        .name
        .clone()
        .filter(|n| !n.is_empty())
        .or_else(|| account.game_name.clone())
        .unwrap_or_else(|| identity.game_name.clone());

    Ok(RankedProfile {
        identity,
        platform,
        display_name,
        entries,
    })
}

/// Resolve a player and format their solo/flex standings.
pub async fn lookup_ranked_stats<A>(
    api: &A,
    request: &LookupRequest,
) -> Result<RankedStats, LookupError>
where
    A: RankedLookupApi + ?Sized,
{
    let profile = resolve_profile(api, request).await?;
    let riot_id = profile.identity.to_string();

    if profile.entries.is_empty() {
        return Err(LookupError::NoRankedData { riot_id });
    }

    format_ranked_stats(&profile.display_name, &profile.entries)
        .ok_or(LookupError::NoMatchingQueueType { riot_id })
}
