use serde::Deserialize;

// ============================================================================
// Account-v1
// ============================================================================

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountDto {
    /// Missing on some malformed responses, checked before use.
    pub puuid: Option<String>,
    pub game_name: Option<String>,
    pub tag_line: Option<String>,
}

// ============================================================================
// Summoner-v4
// ============================================================================

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummonerDto {
    /// Encrypted summoner id, the key of League-v4 lookups.
    pub id: Option<String>,
    pub puuid: Option<String>,
    pub name: Option<String>,
    pub profile_icon_id: Option<i32>,
    pub summoner_level: Option<i64>,
}

// ============================================================================
// League-v4
// ============================================================================

pub const SOLO_QUEUE: &str = "RANKED_SOLO_5x5";
pub const FLEX_QUEUE: &str = "RANKED_FLEX_SR";

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeagueEntryDto {
    pub queue_type: String,
    #[serde(default)]
    pub tier: String,
    #[serde(default)]
    pub rank: String,
    #[serde(default)]
    pub league_points: u32,
    #[serde(default)]
    pub wins: u32,
    #[serde(default)]
    pub losses: u32,
}

impl LeagueEntryDto {
    pub fn is_solo_queue(&self) -> bool {
        self.queue_type == SOLO_QUEUE
    }

    pub fn is_flex_queue(&self) -> bool {
        self.queue_type == FLEX_QUEUE
    }
}
