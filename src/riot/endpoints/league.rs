use async_trait::async_trait;

use crate::riot::client::{RiotApiResponse, RiotClient};
use crate::riot::region::Platform;
use crate::riot::types::LeagueEntryDto;

#[async_trait]
pub trait LeagueApi: Send + Sync {
    /// Get league entries (ranked info) for a summoner
    /// Uses platform routing (euw1, na1, kr, etc.)
    async fn get_league_entries_by_summoner(
        &self,
        platform: Platform,
        summoner_id: &str,
    ) -> RiotApiResponse<Vec<LeagueEntryDto>>;
}

#[async_trait]
impl LeagueApi for RiotClient {
    async fn get_league_entries_by_summoner(
        &self,
        platform: Platform,
        summoner_id: &str,
    ) -> RiotApiResponse<Vec<LeagueEntryDto>> {
        let url = format!(
            "{}/lol/league/v4/entries/by-summoner/{}",
            self.base_url(platform.as_str()),
            summoner_id
        );

        self.get(&url).await
    }
}
