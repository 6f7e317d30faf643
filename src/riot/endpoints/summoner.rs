use async_trait::async_trait;

use crate::riot::client::{RiotApiResponse, RiotClient};
use crate::riot::region::Platform;
use crate::riot::types::SummonerDto;

#[async_trait]
pub trait SummonerApi: Send + Sync {
    /// Get summoner by PUUID
    /// Uses platform routing (euw1, na1, kr, etc.)
    async fn get_summoner_by_puuid(
        &self,
        platform: Platform,
        puuid: &str,
    ) -> RiotApiResponse<SummonerDto>;
}

#[async_trait]
impl SummonerApi for RiotClient {
    async fn get_summoner_by_puuid(
        &self,
        platform: Platform,
        puuid: &str,
    ) -> RiotApiResponse<SummonerDto> {
        let url = format!(
            "{}/lol/summoner/v4/summoners/by-puuid/{}",
            self.base_url(platform.as_str()),
            puuid
        );

        self.get(&url).await
    }
}
