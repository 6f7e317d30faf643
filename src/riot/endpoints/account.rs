use async_trait::async_trait;

use crate::riot::client::{RiotApiResponse, RiotClient};
use crate::riot::region::Region;
use crate::riot::types::AccountDto;

#[async_trait]
pub trait AccountApi: Send + Sync {
    /// Get account by Riot ID (game name + tag line)
    /// Uses regional routing (americas, europe, asia)
    async fn get_account_by_riot_id(
        &self,
        region: Region,
        game_name: &str,
        tag_line: &str,
    ) -> RiotApiResponse<AccountDto>;
}

#[async_trait]
impl AccountApi for RiotClient {
    async fn get_account_by_riot_id(
        &self,
        region: Region,
        game_name: &str,
        tag_line: &str,
    ) -> RiotApiResponse<AccountDto> {
        let url = format!(
            "{}/riot/account/v1/accounts/by-riot-id/{}/{}",
            self.base_url(region.as_str()),
            urlencoding::encode(game_name),
            urlencoding::encode(tag_line)
        );

        self.get(&url).await
    }
}
