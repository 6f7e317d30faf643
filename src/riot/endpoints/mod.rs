mod account;
mod league;
mod summoner;

pub use account::AccountApi;
pub use league::LeagueApi;
pub use summoner::SummonerApi;

/// All APIs the ranked lookup chain depends on.
pub trait RankedLookupApi: AccountApi + SummonerApi + LeagueApi {}

impl<T: AccountApi + SummonerApi + LeagueApi> RankedLookupApi for T {}
