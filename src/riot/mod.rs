pub mod client;
pub mod credentials;
pub mod endpoints;
pub mod region;
pub mod types;

pub use client::{ApiBase, RiotApiError, RiotApiResponse, RiotClient};
pub use credentials::CredentialStatus;
pub use endpoints::{AccountApi, LeagueApi, RankedLookupApi, SummonerApi};
pub use region::{Platform, Region, resolve_routing};
pub use types::{AccountDto, LeagueEntryDto, SummonerDto};
