//! Discord bot answering `summoner_data` with a player's League of Legends ranked stats.
//!
//! A command resolves the Riot ID through Account-v1, then Summoner-v4 and League-v4,
//! and replies with the solo and flex queue standings.

pub mod config;
pub mod discord;
pub mod error;
pub mod logging;
pub mod lookup;
pub mod riot;
pub mod stats;
