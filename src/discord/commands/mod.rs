mod help;
mod summoner_data;

pub use help::help;
pub use summoner_data::summoner_data;
