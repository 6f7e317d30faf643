use std::fmt;
use std::str::FromStr;

use crate::error::LookupError;

/// Platform routing values for Riot API (Summoner-v4, League-v4)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    BR1,
    LA1,
    LA2,
    NA1,
    JP1,
    KR,
    EUN1,
    EUW1,
    ME1,
    RU,
    TR1,
    OC1,
    PH2,
    SG2,
    TH2,
    TW2,
    VN2,
}

impl Platform {
    pub const ALL: [Platform; 17] = [
        Self::NA1,
        Self::BR1,
        Self::LA1,
        Self::LA2,
        Self::OC1,
        Self::EUW1,
        Self::EUN1,
        Self::TR1,
        Self::RU,
        Self::ME1,
        Self::KR,
        Self::JP1,
        Self::PH2,
        Self::SG2,
        Self::TH2,
        Self::TW2,
        Self::VN2,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BR1 => "br1",
            Self::LA1 => "la1",
            Self::LA2 => "la2",
            Self::NA1 => "na1",
            Self::JP1 => "jp1",
            Self::KR => "kr",
            Self::EUN1 => "eun1",
            Self::EUW1 => "euw1",
            Self::ME1 => "me1",
            Self::RU => "ru",
            Self::TR1 => "tr1",
            Self::OC1 => "oc1",
            Self::PH2 => "ph2",
            Self::SG2 => "sg2",
            Self::TH2 => "th2",
            Self::TW2 => "tw2",
            Self::VN2 => "vn2",
        }
    }

    /// Routing cluster serving Account-v1 lookups for players of this platform.
    pub fn to_region(self) -> Region {
        match self {
            Self::BR1 | Self::LA1 | Self::LA2 | Self::NA1 | Self::OC1 => Region::Americas,
            Self::EUN1 | Self::EUW1 | Self::ME1 | Self::RU | Self::TR1 => Region::Europe,
            Self::JP1 | Self::KR | Self::PH2 | Self::SG2 | Self::TH2 | Self::TW2 | Self::VN2 => {
                Region::Asia
            }
        }
    }

    /// Comma separated list of every accepted platform code, used in error replies.
    pub fn code_list() -> String {
        Self::ALL
            .iter()
            .map(Platform::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl FromStr for Platform {
    type Err = LookupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "br1" => Ok(Self::BR1),
            "la1" | "lan1" => Ok(Self::LA1),
            "la2" | "las1" => Ok(Self::LA2),
            "na1" => Ok(Self::NA1),
            "jp1" => Ok(Self::JP1),
            "kr" => Ok(Self::KR),
            "eun1" | "eune1" => Ok(Self::EUN1),
            "euw1" => Ok(Self::EUW1),
            "me1" => Ok(Self::ME1),
            "ru" => Ok(Self::RU),
            "tr1" => Ok(Self::TR1),
            "oc1" => Ok(Self::OC1),
            "ph2" => Ok(Self::PH2),
            "sg2" => Ok(Self::SG2),
            "th2" => Ok(Self::TH2),
            "tw2" => Ok(Self::TW2),
            "vn2" => Ok(Self::VN2),
            _ => Err(LookupError::InvalidRegion(s.to_string())),
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Regional routing values for Riot API (Account-v1)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    Americas,
    Asia,
    Europe,
}

impl Region {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Americas => "americas",
            Self::Asia => "asia",
            Self::Europe => "europe",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resolve the routing cluster for a user supplied platform code.
pub fn resolve_routing(platform_code: &str) -> Result<(Platform, Region), LookupError> {
    let platform: Platform = platform_code.parse()?;
    Ok((platform, platform.to_region()))
}
