//! Turns League-v4 entries into the fields shown to the user.

use crate::riot::types::LeagueEntryDto;

/// Ranked queues shown by the bot, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RankedQueue {
    Solo,
    Flex,
}

impl RankedQueue {
    pub const DISPLAYED: [RankedQueue; 2] = [Self::Solo, Self::Flex];

    pub fn of(entry: &LeagueEntryDto) -> Option<Self> {
        if entry.is_solo_queue() {
            Some(Self::Solo)
        } else if entry.is_flex_queue() {
            Some(Self::Flex)
        } else {
            None
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Solo => "Solo Queue",
            Self::Flex => "Flex Queue",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct StatsField {
    pub heading: &'static str,
    pub body: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RankedStats {
    pub title: String,
    pub fields: Vec<StatsField>,
}

/// Win rate in percent rounded to one decimal, `0.0` when no game was played.
pub fn win_rate(wins: u32, losses: u32) -> f64 {
    let games = u64::from(wins) + u64::from(losses);
    if games == 0 {
        return 0.0;
    }

    (1000.0 * f64::from(wins) / games as f64).round() / 10.0
}

/// `GOLD` -> `Gold`
fn capitalize(tier: &str) -> String {
    let mut chars = tier.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

fn entry_body(entry: &LeagueEntryDto) -> String {
    format!(
        "{} {} - {} LP\nWinrate: {:.1}% ({}W / {}L)",
        capitalize(&entry.tier),
        entry.rank,
        entry.league_points,
        win_rate(entry.wins, entry.losses),
        entry.wins,
        entry.losses
    )
}

/// Build the presentation of the solo and flex entries, `None` if neither is present.
pub fn format_ranked_stats(summoner_name: &str, entries: &[LeagueEntryDto]) -> Option<RankedStats> {
    let fields: Vec<StatsField> = RankedQueue::DISPLAYED
        .iter()
        .filter_map(|queue| {
            entries
                .iter()
                .find(|entry| RankedQueue::of(entry) == Some(*queue))
                .map(|entry| StatsField {
                    heading: queue.title(),
                    body: entry_body(entry),
                })
        })
        .collect();

    if fields.is_empty() {
        return None;
    }

    Some(RankedStats {
        title: format!("{summoner_name}'s Ranked Stats"),
        fields,
    })
}
