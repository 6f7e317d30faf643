use poise::serenity_prelude::CreateEmbed;

use crate::stats::RankedStats;

const STATS_COLOUR: u32 = 0x0099ff;
const HELP_COLOUR: u32 = 0x3498db;

pub fn ranked_stats_embed(stats: &RankedStats) -> CreateEmbed {
    CreateEmbed::new()
        .title(&stats.title)
        .color(STATS_COLOUR)
        .fields(
            stats
                .fields
                .iter()
                .map(|field| (field.heading, field.body.clone(), false)),
        )
}

pub fn help_embed(prefix: &str) -> CreateEmbed {
    CreateEmbed::new()
        .title("League Bot Commands")
        .color(HELP_COLOUR)
        .field(
            format!("{prefix}summoner_data <region> <username#tagline>"),
            format!(
                "Get ranked stats for a League player. The region can be omitted.\nExample: `{prefix}summoner_data kr Faker#KR1`"
            ),
            false,
        )
        .field(format!("{prefix}help"), "Show this message.", false)
}
