use tracing::{info, instrument};

use crate::discord::bot::Context;
use crate::discord::embeds::ranked_stats_embed;
use crate::error::AppError;
use crate::lookup::{LookupRequest, lookup_ranked_stats};

/// Show the solo and flex ranked stats of a League of Legends player
#[poise::command(prefix_command, slash_command)]
#[instrument(skip(ctx), fields(user_id = %ctx.author().id))]
pub async fn summoner_data(
    ctx: Context<'_>,
    #[description = "Optional region followed by the Riot ID, e.g. na1 Faker#KR1"]
    #[rest]
    query: String,
) -> Result<(), AppError> {
    let request = LookupRequest::parse(&query, ctx.data().default_platform);

    // Three sequential API calls, keep the user informed meanwhile
    ctx.defer().await?;

    match lookup_ranked_stats(&ctx.data().riot, &request).await {
        Ok(stats) => {
            ctx.send(poise::CreateReply::default().embed(ranked_stats_embed(&stats)))
                .await?;
            info!(
                riot_id = %request.riot_id,
                region = %request.region,
                queues = stats.fields.len(),
                "Ranked stats sent"
            );
        }
        Err(err) => {
            info!(
                riot_id = %request.riot_id,
                region = %request.region,
                reason = ?err,
                "Lookup ended without stats"
            );
            ctx.say(err.to_string()).await?;
        }
    }

    Ok(())
}
