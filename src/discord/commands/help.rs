use crate::discord::bot::Context;
use crate::discord::embeds::help_embed;
use crate::error::AppError;

/// List the bot commands
#[poise::command(prefix_command, slash_command)]
pub async fn help(ctx: Context<'_>) -> Result<(), AppError> {
    let embed = help_embed(&ctx.data().command_prefix);

    ctx.send(poise::CreateReply::default().embed(embed)).await?;

    Ok(())
}
