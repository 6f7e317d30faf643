use tracing::{error, info, warn};

use crate::error::AppError;
use crate::riot::{Platform, RiotClient};

use super::commands;

/// Shared data accessible in all commands
#[derive(Debug)]
pub struct Data {
    pub riot: RiotClient,
    pub default_platform: Platform,
    pub command_prefix: String,
}

pub type Context<'a> = poise::Context<'a, Data, AppError>;

pub fn create_framework(data: Data) -> poise::Framework<Data, AppError> {
    let prefix = data.command_prefix.clone();

    poise::Framework::builder()
        .options(poise::FrameworkOptions {
            commands: vec![commands::summoner_data(), commands::help()],
            prefix_options: poise::PrefixFrameworkOptions {
                prefix: Some(prefix),
                ..Default::default()
            },
            on_error: |error| {
                Box::pin(async move {
                    handle_error(error).await;
                })
            },
            ..Default::default()
        })
        .setup(|ctx, ready, framework| {
            Box::pin(async move {
                poise::builtins::register_globally(ctx, &framework.options().commands).await?;
                info!(
                    bot_name = %ready.user.name,
                    guild_count = ready.guilds.len(),
                    "🎮 Bot is ready"
                );

                // Diagnostic only, commands stay available whatever the outcome.
                let riot = data.riot.clone();
                tokio::spawn(async move {
                    let status = riot.check_credentials().await;
                    status.log();
                    if let Err(e) = status.into_result() {
                        error!(error = %e, "🔑 Ranked lookups will fail with this key");
                    }
                });

                Ok(data)
            })
        })
        .build()
}

async fn handle_error(error: poise::FrameworkError<'_, Data, AppError>) {
    match error {
        poise::FrameworkError::Command { error, ctx, .. } => {
            let command_name = ctx.command().name.as_str();
            error!(
                error = ?error,
                command = command_name,
                user_id = %ctx.author().id,
                "🎮 ❌ Command execution failed"
            );
            let _ = ctx.say("Something went wrong, please try again later.").await;
        }
        poise::FrameworkError::ArgumentParse { error, ctx, .. } => {
            warn!(
                error = %error,
                command = ctx.command().name.as_str(),
                "🎮 ⚠️ Invalid command argument"
            );
            let prefix = &ctx.data().command_prefix;
            let _ = ctx
                .say(format!(
                    "Usage: `{prefix}summoner_data <region> <username#tagline>`. See `{prefix}help`."
                ))
                .await;
        }
        other => {
            error!(error = ?other, "🎮 ❌ Unhandled framework error");
        }
    }
}
