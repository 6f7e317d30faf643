use std::process::ExitCode;

use poise::serenity_prelude as serenity;
use rankscout::{
    config::Config,
    discord::{Data, create_framework},
    error::AppError,
    logging,
    riot::RiotClient,
};
use tracing::{error, info};

#[tokio::main]
async fn main() -> ExitCode {
    logging::init();

    info!("🐙 Starting...");

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "❌ Invalid configuration");
            return ExitCode::FAILURE;
        }
    };

    match run(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "❌ Bot stopped");
            ExitCode::FAILURE
        }
    }
}

async fn run(config: Config) -> Result<(), AppError> {
    let data = Data {
        riot: RiotClient::new(&config)?,
        default_platform: config.default_platform,
        command_prefix: config.command_prefix.clone(),
    };

    let intents =
        serenity::GatewayIntents::non_privileged() | serenity::GatewayIntents::MESSAGE_CONTENT;

    let mut client = serenity::ClientBuilder::new(&config.discord_token, intents)
        .framework(create_framework(data))
        .await?;

    info!(
        default_region = %config.default_platform,
        prefix = %config.command_prefix,
        "🌐 Connecting to Discord gateway"
    );
    client.start().await?;

    Ok(())
}
