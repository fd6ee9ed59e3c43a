mod commands;
mod constants;
mod handlers;
mod interactions;
mod models;
mod utils;

use ed25519_dalek::VerifyingKey;
use poise::serenity_prelude as serenity;
use std::sync::Arc;
use tracing::{error, info};

use crate::{
    commands::register_commands,
    constants::{DEFAULT_PORT, LOG_DIRECTIVE, VOICE_LOG_CHANNEL_ID},
    handlers::handle_voice_state_update,
    interactions::{AppState, parse_public_key, serve_interactions},
    models::{Data, Error},
};

#[tokio::main]
async fn main() {
    // Load environment variables from .env file if present
    let _ = dotenvy::dotenv();

    // Initialize logging
    initialize_logging();

    // Load configuration from environment
    let config = match load_configuration() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    let data = Arc::new(Data::new(serenity::ChannelId::new(config.voice_log_channel_id)));
    info!(
        "Bot started! Logging voice activity to channel {}",
        data.voice_log_channel
    );

    let state = AppState {
        public_key: config.public_key,
        data: Arc::clone(&data),
    };

    // Gateway client and interactions endpoint share one process
    let result = tokio::try_join!(
        start_bot(config.discord_token, Arc::clone(&data), config.dev_guild_id),
        serve_interactions(config.port, state),
    );

    if let Err(e) = result {
        error!("Bot error: {}", e);
        std::process::exit(1);
    }
}

/// Configuration loaded from environment variables
struct Config {
    discord_token: String,
    public_key: VerifyingKey,
    port: u16,
    voice_log_channel_id: u64,
    dev_guild_id: Option<u64>,
}

/// Initialize the logging system
fn initialize_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(LOG_DIRECTIVE.parse().expect("valid log directive")),
        )
        .init();
}

/// Load configuration from environment variables
fn load_configuration() -> Result<Config, Error> {
    let discord_token = std::env::var("DISCORD_TOKEN")
        .map_err(|_| "DISCORD_TOKEN environment variable not set. Set it with: export DISCORD_TOKEN=your_bot_token")?;

    let public_key = std::env::var("PUBLIC_KEY")
        .map_err(|_| "PUBLIC_KEY environment variable not set. Set it with: export PUBLIC_KEY=your_application_public_key")?;
    let public_key = parse_public_key(&public_key)?;

    let port = match std::env::var("PORT") {
        Ok(port) => port
            .parse::<u16>()
            .map_err(|_| format!("PORT must be a valid port number, got '{}'", port))?,
        Err(_) => DEFAULT_PORT,
    };

    let voice_log_channel_id = match std::env::var("VOICE_LOG_CHANNEL_ID") {
        Ok(id) => id
            .parse::<u64>()
            .ok()
            .filter(|id| *id != 0)
            .ok_or_else(|| format!("VOICE_LOG_CHANNEL_ID must be a channel id, got '{}'", id))?,
        Err(_) => VOICE_LOG_CHANNEL_ID,
    };

    // Optional: development guild ID for faster command registration
    let dev_guild_id = std::env::var("DEV_GUILD_ID")
        .ok()
        .and_then(|id| id.parse::<u64>().ok())
        .filter(|id| *id != 0);

    if dev_guild_id.is_some() {
        info!("Development mode: Commands will be registered to guild only");
    }

    Ok(Config {
        discord_token,
        public_key,
        port,
        voice_log_channel_id,
        dev_guild_id,
    })
}

/// Create and start the Discord gateway client
async fn start_bot(token: String, data: Arc<Data>, dev_guild_id: Option<u64>) -> Result<(), Error> {
    let framework = poise::Framework::<Arc<Data>, Error>::builder()
        .options(poise::FrameworkOptions {
            event_handler: |ctx, event, _framework, data| {
                Box::pin(async move {
                    if let serenity::FullEvent::VoiceStateUpdate { old, new } = event {
                        handle_voice_state_update(ctx, old.clone(), new.clone(), data).await;
                    }
                    Ok(())
                })
            },
            ..Default::default()
        })
        .setup(move |ctx, _ready, _framework| {
            Box::pin(async move {
                register_commands(ctx, dev_guild_id).await?;
                info!("Bot is ready!");
                Ok(data)
            })
        })
        .build();

    // Create client with required intents
    let intents = serenity::GatewayIntents::non_privileged()
        | serenity::GatewayIntents::GUILD_VOICE_STATES
        | serenity::GatewayIntents::GUILD_MEMBERS;

    let mut client = serenity::ClientBuilder::new(token, intents)
        .framework(framework)
        .await?;

    // Start the bot
    info!("Starting bot...");
    client.start().await?;

    Ok(())
}
