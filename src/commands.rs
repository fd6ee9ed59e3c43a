//! Slash command registration.
//!
//! Commands are registered with Discord here, at gateway ready, but they are
//! answered by the HTTP interactions endpoint (`crate::interactions`), not by
//! the poise framework, which is why they are built as raw `CreateCommand`s.

use poise::serenity_prelude::{
    self as serenity, CommandOptionType, CreateCommand, CreateCommandOption, GuildId,
};
use tracing::info;

use crate::{interactions::Command, models::Error};

/// Registration payload for a slash command
pub fn command_definition(command: Command) -> CreateCommand {
    match command {
        Command::Test => CreateCommand::new(command.name()).description("Basic command"),
        Command::UserInfo => CreateCommand::new(command.name())
            .description("Show information about a user")
            .add_option(
                CreateCommandOption::new(CommandOptionType::User, "user", "The user to look up")
                    .required(false),
            ),
    }
}

pub fn command_definitions() -> Vec<CreateCommand> {
    Command::ALL.into_iter().map(command_definition).collect()
}

/// Register the slash commands in one guild, or globally when no guild is given
pub async fn register_commands(
    ctx: &serenity::Context,
    dev_guild_id: Option<u64>,
) -> Result<(), Error> {
    if let Some(guild_id) = dev_guild_id {
        info!("Registering commands in development guild: {}", guild_id);
        GuildId::new(guild_id)
            .set_commands(ctx, command_definitions())
            .await?;
        info!("Commands registered in guild {} (instant updates)", guild_id);
    } else {
        info!("Registering commands globally (may take up to 1 hour)");
        serenity::Command::set_global_commands(ctx, command_definitions()).await?;
        info!("Commands registered globally");
    }
    Ok(())
}
