use poise::serenity_prelude::{
    self as serenity, ChannelId, CreateEmbed, CreateMessage, GuildId, Timestamp, VoiceState,
};
use tracing::{info, warn};

use crate::{
    constants::VOICE_LOG_COLOR,
    models::{Data, Error},
    utils::voice_activity::{VoiceActivity, VoiceTransition, classify},
};

/// Rendered voice log notification
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VoiceLogEntry {
    pub title: &'static str,
    pub description: String,
    pub color: u32,
}

impl From<&VoiceActivity> for VoiceLogEntry {
    fn from(activity: &VoiceActivity) -> Self {
        Self {
            title: activity.label(),
            description: activity.description(),
            color: VOICE_LOG_COLOR,
        }
    }
}

/// Capability to deliver voice log entries somewhere
pub trait VoiceLogSink {
    async fn send(&self, entry: &VoiceLogEntry) -> Result<(), Error>;
}

/// Sends entries as embeds to a guild text channel
pub struct ChannelLogSink<'a> {
    ctx: &'a serenity::Context,
    channel_id: ChannelId,
}

impl VoiceLogSink for ChannelLogSink<'_> {
    async fn send(&self, entry: &VoiceLogEntry) -> Result<(), Error> {
        let embed = CreateEmbed::new()
            .title(entry.title)
            .description(&entry.description)
            .color(entry.color)
            .timestamp(Timestamp::now());

        self.channel_id
            .send_message(self.ctx, CreateMessage::new().embed(embed))
            .await?;
        Ok(())
    }
}

/// Build the transition for a voice state update, skipping bots and unknown members
pub fn voice_transition(
    old_state: Option<&VoiceState>,
    new_state: &VoiceState,
) -> Option<VoiceTransition> {
    let member = new_state
        .member
        .as_ref()
        .or(old_state.and_then(|old| old.member.as_ref()))?;

    if member.user.bot {
        return None;
    }

    Some(VoiceTransition {
        member: member.user.id,
        before: old_state.and_then(|old| old.channel_id),
        after: new_state.channel_id,
    })
}

/// Send one activity to the sink; failures are logged and dropped
pub async fn deliver_voice_log(sink: &impl VoiceLogSink, activity: &VoiceActivity) {
    let entry = VoiceLogEntry::from(activity);
    if let Err(e) = sink.send(&entry).await {
        warn!("Failed to send voice log for {}: {}", activity.member(), e);
    }
}

fn log_channel_in_guild(
    ctx: &serenity::Context,
    guild_id: GuildId,
    channel_id: ChannelId,
) -> bool {
    guild_id
        .to_guild_cached(&ctx.cache)
        .is_some_and(|guild| guild.channels.contains_key(&channel_id))
}

/// Handle voice state updates (user joins/leaves/moves between voice channels)
pub async fn handle_voice_state_update(
    ctx: &serenity::Context,
    old_state: Option<VoiceState>,
    new_state: VoiceState,
    data: &Data,
) {
    let Some(transition) = voice_transition(old_state.as_ref(), &new_state) else {
        return;
    };

    let Some(guild_id) = new_state.guild_id else {
        return;
    };

    if !log_channel_in_guild(ctx, guild_id, data.voice_log_channel) {
        warn!(
            "Failed to find log channel {} in guild {}",
            data.voice_log_channel, guild_id
        );
        return;
    }

    let Some(activity) = classify(&transition) else {
        return;
    };

    info!("{} by user {}", activity.label(), activity.member());

    let sink = ChannelLogSink {
        ctx,
        channel_id: data.voice_log_channel,
    };
    deliver_voice_log(&sink, &activity).await;
}
