use chrono::{DateTime, Utc};
use dashmap::DashMap;
use poise::serenity_prelude::{ChannelId, UserId};

/// State of a game started through a slash command; no command creates one yet
#[allow(dead_code)]
#[derive(Clone, Debug)]
pub struct GameState {
    pub started_by: UserId,
    pub started_at: DateTime<Utc>,
}

/// Bot state shared by the gateway handlers and the interactions endpoint
pub struct Data {
    /// Channel that receives voice activity embeds
    pub voice_log_channel: ChannelId,
    /// In-progress games keyed by game id; a missing entry means no game.
    /// Not persisted across restarts.
    #[allow(dead_code)]
    pub active_games: DashMap<String, GameState>,
}

impl Data {
    /// Create a new Data instance logging voice activity to the given channel
    pub fn new(voice_log_channel: ChannelId) -> Self {
        Self {
            voice_log_channel,
            active_games: DashMap::new(),
        }
    }
}

pub type Error = Box<dyn std::error::Error + Send + Sync>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_data_has_no_games() {
        let data = Data::new(ChannelId::new(1));
        assert_eq!(data.voice_log_channel, ChannelId::new(1));
        assert!(data.active_games.is_empty());
    }
}
