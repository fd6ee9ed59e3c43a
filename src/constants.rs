/// Channel that receives voice join/leave/move notifications
pub const VOICE_LOG_CHANNEL_ID: u64 = 1467108826217058471;

/// Accent color of voice log embeds (Discord blurple)
pub const VOICE_LOG_COLOR: u32 = 0x5865F2;

/// Port the interactions endpoint listens on when PORT is unset
pub const DEFAULT_PORT: u16 = 3000;

/// Discord epoch (2015-01-01T00:00:00Z) in milliseconds since the Unix epoch
pub const DISCORD_EPOCH_MS: u64 = 1_420_070_400_000;

/// Interaction types
pub const INTERACTION_TYPE_PING: u64 = 1;
pub const INTERACTION_TYPE_APPLICATION_COMMAND: u64 = 2;

/// Interaction callback types
pub const RESPONSE_TYPE_PONG: u8 = 1;
pub const RESPONSE_TYPE_CHANNEL_MESSAGE: u8 = 4;

/// Message flag marking a components-v2 message
pub const FLAG_IS_COMPONENTS_V2: u64 = 1 << 15;

/// Component type of a text display block
pub const COMPONENT_TEXT_DISPLAY: u8 = 10;

/// Log directive for the application
pub const LOG_DIRECTIVE: &str = "voice_log_bot=info";
