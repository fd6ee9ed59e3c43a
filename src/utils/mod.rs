/// Utility modules for common functionality
pub mod snowflake;
pub mod user_info;
pub mod voice_activity;
