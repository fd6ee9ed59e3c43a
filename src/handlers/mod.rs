/// Handler modules for Discord gateway events
mod voice;

// Re-export main handler functions
pub use voice::handle_voice_state_update;
