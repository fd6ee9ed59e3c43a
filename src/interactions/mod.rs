/// HTTP interactions endpoint: signature check, decoding and command dispatch
mod dispatch;
mod error;
mod server;
mod signature;
mod types;

pub use dispatch::Command;
pub use server::{AppState, serve_interactions};
pub use signature::parse_public_key;
