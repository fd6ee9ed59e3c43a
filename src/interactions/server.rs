use std::sync::Arc;

use axum::{
    Json, Router,
    body::Bytes,
    extract::State,
    http::HeaderMap,
    routing::post,
};
use ed25519_dalek::VerifyingKey;
use tokio::net::TcpListener;
use tracing::info;

use crate::models::{Data, Error};

use super::{
    dispatch::dispatch_body,
    error::InteractionError,
    signature::verify_request,
    types::InteractionResponse,
};

/// State shared by every interactions request
#[derive(Clone)]
pub struct AppState {
    pub public_key: VerifyingKey,
    pub data: Arc<Data>,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/interactions", post(handle_interaction))
        .with_state(state)
}

/// Verify, decode and dispatch one interaction
async fn handle_interaction(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<InteractionResponse>, InteractionError> {
    verify_request(&state.public_key, &headers, &body)?;
    let response = dispatch_body(&body, &state.data)?;
    Ok(Json(response))
}

/// Serve the interactions endpoint until the listener fails
pub async fn serve_interactions(port: u16, state: AppState) -> Result<(), Error> {
    let listener = TcpListener::bind(("0.0.0.0", port)).await?;
    info!("Listening on port {}", port);
    axum::serve(listener, router(state)).await?;
    Ok(())
}
