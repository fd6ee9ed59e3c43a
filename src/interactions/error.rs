use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

/// Errors returned to the caller of the interactions endpoint.
///
/// Every variant renders as `{"error": "<message>"}` with the status from
/// [`InteractionError::status`].
#[derive(Error, Debug)]
pub enum InteractionError {
    /// Signature headers missing or the signature does not verify
    #[error("invalid request signature")]
    InvalidSignature,

    /// Body is not a decodable interaction
    #[error("malformed interaction body")]
    MalformedBody(#[from] serde_json::Error),

    #[error("unknown interaction type")]
    UnknownInteractionType,

    /// Application command whose name the bot does not handle
    #[error("unknown command")]
    UnknownCommand(Option<String>),

    /// No target or invoking user could be found in the payload
    #[error("unable to resolve user")]
    UnresolvedUser,

    #[error("invalid user id")]
    InvalidUserId(String),
}

impl InteractionError {
    pub fn status(&self) -> StatusCode {
        match self {
            InteractionError::InvalidSignature => StatusCode::UNAUTHORIZED,
            InteractionError::MalformedBody(_)
            | InteractionError::UnknownInteractionType
            | InteractionError::UnknownCommand(_)
            | InteractionError::UnresolvedUser
            | InteractionError::InvalidUserId(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for InteractionError {
    fn into_response(self) -> Response {
        (self.status(), Json(json!({ "error": self.to_string() }))).into_response()
    }
}
