use axum::http::HeaderMap;
use ed25519_dalek::{PUBLIC_KEY_LENGTH, SIGNATURE_LENGTH, Signature, VerifyingKey};
use thiserror::Error;
use tracing::warn;

use super::error::InteractionError;

pub const SIGNATURE_HEADER: &str = "x-signature-ed25519";
pub const TIMESTAMP_HEADER: &str = "x-signature-timestamp";

#[derive(Error, Debug)]
pub enum PublicKeyError {
    #[error("public key is not valid hex: {0}")]
    InvalidHex(#[from] hex::FromHexError),

    #[error("public key must be 32 bytes, got {0}")]
    InvalidLength(usize),

    #[error("public key is not a valid Ed25519 point: {0}")]
    InvalidKey(#[from] ed25519_dalek::SignatureError),
}

/// Parse the hex-encoded application public key
pub fn parse_public_key(hex_key: &str) -> Result<VerifyingKey, PublicKeyError> {
    let bytes = hex::decode(hex_key.trim())?;
    let bytes: [u8; PUBLIC_KEY_LENGTH] = bytes
        .as_slice()
        .try_into()
        .map_err(|_| PublicKeyError::InvalidLength(bytes.len()))?;
    Ok(VerifyingKey::from_bytes(&bytes)?)
}

fn header<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers.get(name).and_then(|value| value.to_str().ok())
}

/// Check that `body` was signed by Discord: the signature covers the
/// timestamp header followed by the raw body.
pub fn verify_request(
    key: &VerifyingKey,
    headers: &HeaderMap,
    body: &[u8],
) -> Result<(), InteractionError> {
    let (Some(signature_hex), Some(timestamp)) = (
        header(headers, SIGNATURE_HEADER),
        header(headers, TIMESTAMP_HEADER),
    ) else {
        warn!("Rejected interaction without signature headers");
        return Err(InteractionError::InvalidSignature);
    };

    let signature_bytes: [u8; SIGNATURE_LENGTH] = hex::decode(signature_hex)
        .ok()
        .and_then(|bytes| bytes.try_into().ok())
        .ok_or(InteractionError::InvalidSignature)?;
    let signature = Signature::from_bytes(&signature_bytes);

    let mut message = Vec::with_capacity(timestamp.len() + body.len());
    message.extend_from_slice(timestamp.as_bytes());
    message.extend_from_slice(body);

    key.verify_strict(&message, &signature).map_err(|e| {
        warn!("Rejected interaction with bad signature: {}", e);
        InteractionError::InvalidSignature
    })
}
