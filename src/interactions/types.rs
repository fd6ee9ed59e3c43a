//! Wire types of the HTTP interactions endpoint.
//!
//! Only the fields the bot reads are modeled; everything else in the payload
//! is ignored during deserialization.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::constants::{
    COMPONENT_TEXT_DISPLAY, FLAG_IS_COMPONENTS_V2, INTERACTION_TYPE_APPLICATION_COMMAND,
    INTERACTION_TYPE_PING, RESPONSE_TYPE_CHANNEL_MESSAGE, RESPONSE_TYPE_PONG,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(from = "u64")]
pub enum InteractionType {
    Ping,
    ApplicationCommand,
    Other(u64),
}

impl From<u64> for InteractionType {
    fn from(value: u64) -> Self {
        match value {
            INTERACTION_TYPE_PING => InteractionType::Ping,
            INTERACTION_TYPE_APPLICATION_COMMAND => InteractionType::ApplicationCommand,
            other => InteractionType::Other(other),
        }
    }
}

/// Just the type of an interaction, decoded before the rest of the payload
#[derive(Clone, Copy, Debug, Deserialize)]
pub struct InteractionEnvelope {
    #[serde(rename = "type")]
    pub kind: InteractionType,
}

/// Decoded interaction request
#[derive(Clone, Debug, Deserialize)]
pub struct InteractionRequest {
    #[serde(rename = "type")]
    pub kind: InteractionType,
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub data: Option<CommandData>,
    /// Invoking member, present for guild invocations
    #[serde(default)]
    pub member: Option<MemberSnapshot>,
    /// Invoking user, present for DM invocations
    #[serde(default)]
    pub user: Option<UserSnapshot>,
    #[serde(default)]
    pub resolved: Option<Resolved>,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct CommandData {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub options: Vec<CommandOption>,
    #[serde(default)]
    pub resolved: Option<Resolved>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct CommandOption {
    pub name: String,
    #[serde(default)]
    pub value: Option<serde_json::Value>,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct Resolved {
    #[serde(default)]
    pub users: HashMap<String, UserSnapshot>,
    #[serde(default)]
    pub members: HashMap<String, MemberSnapshot>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct UserSnapshot {
    pub id: String,
    pub username: String,
    #[serde(default = "default_discriminator")]
    pub discriminator: String,
    #[serde(default)]
    pub bot: bool,
}

fn default_discriminator() -> String {
    "0".to_string()
}

/// Guild member; resolved members carry no embedded user
#[derive(Clone, Debug, Deserialize)]
pub struct MemberSnapshot {
    #[serde(default)]
    pub user: Option<UserSnapshot>,
    #[serde(default)]
    pub joined_at: Option<String>,
}

impl InteractionRequest {
    pub fn command_name(&self) -> Option<&str> {
        self.data.as_ref()?.name.as_deref()
    }

    pub fn options(&self) -> &[CommandOption] {
        self.data
            .as_ref()
            .map(|data| data.options.as_slice())
            .unwrap_or_default()
    }

    /// String value of the named option, if present
    pub fn option_str(&self, name: &str) -> Option<&str> {
        self.options()
            .iter()
            .find(|option| option.name == name)
            .and_then(|option| option.value.as_ref())
            .and_then(|value| value.as_str())
    }

    /// Resolved entities; `data.resolved` wins over a top-level `resolved`
    pub fn resolved(&self) -> Option<&Resolved> {
        self.data
            .as_ref()
            .and_then(|data| data.resolved.as_ref())
            .or(self.resolved.as_ref())
    }

    /// User who triggered the interaction
    pub fn invoking_user(&self) -> Option<&UserSnapshot> {
        self.member
            .as_ref()
            .and_then(|member| member.user.as_ref())
            .or(self.user.as_ref())
    }
}

/// Response sent back for a handled interaction
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(into = "ResponseBody")]
pub enum InteractionResponse {
    Pong,
    Message(MessageData),
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct MessageData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flags: Option<u64>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub components: Vec<Component>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Component {
    #[serde(rename = "type")]
    pub kind: u8,
    pub content: String,
}

impl MessageData {
    /// Plain text message
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            content: Some(content.into()),
            ..Default::default()
        }
    }

    /// Components-v2 message made of a single text display
    pub fn text_display(content: impl Into<String>) -> Self {
        Self {
            content: None,
            flags: Some(FLAG_IS_COMPONENTS_V2),
            components: vec![Component {
                kind: COMPONENT_TEXT_DISPLAY,
                content: content.into(),
            }],
        }
    }
}

#[derive(Serialize)]
struct ResponseBody {
    #[serde(rename = "type")]
    kind: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<MessageData>,
}

impl From<InteractionResponse> for ResponseBody {
    fn from(response: InteractionResponse) -> Self {
        match response {
            InteractionResponse::Pong => ResponseBody {
                kind: RESPONSE_TYPE_PONG,
                data: None,
            },
            InteractionResponse::Message(data) => ResponseBody {
                kind: RESPONSE_TYPE_CHANNEL_MESSAGE,
                data: Some(data),
            },
        }
    }
}
