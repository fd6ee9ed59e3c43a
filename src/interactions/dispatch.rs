use tracing::{error, info};

use crate::{
    models::Data,
    utils::{
        snowflake::{parse_snowflake, snowflake_created_at},
        user_info::{UserProfile, format_user_info, parse_joined_at},
    },
};

use super::{
    error::InteractionError,
    types::{
        InteractionEnvelope, InteractionRequest, InteractionResponse, InteractionType, MessageData,
    },
};

/// Slash commands answered over the interactions endpoint
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Test,
    UserInfo,
}

impl Command {
    pub const ALL: [Command; 2] = [Command::Test, Command::UserInfo];

    pub fn name(self) -> &'static str {
        match self {
            Command::Test => "test",
            Command::UserInfo => "userinfo",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|command| command.name() == name)
    }
}

/// Turn a decoded interaction into the response sent back to Discord
pub fn dispatch(
    request: &InteractionRequest,
    data: &Data,
) -> Result<InteractionResponse, InteractionError> {
    match request.kind {
        InteractionType::Ping => Ok(InteractionResponse::Pong),
        InteractionType::ApplicationCommand => dispatch_command(request, data),
        InteractionType::Other(kind) => {
            error!("unknown interaction type {} (interaction {:?})", kind, request.id);
            Err(InteractionError::UnknownInteractionType)
        }
    }
}

/// Dispatch a raw request body. Only the interaction type is decoded for
/// pings and unknown types; the full payload is decoded for commands only.
pub fn dispatch_body(body: &[u8], data: &Data) -> Result<InteractionResponse, InteractionError> {
    let envelope: InteractionEnvelope = serde_json::from_slice(body)?;
    match envelope.kind {
        InteractionType::Ping => Ok(InteractionResponse::Pong),
        InteractionType::ApplicationCommand => {
            let request: InteractionRequest = serde_json::from_slice(body)?;
            dispatch(&request, data)
        }
        InteractionType::Other(kind) => {
            error!("unknown interaction type {}", kind);
            Err(InteractionError::UnknownInteractionType)
        }
    }
}

fn dispatch_command(
    request: &InteractionRequest,
    _data: &Data,
) -> Result<InteractionResponse, InteractionError> {
    let name = request.command_name();
    match name.and_then(Command::from_name) {
        Some(Command::Test) => Ok(InteractionResponse::Message(MessageData::text_display(
            "pong",
        ))),
        Some(Command::UserInfo) => handle_userinfo(request),
        None => {
            error!("unknown command {:?}", name);
            Err(InteractionError::UnknownCommand(name.map(str::to_string)))
        }
    }
}

/// `/userinfo [user]`: profile of the selected user, or of the caller
fn handle_userinfo(request: &InteractionRequest) -> Result<InteractionResponse, InteractionError> {
    let invoking_user = request.invoking_user();
    let target_id = request
        .option_str("user")
        .or(invoking_user.map(|user| user.id.as_str()))
        .ok_or(InteractionError::UnresolvedUser)?;

    let resolved = request.resolved();
    let user = resolved
        .and_then(|resolved| resolved.users.get(target_id))
        .or(invoking_user)
        .ok_or(InteractionError::UnresolvedUser)?;
    let member = resolved
        .and_then(|resolved| resolved.members.get(target_id))
        .or(request.member.as_ref());

    let id = parse_snowflake(&user.id)
        .ok_or_else(|| InteractionError::InvalidUserId(user.id.clone()))?;
    let created_at =
        snowflake_created_at(id).ok_or_else(|| InteractionError::InvalidUserId(user.id.clone()))?;
    let joined_at = member
        .and_then(|member| member.joined_at.as_deref())
        .and_then(parse_joined_at);

    let profile = UserProfile {
        id,
        username: user.username.clone(),
        discriminator: user.discriminator.clone(),
        bot: user.bot,
        created_at,
        joined_at,
    };

    info!("Answering userinfo for {}", id);

    Ok(InteractionResponse::Message(MessageData::text(
        format_user_info(&profile),
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use poise::serenity_prelude::ChannelId;
    use serde_json::{Value, json};

    fn data() -> Data {
        Data::new(ChannelId::new(1))
    }

    fn request(value: Value) -> InteractionRequest {
        serde_json::from_value(value).unwrap()
    }

    fn content(response: InteractionResponse) -> String {
        match response {
            InteractionResponse::Message(MessageData {
                content: Some(content),
                ..
            }) => content,
            other => panic!("expected text message, got {:?}", other),
        }
    }

    #[test]
    fn test_command_names() {
        assert_eq!(Command::from_name("test"), Some(Command::Test));
        assert_eq!(Command::from_name("userinfo"), Some(Command::UserInfo));
        assert_eq!(Command::from_name("UserInfo"), None);
        for command in Command::ALL {
            assert_eq!(Command::from_name(command.name()), Some(command));
        }
    }

    #[test]
    fn test_ping_ignores_other_fields() {
        let response = dispatch(
            &request(json!({
                "type": 1,
                "data": { "name": "does-not-exist" },
                "member": { "user": { "id": "abc", "username": "x" } }
            })),
            &data(),
        )
        .unwrap();
        assert_eq!(response, InteractionResponse::Pong);
    }

    #[test]
    fn test_test_command_replies_pong() {
        let response = dispatch(
            &request(json!({ "type": 2, "data": { "name": "test", "options": [{ "name": "x", "value": 1 }] } })),
            &data(),
        )
        .unwrap();
        assert_eq!(
            response,
            InteractionResponse::Message(MessageData::text_display("pong"))
        );
    }

    #[test]
    fn test_userinfo_falls_back_to_invoking_member() {
        let response = dispatch(
            &request(json!({
                "type": 2,
                "data": { "name": "userinfo", "options": [] },
                "member": {
                    "user": { "id": "123", "username": "caller", "discriminator": "0042" },
                    "joined_at": "2020-02-03T04:05:06+00:00"
                }
            })),
            &data(),
        )
        .unwrap();

        let text = content(response);
        assert!(text.contains("**User ID:** 123"));
        assert!(text.contains("**Username:** caller#0042"));
        assert!(text.contains("**Joined Server:** Mon, 03 Feb 2020 04:05:06 GMT"));
    }

    #[test]
    fn test_userinfo_uses_resolved_target() {
        let response = dispatch(
            &request(json!({
                "type": 2,
                "data": {
                    "name": "userinfo",
                    "options": [{ "name": "user", "type": 6, "value": "175928847299117063" }],
                    "resolved": {
                        "users": {
                            "175928847299117063": {
                                "id": "175928847299117063",
                                "username": "target",
                                "discriminator": "0",
                                "bot": true
                            }
                        },
                        "members": {
                            "175928847299117063": { "joined_at": "2016-05-01T00:00:00+00:00" }
                        }
                    }
                },
                "member": {
                    "user": { "id": "123", "username": "caller", "discriminator": "0" },
                    "joined_at": "2020-02-03T04:05:06+00:00"
                }
            })),
            &data(),
        )
        .unwrap();

        let text = content(response);
        assert!(text.contains("**Username:** target#0"));
        assert!(text.contains("**User ID:** 175928847299117063"));
        assert!(text.contains("**Bot:** Yes"));
        assert!(text.contains("**Account Created:** Sat, 30 Apr 2016 11:18:25 GMT"));
        assert!(text.contains("**Joined Server:** Sun, 01 May 2016 00:00:00 GMT"));
    }

    #[test]
    fn test_userinfo_without_join_date_omits_line() {
        let response = dispatch(
            &request(json!({
                "type": 2,
                "data": { "name": "userinfo" },
                "user": { "id": "123", "username": "dm-user", "discriminator": "0" }
            })),
            &data(),
        )
        .unwrap();

        let text = content(response);
        assert_eq!(text.lines().count(), 6);
        assert!(!text.contains("Joined Server"));
    }

    #[test]
    fn test_userinfo_without_any_user() {
        let result = dispatch(
            &request(json!({ "type": 2, "data": { "name": "userinfo" } })),
            &data(),
        );
        assert!(matches!(result, Err(InteractionError::UnresolvedUser)));
    }

    #[test]
    fn test_userinfo_invalid_id() {
        let result = dispatch(
            &request(json!({
                "type": 2,
                "data": { "name": "userinfo" },
                "member": { "user": { "id": "not-a-number", "username": "x" } }
            })),
            &data(),
        );
        assert!(matches!(result, Err(InteractionError::InvalidUserId(id)) if id == "not-a-number"));
    }

    #[test]
    fn test_unknown_command_is_distinct_error() {
        let result = dispatch(
            &request(json!({ "type": 2, "data": { "name": "dance" } })),
            &data(),
        );
        assert!(matches!(result, Err(InteractionError::UnknownCommand(Some(name))) if name == "dance"));
    }

    #[test]
    fn test_dispatch_body_ping_with_unexpected_fields() {
        let body = br#"{"type":1,"data":{"name":3},"member":{"user":{"id":5}}}"#;
        assert_eq!(
            dispatch_body(body, &data()).unwrap(),
            InteractionResponse::Pong
        );
    }

    #[test]
    fn test_dispatch_body_large_unknown_type() {
        let result = dispatch_body(br#"{"type":300}"#, &data());
        assert!(matches!(result, Err(InteractionError::UnknownInteractionType)));
    }

    #[test]
    fn test_dispatch_body_command_payload_still_checked() {
        let result = dispatch_body(br#"{"type":2,"data":{"name":3}}"#, &data());
        assert!(matches!(result, Err(InteractionError::MalformedBody(_))));

        let response = dispatch_body(br#"{"type":2,"data":{"name":"test"}}"#, &data()).unwrap();
        assert_eq!(
            response,
            InteractionResponse::Message(MessageData::text_display("pong"))
        );
    }

    #[test]
    fn test_unknown_interaction_type() {
        let result = dispatch(&request(json!({ "type": 3 })), &data());
        assert!(matches!(result, Err(InteractionError::UnknownInteractionType)));
    }
}
