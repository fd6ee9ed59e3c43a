/// Pure classification of voice state transitions (Discord-agnostic beyond ids)
use poise::serenity_prelude::{ChannelId, UserId};

/// A member's voice channel before and after a voice state update
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VoiceTransition {
    pub member: UserId,
    pub before: Option<ChannelId>,
    pub after: Option<ChannelId>,
}

/// A loggable change in a member's voice presence
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VoiceActivity {
    Join {
        member: UserId,
        channel: ChannelId,
    },
    Leave {
        member: UserId,
        channel: ChannelId,
    },
    Move {
        member: UserId,
        from: ChannelId,
        to: ChannelId,
    },
}

/// Classify a transition, returning `None` when nothing worth logging happened
/// (same channel on both sides, or no channel at all).
pub fn classify(transition: &VoiceTransition) -> Option<VoiceActivity> {
    let member = transition.member;
    match (transition.before, transition.after) {
        (None, Some(channel)) => Some(VoiceActivity::Join { member, channel }),
        (Some(channel), None) => Some(VoiceActivity::Leave { member, channel }),
        (Some(from), Some(to)) if from != to => Some(VoiceActivity::Move { member, from, to }),
        (Some(_), Some(_)) | (None, None) => None,
    }
}

impl VoiceActivity {
    /// Embed title for this activity
    pub fn label(&self) -> &'static str {
        match self {
            VoiceActivity::Join { .. } => "Voice Join",
            VoiceActivity::Leave { .. } => "Voice Leave",
            VoiceActivity::Move { .. } => "Voice Move",
        }
    }

    /// Markdown description with member and channel mentions
    pub fn description(&self) -> String {
        match self {
            VoiceActivity::Join { member, channel } | VoiceActivity::Leave { member, channel } => {
                format!("**User:** <@{}>\n**Channel:** <#{}>", member, channel)
            }
            VoiceActivity::Move { member, from, to } => {
                format!(
                    "**User:** <@{}>\n**From:** <#{}>\n**To:** <#{}>",
                    member, from, to
                )
            }
        }
    }

    pub fn member(&self) -> UserId {
        match self {
            VoiceActivity::Join { member, .. }
            | VoiceActivity::Leave { member, .. }
            | VoiceActivity::Move { member, .. } => *member,
        }
    }
}
