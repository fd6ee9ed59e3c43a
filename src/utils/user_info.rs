/// Pure formatting of the `/userinfo` reply (Discord-agnostic)
use chrono::{DateTime, Utc};

/// Profile summary shown by `/userinfo`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UserProfile {
    pub id: u64,
    pub username: String,
    pub discriminator: String,
    pub bot: bool,
    pub created_at: DateTime<Utc>,
    pub joined_at: Option<DateTime<Utc>>,
}

/// Format an instant as an RFC 1123 date in GMT, e.g. "Sat, 30 Apr 2016 11:18:25 GMT"
pub fn format_utc(instant: &DateTime<Utc>) -> String {
    instant.format("%a, %d %b %Y %H:%M:%S GMT").to_string()
}

/// Parse a guild join timestamp (ISO 8601 with offset) into UTC
pub fn parse_joined_at(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|instant| instant.with_timezone(&Utc))
}

/// Build the multi-line profile block; the join line is left out entirely when unknown
pub fn format_user_info(profile: &UserProfile) -> String {
    let mut lines = vec![
        "**User Info**".to_string(),
        String::new(),
        format!("**Username:** {}#{}", profile.username, profile.discriminator),
        format!("**User ID:** {}", profile.id),
        format!("**Bot:** {}", if profile.bot { "Yes" } else { "No" }),
        format!("**Account Created:** {}", format_utc(&profile.created_at)),
    ];

    if let Some(joined_at) = &profile.joined_at {
        lines.push(format!("**Joined Server:** {}", format_utc(joined_at)));
    }

    lines.join("\n")
}
