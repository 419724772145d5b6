use std::collections::HashSet;

use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use regex_lite::Regex;

/// Matches user mention tokens, both `<@id>` and the nickname form `<@!id>`
static MENTION_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"<@!?(\d+)>").expect("mention pattern is valid")
});

/// Kind of gateway event carried by a message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    /// Text written by a user (or another bot)
    User,
    /// Platform-generated event (joins, pins, ...), never a command
    System,
}

impl MessageKind {
    pub fn as_str(&self) -> &str {
        match self {
            MessageKind::User => "user",
            MessageKind::System => "system",
        }
    }
}

/// An inbound chat message as delivered by a gateway adapter
#[derive(Debug, Clone)]
pub struct InboundMessage {
    pub id: String,
    pub kind: MessageKind,
    pub content: String,
    pub author_id: String,
    pub channel_id: String,
    pub mentioned_user_ids: HashSet<String>,
    pub timestamp: DateTime<Utc>,
}

impl InboundMessage {
    pub fn new(
        channel_id: impl Into<String>,
        author_id: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            kind: MessageKind::User,
            content: content.into(),
            author_id: author_id.into(),
            channel_id: channel_id.into(),
            mentioned_user_ids: HashSet::new(),
            timestamp: Utc::now(),
        }
    }

    /// Build a user message and fill `mentioned_user_ids` from the mention
    /// tokens found in the text
    pub fn from_text(
        channel_id: impl Into<String>,
        author_id: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        let message = Self::new(channel_id, author_id, content);
        let mentions = extract_mentions(&message.content);
        message.with_mentions(mentions)
    }

    pub fn system(channel_id: impl Into<String>, content: impl Into<String>) -> Self {
        let mut message = Self::new(channel_id, "system", content);
        message.kind = MessageKind::System;
        message
    }

    pub fn with_mentions<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.mentioned_user_ids.extend(ids.into_iter().map(Into::into));
        self
    }

    pub fn is_system(&self) -> bool {
        self.kind == MessageKind::System
    }

    /// Whether the given user is among the message's mentions
    pub fn mentions(&self, user_id: &str) -> bool {
        self.mentioned_user_ids.contains(user_id)
    }
}

/// All user ids mentioned anywhere in `text`
pub fn extract_mentions(text: &str) -> HashSet<String> {
    MENTION_RE
        .captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Parse a mention token at the very start of `text`.
///
/// Returns the mentioned id and the byte length of the token.
pub fn leading_mention(text: &str) -> Option<(&str, usize)> {
    let rest = text.strip_prefix("<@")?;
    let close = rest.find('>')?;
    let inner = &rest[..close];
    let id = inner.strip_prefix('!').unwrap_or(inner);
    if id.is_empty() || !id.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some((id, "<@".len() + close + 1))
}
