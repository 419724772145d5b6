//! Message classifier - Decides whether a message is addressed to the bot as a command

use crate::domain::entities::message::leading_mention;
use crate::domain::entities::{BotIdentity, InboundMessage};

/// How an inbound message relates to the bot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    NotCommand,
    /// The bot was mentioned, but not in command position
    BotMentioned,
    /// Command text starts at byte `offset` of the content
    Command { offset: usize },
}

/// Classifies messages by prefix character or leading mention
#[derive(Debug, Clone, Copy)]
pub struct MessageClassifier {
    prefix: char,
}

impl MessageClassifier {
    pub fn new(prefix: char) -> Self {
        Self { prefix }
    }

    pub fn classify(&self, message: &InboundMessage, identity: &BotIdentity) -> Classification {
        let content = message.content.as_str();

        if content.starts_with(self.prefix) {
            return Classification::Command {
                offset: self.prefix.len_utf8(),
            };
        }

        if let Some((id, len)) = leading_mention(content) {
            if identity.is(id) {
                // skip exactly one separator after the token
                let separator = content[len..]
                    .chars()
                    .next()
                    .filter(|c| c.is_whitespace())
                    .map_or(0, char::len_utf8);
                return Classification::Command {
                    offset: len + separator,
                };
            }
        }

        if message.mentions(&identity.id) {
            return Classification::BotMentioned;
        }

        Classification::NotCommand
    }
}
