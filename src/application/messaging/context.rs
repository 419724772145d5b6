//! Per-invocation context handed to command handlers

use crate::application::errors::GatewayError;
use crate::domain::entities::{BotIdentity, CommandRegistry, InboundMessage};
use crate::domain::traits::ReplySink;

/// Everything a handler may look at while it runs. Borrowed for the duration
/// of one invocation.
pub struct InvocationContext<'a> {
    pub message: &'a InboundMessage,
    pub identity: &'a BotIdentity,
    pub commands: &'a CommandRegistry,
    pub prefix: char,
    replies: &'a dyn ReplySink,
}

impl<'a> InvocationContext<'a> {
    pub fn new(
        message: &'a InboundMessage,
        identity: &'a BotIdentity,
        commands: &'a CommandRegistry,
        prefix: char,
        replies: &'a dyn ReplySink,
    ) -> Self {
        Self {
            message,
            identity,
            commands,
            prefix,
            replies,
        }
    }

    pub fn author_id(&self) -> &str {
        &self.message.author_id
    }

    pub fn channel_id(&self) -> &str {
        &self.message.channel_id
    }

    /// Send a message into the channel the command came from
    pub async fn reply(&self, text: impl AsRef<str>) -> Result<(), GatewayError> {
        self.replies
            .send_message(&self.message.channel_id, text.as_ref())
            .await
    }
}
