//! Message dispatcher - Routes command messages to their handlers

use std::sync::Arc;

use super::context::InvocationContext;
use crate::application::errors::CommandError;
use crate::domain::entities::{BotIdentity, CommandRegistry, InboundMessage};
use crate::domain::traits::ReplySink;

/// Result of one dispatch
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvocationOutcome {
    Success,
    Failure(CommandError),
}

impl InvocationOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, InvocationOutcome::Success)
    }

    /// Human-readable failure reason, as sent to the channel
    pub fn reason(&self) -> Option<String> {
        match self {
            InvocationOutcome::Success => None,
            InvocationOutcome::Failure(err) => Some(err.to_string()),
        }
    }
}

/// Split command text into the command name and the raw argument text
pub fn split_command(text: &str) -> (&str, &str) {
    let text = text.trim_start();
    match text.find(char::is_whitespace) {
        Some(end) => (&text[..end], text[end..].trim()),
        None => (text, ""),
    }
}

/// Resolves command text against the registry and runs the handler
pub struct Dispatcher {
    prefix: char,
    registry: Arc<CommandRegistry>,
}

impl Dispatcher {
    pub fn new(prefix: char, registry: Arc<CommandRegistry>) -> Self {
        Self { prefix, registry }
    }

    /// Dispatch the command starting at byte `offset` of `message.content`.
    ///
    /// Failures are reported to the originating channel with a single reply;
    /// success sends nothing on the handler's behalf.
    pub async fn dispatch(
        &self,
        message: &InboundMessage,
        offset: usize,
        identity: &BotIdentity,
        replies: &dyn ReplySink,
    ) -> InvocationOutcome {
        let ctx = InvocationContext::new(message, identity, &self.registry, self.prefix, replies);

        let mut offset = offset;
        let text = message.content.get(offset..).unwrap_or_default();
        // a mention may still be followed by the prefix (`@bot !cmd`)
        if text.starts_with(self.prefix) {
            offset += self.prefix.len_utf8();
        }
        let text = message.content.get(offset..).unwrap_or_default();
        let (name, raw_args) = split_command(text);

        let outcome = match self.invoke(&ctx, name, raw_args).await {
            Ok(()) => InvocationOutcome::Success,
            Err(err) => InvocationOutcome::Failure(err),
        };

        match &outcome {
            InvocationOutcome::Success => {
                tracing::debug!("[{}] Command `{}` succeeded", message.channel_id, name);
            }
            InvocationOutcome::Failure(err) => {
                tracing::warn!("[{}] Command `{}` failed: {}", message.channel_id, name, err);
                if let Err(e) = replies.send_message(&message.channel_id, &err.to_string()).await {
                    tracing::warn!("[{}] Failed to report error: {}", message.channel_id, e);
                }
            }
        }

        outcome
    }

    async fn invoke(
        &self,
        ctx: &InvocationContext<'_>,
        name: &str,
        raw_args: &str,
    ) -> Result<(), CommandError> {
        let resolved = self.registry.resolve(name, raw_args)?;
        tracing::debug!(
            "[{}] {} -> {} {:?}",
            ctx.channel_id(),
            ctx.author_id(),
            resolved.command.name,
            resolved.arguments.raw()
        );
        resolved
            .command
            .handler
            .execute(ctx, &resolved.arguments)
            .await
    }
}
