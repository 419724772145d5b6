use async_trait::async_trait;
use tokio::sync::mpsc;

use crate::application::errors::{BotError, GatewayError};
use crate::domain::entities::{BotIdentity, InboundMessage};

/// Capability to post a message into a channel
#[async_trait]
pub trait ReplySink: Send + Sync {
    async fn send_message(&self, channel_id: &str, text: &str) -> Result<(), GatewayError>;
}

/// Gateway trait - abstraction for chat platform connections
#[async_trait]
pub trait Gateway: ReplySink {
    /// Connect and forward inbound messages into `events` until the
    /// connection ends. Returning drops the sender, which tells the consumer
    /// no more messages will arrive.
    async fn run(&self, events: mpsc::Sender<InboundMessage>) -> Result<(), BotError>;

    /// The bot's own account, used for mention detection
    fn identity(&self) -> BotIdentity;
}
