//! Console adapter for development/testing

use async_trait::async_trait;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tokio::sync::{mpsc, Mutex};

use crate::application::errors::{BotError, GatewayError};
use crate::domain::entities::{BotIdentity, InboundMessage};
use crate::domain::traits::{Gateway, ReplySink};
use crate::infrastructure::config::ConsoleConfig;

/// Console gateway: every stdin line is a message from one local user.
///
/// Mentions are typed literally, e.g. `<@1> ping`. End of input disconnects.
pub struct ConsoleAdapter<R = BufReader<tokio::io::Stdin>> {
    identity: BotIdentity,
    user_id: String,
    channel_id: String,
    input: Mutex<Option<R>>,
}

impl ConsoleAdapter {
    pub fn new(name: impl Into<String>, config: &ConsoleConfig) -> Self {
        Self::with_input(name, config, BufReader::new(tokio::io::stdin()))
    }
}

impl<R> ConsoleAdapter<R>
where
    R: AsyncBufRead + Unpin + Send,
{
    pub fn with_input(name: impl Into<String>, config: &ConsoleConfig, input: R) -> Self {
        Self {
            identity: BotIdentity::new(config.bot_id.clone(), name),
            user_id: config.user_id.clone(),
            channel_id: config.channel_id.clone(),
            input: Mutex::new(Some(input)),
        }
    }
}

#[async_trait]
impl<R> ReplySink for ConsoleAdapter<R>
where
    R: AsyncBufRead + Unpin + Send,
{
    async fn send_message(&self, channel_id: &str, text: &str) -> Result<(), GatewayError> {
        println!("[BOT #{}] {}", channel_id, text);
        Ok(())
    }
}

#[async_trait]
impl<R> Gateway for ConsoleAdapter<R>
where
    R: AsyncBufRead + Unpin + Send,
{
    async fn run(&self, events: mpsc::Sender<InboundMessage>) -> Result<(), BotError> {
        let input = self
            .input
            .lock()
            .await
            .take()
            .ok_or(GatewayError::Closed)?;

        tracing::info!(
            "Starting console gateway (dev mode), mention me as {}",
            self.identity.mention()
        );

        let mut lines = input.lines();
        while let Some(line) = lines.next_line().await.map_err(GatewayError::from)? {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            let message = InboundMessage::from_text(&self.channel_id, &self.user_id, line);
            if events.send(message).await.is_err() {
                // consumer went away
                break;
            }
        }

        tracing::info!("Console input closed");
        Ok(())
    }

    fn identity(&self) -> BotIdentity {
        self.identity.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn forwards_non_empty_lines_with_mentions() {
        let input: &[u8] = b"!ping\n\n  <@1> echo hi  \n";
        let adapter = ConsoleAdapter::with_input("mute", &ConsoleConfig::default(), input);
        let (tx, mut rx) = mpsc::channel(8);

        adapter.run(tx).await.unwrap();

        let first = rx.recv().await.unwrap();
        assert_eq!(first.content, "!ping");
        assert_eq!(first.author_id, "2");
        assert_eq!(first.channel_id, "console");

        let second = rx.recv().await.unwrap();
        assert_eq!(second.content, "<@1> echo hi");
        assert!(second.mentions("1"));

        assert!(rx.recv().await.is_none());
    }

    #[tokio::test]
    async fn input_can_only_be_consumed_once() {
        let input: &[u8] = b"";
        let adapter = ConsoleAdapter::with_input("mute", &ConsoleConfig::default(), input);
        let (tx, _rx) = mpsc::channel(1);
        adapter.run(tx.clone()).await.unwrap();
        assert!(matches!(adapter.run(tx).await, Err(BotError::Gateway(GatewayError::Closed))));
    }
}
