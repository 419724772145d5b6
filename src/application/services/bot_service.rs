use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::task::JoinSet;

use crate::application::errors::BotError;
use crate::application::messaging::{
    Classification, Dispatcher, InvocationOutcome, MessageClassifier,
};
use crate::domain::entities::{BotIdentity, CommandRegistry, InboundMessage};
use crate::domain::traits::{Gateway, ReplySink};

/// Inbound messages buffered between the gateway and the service
const EVENT_BUFFER: usize = 256;

/// Application context: wires a gateway to the classifier and dispatcher.
///
/// Cheap to clone; every clone shares the same registry and gateway.
#[derive(Clone)]
pub struct BotService {
    classifier: MessageClassifier,
    dispatcher: Arc<Dispatcher>,
    gateway: Arc<dyn Gateway>,
    replies: Arc<dyn ReplySink>,
    identity: BotIdentity,
}

impl BotService {
    pub fn new<G>(prefix: char, registry: Arc<CommandRegistry>, gateway: Arc<G>) -> Self
    where
        G: Gateway + 'static,
    {
        let identity = gateway.identity();
        Self {
            classifier: MessageClassifier::new(prefix),
            dispatcher: Arc::new(Dispatcher::new(prefix, registry)),
            replies: gateway.clone(),
            gateway,
            identity,
        }
    }

    /// Run until the gateway disconnects.
    ///
    /// Each command runs in its own task. Once the gateway stops delivering,
    /// no new messages are classified and in-flight commands are awaited.
    pub async fn run(&self) -> Result<(), BotError> {
        let (tx, mut rx) = mpsc::channel(EVENT_BUFFER);
        let gateway = self.gateway.clone();
        let connection = tokio::spawn(async move { gateway.run(tx).await });

        tracing::info!("Bot started: {}", self.identity);

        let mut in_flight = JoinSet::new();
        while let Some(message) = rx.recv().await {
            if message.is_system() {
                continue;
            }

            let service = self.clone();
            in_flight.spawn(async move { service.handle_message(message).await });

            while let Some(done) = in_flight.try_join_next() {
                log_join(done);
            }
        }

        tracing::info!("Gateway disconnected, waiting for {} command(s)", in_flight.len());
        while let Some(done) = in_flight.join_next().await {
            log_join(done);
        }

        connection
            .await
            .map_err(|e| BotError::Internal(format!("Gateway task failed: {}", e)))?
    }

    /// Classify one message and dispatch it if it is a command.
    ///
    /// Returns `None` when nothing was dispatched.
    pub async fn handle_message(&self, message: InboundMessage) -> Option<InvocationOutcome> {
        if message.is_system() {
            return None;
        }

        match self.classifier.classify(&message, &self.identity) {
            Classification::Command { offset } => Some(
                self.dispatcher
                    .dispatch(&message, offset, &self.identity, self.replies.as_ref())
                    .await,
            ),
            Classification::BotMentioned => {
                tracing::info!("I was mentioned in: '{}'", message.content);
                None
            }
            Classification::NotCommand => None,
        }
    }
}

fn log_join(done: Result<Option<InvocationOutcome>, tokio::task::JoinError>) {
    if let Err(e) = done {
        tracing::error!("Command task aborted: {}", e);
    }
}
