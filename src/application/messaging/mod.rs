//! Message handling - Classification and dispatch of inbound messages

pub mod classifier;
pub mod context;
pub mod dispatcher;

pub use classifier::{Classification, MessageClassifier};
pub use context::InvocationContext;
pub use dispatcher::{Dispatcher, InvocationOutcome};
