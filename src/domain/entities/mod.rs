//! Domain entities - Core business objects

pub mod arguments;
pub mod command;
pub mod identity;
pub mod message;

pub use arguments::{ArgValue, Arguments, ParamKind, Parameter};
pub use command::{CommandDescriptor, CommandRegistry, CommandRegistryBuilder, Resolved};
pub use identity::BotIdentity;
pub use message::{InboundMessage, MessageKind};
