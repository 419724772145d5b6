//! Domain traits - Abstractions for infrastructure implementations

pub mod gateway;
pub mod handler;

pub use gateway::{Gateway, ReplySink};
pub use handler::CommandHandler;
