//! Domain layer - Core business objects and the seams to the outside
//!
//! This layer contains:
//! - Entities: Messages, bot identity, command descriptors and the registry
//! - Traits: Abstractions for gateways, reply sinks and command handlers

pub mod entities;
pub mod traits;
