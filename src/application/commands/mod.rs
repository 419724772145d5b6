//! Built-in command handlers

mod echo;
mod help;
mod ping;

pub use echo::EchoCommand;
pub use help::HelpCommand;
pub use ping::PingCommand;

use crate::application::errors::RegistryError;
use crate::domain::entities::{CommandDescriptor, CommandRegistryBuilder, ParamKind, Parameter};

/// Register the commands every bot ships with
pub fn register_defaults(builder: &mut CommandRegistryBuilder) -> Result<(), RegistryError> {
    builder.register(
        CommandDescriptor::new("ping", PingCommand)
            .with_summary("Check that the bot is alive"),
    )?;

    builder.register(
        CommandDescriptor::new("echo", EchoCommand)
            .with_alias("say")
            .with_summary("Repeat a message")
            .with_parameter(Parameter::new("text", ParamKind::Remainder)),
    )?;

    builder.register(
        CommandDescriptor::new("help", HelpCommand)
            .with_summary("Show available commands")
            .with_parameter(Parameter::new("command", ParamKind::Word).optional()),
    )?;

    Ok(())
}
