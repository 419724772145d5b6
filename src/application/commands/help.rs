use async_trait::async_trait;

use crate::application::errors::CommandError;
use crate::application::messaging::InvocationContext;
use crate::domain::entities::{Arguments, CommandRegistry};
use crate::domain::traits::CommandHandler;

/// Lists commands, or shows one command's usage
pub struct HelpCommand;

impl HelpCommand {
    pub fn render(
        commands: &CommandRegistry,
        prefix: char,
        command: Option<&str>,
    ) -> Result<String, CommandError> {
        if let Some(name) = command {
            let cmd = commands.get(name).ok_or_else(|| {
                CommandError::failed(format!("Command {}{} not found", prefix, name))
            })?;

            let mut help = format!(
                "{}{} - {}\nUsage: {}",
                prefix,
                cmd.name,
                cmd.summary.as_deref().unwrap_or("No description"),
                cmd.usage(prefix)
            );
            if !cmd.aliases.is_empty() {
                help.push_str(&format!("\nAliases: {}", cmd.aliases.join(", ")));
            }
            return Ok(help);
        }

        let mut help = "Available commands:".to_string();
        for (module, cmds) in commands.modules() {
            help.push_str(&format!("\n{}:", module));
            for cmd in cmds {
                help.push_str(&format!(
                    "\n  {} - {}",
                    cmd.usage(prefix),
                    cmd.summary.as_deref().unwrap_or("")
                ));
            }
        }
        Ok(help)
    }
}

#[async_trait]
impl CommandHandler for HelpCommand {
    async fn execute(
        &self,
        ctx: &InvocationContext<'_>,
        args: &Arguments,
    ) -> Result<(), CommandError> {
        let help = Self::render(ctx.commands, ctx.prefix, args.text("command"))?;
        ctx.reply(help).await?;
        Ok(())
    }
}
