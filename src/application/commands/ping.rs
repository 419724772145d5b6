use async_trait::async_trait;

use crate::application::errors::CommandError;
use crate::application::messaging::InvocationContext;
use crate::domain::entities::Arguments;
use crate::domain::traits::CommandHandler;

pub struct PingCommand;

#[async_trait]
impl CommandHandler for PingCommand {
    async fn execute(
        &self,
        ctx: &InvocationContext<'_>,
        _args: &Arguments,
    ) -> Result<(), CommandError> {
        ctx.reply("pong").await?;
        Ok(())
    }
}
