use async_trait::async_trait;

use crate::application::errors::CommandError;
use crate::application::messaging::InvocationContext;
use crate::domain::entities::Arguments;
use crate::domain::traits::CommandHandler;

pub struct EchoCommand;

#[async_trait]
impl CommandHandler for EchoCommand {
    async fn execute(
        &self,
        ctx: &InvocationContext<'_>,
        args: &Arguments,
    ) -> Result<(), CommandError> {
        let text = args
            .text("text")
            .ok_or_else(|| CommandError::failed("Nothing to repeat"))?;
        ctx.reply(text).await?;
        Ok(())
    }
}
