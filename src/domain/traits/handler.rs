use async_trait::async_trait;

use crate::application::errors::CommandError;
use crate::application::messaging::InvocationContext;
use crate::domain::entities::Arguments;

/// Command handler trait.
///
/// Handlers produce their own user-visible output through
/// [`InvocationContext::reply`]; an `Err` is reported to the channel by the
/// dispatcher.
#[async_trait]
pub trait CommandHandler: Send + Sync {
    async fn execute(
        &self,
        ctx: &InvocationContext<'_>,
        args: &Arguments,
    ) -> Result<(), CommandError>;
}
