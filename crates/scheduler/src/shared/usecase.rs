use spike_reminder_infra::ReminderContext;
use std::fmt::Debug;
use tracing::debug;

#[async_trait::async_trait]
pub trait UseCase: Debug + Send {
    type Response: Debug + Send;
    type Errors: Debug + Send;

    const NAME: &'static str;

    async fn execute(&mut self, ctx: &ReminderContext) -> Result<Self::Response, Self::Errors>;
}

#[tracing::instrument(name = "Executing usecase", skip(usecase, ctx))]
pub async fn execute<U>(mut usecase: U, ctx: &ReminderContext) -> Result<U::Response, U::Errors>
where
    U: UseCase,
{
    let res = usecase.execute(ctx).await;

    match &res {
        Ok(res) => debug!("Use case {} succeeded: {:?}", U::NAME, res),
        Err(e) => debug!("Use case {} failed: {:?}", U::NAME, e),
    }

    res
}
