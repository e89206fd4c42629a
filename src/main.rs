mod telemetry;

use spike_reminder_infra::{seed_demo_data, setup_context};
use spike_reminder_scheduler::ReminderScheduler;
use telemetry::{get_subscriber, init_subscriber};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let subscriber = get_subscriber("spike_reminder".into(), "info".into());
    init_subscriber(subscriber)?;

    let context = setup_context().await?;

    if context.config.reset_store {
        let deleted = context.repos.users.delete_all().await?;
        info!("Deleted {} stored users", deleted);
    }
    if context.config.seed_demo_data {
        seed_demo_data(&context).await?;
    }

    let scheduler = ReminderScheduler::default();
    let handle = match scheduler.start(context).await? {
        Some(handle) => handle,
        None => return Ok(()),
    };

    tokio::select! {
        res = tokio::signal::ctrl_c() => {
            res?;
            info!("Received ctrl-c, shutting down the reminder scheduler");
            handle.shutdown();
        }
        _ = handle.terminated() => {}
    }

    let exit = handle.wait().await?;
    info!("Reminder scheduler exited: {:?}", exit);
    Ok(())
}
