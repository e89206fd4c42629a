use super::utils::{CountingUserRepo, TokioSys};
use spike_reminder_infra::{INotifier, ReminderContext, Repos};
use spike_reminder_scheduler::{InMemoryErrorReporter, ReminderScheduler};
use std::sync::Arc;
use tokio::time::Instant;

pub struct TestApp {
    pub ctx: ReminderContext,
    pub users: Arc<CountingUserRepo>,
    pub reporter: Arc<InMemoryErrorReporter>,
    pub scheduler: ReminderScheduler,
}

// Sun Feb 21 2021 00:00:00 GMT+0100 (Central European Standard Time)
pub const ORIGIN_TS: i64 = 1613862000000;

/// Builds an inmemory context whose clock follows the (paused) tokio clock
pub fn setup_app(notifier: Arc<dyn INotifier>) -> TestApp {
    let sys = Arc::new(TokioSys {
        origin_ts: ORIGIN_TS,
        origin: Instant::now(),
    });
    let users = Arc::new(CountingUserRepo::default());
    let mut ctx = ReminderContext::create_inmemory(sys, notifier);
    ctx.repos = Repos {
        users: users.clone(),
    };
    ctx.config.max_sleep_millis = 1000 * 60 * 60;
    ctx.config.retry_delay_millis = 1000 * 60;

    let reporter = Arc::new(InMemoryErrorReporter::new());
    let scheduler = ReminderScheduler::new(reporter.clone());

    TestApp {
        ctx,
        users,
        reporter,
        scheduler,
    }
}
