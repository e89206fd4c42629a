use crate::{
    error::SchedulerError,
    reminder::dispatch_due_reminders::{DispatchDueRemindersUseCase, NextPass},
    reporter::{IErrorReporter, TracingErrorReporter},
    shared::usecase::execute,
};
use spike_reminder_infra::ReminderContext;
use std::{
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc,
    },
    time::Duration,
};
use tokio::{sync::watch, task::JoinHandle};
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

#[derive(Debug, Clone, PartialEq)]
pub enum SchedulerState {
    Scanning,
    Sleeping(Duration),
    Terminated,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SchedulerExit {
    /// Every known `Reminder` has been sent
    NoPendingReminders,
    Shutdown,
}

/// Runs the reminder job at most once no matter how many times
/// it is started. The latch belongs to this value: the process should hold
/// a single `ReminderScheduler`, since another instance would spawn its own job.
pub struct ReminderScheduler {
    started: AtomicBool,
    reporter: Arc<dyn IErrorReporter>,
}

impl ReminderScheduler {
    pub fn new(reporter: Arc<dyn IErrorReporter>) -> Self {
        Self {
            started: AtomicBool::new(false),
            reporter,
        }
    }

    pub fn is_started(&self) -> bool {
        self.started.load(Ordering::SeqCst)
    }

    /// Spawns the reminder job. Fails if the store cannot be reached and
    /// returns `None` if the job has already been started.
    pub async fn start(&self, ctx: ReminderContext) -> anyhow::Result<Option<SchedulerHandle>> {
        ctx.repos.users.check_connection().await?;

        if self
            .started
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            warn!("The reminder scheduler has already been started");
            return Ok(None);
        }

        let (state_tx, state_rx) = watch::channel(SchedulerState::Scanning);
        let shutdown = CancellationToken::new();
        let join = tokio::spawn(run_reminders_job(
            ctx,
            self.reporter.clone(),
            state_tx,
            shutdown.clone(),
        ));

        Ok(Some(SchedulerHandle {
            state: state_rx,
            shutdown,
            join,
        }))
    }
}

impl Default for ReminderScheduler {
    fn default() -> Self {
        Self::new(Arc::new(TracingErrorReporter {}))
    }
}

pub struct SchedulerHandle {
    state: watch::Receiver<SchedulerState>,
    shutdown: CancellationToken,
    join: JoinHandle<SchedulerExit>,
}

impl SchedulerHandle {
    pub fn state(&self) -> SchedulerState {
        self.state.borrow().clone()
    }

    /// Stops the job before its next pass, or right away if it is sleeping
    pub fn shutdown(&self) {
        self.shutdown.cancel();
    }

    /// Resolves once the job has stopped, without consuming the handle
    pub async fn terminated(&self) {
        let mut state = self.state.clone();
        while *state.borrow() != SchedulerState::Terminated {
            if state.changed().await.is_err() {
                break;
            }
        }
    }

    pub async fn wait(self) -> anyhow::Result<SchedulerExit> {
        Ok(self.join.await?)
    }
}

async fn run_reminders_job(
    ctx: ReminderContext,
    reporter: Arc<dyn IErrorReporter>,
    state: watch::Sender<SchedulerState>,
    shutdown: CancellationToken,
) -> SchedulerExit {
    let exit = loop {
        if shutdown.is_cancelled() {
            break SchedulerExit::Shutdown;
        }

        state.send_replace(SchedulerState::Scanning);
        let pause = match execute(DispatchDueRemindersUseCase {}, &ctx).await {
            Ok(pass) => match pass.next_pass {
                NextPass::After(pause) => pause,
                NextPass::Never => break SchedulerExit::NoPendingReminders,
            },
            Err(e) => {
                reporter.report(&e);
                Duration::from_millis(ctx.config.retry_delay_millis)
            }
        };

        info!("Next reminder pass in {} ms", pause.as_millis());
        state.send_replace(SchedulerState::Sleeping(pause));
        tokio::select! {
            _ = shutdown.cancelled() => break SchedulerExit::Shutdown,
            _ = tokio::time::sleep(pause) => {}
        }
    };

    if let Err(e) = ctx.notifier.close().await {
        reporter.report(&SchedulerError::CloseNotifier(e));
    }
    state.send_replace(SchedulerState::Terminated);
    info!("Reminder scheduler stopped: {:?}", exit);

    exit
}
