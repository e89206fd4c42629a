use crate::{error::SchedulerError, shared::usecase::UseCase};
use spike_reminder_domain::User;
use spike_reminder_infra::ReminderContext;
use std::time::Duration;
use tracing::info;

/// Sends every `Reminder` that is due and finds out how long
/// to wait until the next one is.
///
/// The pass stops at the first error. `User`s are visited in storage order,
/// so a `User` whose notifications keep failing holds back the due
/// `Reminder`s of every `User` after it until the failure goes away.
#[derive(Debug)]
pub struct DispatchDueRemindersUseCase {}

/// When the next pass should run
#[derive(Debug, Clone, PartialEq)]
pub enum NextPass {
    After(Duration),
    /// There are no upcoming `Reminder`s left
    Never,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DispatchPass {
    /// The timestamp the pass compared the `Reminder`s against
    pub now: i64,
    pub dispatched: usize,
    pub next_pass: NextPass,
}

/// The due `Reminder`s of a `User` as (event name, remind_at) and the
/// time in millis until the first one that is not due yet.
#[derive(Debug, Default)]
struct UserScan {
    due: Vec<(String, i64)>,
    next_delta: Option<i64>,
}

fn min_delta(current: Option<i64>, delta: i64) -> Option<i64> {
    Some(current.map_or(delta, |current| current.min(delta)))
}

fn scan_user(user: &User, now: i64) -> UserScan {
    let mut scan = UserScan::default();
    for event in user.events().filter(|e| e.has_unexecuted_reminders()) {
        for reminder in event.unsent_reminders() {
            if reminder.is_due(now) {
                scan.due.push((event.name.clone(), reminder.remind_at()));
            } else {
                scan.next_delta = min_delta(scan.next_delta, reminder.remind_at() - now);
            }
        }
    }
    scan
}

/// `None` means nothing is upcoming, which is different from an
/// upcoming `Reminder` that is exactly `max_sleep_millis` away.
pub fn get_next_pass(next_delta: Option<i64>, max_sleep_millis: u64) -> NextPass {
    match next_delta {
        None => NextPass::Never,
        Some(delta) => {
            let millis = (delta.max(0) as u64).min(max_sleep_millis);
            NextPass::After(Duration::from_millis(millis))
        }
    }
}

async fn dispatch_reminder(
    user: &mut User,
    event_name: &str,
    remind_at: i64,
    ctx: &ReminderContext,
) -> Result<(), SchedulerError> {
    let (event, reminder) = match user
        .event(event_name)
        .and_then(|e| e.reminder(remind_at).map(|r| (e, r)))
    {
        Some(found) => found,
        None => return Ok(()),
    };

    ctx.notifier
        .notify(user, event, reminder)
        .await
        .map_err(|error| SchedulerError::Notify {
            user_id: user.id.clone(),
            event_name: event_name.to_string(),
            remind_at,
            error,
        })?;

    user.mark_reminder_sent(event_name, remind_at);
    ctx.repos
        .users
        .replace(user)
        .await
        .map_err(|error| SchedulerError::ReplaceUser {
            user_id: user.id.clone(),
            error,
        })?;

    info!(
        "Sent reminder at {} for event: `{}` to user: {}",
        remind_at, event_name, user.id
    );
    Ok(())
}

#[async_trait::async_trait]
impl UseCase for DispatchDueRemindersUseCase {
    type Response = DispatchPass;

    type Errors = SchedulerError;

    const NAME: &'static str = "DispatchDueReminders";

    async fn execute(&mut self, ctx: &ReminderContext) -> Result<Self::Response, Self::Errors> {
        let now = ctx.sys.get_timestamp_millis();
        let users = ctx
            .repos
            .users
            .find_with_pending_reminders()
            .await
            .map_err(SchedulerError::FindUsers)?;

        let mut next_delta = None;
        let mut dispatched = 0;
        for mut user in users {
            let scan = scan_user(&user, now);
            if let Some(delta) = scan.next_delta {
                next_delta = min_delta(next_delta, delta);
            }
            // The user is persisted after every sent reminder
            for (event_name, remind_at) in scan.due {
                dispatch_reminder(&mut user, &event_name, remind_at, ctx).await?;
                dispatched += 1;
            }
        }

        Ok(DispatchPass {
            now,
            dispatched,
            next_pass: get_next_pass(next_delta, ctx.config.max_sleep_millis),
        })
    }
}
