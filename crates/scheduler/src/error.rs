use spike_reminder_domain::ID;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SchedulerError {
    #[error("Unable to find users with pending reminders. Error message: `{0}`")]
    FindUsers(anyhow::Error),
    #[error("Unable to notify user: {user_id} about event: `{event_name}`. Error message: `{error}`")]
    Notify {
        user_id: ID,
        event_name: String,
        remind_at: i64,
        error: anyhow::Error,
    },
    #[error("Unable to persist user: {user_id}. Error message: `{error}`")]
    ReplaceUser { user_id: ID, error: anyhow::Error },
    #[error("Unable to close the notifier. Error message: `{0}`")]
    CloseNotifier(anyhow::Error),
}
