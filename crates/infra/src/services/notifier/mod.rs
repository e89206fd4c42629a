mod file;
mod inmemory;

pub use file::FileNotifier;
pub use inmemory::{InMemoryNotifier, SentNotification};
use spike_reminder_domain::{Event, Reminder, User};

/// Delivers a notification to a `User` that a `Reminder` for one of
/// its `Event`s is due.
#[async_trait::async_trait]
pub trait INotifier: Send + Sync {
    async fn notify(&self, user: &User, event: &Event, reminder: &Reminder) -> anyhow::Result<()>;

    /// Flushes everything that has been buffered. Called once the scheduler
    /// stops, however it stops.
    async fn close(&self) -> anyhow::Result<()> {
        Ok(())
    }
}
