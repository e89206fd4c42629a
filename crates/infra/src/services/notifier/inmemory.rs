use super::INotifier;
use spike_reminder_domain::{Event, Reminder, User, ID};
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::Mutex;

#[derive(Debug, Clone, PartialEq)]
pub struct SentNotification {
    pub user_id: ID,
    pub event_name: String,
    pub remind_at: i64,
}

/// Keeps every notification in memory, used for testing
#[derive(Default)]
pub struct InMemoryNotifier {
    sent: Mutex<Vec<SentNotification>>,
    closed: AtomicBool,
}

impl InMemoryNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn sent(&self) -> Vec<SentNotification> {
        self.sent.lock().await.clone()
    }

    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl INotifier for InMemoryNotifier {
    async fn notify(&self, user: &User, event: &Event, reminder: &Reminder) -> anyhow::Result<()> {
        self.sent.lock().await.push(SentNotification {
            user_id: user.id.clone(),
            event_name: event.name.clone(),
            remind_at: reminder.remind_at(),
        });
        Ok(())
    }

    async fn close(&self) -> anyhow::Result<()> {
        self.closed.store(true, Ordering::SeqCst);
        Ok(())
    }
}
