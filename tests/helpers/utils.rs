use spike_reminder_domain::User;
use spike_reminder_infra::{ISys, IUserRepo, InMemoryUserRepo};
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::time::Instant;

pub const MINUTE: i64 = 1000 * 60;

/// Follows the tokio clock, so that paused time also moves the timestamps
pub struct TokioSys {
    pub origin_ts: i64,
    pub origin: Instant,
}

impl ISys for TokioSys {
    fn get_timestamp_millis(&self) -> i64 {
        self.origin_ts + self.origin.elapsed().as_millis() as i64
    }
}

/// Inmemory user repo that counts how often it is read
#[derive(Default)]
pub struct CountingUserRepo {
    inner: InMemoryUserRepo,
    finds: AtomicUsize,
}

impl CountingUserRepo {
    pub fn finds(&self) -> usize {
        self.finds.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl IUserRepo for CountingUserRepo {
    async fn insert(&self, user: &User) -> anyhow::Result<()> {
        self.inner.insert(user).await
    }

    async fn replace(&self, user: &User) -> anyhow::Result<()> {
        self.inner.replace(user).await
    }

    async fn find_with_pending_reminders(&self) -> anyhow::Result<Vec<User>> {
        self.finds.fetch_add(1, Ordering::SeqCst);
        self.inner.find_with_pending_reminders().await
    }

    async fn delete_all(&self) -> anyhow::Result<u64> {
        self.inner.delete_all().await
    }

    async fn check_connection(&self) -> anyhow::Result<()> {
        self.inner.check_connection().await
    }
}
