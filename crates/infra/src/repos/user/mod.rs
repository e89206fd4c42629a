mod inmemory;
mod mongo;

pub use inmemory::InMemoryUserRepo;
pub use mongo::MongoUserRepo;
use spike_reminder_domain::User;

#[async_trait::async_trait]
pub trait IUserRepo: Send + Sync {
    async fn insert(&self, user: &User) -> anyhow::Result<()>;
    /// Overwrites the stored `User` with the same id. Fails with
    /// `RepoError::UserNotFound` instead of inserting when there is none.
    async fn replace(&self, user: &User) -> anyhow::Result<()>;
    /// Every `User` that still has at least one unsent `Reminder`,
    /// with all of its `Event`s and `Reminder`s.
    async fn find_with_pending_reminders(&self) -> anyhow::Result<Vec<User>>;
    async fn delete_all(&self) -> anyhow::Result<u64>;
    async fn check_connection(&self) -> anyhow::Result<()>;
}
