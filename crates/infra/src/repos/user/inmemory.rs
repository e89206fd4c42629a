use super::IUserRepo;
use crate::repos::shared::{inmemory_repo::*, repo::RepoError};
use spike_reminder_domain::User;

pub struct InMemoryUserRepo {
    users: std::sync::Mutex<Vec<User>>,
}

impl InMemoryUserRepo {
    pub fn new() -> Self {
        Self {
            users: std::sync::Mutex::new(vec![]),
        }
    }
}

impl Default for InMemoryUserRepo {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl IUserRepo for InMemoryUserRepo {
    async fn insert(&self, user: &User) -> anyhow::Result<()> {
        insert(user, &self.users);
        Ok(())
    }

    async fn replace(&self, user: &User) -> anyhow::Result<()> {
        if !replace(user, &self.users) {
            return Err(RepoError::UserNotFound(user.id.clone()).into());
        }
        Ok(())
    }

    async fn find_with_pending_reminders(&self) -> anyhow::Result<Vec<User>> {
        Ok(find_by(&self.users, |u| u.has_unexecuted_reminders()))
    }

    async fn delete_all(&self) -> anyhow::Result<u64> {
        Ok(delete_all(&self.users) as u64)
    }

    async fn check_connection(&self) -> anyhow::Result<()> {
        Ok(())
    }
}
