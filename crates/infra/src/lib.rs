mod config;
mod repos;
mod seed;
mod services;
mod system;

pub use config::Config;
pub use repos::{IUserRepo, InMemoryUserRepo, MongoUserRepo, RepoError, Repos};
pub use seed::seed_demo_data;
pub use services::*;
use std::sync::Arc;
pub use system::{ISys, RealSys, StaticTimeSys};
use tracing::warn;

#[derive(Clone)]
pub struct ReminderContext {
    pub repos: Repos,
    pub config: Config,
    pub sys: Arc<dyn ISys>,
    pub notifier: Arc<dyn INotifier>,
}

impl ReminderContext {
    async fn create(config: Config) -> anyhow::Result<Self> {
        let repos = match &config.mongodb_connection_string {
            Some(connection_string) => {
                Repos::create_mongodb(connection_string, &config.mongodb_name).await?
            }
            None => {
                warn!("Using the in memory store, reminders will not survive a restart");
                Repos::create_inmemory()
            }
        };
        let notifier = FileNotifier::open(&config.reminders_file)?;

        Ok(Self {
            repos,
            config,
            sys: Arc::new(RealSys {}),
            notifier: Arc::new(notifier),
        })
    }

    /// Context with the in memory store, useful for testing
    pub fn create_inmemory(sys: Arc<dyn ISys>, notifier: Arc<dyn INotifier>) -> Self {
        Self {
            repos: Repos::create_inmemory(),
            config: Config::new(),
            sys,
            notifier,
        }
    }
}

/// Will setup the infrastructure context given the environment
pub async fn setup_context() -> anyhow::Result<ReminderContext> {
    ReminderContext::create(Config::new()).await
}
