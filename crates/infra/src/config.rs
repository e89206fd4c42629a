use std::{fmt::Display, path::PathBuf, str::FromStr};
use tracing::{info, warn};

#[derive(Debug, Clone)]
pub struct Config {
    /// Connection string for MongoDB. When it is not provided the
    /// `User`s are only kept in memory for the lifetime of the process.
    pub mongodb_connection_string: Option<String>,
    /// Name of the MongoDB database holding the `users` collection
    pub mongodb_name: String,
    /// File the `FileNotifier` writes dispatched reminders to
    pub reminders_file: PathBuf,
    /// Delete every stored `User` before the scheduler starts
    pub reset_store: bool,
    /// Insert the demo `User`s before the scheduler starts
    pub seed_demo_data: bool,
    /// Longest time in millis the scheduler sleeps between two passes,
    /// even if the next `Reminder` is further away.
    pub max_sleep_millis: u64,
    /// Time in millis the scheduler waits after a pass that failed
    /// before it tries again.
    pub retry_delay_millis: u64,
}

fn env_or_default<T>(key: &str, default: T) -> T
where
    T: FromStr + Display,
{
    let value = match std::env::var(key) {
        Ok(value) => value,
        Err(_) => return default,
    };
    match value.parse::<T>() {
        Ok(value) => value,
        Err(_) => {
            warn!(
                "The given {}: {} is not valid, falling back to the default: {}.",
                key, value, default
            );
            default
        }
    }
}

impl Config {
    pub fn new() -> Self {
        let mongodb_connection_string = std::env::var("MONGODB_CONNECTION_STRING").ok();
        if mongodb_connection_string.is_none() {
            info!("Did not find MONGODB_CONNECTION_STRING environment variable. Users will only be stored in memory.");
        }
        let mongodb_name =
            std::env::var("MONGODB_NAME").unwrap_or_else(|_| "TestReminder".to_string());
        let reminders_file =
            std::env::var("REMINDERS_FILE").unwrap_or_else(|_| "Reminders.txt".to_string());

        Self {
            mongodb_connection_string,
            mongodb_name,
            reminders_file: PathBuf::from(reminders_file),
            reset_store: env_or_default("RESET_STORE", true),
            seed_demo_data: env_or_default("SEED_DEMO_DATA", true),
            max_sleep_millis: env_or_default("REMINDER_MAX_SLEEP_MILLIS", 1000 * 60 * 60), // 1 hour
            retry_delay_millis: env_or_default("REMINDER_RETRY_DELAY_MILLIS", 1000 * 60), // 1 minute
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const KEYS: [&str; 7] = [
        "MONGODB_CONNECTION_STRING",
        "MONGODB_NAME",
        "REMINDERS_FILE",
        "RESET_STORE",
        "SEED_DEMO_DATA",
        "REMINDER_MAX_SLEEP_MILLIS",
        "REMINDER_RETRY_DELAY_MILLIS",
    ];

    fn clear_env() {
        for key in KEYS.iter() {
            std::env::remove_var(key);
        }
    }

    #[test]
    #[serial]
    fn uses_defaults_without_env() {
        clear_env();
        let config = Config::new();
        assert!(config.mongodb_connection_string.is_none());
        assert_eq!(config.mongodb_name, "TestReminder");
        assert_eq!(config.reminders_file, PathBuf::from("Reminders.txt"));
        assert!(config.reset_store);
        assert!(config.seed_demo_data);
        assert_eq!(config.max_sleep_millis, 3_600_000);
        assert_eq!(config.retry_delay_millis, 60_000);
    }

    #[test]
    #[serial]
    fn reads_env() {
        clear_env();
        std::env::set_var("MONGODB_CONNECTION_STRING", "mongodb://localhost:27017");
        std::env::set_var("SEED_DEMO_DATA", "false");
        std::env::set_var("REMINDER_MAX_SLEEP_MILLIS", "5000");
        let config = Config::new();
        assert_eq!(
            config.mongodb_connection_string.as_deref(),
            Some("mongodb://localhost:27017")
        );
        assert!(!config.seed_demo_data);
        assert_eq!(config.max_sleep_millis, 5000);
        clear_env();
    }

    #[test]
    #[serial]
    fn falls_back_on_invalid_values() {
        clear_env();
        std::env::set_var("RESET_STORE", "maybe");
        std::env::set_var("REMINDER_RETRY_DELAY_MILLIS", "-10");
        let config = Config::new();
        assert!(config.reset_store);
        assert_eq!(config.retry_delay_millis, 60_000);
        clear_env();
    }
}
