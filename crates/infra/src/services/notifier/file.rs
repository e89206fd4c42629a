use super::INotifier;
use chrono::{LocalResult, TimeZone, Utc};
use spike_reminder_domain::{Event, Reminder, User};
use std::{
    fs::File,
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};
use tokio::sync::Mutex;
use tracing::{debug, info};

/// Writes a line for every dispatched `Reminder` to a file. Lines are
/// buffered until `close` is called.
pub struct FileNotifier {
    path: PathBuf,
    writer: Mutex<BufWriter<File>>,
}

impl FileNotifier {
    /// Creates the file, truncating whatever a previous run left behind
    pub fn open(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref().to_path_buf();
        let file = File::create(&path)?;
        Ok(Self {
            path,
            writer: Mutex::new(BufWriter::new(file)),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn format_timestamp(ts: i64) -> String {
    match Utc.timestamp_millis_opt(ts) {
        LocalResult::Single(date) => date.to_rfc3339(),
        _ => ts.to_string(),
    }
}

fn format_notification(user: &User, event: &Event, reminder: &Reminder) -> String {
    format!(
        "Reminder due at {} sent to {} <{}> for the event {} starting at {}",
        format_timestamp(reminder.remind_at()),
        user.name,
        user.email,
        event.name,
        format_timestamp(event.start_ts)
    )
}

#[async_trait::async_trait]
impl INotifier for FileNotifier {
    async fn notify(&self, user: &User, event: &Event, reminder: &Reminder) -> anyhow::Result<()> {
        let line = format_notification(user, event, reminder);
        debug!("{}", line);
        let mut writer = self.writer.lock().await;
        writeln!(writer, "{}", line)?;
        Ok(())
    }

    async fn close(&self) -> anyhow::Result<()> {
        self.writer.lock().await.flush()?;
        info!("Flushed reminders to {}", self.path.display());
        Ok(())
    }
}
