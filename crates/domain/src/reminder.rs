/// A `Reminder` represents a specific time before the start of an `Event`
/// at which the owner `User` should be notified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reminder {
    /// The timestamp in millis at which the `User` should be notified.
    /// This is the key of the `Reminder` within its `Event`.
    remind_at: i64,
    /// Whether the `User` has been notified. Once set it is never unset.
    sent: bool,
}

impl Reminder {
    pub fn new(remind_at: i64) -> Self {
        Self {
            remind_at,
            sent: false,
        }
    }

    /// Rebuilds a `Reminder` from its persisted representation
    pub fn from_parts(remind_at: i64, sent: bool) -> Self {
        Self { remind_at, sent }
    }

    pub fn remind_at(&self) -> i64 {
        self.remind_at
    }

    pub fn is_sent(&self) -> bool {
        self.sent
    }

    /// Is the `Reminder` unsent and scheduled at or before `now`
    pub fn is_due(&self, now: i64) -> bool {
        !self.sent && self.remind_at <= now
    }

    pub fn mark_sent(&mut self) {
        self.sent = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn due_at_or_before_now() {
        let reminder = Reminder::new(100);
        assert!(!reminder.is_due(99));
        assert!(reminder.is_due(100));
        assert!(reminder.is_due(101));
    }

    #[test]
    fn sent_reminder_is_never_due_again() {
        let mut reminder = Reminder::new(100);
        reminder.mark_sent();
        reminder.mark_sent();
        assert!(reminder.is_sent());
        assert!(!reminder.is_due(200));
    }
}
