use crate::reminder::Reminder;
use std::collections::BTreeMap;

/// An `Event` is something happening at `start_ts` that the owner `User`
/// wants to be reminded about. The `name` identifies the `Event` within
/// its `User`.
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    pub name: String,
    pub start_ts: i64,
    reminders: BTreeMap<i64, Reminder>,
}

impl Event {
    pub fn new(name: impl Into<String>, start_ts: i64) -> Self {
        Self {
            name: name.into(),
            start_ts,
            reminders: BTreeMap::new(),
        }
    }

    /// Adds a `Reminder` at `remind_at` if it lies strictly between `now`
    /// and the start of the `Event`. A `Reminder` at an already used
    /// timestamp is ignored.
    ///
    /// Returns whether the `Reminder` was retained.
    pub fn add_reminder(&mut self, remind_at: i64, now: i64) -> bool {
        if remind_at <= now || remind_at >= self.start_ts {
            return false;
        }
        if self.reminders.contains_key(&remind_at) {
            return false;
        }
        self.reminders.insert(remind_at, Reminder::new(remind_at));
        true
    }

    /// Restores a persisted `Reminder` without checking the time window,
    /// which is only enforced when the `Reminder` is first configured.
    pub fn restore_reminder(&mut self, reminder: Reminder) {
        self.reminders.insert(reminder.remind_at(), reminder);
    }

    /// Reminders ordered by `remind_at`
    pub fn reminders(&self) -> impl Iterator<Item = &Reminder> {
        self.reminders.values()
    }

    pub fn reminder(&self, remind_at: i64) -> Option<&Reminder> {
        self.reminders.get(&remind_at)
    }

    pub fn unsent_reminders(&self) -> impl Iterator<Item = &Reminder> {
        self.reminders.values().filter(|r| !r.is_sent())
    }

    pub fn has_unexecuted_reminders(&self) -> bool {
        self.unsent_reminders().next().is_some()
    }

    /// Returns `false` if there is no `Reminder` at `remind_at`
    pub fn mark_reminder_sent(&mut self, remind_at: i64) -> bool {
        match self.reminders.get_mut(&remind_at) {
            Some(reminder) => {
                reminder.mark_sent();
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINUTE: i64 = 1000 * 60;

    #[test]
    fn retains_reminders_between_now_and_start() {
        let now = 0;
        let mut event = Event::new("Event0", now + 9 * MINUTE);
        assert!(event.add_reminder(now + 2 * MINUTE, now));
        assert!(event.add_reminder(now + 4 * MINUTE, now));
        assert!(event.add_reminder(now + 6 * MINUTE, now));
        assert_eq!(event.reminders().count(), 3);
        assert!(event.has_unexecuted_reminders());
    }

    #[test]
    fn rejects_reminders_outside_of_window() {
        let now = 1000;
        let mut event = Event::new("Event0", now + 9 * MINUTE);

        // After the event
        assert!(!event.add_reminder(event.start_ts + MINUTE, now));
        // At the event
        assert!(!event.add_reminder(event.start_ts, now));
        // Now
        assert!(!event.add_reminder(now, now));
        // In the past
        assert!(!event.add_reminder(now - MINUTE, now));

        assert_eq!(event.reminders().count(), 0);
        assert!(!event.has_unexecuted_reminders());
    }

    #[test]
    fn ignores_reminder_at_same_time() {
        let mut event = Event::new("Event0", 10 * MINUTE);
        assert!(event.add_reminder(2 * MINUTE, 0));
        assert!(event.mark_reminder_sent(2 * MINUTE));
        assert!(!event.add_reminder(2 * MINUTE, 0));

        assert_eq!(event.reminders().count(), 1);
        assert!(event.reminder(2 * MINUTE).unwrap().is_sent());
    }

    #[test]
    fn reminders_are_ordered_by_time() {
        let mut event = Event::new("Event0", 10 * MINUTE);
        event.add_reminder(6 * MINUTE, 0);
        event.add_reminder(2 * MINUTE, 0);
        event.add_reminder(4 * MINUTE, 0);
        let times = event.reminders().map(|r| r.remind_at()).collect::<Vec<_>>();
        assert_eq!(times, vec![2 * MINUTE, 4 * MINUTE, 6 * MINUTE]);
    }

    #[test]
    fn no_pending_work_when_all_are_sent() {
        let mut event = Event::new("Event0", 10 * MINUTE);
        event.add_reminder(2 * MINUTE, 0);
        event.add_reminder(4 * MINUTE, 0);
        event.mark_reminder_sent(2 * MINUTE);
        assert!(event.has_unexecuted_reminders());
        event.mark_reminder_sent(4 * MINUTE);
        assert!(!event.has_unexecuted_reminders());
        assert!(!event.mark_reminder_sent(8 * MINUTE));
    }
}
