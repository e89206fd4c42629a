pub mod dispatch_due_reminders;
