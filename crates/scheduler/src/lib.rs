mod error;
mod job_schedulers;
mod reminder;
mod reporter;
mod shared;

pub use error::SchedulerError;
pub use job_schedulers::{ReminderScheduler, SchedulerExit, SchedulerHandle, SchedulerState};
pub use reminder::dispatch_due_reminders::{DispatchDueRemindersUseCase, DispatchPass, NextPass};
pub use reporter::{IErrorReporter, InMemoryErrorReporter, TracingErrorReporter};
pub use shared::usecase::{execute, UseCase};
