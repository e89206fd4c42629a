use crate::error::SchedulerError;
use std::sync::Mutex;
use tracing::error;

/// Receives the errors the scheduler recovers from
pub trait IErrorReporter: Send + Sync {
    fn report(&self, error: &SchedulerError);
}

/// Reports errors to the tracing subscriber, used when not testing
pub struct TracingErrorReporter {}
impl IErrorReporter for TracingErrorReporter {
    fn report(&self, e: &SchedulerError) {
        error!("Reminder scheduler error: {}", e);
    }
}

/// Keeps every reported error, used for testing
#[derive(Default)]
pub struct InMemoryErrorReporter {
    errors: Mutex<Vec<String>>,
}

impl InMemoryErrorReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Messages of the errors reported so far
    pub fn reported(&self) -> Vec<String> {
        self.errors.lock().unwrap().clone()
    }
}

impl IErrorReporter for InMemoryErrorReporter {
    fn report(&self, e: &SchedulerError) {
        self.errors.lock().unwrap().push(e.to_string());
    }
}
