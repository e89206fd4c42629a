mod notifier;

pub use notifier::{FileNotifier, INotifier, InMemoryNotifier, SentNotification};
