use dashboard_core::{Notification, Notifier};

/// Prints notifications to stderr as `LEVEL: message`.
#[derive(Debug, Default, Clone, Copy)]
pub(crate) struct StderrNotifier;

impl Notifier for StderrNotifier {
    fn notify(&self, notification: Notification) {
        eprintln!("{notification}");
    }
}
