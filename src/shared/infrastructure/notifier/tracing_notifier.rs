use crate::shared::infrastructure::notifier::Notifier;

/// Forwards notifications to the log; used when no UI is attached.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, message: &str) {
        tracing::warn!(target: "cart::notify", notification = %message, "user notification");
    }
}
