/// User facing, fire-and-forget notifications.
pub trait Notifier: Send + Sync {
    fn notify(&self, message: &str);
}

pub mod in_memory;
pub mod tracing_notifier;
