use business::domain::logger::Logger;
use tracing::{debug, error, info, warn};

/// Forwards cart log messages to `tracing` under the `floating_cart` target.
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        info!(target: "floating_cart", "{}", message);
    }
    fn warn(&self, message: &str) {
        warn!(target: "floating_cart", "{}", message);
    }
    fn error(&self, message: &str) {
        error!(target: "floating_cart", "{}", message);
    }
    fn debug(&self, message: &str) {
        debug!(target: "floating_cart", "{}", message);
    }
}
