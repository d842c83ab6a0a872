use std::sync::Arc;

use business::domain::cart::services::Navigator;
use business::domain::logger::Logger;

/// Router stand-in for the terminal host: there is no second screen, so a
/// navigation request is only logged.
pub struct LoggingNavigator {
    logger: Arc<dyn Logger>,
}

impl LoggingNavigator {
    pub fn new(logger: Arc<dyn Logger>) -> Self {
        Self { logger }
    }
}

impl Navigator for LoggingNavigator {
    fn navigate(&self, screen: &str) {
        self.logger.info(&format!("Navigating to screen: {}", screen));
    }
}
