use crate::ports::LoggerPort;

pub const TARGET: &str = "firebase_analytics_logger";

/// Diagnostics through the `log` facade under [`TARGET`].
///
/// The host installs the backend (`env_logger` in `demo_app`); without one
/// records are dropped.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleLogger;

impl ConsoleLogger {
    pub fn new() -> Self {
        Self
    }
}

impl LoggerPort for ConsoleLogger {
    fn log(&self, message: &str) {
        log::info!(target: TARGET, "{message}");
    }

    fn debug(&self, message: &str) {
        log::debug!(target: TARGET, "{message}");
    }

    fn warn(&self, message: &str) {
        log::warn!(target: TARGET, "{message}");
    }

    fn error(&self, message: &str) {
        log::error!(target: TARGET, "{message}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_without_backend_records_are_dropped() {
        let logger = ConsoleLogger::new();
        for message in ["log", "debug", "warn", "error"] {
            logger.log(message);
            logger.debug(message);
            logger.warn(message);
            logger.error(message);
        }
        assert!(!log::log_enabled!(target: TARGET, log::Level::Error));
    }
}
