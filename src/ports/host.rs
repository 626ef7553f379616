use crate::domain::telemetry::{
    EventInfo, EventTimingInfo, LogInfo, LogLevel, PageViewInfo, PageViewTimingInfo,
};
use std::rc::Rc;

/// Capability set a host logging facade dispatches through. Implementations
/// never fail: every problem is reported on the diagnostic channel.
pub trait Logger {
    fn log(&self, level: LogLevel, message: &str, info: Option<&LogInfo>);

    /// Logs an error value, stringified with its `Display` output.
    fn log_error(&self, level: LogLevel, error: &dyn std::error::Error, info: Option<&LogInfo>) {
        self.log(level, &error.to_string(), info);
    }

    fn start_track_page(&self, name: Option<&str>);

    fn stop_track_page(&self, name: Option<&str>, info: Option<&PageViewTimingInfo>);

    fn track_page_view(&self, info: Option<&PageViewInfo>);

    fn start_track_event(&self, name: &str);

    fn stop_track_event(&self, name: &str, info: Option<&EventTimingInfo>);

    fn track_event(&self, info: &EventInfo);

    fn flush(&self);
}

/// A logger factory registered with the host. Provider-level logging calls go
/// to its default-category logger.
pub trait LoggerProvider: Logger {
    fn name(&self) -> &str;

    fn create_logger(&self, category: &str) -> Rc<dyn Logger>;

    fn set_user_properties(&self, user_id: &str, account_id: Option<&str>);

    fn clear_user_properties(&self);
}
