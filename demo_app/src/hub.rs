use firebase_analytics_logger::{
    EventInfo, EventTimingInfo, LogInfo, LogLevel, Logger, LoggerProvider, PageViewInfo,
    PageViewTimingInfo,
};
use std::rc::Rc;

/// Fans every call out to all registered providers.
#[derive(Default)]
pub struct LogHub {
    providers: Vec<Rc<dyn LoggerProvider>>,
}

impl LogHub {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, provider: Rc<dyn LoggerProvider>) {
        log::info!("Registered logger provider '{}'", provider.name());
        self.providers.push(provider);
    }

    /// One logger per provider, bundled under `category`.
    pub fn create_logger(&self, category: &str) -> CategoryLogger {
        CategoryLogger {
            loggers: self
                .providers
                .iter()
                .map(|provider| provider.create_logger(category))
                .collect(),
        }
    }

    pub fn set_user_properties(&self, user_id: &str, account_id: Option<&str>) {
        for provider in &self.providers {
            provider.set_user_properties(user_id, account_id);
        }
    }

    pub fn clear_user_properties(&self) {
        for provider in &self.providers {
            provider.clear_user_properties();
        }
    }
}

pub struct CategoryLogger {
    loggers: Vec<Rc<dyn Logger>>,
}

impl Logger for CategoryLogger {
    fn log(&self, level: LogLevel, message: &str, info: Option<&LogInfo>) {
        self.loggers.iter().for_each(|l| l.log(level, message, info));
    }

    fn start_track_page(&self, name: Option<&str>) {
        self.loggers.iter().for_each(|l| l.start_track_page(name));
    }

    fn stop_track_page(&self, name: Option<&str>, info: Option<&PageViewTimingInfo>) {
        self.loggers.iter().for_each(|l| l.stop_track_page(name, info));
    }

    fn track_page_view(&self, info: Option<&PageViewInfo>) {
        self.loggers.iter().for_each(|l| l.track_page_view(info));
    }

    fn start_track_event(&self, name: &str) {
        self.loggers.iter().for_each(|l| l.start_track_event(name));
    }

    fn stop_track_event(&self, name: &str, info: Option<&EventTimingInfo>) {
        self.loggers.iter().for_each(|l| l.stop_track_event(name, info));
    }

    fn track_event(&self, info: &EventInfo) {
        self.loggers.iter().for_each(|l| l.track_event(info));
    }

    fn flush(&self) {
        self.loggers.iter().for_each(|l| l.flush());
    }
}
