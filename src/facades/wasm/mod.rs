pub mod converters;
pub mod logger;
pub mod provider;

pub use logger::AnalyticsLogger;
pub use provider::AnalyticsLoggerProvider;
