pub mod client;
pub mod identity;
pub mod options;
pub mod telemetry;

pub use identity::{SharedIdentity, UserIdentity};
pub use options::{AnalyticsLoggerOptions, FirebaseConfig, DEFAULT_APP_NAME};
