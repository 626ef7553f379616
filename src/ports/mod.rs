/// Ports module - Defines the interfaces (traits) that abstract platform-specific functionality.
///
/// Stateless ports (`LoggerPort`, `ClockPort`, `StorageProbePort`, `DocumentPort`) are
/// implemented by unit adapters and reached through `Platform`. The backend ports hold
/// JavaScript handles on wasm and are therefore single-threaded (`Rc`, no `Send`).

pub mod analytics;
pub mod backend;
pub mod clock;
pub mod document;
pub mod host;
pub mod logger;
pub mod storage_probe;

pub use analytics::AnalyticsClientPort;
pub use backend::{BackendAppPort, BackendPort};
pub use clock::ClockPort;
pub use document::DocumentPort;
pub use host::{Logger, LoggerProvider};
pub use logger::LoggerPort;
pub use storage_probe::StorageProbePort;
