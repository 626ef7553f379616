/// Native adapters - implementations for native Rust (non-WASM).

pub mod clock;
pub mod console_logger;
pub mod document;
pub mod log_backend;
pub mod storage_probe;

pub use clock::Clock;
pub use console_logger::ConsoleLogger;
pub use document::Document;
pub use log_backend::{LogAnalytics, LogApp, LogBackend};
pub use storage_probe::StorageProbe;
