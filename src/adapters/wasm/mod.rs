/// WASM adapters - implementations using browser APIs.

pub mod clock;
pub mod console_logger;
pub mod document;
pub mod firebase;
pub mod storage_probe;

pub use clock::Clock;
pub use console_logger::ConsoleLogger;
pub use document::Document;
pub use firebase::{FirebaseAnalyticsClient, FirebaseAppHandle, FirebaseBackend};
pub use storage_probe::StorageProbe;
