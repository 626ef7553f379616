/// Adapters module - platform-specific implementations of ports.

mod globals;

#[cfg(target_arch = "wasm32")]
pub mod wasm;
#[cfg(not(target_arch = "wasm32"))]
pub mod native;

#[cfg(target_arch = "wasm32")]
pub use wasm::{Clock, ConsoleLogger, Document, FirebaseBackend, StorageProbe};
#[cfg(not(target_arch = "wasm32"))]
pub use native::{Clock, ConsoleLogger, Document, LogBackend, StorageProbe};

pub use globals::{clock, document, logger, storage_probe};
