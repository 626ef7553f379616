// Hexagonal architecture modules
pub mod adapters;
pub mod domain;
pub mod platform;
pub mod ports;

pub mod errors;
pub mod logger;
pub mod provider;

#[cfg(target_arch = "wasm32")]
pub mod facades;
#[cfg(target_arch = "wasm32")]
pub mod global;

pub use domain::telemetry::{
    EventInfo, EventTimingInfo, LogInfo, LogLevel, Measurements, PageViewInfo,
    PageViewTimingInfo, Properties,
};
pub use domain::{AnalyticsLoggerOptions, FirebaseConfig, UserIdentity};
pub use errors::AnalyticsError;
pub use logger::FirebaseAnalyticsLogger;
pub use platform::Platform;
pub use ports::{AnalyticsClientPort, BackendAppPort, BackendPort, Logger, LoggerProvider};
pub use provider::{FirebaseAnalyticsLoggerProvider, PROVIDER_NAME};

use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn start_app() -> Result<(), JsValue> {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    Ok(())
}
