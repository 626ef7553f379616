use std::fmt;
use wasm_bindgen::JsValue;

/// Failures while acquiring the analytics client.
///
/// None of these ever reach a logging call: the provider degrades to a
/// permanently absent client and reports the error once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnalyticsError {
    PlatformUnavailable,
    BackendUnavailable(String),
    AppInitialization(String),
    AnalyticsUnavailable(String),
    JsError(String),
    SerializationError(String),
}

impl fmt::Display for AnalyticsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnalyticsError::PlatformUnavailable => {
                write!(f, "Persistent local storage is not available on this platform")
            }
            AnalyticsError::BackendUnavailable(msg) => write!(f, "Backend unavailable: {msg}"),
            AnalyticsError::AppInitialization(msg) => {
                write!(f, "Failed to initialize backend app: {msg}")
            }
            AnalyticsError::AnalyticsUnavailable(msg) => {
                write!(f, "Analytics client unavailable: {msg}")
            }
            AnalyticsError::JsError(msg) => write!(f, "JavaScript Error: {msg}"),
            AnalyticsError::SerializationError(msg) => write!(f, "Serialization Error: {msg}"),
        }
    }
}

impl std::error::Error for AnalyticsError {}

impl AnalyticsError {
    pub fn backend_unavailable(message: impl Into<String>) -> Self {
        AnalyticsError::BackendUnavailable(message.into())
    }

    pub fn app_initialization(message: impl Into<String>) -> Self {
        AnalyticsError::AppInitialization(message.into())
    }

    pub fn analytics_unavailable(message: impl Into<String>) -> Self {
        AnalyticsError::AnalyticsUnavailable(message.into())
    }

    pub fn serialization_error(message: impl Into<String>) -> Self {
        AnalyticsError::SerializationError(message.into())
    }
}

impl From<JsValue> for AnalyticsError {
    fn from(err: JsValue) -> Self {
        AnalyticsError::JsError(
            err.as_string()
                .unwrap_or_else(|| "Unknown JS error".to_string()),
        )
    }
}

impl From<serde_json::Error> for AnalyticsError {
    fn from(err: serde_json::Error) -> Self {
        AnalyticsError::SerializationError(err.to_string())
    }
}

impl From<AnalyticsError> for JsValue {
    fn from(error: AnalyticsError) -> Self {
        JsValue::from_str(&error.to_string())
    }
}
