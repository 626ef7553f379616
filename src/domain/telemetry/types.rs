use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Free-form event properties. Ordered, so emitted mappings are deterministic.
pub type Properties = Map<String, Value>;

/// Numeric measurements merged over properties.
pub type Measurements = BTreeMap<String, f64>;

/// Host log levels. The numeric values match the host facade's wire values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum LogLevel {
    Trace = 0,
    Debug = 1,
    Info = 2,
    Warn = 3,
    Error = 4,
    Critical = 5,
    None = 6,
}

impl LogLevel {
    /// Error and Critical are emitted as `exception` events.
    pub fn is_exception(self) -> bool {
        matches!(self, LogLevel::Error | LogLevel::Critical)
    }

    /// `level` field of a `trace` event. Anything above Info collapses to `warn`.
    pub fn trace_label(self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            _ => "warn",
        }
    }
}

impl TryFrom<u8> for LogLevel {
    type Error = u8;

    fn try_from(value: u8) -> Result<Self, u8> {
        match value {
            0 => Ok(LogLevel::Trace),
            1 => Ok(LogLevel::Debug),
            2 => Ok(LogLevel::Info),
            3 => Ok(LogLevel::Warn),
            4 => Ok(LogLevel::Error),
            5 => Ok(LogLevel::Critical),
            6 => Ok(LogLevel::None),
            other => Err(other),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogInfo {
    pub properties: Option<Properties>,
}

impl LogInfo {
    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.properties
            .get_or_insert_with(Properties::new)
            .insert(key.into(), value.into());
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageViewTimingInfo {
    pub uri: Option<String>,
    pub ref_uri: Option<String>,
    pub page_type: Option<String>,
    pub is_logged_in: Option<bool>,
    pub properties: Option<Properties>,
    pub measurements: Option<Measurements>,
}

impl PageViewTimingInfo {
    pub fn with_uri(uri: impl Into<String>) -> Self {
        Self {
            uri: Some(uri.into()),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PageViewInfo {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(flatten)]
    pub page: PageViewTimingInfo,
}

impl PageViewInfo {
    pub fn with_uri(uri: impl Into<String>) -> Self {
        Self {
            name: None,
            page: PageViewTimingInfo::with_uri(uri),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EventTimingInfo {
    pub properties: Option<Properties>,
    pub measurements: Option<Measurements>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EventInfo {
    pub name: String,
    #[serde(default)]
    pub properties: Option<Properties>,
    #[serde(default)]
    pub measurements: Option<Measurements>,
}

impl EventInfo {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.properties
            .get_or_insert_with(Properties::new)
            .insert(key.into(), value.into());
        self
    }

    pub fn with_measurement(mut self, key: impl Into<String>, value: f64) -> Self {
        self.measurements
            .get_or_insert_with(Measurements::new)
            .insert(key.into(), value);
        self
    }
}
