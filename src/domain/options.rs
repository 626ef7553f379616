use crate::errors::AnalyticsError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// App name used when the options do not name one.
pub const DEFAULT_APP_NAME: &str = "[DEFAULT]";

/// Firebase web app configuration, in the shape the Firebase console hands out.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FirebaseConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub measurement_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub app_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth_domain: Option<String>,
    #[serde(
        default,
        rename = "databaseURL",
        skip_serializing_if = "Option::is_none"
    )]
    pub database_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub storage_bucket: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub messaging_sender_id: Option<String>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsLoggerOptions {
    #[serde(default)]
    pub firebase: FirebaseConfig,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub app_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collection_enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub debug_logging: Option<bool>,
}

impl AnalyticsLoggerOptions {
    pub fn new(measurement_id: impl Into<String>) -> Self {
        Self {
            firebase: FirebaseConfig {
                measurement_id: Some(measurement_id.into()),
                ..FirebaseConfig::default()
            },
            ..Self::default()
        }
    }

    pub fn from_json(json: &str) -> Result<Self, AnalyticsError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn with_app_name(mut self, app_name: impl Into<String>) -> Self {
        self.app_name = Some(app_name.into());
        self
    }

    pub fn with_collection_enabled(mut self, enabled: bool) -> Self {
        self.collection_enabled = Some(enabled);
        self
    }

    pub fn with_debug_logging(mut self, enabled: bool) -> Self {
        self.debug_logging = Some(enabled);
        self
    }

    /// Key deduplicating client initialization: the measurement id.
    /// `None` means analytics is disabled for this configuration.
    pub fn identity_key(&self) -> Option<&str> {
        self.firebase
            .measurement_id
            .as_deref()
            .filter(|id| !id.is_empty())
    }

    pub fn app_name(&self) -> &str {
        self.app_name
            .as_deref()
            .filter(|name| !name.is_empty())
            .unwrap_or(DEFAULT_APP_NAME)
    }

    pub fn debug_logging(&self) -> bool {
        self.debug_logging.unwrap_or(false)
    }
}
