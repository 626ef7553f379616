use firebase_analytics_logger::{AnalyticsLoggerOptions, FirebaseConfig};
use once_cell::sync::Lazy;
use std::env;

pub struct Config {
    pub measurement_id: Option<String>,
    pub api_key: Option<String>,
    pub project_id: Option<String>,
    pub app_id: Option<String>,
    pub app_name: Option<String>,
    pub collection_enabled: Option<bool>,
    pub debug: bool,
}

fn var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|value| !value.is_empty())
}

impl Default for Config {
    fn default() -> Self {
        Self {
            measurement_id: var("FIREBASE_MEASUREMENT_ID"),
            api_key: var("FIREBASE_API_KEY"),
            project_id: var("FIREBASE_PROJECT_ID"),
            app_id: var("FIREBASE_APP_ID"),
            app_name: var("FIREBASE_APP_NAME"),
            collection_enabled: var("ANALYTICS_COLLECTION_ENABLED")
                .and_then(|value| value.parse().ok()),
            debug: var("ANALYTICS_DEBUG")
                .and_then(|value| value.parse().ok())
                .unwrap_or(false),
        }
    }
}

impl Config {
    pub fn logger_options(&self) -> AnalyticsLoggerOptions {
        AnalyticsLoggerOptions {
            firebase: FirebaseConfig {
                measurement_id: self.measurement_id.clone(),
                api_key: self.api_key.clone(),
                project_id: self.project_id.clone(),
                app_id: self.app_id.clone(),
                ..FirebaseConfig::default()
            },
            app_name: self.app_name.clone(),
            collection_enabled: self.collection_enabled,
            debug_logging: Some(self.debug),
        }
    }
}

pub static CONFIG: Lazy<Config> = Lazy::new(Config::default);
