use crate::domain::FirebaseConfig;
use crate::errors::AnalyticsError;
use crate::ports::{AnalyticsClientPort, BackendAppPort, BackendPort};
use async_trait::async_trait;
use once_cell::unsync::OnceCell;
use serde_json::{Map, Value};
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

const EVENT_TARGET: &str = "analytics";

/// In-process analytics backend for native hosts.
///
/// Apps are kept per name like the Firebase SDK does; their analytics client
/// writes every event as one JSON line to the `analytics` log target.
#[derive(Default)]
pub struct LogBackend {
    apps: RefCell<HashMap<String, Rc<LogApp>>>,
}

impl LogBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn app_count(&self) -> usize {
        self.apps.borrow().len()
    }
}

#[async_trait(?Send)]
impl BackendPort for LogBackend {
    async fn load(&self) -> Result<(), AnalyticsError> {
        Ok(())
    }

    fn existing_app(&self, name: &str) -> Option<Rc<dyn BackendAppPort>> {
        self.apps
            .borrow()
            .get(name)
            .map(|app| app.clone() as Rc<dyn BackendAppPort>)
    }

    fn initialize_app(
        &self,
        config: &FirebaseConfig,
        name: &str,
    ) -> Result<Rc<dyn BackendAppPort>, AnalyticsError> {
        let mut apps = self.apps.borrow_mut();
        if apps.contains_key(name) {
            return Err(AnalyticsError::app_initialization(format!(
                "Firebase App named '{name}' already exists"
            )));
        }

        let app = Rc::new(LogApp {
            name: name.to_string(),
            config: config.clone(),
            analytics: OnceCell::new(),
        });
        apps.insert(name.to_string(), app.clone());
        Ok(app)
    }
}

pub struct LogApp {
    name: String,
    config: FirebaseConfig,
    analytics: OnceCell<Rc<LogAnalytics>>,
}

impl LogApp {
    pub fn config(&self) -> &FirebaseConfig {
        &self.config
    }
}

impl BackendAppPort for LogApp {
    fn name(&self) -> String {
        self.name.clone()
    }

    fn analytics(&self) -> Result<Rc<dyn AnalyticsClientPort>, AnalyticsError> {
        let analytics = self.analytics.get_or_try_init(|| {
            let measurement_id = self
                .config
                .measurement_id
                .clone()
                .filter(|id| !id.is_empty())
                .ok_or_else(|| {
                    AnalyticsError::analytics_unavailable(format!(
                        "app '{}' has no measurementId",
                        self.name
                    ))
                })?;

            Ok::<_, AnalyticsError>(Rc::new(LogAnalytics::new(measurement_id)))
        })?;

        Ok(analytics.clone())
    }
}

/// Analytics client writing events through the `log` crate.
pub struct LogAnalytics {
    measurement_id: String,
    collection_enabled: Cell<bool>,
}

impl LogAnalytics {
    pub fn new(measurement_id: impl Into<String>) -> Self {
        Self {
            measurement_id: measurement_id.into(),
            collection_enabled: Cell::new(true),
        }
    }

    pub fn is_collection_enabled(&self) -> bool {
        self.collection_enabled.get()
    }
}

impl AnalyticsClientPort for LogAnalytics {
    fn log_event(&self, name: &str, params: &Map<String, Value>) {
        if !self.collection_enabled.get() {
            return;
        }

        match serde_json::to_string(params) {
            Ok(params) => log::info!(
                target: EVENT_TARGET,
                "[{}] {} {}",
                self.measurement_id,
                name,
                params
            ),
            Err(e) => log::warn!(
                target: EVENT_TARGET,
                "Failed to serialize parameters of event {name}: {e}"
            ),
        }
    }

    fn set_analytics_collection_enabled(&self, enabled: bool) {
        self.collection_enabled.set(enabled);
    }
}
