use crate::domain::client::ClientSlot;
use crate::domain::telemetry::mapping::{
    self, PAGE_VIEW_EVENT, TIMING_COMPLETE_EVENT,
};
use crate::domain::telemetry::{
    EventInfo, EventTimingInfo, LogInfo, LogLevel, PageViewInfo, PageViewTimingInfo,
    Properties, TimingError, TimingRegistry,
};
use crate::domain::SharedIdentity;
use crate::platform::Platform;
use crate::ports::{AnalyticsClientPort, Logger};
use serde_json::Value;
use std::cell::RefCell;
use std::rc::Rc;

/// Firebase Analytics implementation of [`Logger`].
///
/// The client is read from a shared slot on every call, so a logger created
/// before the provider finished initializing starts emitting once it has.
/// Without a client every call is a no-op, except that timing pairs are still
/// tracked and misuse is still reported.
pub struct FirebaseAnalyticsLogger {
    category: String,
    platform: Platform,
    identity: SharedIdentity,
    client: Rc<ClientSlot>,
    timing: RefCell<TimingRegistry>,
}

impl FirebaseAnalyticsLogger {
    pub fn new(
        category: impl Into<String>,
        platform: Platform,
        identity: SharedIdentity,
        client: Rc<ClientSlot>,
    ) -> Self {
        Self {
            category: category.into(),
            platform,
            identity,
            client,
            timing: RefCell::new(TimingRegistry::new()),
        }
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    /// Start timestamp of a running page or event timing.
    pub fn started_at(&self, name: &str) -> Option<f64> {
        self.timing.borrow().started_at(name)
    }

    fn client(&self) -> Option<&dyn AnalyticsClientPort> {
        self.client.get()
    }

    fn page_name(&self, name: Option<&str>) -> Result<String, TimingError> {
        let name = match name {
            Some(name) => name.to_string(),
            None => self.platform.document().title().unwrap_or_default(),
        };

        if name.is_empty() {
            return Err(TimingError::NameRequired);
        }
        Ok(name)
    }

    fn start(&self, method: &'static str, name: &str) -> Result<(), TimingError> {
        let now = self.platform.clock().now();
        self.timing.borrow_mut().start(method, name, now)
    }

    fn stop(&self, method: &'static str, name: &str) -> Result<u64, TimingError> {
        let now = self.platform.clock().now();
        self.timing.borrow_mut().stop(method, name, now)
    }

    fn report(&self, error: TimingError) {
        self.platform.logger().error(&error.to_string());
    }

    fn emit(&self, client: &dyn AnalyticsClientPort, name: &str, params: Properties) {
        client.log_event(name, &params);
    }
}

impl Logger for FirebaseAnalyticsLogger {
    fn log(&self, level: LogLevel, message: &str, info: Option<&LogInfo>) {
        let Some(client) = self.client() else {
            return;
        };

        let mapped = mapping::map_log(level, message, info, &self.identity.borrow());
        if let Some((name, params)) = mapped {
            self.emit(client, name, params);
        }
    }

    fn start_track_page(&self, name: Option<&str>) {
        let result = self
            .page_name(name)
            .and_then(|name| self.start("start_track_page", &name));

        if let Err(e) = result {
            self.report(e);
        }
    }

    fn stop_track_page(&self, name: Option<&str>, info: Option<&PageViewTimingInfo>) {
        let (name, duration) = match self
            .page_name(name)
            .and_then(|name| self.stop("stop_track_page", &name).map(|d| (name, d)))
        {
            Ok(stopped) => stopped,
            Err(e) => {
                self.report(e);
                return;
            }
        };

        let Some(client) = self.client() else {
            return;
        };

        let mut params = mapping::map_page_view_props(info, &self.identity.borrow());
        params.insert("page_title".to_string(), Value::from(name));
        params.insert("name".to_string(), Value::from(PAGE_VIEW_EVENT));
        params.insert("value".to_string(), Value::from(duration));

        self.emit(client, TIMING_COMPLETE_EVENT, params);
    }

    fn track_page_view(&self, info: Option<&PageViewInfo>) {
        let Some(client) = self.client() else {
            return;
        };

        let mut params =
            mapping::map_page_view_props(info.map(|info| &info.page), &self.identity.borrow());
        if let Some(name) = info
            .and_then(|info| info.name.as_deref())
            .filter(|name| !name.is_empty())
        {
            params.insert("page_title".to_string(), Value::from(name));
        }

        self.emit(client, PAGE_VIEW_EVENT, params);
    }

    fn start_track_event(&self, name: &str) {
        if let Err(e) = self.start("start_track_event", name) {
            self.report(e);
        }
    }

    fn stop_track_event(&self, name: &str, info: Option<&EventTimingInfo>) {
        let duration = match self.stop("stop_track_event", name) {
            Ok(duration) => duration,
            Err(e) => {
                self.report(e);
                return;
            }
        };

        let Some(client) = self.client() else {
            return;
        };

        let mut params = mapping::map_event_props(
            info.and_then(|info| info.properties.as_ref()),
            info.and_then(|info| info.measurements.as_ref()),
            &self.identity.borrow(),
        );
        params.insert("name".to_string(), Value::from(name));
        params.insert("value".to_string(), Value::from(duration));

        self.emit(client, TIMING_COMPLETE_EVENT, params);
    }

    fn track_event(&self, info: &EventInfo) {
        let Some(client) = self.client() else {
            return;
        };

        // Explicit properties are sent as given.
        let params = match &info.properties {
            Some(properties) => properties.clone(),
            None => mapping::map_event_props(
                None,
                info.measurements.as_ref(),
                &self.identity.borrow(),
            ),
        };

        self.emit(client, &info.name, params);
    }

    fn flush(&self) {}
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use crate::domain::UserIdentity;
    use serde_json::{json, Map};

    #[derive(Default)]
    struct RecordingClient {
        events: RefCell<Vec<(String, Map<String, Value>)>>,
    }

    impl AnalyticsClientPort for RecordingClient {
        fn log_event(&self, name: &str, params: &Map<String, Value>) {
            self.events
                .borrow_mut()
                .push((name.to_string(), params.clone()));
        }

        fn set_analytics_collection_enabled(&self, _enabled: bool) {}
    }

    fn logger_with_client() -> (FirebaseAnalyticsLogger, Rc<RecordingClient>) {
        let client = Rc::new(RecordingClient::default());
        let slot = Rc::new(ClientSlot::new());
        slot.resolve(Some(client.clone()));

        let logger = FirebaseAnalyticsLogger::new(
            "test",
            Platform::new(),
            Rc::new(RefCell::new(UserIdentity::default())),
            slot,
        );
        (logger, client)
    }

    #[test]
    fn test_log_levels() {
        let (logger, client) = logger_with_client();
        let info = LogInfo::default().with_property("key1", "value1");

        logger.log(LogLevel::Debug, "This is a message.", Some(&info));
        logger.log(LogLevel::Critical, "Fatal.", Some(&info));

        let events = client.events.borrow();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].0, "trace");
        assert_eq!(
            Value::Object(events[0].1.clone()),
            json!({ "message": "This is a message.", "level": "debug", "key1": "value1" })
        );
        assert_eq!(events[1].0, "exception");
        assert_eq!(
            Value::Object(events[1].1.clone()),
            json!({ "description": "Fatal.", "fatal": true, "key1": "value1" })
        );
    }

    #[test]
    fn test_log_error_value_is_stringified() {
        let (logger, client) = logger_with_client();
        let err = std::io::Error::new(std::io::ErrorKind::Other, "disk full");

        logger.log_error(LogLevel::Error, &err, None);

        let events = client.events.borrow();
        assert_eq!(events[0].1["description"], "disk full");
        assert_eq!(events[0].1["fatal"], false);
    }

    #[test]
    fn test_log_none_level() {
        let (logger, client) = logger_with_client();
        logger.log(LogLevel::None, "This is a message.", None);
        assert!(client.events.borrow().is_empty());
    }

    #[test]
    fn test_track_page_view() {
        let (logger, client) = logger_with_client();
        let info = PageViewInfo {
            name: Some("home".to_string()),
            page: PageViewTimingInfo {
                uri: Some("https://example.com/home".to_string()),
                ref_uri: Some("https://somewhere.com/".to_string()),
                page_type: Some("formPage".to_string()),
                is_logged_in: Some(false),
                properties: Some(
                    json!({ "key1": "value1" })
                        .as_object()
                        .cloned()
                        .unwrap_or_default(),
                ),
                measurements: None,
            },
        };

        logger.track_page_view(Some(&info));

        let events = client.events.borrow();
        assert_eq!(events[0].0, "page_view");
        assert_eq!(
            Value::Object(events[0].1.clone()),
            json!({
                "page_title": "home",
                "page_location": "https://example.com/home",
                "key1": "value1",
                "ref_uri": "https://somewhere.com/",
                "page_type": "formPage",
                "is_logged_in": false
            })
        );
    }

    #[test]
    fn test_track_event_uses_given_properties() {
        let (logger, client) = logger_with_client();
        logger.track_event(&EventInfo::new("event1").with_property("key1", "value1"));

        let events = client.events.borrow();
        assert_eq!(events[0].0, "event1");
        assert_eq!(Value::Object(events[0].1.clone()), json!({ "key1": "value1" }));
    }

    #[test]
    fn test_page_timing_pair() {
        let (logger, client) = logger_with_client();
        logger.start_track_page(Some("home"));
        logger.stop_track_page(Some("home"), Some(&PageViewTimingInfo::with_uri("/home")));

        assert!(logger.started_at("home").is_none());
        let events = client.events.borrow();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].0, "timing_complete");
        assert_eq!(events[0].1["name"], "page_view");
        assert_eq!(events[0].1["page_title"], "home");
        assert_eq!(events[0].1["page_path"], "/home");
        assert!(events[0].1["value"].as_u64().is_some());
    }

    #[test]
    fn test_page_name_required_without_document() {
        let (logger, client) = logger_with_client();
        logger.start_track_page(None);
        logger.stop_track_page(None, None);
        logger.start_track_page(Some(""));

        assert!(logger.started_at("").is_none());
        assert!(client.events.borrow().is_empty());
    }

    #[test]
    fn test_flush_is_noop() {
        let (logger, client) = logger_with_client();
        logger.flush();
        assert!(client.events.borrow().is_empty());
        assert_eq!(logger.category(), "test");
    }
}
