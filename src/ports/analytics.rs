use serde_json::{Map, Value};

/// The opaque analytics client. Delivery, batching and retries belong to the
/// backend; this crate only hands it events.
pub trait AnalyticsClientPort {
    fn log_event(&self, name: &str, params: &Map<String, Value>);

    fn set_analytics_collection_enabled(&self, enabled: bool);
}
