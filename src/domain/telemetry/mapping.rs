//! Mapping of host telemetry onto the analytics event schema.

use super::types::{LogInfo, LogLevel, Measurements, PageViewTimingInfo, Properties};
use crate::domain::UserIdentity;
use serde_json::Value;

pub const EXCEPTION_EVENT: &str = "exception";
pub const TRACE_EVENT: &str = "trace";
pub const PAGE_VIEW_EVENT: &str = "page_view";
pub const TIMING_COMPLETE_EVENT: &str = "timing_complete";

/// Maps a log call to an event name and its parameters.
/// Returns `None` for `LogLevel::None`, which is never emitted.
pub fn map_log(
    level: LogLevel,
    message: &str,
    info: Option<&LogInfo>,
    identity: &UserIdentity,
) -> Option<(&'static str, Properties)> {
    if level == LogLevel::None {
        return None;
    }

    let mut props = info
        .and_then(|info| info.properties.clone())
        .unwrap_or_default();
    append_identity(&mut props, identity);

    if level.is_exception() {
        props.insert("description".to_string(), Value::from(message));
        props.insert("fatal".to_string(), Value::from(level == LogLevel::Critical));
        Some((EXCEPTION_EVENT, props))
    } else {
        props.insert("message".to_string(), Value::from(message));
        props.insert("level".to_string(), Value::from(level.trace_label()));
        Some((TRACE_EVENT, props))
    }
}

/// Properties then measurements, then the identity fields.
pub fn map_event_props(
    properties: Option<&Properties>,
    measurements: Option<&Measurements>,
    identity: &UserIdentity,
) -> Properties {
    let mut props = merge(properties, measurements);
    append_identity(&mut props, identity);
    props
}

/// Like [`map_event_props`], plus the page fields. `page_path` and
/// `page_location` are exclusive.
pub fn map_page_view_props(info: Option<&PageViewTimingInfo>, identity: &UserIdentity) -> Properties {
    let mut props = match info {
        Some(info) => page_fields(info),
        None => Properties::new(),
    };
    append_identity(&mut props, identity);
    props
}

fn page_fields(info: &PageViewTimingInfo) -> Properties {
    let mut props = merge(info.properties.as_ref(), info.measurements.as_ref());

    if let Some(uri) = info.uri.as_deref().filter(|uri| !uri.is_empty()) {
        let key = if uri.starts_with('/') {
            "page_path"
        } else {
            "page_location"
        };
        props.insert(key.to_string(), Value::from(uri));
    }

    if let Some(ref_uri) = info.ref_uri.as_deref().filter(|uri| !uri.is_empty()) {
        props.insert("ref_uri".to_string(), Value::from(ref_uri));
    }

    if let Some(page_type) = info.page_type.as_deref().filter(|ty| !ty.is_empty()) {
        props.insert("page_type".to_string(), Value::from(page_type));
    }

    if let Some(is_logged_in) = info.is_logged_in {
        props.insert("is_logged_in".to_string(), Value::from(is_logged_in));
    }

    props
}

fn merge(properties: Option<&Properties>, measurements: Option<&Measurements>) -> Properties {
    let mut props = properties.cloned().unwrap_or_default();
    if let Some(measurements) = measurements {
        for (key, value) in measurements {
            props.insert(key.clone(), Value::from(*value));
        }
    }
    props
}

fn append_identity(props: &mut Properties, identity: &UserIdentity) {
    if let Some(user_id) = identity.user_id() {
        props.insert("user_id".to_string(), Value::from(user_id));
    }

    if let Some(account_id) = identity.account_id() {
        props.insert("account_id".to_string(), Value::from(account_id));
    }
}
