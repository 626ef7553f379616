use crate::domain::telemetry::LogLevel;
use crate::ports::LoggerPort;
use serde::de::DeserializeOwned;
use serde_wasm_bindgen::from_value;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

pub fn to_js_error<E: std::fmt::Display>(error: E) -> JsValue {
    JsValue::from_str(&error.to_string())
}

/// Stringifies a log message the way a JavaScript template literal would:
/// strings as-is, `Error` objects as `"Error: message"`.
pub fn js_value_to_message(value: &JsValue) -> String {
    if let Some(message) = value.as_string() {
        return message;
    }
    if let Some(object) = value.dyn_ref::<js_sys::Object>() {
        return String::from(object.to_string());
    }
    if let Some(number) = value.as_f64() {
        return number.to_string();
    }
    if let Some(flag) = value.as_bool() {
        return flag.to_string();
    }
    if value.is_null() {
        "null".to_string()
    } else {
        "undefined".to_string()
    }
}

/// Deserializes an optional info object. Malformed input is reported and
/// treated as absent so that logging never throws.
pub fn optional_info<T: DeserializeOwned>(
    value: JsValue,
    method: &str,
    logger: &dyn LoggerPort,
) -> Option<T> {
    if value.is_undefined() || value.is_null() {
        return None;
    }

    match from_value(value) {
        Ok(info) => Some(info),
        Err(e) => {
            logger.error(&format!("Ignoring invalid info passed to '{method}': {e}"));
            None
        }
    }
}

pub fn log_level(level: u8, logger: &dyn LoggerPort) -> Option<LogLevel> {
    match LogLevel::try_from(level) {
        Ok(level) => Some(level),
        Err(value) => {
            logger.error(&format!("Ignoring log call with unknown level {value}"));
            None
        }
    }
}
