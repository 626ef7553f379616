use crate::errors::AnalyticsError;
use wasm_bindgen::prelude::*;
use web_sys::DedicatedWorkerGlobalScope;

pub fn get_global_scope() -> Result<JsValue, AnalyticsError> {
    // Try worker scope first
    if let Ok(scope) = js_sys::global().dyn_into::<DedicatedWorkerGlobalScope>() {
        return Ok(JsValue::from(scope));
    }

    // Fallback to window
    let window = web_sys::window().ok_or(AnalyticsError::PlatformUnavailable)?;
    Ok(JsValue::from(window))
}

/// The `firebase` namespace installed by the Firebase JS SDK script tags.
pub fn firebase_namespace() -> Result<JsValue, AnalyticsError> {
    let namespace = js_sys::Reflect::get(&js_sys::global(), &JsValue::from_str("firebase"))?;
    if namespace.is_undefined() || namespace.is_null() {
        return Err(AnalyticsError::backend_unavailable(
            "the firebase namespace is not loaded",
        ));
    }

    Ok(namespace)
}
