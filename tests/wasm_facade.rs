#![cfg(target_arch = "wasm32")]

extern crate wasm_bindgen_test;
use firebase_analytics_logger::facades::wasm::AnalyticsLoggerProvider;
use js_sys::{Object, Reflect};
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn options(measurement_id: &str) -> JsValue {
    let firebase = Object::new();
    Reflect::set(&firebase, &"measurementId".into(), &measurement_id.into()).unwrap();
    let options = Object::new();
    Reflect::set(&options, &"firebase".into(), &firebase).unwrap();
    options.into()
}

#[wasm_bindgen_test]
fn test_provider_name() {
    let provider = AnalyticsLoggerProvider::new(JsValue::UNDEFINED).expect("default options");
    assert_eq!(provider.name(), "firebaseAnalytics");
    assert!(!provider.is_initialized());
}

#[wasm_bindgen_test]
fn test_invalid_options_rejected() {
    let result = AnalyticsLoggerProvider::new(JsValue::from_f64(42.0));
    assert!(result.is_err());
}

#[wasm_bindgen_test]
async fn test_initialize_without_sdk_resolves_false() {
    let provider = AnalyticsLoggerProvider::new(options("G-WASM-NO-SDK")).expect("options");
    let logger = provider.create_logger("wasm");

    let bound = JsFuture::from(provider.initialize())
        .await
        .expect("initialize never rejects");

    if bound.as_bool() == Some(false) {
        assert!(provider.is_initialized());
        // Every call is a no-op without a client.
        logger.log(2, JsValue::from_str("dropped"), JsValue::UNDEFINED);
        logger.start_track_event("e");
        logger.stop_track_event("e", JsValue::UNDEFINED);
        logger.flush();
    }
}

#[wasm_bindgen_test]
fn test_logging_before_initialize_is_safe() {
    let provider = AnalyticsLoggerProvider::new(options("G-WASM-EARLY")).expect("options");
    provider.set_user_properties("u1", Some("a1".to_string()));
    provider.log(4, JsValue::from_str("early"), JsValue::UNDEFINED);
    provider.track_page_view(JsValue::UNDEFINED);
    provider.clear_user_properties();
    assert!(!provider.is_initialized());
}
