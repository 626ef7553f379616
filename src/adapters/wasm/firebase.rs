use crate::domain::FirebaseConfig;
use crate::errors::AnalyticsError;
use crate::global::firebase_namespace;
use crate::ports::{AnalyticsClientPort, BackendAppPort, BackendPort};
use async_trait::async_trait;
use js_sys::{Array, Function, Promise, Reflect};
use serde::Serialize;
use serde_json::{Map, Value};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

#[wasm_bindgen]
extern "C" {
    pub type FirebaseApp;

    #[wasm_bindgen(method, getter)]
    fn name(this: &FirebaseApp) -> String;

    #[wasm_bindgen(method, catch, js_name = analytics)]
    fn analytics_service(this: &FirebaseApp) -> Result<FirebaseAnalytics, JsValue>;

    pub type FirebaseAnalytics;

    #[wasm_bindgen(method, js_name = logEvent)]
    fn log_event(this: &FirebaseAnalytics, name: &str, params: &JsValue);

    #[wasm_bindgen(method, js_name = setAnalyticsCollectionEnabled)]
    fn set_analytics_collection_enabled(this: &FirebaseAnalytics, enabled: bool);

    #[wasm_bindgen(catch, js_namespace = firebase, js_name = initializeApp)]
    fn initialize_app(options: &JsValue, name: &str) -> Result<FirebaseApp, JsValue>;
}

fn to_js<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, AnalyticsError> {
    value
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(|e| AnalyticsError::serialization_error(e.to_string()))
}

fn js_message(err: &JsValue) -> String {
    err.as_string()
        .or_else(|| {
            err.dyn_ref::<js_sys::Error>()
                .map(|e| String::from(e.message()))
        })
        .unwrap_or_else(|| "Unknown JS error".to_string())
}

/// Backend bound to the Firebase JS namespace SDK (`firebase/app` +
/// `firebase/analytics` script bundles).
#[derive(Debug, Clone, Copy, Default)]
pub struct FirebaseBackend;

impl FirebaseBackend {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait(?Send)]
impl BackendPort for FirebaseBackend {
    async fn load(&self) -> Result<(), AnalyticsError> {
        let firebase = firebase_namespace()?;

        let analytics = Reflect::get(&firebase, &JsValue::from_str("analytics"))?;
        if !analytics.is_function() {
            return Err(AnalyticsError::backend_unavailable(
                "firebase.analytics is not loaded",
            ));
        }

        let is_supported = Reflect::get(&analytics, &JsValue::from_str("isSupported"))?;
        if let Some(is_supported) = is_supported.dyn_ref::<Function>() {
            let promise: Promise = is_supported.call0(&analytics)?.dyn_into()?;
            let supported = JsFuture::from(promise).await?;
            if !supported.as_bool().unwrap_or(false) {
                return Err(AnalyticsError::analytics_unavailable(
                    "firebase.analytics.isSupported() returned false",
                ));
            }
        }

        Ok(())
    }

    fn existing_app(&self, name: &str) -> Option<Rc<dyn BackendAppPort>> {
        let firebase = firebase_namespace().ok()?;
        let apps: Array = Reflect::get(&firebase, &JsValue::from_str("apps"))
            .ok()?
            .dyn_into()
            .ok()?;

        apps.iter()
            .map(|app| app.unchecked_into::<FirebaseApp>())
            .find(|app| app.name() == name)
            .map(|app| Rc::new(FirebaseAppHandle { app }) as Rc<dyn BackendAppPort>)
    }

    fn initialize_app(
        &self,
        config: &FirebaseConfig,
        name: &str,
    ) -> Result<Rc<dyn BackendAppPort>, AnalyticsError> {
        let options = to_js(config)?;
        let app = initialize_app(&options, name)
            .map_err(|e| AnalyticsError::app_initialization(js_message(&e)))?;

        Ok(Rc::new(FirebaseAppHandle { app }))
    }
}

pub struct FirebaseAppHandle {
    app: FirebaseApp,
}

impl BackendAppPort for FirebaseAppHandle {
    fn name(&self) -> String {
        self.app.name()
    }

    fn analytics(&self) -> Result<Rc<dyn AnalyticsClientPort>, AnalyticsError> {
        let analytics = self
            .app
            .analytics_service()
            .map_err(|e| AnalyticsError::analytics_unavailable(js_message(&e)))?;

        Ok(Rc::new(FirebaseAnalyticsClient { analytics }))
    }
}

pub struct FirebaseAnalyticsClient {
    analytics: FirebaseAnalytics,
}

impl AnalyticsClientPort for FirebaseAnalyticsClient {
    fn log_event(&self, name: &str, params: &Map<String, Value>) {
        match to_js(params) {
            Ok(params) => self.analytics.log_event(name, &params),
            Err(e) => crate::adapters::logger().error(&format!(
                "Failed to convert parameters of event '{name}': {e}"
            )),
        }
    }

    fn set_analytics_collection_enabled(&self, enabled: bool) {
        self.analytics.set_analytics_collection_enabled(enabled);
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    async fn test_load_without_sdk_fails() {
        if firebase_namespace().is_ok() {
            return;
        }

        let result = FirebaseBackend::new().load().await;
        assert!(matches!(result, Err(AnalyticsError::BackendUnavailable(_))));
    }

    #[wasm_bindgen_test]
    fn test_no_existing_app_without_sdk() {
        if firebase_namespace().is_ok() {
            return;
        }

        assert!(FirebaseBackend::new().existing_app("[DEFAULT]").is_none());
    }

    #[wasm_bindgen_test]
    fn test_params_are_plain_objects() {
        let mut params = Map::new();
        params.insert("key1".to_string(), Value::from("value1"));

        let js = to_js(&params).unwrap();
        let value = Reflect::get(&js, &JsValue::from_str("key1")).unwrap();
        assert_eq!(value.as_string().as_deref(), Some("value1"));
    }
}
