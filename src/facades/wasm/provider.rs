use super::converters;
use super::logger::AnalyticsLogger;
use crate::adapters::FirebaseBackend;
use crate::domain::AnalyticsLoggerOptions;
use crate::platform::Platform;
use crate::ports::{Logger, LoggerProvider};
use crate::provider::FirebaseAnalyticsLoggerProvider;
use js_sys::Promise;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::future_to_promise;

/// JavaScript entry point: a logger provider backed by the Firebase JS SDK.
///
/// Hosts call `initialize()` during startup and may create loggers before it
/// resolves; those loggers start emitting once the client is ready.
#[wasm_bindgen(js_name = FirebaseAnalyticsLoggerProvider)]
pub struct AnalyticsLoggerProvider {
    inner: Rc<FirebaseAnalyticsLoggerProvider>,
    platform: Platform,
}

#[wasm_bindgen(js_class = FirebaseAnalyticsLoggerProvider)]
impl AnalyticsLoggerProvider {
    #[wasm_bindgen(constructor)]
    pub fn new(options: JsValue) -> Result<AnalyticsLoggerProvider, JsValue> {
        let options: AnalyticsLoggerOptions = if options.is_undefined() || options.is_null() {
            AnalyticsLoggerOptions::default()
        } else {
            serde_wasm_bindgen::from_value(options).map_err(converters::to_js_error)?
        };

        let platform = Platform::new();
        let provider = FirebaseAnalyticsLoggerProvider::with_platform(
            options,
            Rc::new(FirebaseBackend::new()),
            platform,
        );

        Ok(Self {
            inner: Rc::new(provider),
            platform,
        })
    }

    #[wasm_bindgen(getter)]
    pub fn name(&self) -> String {
        self.inner.name().to_string()
    }

    /// Resolves to `true` once a client is bound, `false` when analytics is
    /// unavailable. Never rejects.
    pub fn initialize(&self) -> Promise {
        let initialized = self.inner.initialize();
        future_to_promise(async move { Ok(JsValue::from_bool(initialized.await)) })
    }

    #[wasm_bindgen(getter, js_name = isInitialized)]
    pub fn is_initialized(&self) -> bool {
        self.inner.is_initialized()
    }

    #[wasm_bindgen(getter, js_name = currentLogger)]
    pub fn current_logger(&self) -> AnalyticsLogger {
        let logger: Rc<dyn Logger> = self.inner.current_logger().clone();
        AnalyticsLogger::new(logger, self.platform)
    }

    #[wasm_bindgen(js_name = createLogger)]
    pub fn create_logger(&self, category: &str) -> AnalyticsLogger {
        AnalyticsLogger::new(self.inner.create_logger(category), self.platform)
    }

    #[wasm_bindgen(js_name = setUserProperties)]
    pub fn set_user_properties(&self, user_id: &str, account_id: Option<String>) {
        self.inner.set_user_properties(user_id, account_id.as_deref());
    }

    #[wasm_bindgen(js_name = clearUserProperties)]
    pub fn clear_user_properties(&self) {
        self.inner.clear_user_properties();
    }

    pub fn log(&self, level: u8, message: JsValue, info: JsValue) {
        self.current_logger().log(level, message, info);
    }

    #[wasm_bindgen(js_name = startTrackPage)]
    pub fn start_track_page(&self, name: Option<String>) {
        self.current_logger().start_track_page(name);
    }

    #[wasm_bindgen(js_name = stopTrackPage)]
    pub fn stop_track_page(&self, name: Option<String>, info: JsValue) {
        self.current_logger().stop_track_page(name, info);
    }

    #[wasm_bindgen(js_name = trackPageView)]
    pub fn track_page_view(&self, info: JsValue) {
        self.current_logger().track_page_view(info);
    }

    #[wasm_bindgen(js_name = startTrackEvent)]
    pub fn start_track_event(&self, name: &str) {
        self.current_logger().start_track_event(name);
    }

    #[wasm_bindgen(js_name = stopTrackEvent)]
    pub fn stop_track_event(&self, name: &str, info: JsValue) {
        self.current_logger().stop_track_event(name, info);
    }

    #[wasm_bindgen(js_name = trackEvent)]
    pub fn track_event(&self, info: JsValue) {
        self.current_logger().track_event(info);
    }

    pub fn flush(&self) {
        self.current_logger().flush();
    }
}
