use super::converters::{js_value_to_message, log_level, optional_info};
use crate::domain::telemetry::{EventInfo, EventTimingInfo, LogInfo, PageViewInfo, PageViewTimingInfo};
use crate::platform::Platform;
use crate::ports::Logger;
use std::rc::Rc;
use wasm_bindgen::prelude::*;

/// JavaScript handle to a logger created by `FirebaseAnalyticsLoggerProvider`.
#[wasm_bindgen(js_name = FirebaseAnalyticsLogger)]
pub struct AnalyticsLogger {
    inner: Rc<dyn Logger>,
    platform: Platform,
}

impl AnalyticsLogger {
    pub(crate) fn new(inner: Rc<dyn Logger>, platform: Platform) -> Self {
        Self { inner, platform }
    }
}

#[wasm_bindgen(js_class = FirebaseAnalyticsLogger)]
impl AnalyticsLogger {
    pub fn log(&self, level: u8, message: JsValue, info: JsValue) {
        let Some(level) = log_level(level, self.platform.logger()) else {
            return;
        };
        let info: Option<LogInfo> = optional_info(info, "log", self.platform.logger());
        self.inner
            .log(level, &js_value_to_message(&message), info.as_ref());
    }

    #[wasm_bindgen(js_name = startTrackPage)]
    pub fn start_track_page(&self, name: Option<String>) {
        self.inner.start_track_page(name.as_deref());
    }

    #[wasm_bindgen(js_name = stopTrackPage)]
    pub fn stop_track_page(&self, name: Option<String>, info: JsValue) {
        let info: Option<PageViewTimingInfo> =
            optional_info(info, "stopTrackPage", self.platform.logger());
        self.inner.stop_track_page(name.as_deref(), info.as_ref());
    }

    #[wasm_bindgen(js_name = trackPageView)]
    pub fn track_page_view(&self, info: JsValue) {
        let info: Option<PageViewInfo> = optional_info(info, "trackPageView", self.platform.logger());
        self.inner.track_page_view(info.as_ref());
    }

    #[wasm_bindgen(js_name = startTrackEvent)]
    pub fn start_track_event(&self, name: &str) {
        self.inner.start_track_event(name);
    }

    #[wasm_bindgen(js_name = stopTrackEvent)]
    pub fn stop_track_event(&self, name: &str, info: JsValue) {
        let info: Option<EventTimingInfo> =
            optional_info(info, "stopTrackEvent", self.platform.logger());
        self.inner.stop_track_event(name, info.as_ref());
    }

    #[wasm_bindgen(js_name = trackEvent)]
    pub fn track_event(&self, info: JsValue) {
        let info: Option<EventInfo> = optional_info(info, "trackEvent", self.platform.logger());
        match info {
            Some(info) => self.inner.track_event(&info),
            None => self
                .platform
                .logger()
                .error("'trackEvent' requires an event info with a name"),
        }
    }

    pub fn flush(&self) {
        self.inner.flush();
    }
}
