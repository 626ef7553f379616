use crate::domain::client::{self, ClientHandle, ClientSlot};
use crate::domain::telemetry::{
    EventInfo, EventTimingInfo, LogInfo, LogLevel, PageViewInfo, PageViewTimingInfo,
};
use crate::domain::{AnalyticsLoggerOptions, SharedIdentity, UserIdentity};
use crate::logger::FirebaseAnalyticsLogger;
use crate::platform::Platform;
use crate::ports::{BackendPort, Logger, LoggerProvider};
use futures::future::{self, LocalBoxFuture};
use futures::FutureExt;
use once_cell::unsync::OnceCell;
use std::cell::RefCell;
use std::rc::Rc;

pub const PROVIDER_NAME: &str = "firebaseAnalytics";

/// Logger provider for Firebase Analytics.
///
/// Owns the user identity shared by its loggers and the slot their client is
/// read from. The client itself is acquired by [`initialize`](Self::initialize)
/// and cached per measurement id, so providers configured for the same
/// property share one backend client.
pub struct FirebaseAnalyticsLoggerProvider {
    platform: Platform,
    options: AnalyticsLoggerOptions,
    backend: Rc<dyn BackendPort>,
    identity: SharedIdentity,
    client: Rc<ClientSlot>,
    current: OnceCell<Rc<FirebaseAnalyticsLogger>>,
}

impl FirebaseAnalyticsLoggerProvider {
    pub fn new(options: AnalyticsLoggerOptions, backend: Rc<dyn BackendPort>) -> Self {
        Self::with_platform(options, backend, Platform::new())
    }

    pub fn with_platform(
        options: AnalyticsLoggerOptions,
        backend: Rc<dyn BackendPort>,
        platform: Platform,
    ) -> Self {
        Self {
            platform,
            options,
            backend,
            identity: Rc::new(RefCell::new(UserIdentity::default())),
            client: Rc::new(ClientSlot::new()),
            current: OnceCell::new(),
        }
    }

    pub fn options(&self) -> &AnalyticsLoggerOptions {
        &self.options
    }

    /// Acquires the analytics client, once per measurement id and thread.
    ///
    /// Resolves to whether a client is bound. Calling it again, or on another
    /// provider with the same measurement id, joins the same acquisition. The
    /// cache lookup happens before this returns, not on first poll.
    pub fn initialize(&self) -> LocalBoxFuture<'static, bool> {
        if self.client.is_resolved() {
            return future::ready(self.client.get().is_some()).boxed_local();
        }

        let Some(key) = self.options.identity_key() else {
            self.client.resolve(None);
            return future::ready(false).boxed_local();
        };

        if self.options.debug_logging() {
            let state = if client::cache::is_cached(key) {
                "joining"
            } else {
                "starting"
            };
            self.platform.logger().debug(&format!(
                "Firebase Analytics: {state} client acquisition for measurement id {key}"
            ));
        }

        let options = self.options.clone();
        let backend = self.backend.clone();
        let platform = self.platform;
        let acquisition = client::shared_client(key, move || {
            client::acquire(options, backend, platform).boxed_local()
        });

        let slot = self.client.clone();
        async move {
            let client = acquisition.await;
            slot.resolve(client);
            slot.get().is_some()
        }
        .boxed_local()
    }

    /// Whether [`initialize`](Self::initialize) has finished, with or without a client.
    pub fn is_initialized(&self) -> bool {
        self.client.is_resolved()
    }

    pub fn client(&self) -> Option<ClientHandle> {
        self.client.handle()
    }

    pub fn user_identity(&self) -> UserIdentity {
        self.identity.borrow().clone()
    }

    /// Default-category logger the provider's own logging methods delegate to.
    pub fn current_logger(&self) -> &Rc<FirebaseAnalyticsLogger> {
        self.current
            .get_or_init(|| Rc::new(self.new_logger("")))
    }

    fn new_logger(&self, category: &str) -> FirebaseAnalyticsLogger {
        FirebaseAnalyticsLogger::new(
            category,
            self.platform,
            self.identity.clone(),
            self.client.clone(),
        )
    }
}

impl LoggerProvider for FirebaseAnalyticsLoggerProvider {
    fn name(&self) -> &str {
        PROVIDER_NAME
    }

    fn create_logger(&self, category: &str) -> Rc<dyn Logger> {
        Rc::new(self.new_logger(category))
    }

    fn set_user_properties(&self, user_id: &str, account_id: Option<&str>) {
        self.identity.borrow_mut().set(user_id, account_id);
    }

    fn clear_user_properties(&self) {
        self.identity.borrow_mut().clear();
    }
}

impl Logger for FirebaseAnalyticsLoggerProvider {
    fn log(&self, level: LogLevel, message: &str, info: Option<&LogInfo>) {
        self.current_logger().log(level, message, info);
    }

    fn start_track_page(&self, name: Option<&str>) {
        self.current_logger().start_track_page(name);
    }

    fn stop_track_page(&self, name: Option<&str>, info: Option<&PageViewTimingInfo>) {
        self.current_logger().stop_track_page(name, info);
    }

    fn track_page_view(&self, info: Option<&PageViewInfo>) {
        self.current_logger().track_page_view(info);
    }

    fn start_track_event(&self, name: &str) {
        self.current_logger().start_track_event(name);
    }

    fn stop_track_event(&self, name: &str, info: Option<&EventTimingInfo>) {
        self.current_logger().stop_track_event(name, info);
    }

    fn track_event(&self, info: &EventInfo) {
        self.current_logger().track_event(info);
    }

    fn flush(&self) {
        self.current_logger().flush();
    }
}
