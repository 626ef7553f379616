use env_logger::Env;
use firebase_analytics_logger::adapters::LogBackend;
use firebase_analytics_logger::{
    EventInfo, EventTimingInfo, FirebaseAnalyticsLoggerProvider, LogInfo, LogLevel, Logger,
    PageViewInfo, PageViewTimingInfo,
};
use log::{info, warn};
use std::rc::Rc;
use std::time::Duration;

mod config;
mod hub;

use config::CONFIG;
use hub::LogHub;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    dotenv::dotenv().ok();
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let options = CONFIG.logger_options();
    if options.identity_key().is_none() {
        warn!("FIREBASE_MEASUREMENT_ID is not set, analytics calls will be dropped");
    }

    let provider = Rc::new(FirebaseAnalyticsLoggerProvider::new(
        options,
        Rc::new(LogBackend::new()),
    ));

    let mut hub = LogHub::new();
    hub.register(provider.clone());

    // Created before the client exists; picks it up once initialized.
    let logger = hub.create_logger("demo");

    let ready = provider.initialize().await;
    info!("Analytics client bound: {}", ready);

    hub.set_user_properties("demo-user", Some("demo-account"));

    logger.log(
        LogLevel::Info,
        "Demo started",
        Some(&LogInfo::default().with_property("source", "demo_app")),
    );

    logger.start_track_page(Some("home"));
    logger.start_track_event("load_dashboard");
    tokio::time::sleep(Duration::from_millis(120)).await;
    logger.stop_track_event(
        "load_dashboard",
        Some(&EventTimingInfo {
            properties: serde_json::json!({ "widgets": 4 }).as_object().cloned(),
            measurements: None,
        }),
    );
    logger.stop_track_page(Some("home"), Some(&PageViewTimingInfo::with_uri("/home")));

    logger.track_page_view(Some(&PageViewInfo {
        name: Some("settings".to_string()),
        page: PageViewTimingInfo::with_uri("https://example.com/settings"),
    }));
    logger.track_event(&EventInfo::new("export_clicked").with_measurement("rows", 250.0));

    // Misuse is reported, not raised.
    logger.stop_track_event("never_started", None);

    let err = std::io::Error::new(std::io::ErrorKind::Other, "demo failure");
    logger.log(LogLevel::Error, &err.to_string(), None);
    provider.log_error(LogLevel::Critical, &err, None);

    hub.clear_user_properties();
    logger.log(LogLevel::Debug, "Identity cleared", None);
    logger.flush();
}
