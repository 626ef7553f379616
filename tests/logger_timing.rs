#![cfg(not(target_arch = "wasm32"))]

use firebase_analytics_logger::{
    AnalyticsLoggerOptions, EventInfo, EventTimingInfo, FirebaseAnalyticsLoggerProvider, Logger,
    LoggerProvider, PageViewInfo, PageViewTimingInfo,
};
use futures::executor::block_on;
use serde_json::json;
use std::rc::Rc;

use test_utils::{test_platform, FixedTitle, RecordingBackend};

static TITLE: FixedTitle = FixedTitle("Dashboard");

fn ready_provider(
    measurement_id: &str,
) -> (
    FirebaseAnalyticsLoggerProvider,
    Rc<RecordingBackend>,
    &'static test_utils::RecordingLogger,
    &'static test_utils::ManualClock,
) {
    let backend = RecordingBackend::new();
    let (platform, logger, clock) = test_platform();
    let provider = FirebaseAnalyticsLoggerProvider::with_platform(
        AnalyticsLoggerOptions::new(measurement_id),
        backend.clone(),
        platform,
    );
    assert!(block_on(provider.initialize()));
    (provider, backend, logger, clock)
}

#[test]
fn test_event_timing_reports_elapsed_milliseconds() {
    let (provider, backend, diagnostics, clock) = ready_provider("G-TIMING-EVENT");
    let logger = provider.create_logger("timing");

    logger.start_track_event("checkout");
    clock.advance(250);
    logger.stop_track_event(
        "checkout",
        Some(&EventTimingInfo {
            properties: Some(json!({ "step": "payment" }).as_object().cloned().unwrap()),
            measurements: None,
        }),
    );

    let (name, params) = backend.analytics.last().expect("timing event");
    assert_eq!(name, "timing_complete");
    assert_eq!(
        serde_json::Value::Object(params),
        json!({ "step": "payment", "name": "checkout", "value": 250 })
    );
    assert!(diagnostics.errors().is_empty());
}

#[test]
fn test_double_start_keeps_first_timestamp() {
    let (provider, backend, diagnostics, clock) = ready_provider("G-TIMING-DOUBLE");
    let logger = provider.create_logger("timing");

    logger.start_track_event("e");
    clock.advance(100);
    logger.start_track_event("e");
    clock.advance(50);
    logger.stop_track_event("e", None);

    assert_eq!(
        diagnostics.errors(),
        vec!["The 'start_track_event' was called more than once for this event without calling stop, name: e."]
    );
    let (_, params) = backend.analytics.last().expect("timing event");
    assert_eq!(params["value"], 150);
}

#[test]
fn test_stop_without_start_emits_nothing() {
    let (provider, backend, diagnostics, _) = ready_provider("G-TIMING-MISSING");
    let logger = provider.create_logger("timing");

    logger.stop_track_event("never-started", None);
    logger.stop_track_page(Some("never-started"), None);

    assert_eq!(backend.analytics.len(), 0);
    assert_eq!(
        diagnostics.errors(),
        vec![
            "The 'stop_track_event' was called without a corresponding start, name: never-started.",
            "The 'stop_track_page' was called without a corresponding start, name: never-started.",
        ]
    );
}

#[test]
fn test_pair_can_restart_after_stop() {
    let (provider, backend, diagnostics, _) = ready_provider("G-TIMING-RESTART");
    let logger = provider.create_logger("timing");

    for _ in 0..2 {
        logger.start_track_event("loop");
        logger.stop_track_event("loop", None);
    }

    assert_eq!(backend.analytics.len(), 2);
    assert!(diagnostics.errors().is_empty());
}

#[test]
fn test_page_timing_uses_document_title() {
    let backend = RecordingBackend::new();
    let (platform, diagnostics, clock) = test_platform();
    let provider = FirebaseAnalyticsLoggerProvider::with_platform(
        AnalyticsLoggerOptions::new("G-TIMING-TITLE"),
        backend.clone(),
        platform.with_document(&TITLE),
    );
    assert!(block_on(provider.initialize()));
    let logger = provider.create_logger("pages");

    logger.start_track_page(None);
    clock.advance(40);
    logger.stop_track_page(None, Some(&PageViewTimingInfo::with_uri("https://example.com/dash")));

    let (name, params) = backend.analytics.last().expect("page timing event");
    assert_eq!(name, "timing_complete");
    assert_eq!(params["name"], "page_view");
    assert_eq!(params["page_title"], "Dashboard");
    assert_eq!(params["page_location"], "https://example.com/dash");
    assert!(params.get("page_path").is_none());
    assert_eq!(params["value"], 40);
    assert!(diagnostics.errors().is_empty());
}

#[test]
fn test_page_view_uri_kinds() {
    let (provider, backend, _, _) = ready_provider("G-TIMING-URI");
    let logger = provider.create_logger("pages");

    logger.track_page_view(Some(&PageViewInfo::with_uri("/settings")));
    logger.track_page_view(Some(&PageViewInfo::with_uri("https://example.com/settings")));

    let events = backend.analytics.events.borrow();
    assert_eq!(events[0].1["page_path"], "/settings");
    assert!(events[0].1.get("page_location").is_none());
    assert_eq!(events[1].1["page_location"], "https://example.com/settings");
    assert!(events[1].1.get("page_path").is_none());
}

#[test]
fn test_timing_is_tracked_without_client() {
    let backend = RecordingBackend::new();
    let (platform, diagnostics, _) = test_platform();
    let provider = FirebaseAnalyticsLoggerProvider::with_platform(
        AnalyticsLoggerOptions::default(),
        backend.clone(),
        platform,
    );
    assert!(!block_on(provider.initialize()));
    let logger = provider.create_logger("disabled");

    logger.start_track_event("e");
    logger.start_track_event("e");
    logger.stop_track_event("e", None);
    logger.track_event(&EventInfo::new("ignored"));

    assert_eq!(backend.analytics.len(), 0);
    assert_eq!(diagnostics.errors().len(), 1);
}

#[test]
fn test_loggers_keep_separate_timings() {
    let (provider, backend, diagnostics, _) = ready_provider("G-TIMING-SEPARATE");
    let first = provider.create_logger("first");
    let second = provider.create_logger("second");

    first.start_track_event("shared-name");
    second.start_track_event("shared-name");
    second.stop_track_event("shared-name", None);
    first.stop_track_event("shared-name", None);

    assert_eq!(backend.analytics.len(), 2);
    assert!(diagnostics.errors().is_empty());
}
