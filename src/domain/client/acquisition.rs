use super::ClientHandle;
use crate::domain::{AnalyticsLoggerOptions, FirebaseConfig};
use crate::errors::AnalyticsError;
use crate::platform::Platform;
use crate::ports::{BackendAppPort, BackendPort};
use std::rc::Rc;

/// Runs the acquisition sequence once. Every failure degrades to `None`:
/// callers treat that as a permanently disabled client, there is no retry.
pub async fn acquire(
    options: AnalyticsLoggerOptions,
    backend: Rc<dyn BackendPort>,
    platform: Platform,
) -> Option<ClientHandle> {
    match try_acquire(&options, backend.as_ref(), &platform).await {
        Ok(client) => {
            if options.debug_logging() {
                platform.logger().debug(&format!(
                    "Firebase Analytics ready for app '{}'",
                    options.app_name()
                ));
            }
            Some(client)
        }
        Err(AnalyticsError::PlatformUnavailable) => {
            if options.debug_logging() {
                platform.logger().debug(&format!(
                    "Firebase Analytics disabled: {}",
                    AnalyticsError::PlatformUnavailable
                ));
            }
            None
        }
        Err(e) => {
            platform
                .logger()
                .warn(&format!("Firebase Analytics disabled: {e}"));
            None
        }
    }
}

async fn try_acquire(
    options: &AnalyticsLoggerOptions,
    backend: &dyn BackendPort,
    platform: &Platform,
) -> Result<ClientHandle, AnalyticsError> {
    if !platform.storage_probe().is_available().await {
        return Err(AnalyticsError::PlatformUnavailable);
    }

    backend.load().await?;

    let app = app_for(backend, &options.firebase, options.app_name())?;
    let analytics = app.analytics()?;

    if let Some(enabled) = options.collection_enabled {
        analytics.set_analytics_collection_enabled(enabled);
    }

    Ok(analytics)
}

/// Returns the backend app registered under `name`, initializing it on first use.
pub fn app_for(
    backend: &dyn BackendPort,
    config: &FirebaseConfig,
    name: &str,
) -> Result<Rc<dyn BackendAppPort>, AnalyticsError> {
    match backend.existing_app(name) {
        Some(app) => Ok(app),
        None => backend.initialize_app(config, name),
    }
}
