use crate::global::get_global_scope;
use crate::ports::StorageProbePort;
use async_trait::async_trait;
use wasm_bindgen::JsCast;
use web_sys::Window;

const PROBE_KEY: &str = "__firebase_analytics_logger_probe__";

/// Checks that `localStorage` exists and accepts writes.
///
/// Workers and private browsing modes that reject writes count as unavailable.
#[derive(Debug, Clone, Copy, Default)]
pub struct StorageProbe;

impl StorageProbe {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait(?Send)]
impl StorageProbePort for StorageProbe {
    async fn is_available(&self) -> bool {
        let window = match get_global_scope().map(|scope| scope.dyn_into::<Window>()) {
            Ok(Ok(window)) => window,
            _ => return false,
        };

        match window.local_storage() {
            Ok(Some(storage)) => storage
                .set_item(PROBE_KEY, PROBE_KEY)
                .and_then(|_| storage.remove_item(PROBE_KEY))
                .is_ok(),
            _ => false,
        }
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    async fn test_storage_available_in_browser() {
        assert!(StorageProbe::new().is_available().await);
    }
}
