use crate::ports::StorageProbePort;
use async_trait::async_trait;

/// Native storage probe.
///
/// In native environments, storage is always persistent by default.
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
        true
    }
}
