use async_trait::async_trait;

/// Capability probe gating client acquisition: analytics only starts when
/// persistent local storage is usable.
#[async_trait(?Send)]
pub trait StorageProbePort: Send + Sync {
    async fn is_available(&self) -> bool;
}
