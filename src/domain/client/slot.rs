use crate::ports::AnalyticsClientPort;
use once_cell::unsync::OnceCell;
use std::rc::Rc;

pub type ClientHandle = Rc<dyn AnalyticsClientPort>;

/// Set-once cell holding the outcome of client acquisition.
///
/// Loggers keep the slot, not the client, so a logger created before
/// acquisition finishes still sees the client afterwards. A resolved `None`
/// is permanent.
#[derive(Default)]
pub struct ClientSlot {
    cell: OnceCell<Option<ClientHandle>>,
}

impl ClientSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores the outcome. Returns `false` if the slot was already resolved.
    pub fn resolve(&self, client: Option<ClientHandle>) -> bool {
        self.cell.set(client).is_ok()
    }

    pub fn is_resolved(&self) -> bool {
        self.cell.get().is_some()
    }

    pub fn get(&self) -> Option<&dyn AnalyticsClientPort> {
        self.cell.get().and_then(|client| client.as_deref())
    }

    pub fn handle(&self) -> Option<ClientHandle> {
        self.cell.get().cloned().flatten()
    }
}
