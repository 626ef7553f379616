use super::ClientHandle;
use futures::future::{LocalBoxFuture, Shared};
use futures::FutureExt;
use std::cell::RefCell;
use std::collections::HashMap;

/// A pending or finished client acquisition, awaitable any number of times.
pub type SharedClient = Shared<LocalBoxFuture<'static, Option<ClientHandle>>>;

// Clients are JS handles and the event loop is single-threaded, so the
// process-wide cache lives per thread. Entries are never evicted: there is one
// per distinct measurement id.
thread_local! {
    static CLIENTS: RefCell<HashMap<String, SharedClient>> = RefCell::new(HashMap::new());
}

/// Returns the acquisition cached under `key`, creating it with `start` on the
/// first call. Lookup and insertion happen in one borrow, so callers racing on
/// the same key share one acquisition.
pub fn shared_client<F>(key: &str, start: F) -> SharedClient
where
    F: FnOnce() -> LocalBoxFuture<'static, Option<ClientHandle>>,
{
    CLIENTS.with(|cell| {
        cell.borrow_mut()
            .entry(key.to_string())
            .or_insert_with(|| start().shared())
            .clone()
    })
}

pub fn is_cached(key: &str) -> bool {
    CLIENTS.with(|cell| cell.borrow().contains_key(key))
}
