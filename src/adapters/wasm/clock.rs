use crate::global::get_global_scope;
use crate::ports::ClockPort;
use wasm_bindgen::JsCast;
use web_sys::{Performance, Window, WorkerGlobalScope};

fn performance() -> Option<Performance> {
    let scope = get_global_scope().ok()?;
    match scope.dyn_into::<WorkerGlobalScope>() {
        Ok(worker) => worker.performance(),
        Err(scope) => scope.dyn_into::<Window>().ok()?.performance(),
    }
}

/// `performance.now()` where the scope exposes it, `Date.now()` otherwise.
#[derive(Debug, Clone, Copy, Default)]
pub struct Clock;

impl Clock {
    pub fn new() -> Self {
        Self
    }
}

impl ClockPort for Clock {
    fn now(&self) -> f64 {
        performance()
            .map(|performance| performance.now())
            .unwrap_or_else(js_sys::Date::now)
    }

    fn is_monotonic(&self) -> bool {
        performance().is_some()
    }
}
