/// Time source for timing pairs.
pub trait ClockPort: Send + Sync {
    /// Milliseconds since an arbitrary origin fixed for the process.
    fn now(&self) -> f64;

    /// `false` when `now` follows the wall clock and may jump backwards.
    fn is_monotonic(&self) -> bool;
}
