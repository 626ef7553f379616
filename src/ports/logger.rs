/// Logger port - diagnostic channel for the adapter itself.
///
/// Abstracts logging from platform-specific implementations:
/// - WASM: Console API (console.log, console.debug, console.warn, console.error)
/// - Native: the `log` crate
pub trait LoggerPort: Send + Sync {
    /// Log an informational message.
    fn log(&self, message: &str);

    /// Log a debug message.
    fn debug(&self, message: &str);

    /// Log a warning message.
    fn warn(&self, message: &str);

    /// Log an error message.
    fn error(&self, message: &str);
}
