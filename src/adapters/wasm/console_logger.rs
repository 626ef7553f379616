use crate::ports::LoggerPort;
use wasm_bindgen::JsValue;
use web_sys::console;

const PREFIX: &str = "[firebase-analytics]";

fn line(message: &str) -> JsValue {
    JsValue::from_str(&format!("{PREFIX} {message}"))
}

/// Browser console, one method per severity so devtools filters apply.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleLogger;

impl ConsoleLogger {
    pub fn new() -> Self {
        Self
    }
}

impl LoggerPort for ConsoleLogger {
    fn log(&self, message: &str) {
        console::log_1(&line(message));
    }

    fn debug(&self, message: &str) {
        console::debug_1(&line(message));
    }

    fn warn(&self, message: &str) {
        console::warn_1(&line(message));
    }

    fn error(&self, message: &str) {
        console::error_1(&line(message));
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_line_is_prefixed() {
        assert_eq!(
            line("ready").as_string().as_deref(),
            Some("[firebase-analytics] ready")
        );
    }

    #[wasm_bindgen_test]
    fn test_every_severity_reaches_console() {
        let logger = ConsoleLogger::new();
        logger.log("log");
        logger.debug("debug");
        logger.warn("warn");
        logger.error("error");
    }
}
