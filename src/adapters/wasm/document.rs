use crate::ports::DocumentPort;

/// Reads `document.title`. Workers have no document and yield `None`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Document;

impl Document {
    pub fn new() -> Self {
        Self
    }
}

impl DocumentPort for Document {
    fn title(&self) -> Option<String> {
        web_sys::window()
            .and_then(|window| window.document())
            .map(|document| document.title())
            .filter(|title| !title.is_empty())
    }
}
