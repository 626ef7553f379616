use crate::ports::DocumentPort;

/// Native hosts have no document; page names must be passed explicitly.
#[derive(Debug, Clone, Copy, Default)]
pub struct Document;

impl Document {
    pub fn new() -> Self {
        Self
    }
}

impl DocumentPort for Document {
    fn title(&self) -> Option<String> {
        None
    }
}
