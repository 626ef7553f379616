/// Port for reading the host document, used as the page name fallback.
pub trait DocumentPort: Send + Sync {
    /// Current document title, `None` when there is no document.
    fn title(&self) -> Option<String>;
}
