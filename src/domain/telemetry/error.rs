use std::fmt;

/// Misuse of a start/stop timing pair. Reported, never propagated to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimingError {
    NameRequired,
    DuplicateStart { method: &'static str, name: String },
    MissingStart { method: &'static str, name: String },
}

impl fmt::Display for TimingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimingError::NameRequired => write!(
                f,
                "Could not detect document title, please provide name parameter."
            ),
            TimingError::DuplicateStart { method, name } => write!(
                f,
                "The '{method}' was called more than once for this event without calling stop, name: {name}."
            ),
            TimingError::MissingStart { method, name } => write!(
                f,
                "The '{method}' was called without a corresponding start, name: {name}."
            ),
        }
    }
}

impl std::error::Error for TimingError {}
