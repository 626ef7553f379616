use super::TimingError;
use std::collections::HashMap;

/// Start timestamps of running timing pairs, keyed by name.
///
/// A name is present exactly between a successful start and its stop. Failed
/// calls leave the registry untouched.
#[derive(Debug, Default)]
pub struct TimingRegistry {
    starts: HashMap<String, f64>,
}

impl TimingRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `now` under `name`. `method` names the caller in the error.
    pub fn start(&mut self, method: &'static str, name: &str, now: f64) -> Result<(), TimingError> {
        if self.starts.contains_key(name) {
            return Err(TimingError::DuplicateStart {
                method,
                name: name.to_string(),
            });
        }

        self.starts.insert(name.to_string(), now);
        Ok(())
    }

    /// Removes `name` and returns the elapsed milliseconds, never negative.
    pub fn stop(&mut self, method: &'static str, name: &str, now: f64) -> Result<u64, TimingError> {
        let start = match self.starts.get(name) {
            Some(start) if !start.is_nan() => *start,
            _ => {
                return Err(TimingError::MissingStart {
                    method,
                    name: name.to_string(),
                })
            }
        };

        self.starts.remove(name);
        Ok((now - start).max(0.0).round() as u64)
    }

    pub fn started_at(&self, name: &str) -> Option<f64> {
        self.starts.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.starts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.starts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_stop_pair() {
        let mut registry = TimingRegistry::new();
        registry.start("start_track_event", "e", 100.0).unwrap();
        assert_eq!(registry.started_at("e"), Some(100.0));

        let duration = registry.stop("stop_track_event", "e", 350.0).unwrap();
        assert_eq!(duration, 250);
        assert!(registry.is_empty());
    }

    #[test]
    fn test_duplicate_start_keeps_original() {
        let mut registry = TimingRegistry::new();
        registry.start("start_track_event", "e", 100.0).unwrap();

        let err = registry.start("start_track_event", "e", 200.0).unwrap_err();
        assert_eq!(
            err.to_string(),
            "The 'start_track_event' was called more than once for this event without calling stop, name: e."
        );
        assert_eq!(registry.started_at("e"), Some(100.0));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_stop_without_start() {
        let mut registry = TimingRegistry::new();
        registry.start("start_track_event", "other", 1.0).unwrap();

        let err = registry.stop("stop_track_event", "e", 10.0).unwrap_err();
        assert!(matches!(err, TimingError::MissingStart { ref name, .. } if name == "e"));
        assert_eq!(registry.started_at("other"), Some(1.0));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_clock_going_backwards_clamps_to_zero() {
        let mut registry = TimingRegistry::new();
        registry.start("start_track_page", "home", 500.0).unwrap();
        assert_eq!(registry.stop("stop_track_page", "home", 400.0).unwrap(), 0);
    }

    #[test]
    fn test_pairs_are_independent() {
        let mut registry = TimingRegistry::new();
        registry.start("start_track_event", "a", 0.0).unwrap();
        registry.start("start_track_event", "b", 10.0).unwrap();

        assert_eq!(registry.stop("stop_track_event", "b", 15.0).unwrap(), 5);
        assert_eq!(registry.started_at("a"), Some(0.0));
    }
}
