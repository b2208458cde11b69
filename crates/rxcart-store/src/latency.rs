//! Simulated network latency configuration.

use std::time::Duration;

/// Per-operation-class artificial delays applied by the in-memory store.
///
/// The defaults mirror a sluggish mock backend; tests use
/// [`LatencyProfile::none`] for instant responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LatencyProfile {
    /// Full-collection listings.
    pub list: Duration,
    /// Single-record lookups and precomputed summaries.
    pub lookup: Duration,
    /// Filtered queries (search, by-category, by-rating).
    pub query: Duration,
    /// Review submission.
    pub submit: Duration,
}

impl LatencyProfile {
    /// No artificial delay.
    pub fn none() -> Self {
        Self {
            list: Duration::ZERO,
            lookup: Duration::ZERO,
            query: Duration::ZERO,
            submit: Duration::ZERO,
        }
    }

    /// Uniform delay for every operation class.
    pub fn uniform(delay: Duration) -> Self {
        Self {
            list: delay,
            lookup: delay,
            query: delay,
            submit: delay,
        }
    }
}

impl Default for LatencyProfile {
    fn default() -> Self {
        Self {
            list: Duration::from_millis(500),
            lookup: Duration::from_millis(300),
            query: Duration::from_millis(400),
            submit: Duration::from_millis(800),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_none_is_instant() {
        let p = LatencyProfile::none();
        assert_eq!(p.list, Duration::ZERO);
        assert_eq!(p.submit, Duration::ZERO);
    }

    #[test]
    fn test_default_delays() {
        let p = LatencyProfile::default();
        assert_eq!(p.list, Duration::from_millis(500));
        assert_eq!(p.lookup, Duration::from_millis(300));
        assert_eq!(p.query, Duration::from_millis(400));
        assert_eq!(p.submit, Duration::from_millis(800));
    }
}
