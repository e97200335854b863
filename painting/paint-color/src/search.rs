//! Search caps and counters.

use std::time::{Duration, Instant};

use paint_types::{DEFAULT_MAX_COLOR_NODES, PaintError};

/// How often (in nodes) the wall clock is consulted.
const CLOCK_CHECK_INTERVAL: usize = 256;

/// Caps that turn a runaway search into [`PaintError::SearchExhausted`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchLimits {
    max_nodes: Option<usize>,
    timeout: Option<Duration>,
}

impl SearchLimits {
    /// No caps at all.
    #[must_use]
    pub const fn unlimited() -> Self {
        Self {
            max_nodes: None,
            timeout: None,
        }
    }

    /// Creates limits from optional caps.
    #[must_use]
    pub const fn new(max_nodes: Option<usize>, timeout: Option<Duration>) -> Self {
        Self { max_nodes, timeout }
    }

    /// Sets the node cap.
    #[must_use]
    pub const fn with_max_nodes(mut self, max: usize) -> Self {
        self.max_nodes = Some(max);
        self
    }

    /// Sets the wall-clock cap.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Returns the node cap, if any.
    #[must_use]
    pub const fn max_nodes(&self) -> Option<usize> {
        self.max_nodes
    }

    /// Returns the wall-clock cap, if any.
    #[must_use]
    pub const fn timeout(&self) -> Option<Duration> {
        self.timeout
    }
}

impl Default for SearchLimits {
    fn default() -> Self {
        Self::new(Some(DEFAULT_MAX_COLOR_NODES), None)
    }
}

/// Statistics about one color search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Colors committed, counting those later undone.
    pub nodes_expanded: usize,
    /// Times a surface ran out of candidates and the search stepped back.
    pub backtracks: usize,
    /// Wall-clock time spent.
    pub elapsed: Duration,
}

/// Counts nodes and enforces [`SearchLimits`] while a search runs.
#[derive(Debug)]
pub(crate) struct SearchMeter {
    limits: SearchLimits,
    started: Instant,
    stats: SearchStats,
}

impl SearchMeter {
    pub(crate) fn start(limits: SearchLimits) -> Self {
        Self {
            limits,
            started: Instant::now(),
            stats: SearchStats::default(),
        }
    }

    /// Records one expansion, failing once a cap is passed.
    pub(crate) fn expand(&mut self) -> Result<(), PaintError> {
        self.stats.nodes_expanded += 1;

        let over_nodes = self
            .limits
            .max_nodes
            .is_some_and(|max| self.stats.nodes_expanded > max);
        let over_time = self.stats.nodes_expanded % CLOCK_CHECK_INTERVAL == 0
            && self
                .limits
                .timeout
                .is_some_and(|limit| self.started.elapsed() >= limit);

        if over_nodes || over_time {
            return Err(PaintError::SearchExhausted {
                stage: "color assignment",
                nodes_expanded: self.stats.nodes_expanded,
                elapsed: self.started.elapsed(),
            });
        }
        Ok(())
    }

    pub(crate) fn backtrack(&mut self) {
        self.stats.backtracks += 1;
    }

    pub(crate) const fn nodes_expanded(&self) -> usize {
        self.stats.nodes_expanded
    }

    pub(crate) fn finish(mut self) -> SearchStats {
        self.stats.elapsed = self.started.elapsed();
        self.stats
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_default_limits() {
        let limits = SearchLimits::default();
        assert_eq!(limits.max_nodes(), Some(1_000_000));
        assert_eq!(limits.timeout(), None);
    }

    #[test]
    fn test_node_cap_trips_after_limit() {
        let mut meter = SearchMeter::start(SearchLimits::unlimited().with_max_nodes(2));
        assert!(meter.expand().is_ok());
        assert!(meter.expand().is_ok());
        let error = meter.expand().unwrap_err();
        assert!(matches!(
            error,
            PaintError::SearchExhausted {
                nodes_expanded: 3,
                ..
            }
        ));
    }

    #[test]
    fn test_zero_timeout_trips_on_clock_check() {
        let mut meter = SearchMeter::start(SearchLimits::unlimited().with_timeout(Duration::ZERO));
        for _ in 1..CLOCK_CHECK_INTERVAL {
            assert!(meter.expand().is_ok());
        }
        assert!(meter.expand().unwrap_err().is_search_exhausted());
    }

    #[test]
    fn test_finish_reports_counts() {
        let mut meter = SearchMeter::start(SearchLimits::unlimited());
        meter.expand().unwrap();
        meter.backtrack();
        let stats = meter.finish();
        assert_eq!(stats.nodes_expanded, 1);
        assert_eq!(stats.backtracks, 1);
    }
}
