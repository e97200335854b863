//! Time accounting for a painting plan.

use serde::{Deserialize, Serialize};

/// Painting and travel time of a plan.
///
/// # Example
///
/// ```
/// use paint_types::TimeBreakdown;
///
/// let time = TimeBreakdown::new(48.0, 2.0);
/// assert!((time.total_time() - 50.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct TimeBreakdown {
    painting_time: f64,
    travel_time: f64,
}

impl TimeBreakdown {
    /// Creates a breakdown from its two components.
    #[must_use]
    pub const fn new(painting_time: f64, travel_time: f64) -> Self {
        Self {
            painting_time,
            travel_time,
        }
    }

    /// Time spent painting.
    #[must_use]
    pub const fn painting_time(&self) -> f64 {
        self.painting_time
    }

    /// Time spent moving between surfaces.
    #[must_use]
    pub const fn travel_time(&self) -> f64 {
        self.travel_time
    }

    /// Painting plus travel.
    #[must_use]
    pub fn total_time(&self) -> f64 {
        self.painting_time + self.travel_time
    }
}
