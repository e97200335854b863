//! Painting and travel time of a candidate plan.

use nalgebra::Point3;
use paint_types::{PaintError, Surface, TimeBreakdown, Tour};
use tracing::debug;

/// Turns areas and tour legs into time, and enforces the time limit.
///
/// ```text
/// painting_time = Σ area(s) × time_per_meter
/// travel_time   = length(walk) / travel_speed
/// ```
///
/// The walk is the tour's waypoint polyline when it has one, otherwise the
/// straight lines between its positions. Planners keep the legs equal to the
/// walk's length, so either reading gives the same time.
///
/// # Example
///
/// ```
/// use nalgebra::Point3;
/// use paint_solver::CostEvaluator;
/// use paint_types::{Orientation, Surface, SurfaceId, Tour, TourStop};
///
/// let surface = Surface::new(SurfaceId(1), 3.0, 4.0, Point3::new(4.0, 0.0, 0.0), Orientation::VerticalX);
/// let tour = Tour::new(
///     Point3::origin(),
///     vec![TourStop::new(SurfaceId(1), surface.position())],
///     vec![4.0],
/// );
///
/// let evaluator = CostEvaluator::new(2.0, 2.0, 100.0);
/// let time = evaluator.evaluate(&[surface], &tour);
///
/// assert!((time.painting_time() - 24.0).abs() < 1e-12);
/// assert!((time.travel_time() - 2.0).abs() < 1e-12);
/// assert!(evaluator.check(&time).is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CostEvaluator {
    time_per_meter: f64,
    travel_speed: f64,
    max_time: f64,
}

impl CostEvaluator {
    /// Creates an evaluator.
    #[must_use]
    pub const fn new(time_per_meter: f64, travel_speed: f64, max_time: f64) -> Self {
        Self {
            time_per_meter,
            travel_speed,
            max_time,
        }
    }

    /// Time to paint every surface.
    #[must_use]
    pub fn painting_time(&self, surfaces: &[Surface]) -> f64 {
        surfaces.iter().map(Surface::area).sum::<f64>() * self.time_per_meter
    }

    /// Time to cover a distance.
    #[must_use]
    pub fn travel_time(&self, distance: f64) -> f64 {
        distance / self.travel_speed
    }

    /// Time to walk a polyline of positions in a straight line between each.
    #[must_use]
    pub fn path_travel_time(&self, path: &[Point3<f64>]) -> f64 {
        let length: f64 = path
            .windows(2)
            .map(|w| nalgebra::distance(&w[0], &w[1]))
            .sum();
        self.travel_time(length)
    }

    /// Breakdown for painting `surfaces` while following `tour`.
    #[must_use]
    pub fn evaluate(&self, surfaces: &[Surface], tour: &Tour) -> TimeBreakdown {
        let time = TimeBreakdown::new(
            self.painting_time(surfaces),
            self.path_travel_time(&tour.walk()),
        );
        debug!(
            painting = time.painting_time(),
            travel = time.travel_time(),
            total = time.total_time(),
            "plan evaluated"
        );
        time
    }

    /// Rejects a plan that takes longer than allowed.
    ///
    /// # Errors
    ///
    /// Returns [`PaintError::BudgetExceeded`] if the total time is above
    /// `max_time`.
    pub fn check(&self, time: &TimeBreakdown) -> Result<(), PaintError> {
        let total_time = time.total_time();
        if total_time > self.max_time {
            return Err(PaintError::BudgetExceeded {
                total_time,
                max_time: self.max_time,
            });
        }
        Ok(())
    }
}
