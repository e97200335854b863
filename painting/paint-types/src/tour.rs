//! Visiting order of surfaces.

use nalgebra::Point3;

use crate::surface::SurfaceId;

/// A surface the agent must visit, located at its painting position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TourStop {
    /// The surface to paint.
    pub surface: SurfaceId,
    /// Where the agent stands to paint it.
    pub position: Point3<f64>,
}

impl TourStop {
    /// Creates a tour stop.
    #[must_use]
    pub const fn new(surface: SurfaceId, position: Point3<f64>) -> Self {
        Self { surface, position }
    }
}

/// An ordered visit of every surface, starting from a fixed position.
///
/// `legs[k]` is the distance travelled to reach `stops[k]` from the previous
/// stop (or the start). Planners that route around obstacles also record the
/// dense `waypoints` they walked, running from the start to the last stop's
/// position; the polyline length of the waypoints equals the sum of legs.
///
/// # Example
///
/// ```
/// use paint_types::{SurfaceId, Tour, TourStop};
/// use nalgebra::Point3;
///
/// let tour = Tour::new(
///     Point3::origin(),
///     vec![TourStop::new(SurfaceId(1), Point3::new(3.0, 4.0, 0.0))],
///     vec![5.0],
/// );
///
/// assert_eq!(tour.positions().len(), 2);
/// assert!((tour.travel_distance() - 5.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Tour {
    start: Point3<f64>,
    stops: Vec<TourStop>,
    legs: Vec<f64>,
    waypoints: Vec<Point3<f64>>,
}

impl Tour {
    /// Creates a tour from its stops and per-stop leg lengths.
    #[must_use]
    pub fn new(start: Point3<f64>, stops: Vec<TourStop>, legs: Vec<f64>) -> Self {
        debug_assert_eq!(stops.len(), legs.len(), "one leg per stop");
        Self {
            start,
            stops,
            legs,
            waypoints: Vec::new(),
        }
    }

    /// Attaches the walked waypoints.
    #[must_use]
    pub fn with_waypoints(mut self, waypoints: Vec<Point3<f64>>) -> Self {
        self.waypoints = waypoints;
        self
    }

    /// The start position.
    #[must_use]
    pub const fn start(&self) -> Point3<f64> {
        self.start
    }

    /// Stops in visiting order.
    #[must_use]
    pub fn stops(&self) -> &[TourStop] {
        &self.stops
    }

    /// Distance travelled to reach each stop.
    #[must_use]
    pub fn legs(&self) -> &[f64] {
        &self.legs
    }

    /// Dense walked path, empty for straight-line planners.
    #[must_use]
    pub fn waypoints(&self) -> &[Point3<f64>] {
        &self.waypoints
    }

    /// The start followed by each stop's position.
    #[must_use]
    pub fn positions(&self) -> Vec<Point3<f64>> {
        std::iter::once(self.start)
            .chain(self.stops.iter().map(|s| s.position))
            .collect()
    }

    /// The polyline the agent actually travels.
    ///
    /// The dense waypoints when a planner recorded them, otherwise the start
    /// followed by each stop's position.
    #[must_use]
    pub fn walk(&self) -> Vec<Point3<f64>> {
        if self.waypoints.is_empty() {
            self.positions()
        } else {
            self.waypoints.clone()
        }
    }

    /// Surface ids in visiting order.
    #[must_use]
    pub fn order(&self) -> Vec<SurfaceId> {
        self.stops.iter().map(|s| s.surface).collect()
    }

    /// Sum of all legs.
    #[must_use]
    pub fn travel_distance(&self) -> f64 {
        self.legs.iter().sum()
    }
}
