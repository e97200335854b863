//! Greedy nearest-neighbour tours.

use nalgebra::Point3;
use paint_types::{PaintError, Tour, TourStop};
use tracing::debug;

use crate::TourPlanner;

/// Visits the closest unvisited stop next, by straight-line distance.
///
/// Ties go to the stop listed first. This is a greedy heuristic: the tour is
/// cheap to compute but not necessarily the shortest one.
///
/// # Example
///
/// ```
/// use nalgebra::Point3;
/// use paint_types::{SurfaceId, TourStop};
/// use tour_pathfind::{NearestNeighborPlanner, TourPlanner};
///
/// let stops = [
///     TourStop::new(SurfaceId(1), Point3::new(10.0, 0.0, 0.0)),
///     TourStop::new(SurfaceId(2), Point3::new(1.0, 0.0, 0.0)),
/// ];
/// let tour = NearestNeighborPlanner.plan(Point3::origin(), &stops).unwrap();
///
/// assert_eq!(tour.order(), [SurfaceId(2), SurfaceId(1)]);
/// assert!((tour.travel_distance() - 10.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NearestNeighborPlanner;

impl TourPlanner for NearestNeighborPlanner {
    fn name(&self) -> &'static str {
        "nearest-neighbor"
    }

    fn plan(&self, start: Point3<f64>, stops: &[TourStop]) -> Result<Tour, PaintError> {
        let mut remaining: Vec<TourStop> = stops.to_vec();
        let mut ordered = Vec::with_capacity(stops.len());
        let mut legs = Vec::with_capacity(stops.len());
        let mut current = start;

        while !remaining.is_empty() {
            let mut best = 0;
            let mut best_distance = f64::INFINITY;
            for (i, stop) in remaining.iter().enumerate() {
                let d = nalgebra::distance(&current, &stop.position);
                if d < best_distance {
                    best = i;
                    best_distance = d;
                }
            }

            // `remove` keeps the input order of the rest for tie-breaking
            let stop = remaining.remove(best);
            current = stop.position;
            legs.push(best_distance);
            ordered.push(stop);
        }

        let tour = Tour::new(start, ordered, legs);
        debug!(
            stops = stops.len(),
            distance = tour.travel_distance(),
            "nearest-neighbor tour planned"
        );
        Ok(tour)
    }
}
