//! Tour planning for a painting agent.
//!
//! A tour starts at a fixed position and visits every surface's painting
//! position exactly once. Two planners implement [`TourPlanner`]:
//!
//! - **Nearest neighbour** ([`NearestNeighborPlanner`]): straight-line greedy
//!   tour for open spaces
//! - **Grid** ([`GridTourPlanner`]): walks a voxel occupancy grid built from
//!   the wall rectangles, crossing between rooms only through door cells
//!
//! # Quick Start
//!
//! ```
//! use nalgebra::Point3;
//! use paint_types::{SurfaceId, TourStop};
//! use tour_pathfind::{NearestNeighborPlanner, TourPlanner};
//!
//! let stops = [
//!     TourStop::new(SurfaceId(1), Point3::new(0.0, 4.0, 0.0)),
//!     TourStop::new(SurfaceId(2), Point3::new(4.0, 0.0, 0.0)),
//! ];
//!
//! let tour = NearestNeighborPlanner.plan(Point3::new(3.0, 0.0, 0.0), &stops).unwrap();
//! assert_eq!(tour.order(), [SurfaceId(2), SurfaceId(1)]);
//! ```
//!
//! # Planner Selection
//!
//! | Planner | Best For | Trade-offs |
//! |---------|----------|------------|
//! | Nearest neighbour | Single open room | Ignores walls, legs are straight lines |
//! | Grid (6-conn) | Rooms joined by doors | Axis-aligned walks, cost grows with volume |
//! | Grid (26-conn) | Rooms joined by doors | Shorter walks, more neighbours per cell |

#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]

mod grid;
pub mod heuristics;
mod nearest;
pub mod neighbors;

pub use grid::{GridTourPlanner, build_occupancy};
pub use nearest::NearestNeighborPlanner;

use nalgebra::Point3;
use paint_types::{PaintError, Tour, TourStop};

/// A strategy that orders the stops of a tour.
pub trait TourPlanner {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Orders `stops` into a tour starting at `start`.
    ///
    /// Every stop appears exactly once in the result.
    ///
    /// # Errors
    ///
    /// - [`PaintError::Unreachable`] if a stop cannot be reached
    /// - [`PaintError::StartEnclosed`] if the start has no free cell to leave from
    /// - [`PaintError::SearchExhausted`] if a search cap was hit first
    fn plan(&self, start: Point3<f64>, stops: &[TourStop]) -> Result<Tour, PaintError>;
}
