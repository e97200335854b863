//! Core types for planning how a set of wall surfaces gets painted.
//!
//! This crate provides the vocabulary every other painting crate speaks:
//!
//! - [`Surface`] - A validated rectangle with an id, size, anchor and [`Orientation`]
//! - [`Palette`] - The ordered colors on offer and their paint budgets
//! - [`Assignment`] / [`PaintUsage`] - Which surface gets which color and how much paint that takes
//! - [`Tour`] - The order in which an agent visits the surfaces
//! - [`TimeBreakdown`] - Painting and travel time of a plan
//! - [`SolverConfig`] - Tunable constants and search limits
//! - [`SolveInput`] / [`SolutionRecord`] - Loose records exchanged with loaders and renderers
//! - [`PaintError`] - The single error type every stage returns
//!
//! # Layer 0 Crate
//!
//! Apart from the spatial primitives this crate has no algorithms. Adjacency,
//! coloring, routing and assembly live in their own crates and depend on it.
//!
//! # Example
//!
//! ```
//! use paint_types::{Orientation, Surface, SurfaceId};
//! use nalgebra::Point3;
//!
//! let wall = Surface::new(
//!     SurfaceId(1),
//!     3.0,
//!     4.0,
//!     Point3::new(0.0, 0.0, 0.0),
//!     Orientation::VerticalX,
//! );
//!
//! assert_eq!(wall.area(), 12.0);
//! assert_eq!(wall.corners()[2], Point3::new(4.0, 0.0, 3.0));
//! ```

#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]

mod assignment;
mod config;
mod cost;
mod error;
mod palette;
mod record;
mod surface;
mod tour;

pub use assignment::{Assignment, PaintUsage};
pub use config::{
    ColorStrategy, DEFAULT_CORNER_TOLERANCE, DEFAULT_MAX_COLOR_NODES, DEFAULT_TRAVEL_SPEED,
    GridConfig, Heuristic, RoutingMode, SolverConfig,
};
pub use cost::TimeBreakdown;
pub use error::{PaintError, UnsatisfiableReason, ValidationError};
pub use palette::{ColorId, Palette};
pub use record::{DoorRecord, SolutionRecord, SolveInput, SurfaceRecord};
pub use surface::{Orientation, ParseOrientationError, Surface, SurfaceId};
pub use tour::{Tour, TourStop};

// Re-export nalgebra types for convenience
pub use nalgebra::Point3;
