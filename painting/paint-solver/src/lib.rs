//! End-to-end planning for a wall-painting agent.
//!
//! A solve takes a [`SolveInput`](paint_types::SolveInput) and runs five
//! stages, stopping at the first failure:
//!
//! 1. **Validation** ([`SurfaceModel`]) - Typed surfaces, palette and budgets
//! 2. **Adjacency** - Which surfaces touch, via `paint-adjacency`
//! 3. **Coloring** - One color per surface, via `paint-color`
//! 4. **Routing** - A visiting order, via `tour-pathfind`
//! 5. **Costing** ([`CostEvaluator`]) - Painting plus travel time, checked
//!    against `max_time`
//!
//! A [`Solution`] is only produced when every constraint holds.
//!
//! # Quick Start
//!
//! ```
//! use paint_solver::solve_json;
//! use paint_types::{ColorId, SolverConfig, SurfaceId};
//!
//! let record = solve_json(
//!     r#"{
//!         "surfaces": [
//!             {"id": 1, "height": 3.0, "width": 4.0, "position": [0, 0, 0], "orientation": "Vertical-x"},
//!             {"id": 2, "height": 3.0, "width": 4.0, "position": [4, 0, 0], "orientation": "Vertical-y"}
//!         ],
//!         "colors": ["White", "Blue"],
//!         "paint_availability": {"White": 15.0, "Blue": 15.0},
//!         "time_per_meter": 1.0,
//!         "max_time": 100.0,
//!         "min_colors": 2,
//!         "start_position": [0, 0, 0]
//!     }"#,
//!     &SolverConfig::default(),
//! )
//! .unwrap();
//!
//! assert_eq!(record.colors[&SurfaceId(1)], ColorId::from("White"));
//! assert_eq!(record.colors[&SurfaceId(2)], ColorId::from("Blue"));
//! assert!(record.total_time <= 100.0);
//! ```
//!
//! # Routing
//!
//! With [`RoutingMode::Auto`](paint_types::RoutingMode::Auto) the solver walks
//! a voxel grid when the input lists doors, and plans straight-line
//! nearest-neighbour tours otherwise.

#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]

mod cost;
mod model;
mod solution;
mod solver;

pub use cost::CostEvaluator;
pub use model::SurfaceModel;
pub use solution::{Solution, SolveStats};
pub use solver::{Solver, solve};

use paint_types::{PaintError, SolutionRecord, SolverConfig};

/// Decodes a JSON input, solves it and returns the output record.
///
/// # Errors
///
/// [`PaintError::MalformedInput`] if the text cannot be decoded, otherwise
/// the same errors as [`Solver::solve`].
pub fn solve_json(text: &str, config: &SolverConfig) -> Result<SolutionRecord, PaintError> {
    Solver::new(config.clone()).solve_json(text)
}
