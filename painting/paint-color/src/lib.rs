//! Color assignment for painted surfaces.
//!
//! Given surfaces in input order, their adjacency graph and a budgeted
//! palette, pick one color per surface such that:
//!
//! - no color is used for more area than its budget allows,
//! - adjacent surfaces differ (when the adjacency constraint is on),
//! - at least `min_colors` distinct colors appear.
//!
//! Two assigners are provided behind the [`ColorAssigner`] trait:
//!
//! - [`BacktrackingAssigner`] - Complete depth-first search with an undo trail
//! - [`SequentialAssigner`] - A single greedy pass that only looks at the
//!   preceding surface; fast but weaker, and not a substitute for the
//!   backtracking search when adjacency matters
//!
//! # Example
//!
//! ```
//! use paint_adjacency::AdjacencyAnalyzer;
//! use paint_color::{BacktrackingAssigner, ColorAssigner, ColoringProblem};
//! use paint_types::{ColorId, Orientation, Palette, Point3, Surface, SurfaceId};
//!
//! let surfaces = [
//!     Surface::new(SurfaceId(1), 3.0, 4.0, Point3::new(0.0, 0.0, 0.0), Orientation::VerticalX),
//!     Surface::new(SurfaceId(2), 3.0, 4.0, Point3::new(4.0, 0.0, 0.0), Orientation::VerticalY),
//! ];
//! let graph = AdjacencyAnalyzer::default().analyze(&surfaces);
//! let palette = Palette::unbounded([ColorId::from("White"), ColorId::from("Blue")]);
//!
//! let problem = ColoringProblem::new(&surfaces, &graph, &palette).with_min_colors(2);
//! let assignment = BacktrackingAssigner::default().assign(&problem).unwrap();
//!
//! assert_eq!(assignment.color_of(SurfaceId(1)), Some(&ColorId::from("White")));
//! assert_eq!(assignment.color_of(SurfaceId(2)), Some(&ColorId::from("Blue")));
//! ```

#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]

mod backtracking;
mod problem;
mod search;
mod sequential;
mod trail;

pub use backtracking::BacktrackingAssigner;
pub use problem::ColoringProblem;
pub use search::{SearchLimits, SearchStats};
pub use sequential::SequentialAssigner;

use paint_types::{Assignment, PaintError};

/// A strategy that colors every surface of a [`ColoringProblem`].
///
/// Implementations either return a complete assignment that satisfies the
/// problem's constraints or an error; partial assignments are never exposed.
pub trait ColorAssigner {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Colors every surface and reports how much searching it took.
    ///
    /// # Errors
    ///
    /// - [`PaintError::Unsatisfiable`] if no assignment exists (or, for
    ///   approximate strategies, none was found)
    /// - [`PaintError::SearchExhausted`] if a node or time cap was hit first
    fn assign_with_stats(
        &self,
        problem: &ColoringProblem<'_>,
    ) -> Result<(Assignment, SearchStats), PaintError>;

    /// Colors every surface.
    ///
    /// # Errors
    ///
    /// Same as [`assign_with_stats`](Self::assign_with_stats).
    fn assign(&self, problem: &ColoringProblem<'_>) -> Result<Assignment, PaintError> {
        self.assign_with_stats(problem).map(|(assignment, _)| assignment)
    }
}
