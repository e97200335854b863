//! A fully validated painting plan.

use std::collections::BTreeSet;
use std::time::Duration;

use nalgebra::Point3;
use paint_adjacency::AdjacencyGraph;
use paint_color::SearchStats;
use paint_types::{
    Assignment, ColorId, PaintUsage, SolutionRecord, SurfaceId, TimeBreakdown, Tour,
};

/// Diagnostics of one solve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolveStats {
    /// Counters of the color search.
    pub color_search: SearchStats,
    /// Name of the color assigner that ran.
    pub color_strategy: &'static str,
    /// Name of the tour planner that ran.
    pub planner: &'static str,
    /// Wall-clock time of the whole solve.
    pub elapsed: Duration,
}

/// A plan in which every constraint holds.
///
/// Only the solver creates solutions, and only after coloring, routing and
/// the time check have all passed.
#[derive(Debug, Clone)]
pub struct Solution {
    pub(crate) assignment: Assignment,
    pub(crate) tour: Tour,
    pub(crate) time: TimeBreakdown,
    pub(crate) adjacency: AdjacencyGraph,
    pub(crate) stats: SolveStats,
}

impl Solution {
    /// Color of one surface.
    #[must_use]
    pub fn color_of(&self, surface: SurfaceId) -> Option<&ColorId> {
        self.assignment.color_of(surface)
    }

    /// The full assignment, in input order.
    #[must_use]
    pub const fn assignment(&self) -> &Assignment {
        &self.assignment
    }

    /// Distinct colors that appear in the plan.
    #[must_use]
    pub fn colors_used(&self) -> BTreeSet<&ColorId> {
        self.assignment.colors_used()
    }

    /// Area painted per palette color.
    #[must_use]
    pub const fn paint_usage(&self) -> &PaintUsage {
        self.assignment.paint_usage()
    }

    /// The start position followed by every surface position in visit order.
    #[must_use]
    pub fn path(&self) -> Vec<Point3<f64>> {
        self.tour.positions()
    }

    /// The planned tour with its legs.
    #[must_use]
    pub const fn tour(&self) -> &Tour {
        &self.tour
    }

    /// Painting plus travel time.
    #[must_use]
    pub fn total_time(&self) -> f64 {
        self.time.total_time()
    }

    /// Painting and travel time separately.
    #[must_use]
    pub const fn time_breakdown(&self) -> &TimeBreakdown {
        &self.time
    }

    /// Which surfaces touch which.
    #[must_use]
    pub const fn adjacency(&self) -> &AdjacencyGraph {
        &self.adjacency
    }

    /// Diagnostics.
    #[must_use]
    pub const fn stats(&self) -> &SolveStats {
        &self.stats
    }

    /// The output record handed to renderers.
    #[must_use]
    pub fn to_record(&self) -> SolutionRecord {
        SolutionRecord {
            colors: self.assignment.to_map(),
            total_time: self.total_time(),
            path: self.path().iter().map(|p| [p.x, p.y, p.z]).collect(),
            paint_usage: self.paint_usage().to_map(),
        }
    }
}
