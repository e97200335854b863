//! Pairwise corner and edge comparison.

use nalgebra::Point3;
use paint_types::{DEFAULT_CORNER_TOLERANCE, Surface};
use tracing::debug;

use crate::graph::AdjacencyGraph;

/// Builds an [`AdjacencyGraph`] by comparing every pair of surfaces.
///
/// Runs in O(n²) surface pairs with at most 16 corner and 16 edge checks
/// per pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AdjacencyAnalyzer {
    tolerance: f64,
}

impl AdjacencyAnalyzer {
    /// Creates an analyzer that treats coordinates within `tolerance` as equal.
    #[must_use]
    pub const fn new(tolerance: f64) -> Self {
        Self { tolerance }
    }

    /// Returns the coordinate tolerance.
    #[must_use]
    pub const fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Builds the graph for the given surfaces.
    ///
    /// Surfaces are expected to be validated: positive finite extents and a
    /// known orientation.
    #[must_use]
    pub fn analyze(&self, surfaces: &[Surface]) -> AdjacencyGraph {
        let mut graph = AdjacencyGraph::with_surfaces(surfaces.iter().map(Surface::id));

        for (i, a) in surfaces.iter().enumerate() {
            for b in &surfaces[i + 1..] {
                if self.touching(a, b) {
                    graph.connect(a.id(), b.id());
                }
            }
        }

        debug!(
            surfaces = graph.surface_count(),
            edges = graph.edge_count(),
            "adjacency graph built"
        );
        graph
    }

    /// Whether two surfaces share a corner or an overlapping boundary edge.
    #[must_use]
    pub fn touching(&self, a: &Surface, b: &Surface) -> bool {
        self.share_corner(a, b) || self.share_edge(a, b)
    }

    fn share_corner(&self, a: &Surface, b: &Surface) -> bool {
        let theirs = b.corners();
        a.corners()
            .iter()
            .any(|p| theirs.iter().any(|q| self.same_point(p, q)))
    }

    fn share_edge(&self, a: &Surface, b: &Surface) -> bool {
        let theirs = b.edges();
        a.edges()
            .iter()
            .any(|e| theirs.iter().any(|f| self.overlapping_segments(*e, *f)))
    }

    fn same_point(&self, p: &Point3<f64>, q: &Point3<f64>) -> bool {
        (0..3).all(|i| (p[i] - q[i]).abs() <= self.tolerance)
    }

    /// Axis-aligned segments on one line whose spans intersect (inclusive).
    fn overlapping_segments(
        &self,
        (a0, a1): (Point3<f64>, Point3<f64>),
        (b0, b1): (Point3<f64>, Point3<f64>),
    ) -> bool {
        let Some(axis) = self.running_axis(&a0, &a1) else {
            return false;
        };
        if self.running_axis(&b0, &b1) != Some(axis) {
            return false;
        }

        // Both fixed coordinates must agree for the segments to be collinear
        let collinear = (0..3)
            .filter(|&i| i != axis)
            .all(|i| (a0[i] - b0[i]).abs() <= self.tolerance);
        if !collinear {
            return false;
        }

        let (a_lo, a_hi) = span(a0[axis], a1[axis]);
        let (b_lo, b_hi) = span(b0[axis], b1[axis]);
        a_lo.max(b_lo) <= a_hi.min(b_hi) + self.tolerance
    }

    /// The single axis along which an axis-aligned segment extends.
    fn running_axis(&self, p: &Point3<f64>, q: &Point3<f64>) -> Option<usize> {
        let mut moving = (0..3).filter(|&i| (p[i] - q[i]).abs() > self.tolerance);
        let axis = moving.next()?;
        moving.next().is_none().then_some(axis)
    }
}

impl Default for AdjacencyAnalyzer {
    fn default() -> Self {
        Self::new(DEFAULT_CORNER_TOLERANCE)
    }
}

fn span(a: f64, b: f64) -> (f64, f64) {
    if a <= b { (a, b) } else { (b, a) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use paint_types::{Orientation, SurfaceId};

    fn wall(id: u64, h: f64, w: f64, pos: [f64; 3], orientation: Orientation) -> Surface {
        Surface::new(
            SurfaceId(id),
            h,
            w,
            Point3::new(pos[0], pos[1], pos[2]),
            orientation,
        )
    }

    /// Four walls of a 4x4 room, as in the bundled sample layouts.
    fn room() -> Vec<Surface> {
        vec![
            wall(1, 3.0, 4.0, [0.0, 0.0, 0.0], Orientation::VerticalX),
            wall(2, 3.0, 4.0, [4.0, 0.0, 0.0], Orientation::VerticalY),
            wall(3, 3.0, 4.0, [0.0, 4.0, 0.0], Orientation::VerticalX),
            wall(4, 3.0, 4.0, [0.0, 0.0, 0.0], Orientation::VerticalY),
        ]
    }

    #[test]
    fn test_room_walls_form_a_cycle() {
        let graph = AdjacencyAnalyzer::default().analyze(&room());

        assert!(graph.are_adjacent(SurfaceId(1), SurfaceId(2)));
        assert!(graph.are_adjacent(SurfaceId(2), SurfaceId(3)));
        assert!(graph.are_adjacent(SurfaceId(3), SurfaceId(4)));
        assert!(graph.are_adjacent(SurfaceId(4), SurfaceId(1)));
        // Opposite walls never touch
        assert!(!graph.are_adjacent(SurfaceId(1), SurfaceId(3)));
        assert!(!graph.are_adjacent(SurfaceId(2), SurfaceId(4)));
        assert_eq!(graph.edge_count(), 4);
        assert!(graph.is_symmetric());
    }

    #[test]
    fn test_edge_overlap_without_shared_corner() {
        let analyzer = AdjacencyAnalyzer::default();
        let base = wall(1, 3.0, 4.0, [0.0, 0.0, 0.0], Orientation::VerticalX);
        let floor_patch = wall(2, 2.0, 2.0, [1.0, 0.0, 0.0], Orientation::Horizontal);
        let stacked = wall(3, 3.0, 2.0, [1.0, 0.0, 3.0], Orientation::VerticalX);

        assert!(!analyzer.share_corner(&base, &floor_patch));
        assert!(analyzer.touching(&base, &floor_patch));
        assert!(analyzer.touching(&base, &stacked));
    }

    #[test]
    fn test_collinear_but_disjoint_edges() {
        let analyzer = AdjacencyAnalyzer::default();
        let a = wall(1, 3.0, 4.0, [0.0, 0.0, 0.0], Orientation::VerticalX);
        let b = wall(2, 3.0, 4.0, [5.0, 0.0, 0.0], Orientation::VerticalX);
        assert!(!analyzer.touching(&a, &b));
    }

    #[test]
    fn test_parallel_offset_edges() {
        let analyzer = AdjacencyAnalyzer::default();
        let a = wall(1, 3.0, 4.0, [0.0, 0.0, 0.0], Orientation::VerticalX);
        let b = wall(2, 3.0, 4.0, [0.0, 0.5, 0.0], Orientation::VerticalX);
        assert!(!analyzer.touching(&a, &b));
    }

    #[test]
    fn test_tolerance_absorbs_rounding() {
        let a = wall(1, 3.0, 4.0, [0.0, 0.0, 0.0], Orientation::VerticalX);
        let b = wall(2, 3.0, 4.0, [4.0 + 1e-12, 0.0, 0.0], Orientation::VerticalY);
        assert!(AdjacencyAnalyzer::default().touching(&a, &b));

        let c = wall(3, 3.0, 4.0, [4.001, 0.0, 0.0], Orientation::VerticalY);
        assert!(!AdjacencyAnalyzer::default().touching(&a, &c));
        assert!(AdjacencyAnalyzer::new(0.01).touching(&a, &c));
    }

    #[test]
    fn test_identical_surfaces_are_adjacent() {
        let a = wall(1, 3.0, 4.0, [0.0, 0.0, 0.0], Orientation::VerticalX);
        let b = wall(2, 3.0, 4.0, [0.0, 0.0, 0.0], Orientation::VerticalX);
        let graph = AdjacencyAnalyzer::default().analyze(&[a, b]);
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn test_empty_and_single_inputs() {
        let analyzer = AdjacencyAnalyzer::default();
        assert_eq!(analyzer.analyze(&[]).surface_count(), 0);

        let graph = analyzer.analyze(&[wall(7, 1.0, 1.0, [0.0, 0.0, 0.0], Orientation::Horizontal)]);
        assert_eq!(graph.surface_count(), 1);
        assert_eq!(graph.edge_count(), 0);
    }
}
