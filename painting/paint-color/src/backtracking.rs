//! Depth-first color search with an undo trail.

use paint_types::{Assignment, PaintError, UnsatisfiableReason};
use tracing::debug;

use crate::problem::ColoringProblem;
use crate::search::{SearchLimits, SearchMeter, SearchStats};
use crate::trail::ColoringState;
use crate::ColorAssigner;

/// Complete backtracking search over surfaces in input order.
///
/// At each surface, colors are tried in palette order. A color is a
/// candidate when:
///
/// 1. its remaining budget covers the surface's area,
/// 2. no neighbour currently holds it (adjacency constraint on),
/// 3. it is already in use, or fewer than `min_colors` distinct colors are
///    in use so far,
/// 4. the surfaces left after this one can still bring the distinct count
///    up to `min_colors`.
///
/// Rule 3 keeps the palette from fragmenting once the diversity
/// requirement is met. Rule 4 only cuts branches that cannot succeed, so it
/// does not change which assignment is found first.
///
/// # Example
///
/// ```
/// use paint_adjacency::AdjacencyGraph;
/// use paint_color::{BacktrackingAssigner, ColorAssigner, ColoringProblem, SearchLimits};
/// use paint_types::{ColorId, Orientation, Palette, Point3, Surface, SurfaceId};
///
/// // Three far-apart floor tiles
/// let surfaces: Vec<_> = [0.0, 5.0, 10.0]
///     .into_iter()
///     .zip(1..)
///     .map(|(x, id)| Surface::new(SurfaceId(id), 1.0, 1.0, Point3::new(x, 0.0, 0.0), Orientation::Horizontal))
///     .collect();
/// let graph = AdjacencyGraph::with_surfaces(surfaces.iter().map(Surface::id));
/// let palette = Palette::unbounded(["A", "B", "C"].map(ColorId::from));
///
/// let problem = ColoringProblem::new(&surfaces, &graph, &palette).with_min_colors(2);
/// let assigner = BacktrackingAssigner::new(SearchLimits::unlimited());
/// let (assignment, stats) = assigner.assign_with_stats(&problem).unwrap();
///
/// assert_eq!(assignment.distinct_colors(), 2);
/// assert_eq!(stats.nodes_expanded, 3);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BacktrackingAssigner {
    limits: SearchLimits,
}

impl BacktrackingAssigner {
    /// Creates an assigner with the given caps.
    #[must_use]
    pub const fn new(limits: SearchLimits) -> Self {
        Self { limits }
    }

    /// Returns the search caps.
    #[must_use]
    pub const fn limits(&self) -> SearchLimits {
        self.limits
    }

    /// First admissible palette index at or after `from` for surface `index`.
    fn next_candidate(
        problem: &ColoringProblem<'_>,
        state: &ColoringState,
        neighbors: &[usize],
        index: usize,
        from: usize,
    ) -> Option<usize> {
        let surfaces = problem.surfaces();
        let palette = problem.palette();
        let area = surfaces[index].area();
        let min_colors = problem.min_colors();
        let remaining_after = surfaces.len() - index - 1;
        let locked = state.distinct() > 0 && state.distinct() >= min_colors;

        (from..palette.len()).find(|&color| {
            let fresh = !state.is_used(color);
            if locked && fresh {
                return false;
            }
            if state.usage(color) + area > palette.budget(color) {
                return false;
            }
            if problem.adjacency_constraint()
                && neighbors.iter().any(|&n| state.choice(n) == Some(color))
            {
                return false;
            }
            state.distinct() + usize::from(fresh) + remaining_after >= min_colors
        })
    }
}

impl ColorAssigner for BacktrackingAssigner {
    fn name(&self) -> &'static str {
        "backtracking"
    }

    fn assign_with_stats(
        &self,
        problem: &ColoringProblem<'_>,
    ) -> Result<(Assignment, SearchStats), PaintError> {
        problem.check_counts()?;

        let surfaces = problem.surfaces();
        let palette = problem.palette();
        let neighbors = problem.neighbor_indices();
        let n = surfaces.len();

        let mut state = ColoringState::new(n, palette.len());
        let mut meter = SearchMeter::start(self.limits);
        // Next palette index to try at each depth
        let mut cursor = vec![0_usize; n];

        loop {
            let depth = state.depth();

            let candidate = if depth == n {
                if state.distinct() >= problem.min_colors() {
                    break;
                }
                None
            } else {
                Self::next_candidate(problem, &state, &neighbors[depth], depth, cursor[depth])
            };

            if let Some(color) = candidate {
                meter.expand()?;
                cursor[depth] = color + 1;
                state.commit(depth, color, surfaces[depth].area());
                if let Some(next) = cursor.get_mut(depth + 1) {
                    *next = 0;
                }
                continue;
            }

            // Dead end: step back one surface, or give up at the root
            if state.undo(surfaces).is_none() {
                let nodes_expanded = meter.nodes_expanded();
                debug!(nodes_expanded, "color search exhausted");
                return Err(PaintError::Unsatisfiable(
                    UnsatisfiableReason::SearchSpaceExhausted { nodes_expanded },
                ));
            }
            meter.backtrack();
        }

        let stats = meter.finish();
        let assignment = state.to_assignment(surfaces, palette).ok_or_else(|| {
            PaintError::Unsatisfiable(UnsatisfiableReason::SearchSpaceExhausted {
                nodes_expanded: stats.nodes_expanded,
            })
        })?;

        debug!(
            surfaces = n,
            colors = assignment.distinct_colors(),
            nodes = stats.nodes_expanded,
            backtracks = stats.backtracks,
            elapsed_us = stats.elapsed.as_micros(),
            "color assignment found"
        );
        Ok((assignment, stats))
    }
}
