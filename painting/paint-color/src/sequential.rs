//! Single-pass coloring that only looks one surface back.

use paint_types::{Assignment, PaintError, UnsatisfiableReason};
use tracing::debug;

use crate::problem::ColoringProblem;
use crate::search::{SearchLimits, SearchMeter, SearchStats};
use crate::trail::ColoringState;
use crate::ColorAssigner;

/// Greedy pass in input order that never revisits a choice.
///
/// Each surface takes the first palette color whose budget covers it and
/// that differs from the color of the surface just before it. The adjacency
/// graph is ignored, so the result is only meaningful when the adjacency
/// constraint is off; it may also fail where [`BacktrackingAssigner`]
/// succeeds.
///
/// [`BacktrackingAssigner`]: crate::BacktrackingAssigner
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SequentialAssigner;

impl ColorAssigner for SequentialAssigner {
    fn name(&self) -> &'static str {
        "sequential"
    }

    fn assign_with_stats(
        &self,
        problem: &ColoringProblem<'_>,
    ) -> Result<(Assignment, SearchStats), PaintError> {
        problem.check_counts()?;

        let surfaces = problem.surfaces();
        let palette = problem.palette();
        let mut state = ColoringState::new(surfaces.len(), palette.len());
        let mut meter = SearchMeter::start(SearchLimits::unlimited());
        let mut previous = None;

        for (index, surface) in surfaces.iter().enumerate() {
            let area = surface.area();
            let color = (0..palette.len())
                .find(|&c| Some(c) != previous && state.usage(c) + area <= palette.budget(c))
                .ok_or_else(|| {
                    PaintError::Unsatisfiable(UnsatisfiableReason::NoColorFor(surface.id()))
                })?;

            meter.expand()?;
            state.commit(index, color, area);
            previous = Some(color);
        }

        if state.distinct() < problem.min_colors() {
            return Err(PaintError::Unsatisfiable(
                UnsatisfiableReason::MinColorsNotReached {
                    min_colors: problem.min_colors(),
                    used: state.distinct(),
                },
            ));
        }

        let stats = meter.finish();
        let assignment = state.to_assignment(surfaces, palette).ok_or_else(|| {
            PaintError::Unsatisfiable(UnsatisfiableReason::SearchSpaceExhausted {
                nodes_expanded: stats.nodes_expanded,
            })
        })?;
        debug!(surfaces = surfaces.len(), "sequential coloring done");
        Ok((assignment, stats))
    }
}
