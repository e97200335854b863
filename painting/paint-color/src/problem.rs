//! The inputs of one color assignment.

use std::collections::BTreeMap;

use paint_adjacency::AdjacencyGraph;
use paint_types::{PaintError, Palette, Surface, SurfaceId, UnsatisfiableReason};

/// Surfaces, adjacency, palette and diversity requirement for one search.
///
/// Surfaces are colored in slice order, and colors are tried in palette
/// order, so the same problem always yields the same assignment.
#[derive(Debug, Clone, Copy)]
pub struct ColoringProblem<'a> {
    surfaces: &'a [Surface],
    graph: &'a AdjacencyGraph,
    palette: &'a Palette,
    adjacency_constraint: bool,
    min_colors: usize,
}

impl<'a> ColoringProblem<'a> {
    /// Creates a problem with the adjacency constraint on and `min_colors = 3`.
    #[must_use]
    pub const fn new(
        surfaces: &'a [Surface],
        graph: &'a AdjacencyGraph,
        palette: &'a Palette,
    ) -> Self {
        Self {
            surfaces,
            graph,
            palette,
            adjacency_constraint: true,
            min_colors: 3,
        }
    }

    /// Sets whether adjacent surfaces must differ.
    #[must_use]
    pub const fn with_adjacency_constraint(mut self, enabled: bool) -> Self {
        self.adjacency_constraint = enabled;
        self
    }

    /// Sets the minimum number of distinct colors.
    #[must_use]
    pub const fn with_min_colors(mut self, min_colors: usize) -> Self {
        self.min_colors = min_colors;
        self
    }

    /// Surfaces in coloring order.
    #[must_use]
    pub const fn surfaces(&self) -> &'a [Surface] {
        self.surfaces
    }

    /// The adjacency graph.
    #[must_use]
    pub const fn graph(&self) -> &'a AdjacencyGraph {
        self.graph
    }

    /// The palette.
    #[must_use]
    pub const fn palette(&self) -> &'a Palette {
        self.palette
    }

    /// Whether adjacent surfaces must differ.
    #[must_use]
    pub const fn adjacency_constraint(&self) -> bool {
        self.adjacency_constraint
    }

    /// Minimum number of distinct colors.
    #[must_use]
    pub const fn min_colors(&self) -> usize {
        self.min_colors
    }

    /// Rejects problems whose diversity requirement cannot be met at all.
    ///
    /// # Errors
    ///
    /// [`PaintError::Unsatisfiable`] when `min_colors` exceeds the number of
    /// surfaces or the palette size.
    pub fn check_counts(&self) -> Result<(), PaintError> {
        if self.min_colors > self.surfaces.len() {
            return Err(PaintError::Unsatisfiable(
                UnsatisfiableReason::TooFewSurfaces {
                    min_colors: self.min_colors,
                    surfaces: self.surfaces.len(),
                },
            ));
        }
        if self.min_colors > self.palette.len() {
            return Err(PaintError::Unsatisfiable(UnsatisfiableReason::TooFewColors {
                min_colors: self.min_colors,
                palette: self.palette.len(),
            }));
        }
        Ok(())
    }

    /// Neighbours of each surface as indices into [`surfaces`](Self::surfaces).
    ///
    /// Graph entries for surfaces outside this problem are dropped.
    #[must_use]
    pub fn neighbor_indices(&self) -> Vec<Vec<usize>> {
        let index: BTreeMap<SurfaceId, usize> = self
            .surfaces
            .iter()
            .enumerate()
            .map(|(i, s)| (s.id(), i))
            .collect();

        self.surfaces
            .iter()
            .map(|s| {
                self.graph
                    .neighbors(s.id())
                    .filter_map(|n| index.get(&n).copied())
                    .collect()
            })
            .collect()
    }
}
