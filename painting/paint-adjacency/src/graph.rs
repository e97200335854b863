//! Symmetric neighbour map between surfaces.

use std::collections::{BTreeMap, BTreeSet};

use paint_types::SurfaceId;

/// Which surfaces touch which.
///
/// Every surface handed to the analyzer has an entry, possibly empty.
/// Neighbour sets are ordered so iteration is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdjacencyGraph {
    neighbors: BTreeMap<SurfaceId, BTreeSet<SurfaceId>>,
}

impl AdjacencyGraph {
    /// Creates a graph with the given surfaces and no edges.
    #[must_use]
    pub fn with_surfaces(ids: impl IntoIterator<Item = SurfaceId>) -> Self {
        Self {
            neighbors: ids.into_iter().map(|id| (id, BTreeSet::new())).collect(),
        }
    }

    /// Records that `a` and `b` touch. Self-loops are ignored.
    ///
    /// Returns `true` if the edge was new.
    pub fn connect(&mut self, a: SurfaceId, b: SurfaceId) -> bool {
        if a == b {
            return false;
        }
        let inserted = self.neighbors.entry(a).or_default().insert(b);
        self.neighbors.entry(b).or_default().insert(a);
        inserted
    }

    /// Neighbours of a surface, in id order.
    ///
    /// Unknown surfaces have no neighbours.
    pub fn neighbors(&self, id: SurfaceId) -> impl Iterator<Item = SurfaceId> + '_ {
        self.neighbors
            .get(&id)
            .into_iter()
            .flat_map(|set| set.iter().copied())
    }

    /// Number of neighbours of a surface.
    #[must_use]
    pub fn degree(&self, id: SurfaceId) -> usize {
        self.neighbors.get(&id).map_or(0, BTreeSet::len)
    }

    /// Whether `a` and `b` touch.
    #[must_use]
    pub fn are_adjacent(&self, a: SurfaceId, b: SurfaceId) -> bool {
        self.neighbors.get(&a).is_some_and(|set| set.contains(&b))
    }

    /// Number of surfaces in the graph.
    #[must_use]
    pub fn surface_count(&self) -> usize {
        self.neighbors.len()
    }

    /// Number of unordered adjacent pairs.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.neighbors.values().map(BTreeSet::len).sum::<usize>() / 2
    }

    /// Every unordered adjacent pair once, smaller id first.
    pub fn edges(&self) -> impl Iterator<Item = (SurfaceId, SurfaceId)> + '_ {
        self.neighbors.iter().flat_map(|(&a, set)| {
            set.range((std::ops::Bound::Excluded(a), std::ops::Bound::Unbounded))
                .map(move |&b| (a, b))
        })
    }

    /// Checks that `b` lists `a` whenever `a` lists `b`.
    #[must_use]
    pub fn is_symmetric(&self) -> bool {
        self.neighbors
            .iter()
            .all(|(&a, set)| set.iter().all(|&b| self.are_adjacent(b, a)))
    }
}
