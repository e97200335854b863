//! Mutable coloring state with an undo trail.
//!
//! Every commit pushes one [`TrailEntry`]; backtracking pops exactly that
//! entry and restores usage, per-color surface counts and the distinct-color
//! count. Nothing else mutates the state, so after `undo` the state equals
//! what it was before the matching `commit`.

use paint_types::{Assignment, PaintUsage, Palette, Surface};

/// One committed color choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct TrailEntry {
    surface: usize,
    color: usize,
}

/// Partial assignment shared by the whole search.
#[derive(Debug, Clone)]
pub(crate) struct ColoringState {
    /// Chosen palette index per surface.
    choice: Vec<Option<usize>>,
    /// Painted area per palette color.
    usage: Vec<f64>,
    /// Surfaces currently holding each palette color.
    holders: Vec<usize>,
    /// Colors with at least one holder.
    distinct: usize,
    trail: Vec<TrailEntry>,
}

impl ColoringState {
    pub(crate) fn new(surfaces: usize, colors: usize) -> Self {
        Self {
            choice: vec![None; surfaces],
            usage: vec![0.0; colors],
            holders: vec![0; colors],
            distinct: 0,
            trail: Vec::with_capacity(surfaces),
        }
    }

    pub(crate) fn choice(&self, surface: usize) -> Option<usize> {
        self.choice[surface]
    }

    pub(crate) fn usage(&self, color: usize) -> f64 {
        self.usage[color]
    }

    pub(crate) fn is_used(&self, color: usize) -> bool {
        self.holders[color] > 0
    }

    pub(crate) const fn distinct(&self) -> usize {
        self.distinct
    }

    pub(crate) fn depth(&self) -> usize {
        self.trail.len()
    }

    pub(crate) fn commit(&mut self, surface: usize, color: usize, area: f64) {
        debug_assert!(self.choice[surface].is_none());
        self.choice[surface] = Some(color);
        self.usage[color] += area;
        if self.holders[color] == 0 {
            self.distinct += 1;
        }
        self.holders[color] += 1;
        self.trail.push(TrailEntry { surface, color });
    }

    /// Reverts the latest commit and returns it.
    pub(crate) fn undo(&mut self, surfaces: &[Surface]) -> Option<(usize, usize)> {
        let TrailEntry { surface, color } = self.trail.pop()?;
        self.choice[surface] = None;
        self.holders[color] -= 1;
        if self.holders[color] == 0 {
            self.distinct -= 1;
            // Drop accumulated rounding so an unused color is exactly empty
            self.usage[color] = 0.0;
        } else {
            self.usage[color] -= surfaces[surface].area();
        }
        Some((surface, color))
    }

    /// Freezes a complete state into an [`Assignment`].
    ///
    /// Returns `None` if any surface is still uncolored.
    pub(crate) fn to_assignment(&self, surfaces: &[Surface], palette: &Palette) -> Option<Assignment> {
        let entries = surfaces
            .iter()
            .zip(&self.choice)
            .map(|(s, c)| c.map(|c| (s.id(), palette.color(c).clone())))
            .collect::<Option<Vec<_>>>()?;

        let usage = PaintUsage::from_entries(
            palette
                .colors()
                .iter()
                .cloned()
                .zip(self.usage.iter().copied())
                .collect(),
        );
        Some(Assignment::new(entries, usage))
    }
}
