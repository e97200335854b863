//! Completed color assignments and per-color paint usage.

use std::collections::{BTreeMap, BTreeSet};

use crate::palette::{ColorId, Palette};
use crate::surface::SurfaceId;

/// Area of paint consumed per color, in palette order.
///
/// Every palette color has an entry, unused colors at zero.
#[derive(Debug, Clone, PartialEq)]
pub struct PaintUsage {
    entries: Vec<(ColorId, f64)>,
}

impl PaintUsage {
    /// Creates zero usage for every color in the palette.
    #[must_use]
    pub fn zeroed(palette: &Palette) -> Self {
        Self {
            entries: palette.colors().iter().map(|c| (c.clone(), 0.0)).collect(),
        }
    }

    /// Builds usage from explicit `(color, area)` pairs.
    #[must_use]
    pub const fn from_entries(entries: Vec<(ColorId, f64)>) -> Self {
        Self { entries }
    }

    /// Area painted with `color`; zero for unknown colors.
    #[must_use]
    pub fn get(&self, color: &ColorId) -> f64 {
        self.entries
            .iter()
            .find(|(c, _)| c == color)
            .map_or(0.0, |(_, area)| *area)
    }

    /// Iterates `(color, area)` pairs in palette order.
    pub fn iter(&self) -> impl Iterator<Item = (&ColorId, f64)> + '_ {
        self.entries.iter().map(|(c, a)| (c, *a))
    }

    /// Total painted area.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.entries.iter().map(|(_, a)| a).sum()
    }

    /// Usage keyed by color.
    #[must_use]
    pub fn to_map(&self) -> BTreeMap<ColorId, f64> {
        self.entries.iter().cloned().collect()
    }
}

/// A complete mapping from surface to color, with the paint it consumes.
///
/// Only produced by a successful color search, so every surface of the input
/// appears exactly once, in input order.
///
/// # Example
///
/// ```
/// use paint_types::{Assignment, ColorId, PaintUsage, SurfaceId};
///
/// let assignment = Assignment::new(
///     vec![(SurfaceId(1), ColorId::from("White")), (SurfaceId(2), ColorId::from("Blue"))],
///     PaintUsage::from_entries(vec![
///         (ColorId::from("White"), 12.0),
///         (ColorId::from("Blue"), 12.0),
///     ]),
/// );
///
/// assert_eq!(assignment.color_of(SurfaceId(2)), Some(&ColorId::from("Blue")));
/// assert_eq!(assignment.distinct_colors(), 2);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Assignment {
    entries: Vec<(SurfaceId, ColorId)>,
    usage: PaintUsage,
}

impl Assignment {
    /// Creates an assignment from `(surface, color)` pairs and their usage.
    #[must_use]
    pub const fn new(entries: Vec<(SurfaceId, ColorId)>, usage: PaintUsage) -> Self {
        Self { entries, usage }
    }

    /// The color assigned to a surface.
    #[must_use]
    pub fn color_of(&self, surface: SurfaceId) -> Option<&ColorId> {
        self.entries
            .iter()
            .find(|(id, _)| *id == surface)
            .map(|(_, c)| c)
    }

    /// Iterates `(surface, color)` pairs in input order.
    pub fn iter(&self) -> impl Iterator<Item = (SurfaceId, &ColorId)> + '_ {
        self.entries.iter().map(|(id, c)| (*id, c))
    }

    /// Number of assigned surfaces.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no surface is assigned.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The set of colors actually used.
    #[must_use]
    pub fn colors_used(&self) -> BTreeSet<&ColorId> {
        self.entries.iter().map(|(_, c)| c).collect()
    }

    /// Number of distinct colors used.
    #[must_use]
    pub fn distinct_colors(&self) -> usize {
        self.colors_used().len()
    }

    /// Paint consumed per color.
    #[must_use]
    pub const fn paint_usage(&self) -> &PaintUsage {
        &self.usage
    }

    /// Assignment keyed by surface id.
    #[must_use]
    pub fn to_map(&self) -> BTreeMap<SurfaceId, ColorId> {
        self.entries.iter().cloned().collect()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn test_zeroed_usage_covers_palette() {
        let palette = Palette::unbounded(["Red".into(), "Blue".into()]);
        let usage = PaintUsage::zeroed(&palette);
        assert_eq!(usage.iter().count(), 2);
        assert_eq!(usage.total(), 0.0);
        assert_eq!(usage.get(&ColorId::from("Green")), 0.0);
    }

    #[test]
    fn test_usage_map() {
        let usage = PaintUsage::from_entries(vec![
            (ColorId::from("Red"), 2.5),
            (ColorId::from("Blue"), 4.0),
        ]);
        let map = usage.to_map();
        assert_eq!(map[&ColorId::from("Blue")], 4.0);
        assert_eq!(usage.total(), 6.5);
    }

    #[test]
    fn test_assignment_queries() {
        let assignment = Assignment::new(
            vec![
                (SurfaceId(3), ColorId::from("Red")),
                (SurfaceId(1), ColorId::from("Blue")),
                (SurfaceId(2), ColorId::from("Red")),
            ],
            PaintUsage::from_entries(vec![]),
        );

        assert_eq!(assignment.len(), 3);
        assert_eq!(assignment.distinct_colors(), 2);
        assert_eq!(assignment.color_of(SurfaceId(9)), None);

        let order: Vec<_> = assignment.iter().map(|(id, _)| id.0).collect();
        assert_eq!(order, [3, 1, 2]);

        let map = assignment.to_map();
        assert_eq!(map.keys().next(), Some(&SurfaceId(1)));
    }
}
