//! Inclusive bounds in cell space.

use crate::voxel::VoxelCoord;

/// Axis-aligned bounds in cell space. Both corners are inclusive.
///
/// # Example
///
/// ```
/// use paint_spatial::{GridBounds, VoxelCoord};
///
/// let bounds = GridBounds::new(VoxelCoord::new(4, 4, 4), VoxelCoord::new(0, 0, 0));
/// assert_eq!(bounds.min, VoxelCoord::new(0, 0, 0));
/// assert!(bounds.contains(VoxelCoord::new(4, 0, 2)));
/// assert!(!bounds.contains(VoxelCoord::new(5, 0, 2)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridBounds {
    /// Minimum corner (inclusive).
    pub min: VoxelCoord,
    /// Maximum corner (inclusive).
    pub max: VoxelCoord,
}

impl GridBounds {
    /// Creates bounds spanning two corners, ordering them per axis.
    #[must_use]
    pub fn new(a: VoxelCoord, b: VoxelCoord) -> Self {
        Self {
            min: VoxelCoord::new(a.x.min(b.x), a.y.min(b.y), a.z.min(b.z)),
            max: VoxelCoord::new(a.x.max(b.x), a.y.max(b.y), a.z.max(b.z)),
        }
    }

    /// Creates the cube of cells within Chebyshev distance `radius` of `center`.
    ///
    /// # Example
    ///
    /// ```
    /// use paint_spatial::{GridBounds, VoxelCoord};
    ///
    /// let cube = GridBounds::around(VoxelCoord::new(1, 1, 1), 1);
    /// assert_eq!(cube.volume(), 27);
    /// ```
    #[must_use]
    pub fn around(center: VoxelCoord, radius: u32) -> Self {
        let r = i32::try_from(radius).unwrap_or(i32::MAX);
        Self {
            min: VoxelCoord::new(
                center.x.saturating_sub(r),
                center.y.saturating_sub(r),
                center.z.saturating_sub(r),
            ),
            max: VoxelCoord::new(
                center.x.saturating_add(r),
                center.y.saturating_add(r),
                center.z.saturating_add(r),
            ),
        }
    }

    /// Returns the number of cells per axis.
    #[must_use]
    pub const fn size(&self) -> (u32, u32, u32) {
        (
            self.max.x.abs_diff(self.min.x).saturating_add(1),
            self.max.y.abs_diff(self.min.y).saturating_add(1),
            self.max.z.abs_diff(self.min.z).saturating_add(1),
        )
    }

    /// Returns the total number of cells.
    #[must_use]
    pub fn volume(&self) -> u64 {
        let (w, h, d) = self.size();
        u64::from(w)
            .saturating_mul(u64::from(h))
            .saturating_mul(u64::from(d))
    }

    /// Checks whether a cell lies inside the bounds.
    #[must_use]
    pub const fn contains(&self, coord: VoxelCoord) -> bool {
        coord.x >= self.min.x
            && coord.x <= self.max.x
            && coord.y >= self.min.y
            && coord.y <= self.max.y
            && coord.z >= self.min.z
            && coord.z <= self.max.z
    }

    /// Returns the overlap of two bounds, or `None` if they are disjoint.
    #[must_use]
    pub fn intersection(&self, other: &Self) -> Option<Self> {
        let min = VoxelCoord::new(
            self.min.x.max(other.min.x),
            self.min.y.max(other.min.y),
            self.min.z.max(other.min.z),
        );
        let max = VoxelCoord::new(
            self.max.x.min(other.max.x),
            self.max.y.min(other.max.y),
            self.max.z.min(other.max.z),
        );

        if min.x <= max.x && min.y <= max.y && min.z <= max.z {
            Some(Self { min, max })
        } else {
            None
        }
    }

    /// Iterates every cell, X fastest, then Y, then Z.
    #[must_use]
    pub const fn iter(&self) -> GridBoundsIter {
        GridBoundsIter {
            bounds: *self,
            current: Some(self.min),
        }
    }
}

/// Iterator over the cells of a [`GridBounds`].
#[derive(Debug, Clone)]
pub struct GridBoundsIter {
    bounds: GridBounds,
    current: Option<VoxelCoord>,
}

impl Iterator for GridBoundsIter {
    type Item = VoxelCoord;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.current?;

        let mut next = current;
        if next.x < self.bounds.max.x {
            next.x += 1;
        } else if next.y < self.bounds.max.y {
            next.x = self.bounds.min.x;
            next.y += 1;
        } else if next.z < self.bounds.max.z {
            next.x = self.bounds.min.x;
            next.y = self.bounds.min.y;
            next.z += 1;
        } else {
            self.current = None;
            return Some(current);
        }
        self.current = Some(next);

        Some(current)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_new_orders_corners() {
        let bounds = GridBounds::new(VoxelCoord::new(3, -1, 2), VoxelCoord::new(0, 4, 2));
        assert_eq!(bounds.min, VoxelCoord::new(0, -1, 2));
        assert_eq!(bounds.max, VoxelCoord::new(3, 4, 2));
        assert_eq!(bounds.size(), (4, 6, 1));
    }

    #[test]
    fn test_iter_visits_every_cell_once() {
        let bounds = GridBounds::new(VoxelCoord::new(0, 0, 0), VoxelCoord::new(2, 1, 1));
        let cells: Vec<_> = bounds.iter().collect();
        assert_eq!(cells.len(), 12);
        assert_eq!(cells[0], VoxelCoord::new(0, 0, 0));
        assert_eq!(cells[1], VoxelCoord::new(1, 0, 0));
        assert_eq!(cells[3], VoxelCoord::new(0, 1, 0));
        assert_eq!(cells[11], VoxelCoord::new(2, 1, 1));
    }

    #[test]
    fn test_iter_single_cell() {
        let bounds = GridBounds::new(VoxelCoord::new(7, 7, 7), VoxelCoord::new(7, 7, 7));
        assert_eq!(bounds.iter().count(), 1);
    }

    #[test]
    fn test_intersection() {
        let a = GridBounds::new(VoxelCoord::new(0, 0, 0), VoxelCoord::new(4, 4, 4));
        let b = GridBounds::around(VoxelCoord::new(4, 4, 4), 2);
        let overlap = a.intersection(&b).unwrap();
        assert_eq!(overlap.min, VoxelCoord::new(2, 2, 2));
        assert_eq!(overlap.max, VoxelCoord::new(4, 4, 4));

        let far = GridBounds::around(VoxelCoord::new(20, 20, 20), 1);
        assert!(a.intersection(&far).is_none());
    }
}
