//! Bounded occupancy grid with passable door cells.

use hashbrown::HashSet;
use nalgebra::Point3;

use crate::error::SpatialError;
use crate::grid::GridBounds;
use crate::voxel::VoxelCoord;

/// Default cap on the number of cells a grid may span.
///
/// Rasterising a wall visits every cell it touches, so the cap bounds both
/// memory and build time.
pub const DEFAULT_MAX_CELLS: u64 = 8_000_000;

/// A bounded occupancy grid over a world-space box.
///
/// Cells are either free or blocked. Blocked cells are stored sparsely, so a
/// large room with a handful of walls costs little memory. Door cells override
/// blocking: a cell marked as a door is passable even if a wall was rasterised
/// through it, before or after the door was opened.
///
/// Everything outside [`bounds`](Self::bounds) is treated as blocked so a
/// search can never leave the modelled volume.
///
/// # Example
///
/// ```
/// use paint_spatial::{OccupancyGrid, VoxelCoord};
/// use nalgebra::Point3;
///
/// let mut grid = OccupancyGrid::new(
///     0.5,
///     Point3::new(0.0, 0.0, 0.0),
///     Point3::new(2.0, 2.0, 1.0),
/// ).unwrap();
///
/// assert_eq!(grid.world_to_grid(Point3::new(1.2, 0.4, 0.0)), VoxelCoord::new(2, 0, 0));
/// assert!(grid.is_free(VoxelCoord::new(4, 4, 2)));
/// assert!(!grid.is_free(VoxelCoord::new(5, 0, 0))); // outside the box
/// ```
#[derive(Debug, Clone)]
pub struct OccupancyGrid {
    /// Edge length of one cell in world units.
    voxel_size: f64,
    /// Cached reciprocal of `voxel_size`.
    inv_voxel_size: f64,
    /// World position of cell (0, 0, 0)'s minimum corner.
    origin: Point3<f64>,
    /// Cells that exist in this grid.
    bounds: GridBounds,
    /// Cells covered by wall geometry.
    blocked: HashSet<VoxelCoord>,
    /// Cells forced passable.
    doors: HashSet<VoxelCoord>,
}

impl OccupancyGrid {
    /// Creates an empty grid covering the box spanned by two world points.
    ///
    /// The minimum corner becomes the grid origin; the maximum corner lands in
    /// the last cell on each axis, so geometry lying exactly on the far face is
    /// still inside the grid.
    ///
    /// # Errors
    ///
    /// - [`SpatialError::InvalidVoxelSize`] if `voxel_size` is not positive and finite
    /// - [`SpatialError::NonFiniteExtent`] if a corner has a NaN or infinite coordinate
    /// - [`SpatialError::CoordinateOverflow`] if the box needs more than `i32::MAX` cells on an axis
    /// - [`SpatialError::GridTooLarge`] if the box spans more than [`DEFAULT_MAX_CELLS`] cells
    pub fn new(voxel_size: f64, a: Point3<f64>, b: Point3<f64>) -> Result<Self, SpatialError> {
        Self::with_max_cells(voxel_size, a, b, DEFAULT_MAX_CELLS)
    }

    /// Creates an empty grid like [`new`](Self::new) with a custom cell cap.
    ///
    /// # Errors
    ///
    /// Same as [`new`](Self::new), with `max_cells` as the size limit.
    ///
    /// # Example
    ///
    /// ```
    /// use paint_spatial::{OccupancyGrid, SpatialError};
    /// use nalgebra::Point3;
    ///
    /// // A 1000m x 1000m floor at 1cm cells
    /// let result = OccupancyGrid::with_max_cells(
    ///     0.01,
    ///     Point3::new(0.0, 0.0, 0.0),
    ///     Point3::new(1000.0, 1000.0, 0.0),
    ///     1_000_000,
    /// );
    /// assert!(matches!(result, Err(SpatialError::GridTooLarge { .. })));
    /// ```
    pub fn with_max_cells(
        voxel_size: f64,
        a: Point3<f64>,
        b: Point3<f64>,
        max_cells: u64,
    ) -> Result<Self, SpatialError> {
        if voxel_size <= 0.0 || !voxel_size.is_finite() {
            return Err(SpatialError::InvalidVoxelSize(voxel_size));
        }
        if !a.iter().chain(b.iter()).all(|v| v.is_finite()) {
            return Err(SpatialError::NonFiniteExtent);
        }

        let origin = Point3::new(a.x.min(b.x), a.y.min(b.y), a.z.min(b.z));
        let far = Point3::new(a.x.max(b.x), a.y.max(b.y), a.z.max(b.z));
        let inv_voxel_size = 1.0 / voxel_size;

        let cells = |extent: f64| -> Result<i32, SpatialError> {
            let n = (extent * inv_voxel_size).floor();
            if n > f64::from(i32::MAX) {
                return Err(SpatialError::CoordinateOverflow);
            }
            #[allow(clippy::cast_possible_truncation)]
            Ok(n as i32)
        };

        let max = VoxelCoord::new(
            cells(far.x - origin.x)?,
            cells(far.y - origin.y)?,
            cells(far.z - origin.z)?,
        );

        let bounds = GridBounds::new(VoxelCoord::origin(), max);
        let volume = bounds.volume();
        if volume > max_cells {
            return Err(SpatialError::GridTooLarge {
                cells: volume,
                max: max_cells,
            });
        }

        Ok(Self {
            voxel_size,
            inv_voxel_size,
            origin,
            bounds,
            blocked: HashSet::new(),
            doors: HashSet::new(),
        })
    }

    /// Returns the cell edge length.
    #[must_use]
    pub const fn voxel_size(&self) -> f64 {
        self.voxel_size
    }

    /// Returns the world position of the grid origin.
    #[must_use]
    pub const fn origin(&self) -> &Point3<f64> {
        &self.origin
    }

    /// Returns the cells that exist in this grid.
    #[must_use]
    pub const fn bounds(&self) -> &GridBounds {
        &self.bounds
    }

    /// Returns the number of cells covered by walls (doors included).
    #[must_use]
    pub fn blocked_count(&self) -> usize {
        self.blocked.len()
    }

    /// Returns the number of door cells.
    #[must_use]
    pub fn door_count(&self) -> usize {
        self.doors.len()
    }

    /// Converts a world point to the cell containing it.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn world_to_grid(&self, point: Point3<f64>) -> VoxelCoord {
        let relative = point - self.origin;
        // `as` saturates, which keeps far-away points outside the bounds
        VoxelCoord::new(
            (relative.x * self.inv_voxel_size).floor() as i32,
            (relative.y * self.inv_voxel_size).floor() as i32,
            (relative.z * self.inv_voxel_size).floor() as i32,
        )
    }

    /// Converts a cell to the world position of its centre.
    #[must_use]
    pub fn grid_to_world_center(&self, coord: VoxelCoord) -> Point3<f64> {
        let half = self.voxel_size * 0.5;
        Point3::new(
            f64::from(coord.x).mul_add(self.voxel_size, self.origin.x) + half,
            f64::from(coord.y).mul_add(self.voxel_size, self.origin.y) + half,
            f64::from(coord.z).mul_add(self.voxel_size, self.origin.z) + half,
        )
    }

    /// Marks a single cell as blocked. Cells outside the bounds are ignored.
    ///
    /// Returns `true` if the cell was newly blocked.
    pub fn block(&mut self, coord: VoxelCoord) -> bool {
        self.bounds.contains(coord) && self.blocked.insert(coord)
    }

    /// Blocks every cell touched by the closed world-space box `[a, b]`.
    ///
    /// A wall rectangle is a box that is flat along one axis, so this is how
    /// surfaces are rasterised. Returns the number of newly blocked cells.
    ///
    /// # Example
    ///
    /// ```
    /// use paint_spatial::OccupancyGrid;
    /// use nalgebra::Point3;
    ///
    /// let mut grid = OccupancyGrid::new(
    ///     1.0,
    ///     Point3::new(0.0, 0.0, 0.0),
    ///     Point3::new(4.0, 4.0, 3.0),
    /// ).unwrap();
    ///
    /// // 4m wide, 3m tall wall at y = 0: 5 x 1 x 4 cells
    /// let n = grid.block_box(Point3::new(0.0, 0.0, 0.0), Point3::new(4.0, 0.0, 3.0));
    /// assert_eq!(n, 20);
    /// ```
    pub fn block_box(&mut self, a: Point3<f64>, b: Point3<f64>) -> usize {
        let cells = GridBounds::new(self.world_to_grid(a), self.world_to_grid(b));
        let Some(cells) = cells.intersection(&self.bounds) else {
            return 0;
        };
        cells.iter().filter(|&c| self.blocked.insert(c)).count()
    }

    /// Marks the cell containing a world point as a door and returns it.
    ///
    /// Door cells are passable regardless of wall geometry. A door outside
    /// the bounds is recorded but has no effect on searches.
    pub fn open_door(&mut self, point: Point3<f64>) -> VoxelCoord {
        let coord = self.world_to_grid(point);
        self.doors.insert(coord);
        coord
    }

    /// Returns `true` if the cell is a door.
    #[must_use]
    pub fn is_door(&self, coord: VoxelCoord) -> bool {
        self.doors.contains(&coord)
    }

    /// Returns `true` if wall geometry covers the cell and it is not a door.
    #[must_use]
    pub fn is_blocked(&self, coord: VoxelCoord) -> bool {
        self.blocked.contains(&coord) && !self.doors.contains(&coord)
    }

    /// Returns `true` if the cell is inside the grid and passable.
    #[must_use]
    pub fn is_free(&self, coord: VoxelCoord) -> bool {
        self.bounds.contains(coord) && !self.is_blocked(coord)
    }

    /// Finds the free cell closest to `coord` within `max_radius` rings.
    ///
    /// Rings are searched outward by Chebyshev distance; inside the first ring
    /// that has a free cell, the one nearest by Euclidean distance wins, with
    /// ties going to the first cell in X-fastest iteration order. Radius 0 is
    /// the cell itself.
    ///
    /// # Example
    ///
    /// ```
    /// use paint_spatial::{OccupancyGrid, VoxelCoord};
    /// use nalgebra::Point3;
    ///
    /// let mut grid = OccupancyGrid::new(
    ///     1.0,
    ///     Point3::new(0.0, 0.0, 0.0),
    ///     Point3::new(4.0, 4.0, 0.0),
    /// ).unwrap();
    /// grid.block_box(Point3::new(0.0, 0.0, 0.0), Point3::new(4.0, 0.0, 0.0));
    ///
    /// let snapped = grid.nearest_free(VoxelCoord::new(2, 0, 0), 2);
    /// assert_eq!(snapped, Some(VoxelCoord::new(2, 1, 0)));
    /// ```
    #[must_use]
    pub fn nearest_free(&self, coord: VoxelCoord, max_radius: u32) -> Option<VoxelCoord> {
        for radius in 0..=max_radius {
            let Some(ring) = GridBounds::around(coord, radius).intersection(&self.bounds) else {
                continue;
            };

            let mut best: Option<(VoxelCoord, f64)> = None;
            for cell in ring.iter() {
                if cell.chebyshev_distance(coord) != radius || !self.is_free(cell) {
                    continue;
                }
                let d = cell.euclidean_distance(coord);
                if best.is_none_or(|(_, best_d)| d < best_d) {
                    best = Some((cell, d));
                }
            }

            if let Some((cell, _)) = best {
                return Some(cell);
            }
        }
        None
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn room() -> OccupancyGrid {
        OccupancyGrid::new(1.0, Point3::new(0.0, 0.0, 0.0), Point3::new(4.0, 4.0, 3.0)).unwrap()
    }

    #[test]
    fn test_invalid_voxel_size() {
        let origin = Point3::origin();
        assert_eq!(
            OccupancyGrid::new(0.0, origin, origin).unwrap_err(),
            SpatialError::InvalidVoxelSize(0.0)
        );
        assert!(matches!(
            OccupancyGrid::new(f64::NAN, origin, origin),
            Err(SpatialError::InvalidVoxelSize(_))
        ));
    }

    #[test]
    fn test_non_finite_extent() {
        let result = OccupancyGrid::new(
            1.0,
            Point3::origin(),
            Point3::new(f64::INFINITY, 0.0, 0.0),
        );
        assert_eq!(result.unwrap_err(), SpatialError::NonFiniteExtent);
    }

    #[test]
    fn test_overflow_extent() {
        let result = OccupancyGrid::new(1e-9, Point3::origin(), Point3::new(1e9, 0.0, 0.0));
        assert_eq!(result.unwrap_err(), SpatialError::CoordinateOverflow);
    }

    #[test]
    fn test_oversized_grid_rejected() {
        // 100001 x 100001 cells for a 1000m ceiling at 1cm
        let result = OccupancyGrid::new(
            0.01,
            Point3::origin(),
            Point3::new(1000.0, 1000.0, 0.0),
        );
        match result.unwrap_err() {
            SpatialError::GridTooLarge { cells, max } => {
                assert!(cells > 10_000_000_000);
                assert_eq!(max, DEFAULT_MAX_CELLS);
            }
            other => panic!("expected a size error, got {other:?}"),
        }
    }

    #[test]
    fn test_cell_cap_is_inclusive() {
        let a = Point3::origin();
        let b = Point3::new(4.0, 4.0, 3.0);
        assert!(OccupancyGrid::with_max_cells(1.0, a, b, 100).is_ok());
        assert!(matches!(
            OccupancyGrid::with_max_cells(1.0, a, b, 99),
            Err(SpatialError::GridTooLarge { cells: 100, max: 99 })
        ));
    }

    #[test]
    fn test_bounds_include_far_face() {
        let grid = room();
        assert_eq!(grid.bounds().max, VoxelCoord::new(4, 4, 3));
        assert_eq!(grid.bounds().volume(), 5 * 5 * 4);
    }

    #[test]
    fn test_origin_is_min_corner() {
        let grid =
            OccupancyGrid::new(1.0, Point3::new(2.0, 2.0, 2.0), Point3::new(-2.0, 0.0, 0.0))
                .unwrap();
        assert_eq!(grid.origin(), &Point3::new(-2.0, 0.0, 0.0));
        assert_eq!(
            grid.world_to_grid(Point3::new(-2.0, 0.0, 0.0)),
            VoxelCoord::origin()
        );
    }

    #[test]
    fn test_grid_to_world_center() {
        let grid = room();
        let c = grid.grid_to_world_center(VoxelCoord::new(1, 2, 0));
        assert_relative_eq!(c.x, 1.5, epsilon = 1e-12);
        assert_relative_eq!(c.y, 2.5, epsilon = 1e-12);
        assert_relative_eq!(c.z, 0.5, epsilon = 1e-12);
    }

    #[test]
    fn test_block_box_wall() {
        let mut grid = room();
        let n = grid.block_box(Point3::new(4.0, 0.0, 0.0), Point3::new(4.0, 4.0, 3.0));
        assert_eq!(n, 5 * 4);
        assert!(grid.is_blocked(VoxelCoord::new(4, 2, 1)));
        assert!(grid.is_free(VoxelCoord::new(3, 2, 1)));

        // Re-blocking the same wall adds nothing
        assert_eq!(
            grid.block_box(Point3::new(4.0, 0.0, 0.0), Point3::new(4.0, 4.0, 3.0)),
            0
        );
    }

    #[test]
    fn test_block_outside_bounds_ignored() {
        let mut grid = room();
        assert!(!grid.block(VoxelCoord::new(9, 0, 0)));
        assert_eq!(
            grid.block_box(Point3::new(10.0, 10.0, 0.0), Point3::new(12.0, 12.0, 0.0)),
            0
        );
        assert_eq!(grid.blocked_count(), 0);
    }

    #[test]
    fn test_door_overrides_wall() {
        let mut grid = room();
        let door = grid.open_door(Point3::new(4.0, 2.0, 0.0));
        grid.block_box(Point3::new(4.0, 0.0, 0.0), Point3::new(4.0, 4.0, 3.0));

        assert_eq!(door, VoxelCoord::new(4, 2, 0));
        assert!(grid.is_door(door));
        assert!(grid.is_free(door));
        assert!(grid.is_blocked(VoxelCoord::new(4, 2, 1)));
        assert_eq!(grid.door_count(), 1);
    }

    #[test]
    fn test_nearest_free_self() {
        let grid = room();
        let c = VoxelCoord::new(2, 2, 1);
        assert_eq!(grid.nearest_free(c, 0), Some(c));
    }

    #[test]
    fn test_nearest_free_prefers_face_neighbor() {
        let mut grid = room();
        grid.block(VoxelCoord::new(2, 2, 1));
        let snapped = grid.nearest_free(VoxelCoord::new(2, 2, 1), 1).unwrap();
        assert_eq!(snapped.chebyshev_distance(VoxelCoord::new(2, 2, 1)), 1);
        assert_eq!(snapped.manhattan_distance(VoxelCoord::new(2, 2, 1)), 1);
    }

    #[test]
    fn test_nearest_free_corner_of_room() {
        let mut grid = room();
        grid.block_box(Point3::new(0.0, 0.0, 0.0), Point3::new(4.0, 0.0, 3.0));
        grid.block_box(Point3::new(0.0, 0.0, 0.0), Point3::new(0.0, 4.0, 3.0));
        assert_eq!(
            grid.nearest_free(VoxelCoord::origin(), 2),
            Some(VoxelCoord::new(1, 1, 0))
        );
    }

    #[test]
    fn test_nearest_free_none() {
        let mut grid = room();
        grid.block_box(Point3::new(0.0, 0.0, 0.0), Point3::new(4.0, 4.0, 3.0));
        assert_eq!(grid.nearest_free(VoxelCoord::new(2, 2, 1), 3), None);
    }
}
