//! Passable neighbours of a cell on an occupancy grid.

use paint_spatial::{OccupancyGrid, VoxelCoord};

use crate::heuristics::move_cost;

/// Yields the passable neighbours of a cell, with step lengths.
///
/// Cells outside the grid bounds are never yielded, so searches stay inside
/// the box the grid was built for.
///
/// # Example
///
/// ```
/// use paint_spatial::{OccupancyGrid, VoxelCoord};
/// use nalgebra::Point3;
/// use tour_pathfind::neighbors::NeighborGenerator;
///
/// let grid = OccupancyGrid::new(1.0, Point3::origin(), Point3::new(4.0, 4.0, 4.0)).unwrap();
/// let generator = NeighborGenerator::new(&grid).with_diagonal(false);
///
/// // A corner cell has three face neighbours inside the bounds
/// assert_eq!(generator.neighbors(VoxelCoord::origin()).count(), 3);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct NeighborGenerator<'a> {
    grid: &'a OccupancyGrid,
    allow_diagonal: bool,
}

impl<'a> NeighborGenerator<'a> {
    /// Creates a generator with 6-connectivity.
    #[must_use]
    pub const fn new(grid: &'a OccupancyGrid) -> Self {
        Self {
            grid,
            allow_diagonal: false,
        }
    }

    /// Sets whether diagonal moves are allowed.
    ///
    /// - `true`: 26-connectivity
    /// - `false`: 6-connectivity (face neighbours only)
    #[must_use]
    pub const fn with_diagonal(mut self, allow: bool) -> Self {
        self.allow_diagonal = allow;
        self
    }

    /// Passable neighbours of `coord`.
    pub fn neighbors(&self, coord: VoxelCoord) -> impl Iterator<Item = VoxelCoord> + 'a {
        let candidates: Vec<VoxelCoord> = if self.allow_diagonal {
            coord.all_neighbors().to_vec()
        } else {
            coord.face_neighbors().to_vec()
        };
        let grid = self.grid;
        candidates.into_iter().filter(move |&n| grid.is_free(n))
    }

    /// Passable neighbours of `coord` with the length of each step.
    pub fn successors(&self, coord: VoxelCoord) -> impl Iterator<Item = (VoxelCoord, f64)> + 'a {
        self.neighbors(coord).map(move |n| (n, move_cost(coord, n)))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use nalgebra::Point3;

    fn grid() -> OccupancyGrid {
        OccupancyGrid::new(1.0, Point3::origin(), Point3::new(4.0, 4.0, 4.0)).unwrap()
    }

    #[test]
    fn test_interior_cell_connectivity() {
        let grid = grid();
        let center = VoxelCoord::new(2, 2, 2);
        assert_eq!(NeighborGenerator::new(&grid).neighbors(center).count(), 6);
        assert_eq!(
            NeighborGenerator::new(&grid)
                .with_diagonal(true)
                .neighbors(center)
                .count(),
            26
        );
    }

    #[test]
    fn test_blocked_cells_skipped_doors_kept() {
        let mut grid = grid();
        grid.block(VoxelCoord::new(3, 2, 2));
        grid.block(VoxelCoord::new(1, 2, 2));
        grid.open_door(Point3::new(1.5, 2.5, 2.5));

        let neighbors: Vec<_> = NeighborGenerator::new(&grid)
            .neighbors(VoxelCoord::new(2, 2, 2))
            .collect();
        assert_eq!(neighbors.len(), 5);
        assert!(neighbors.contains(&VoxelCoord::new(1, 2, 2)));
        assert!(!neighbors.contains(&VoxelCoord::new(3, 2, 2)));
    }

    #[test]
    fn test_successor_costs() {
        let grid = grid();
        let generator = NeighborGenerator::new(&grid).with_diagonal(true);
        let costs: Vec<f64> = generator
            .successors(VoxelCoord::new(2, 2, 2))
            .map(|(_, c)| c)
            .collect();
        assert_eq!(costs.iter().filter(|&&c| (c - 1.0).abs() < 1e-12).count(), 6);
        assert_eq!(
            costs
                .iter()
                .filter(|&&c| (c - 3.0_f64.sqrt()).abs() < 1e-12)
                .count(),
            8
        );
    }
}
