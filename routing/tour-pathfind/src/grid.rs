//! Door-aware tours over a voxel occupancy grid.
//!
//! Walls are rasterised into blocked cells, door cells are carved back out,
//! and the agent walks cell to cell. Each leg is a best-first search from the
//! current cell that stops at whichever remaining goal it reaches first.

use std::cell::Cell;
use std::time::Instant;

use nalgebra::Point3;
use paint_spatial::{OccupancyGrid, VoxelCoord};
use paint_types::{GridConfig, PaintError, Surface, Tour, TourStop};
use pathfinding::prelude::astar;
use tracing::{debug, warn};

use crate::TourPlanner;
use crate::heuristics::{nearest_goal_estimate, scale_cost};
use crate::neighbors::NeighborGenerator;

/// Builds the occupancy grid for a set of surfaces.
///
/// The grid covers the bounding box of every surface corner, every door and
/// the start. Each surface rectangle (edges included) blocks the cells it
/// touches; door cells stay passable.
///
/// # Errors
///
/// Returns [`PaintError::Spatial`] if the voxel size is invalid, the box is
/// too large to index, or it spans more than `config.max_cells()` cells.
///
/// # Example
///
/// ```
/// use nalgebra::Point3;
/// use paint_spatial::VoxelCoord;
/// use paint_types::{GridConfig, Orientation, Surface, SurfaceId};
/// use tour_pathfind::build_occupancy;
///
/// let wall = Surface::new(SurfaceId(1), 2.0, 4.0, Point3::new(0.0, 2.0, 0.0), Orientation::VerticalX);
/// let grid = build_occupancy(
///     &[wall],
///     &[Point3::new(1.0, 2.0, 0.0)],
///     Point3::origin(),
///     &GridConfig::default(),
/// )
/// .unwrap();
///
/// assert!(grid.is_blocked(VoxelCoord::new(3, 2, 0)));
/// assert!(grid.is_free(VoxelCoord::new(1, 2, 0)));
/// ```
pub fn build_occupancy(
    surfaces: &[Surface],
    doors: &[Point3<f64>],
    start: Point3<f64>,
    config: &GridConfig,
) -> Result<OccupancyGrid, PaintError> {
    let mut lo = start;
    let mut hi = start;
    let points = surfaces
        .iter()
        .flat_map(Surface::corners)
        .chain(doors.iter().copied());
    for p in points {
        lo = lo.inf(&p);
        hi = hi.sup(&p);
    }

    let mut grid = OccupancyGrid::with_max_cells(config.voxel_size(), lo, hi, config.max_cells())?;
    for surface in surfaces {
        let (a, b) = surface.bounds();
        grid.block_box(a, b);
    }
    for &door in doors {
        grid.open_door(door);
    }

    debug!(
        size = ?grid.bounds().size(),
        cells = grid.bounds().volume(),
        blocked = grid.blocked_count(),
        doors = grid.door_count(),
        "occupancy grid built"
    );
    Ok(grid)
}

/// Plans tours by walking an [`OccupancyGrid`].
///
/// Stop positions usually sit on the wall they belong to, so each goal (and
/// the start) is snapped to the nearest free cell within the configured
/// radius. A leg leaves the previous real position (the start or the last
/// painted surface), steps through the centres of the walked cells and ends
/// at the stop's real position, so no leg is shorter than the straight line
/// between its ends. Stops that share a goal cell are visited back to back in
/// input order.
///
/// The tour's waypoints trace the whole walk; their polyline length equals the
/// sum of the legs.
///
/// # Example
///
/// ```
/// use nalgebra::Point3;
/// use paint_types::{GridConfig, Orientation, Surface, SurfaceId, TourStop};
/// use tour_pathfind::{GridTourPlanner, TourPlanner, build_occupancy};
///
/// // A wall at y = 2 with a door at x = 1 separates the start from the back wall
/// let divider = Surface::new(SurfaceId(1), 1.0, 4.0, Point3::new(0.0, 2.0, 0.0), Orientation::VerticalX);
/// let back = Surface::new(SurfaceId(2), 1.0, 4.0, Point3::new(0.0, 4.0, 0.0), Orientation::VerticalX);
/// let config = GridConfig::default();
/// let grid = build_occupancy(
///     &[divider, back],
///     &[Point3::new(1.0, 2.0, 0.0)],
///     Point3::origin(),
///     &config,
/// ).unwrap();
///
/// let planner = GridTourPlanner::new(grid, config);
/// let stops = [TourStop::new(SurfaceId(2), Point3::new(0.0, 4.0, 0.0))];
/// let tour = planner.plan(Point3::new(4.0, 0.0, 0.0), &stops).unwrap();
///
/// // Seven cells through the door, plus a half-cell diagonal hop at each end
/// // between the real positions and the cell centres
/// let hop = 0.75_f64.sqrt();
/// assert!((tour.travel_distance() - (7.0 + 2.0 * hop)).abs() < 1e-9);
/// assert_eq!(tour.waypoints().last(), Some(&Point3::new(0.0, 4.0, 0.0)));
/// ```
#[derive(Debug, Clone)]
pub struct GridTourPlanner {
    grid: OccupancyGrid,
    config: GridConfig,
}

impl GridTourPlanner {
    /// Creates a planner over the given grid.
    #[must_use]
    pub const fn new(grid: OccupancyGrid, config: GridConfig) -> Self {
        Self { grid, config }
    }

    /// Returns the grid.
    #[must_use]
    pub const fn grid(&self) -> &OccupancyGrid {
        &self.grid
    }

    /// Returns the configuration.
    #[must_use]
    pub const fn config(&self) -> &GridConfig {
        &self.config
    }

    /// The free cell an agent uses for a world position, if any.
    #[must_use]
    pub fn snap(&self, point: Point3<f64>) -> Option<VoxelCoord> {
        let cell = self.grid.world_to_grid(point);
        if self.grid.is_free(cell) {
            return Some(cell);
        }
        let snapped = self.grid.nearest_free(cell, self.config.snap_radius());
        if let Some(free) = snapped {
            debug!(?cell, ?free, "snapped blocked position to free cell");
        }
        snapped
    }

    /// Best-first search from `from` to whichever goal is reached first.
    ///
    /// `expanded` accumulates across calls so the node cap covers the whole
    /// tour. Returns `Ok(None)` when no goal is reachable.
    ///
    /// # Errors
    ///
    /// Returns [`PaintError::SearchExhausted`] once the node cap is hit.
    fn walk_to_nearest_goal(
        &self,
        from: VoxelCoord,
        goals: &[VoxelCoord],
        expanded: &Cell<usize>,
        started: Instant,
    ) -> Result<Option<Vec<VoxelCoord>>, PaintError> {
        if goals.contains(&from) {
            return Ok(Some(vec![from]));
        }

        let generator = NeighborGenerator::new(&self.grid).with_diagonal(self.config.allow_diagonal());
        let heuristic = self.config.heuristic();
        let max_nodes = self.config.max_nodes();
        let capped = Cell::new(false);

        let result = astar(
            &from,
            |node| {
                let n = expanded.get() + 1;
                expanded.set(n);
                if max_nodes.is_some_and(|max| n > max) {
                    capped.set(true);
                    return Vec::new();
                }
                generator
                    .successors(*node)
                    .map(|(next, cost)| (next, scale_cost(cost)))
                    .collect::<Vec<_>>()
            },
            |node| scale_cost(nearest_goal_estimate(*node, goals, heuristic)),
            |node| goals.contains(node),
        );

        if capped.get() {
            return Err(PaintError::SearchExhausted {
                stage: "grid routing",
                nodes_expanded: expanded.get(),
                elapsed: started.elapsed(),
            });
        }
        Ok(result.map(|(path, _)| path))
    }

    /// Length of a leg from `from` through the centres of `cells` to `to`.
    ///
    /// Every point after `from` is appended to `waypoints`.
    fn trace_leg(
        &self,
        from: Point3<f64>,
        cells: &[VoxelCoord],
        to: Point3<f64>,
        waypoints: &mut Vec<Point3<f64>>,
    ) -> f64 {
        let mut length = 0.0;
        let mut last = from;
        let points = cells
            .iter()
            .map(|&c| self.grid.grid_to_world_center(c))
            .chain(std::iter::once(to));
        for point in points {
            length += nalgebra::distance(&last, &point);
            waypoints.push(point);
            last = point;
        }
        length
    }
}

impl TourPlanner for GridTourPlanner {
    fn name(&self) -> &'static str {
        "grid"
    }

    fn plan(&self, start: Point3<f64>, stops: &[TourStop]) -> Result<Tour, PaintError> {
        let started = Instant::now();

        if stops.is_empty() {
            return Ok(Tour::new(start, Vec::new(), Vec::new()));
        }
        let mut current = self.snap(start).ok_or_else(|| {
            warn!(?start, "no free cell near the start position");
            PaintError::StartEnclosed(start)
        })?;

        // (stop, goal cell) in input order
        let mut remaining = Vec::with_capacity(stops.len());
        for stop in stops {
            let cell = self
                .snap(stop.position)
                .ok_or(PaintError::Unreachable(stop.surface))?;
            remaining.push((*stop, cell));
        }

        let expanded = Cell::new(0_usize);
        let mut ordered = Vec::with_capacity(stops.len());
        let mut legs = Vec::with_capacity(stops.len());
        let mut here = start;
        let mut waypoints = vec![start];

        while !remaining.is_empty() {
            let goals: Vec<VoxelCoord> = remaining.iter().map(|&(_, cell)| cell).collect();
            let path = self
                .walk_to_nearest_goal(current, &goals, &expanded, started)?
                .ok_or(PaintError::Unreachable(remaining[0].0.surface))?;
            let reached = path.last().copied().unwrap_or(current);

            // The first stop in the reached cell takes the walk; the rest
            // only step back out to the cell centre
            let mut cells = path.as_slice();
            let mut rest = Vec::with_capacity(remaining.len());
            for (stop, cell) in remaining {
                if cell == reached {
                    legs.push(self.trace_leg(here, cells, stop.position, &mut waypoints));
                    ordered.push(stop);
                    here = stop.position;
                    cells = std::slice::from_ref(&reached);
                } else {
                    rest.push((stop, cell));
                }
            }
            remaining = rest;
            current = reached;
        }

        let tour = Tour::new(start, ordered, legs).with_waypoints(waypoints);
        debug!(
            stops = stops.len(),
            nodes_expanded = expanded.get(),
            distance = tour.travel_distance(),
            elapsed_us = started.elapsed().as_micros(),
            "grid tour planned"
        );
        Ok(tour)
    }
}
