//! Solver configuration.
//!
//! Every numeric constant the pipeline depends on lives here with a named
//! default, so callers can tune travel speed, tolerances and search caps
//! without touching the algorithms.
//!
//! # Example
//!
//! ```
//! use paint_types::{GridConfig, Heuristic, RoutingMode, SolverConfig};
//! use std::time::Duration;
//!
//! let config = SolverConfig::default()
//!     .with_travel_speed(1.5)
//!     .with_max_nodes(50_000)
//!     .with_timeout(Duration::from_secs(2))
//!     .with_routing(RoutingMode::Grid)
//!     .with_grid(GridConfig::default().with_voxel_size(0.5).with_heuristic(Heuristic::Manhattan));
//!
//! assert!(config.validate().is_empty());
//! ```

use std::time::Duration;

use paint_spatial::DEFAULT_MAX_CELLS;
use serde::{Deserialize, Serialize};

use crate::error::PaintError;

/// Default agent speed in distance units per time unit.
pub const DEFAULT_TRAVEL_SPEED: f64 = 2.0;

/// Default absolute tolerance when comparing corner coordinates.
pub const DEFAULT_CORNER_TOLERANCE: f64 = 1e-9;

/// Default cap on color-search nodes.
pub const DEFAULT_MAX_COLOR_NODES: usize = 1_000_000;

/// Heuristic estimating the remaining cost to the nearest goal cell.
///
/// Must never overestimate for the grid search to return shortest legs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Heuristic {
    /// |dx| + |dy| + |dz|. Admissible for 6-connectivity only.
    Manhattan,
    /// max(|dx|, |dy|, |dz|). Admissible for any connectivity.
    Chebyshev,
    /// Straight-line distance. Always admissible.
    #[default]
    Euclidean,
    /// Always zero, turning the search into Dijkstra.
    Zero,
}

impl Heuristic {
    /// Returns `true` if this heuristic never overestimates for the given connectivity.
    ///
    /// # Example
    ///
    /// ```
    /// use paint_types::Heuristic;
    ///
    /// assert!(Heuristic::Manhattan.is_admissible_for(false));
    /// assert!(!Heuristic::Manhattan.is_admissible_for(true));
    /// assert!(Heuristic::Euclidean.is_admissible_for(true));
    /// ```
    #[must_use]
    pub const fn is_admissible_for(&self, allow_diagonal: bool) -> bool {
        match self {
            Self::Manhattan => !allow_diagonal,
            Self::Chebyshev | Self::Euclidean | Self::Zero => true,
        }
    }
}

/// Settings for routing over a voxel occupancy grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridConfig {
    /// Cell edge length in world units.
    voxel_size: f64,
    /// Distance estimate to the nearest remaining goal.
    heuristic: Heuristic,
    /// 26-connectivity when `true`, 6-connectivity otherwise.
    allow_diagonal: bool,
    /// How many cell rings to search when a goal sits inside a wall.
    snap_radius: u32,
    /// Cap on expanded cells across the whole tour.
    max_nodes: Option<usize>,
    /// Cap on the number of cells the grid may span.
    #[serde(default = "default_max_cells")]
    max_cells: u64,
}

const fn default_max_cells() -> u64 {
    DEFAULT_MAX_CELLS
}

impl GridConfig {
    /// Creates a grid configuration with default settings.
    ///
    /// Defaults:
    /// - Voxel size: 1.0
    /// - Heuristic: Euclidean
    /// - Diagonal: false (6-connectivity)
    /// - Snap radius: 2 cells
    /// - Max nodes: 2,000,000
    /// - Max cells: 8,000,000
    #[must_use]
    pub const fn new() -> Self {
        Self {
            voxel_size: 1.0,
            heuristic: Heuristic::Euclidean,
            allow_diagonal: false,
            snap_radius: 2,
            max_nodes: Some(2_000_000),
            max_cells: DEFAULT_MAX_CELLS,
        }
    }

    /// Sets the cell edge length.
    #[must_use]
    pub const fn with_voxel_size(mut self, size: f64) -> Self {
        self.voxel_size = size;
        self
    }

    /// Sets the heuristic.
    #[must_use]
    pub const fn with_heuristic(mut self, heuristic: Heuristic) -> Self {
        self.heuristic = heuristic;
        self
    }

    /// Sets whether diagonal moves are allowed.
    #[must_use]
    pub const fn with_diagonal(mut self, allow: bool) -> Self {
        self.allow_diagonal = allow;
        self
    }

    /// Sets the snap radius in cells.
    #[must_use]
    pub const fn with_snap_radius(mut self, cells: u32) -> Self {
        self.snap_radius = cells;
        self
    }

    /// Sets the node cap.
    #[must_use]
    pub const fn with_max_nodes(mut self, max: usize) -> Self {
        self.max_nodes = Some(max);
        self
    }

    /// Removes the node cap.
    #[must_use]
    pub const fn without_max_nodes(mut self) -> Self {
        self.max_nodes = None;
        self
    }

    /// Sets the cap on grid cells.
    #[must_use]
    pub const fn with_max_cells(mut self, max: u64) -> Self {
        self.max_cells = max;
        self
    }

    /// Returns the cell edge length.
    #[must_use]
    pub const fn voxel_size(&self) -> f64 {
        self.voxel_size
    }

    /// Returns the heuristic.
    #[must_use]
    pub const fn heuristic(&self) -> Heuristic {
        self.heuristic
    }

    /// Returns whether diagonal moves are allowed.
    #[must_use]
    pub const fn allow_diagonal(&self) -> bool {
        self.allow_diagonal
    }

    /// Returns the snap radius in cells.
    #[must_use]
    pub const fn snap_radius(&self) -> u32 {
        self.snap_radius
    }

    /// Returns the node cap, if any.
    #[must_use]
    pub const fn max_nodes(&self) -> Option<usize> {
        self.max_nodes
    }

    /// Returns the cap on grid cells.
    #[must_use]
    pub const fn max_cells(&self) -> u64 {
        self.max_cells
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// How the tour is planned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RoutingMode {
    /// Grid routing when the input has doors, nearest-neighbour otherwise.
    #[default]
    Auto,
    /// Always plan straight-line nearest-neighbour tours.
    NearestNeighbor,
    /// Always route over the occupancy grid.
    Grid,
}

/// Which color assigner to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ColorStrategy {
    /// Full backtracking over the adjacency graph.
    #[default]
    Backtracking,
    /// Single pass that only avoids the preceding surface's color.
    ///
    /// Not equivalent to [`ColorStrategy::Backtracking`]: it ignores the
    /// adjacency graph and never revisits a choice. Honoured only when the
    /// adjacency constraint is disabled.
    PrecedingOnly,
}

/// Configuration for a full solve.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolverConfig {
    /// Agent speed used to turn distance into travel time.
    travel_speed: f64,
    /// Absolute tolerance for corner and edge coincidence.
    corner_tolerance: f64,
    /// Cap on color-search nodes.
    max_nodes: Option<usize>,
    /// Wall-clock cap on the color search.
    timeout: Option<Duration>,
    /// Tour planning mode.
    routing: RoutingMode,
    /// Grid routing settings.
    grid: GridConfig,
    /// Color assigner selection.
    color_strategy: ColorStrategy,
}

impl SolverConfig {
    /// Creates a configuration with default settings.
    ///
    /// Defaults:
    /// - Travel speed: 2.0
    /// - Corner tolerance: 1e-9
    /// - Max color nodes: 1,000,000
    /// - No timeout
    /// - Routing: auto
    /// - Color strategy: backtracking
    #[must_use]
    pub const fn new() -> Self {
        Self {
            travel_speed: DEFAULT_TRAVEL_SPEED,
            corner_tolerance: DEFAULT_CORNER_TOLERANCE,
            max_nodes: Some(DEFAULT_MAX_COLOR_NODES),
            timeout: None,
            routing: RoutingMode::Auto,
            grid: GridConfig::new(),
            color_strategy: ColorStrategy::Backtracking,
        }
    }

    /// Sets the travel speed.
    #[must_use]
    pub const fn with_travel_speed(mut self, speed: f64) -> Self {
        self.travel_speed = speed;
        self
    }

    /// Sets the corner tolerance.
    #[must_use]
    pub const fn with_corner_tolerance(mut self, tolerance: f64) -> Self {
        self.corner_tolerance = tolerance;
        self
    }

    /// Sets the color-search node cap.
    #[must_use]
    pub const fn with_max_nodes(mut self, max: usize) -> Self {
        self.max_nodes = Some(max);
        self
    }

    /// Removes the color-search node cap.
    #[must_use]
    pub const fn without_max_nodes(mut self) -> Self {
        self.max_nodes = None;
        self
    }

    /// Sets the color-search timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Removes the color-search timeout.
    #[must_use]
    pub const fn without_timeout(mut self) -> Self {
        self.timeout = None;
        self
    }

    /// Sets the routing mode.
    #[must_use]
    pub const fn with_routing(mut self, routing: RoutingMode) -> Self {
        self.routing = routing;
        self
    }

    /// Sets the grid routing settings.
    #[must_use]
    pub const fn with_grid(mut self, grid: GridConfig) -> Self {
        self.grid = grid;
        self
    }

    /// Sets the color strategy.
    #[must_use]
    pub const fn with_color_strategy(mut self, strategy: ColorStrategy) -> Self {
        self.color_strategy = strategy;
        self
    }

    /// Returns the travel speed.
    #[must_use]
    pub const fn travel_speed(&self) -> f64 {
        self.travel_speed
    }

    /// Returns the corner tolerance.
    #[must_use]
    pub const fn corner_tolerance(&self) -> f64 {
        self.corner_tolerance
    }

    /// Returns the color-search node cap, if any.
    #[must_use]
    pub const fn max_nodes(&self) -> Option<usize> {
        self.max_nodes
    }

    /// Returns the color-search timeout, if any.
    #[must_use]
    pub const fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Returns the routing mode.
    #[must_use]
    pub const fn routing(&self) -> RoutingMode {
        self.routing
    }

    /// Returns the grid routing settings.
    #[must_use]
    pub const fn grid(&self) -> &GridConfig {
        &self.grid
    }

    /// Returns the color strategy.
    #[must_use]
    pub const fn color_strategy(&self) -> ColorStrategy {
        self.color_strategy
    }

    /// Lists every out-of-range setting.
    #[must_use]
    pub fn validate(&self) -> Vec<String> {
        let mut issues = Vec::new();

        if !(self.travel_speed > 0.0 && self.travel_speed.is_finite()) {
            issues.push(format!(
                "travel_speed must be positive and finite, got {}",
                self.travel_speed
            ));
        }
        if !(self.corner_tolerance >= 0.0 && self.corner_tolerance.is_finite()) {
            issues.push(format!(
                "corner_tolerance must be non-negative and finite, got {}",
                self.corner_tolerance
            ));
        }
        if self.max_nodes == Some(0) {
            issues.push("max_nodes must be positive".to_owned());
        }
        if !(self.grid.voxel_size > 0.0 && self.grid.voxel_size.is_finite()) {
            issues.push(format!(
                "grid voxel_size must be positive and finite, got {}",
                self.grid.voxel_size
            ));
        }
        if self.grid.max_cells == 0 {
            issues.push("grid max_cells must be positive".to_owned());
        }
        if !self.grid.heuristic.is_admissible_for(self.grid.allow_diagonal) {
            issues.push(format!(
                "heuristic {:?} is not admissible for diagonal={}",
                self.grid.heuristic, self.grid.allow_diagonal
            ));
        }

        issues
    }

    /// Fails on the first out-of-range setting.
    ///
    /// # Errors
    ///
    /// Returns [`PaintError::InvalidConfig`] describing the first issue
    /// reported by [`validate`](Self::validate).
    pub fn check(&self) -> Result<(), PaintError> {
        match self.validate().into_iter().next() {
            Some(issue) => Err(PaintError::InvalidConfig(issue)),
            None => Ok(()),
        }
    }
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self::new()
    }
}
