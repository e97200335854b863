//! Spatial primitives for routing an agent between painted surfaces.
//!
//! This crate provides the discrete space that door-aware routing runs on:
//!
//! - [`VoxelCoord`] - Integer cell coordinates
//! - [`GridBounds`] - Inclusive axis-aligned bounds in cell space
//! - [`OccupancyGrid`] - A bounded, sparse occupancy grid whose blocked cells
//!   come from rasterised wall rectangles and whose door cells stay passable
//!
//! # Layer 0 Crate
//!
//! This crate knows nothing about colors, budgets, or solutions. It only maps
//! world-space geometry onto cells and answers "can the agent stand here?".
//!
//! # Coordinate Systems
//!
//! World coordinates are continuous `f64` values (metres). Cell coordinates are
//! discrete `i32` values measured from the grid origin, which is the minimum
//! corner of the world-space box the grid was built for:
//! - X: width (left/right)
//! - Y: depth (front/back)
//! - Z: height (up/down)
//!
//! # Example
//!
//! ```
//! use paint_spatial::{OccupancyGrid, VoxelCoord};
//! use nalgebra::Point3;
//!
//! // A 4m x 4m x 3m room sampled at 1m cells
//! let mut grid = OccupancyGrid::new(
//!     1.0,
//!     Point3::new(0.0, 0.0, 0.0),
//!     Point3::new(4.0, 4.0, 3.0),
//! ).unwrap();
//!
//! // A wall along y = 0
//! grid.block_box(Point3::new(0.0, 0.0, 0.0), Point3::new(4.0, 0.0, 3.0));
//! assert!(grid.is_blocked(VoxelCoord::new(2, 0, 1)));
//!
//! // A door in that wall
//! grid.open_door(Point3::new(2.0, 0.0, 0.0));
//! assert!(grid.is_free(VoxelCoord::new(2, 0, 0)));
//! ```

#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]

mod error;
mod grid;
mod occupancy;
mod voxel;

pub use error::SpatialError;
pub use grid::{GridBounds, GridBoundsIter};
pub use occupancy::{DEFAULT_MAX_CELLS, OccupancyGrid};
pub use voxel::VoxelCoord;

// Re-export nalgebra types for convenience
pub use nalgebra::Point3;
