//! Error types for spatial operations.

/// Errors that can occur while building an occupancy grid.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum SpatialError {
    /// The cell size must be positive and finite.
    #[error("voxel size must be positive and finite, got {0}")]
    InvalidVoxelSize(f64),

    /// A world-space extent is NaN or infinite.
    #[error("grid extent must be finite")]
    NonFiniteExtent,

    /// The requested extent does not fit in `i32` cell coordinates.
    #[error("grid extent overflows cell coordinates")]
    CoordinateOverflow,

    /// The box holds more cells than the grid is allowed to index.
    #[error("grid would hold {cells} cells, more than the limit of {max}")]
    GridTooLarge {
        /// Cells the box would need.
        cells: u64,
        /// The configured limit.
        max: u64,
    },
}
