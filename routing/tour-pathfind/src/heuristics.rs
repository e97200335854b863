//! Distance estimates and move costs on the voxel lattice.

use paint_spatial::VoxelCoord;
use paint_types::Heuristic;

/// Estimated cost between two cells, in cell units.
///
/// # Example
///
/// ```
/// use paint_spatial::VoxelCoord;
/// use paint_types::Heuristic;
/// use tour_pathfind::heuristics::compute_heuristic;
///
/// let a = VoxelCoord::new(0, 0, 0);
/// let b = VoxelCoord::new(3, 4, 0);
///
/// assert!((compute_heuristic(a, b, Heuristic::Euclidean) - 5.0).abs() < 1e-10);
/// assert!((compute_heuristic(a, b, Heuristic::Manhattan) - 7.0).abs() < 1e-10);
/// ```
#[must_use]
pub fn compute_heuristic(from: VoxelCoord, to: VoxelCoord, heuristic: Heuristic) -> f64 {
    match heuristic {
        Heuristic::Manhattan => f64::from(from.manhattan_distance(to)),
        Heuristic::Chebyshev => f64::from(from.chebyshev_distance(to)),
        Heuristic::Euclidean => from.euclidean_distance(to),
        Heuristic::Zero => 0.0,
    }
}

/// Smallest estimate from `from` to any of `goals`; zero when `goals` is empty.
#[must_use]
pub fn nearest_goal_estimate<'a>(
    from: VoxelCoord,
    goals: impl IntoIterator<Item = &'a VoxelCoord>,
    heuristic: Heuristic,
) -> f64 {
    goals
        .into_iter()
        .map(|&g| compute_heuristic(from, g, heuristic))
        .reduce(f64::min)
        .unwrap_or(0.0)
}

/// Length of one step between adjacent cells: 1, √2 or √3.
#[must_use]
pub fn move_cost(from: VoxelCoord, to: VoxelCoord) -> f64 {
    from.euclidean_distance(to)
}

/// Scales a cost to the integer domain the `pathfinding` crate works in.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn scale_cost(cost: f64) -> u64 {
    (cost * 1000.0).round() as u64
}
