//! Cell coordinate type.

/// A discrete 3D coordinate in cell space.
///
/// Cells are addressed relative to the owning grid's origin. Coordinates are
/// `i32` so neighbour arithmetic around the origin never underflows.
///
/// # Example
///
/// ```
/// use paint_spatial::VoxelCoord;
///
/// let coord = VoxelCoord::new(1, 2, 3);
/// assert_eq!(coord.x, 1);
/// assert_eq!(coord.manhattan_distance(VoxelCoord::origin()), 6);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VoxelCoord {
    /// X coordinate (width axis).
    pub x: i32,
    /// Y coordinate (depth axis).
    pub y: i32,
    /// Z coordinate (height axis).
    pub z: i32,
}

impl VoxelCoord {
    /// Creates a new cell coordinate.
    #[must_use]
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// The cell at (0, 0, 0).
    #[must_use]
    pub const fn origin() -> Self {
        Self::new(0, 0, 0)
    }

    /// Returns the 6 face-adjacent neighbours, in `+x, -x, +y, -y, +z, -z` order.
    ///
    /// # Example
    ///
    /// ```
    /// use paint_spatial::VoxelCoord;
    ///
    /// let neighbors = VoxelCoord::origin().face_neighbors();
    /// assert_eq!(neighbors[0], VoxelCoord::new(1, 0, 0));
    /// assert_eq!(neighbors[5], VoxelCoord::new(0, 0, -1));
    /// ```
    #[must_use]
    pub const fn face_neighbors(self) -> [Self; 6] {
        [
            Self::new(self.x.wrapping_add(1), self.y, self.z),
            Self::new(self.x.wrapping_sub(1), self.y, self.z),
            Self::new(self.x, self.y.wrapping_add(1), self.z),
            Self::new(self.x, self.y.wrapping_sub(1), self.z),
            Self::new(self.x, self.y, self.z.wrapping_add(1)),
            Self::new(self.x, self.y, self.z.wrapping_sub(1)),
        ]
    }

    /// Returns all 26 neighbours (face, edge and corner adjacent).
    ///
    /// Ordered by `dx`, then `dy`, then `dz`, each running `-1..=1`.
    #[must_use]
    pub fn all_neighbors(self) -> [Self; 26] {
        let mut result = [Self::origin(); 26];
        let mut idx = 0;

        for dx in -1i32..=1 {
            for dy in -1i32..=1 {
                for dz in -1i32..=1 {
                    if dx == 0 && dy == 0 && dz == 0 {
                        continue;
                    }
                    result[idx] = Self::new(
                        self.x.wrapping_add(dx),
                        self.y.wrapping_add(dy),
                        self.z.wrapping_add(dz),
                    );
                    idx += 1;
                }
            }
        }

        result
    }

    /// Sum of absolute coordinate differences.
    #[must_use]
    pub const fn manhattan_distance(self, other: Self) -> u32 {
        let dx = self.x.abs_diff(other.x);
        let dy = self.y.abs_diff(other.y);
        let dz = self.z.abs_diff(other.z);
        dx.saturating_add(dy).saturating_add(dz)
    }

    /// Largest absolute coordinate difference.
    #[must_use]
    pub fn chebyshev_distance(self, other: Self) -> u32 {
        let dx = self.x.abs_diff(other.x);
        let dy = self.y.abs_diff(other.y);
        let dz = self.z.abs_diff(other.z);
        dx.max(dy).max(dz)
    }

    /// Straight-line distance between cell indices.
    #[must_use]
    pub fn euclidean_distance(self, other: Self) -> f64 {
        let dx = f64::from(self.x) - f64::from(other.x);
        let dy = f64::from(self.y) - f64::from(other.y);
        let dz = f64::from(self.z) - f64::from(other.z);
        dx.mul_add(dx, dy.mul_add(dy, dz * dz)).sqrt()
    }
}
