//! Paintable surfaces and their geometry.

use std::fmt;
use std::str::FromStr;

use nalgebra::Point3;
use serde::{Deserialize, Serialize};

/// Identifier of a surface, unique within one input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SurfaceId(pub u64);

impl fmt::Display for SurfaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<u64> for SurfaceId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

/// How a rectangular surface sits in space.
///
/// Every variant anchors the rectangle at its `position` corner and extends
/// it along two positive axes:
///
/// | Variant | Width along | Height along | Constant |
/// |---------|-------------|--------------|----------|
/// | `VerticalX` | x | z | y |
/// | `VerticalY` | y | z | x |
/// | `Horizontal` | x | y | z |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// A wall running along the x axis.
    VerticalX,
    /// A wall running along the y axis.
    VerticalY,
    /// A floor or ceiling.
    Horizontal,
}

impl Orientation {
    /// The canonical tag written in input records.
    #[must_use]
    pub const fn as_tag(self) -> &'static str {
        match self {
            Self::VerticalX => "Vertical-x",
            Self::VerticalY => "Vertical-y",
            Self::Horizontal => "horizontal",
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_tag())
    }
}

/// The orientation tag was not recognised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unrecognized orientation {0:?}")]
pub struct ParseOrientationError(pub String);

impl FromStr for Orientation {
    type Err = ParseOrientationError;

    /// Parses a tag case-insensitively. `-`, `_` and no separator are all
    /// accepted between `vertical` and the axis letter.
    ///
    /// # Example
    ///
    /// ```
    /// use paint_types::Orientation;
    ///
    /// assert_eq!("Vertical-x".parse(), Ok(Orientation::VerticalX));
    /// assert_eq!("vertical_y".parse(), Ok(Orientation::VerticalY));
    /// assert_eq!("Horizontal".parse(), Ok(Orientation::Horizontal));
    /// assert!("Vertical".parse::<Orientation>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .flat_map(char::to_lowercase)
            .collect();

        match normalized.as_str() {
            "verticalx" => Ok(Self::VerticalX),
            "verticaly" => Ok(Self::VerticalY),
            "horizontal" => Ok(Self::Horizontal),
            _ => Err(ParseOrientationError(s.to_owned())),
        }
    }
}

/// A rectangular paintable surface.
///
/// Constructed from an input record once dimensions and orientation have been
/// validated; read-only afterwards.
///
/// # Example
///
/// ```
/// use paint_types::{Orientation, Surface, SurfaceId};
/// use nalgebra::Point3;
///
/// let wall = Surface::new(
///     SurfaceId(1),
///     3.0,
///     4.0,
///     Point3::new(0.0, 0.0, 0.0),
///     Orientation::VerticalX,
/// );
/// assert!((wall.area() - 12.0).abs() < 1e-12);
/// assert_eq!(wall.corners()[2], Point3::new(4.0, 0.0, 3.0));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Surface {
    id: SurfaceId,
    height: f64,
    width: f64,
    position: Point3<f64>,
    orientation: Orientation,
}

impl Surface {
    /// Creates a surface. Dimensions are not checked here.
    #[must_use]
    pub const fn new(
        id: SurfaceId,
        height: f64,
        width: f64,
        position: Point3<f64>,
        orientation: Orientation,
    ) -> Self {
        Self {
            id,
            height,
            width,
            position,
            orientation,
        }
    }

    /// Returns the surface id.
    #[must_use]
    pub const fn id(&self) -> SurfaceId {
        self.id
    }

    /// Returns the height.
    #[must_use]
    pub const fn height(&self) -> f64 {
        self.height
    }

    /// Returns the width.
    #[must_use]
    pub const fn width(&self) -> f64 {
        self.width
    }

    /// Returns the anchor corner, which is also where the agent paints from.
    #[must_use]
    pub const fn position(&self) -> Point3<f64> {
        self.position
    }

    /// Returns the orientation.
    #[must_use]
    pub const fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Height times width.
    #[must_use]
    pub fn area(&self) -> f64 {
        self.height * self.width
    }

    /// The four corners, in winding order starting at the anchor.
    #[must_use]
    pub fn corners(&self) -> [Point3<f64>; 4] {
        let (x, y, z) = (self.position.x, self.position.y, self.position.z);
        let (w, h) = (self.width, self.height);

        match self.orientation {
            Orientation::VerticalX => [
                Point3::new(x, y, z),
                Point3::new(x + w, y, z),
                Point3::new(x + w, y, z + h),
                Point3::new(x, y, z + h),
            ],
            Orientation::VerticalY => [
                Point3::new(x, y, z),
                Point3::new(x, y + w, z),
                Point3::new(x, y + w, z + h),
                Point3::new(x, y, z + h),
            ],
            Orientation::Horizontal => [
                Point3::new(x, y, z),
                Point3::new(x + w, y, z),
                Point3::new(x + w, y + h, z),
                Point3::new(x, y + h, z),
            ],
        }
    }

    /// The four boundary edges as consecutive corner pairs.
    #[must_use]
    pub fn edges(&self) -> [(Point3<f64>, Point3<f64>); 4] {
        let c = self.corners();
        [(c[0], c[1]), (c[1], c[2]), (c[2], c[3]), (c[3], c[0])]
    }

    /// Minimum and maximum corners of the (flat) bounding box.
    #[must_use]
    pub fn bounds(&self) -> (Point3<f64>, Point3<f64>) {
        let c = self.corners();
        // Corners 0 and 2 are diagonal and both extents are positive
        (c[0], c[2])
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn surface(orientation: Orientation) -> Surface {
        Surface::new(
            SurfaceId(1),
            3.0,
            4.0,
            Point3::new(1.0, 2.0, 0.5),
            orientation,
        )
    }

    #[test]
    fn test_area() {
        assert_relative_eq!(surface(Orientation::Horizontal).area(), 12.0);
    }

    #[test]
    fn test_vertical_x_corners() {
        let c = surface(Orientation::VerticalX).corners();
        assert_eq!(c[0], Point3::new(1.0, 2.0, 0.5));
        assert_eq!(c[1], Point3::new(5.0, 2.0, 0.5));
        assert_eq!(c[2], Point3::new(5.0, 2.0, 3.5));
        assert_eq!(c[3], Point3::new(1.0, 2.0, 3.5));
        assert!(c.iter().all(|p| p.y == 2.0));
    }

    #[test]
    fn test_vertical_y_corners() {
        let c = surface(Orientation::VerticalY).corners();
        assert_eq!(c[1], Point3::new(1.0, 6.0, 0.5));
        assert_eq!(c[2], Point3::new(1.0, 6.0, 3.5));
        assert!(c.iter().all(|p| p.x == 1.0));
    }

    #[test]
    fn test_horizontal_corners() {
        let c = surface(Orientation::Horizontal).corners();
        assert_eq!(c[2], Point3::new(5.0, 5.0, 0.5));
        assert!(c.iter().all(|p| p.z == 0.5));
    }

    #[test]
    fn test_edges_close_the_loop() {
        let s = surface(Orientation::VerticalY);
        let edges = s.edges();
        let corners = s.corners();
        assert_eq!(edges[3].0, corners[3]);
        assert_eq!(edges[3].1, corners[0]);
    }

    #[test]
    fn test_bounds() {
        let (min, max) = surface(Orientation::VerticalX).bounds();
        assert_eq!(min, Point3::new(1.0, 2.0, 0.5));
        assert_eq!(max, Point3::new(5.0, 2.0, 3.5));
    }

    #[test]
    fn test_orientation_parse_variants() {
        for tag in ["Vertical-x", "vertical-x", "VerticalX", "VERTICAL_X", " vertical-x "] {
            assert_eq!(tag.parse::<Orientation>(), Ok(Orientation::VerticalX), "{tag}");
        }
        assert_eq!("Vertical-y".parse(), Ok(Orientation::VerticalY));
        assert_eq!("horizontal".parse(), Ok(Orientation::Horizontal));
    }

    #[test]
    fn test_orientation_parse_rejects_unknown() {
        for tag in ["Vertical", "", "diagonal", "vertical-z"] {
            let err = tag.parse::<Orientation>().unwrap_err();
            assert_eq!(err.0, tag);
        }
    }

    #[test]
    fn test_orientation_tag_round_trip() {
        for o in [
            Orientation::VerticalX,
            Orientation::VerticalY,
            Orientation::Horizontal,
        ] {
            assert_eq!(o.as_tag().parse::<Orientation>(), Ok(o));
            assert_eq!(o.to_string(), o.as_tag());
        }
    }
}
