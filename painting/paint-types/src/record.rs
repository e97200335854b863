//! Input and output records exchanged with loaders and renderers.
//!
//! Records are deliberately loose: dimensions are optional and orientations
//! are plain strings, so that a malformed surface reaches validation and is
//! reported as a [`ValidationError`](crate::ValidationError) rather than as
//! an opaque decoding failure.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::PaintError;
use crate::palette::ColorId;
use crate::surface::SurfaceId;

const fn default_adjacency_constraint() -> bool {
    true
}

const fn default_min_colors() -> usize {
    3
}

/// One surface as it appears in an input record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurfaceRecord {
    /// Unique surface id.
    pub id: SurfaceId,
    /// Vertical extent (or second horizontal extent for floors).
    #[serde(default)]
    pub height: Option<f64>,
    /// Horizontal extent along the surface's first axis.
    #[serde(default)]
    pub width: Option<f64>,
    /// Anchor corner.
    pub position: [f64; 3],
    /// Orientation tag, e.g. `"Vertical-x"` or `"horizontal"`.
    #[serde(default)]
    pub orientation: String,
}

impl SurfaceRecord {
    /// Creates a fully specified surface record.
    #[must_use]
    pub fn new(
        id: u64,
        height: f64,
        width: f64,
        position: [f64; 3],
        orientation: impl Into<String>,
    ) -> Self {
        Self {
            id: SurfaceId(id),
            height: Some(height),
            width: Some(width),
            position,
            orientation: orientation.into(),
        }
    }
}

/// A door attached to a surface, passable in grid routing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DoorRecord {
    /// Door location in world space.
    #[serde(alias = "position")]
    pub door_position: [f64; 3],
}

/// A complete solve request.
///
/// # Example
///
/// ```
/// use paint_types::SolveInput;
///
/// let input = SolveInput::from_json_str(r#"{
///     "surfaces": [
///         {"id": 1, "height": 3.0, "width": 4.0, "position": [0, 0, 0], "orientation": "Vertical-x"}
///     ],
///     "colors": ["Red", "Blue"],
///     "time_per_meter": 1.0,
///     "max_time": 100.0,
///     "min_colors": 1,
///     "start_position": [0, 0, 0]
/// }"#).unwrap();
///
/// assert!(input.adjacency_constraint);
/// assert!(input.paint_availability.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolveInput {
    /// Surfaces to paint, in input order.
    pub surfaces: Vec<SurfaceRecord>,
    /// Palette, in preference order.
    pub colors: Vec<ColorId>,
    /// Painting time per unit area.
    pub time_per_meter: f64,
    /// Upper bound on painting plus travel time.
    pub max_time: f64,
    /// Paint budget per color in area units. Missing colors are unbounded.
    #[serde(default)]
    pub paint_availability: BTreeMap<ColorId, f64>,
    /// Whether adjacent surfaces must differ in color.
    #[serde(default = "default_adjacency_constraint")]
    pub adjacency_constraint: bool,
    /// Minimum number of distinct colors in a solution.
    #[serde(default = "default_min_colors")]
    pub min_colors: usize,
    /// Where the agent starts.
    pub start_position: [f64; 3],
    /// Doors keyed by the surface they sit in.
    #[serde(default)]
    pub doors: BTreeMap<SurfaceId, DoorRecord>,
}

impl SolveInput {
    /// Creates a request with default budgets, constraint and doors.
    #[must_use]
    pub fn new(
        surfaces: Vec<SurfaceRecord>,
        colors: impl IntoIterator<Item = impl Into<ColorId>>,
        time_per_meter: f64,
        max_time: f64,
        start_position: [f64; 3],
    ) -> Self {
        Self {
            surfaces,
            colors: colors.into_iter().map(Into::into).collect(),
            time_per_meter,
            max_time,
            paint_availability: BTreeMap::new(),
            adjacency_constraint: default_adjacency_constraint(),
            min_colors: default_min_colors(),
            start_position,
            doors: BTreeMap::new(),
        }
    }

    /// Sets the budget for one color.
    #[must_use]
    pub fn with_budget(mut self, color: impl Into<ColorId>, area: f64) -> Self {
        self.paint_availability.insert(color.into(), area);
        self
    }

    /// Sets whether adjacent surfaces must differ.
    #[must_use]
    pub const fn with_adjacency_constraint(mut self, enabled: bool) -> Self {
        self.adjacency_constraint = enabled;
        self
    }

    /// Sets the minimum number of distinct colors.
    #[must_use]
    pub const fn with_min_colors(mut self, min_colors: usize) -> Self {
        self.min_colors = min_colors;
        self
    }

    /// Adds a door to a surface.
    #[must_use]
    pub fn with_door(mut self, surface: u64, door_position: [f64; 3]) -> Self {
        self.doors
            .insert(SurfaceId(surface), DoorRecord { door_position });
        self
    }

    /// Decodes a request from JSON.
    ///
    /// # Errors
    ///
    /// Returns [`PaintError::MalformedInput`] if the text is not a valid
    /// request record.
    pub fn from_json_str(text: &str) -> Result<Self, PaintError> {
        serde_json::from_str(text).map_err(|e| PaintError::MalformedInput(e.to_string()))
    }
}

/// A solved plan, shaped for renderers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolutionRecord {
    /// Chosen color per surface.
    pub colors: BTreeMap<SurfaceId, ColorId>,
    /// Painting plus travel time.
    pub total_time: f64,
    /// Start position followed by every surface position in visit order.
    pub path: Vec<[f64; 3]>,
    /// Area painted per palette color.
    pub paint_usage: BTreeMap<ColorId, f64>,
}

impl SolutionRecord {
    /// Encodes the record as indented JSON.
    ///
    /// # Errors
    ///
    /// Returns the encoder error if a value cannot be represented in JSON.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;

    const ORIGINAL_SAMPLE: &str = r#"{
        "surfaces": [
            {"id": 1, "height": 3.0, "width": 4.0, "position": [0, 0, 0], "orientation": "Vertical-x"},
            {"id": 2, "height": 3.0, "width": 4.0, "position": [4, 0, 0], "orientation": "Vertical-y"},
            {"id": 9, "height": 2.0, "width": 1.0, "position": [4, 2, 0], "orientation": "Vertical"}
        ],
        "colors": ["Red", "Blue", "Green"],
        "time_per_meter": 2,
        "max_time": 500,
        "paint_availability": {"Red": 30, "Blue": 25, "Yellow": 10},
        "min_colors": 2,
        "start_position": [0, 0, 0]
    }"#;

    #[test]
    fn test_decodes_sample_with_defaults() {
        let input = SolveInput::from_json_str(ORIGINAL_SAMPLE).unwrap();
        assert_eq!(input.surfaces.len(), 3);
        assert_eq!(input.surfaces[2].orientation, "Vertical");
        assert_eq!(input.time_per_meter, 2.0);
        assert_eq!(input.min_colors, 2);
        assert!(input.adjacency_constraint);
        assert!(input.doors.is_empty());
        assert_eq!(input.paint_availability[&ColorId::from("Yellow")], 10.0);
    }

    #[test]
    fn test_missing_fields_stay_open_for_validation() {
        let input = SolveInput::from_json_str(
            r#"{"surfaces": [{"id": 4, "position": [1, 2, 3]}],
                "colors": ["Red"], "time_per_meter": 1, "max_time": 1,
                "start_position": [0, 0, 0]}"#,
        )
        .unwrap();
        let surface = &input.surfaces[0];
        assert_eq!(surface.height, None);
        assert_eq!(surface.width, None);
        assert!(surface.orientation.is_empty());
        assert_eq!(input.min_colors, 3);
    }

    #[test]
    fn test_door_accepts_both_spellings() {
        let input = SolveInput::from_json_str(
            r#"{"surfaces": [], "colors": [], "time_per_meter": 1, "max_time": 1,
                "start_position": [0, 0, 0],
                "doors": {"3": {"door_position": [1, 0, 0]}, "5": {"position": [2, 0, 0]}}}"#,
        )
        .unwrap();
        assert_eq!(input.doors[&SurfaceId(3)].door_position, [1.0, 0.0, 0.0]);
        assert_eq!(input.doors[&SurfaceId(5)].door_position, [2.0, 0.0, 0.0]);
    }

    #[test]
    fn test_rejects_garbage() {
        let error = SolveInput::from_json_str("{\"surfaces\": 7}").unwrap_err();
        assert!(matches!(error, PaintError::MalformedInput(_)));
    }

    #[test]
    fn test_builder_matches_decoded() {
        let built = SolveInput::new(
            vec![SurfaceRecord::new(1, 3.0, 4.0, [0.0, 0.0, 0.0], "Vertical-x")],
            ["Red", "Blue"],
            1.0,
            100.0,
            [0.0, 0.0, 0.0],
        )
        .with_min_colors(1)
        .with_budget("Red", 12.0);

        let decoded = SolveInput::from_json_str(
            r#"{"surfaces": [{"id": 1, "height": 3.0, "width": 4.0, "position": [0, 0, 0], "orientation": "Vertical-x"}],
                "colors": ["Red", "Blue"], "time_per_meter": 1.0, "max_time": 100.0,
                "paint_availability": {"Red": 12.0}, "min_colors": 1, "start_position": [0, 0, 0]}"#,
        )
        .unwrap();
        assert_eq!(built, decoded);
    }

    #[test]
    fn test_solution_record_json_shape() {
        let record = SolutionRecord {
            colors: BTreeMap::from([(SurfaceId(1), ColorId::from("Red"))]),
            total_time: 24.0,
            path: vec![[0.0, 0.0, 0.0], [1.0, 0.0, 0.0]],
            paint_usage: BTreeMap::from([(ColorId::from("Red"), 12.0)]),
        };
        let json = record.to_json_pretty().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["colors"]["1"], "Red");
        assert_eq!(value["paint_usage"]["Red"], 12.0);
        assert_eq!(value["path"][1][0], 1.0);

        let back: SolutionRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }
}
