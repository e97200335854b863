//! Error types for the painting solver.
//!
//! [`PaintError`] is the single discriminated result every stage of a solve
//! returns. Input problems are reported as [`ValidationError`] before any
//! search starts.

use std::time::Duration;

use nalgebra::Point3;
use paint_spatial::SpatialError;

use crate::palette::ColorId;
use crate::surface::SurfaceId;

/// A malformed input record, detected before any search runs.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum ValidationError {
    /// A surface has no height or width.
    #[error("surface {id}: missing {field}")]
    MissingDimension {
        /// The offending surface.
        id: SurfaceId,
        /// `"height"` or `"width"`.
        field: &'static str,
    },

    /// A surface dimension is zero or negative.
    #[error("surface {id}: {field} must be positive, got {value}")]
    NonPositiveDimension {
        /// The offending surface.
        id: SurfaceId,
        /// `"height"` or `"width"`.
        field: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// A coordinate or dimension is NaN or infinite.
    #[error("{context} must be finite")]
    NonFiniteValue {
        /// What held the value, e.g. `"surface 3 position"`.
        context: String,
    },

    /// The orientation tag is not one of the three recognised values.
    #[error("surface {id}: unrecognized orientation {tag:?}")]
    UnknownOrientation {
        /// The offending surface.
        id: SurfaceId,
        /// The tag as written in the input.
        tag: String,
    },

    /// Two surfaces share an id.
    #[error("surface id {0} appears more than once")]
    DuplicateSurfaceId(SurfaceId),

    /// The palette lists a color twice.
    #[error("color {0} appears more than once in the palette")]
    DuplicateColor(ColorId),

    /// The palette contains an empty color id.
    #[error("color ids must not be empty")]
    EmptyColorId,

    /// A paint budget is negative or NaN.
    #[error("paint budget for {color} must be non-negative, got {budget}")]
    InvalidBudget {
        /// The color the budget belongs to.
        color: ColorId,
        /// The rejected budget.
        budget: f64,
    },

    /// A door entry names a surface that does not exist.
    #[error("door refers to unknown surface {0}")]
    UnknownDoorSurface(SurfaceId),

    /// A timing parameter is negative or not a number.
    #[error("{field} must be a non-negative number, got {value}")]
    InvalidTiming {
        /// `"time_per_meter"` or `"max_time"`.
        field: &'static str,
        /// The rejected value.
        value: f64,
    },
}

/// Why no color assignment exists.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum UnsatisfiableReason {
    /// More distinct colors are required than there are surfaces to hold them.
    TooFewSurfaces {
        /// Required distinct colors.
        min_colors: usize,
        /// Number of surfaces.
        surfaces: usize,
    },
    /// More distinct colors are required than the palette offers.
    TooFewColors {
        /// Required distinct colors.
        min_colors: usize,
        /// Palette size.
        palette: usize,
    },
    /// Every branch was explored without a complete assignment.
    SearchSpaceExhausted {
        /// Search nodes visited before giving up.
        nodes_expanded: usize,
    },
    /// The sequential fast path could not color a surface.
    NoColorFor(SurfaceId),
    /// A single pass colored every surface but with too few distinct colors.
    MinColorsNotReached {
        /// Required distinct colors.
        min_colors: usize,
        /// Distinct colors actually used.
        used: usize,
    },
}

impl std::fmt::Display for UnsatisfiableReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TooFewSurfaces {
                min_colors,
                surfaces,
            } => write!(
                f,
                "{min_colors} distinct colors required but only {surfaces} surfaces"
            ),
            Self::TooFewColors {
                min_colors,
                palette,
            } => write!(
                f,
                "{min_colors} distinct colors required but the palette has {palette}"
            ),
            Self::SearchSpaceExhausted { nodes_expanded } => {
                write!(f, "all branches exhausted after {nodes_expanded} nodes")
            }
            Self::NoColorFor(id) => write!(f, "no admissible color for surface {id}"),
            Self::MinColorsNotReached { min_colors, used } => write!(
                f,
                "{min_colors} distinct colors required but the pass used {used}"
            ),
        }
    }
}

/// Errors returned by a solve.
///
/// No stage recovers from another stage's failure; the first failure is
/// returned as-is and no partial solution is produced.
///
/// # Example
///
/// ```
/// use paint_types::{PaintError, UnsatisfiableReason};
///
/// let error = PaintError::Unsatisfiable(UnsatisfiableReason::TooFewSurfaces {
///     min_colors: 3,
///     surfaces: 2,
/// });
/// assert!(error.is_unsatisfiable());
/// assert!(error.to_string().contains("3 distinct colors"));
/// ```
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum PaintError {
    /// The input record is malformed.
    #[error("invalid input: {0}")]
    Validation(#[from] ValidationError),

    /// The input could not be decoded at all.
    #[error("malformed input record: {0}")]
    MalformedInput(String),

    /// Paint budgets, adjacency and diversity cannot all be met.
    #[error("unsatisfiable: {0}")]
    Unsatisfiable(UnsatisfiableReason),

    /// A valid assignment and path exist but take too long.
    #[error("total time {total_time:.3} exceeds the maximum of {max_time:.3}")]
    BudgetExceeded {
        /// Computed painting plus travel time.
        total_time: f64,
        /// The allowed maximum.
        max_time: f64,
    },

    /// A search hit its node or time cap before reaching an answer.
    #[error("{stage} search aborted after {nodes_expanded} nodes ({elapsed:?})")]
    SearchExhausted {
        /// Which search gave up.
        stage: &'static str,
        /// Nodes expanded before the cap.
        nodes_expanded: usize,
        /// Time spent before the cap.
        elapsed: Duration,
    },

    /// Grid routing cannot reach a surface through free cells and doors.
    #[error("surface {0} is unreachable on the occupancy grid")]
    Unreachable(SurfaceId),

    /// Grid routing found no free cell near the start position.
    #[error("start position {0} is enclosed on the occupancy grid")]
    StartEnclosed(Point3<f64>),

    /// A configuration value is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The occupancy grid could not be built.
    #[error(transparent)]
    Spatial(#[from] SpatialError),
}

impl PaintError {
    /// Creates an invalid configuration error with the given message.
    #[must_use]
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig(message.into())
    }

    /// Returns `true` for [`PaintError::Validation`].
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Returns `true` for [`PaintError::Unsatisfiable`].
    #[must_use]
    pub const fn is_unsatisfiable(&self) -> bool {
        matches!(self, Self::Unsatisfiable(_))
    }

    /// Returns `true` for [`PaintError::BudgetExceeded`].
    #[must_use]
    pub const fn is_budget_exceeded(&self) -> bool {
        matches!(self, Self::BudgetExceeded { .. })
    }

    /// Returns `true` for [`PaintError::SearchExhausted`].
    #[must_use]
    pub const fn is_search_exhausted(&self) -> bool {
        matches!(self, Self::SearchExhausted { .. })
    }
}
