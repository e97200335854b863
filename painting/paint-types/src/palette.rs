//! Colors and their paint budgets.

use std::collections::{BTreeMap, HashSet};
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Identifier of a paint color, e.g. `"White"` or `"#FF0000"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColorId(String);

impl ColorId {
    /// Creates a color id.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ColorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ColorId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for ColorId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// An ordered list of colors, each with a paint budget in area units.
///
/// Order matters: the color assigner tries colors in palette order, which is
/// what makes solves deterministic.
///
/// # Example
///
/// ```
/// use paint_types::{ColorId, Palette};
/// use std::collections::BTreeMap;
///
/// let colors = vec![ColorId::from("White"), ColorId::from("Blue")];
/// let budgets = BTreeMap::from([(ColorId::from("White"), 15.0)]);
///
/// let palette = Palette::from_parts(&colors, &budgets).unwrap();
/// assert_eq!(palette.len(), 2);
/// assert_eq!(palette.budget(0), 15.0);
/// assert!(palette.budget(1).is_infinite()); // unspecified means unbounded
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    colors: Vec<ColorId>,
    budgets: Vec<f64>,
}

impl Palette {
    /// Builds a palette from an ordered color list and a budget map.
    ///
    /// Colors missing from `budgets` are unbounded. Budget entries for colors
    /// that are not in `colors` are ignored.
    ///
    /// # Errors
    ///
    /// - [`ValidationError::EmptyColorId`] for an empty color id
    /// - [`ValidationError::DuplicateColor`] if a color is listed twice
    /// - [`ValidationError::InvalidBudget`] for a negative or NaN budget
    pub fn from_parts(
        colors: &[ColorId],
        budgets: &BTreeMap<ColorId, f64>,
    ) -> Result<Self, ValidationError> {
        let mut seen = HashSet::with_capacity(colors.len());
        let mut palette_budgets = Vec::with_capacity(colors.len());

        for color in colors {
            if color.as_str().is_empty() {
                return Err(ValidationError::EmptyColorId);
            }
            if !seen.insert(color) {
                return Err(ValidationError::DuplicateColor(color.clone()));
            }

            let budget = budgets.get(color).copied().unwrap_or(f64::INFINITY);
            if budget.is_nan() || budget < 0.0 {
                return Err(ValidationError::InvalidBudget {
                    color: color.clone(),
                    budget,
                });
            }
            palette_budgets.push(budget);
        }

        Ok(Self {
            colors: colors.to_vec(),
            budgets: palette_budgets,
        })
    }

    /// Builds an unbounded palette.
    #[must_use]
    pub fn unbounded(colors: impl IntoIterator<Item = ColorId>) -> Self {
        let colors: Vec<_> = colors.into_iter().collect();
        let budgets = vec![f64::INFINITY; colors.len()];
        Self { colors, budgets }
    }

    /// Number of colors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Returns `true` if the palette has no colors.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// The color at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.len()`.
    #[must_use]
    pub fn color(&self, index: usize) -> &ColorId {
        &self.colors[index]
    }

    /// The budget of the color at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.len()`.
    #[must_use]
    pub fn budget(&self, index: usize) -> f64 {
        self.budgets[index]
    }

    /// Position of a color in the palette.
    #[must_use]
    pub fn index_of(&self, color: &ColorId) -> Option<usize> {
        self.colors.iter().position(|c| c == color)
    }

    /// Colors in palette order.
    #[must_use]
    pub fn colors(&self) -> &[ColorId] {
        &self.colors
    }

    /// Iterates `(color, budget)` pairs in palette order.
    pub fn iter(&self) -> impl Iterator<Item = (&ColorId, f64)> + '_ {
        self.colors.iter().zip(self.budgets.iter().copied())
    }
}
