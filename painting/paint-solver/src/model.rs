//! Validation of input records into typed surfaces.

use std::collections::BTreeSet;

use nalgebra::Point3;
use paint_types::{
    Orientation, Palette, SolveInput, Surface, SurfaceId, SurfaceRecord, TourStop, ValidationError,
};

/// A validated solve request.
///
/// Built once per solve and read-only afterwards. Every surface has positive
/// finite dimensions, a finite position and a known orientation; ids are
/// unique; every door belongs to an existing surface.
#[derive(Debug, Clone, PartialEq)]
pub struct SurfaceModel {
    surfaces: Vec<Surface>,
    palette: Palette,
    time_per_meter: f64,
    max_time: f64,
    adjacency_constraint: bool,
    min_colors: usize,
    start: Point3<f64>,
    doors: Vec<(SurfaceId, Point3<f64>)>,
}

impl SurfaceModel {
    /// Validates an input record.
    ///
    /// Checks run in this order and the first failure is returned: each
    /// surface, duplicate ids, the palette and its budgets, the timing
    /// values, the start position, the doors.
    ///
    /// # Errors
    ///
    /// Returns the [`ValidationError`] describing the first malformed value.
    ///
    /// # Example
    ///
    /// ```
    /// use paint_solver::SurfaceModel;
    /// use paint_types::{SolveInput, SurfaceRecord, ValidationError};
    ///
    /// let input = SolveInput::new(
    ///     vec![SurfaceRecord::new(1, 3.0, 4.0, [0.0, 0.0, 0.0], "Vertical")],
    ///     ["Red"],
    ///     1.0,
    ///     100.0,
    ///     [0.0, 0.0, 0.0],
    /// );
    ///
    /// let error = SurfaceModel::from_input(&input).unwrap_err();
    /// assert!(matches!(error, ValidationError::UnknownOrientation { .. }));
    /// ```
    pub fn from_input(input: &SolveInput) -> Result<Self, ValidationError> {
        let surfaces = input
            .surfaces
            .iter()
            .map(parse_surface)
            .collect::<Result<Vec<_>, _>>()?;

        let mut seen = BTreeSet::new();
        for surface in &surfaces {
            if !seen.insert(surface.id()) {
                return Err(ValidationError::DuplicateSurfaceId(surface.id()));
            }
        }

        let palette = Palette::from_parts(&input.colors, &input.paint_availability)?;

        if !(input.time_per_meter.is_finite() && input.time_per_meter >= 0.0) {
            return Err(ValidationError::InvalidTiming {
                field: "time_per_meter",
                value: input.time_per_meter,
            });
        }
        if input.max_time.is_nan() || input.max_time < 0.0 {
            return Err(ValidationError::InvalidTiming {
                field: "max_time",
                value: input.max_time,
            });
        }

        let start = finite_point(input.start_position, || "start_position".to_owned())?;

        let mut doors = Vec::with_capacity(input.doors.len());
        for (&id, door) in &input.doors {
            if !seen.contains(&id) {
                return Err(ValidationError::UnknownDoorSurface(id));
            }
            let position = finite_point(door.door_position, || format!("door of surface {id}"))?;
            doors.push((id, position));
        }

        Ok(Self {
            surfaces,
            palette,
            time_per_meter: input.time_per_meter,
            max_time: input.max_time,
            adjacency_constraint: input.adjacency_constraint,
            min_colors: input.min_colors,
            start,
            doors,
        })
    }

    /// Surfaces in input order.
    #[must_use]
    pub fn surfaces(&self) -> &[Surface] {
        &self.surfaces
    }

    /// The budgeted palette.
    #[must_use]
    pub const fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Painting time per unit area.
    #[must_use]
    pub const fn time_per_meter(&self) -> f64 {
        self.time_per_meter
    }

    /// Upper bound on total time.
    #[must_use]
    pub const fn max_time(&self) -> f64 {
        self.max_time
    }

    /// Whether adjacent surfaces must differ.
    #[must_use]
    pub const fn adjacency_constraint(&self) -> bool {
        self.adjacency_constraint
    }

    /// Minimum number of distinct colors.
    #[must_use]
    pub const fn min_colors(&self) -> usize {
        self.min_colors
    }

    /// Where the agent starts.
    #[must_use]
    pub const fn start(&self) -> Point3<f64> {
        self.start
    }

    /// Doors with the surface they sit in, ordered by surface id.
    #[must_use]
    pub fn doors(&self) -> &[(SurfaceId, Point3<f64>)] {
        &self.doors
    }

    /// Whether any door was given.
    #[must_use]
    pub fn has_doors(&self) -> bool {
        !self.doors.is_empty()
    }

    /// One tour stop per surface, at its position, in input order.
    #[must_use]
    pub fn stops(&self) -> Vec<TourStop> {
        self.surfaces
            .iter()
            .map(|s| TourStop::new(s.id(), s.position()))
            .collect()
    }

    /// Sum of all surface areas.
    #[must_use]
    pub fn total_area(&self) -> f64 {
        self.surfaces.iter().map(Surface::area).sum()
    }
}

fn parse_surface(record: &SurfaceRecord) -> Result<Surface, ValidationError> {
    let id = record.id;
    let height = dimension(id, "height", record.height)?;
    let width = dimension(id, "width", record.width)?;
    let position = finite_point(record.position, || format!("surface {id} position"))?;
    let orientation: Orientation =
        record
            .orientation
            .parse()
            .map_err(|_| ValidationError::UnknownOrientation {
                id,
                tag: record.orientation.clone(),
            })?;

    Ok(Surface::new(id, height, width, position, orientation))
}

fn dimension(id: SurfaceId, field: &'static str, value: Option<f64>) -> Result<f64, ValidationError> {
    let value = value.ok_or(ValidationError::MissingDimension { id, field })?;
    if !value.is_finite() {
        return Err(ValidationError::NonFiniteValue {
            context: format!("surface {id} {field}"),
        });
    }
    if value <= 0.0 {
        return Err(ValidationError::NonPositiveDimension { id, field, value });
    }
    Ok(value)
}

fn finite_point(
    coords: [f64; 3],
    context: impl FnOnce() -> String,
) -> Result<Point3<f64>, ValidationError> {
    if coords.iter().all(|c| c.is_finite()) {
        Ok(Point3::from(coords))
    } else {
        Err(ValidationError::NonFiniteValue { context: context() })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;
    use paint_types::ColorId;

    fn record(id: u64, orientation: &str) -> SurfaceRecord {
        SurfaceRecord::new(id, 3.0, 4.0, [0.0, 0.0, 0.0], orientation)
    }

    fn input(surfaces: Vec<SurfaceRecord>) -> SolveInput {
        SolveInput::new(surfaces, ["Red", "Blue"], 1.0, 100.0, [0.0, 0.0, 0.0])
    }

    #[test]
    fn test_accepts_original_orientation_spellings() {
        let model = SurfaceModel::from_input(&input(vec![
            record(1, "Vertical-x"),
            record(2, "vertical-y"),
            record(3, "horizontal"),
            record(4, "Horizontal"),
        ]))
        .unwrap();

        let orientations: Vec<_> = model.surfaces().iter().map(Surface::orientation).collect();
        assert_eq!(
            orientations,
            [
                Orientation::VerticalX,
                Orientation::VerticalY,
                Orientation::Horizontal,
                Orientation::Horizontal
            ]
        );
        assert_eq!(model.total_area(), 48.0);
    }

    #[test]
    fn test_unknown_and_missing_orientation() {
        for tag in ["Vertical", "", "diagonal"] {
            let error = SurfaceModel::from_input(&input(vec![record(9, tag)])).unwrap_err();
            assert_eq!(
                error,
                ValidationError::UnknownOrientation {
                    id: SurfaceId(9),
                    tag: tag.to_owned()
                }
            );
        }
    }

    #[test]
    fn test_dimension_errors() {
        let mut missing = record(1, "horizontal");
        missing.width = None;
        assert_eq!(
            SurfaceModel::from_input(&input(vec![missing])).unwrap_err(),
            ValidationError::MissingDimension {
                id: SurfaceId(1),
                field: "width"
            }
        );

        let mut zero = record(2, "horizontal");
        zero.height = Some(0.0);
        assert!(matches!(
            SurfaceModel::from_input(&input(vec![zero])).unwrap_err(),
            ValidationError::NonPositiveDimension { field: "height", .. }
        ));

        let mut infinite = record(3, "horizontal");
        infinite.height = Some(f64::INFINITY);
        assert!(matches!(
            SurfaceModel::from_input(&input(vec![infinite])).unwrap_err(),
            ValidationError::NonFiniteValue { .. }
        ));
    }

    #[test]
    fn test_non_finite_position() {
        let mut bad = record(5, "horizontal");
        bad.position = [0.0, f64::NAN, 0.0];
        let error = SurfaceModel::from_input(&input(vec![bad])).unwrap_err();
        assert_eq!(
            error,
            ValidationError::NonFiniteValue {
                context: "surface 5 position".to_owned()
            }
        );
    }

    #[test]
    fn test_surface_errors_come_before_duplicates() {
        let error = SurfaceModel::from_input(&input(vec![
            record(1, "horizontal"),
            record(1, "horizontal"),
            record(2, "nope"),
        ]))
        .unwrap_err();
        assert!(matches!(error, ValidationError::UnknownOrientation { .. }));

        let error = SurfaceModel::from_input(&input(vec![
            record(1, "horizontal"),
            record(1, "horizontal"),
        ]))
        .unwrap_err();
        assert_eq!(error, ValidationError::DuplicateSurfaceId(SurfaceId(1)));
    }

    #[test]
    fn test_palette_errors() {
        let mut dup = input(vec![record(1, "horizontal")]);
        dup.colors.push(ColorId::from("Red"));
        assert_eq!(
            SurfaceModel::from_input(&dup).unwrap_err(),
            ValidationError::DuplicateColor(ColorId::from("Red"))
        );

        let negative = input(vec![record(1, "horizontal")]).with_budget("Blue", -1.0);
        assert!(matches!(
            SurfaceModel::from_input(&negative).unwrap_err(),
            ValidationError::InvalidBudget { .. }
        ));

        // Budgets for colors outside the palette are ignored
        let foreign = input(vec![record(1, "horizontal")]).with_budget("Yellow", 10.0);
        assert_eq!(SurfaceModel::from_input(&foreign).unwrap().palette().len(), 2);
    }

    #[test]
    fn test_timing_errors() {
        let mut negative = input(vec![]);
        negative.time_per_meter = -0.5;
        assert_eq!(
            SurfaceModel::from_input(&negative).unwrap_err(),
            ValidationError::InvalidTiming {
                field: "time_per_meter",
                value: -0.5
            }
        );

        let mut nan = input(vec![]);
        nan.max_time = f64::NAN;
        assert!(matches!(
            SurfaceModel::from_input(&nan).unwrap_err(),
            ValidationError::InvalidTiming {
                field: "max_time",
                ..
            }
        ));

        let mut unbounded = input(vec![]);
        unbounded.max_time = f64::INFINITY;
        assert!(SurfaceModel::from_input(&unbounded).is_ok());
    }

    #[test]
    fn test_doors_must_reference_surfaces() {
        let unknown = input(vec![record(1, "horizontal")]).with_door(2, [1.0, 0.0, 0.0]);
        assert_eq!(
            SurfaceModel::from_input(&unknown).unwrap_err(),
            ValidationError::UnknownDoorSurface(SurfaceId(2))
        );

        let known = input(vec![record(1, "horizontal")]).with_door(1, [1.0, 0.0, 0.0]);
        let model = SurfaceModel::from_input(&known).unwrap();
        assert!(model.has_doors());
        assert_eq!(model.doors(), [(SurfaceId(1), Point3::new(1.0, 0.0, 0.0))]);
    }

    #[test]
    fn test_stops_follow_input_order() {
        let mut a = record(3, "horizontal");
        a.position = [1.0, 2.0, 3.0];
        let model = SurfaceModel::from_input(&input(vec![a, record(1, "horizontal")])).unwrap();
        let stops = model.stops();
        assert_eq!(stops[0], TourStop::new(SurfaceId(3), Point3::new(1.0, 2.0, 3.0)));
        assert_eq!(stops[1].surface, SurfaceId(1));
    }
}
