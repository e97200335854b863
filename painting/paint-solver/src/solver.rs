//! The end-to-end pipeline.

use std::time::Instant;

use paint_adjacency::AdjacencyAnalyzer;
use paint_color::{
    BacktrackingAssigner, ColorAssigner, ColoringProblem, SearchLimits, SequentialAssigner,
};
use paint_types::{
    ColorStrategy, PaintError, RoutingMode, SolutionRecord, SolveInput, SolverConfig,
};
use tour_pathfind::{GridTourPlanner, NearestNeighborPlanner, TourPlanner, build_occupancy};
use tracing::{debug, info, warn};

use crate::cost::CostEvaluator;
use crate::model::SurfaceModel;
use crate::solution::{SolveStats, Solution};

/// Runs validation, adjacency, coloring, routing and costing in that order.
///
/// A solver holds only its configuration, so one instance can solve any
/// number of inputs; solving the same input twice gives the same solution.
///
/// # Example
///
/// ```
/// use paint_solver::Solver;
/// use paint_types::{SolveInput, SolverConfig, SurfaceRecord};
///
/// let input = SolveInput::new(
///     vec![
///         SurfaceRecord::new(1, 3.0, 4.0, [0.0, 0.0, 0.0], "Vertical-x"),
///         SurfaceRecord::new(2, 3.0, 4.0, [4.0, 0.0, 0.0], "Vertical-y"),
///     ],
///     ["White", "Blue"],
///     1.0,
///     100.0,
///     [0.0, 0.0, 0.0],
/// )
/// .with_min_colors(2);
///
/// let solution = Solver::new(SolverConfig::default()).solve(&input).unwrap();
/// assert_eq!(solution.colors_used().len(), 2);
/// assert_eq!(solution.path().len(), 3);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Solver {
    config: SolverConfig,
}

impl Solver {
    /// Creates a solver.
    #[must_use]
    pub const fn new(config: SolverConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration.
    #[must_use]
    pub const fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Solves one input.
    ///
    /// # Errors
    ///
    /// - [`PaintError::InvalidConfig`] if the configuration is out of range
    /// - [`PaintError::Validation`] if the input is malformed
    /// - [`PaintError::Unsatisfiable`] if no coloring meets budgets, adjacency and diversity
    /// - [`PaintError::SearchExhausted`] if a search cap was hit
    /// - [`PaintError::Unreachable`] if grid routing cannot reach a surface
    /// - [`PaintError::StartEnclosed`] if grid routing has no free cell at the start
    /// - [`PaintError::Spatial`] if the occupancy grid cannot be built
    /// - [`PaintError::BudgetExceeded`] if the plan takes longer than `max_time`
    pub fn solve(&self, input: &SolveInput) -> Result<Solution, PaintError> {
        self.run(input)
            .inspect_err(|error| warn!(%error, "no solution"))
    }

    /// Solves a JSON input record and returns the output record.
    ///
    /// # Errors
    ///
    /// [`PaintError::MalformedInput`] if the text cannot be decoded, otherwise
    /// the same errors as [`solve`](Self::solve).
    pub fn solve_json(&self, text: &str) -> Result<SolutionRecord, PaintError> {
        let input = SolveInput::from_json_str(text)?;
        self.solve(&input).map(|solution| solution.to_record())
    }

    fn run(&self, input: &SolveInput) -> Result<Solution, PaintError> {
        let started = Instant::now();
        self.config.check()?;

        let model = SurfaceModel::from_input(input)?;
        debug!(
            surfaces = model.surfaces().len(),
            colors = model.palette().len(),
            doors = model.doors().len(),
            area = model.total_area(),
            min_colors = model.min_colors(),
            "input validated"
        );

        let adjacency =
            AdjacencyAnalyzer::new(self.config.corner_tolerance()).analyze(model.surfaces());

        let problem = ColoringProblem::new(model.surfaces(), &adjacency, model.palette())
            .with_adjacency_constraint(model.adjacency_constraint())
            .with_min_colors(model.min_colors());
        let assigner = self.assigner(&model);
        let (assignment, color_search) = assigner.assign_with_stats(&problem)?;

        let planner = self.planner(&model)?;
        let tour = planner.plan(model.start(), &model.stops())?;

        let evaluator = CostEvaluator::new(
            model.time_per_meter(),
            self.config.travel_speed(),
            model.max_time(),
        );
        let time = evaluator.evaluate(model.surfaces(), &tour);
        evaluator.check(&time)?;

        let stats = SolveStats {
            color_search,
            color_strategy: assigner.name(),
            planner: planner.name(),
            elapsed: started.elapsed(),
        };
        info!(
            surfaces = model.surfaces().len(),
            colors_used = assignment.distinct_colors(),
            adjacency_edges = adjacency.edge_count(),
            planner = stats.planner,
            total_time = time.total_time(),
            elapsed_us = stats.elapsed.as_micros(),
            "solution found"
        );

        Ok(Solution {
            assignment,
            tour,
            time,
            adjacency,
            stats,
        })
    }

    fn assigner(&self, model: &SurfaceModel) -> Box<dyn ColorAssigner> {
        let backtracking = || -> Box<dyn ColorAssigner> {
            Box::new(BacktrackingAssigner::new(SearchLimits::new(
                self.config.max_nodes(),
                self.config.timeout(),
            )))
        };

        match self.config.color_strategy() {
            ColorStrategy::Backtracking => backtracking(),
            ColorStrategy::PrecedingOnly if !model.adjacency_constraint() => {
                Box::new(SequentialAssigner)
            }
            ColorStrategy::PrecedingOnly => {
                warn!("preceding-only coloring ignores adjacency; using backtracking instead");
                backtracking()
            }
        }
    }

    fn planner(&self, model: &SurfaceModel) -> Result<Box<dyn TourPlanner>, PaintError> {
        let use_grid = match self.config.routing() {
            RoutingMode::Auto => model.has_doors(),
            RoutingMode::NearestNeighbor => false,
            RoutingMode::Grid => true,
        };
        if !use_grid {
            return Ok(Box::new(NearestNeighborPlanner));
        }

        let doors: Vec<_> = model.doors().iter().map(|&(_, p)| p).collect();
        let grid = build_occupancy(model.surfaces(), &doors, model.start(), self.config.grid())?;
        Ok(Box::new(GridTourPlanner::new(
            grid,
            self.config.grid().clone(),
        )))
    }
}

/// Solves one input with the given configuration.
///
/// # Errors
///
/// Same as [`Solver::solve`].
pub fn solve(input: &SolveInput, config: &SolverConfig) -> Result<Solution, PaintError> {
    Solver::new(config.clone()).solve(input)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use paint_spatial::SpatialError;
    use paint_types::{ColorId, GridConfig, SurfaceId, SurfaceRecord};

    fn two_walls() -> SolveInput {
        SolveInput::new(
            vec![
                SurfaceRecord::new(1, 3.0, 4.0, [0.0, 0.0, 0.0], "Vertical-x"),
                SurfaceRecord::new(2, 3.0, 4.0, [4.0, 0.0, 0.0], "Vertical-y"),
            ],
            ["White", "Blue"],
            1.0,
            100.0,
            [0.0, 0.0, 0.0],
        )
        .with_min_colors(2)
    }

    #[test]
    fn test_invalid_config_rejected_before_input() {
        let solver = Solver::new(SolverConfig::default().with_travel_speed(0.0));
        let mut input = two_walls();
        input.surfaces[0].orientation = "bogus".into();
        assert!(matches!(
            solver.solve(&input),
            Err(PaintError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_stats_name_the_strategies() {
        let solution = Solver::default().solve(&two_walls()).unwrap();
        assert_eq!(solution.stats().color_strategy, "backtracking");
        assert_eq!(solution.stats().planner, "nearest-neighbor");
        assert_eq!(solution.stats().color_search.nodes_expanded, 2);
    }

    #[test]
    fn test_preceding_only_falls_back_with_constraint() {
        let solver = Solver::new(
            SolverConfig::default().with_color_strategy(ColorStrategy::PrecedingOnly),
        );
        let solution = solver.solve(&two_walls()).unwrap();
        assert_eq!(solution.stats().color_strategy, "backtracking");

        let relaxed = two_walls().with_adjacency_constraint(false);
        let solution = solver.solve(&relaxed).unwrap();
        assert_eq!(solution.stats().color_strategy, "sequential");
    }

    #[test]
    fn test_routing_mode_selection() {
        let with_door = two_walls().with_door(1, [2.0, 0.0, 0.0]);
        let auto = Solver::default().solve(&with_door).unwrap();
        assert_eq!(auto.stats().planner, "grid");

        let forced = Solver::new(SolverConfig::default().with_routing(RoutingMode::NearestNeighbor))
            .solve(&with_door)
            .unwrap();
        assert_eq!(forced.stats().planner, "nearest-neighbor");
    }

    #[test]
    fn test_grid_cell_cap_comes_from_config() {
        let solver = Solver::new(
            SolverConfig::default()
                .with_routing(RoutingMode::Grid)
                .with_grid(GridConfig::default().with_max_cells(10)),
        );
        let error = solver.solve(&two_walls()).unwrap_err();
        assert!(matches!(
            error,
            PaintError::Spatial(SpatialError::GridTooLarge { max: 10, .. })
        ));
    }

    #[test]
    fn test_start_inside_wall_is_enclosed() {
        // The start sits on the first wall and may not be nudged off it
        let solver = Solver::new(
            SolverConfig::default()
                .with_routing(RoutingMode::Grid)
                .with_grid(GridConfig::default().with_snap_radius(0)),
        );
        let error = solver.solve(&two_walls()).unwrap_err();
        assert!(matches!(error, PaintError::StartEnclosed(_)));
    }

    #[test]
    fn test_solve_json_round_trip() {
        let record = Solver::default()
            .solve_json(
                r#"{"surfaces": [
                        {"id": 1, "height": 3.0, "width": 4.0, "position": [0, 0, 0], "orientation": "Vertical-x"},
                        {"id": 2, "height": 3.0, "width": 4.0, "position": [4, 0, 0], "orientation": "Vertical-y"}
                    ],
                    "colors": ["White", "Blue"],
                    "time_per_meter": 1.0,
                    "max_time": 100.0,
                    "min_colors": 2,
                    "start_position": [0, 0, 0]}"#,
            )
            .unwrap();

        assert_eq!(record.colors[&SurfaceId(1)], ColorId::from("White"));
        assert_eq!(record.colors[&SurfaceId(2)], ColorId::from("Blue"));
        assert_eq!(record.path.len(), 3);
        // Painting 24, travel: 0 to the first wall, 4 to the second at speed 2
        assert_relative_eq!(record.total_time, 26.0);
    }

    #[test]
    fn test_solve_json_rejects_garbage() {
        assert!(matches!(
            Solver::default().solve_json("not json"),
            Err(PaintError::MalformedInput(_))
        ));
    }
}
