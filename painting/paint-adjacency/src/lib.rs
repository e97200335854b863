//! Adjacency between rectangular surfaces.
//!
//! Two surfaces are adjacent when they share a corner point or when one of
//! their boundary edges lies on the same line as one of the other's and the
//! two edges overlap. Adjacent surfaces are the ones that must not share a
//! color when the adjacency constraint is on.
//!
//! - [`AdjacencyAnalyzer`] - Compares every pair of surfaces under a tolerance
//! - [`AdjacencyGraph`] - The resulting symmetric neighbour map
//!
//! # Example
//!
//! ```
//! use paint_adjacency::AdjacencyAnalyzer;
//! use paint_types::{Orientation, Point3, Surface, SurfaceId};
//!
//! // Two walls meeting at the corner (4, 0, 0)
//! let surfaces = [
//!     Surface::new(SurfaceId(1), 3.0, 4.0, Point3::new(0.0, 0.0, 0.0), Orientation::VerticalX),
//!     Surface::new(SurfaceId(2), 3.0, 4.0, Point3::new(4.0, 0.0, 0.0), Orientation::VerticalY),
//! ];
//!
//! let graph = AdjacencyAnalyzer::default().analyze(&surfaces);
//! assert!(graph.are_adjacent(SurfaceId(1), SurfaceId(2)));
//! assert_eq!(graph.edge_count(), 1);
//! ```

#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]

mod analyzer;
mod graph;

pub use analyzer::AdjacencyAnalyzer;
pub use graph::AdjacencyGraph;
