//! Tesseract net validation.
//!
//! Given a grid of filled squares, decide whether the squares can be folded
//! into the 2-skeleton surface of a 4-cube: each square gets one of the 24
//! square faces, distinct, oriented so that every pair of grid-adjacent
//! squares agrees on the shared edge, and the squares form one path that can
//! be folded square by square. Grids whose square graph has a single
//! cycle are accepted if removing one grid edge leaves such a path.
//!
//! Layout
//! - `faces`: vertex/face tables and the edge → faces index.
//! - `grid`: editor grid input, square extraction, adjacency graph.
//! - `matcher`: backtracking labelling search and top-level `validate`.
//! - `path`: Hamiltonian visiting order over a labelled net.
//! - `report`: serializable summary of one validation.
//!
//! API Policy
//! - Project-internal; `api` and `prelude` are convenience surfaces and may
//!   change with the algorithms behind them.

pub mod api;
pub mod faces;
pub mod grid;
pub mod matcher;
pub mod path;
pub mod report;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use faces::{FaceAdjacencyModel, FaceLabel};
pub use grid::Grid;
pub use matcher::{validate, validate_with, SearchCfg, Validation};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::faces::{FaceAdjacencyModel, FaceId, FaceLabel, Vertex, NUM_FACES};
    pub use crate::grid::rand::{draw_polyomino, PolyominoCfg, ReplayToken};
    pub use crate::grid::{extract, AdjacencyGraph, Direction, Grid, Square};
    pub use crate::matcher::{
        validate, validate_rows, validate_with, Outcome, RemovedEdge, SearchCfg, Solution,
        Validation,
    };
    pub use crate::report::Report;
}
