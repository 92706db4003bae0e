//! Curated internal API (UNSTABLE).
//!
//! A flat surface for the CLI and benches. Breaking changes follow the
//! modules behind it.

// Face tables
pub use crate::faces::{
    FaceAdjacencyModel, FaceId, FaceLabel, LabelError, Vertex, CANONICAL_FACES, NUM_FACES,
    NUM_VERTICES,
};
// Grid input and topology
pub use crate::grid::rand::{draw_polyomino, PolyominoCfg, ReplayToken as PolyominoReplay};
pub use crate::grid::{extract, AdjacencyGraph, Direction, Grid, GridError, Square};
// Matching
pub use crate::matcher::orient::{fits, orient, shared_edge};
pub use crate::matcher::{
    validate, validate_rows, validate_with, Outcome, RemovedEdge, SearchCfg, Solution, Validation,
    MSG_NO_UNFOLDING, MSG_UNFOLDING,
};
// Sequencing and reporting
pub use crate::path::build_path_order;
pub use crate::report::Report;
