//! Unfolding matcher: label every grid square with a distinct tesseract face.
//!
//! Purpose
//! - Decide whether 24 squares form a path unfolding of the tesseract's
//!   2-faces, and if so return one labelling (the first in a fixed enumeration
//!   order). Branching nets are rejected: the labelled squares must form a
//!   single path starting at the root square.
//!
//! Search
//! - The first square of each attempt receives the anchor label (`ABCD` unless
//!   `SearchCfg::seed_label` says otherwise).
//! - From the current square the walk steps to an unvisited neighbour; its
//!   candidates are the faces sharing the current edge on that side, minus
//!   faces already used in the branch; each candidate is turned through its 8
//!   orientations until the shared corners sit at the matching label
//!   positions (`orient`).
//! - Square graphs with one cycle are searched once per removable cycle edge;
//!   the edge is taken out through a scoped guard and always restored.
//!
//! Determinism
//! - Neighbours in adjacency order (N, W, E, S), candidate faces in face-table
//!   order, orientations rotations-then-reflections. Same grid, same result.
//!
//! Note on layout
//! - `types.rs` (config and results), `orient.rs` (label-position rules),
//!   `search.rs` (backtracking), `validate.rs` (entry points and cycle handling).

pub mod orient;
mod search;
mod types;
mod validate;

pub use types::{
    Outcome, RemovedEdge, SearchCfg, Solution, Validation, MSG_NO_UNFOLDING, MSG_UNFOLDING,
};
pub use validate::{validate, validate_rows, validate_with};
