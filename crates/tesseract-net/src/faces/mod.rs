//! Tesseract faces: the 16 corners, the 24 canonical square faces, and the
//! edge index used to find faces meeting along a given edge.
//!
//! Purpose
//! - Give the matcher integer-keyed lookups (vertex ids 0..16, face ids 0..24)
//!   instead of string labels, while labels still print and parse as the usual
//!   `A..H`/`a..h` letters.
//!
//! Conventions
//! - A `FaceLabel` is ordered; its winding decides which label positions face
//!   which grid direction (see `matcher::orient`).
//! - Two labels denote the same physical face iff their vertex sets agree,
//!   which is tracked by the canonical `FaceId` each label carries.

mod table;
mod types;

pub use table::{FaceAdjacencyModel, CANONICAL_FACES};
pub use types::{
    FaceId, FaceLabel, FaceSet, LabelError, Vertex, VertexSet, NUM_FACES, NUM_VERTICES,
};
