//! Label-position conventions tying a face label to grid directions.
//!
//! For a square labelled `c`, the edge it shares with its neighbour lies at
//! label positions (0,1) towards North, (1,2) East, (2,3) South, (3,0) West.
//! A neighbour label `f` fits when the same two corners sit at the mirrored
//! positions of `f`, so the shared edge is walked in opposite directions.

use crate::faces::{FaceLabel, Vertex};
use crate::grid::Direction;

/// Corners of `cur` on its side facing `dir`.
#[inline]
pub fn shared_edge(cur: FaceLabel, dir: Direction) -> (Vertex, Vertex) {
    let v = cur.vertices();
    match dir {
        Direction::North => (v[0], v[1]),
        Direction::East => (v[1], v[2]),
        Direction::South => (v[2], v[3]),
        Direction::West => (v[3], v[0]),
    }
}

/// Whether `candidate`, placed on the `dir` side of `cur`, matches it vertex for vertex.
#[inline]
pub fn fits(candidate: FaceLabel, cur: FaceLabel, dir: Direction) -> bool {
    let (f, c) = (candidate.vertices(), cur.vertices());
    match dir {
        Direction::North => f[2] == c[1] && f[3] == c[0],
        Direction::East => f[0] == c[1] && f[3] == c[2],
        Direction::South => f[1] == c[2] && f[0] == c[3],
        Direction::West => f[2] == c[3] && f[1] == c[0],
    }
}

/// First of the 8 orientations of `face` (rotations, then reflected rotations)
/// that fits on the `dir` side of `cur`.
pub fn orient(face: FaceLabel, cur: FaceLabel, dir: Direction) -> Option<FaceLabel> {
    face.orientations()
        .into_iter()
        .find(|&o| fits(o, cur, dir))
}
