//! The fixed face table and the edge → faces index built from it.

use super::types::{FaceId, FaceLabel, FaceSet, Vertex, NUM_FACES, NUM_VERTICES};

/// The 24 square faces in face-table order. Entry 0 (`ABCD`) is the search anchor.
///
/// Outer cube `ABCD/EFGH`, inner cube `abcd/efgh`, and the twelve faces that
/// join an outer edge to its inner copy.
pub const CANONICAL_FACES: [FaceLabel; NUM_FACES] = [
    FaceLabel::from_table(0, b"ABCD"),
    FaceLabel::from_table(1, b"ABba"),
    FaceLabel::from_table(2, b"BCcb"),
    FaceLabel::from_table(3, b"DCcd"),
    FaceLabel::from_table(4, b"abcd"),
    FaceLabel::from_table(5, b"ADda"),
    FaceLabel::from_table(6, b"EFGH"),
    FaceLabel::from_table(7, b"EFfe"),
    FaceLabel::from_table(8, b"FGgf"),
    FaceLabel::from_table(9, b"HGgh"),
    FaceLabel::from_table(10, b"efgh"),
    FaceLabel::from_table(11, b"EHhe"),
    FaceLabel::from_table(12, b"BCGF"),
    FaceLabel::from_table(13, b"BbfF"),
    FaceLabel::from_table(14, b"ABFE"),
    FaceLabel::from_table(15, b"EHDA"),
    FaceLabel::from_table(16, b"AEea"),
    FaceLabel::from_table(17, b"abfe"),
    FaceLabel::from_table(18, b"adhe"),
    FaceLabel::from_table(19, b"DHhd"),
    FaceLabel::from_table(20, b"cdhg"),
    FaceLabel::from_table(21, b"gfbc"),
    FaceLabel::from_table(22, b"CGgc"),
    FaceLabel::from_table(23, b"CDHG"),
];

/// Edge index over the canonical faces.
///
/// `by_edge[a][b]` holds every face in which `a` and `b` are consecutive corners
/// in either winding direction; the table is symmetric by construction.
#[derive(Clone, Debug)]
pub struct FaceAdjacencyModel {
    by_edge: [[FaceSet; NUM_VERTICES]; NUM_VERTICES],
}

impl Default for FaceAdjacencyModel {
    fn default() -> Self {
        Self::new()
    }
}

impl FaceAdjacencyModel {
    pub fn new() -> Self {
        let mut by_edge = [[FaceSet::EMPTY; NUM_VERTICES]; NUM_VERTICES];
        for face in CANONICAL_FACES.iter() {
            let v = face.vertices();
            for j in 0..4 {
                let (a, b) = (v[j].id() as usize, v[(j + 1) % 4].id() as usize);
                by_edge[a][b].insert(face.face_id());
                by_edge[b][a].insert(face.face_id());
            }
        }
        Self { by_edge }
    }

    #[inline]
    pub fn faces(&self) -> &'static [FaceLabel; NUM_FACES] {
        &CANONICAL_FACES
    }

    #[inline]
    pub fn label(&self, id: FaceId) -> FaceLabel {
        CANONICAL_FACES[id.index()]
    }

    /// Faces having `v1`–`v2` as an edge (empty if the corners are not joined).
    #[inline]
    pub fn faces_containing_edge(&self, v1: Vertex, v2: Vertex) -> FaceSet {
        self.by_edge[v1.id() as usize][v2.id() as usize]
    }

    /// Faces sharing at least one edge with `id`, excluding `id` itself.
    pub fn edge_neighbors(&self, id: FaceId) -> FaceSet {
        let v = self.label(id).vertices();
        let mut out = FaceSet::EMPTY;
        for j in 0..4 {
            for other in self.faces_containing_edge(v[j], v[(j + 1) % 4]).iter() {
                if other != id {
                    out.insert(other);
                }
            }
        }
        out
    }
}
