//! Vertex, face and bitset types for the tesseract's 2-skeleton.
//!
//! Kept small and `Copy` so the matcher can pass whole search branches by value.

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use super::table::CANONICAL_FACES;

/// Number of tesseract corners.
pub const NUM_VERTICES: usize = 16;
/// Number of square 2-faces on the tesseract boundary.
pub const NUM_FACES: usize = 24;

/// One of the 16 tesseract corners: `A..H` (ids 0..8) span the outer cube,
/// `a..h` (ids 8..16) the inner one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Vertex(u8);

impl Vertex {
    #[inline]
    pub const fn new(id: u8) -> Option<Self> {
        if (id as usize) < NUM_VERTICES {
            Some(Self(id))
        } else {
            None
        }
    }

    /// Compile-time symbol lookup for the face table.
    pub(crate) const fn from_byte(b: u8) -> Self {
        match b {
            b'A'..=b'H' => Self(b - b'A'),
            b'a'..=b'h' => Self(b - b'a' + 8),
            _ => panic!("vertex symbols are A..H and a..h"),
        }
    }

    pub fn from_symbol(c: char) -> Option<Self> {
        match c {
            'A'..='H' | 'a'..='h' => Some(Self::from_byte(c as u8)),
            _ => None,
        }
    }

    #[inline]
    pub const fn id(self) -> u8 {
        self.0
    }

    #[inline]
    pub const fn is_outer(self) -> bool {
        self.0 < 8
    }

    pub fn symbol(self) -> char {
        if self.is_outer() {
            (b'A' + self.0) as char
        } else {
            (b'a' + self.0 - 8) as char
        }
    }

    #[inline]
    const fn bit(self) -> u16 {
        1 << self.0
    }
}

impl fmt::Display for Vertex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Unordered set of vertices (16-bit mask).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct VertexSet(u16);

impl VertexSet {
    #[inline]
    pub fn insert(&mut self, v: Vertex) -> bool {
        let fresh = self.0 & v.bit() == 0;
        self.0 |= v.bit();
        fresh
    }
    #[inline]
    pub fn contains(self, v: Vertex) -> bool {
        self.0 & v.bit() != 0
    }
    #[inline]
    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }
    #[inline]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }
    #[inline]
    pub fn intersection(self, other: VertexSet) -> VertexSet {
        VertexSet(self.0 & other.0)
    }
}

/// Index of a canonical face in the face table (0..24).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FaceId(pub u8);

impl FaceId {
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Set of canonical faces (24-bit mask). Iterates in face-table order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct FaceSet(u32);

impl FaceSet {
    pub const EMPTY: FaceSet = FaceSet(0);

    #[inline]
    pub fn contains(self, id: FaceId) -> bool {
        self.0 & (1 << id.0) != 0
    }
    #[inline]
    pub fn with(self, id: FaceId) -> FaceSet {
        FaceSet(self.0 | (1 << id.0))
    }
    #[inline]
    pub fn insert(&mut self, id: FaceId) {
        self.0 |= 1 << id.0;
    }
    #[inline]
    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }
    #[inline]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }
    pub fn iter(self) -> impl Iterator<Item = FaceId> {
        let mut rest = self.0;
        std::iter::from_fn(move || {
            if rest == 0 {
                return None;
            }
            let id = rest.trailing_zeros() as u8;
            rest &= rest - 1;
            Some(FaceId(id))
        })
    }
}

/// Oriented face label: four corners in winding order.
///
/// Every label is an orientation (rotation and/or reflection) of one canonical
/// face; the canonical id travels with it so "same physical face" checks are an
/// id comparison rather than a set computation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FaceLabel {
    id: FaceId,
    vertices: [Vertex; 4],
}

impl FaceLabel {
    pub(crate) const fn from_table(id: u8, s: &[u8; 4]) -> Self {
        Self {
            id: FaceId(id),
            vertices: [
                Vertex::from_byte(s[0]),
                Vertex::from_byte(s[1]),
                Vertex::from_byte(s[2]),
                Vertex::from_byte(s[3]),
            ],
        }
    }

    /// Canonical orientation of face `id`.
    #[inline]
    pub fn canonical(id: FaceId) -> Self {
        CANONICAL_FACES[id.index()]
    }

    /// The anchor label given to the first square of every search.
    #[inline]
    pub fn anchor() -> Self {
        CANONICAL_FACES[0]
    }

    #[inline]
    pub fn face_id(self) -> FaceId {
        self.id
    }

    #[inline]
    pub fn vertices(self) -> [Vertex; 4] {
        self.vertices
    }

    pub fn vertex_set(self) -> VertexSet {
        let mut set = VertexSet::default();
        for v in self.vertices {
            set.insert(v);
        }
        set
    }

    /// One cyclic step: `[x0,x1,x2,x3]` → `[x3,x0,x1,x2]`.
    #[inline]
    pub fn rotated(self) -> Self {
        let [x0, x1, x2, x3] = self.vertices;
        Self {
            id: self.id,
            vertices: [x3, x0, x1, x2],
        }
    }

    #[inline]
    pub fn reversed(self) -> Self {
        let [x0, x1, x2, x3] = self.vertices;
        Self {
            id: self.id,
            vertices: [x3, x2, x1, x0],
        }
    }

    /// All 8 orientations: four rotations, then four rotations of the reversal.
    pub fn orientations(self) -> [FaceLabel; 8] {
        let mut out = [self; 8];
        for k in 1..4 {
            out[k] = out[k - 1].rotated();
        }
        out[4] = self.reversed();
        for k in 5..8 {
            out[k] = out[k - 1].rotated();
        }
        out
    }

    /// Number of corners shared with `other` (2 for faces meeting along an edge).
    #[inline]
    pub fn shared_vertices(self, other: FaceLabel) -> usize {
        self.vertex_set().intersection(other.vertex_set()).len()
    }

    #[inline]
    pub fn same_face(self, other: FaceLabel) -> bool {
        self.id == other.id
    }
}

impl fmt::Display for FaceLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for v in self.vertices {
            write!(f, "{}", v.symbol())?;
        }
        Ok(())
    }
}

impl Serialize for FaceLabel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Reasons a string is not a face label.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LabelError {
    Length { found: usize },
    UnknownVertex { ch: char },
    RepeatedVertex { ch: char },
    NotAFace { label: String },
}

impl fmt::Display for LabelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Length { found } => write!(f, "a face label has 4 vertices, got {found}"),
            Self::UnknownVertex { ch } => write!(f, "unknown vertex symbol {ch:?}"),
            Self::RepeatedVertex { ch } => write!(f, "vertex {ch:?} repeated"),
            Self::NotAFace { label } => write!(f, "{label} is not a tesseract face"),
        }
    }
}

impl std::error::Error for LabelError {}

impl FromStr for FaceLabel {
    type Err = LabelError;

    /// Accepts any orientation of a canonical face, e.g. `ABCD`, `DCBA`, `BCDA`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = s.trim().chars().collect();
        if chars.len() != 4 {
            return Err(LabelError::Length { found: chars.len() });
        }
        let mut vertices = [Vertex(0); 4];
        let mut seen = VertexSet::default();
        for (slot, &ch) in vertices.iter_mut().zip(&chars) {
            let v = Vertex::from_symbol(ch).ok_or(LabelError::UnknownVertex { ch })?;
            if !seen.insert(v) {
                return Err(LabelError::RepeatedVertex { ch });
            }
            *slot = v;
        }
        CANONICAL_FACES
            .iter()
            .flat_map(|face| face.orientations())
            .find(|o| o.vertices == vertices)
            .ok_or_else(|| LabelError::NotAFace {
                label: chars.iter().collect(),
            })
    }
}
