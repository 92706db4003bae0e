//! Depth-first backtracking that labels the squares along one simple path.
//!
//! From the root, the search walks to an unvisited neighbour, labels it with a
//! face sharing the current square's edge on that side, and continues from
//! there. A full solution is a walk that reaches every square, so only
//! path-shaped square graphs entered at an endpoint can succeed. Branch state
//! is a small `Copy` value (label slots plus two bitmasks), so every recursive
//! call owns its own snapshot and siblings never see each other's choices.

use crate::faces::{FaceAdjacencyModel, FaceLabel, FaceSet, NUM_FACES};
use crate::grid::AdjacencyGraph;

use super::orient::{orient, shared_edge};
use super::types::Solution;

/// One search branch: labels so far plus used squares/faces.
#[derive(Clone, Copy, Debug)]
struct Branch {
    labels: [Option<FaceLabel>; NUM_FACES],
    used_squares: u32,
    used_faces: FaceSet,
}

impl Branch {
    fn seeded(root: usize, seed: FaceLabel) -> Self {
        let mut labels = [None; NUM_FACES];
        labels[root] = Some(seed);
        Self {
            labels,
            used_squares: 1 << root,
            used_faces: FaceSet::EMPTY.with(seed.face_id()),
        }
    }

    #[inline]
    fn assign(mut self, square: usize, label: FaceLabel) -> Self {
        self.labels[square] = Some(label);
        self.used_squares |= 1 << square;
        self.used_faces = self.used_faces.with(label.face_id());
        self
    }
}

/// Search runner carrying the shared read-only context and a node counter.
pub(crate) struct Matcher<'a> {
    model: &'a FaceAdjacencyModel,
    graph: &'a AdjacencyGraph,
    pub nodes: u64,
}

impl<'a> Matcher<'a> {
    pub fn new(model: &'a FaceAdjacencyModel, graph: &'a AdjacencyGraph) -> Self {
        Self {
            model,
            graph,
            nodes: 0,
        }
    }

    /// First labelling, in enumeration order, of a walk from `root` through every square.
    pub fn solve(&mut self, root: usize, seed: FaceLabel) -> Option<Solution> {
        let n = self.graph.len();
        if n == 0 || n > NUM_FACES || root >= n {
            return None;
        }
        let done = self.extend(root, Branch::seeded(root, seed))?;
        Some(Solution::from_slots(&done.labels[..n]))
    }

    fn extend(&mut self, at: usize, branch: Branch) -> Option<Branch> {
        if branch.used_squares.count_ones() as usize == self.graph.len() {
            return Some(branch);
        }
        let cur = branch.labels[at]?;
        let graph = self.graph;
        for n in graph.neighbors(at) {
            if branch.used_squares & (1 << n.index) != 0 {
                continue;
            }
            let (a, b) = shared_edge(cur, n.dir);
            for id in self.model.faces_containing_edge(a, b).iter() {
                if branch.used_faces.contains(id) {
                    continue;
                }
                let Some(oriented) = orient(self.model.label(id), cur, n.dir) else {
                    continue;
                };
                self.nodes += 1;
                if let Some(done) = self.extend(n.index, branch.assign(n.index, oriented)) {
                    return Some(done);
                }
            }
        }
        None
    }
}
