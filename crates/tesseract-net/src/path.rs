//! Hamiltonian visiting order over a labelled net, for fold-up sequencing.
//!
//! Consecutive squares in the order are grid neighbours whose faces share
//! exactly two corners, i.e. they meet along a real tesseract edge. The removed
//! edge (if any) is never walked.

use crate::faces::FaceLabel;
use crate::grid::AdjacencyGraph;
use crate::matcher::{RemovedEdge, Solution, Validation};

/// First Hamiltonian path found by DFS with backtracking, or empty if none.
///
/// Starts at `removed.i` when an edge was removed, else at the square holding
/// `anchor`. Neighbours are tried in adjacency order.
pub fn build_path_order(
    solution: &Solution,
    graph: &AdjacencyGraph,
    removed: Option<RemovedEdge>,
    anchor: FaceLabel,
) -> Vec<usize> {
    let start = match removed {
        Some(edge) => Some(edge.i),
        None => solution.position(anchor),
    };
    let Some(start) = start.filter(|&s| s < graph.len() && solution.get(s).is_some()) else {
        return Vec::new();
    };
    let mut walk = Walk {
        solution,
        graph,
        removed,
        target: solution.filled_count(),
        visited: vec![false; graph.len()],
        path: Vec::with_capacity(graph.len()),
    };
    if walk.dfs(start) {
        walk.path
    } else {
        Vec::new()
    }
}

struct Walk<'a> {
    solution: &'a Solution,
    graph: &'a AdjacencyGraph,
    removed: Option<RemovedEdge>,
    target: usize,
    visited: Vec<bool>,
    path: Vec<usize>,
}

impl Walk<'_> {
    fn dfs(&mut self, node: usize) -> bool {
        self.visited[node] = true;
        self.path.push(node);
        if self.path.len() == self.target {
            return true;
        }
        let graph = self.graph;
        for n in graph.neighbors(node) {
            let next = n.index;
            if self.visited[next] || self.removed.is_some_and(|e| e.joins(node, next)) {
                continue;
            }
            let (Some(here), Some(there)) = (self.solution.get(node), self.solution.get(next))
            else {
                continue;
            };
            if here.shared_vertices(there) == 2 && self.dfs(next) {
                return true;
            }
        }
        self.visited[node] = false;
        self.path.pop();
        false
    }
}

impl Validation {
    /// Visiting order for the held solution; empty when invalid or when no
    /// Hamiltonian path exists.
    pub fn path_order(&self) -> Vec<usize> {
        match self.solution() {
            Some(solution) => {
                build_path_order(solution, self.graph(), self.removed_edge(), self.anchor())
            }
            None => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::{extract, Grid};
    use crate::matcher::validate;

    #[test]
    fn no_solution_gives_empty_order() {
        let grid: Grid = "###\n".parse().unwrap();
        let v = validate(&grid);
        assert!(!v.valid());
        assert!(v.path_order().is_empty());
    }

    #[test]
    fn walks_a_labelled_strip_end_to_end() {
        // The labelling the matcher gives a 1×3 strip.
        let (_, graph) = extract(&"###\n".parse::<Grid>().unwrap());
        let labels = ["ABCD", "BbcC", "badc"];
        let slots: Vec<Option<FaceLabel>> =
            labels.iter().map(|s| Some(s.parse().unwrap())).collect();
        let solution = Solution::from_slots(&slots);
        let order = build_path_order(&solution, &graph, None, FaceLabel::anchor());
        assert_eq!(order, [0, 1, 2]);
    }

    #[test]
    fn never_walks_the_removed_edge() {
        let (_, graph) = extract(&"###\n".parse::<Grid>().unwrap());
        let labels = ["ABCD", "BbcC", "badc"];
        let slots: Vec<Option<FaceLabel>> =
            labels.iter().map(|s| Some(s.parse().unwrap())).collect();
        let solution = Solution::from_slots(&slots);
        // Start on square 1 with edge 1–2 removed: 1 → 0 is a dead end.
        let removed = RemovedEdge { i: 1, j: 2 };
        let order = build_path_order(&solution, &graph, Some(removed), FaceLabel::anchor());
        assert!(order.is_empty());
        // Removing 0–1 and starting at 0 leaves 0 isolated.
        let removed = RemovedEdge { i: 0, j: 1 };
        assert!(build_path_order(&solution, &graph, Some(removed), FaceLabel::anchor()).is_empty());
    }

    #[test]
    fn requires_real_face_adjacency() {
        let (_, graph) = extract(&"##\n".parse::<Grid>().unwrap());
        // Grid neighbours, but ABCD and abcd share no corner.
        let slots = [Some(FaceLabel::anchor()), Some("abcd".parse().unwrap())];
        let solution = Solution::from_slots(&slots);
        assert!(build_path_order(&solution, &graph, None, FaceLabel::anchor()).is_empty());
    }
}
