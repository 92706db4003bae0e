//! Square list and 4-neighbour adjacency graph extracted from a `Grid`.

use std::collections::VecDeque;
use std::ops::Deref;

use serde::Serialize;

use super::Grid;

/// Grid direction from a square to its neighbour.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    /// Neighbour scan order; equals ascending neighbour index under row-major numbering.
    pub const SCAN: [Direction; 4] = [
        Direction::North,
        Direction::West,
        Direction::East,
        Direction::South,
    ];

    #[inline]
    pub fn opposite(self) -> Self {
        match self {
            Direction::North => Direction::South,
            Direction::East => Direction::West,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
        }
    }

    /// `(d_row, d_col)` step.
    #[inline]
    pub fn offset(self) -> (isize, isize) {
        match self {
            Direction::North => (-1, 0),
            Direction::East => (0, 1),
            Direction::South => (1, 0),
            Direction::West => (0, -1),
        }
    }

    pub fn letter(self) -> char {
        match self {
            Direction::North => 'N',
            Direction::East => 'E',
            Direction::South => 'S',
            Direction::West => 'W',
        }
    }
}

/// A filled cell. Its index is its position in the extracted list.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Square {
    pub row: usize,
    pub col: usize,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Neighbor {
    pub index: usize,
    pub dir: Direction,
}

/// Undirected square adjacency with a direction tag on each half-edge.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AdjacencyGraph {
    adj: Vec<Vec<Neighbor>>,
}

impl AdjacencyGraph {
    pub fn from_squares(squares: &[Square]) -> Self {
        let rows = squares.iter().map(|s| s.row + 1).max().unwrap_or(0);
        let cols = squares.iter().map(|s| s.col + 1).max().unwrap_or(0);
        let mut at: Vec<Option<usize>> = vec![None; rows * cols];
        for (i, s) in squares.iter().enumerate() {
            at[s.row * cols + s.col] = Some(i);
        }
        let lookup = |r: isize, c: isize| -> Option<usize> {
            if r < 0 || c < 0 || r as usize >= rows || c as usize >= cols {
                return None;
            }
            at[r as usize * cols + c as usize]
        };
        let adj = squares
            .iter()
            .map(|s| {
                Direction::SCAN
                    .iter()
                    .filter_map(|&dir| {
                        let (dr, dc) = dir.offset();
                        lookup(s.row as isize + dr, s.col as isize + dc)
                            .map(|index| Neighbor { index, dir })
                    })
                    .collect()
            })
            .collect();
        Self { adj }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.adj.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.adj.is_empty()
    }

    #[inline]
    pub fn neighbors(&self, i: usize) -> &[Neighbor] {
        &self.adj[i]
    }

    #[inline]
    pub fn degree(&self, i: usize) -> usize {
        self.adj[i].len()
    }

    pub fn edge_count(&self) -> usize {
        self.adj.iter().map(Vec::len).sum::<usize>() / 2
    }

    pub fn contains_edge(&self, i: usize, j: usize) -> bool {
        i < self.len() && self.adj[i].iter().any(|n| n.index == j)
    }

    /// Undirected edges `(i, j)` with `i < j`, ordered by `i` then neighbour scan order.
    pub fn edges(&self) -> Vec<(usize, usize)> {
        self.adj
            .iter()
            .enumerate()
            .flat_map(|(i, ns)| ns.iter().filter(move |n| n.index > i).map(move |n| (i, n.index)))
            .collect()
    }

    /// Lowest-index square of degree 1.
    pub fn first_leaf(&self) -> Option<usize> {
        self.adj.iter().position(|ns| ns.len() == 1)
    }

    /// Number of squares reachable from `start` (inclusive).
    pub fn reachable_from(&self, start: usize) -> usize {
        if start >= self.len() {
            return 0;
        }
        let mut seen = vec![false; self.len()];
        let mut queue = VecDeque::from([start]);
        seen[start] = true;
        let mut count = 0;
        while let Some(u) = queue.pop_front() {
            count += 1;
            for n in &self.adj[u] {
                if !seen[n.index] {
                    seen[n.index] = true;
                    queue.push_back(n.index);
                }
            }
        }
        count
    }

    /// Connected with exactly `len - 1` edges.
    pub fn is_tree(&self) -> bool {
        !self.is_empty() && self.edge_count() + 1 == self.len() && self.reachable_from(0) == self.len()
    }

    /// Temporarily delete edge `i–j`; the edge is restored when the guard drops.
    ///
    /// Returns `None` if the edge does not exist.
    pub fn without_edge(&mut self, i: usize, j: usize) -> Option<EdgeRemoval<'_>> {
        let at_i = self.adj.get(i)?.iter().position(|n| n.index == j)?;
        let at_j = self.adj.get(j)?.iter().position(|n| n.index == i)?;
        let half_i = self.adj[i].remove(at_i);
        let half_j = self.adj[j].remove(at_j);
        Some(EdgeRemoval {
            graph: self,
            i,
            j,
            half_i: (at_i, half_i),
            half_j: (at_j, half_j),
        })
    }
}

/// Scoped edge deletion. Derefs to the edited graph; `Drop` puts both
/// half-edges back at their original positions so neighbour order is unchanged.
#[derive(Debug)]
pub struct EdgeRemoval<'g> {
    graph: &'g mut AdjacencyGraph,
    i: usize,
    j: usize,
    half_i: (usize, Neighbor),
    half_j: (usize, Neighbor),
}

impl EdgeRemoval<'_> {
    pub fn edge(&self) -> (usize, usize) {
        (self.i, self.j)
    }
}

impl Deref for EdgeRemoval<'_> {
    type Target = AdjacencyGraph;

    fn deref(&self) -> &AdjacencyGraph {
        self.graph
    }
}

impl Drop for EdgeRemoval<'_> {
    fn drop(&mut self) {
        let (pos_i, n_i) = self.half_i;
        let (pos_j, n_j) = self.half_j;
        self.graph.adj[self.i].insert(pos_i, n_i);
        self.graph.adj[self.j].insert(pos_j, n_j);
    }
}

/// Filled squares in row-major order and the graph joining edge-adjacent ones.
///
/// Never fails: an all-empty grid yields no squares and an empty graph.
pub fn extract(grid: &Grid) -> (Vec<Square>, AdjacencyGraph) {
    let squares: Vec<Square> = grid.filled().map(|(row, col)| Square { row, col }).collect();
    let graph = AdjacencyGraph::from_squares(&squares);
    (squares, graph)
}
