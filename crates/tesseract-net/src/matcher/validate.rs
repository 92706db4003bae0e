//! Top-level validation: count gate, direct tree search, single-edge removal.

use crate::faces::{FaceAdjacencyModel, FaceLabel, NUM_FACES};
use crate::grid::{extract, AdjacencyGraph, Grid, GridError, Square};

use super::search::Matcher;
use super::types::{Outcome, RemovedEdge, SearchCfg, Solution, Validation};

/// Validate with the default anchor (`ABCD`) and edge removal enabled.
pub fn validate(grid: &Grid) -> Validation {
    validate_with(grid, SearchCfg::default())
}

/// Validate raw editor rows; malformed rows are reported as `GridError`.
pub fn validate_rows(rows: Vec<Vec<bool>>) -> Result<Validation, GridError> {
    Ok(validate(&Grid::new(rows)?))
}

/// Validate a grid as a tesseract net.
///
/// Algorithm
/// - Exactly 24 squares are required; otherwise no search runs.
/// - Tree graphs (23 edges): search once from the lowest-index leaf.
/// - One-cycle graphs (24 edges): for each edge `(i, j)` in order, remove it,
///   search from `i`, restore it; the first success records the removed edge.
/// - Anything else cannot become a tree by one removal and is rejected.
///
/// A search succeeds only by walking every square from its root, so the
/// accepted graphs are paths with the root at one end.
pub fn validate_with(grid: &Grid, cfg: SearchCfg) -> Validation {
    let (squares, mut graph) = extract(grid);
    let n = squares.len();
    if n != NUM_FACES {
        return finish(Outcome::SquareCountMismatch { found: n }, squares, graph, None, cfg);
    }

    let model = FaceAdjacencyModel::new();
    let edges = graph.edge_count();
    tracing::debug!(squares = n, edges, "square graph extracted");

    if edges + 1 == n {
        if let Some(root) = graph.first_leaf() {
            if let Some(solution) = attempt(&model, &graph, root, cfg.seed_label, None) {
                return finish(Outcome::Unfolding, squares, graph, Some((solution, None)), cfg);
            }
        }
    }

    if cfg.allow_edge_removal && edges == n {
        for (i, j) in graph.edges() {
            let Some(trial) = graph.without_edge(i, j) else {
                continue;
            };
            let removed = RemovedEdge { i, j };
            let found = attempt(&model, &trial, i, cfg.seed_label, Some(removed));
            drop(trial);
            if let Some(solution) = found {
                return finish(
                    Outcome::Unfolding,
                    squares,
                    graph,
                    Some((solution, Some(removed))),
                    cfg,
                );
            }
        }
    }

    finish(Outcome::NoValidUnfolding, squares, graph, None, cfg)
}

fn attempt(
    model: &FaceAdjacencyModel,
    graph: &AdjacencyGraph,
    root: usize,
    seed: FaceLabel,
    removed: Option<RemovedEdge>,
) -> Option<Solution> {
    if !graph.is_tree() {
        return None;
    }
    let mut matcher = Matcher::new(model, graph);
    let solution = matcher.solve(root, seed);
    tracing::debug!(
        root,
        removed = ?removed,
        nodes = matcher.nodes,
        found = solution.is_some(),
        "search attempt"
    );
    solution
}

fn finish(
    outcome: Outcome,
    squares: Vec<Square>,
    graph: AdjacencyGraph,
    found: Option<(Solution, Option<RemovedEdge>)>,
    cfg: SearchCfg,
) -> Validation {
    let (solution, removed_edge) = match found {
        Some((s, r)) => (Some(s), r),
        None => (None, None),
    };
    tracing::info!(
        valid = outcome == Outcome::Unfolding,
        removed = ?removed_edge,
        "{}",
        outcome.message()
    );
    Validation {
        outcome,
        squares,
        graph,
        solution,
        removed_edge,
        anchor: cfg.seed_label,
    }
}
