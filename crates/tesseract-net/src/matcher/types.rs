//! Data types for matcher configuration and results.

use serde::Serialize;

use crate::faces::{FaceLabel, NUM_FACES};
use crate::grid::{AdjacencyGraph, Square};

pub const MSG_UNFOLDING: &str = "Path Unfolding!";
pub const MSG_NO_UNFOLDING: &str = "Not a Tesseract unfolding";

/// Search configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchCfg {
    /// Label given to the root square of every attempt. Any canonical
    /// orientation works; results are equivalent up to relabelling.
    pub seed_label: FaceLabel,
    /// Try single-edge removal when the square graph has one cycle.
    pub allow_edge_removal: bool,
}

impl Default for SearchCfg {
    fn default() -> Self {
        Self {
            seed_label: FaceLabel::anchor(),
            allow_edge_removal: true,
        }
    }
}

/// The grid edge left out of matching to turn a one-cycle graph into a tree.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct RemovedEdge {
    pub i: usize,
    pub j: usize,
}

impl RemovedEdge {
    #[inline]
    pub fn joins(&self, a: usize, b: usize) -> bool {
        (self.i == a && self.j == b) || (self.i == b && self.j == a)
    }
}

/// Face label per square; `None` marks an unset slot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Solution {
    labels: Vec<Option<FaceLabel>>,
}

impl Solution {
    pub(crate) fn from_slots(labels: &[Option<FaceLabel>]) -> Self {
        Self {
            labels: labels.to_vec(),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    #[inline]
    pub fn get(&self, square: usize) -> Option<FaceLabel> {
        self.labels.get(square).copied().flatten()
    }

    pub fn labels(&self) -> &[Option<FaceLabel>] {
        &self.labels
    }

    pub fn filled_count(&self) -> usize {
        self.labels.iter().flatten().count()
    }

    /// Square holding exactly this oriented label.
    pub fn position(&self, label: FaceLabel) -> Option<usize> {
        self.labels.iter().position(|l| *l == Some(label))
    }

    /// All squares labelled and every canonical face used exactly once.
    pub fn is_complete(&self) -> bool {
        if self.labels.len() != NUM_FACES || self.filled_count() != NUM_FACES {
            return false;
        }
        let mut seen = [false; NUM_FACES];
        self.labels.iter().flatten().all(|l| {
            let slot = &mut seen[l.face_id().index()];
            !std::mem::replace(slot, true)
        })
    }
}

/// Domain outcome of one validation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Unfolding,
    SquareCountMismatch { found: usize },
    NoValidUnfolding,
}

impl Outcome {
    pub fn message(&self) -> String {
        match self {
            Outcome::Unfolding => MSG_UNFOLDING.to_string(),
            Outcome::SquareCountMismatch { found } => {
                format!("Not {NUM_FACES} squares in the grid (found {found})")
            }
            Outcome::NoValidUnfolding => MSG_NO_UNFOLDING.to_string(),
        }
    }
}

/// Everything one `validate` call produced. Immutable; re-validate after any grid edit.
#[derive(Clone, Debug)]
pub struct Validation {
    pub(crate) outcome: Outcome,
    pub(crate) squares: Vec<Square>,
    pub(crate) graph: AdjacencyGraph,
    pub(crate) solution: Option<Solution>,
    pub(crate) removed_edge: Option<RemovedEdge>,
    pub(crate) anchor: FaceLabel,
}

impl Validation {
    #[inline]
    pub fn valid(&self) -> bool {
        self.outcome == Outcome::Unfolding
    }

    #[inline]
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    pub fn message(&self) -> String {
        self.outcome.message()
    }

    pub fn squares(&self) -> &[Square] {
        &self.squares
    }

    pub fn graph(&self) -> &AdjacencyGraph {
        &self.graph
    }

    pub fn solution(&self) -> Option<&Solution> {
        self.solution.as_ref()
    }

    pub fn removed_edge(&self) -> Option<RemovedEdge> {
        self.removed_edge
    }

    /// Label the search rooted at (used as the path start when no edge was removed).
    pub fn anchor(&self) -> FaceLabel {
        self.anchor
    }
}
