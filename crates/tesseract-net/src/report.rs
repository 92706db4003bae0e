//! Serializable summary of one validation, as written by the CLI.

use serde::Serialize;

use crate::grid::Square;
use crate::matcher::{Outcome, RemovedEdge, Validation};

/// JSON-facing view of a `Validation`.
///
/// `squares` is present once the grid passed the 24-square gate. `solution`
/// lists one label per square (square order), present only for a valid net.
/// `path_order` covers all 24 squares for a valid net and is empty otherwise.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Report {
    pub valid: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub squares: Option<Vec<Square>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub solution: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub removed_edge: Option<RemovedEdge>,
    pub path_order: Vec<usize>,
}

impl Validation {
    pub fn report(&self) -> Report {
        let solution = self.solution().filter(|_| self.valid()).map(|s| {
            s.labels()
                .iter()
                .map(|l| l.map(|l| l.to_string()).unwrap_or_default())
                .collect()
        });
        Report {
            valid: self.valid(),
            message: self.message(),
            squares: match self.outcome() {
                Outcome::SquareCountMismatch { .. } => None,
                _ => Some(self.squares().to_vec()),
            },
            solution,
            removed_edge: self.removed_edge(),
            path_order: self.path_order(),
        }
    }
}

impl Serialize for Validation {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.report().serialize(serializer)
    }
}
