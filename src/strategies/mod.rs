pub mod diagonal;
pub mod orthogonal;

pub use diagonal::Diagonal;
use itertools::Itertools;
use log::{debug, trace};
pub use orthogonal::Orthogonal;
use rand::{seq::SliceRandom, RngCore};

use crate::board::{Offset, Position};

/// Every built-in strategy, in a fixed order.
pub const ALL: [&dyn Strategy; 2] = [&Orthogonal, &Diagonal];

/// A rule for moving the queen one step.
///
/// Implementors only describe themselves with a name and an offset table;
/// `apply` does the rest.
pub trait Strategy {
    fn name(&self) -> &'static str;

    /// Candidate steps, in the order they are considered.
    fn offsets(&self) -> &'static [Offset];

    /// Squares reachable from `from` that stay on the board, in offset
    /// table order.
    fn candidates(&self, from: Position) -> Vec<Position> {
        self.offsets()
            .iter()
            .map(|&offset| from + offset)
            .filter(|candidate| candidate.is_on_board())
            .collect()
    }

    /// Picks one of the candidates uniformly at random. If every offset
    /// leaves the board the queen stays where it is.
    fn apply(&self, from: Position, rng: &mut dyn RngCore) -> Position {
        let candidates = self.candidates(from);

        trace!(
            "{} from {from} can reach: {}",
            self.name(),
            candidates.iter().join(", ")
        );

        candidates.choose(rng).copied().unwrap_or_else(|| {
            debug!("{} is boxed in at {from}, staying put", self.name());
            from
        })
    }
}
