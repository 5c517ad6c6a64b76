use std::{fmt, mem};

use log::debug;
use rand::RngCore;

use crate::{board::Position, strategies::Strategy};

/// One narrated step of the queen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub from:     Position,
    pub to:       Position,
    pub strategy: &'static str,
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "taking the queen from {} using '{}' to place it on {}",
            self.from, self.strategy, self.to
        )
    }
}

/// Holds the active strategy and the random source it draws from.
///
/// The strategy can be swapped between moves with [`Self::set_strategy`];
/// a context always has exactly one.
pub struct MovementContext<'s, R> {
    strategy: &'s dyn Strategy,
    rng:      R,
    narrate:  bool,
}

impl<'s, R: RngCore> MovementContext<'s, R> {
    /// Narration is on by default.
    pub fn new(strategy: &'s dyn Strategy, rng: R) -> Self {
        Self {
            strategy,
            rng,
            narrate: true,
        }
    }

    #[must_use]
    pub fn narrating(self, narrate: bool) -> Self {
        Self { narrate, ..self }
    }

    #[must_use]
    pub fn strategy(&self) -> &'s dyn Strategy {
        self.strategy
    }

    /// Swaps in a new strategy for every following move and hands back the
    /// old one.
    pub fn set_strategy(&mut self, strategy: &'s dyn Strategy) -> &'s dyn Strategy {
        debug!(
            "switching strategy from {} to {}",
            self.strategy.name(),
            strategy.name()
        );
        mem::replace(&mut self.strategy, strategy)
    }

    /// Moves the queen from `position` with the active strategy.
    ///
    /// Off-board coordinates are reset to 0 per axis first (see
    /// [`Position::normalized`]), so this never fails.
    pub fn perform_move(&mut self, position: Position) -> Position {
        let from = position.normalized();
        if from != position {
            debug!("{position} is off the board, starting from {from} instead");
        }

        let to = self.strategy.apply(from, &mut self.rng);

        let step = Move {
            from,
            to,
            strategy: self.strategy.name(),
        };

        if self.narrate {
            println!("{step}");
        } else {
            debug!("{step}");
        }

        to
    }
}

#[cfg(test)]
mod tests {
    use rand::{
        rngs::{mock::StepRng, StdRng},
        SeedableRng,
    };

    use super::*;
    use crate::strategies::{Diagonal, Orthogonal};

    fn quiet(strategy: &dyn Strategy, seed: u64) -> MovementContext<StdRng> {
        MovementContext::new(strategy, StdRng::seed_from_u64(seed))
            .narrating(false)
    }

    #[test]
    fn off_board_axes_are_treated_as_zero() {
        let cases: [((i64, i64), (i64, i64)); 3] = [
            ((8, 3), (0, 3)),
            ((-1, -1), (0, 0)),
            ((5, 9), (5, 0)),
        ];

        for strategy in crate::strategies::ALL {
            for (seed, (raw, reset)) in (0..).zip(cases) {
                let mut a = quiet(strategy, seed);
                let mut b = quiet(strategy, seed);
                for _ in 0..10 {
                    assert_eq!(
                        a.perform_move(raw.into()),
                        b.perform_move(reset.into())
                    );
                }
            }
        }
    }

    #[test]
    fn swapping_to_diagonal_at_origin() {
        let mut context = quiet(&Orthogonal, 9);
        let previous = context.set_strategy(&Diagonal);

        assert_eq!(previous.name(), Orthogonal.name());
        assert_eq!(context.strategy().name(), Diagonal.name());
        assert_eq!(
            context.perform_move(Position::ORIGIN),
            Position::new(1, 1)
        );
    }

    #[test]
    fn swap_only_affects_later_moves() {
        let mut context =
            MovementContext::new(&Orthogonal, StepRng::new(0, 0))
                .narrating(false);

        let first = context.perform_move(Position::ORIGIN);
        assert_eq!(first, Position::new(0, 1));

        context.set_strategy(&Diagonal);
        // from A2 the diagonals on the board are B3 then B1
        assert_eq!(context.perform_move(first), Position::new(1, 2));
    }

    #[test]
    fn narration_does_not_change_the_result() {
        let mut loud = MovementContext::new(&Diagonal, StdRng::seed_from_u64(5));
        let mut silent = quiet(&Diagonal, 5);

        let mut a = Position::new(3, 3);
        let mut b = a;
        for _ in 0..10 {
            a = loud.perform_move(a);
            b = silent.perform_move(b);
            assert_eq!(a, b);
        }
    }

    #[test]
    fn move_narration() {
        let step = Move {
            from:     Position::ORIGIN,
            to:       Position::new(0, 1),
            strategy: Orthogonal.name(),
        };
        assert_eq!(
            step.to_string(),
            "taking the queen from A1 using 'orthogonal neighbour' to place \
             it on A2"
        );
    }
}
