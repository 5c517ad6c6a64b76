use std::{fmt, ops::Add};

use crate::board::utils::{file_letter, on_board, reset_off_board};

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub struct Offset {
    pub df: i64,
    pub dr: i64,
}

impl Offset {
    #[must_use]
    pub const fn new(df: i64, dr: i64) -> Self {
        Self { df, dr }
    }
}

impl fmt::Display for Offset {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({:+}, {:+})", self.df, self.dr)
    }
}

/// A square on the board as a (file, rank) pair, both counted from 0.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub struct Position {
    pub file: i64,
    pub rank: i64,
}

impl Position {
    pub const ORIGIN: Self = Self::new(0, 0);

    #[must_use]
    pub const fn new(file: i64, rank: i64) -> Self {
        Self { file, rank }
    }

    #[must_use]
    pub const fn is_on_board(self) -> bool {
        on_board(self.file) && on_board(self.rank)
    }

    /// Resets each off-board coordinate to 0, so `(8, 3)` becomes `(0, 3)`
    /// and `(5, 9)` becomes `(5, 0)`.
    ///
    /// This is not a clamp. `(8, 3)` does not become `(7, 3)`. The narrated
    /// demo has always behaved this way and it is kept for compatibility,
    /// although it looks like it was meant to be a clamp.
    #[must_use]
    pub const fn normalized(self) -> Self {
        Self {
            file: reset_off_board(self.file),
            rank: reset_off_board(self.rank),
        }
    }
}

impl Add<Offset> for Position {
    type Output = Self;

    fn add(self, offset: Offset) -> Self {
        Self {
            file: self.file + offset.df,
            rank: self.rank + offset.dr,
        }
    }
}

impl From<(i64, i64)> for Position {
    fn from((file, rank): (i64, i64)) -> Self {
        Self { file, rank }
    }
}

impl From<Position> for (i64, i64) {
    fn from(position: Position) -> Self {
        (position.file, position.rank)
    }
}

impl fmt::Display for Position {
    /// Algebraic notation (`A1` to `H8`) for squares on the board, raw
    /// coordinates for anything else.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match file_letter(self.file) {
            Some(letter) if self.is_on_board() => {
                write!(f, "{letter}{}", self.rank + 1)
            }
            _ => write!(f, "({}, {})", self.file, self.rank),
        }
    }
}
