use super::Strategy;
use crate::board::Offset;

/// Steps to one of the four squares touching the current one at a corner.
pub struct Diagonal;

static OFFSETS: [Offset; 4] = [
    Offset::new(1, 1),
    Offset::new(1, -1),
    Offset::new(-1, -1),
    Offset::new(-1, 1),
];

impl Strategy for Diagonal {
    fn name(&self) -> &'static str {
        "diagonal neighbour"
    }

    fn offsets(&self) -> &'static [Offset] {
        &OFFSETS
    }
}
