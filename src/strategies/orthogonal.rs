use super::Strategy;
use crate::board::Offset;

/// Steps to one of the four squares sharing an edge with the current one.
pub struct Orthogonal;

static OFFSETS: [Offset; 4] = [
    Offset::new(0, 1),
    Offset::new(0, -1),
    Offset::new(1, 0),
    Offset::new(-1, 0),
];

impl Strategy for Orthogonal {
    fn name(&self) -> &'static str {
        "orthogonal neighbour"
    }

    fn offsets(&self) -> &'static [Offset] {
        &OFFSETS
    }
}
