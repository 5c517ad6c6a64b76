use crate::board::constants::{BOARD_SIZE, FILE_LETTERS};

#[must_use]
pub const fn on_board(coordinate: i64) -> bool {
    coordinate >= 0 && coordinate < BOARD_SIZE
}

/// Sends an off-board coordinate back to 0 rather than to the nearest edge.
#[must_use]
pub const fn reset_off_board(coordinate: i64) -> i64 {
    if on_board(coordinate) {
        coordinate
    } else {
        0
    }
}

#[must_use]
pub fn file_letter(file: i64) -> Option<char> {
    usize::try_from(file)
        .ok()
        .and_then(|index| FILE_LETTERS.get(index))
        .copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edges_are_on_board() {
        assert!(on_board(0));
        assert!(on_board(7));
        assert!(!on_board(-1));
        assert!(!on_board(8));
    }

    #[test]
    fn off_board_resets_to_zero_not_nearest_edge() {
        assert_eq!(reset_off_board(5), 5);
        assert_eq!(reset_off_board(8), 0);
        assert_eq!(reset_off_board(100), 0);
        assert_eq!(reset_off_board(-1), 0);
    }

    #[test]
    fn file_letters() {
        assert_eq!(file_letter(0), Some('A'));
        assert_eq!(file_letter(7), Some('H'));
        assert_eq!(file_letter(8), None);
        assert_eq!(file_letter(-3), None);
    }
}
