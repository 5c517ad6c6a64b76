/// Squares along each edge of the board.
pub const BOARD_SIZE: i64 = 8;

/// File letters in board order, index 0 is the A file.
pub const FILE_LETTERS: [char; BOARD_SIZE as usize] =
    ['A', 'B', 'C', 'D', 'E', 'F', 'G', 'H'];
