//! "Perft" move-generation test: count the number of leaves at a given depth.
//! See: http://www.aartbik.com/MISC/reversi.html

use crate::{Board, Color};

/// Count the leaves `depth` plies below the starting position, black to move.
pub fn run_perft(depth: u64) -> u64 {
    leaves_below(Board::new(), Color::default(), depth, false)
}

/// Count the leaves `depth` plies below `board` with `color` to move.
/// A side with no move passes; the branch ends when both sides pass in a row.
pub fn leaves_below(board: Board, color: Color, depth: u64, passed: bool) -> u64 {
    // Leaf node for this depth
    if depth == 0 {
        return 1;
    }

    let moves = board.valid_moves(color);
    if moves.is_empty() {
        // Both players passed: game is over
        if passed {
            return 1;
        }

        return leaves_below(board, !color, depth - 1, true);
    }

    moves
        .into_iter()
        .map(|mv| {
            let mut child = board;
            match child.place_piece(mv, color) {
                Ok(_) => leaves_below(child, !color, depth - 1, false),
                Err(_) => 0,
            }
        })
        .sum()
}
