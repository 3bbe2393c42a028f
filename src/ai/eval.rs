//! Static evaluation of a board, used by the search at its depth horizon.
//!
//! Every 4-cell window is scored on its own and the results are summed, with
//! a bonus for pieces in the centre column, which takes part in the most
//! lines.

use crate::game::{
    all_windows, window_cells, Board, Cell, Piece, CENTER_COL, ROWS, WINDOW_LEN,
};

/// Four of our own pieces.
pub const FOUR_SCORE: i64 = 100;
/// Three of ours and one empty cell.
pub const THREE_SCORE: i64 = 5;
/// Two of ours and two empty cells.
pub const TWO_SCORE: i64 = 2;
/// Three of the opponent's and one empty cell. Smaller in magnitude than
/// `THREE_SCORE`, so the evaluation leans towards attack over defence.
pub const OPPONENT_THREE_SCORE: i64 = -4;
/// Per own piece in the centre column.
pub const CENTER_SCORE: i64 = 3;

/// Score a single window from `piece`'s point of view.
pub fn evaluate_window(window: &[Cell; WINDOW_LEN], piece: Piece) -> i64 {
    let own_cell = piece.to_cell();
    let opp_cell = piece.opponent().to_cell();

    let mut own = 0;
    let mut opp = 0;
    let mut empty = 0;
    for &cell in window {
        match cell {
            c if c == own_cell => own += 1,
            c if c == opp_cell => opp += 1,
            _ => empty += 1,
        }
    }

    let mut score = if own == 4 {
        FOUR_SCORE
    } else if own == 3 && empty == 1 {
        THREE_SCORE
    } else if own == 2 && empty == 2 {
        TWO_SCORE
    } else {
        0
    };

    if opp == 3 && empty == 1 {
        score += OPPONENT_THREE_SCORE;
    }

    score
}

/// Heuristic value of the whole board for `piece`.
pub fn score_position(board: &Board, piece: Piece) -> i64 {
    let own_cell = piece.to_cell();

    let center_pieces = (0..ROWS)
        .filter(|&row| board.get(row, CENTER_COL) == own_cell)
        .count() as i64;

    // Horizontal, vertical, then both diagonals
    let windows: i64 = all_windows()
        .map(|window| evaluate_window(&window_cells(board, &window), piece))
        .sum();

    center_pieces * CENTER_SCORE + windows
}
