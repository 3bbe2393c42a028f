//! Core Connect Four game logic: the board, line detection, and the game
//! session that owns the live board between turns.

mod board;
mod lines;
mod player;
mod session;

pub use board::{Board, Cell, CENTER_COL, COLS, ROWS};
pub use lines::{
    all_windows, has_win, is_terminal, outcome, window_cells, winning_line, Direction,
    GameOutcome, Window, WINDOW_LEN,
};
pub use player::Piece;
pub use session::GameSession;
