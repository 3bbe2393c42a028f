use tracing::debug;

use crate::error::SearchError;
use crate::game::{has_win, Board, Piece};

use super::agent::Agent;
use super::eval::score_position;

/// Plies of lookahead the computer uses.
pub const SEARCH_DEPTH: u32 = 5;

/// Score of a position the computer has won.
pub const WIN_SCORE: i64 = 100_000_000_000_000;
/// Score of a position the human has won.
pub const LOSS_SCORE: i64 = -10_000_000_000_000;

/// Initial alpha bound.
pub const NEG_INFINITY: i64 = i64::MIN;
/// Initial beta bound.
pub const INFINITY: i64 = i64::MAX;

/// Result of a search: the column to play and its minimax value.
///
/// `column` is `None` when the searched board is itself a leaf: already won,
/// drawn, or at depth zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Choice {
    pub column: Option<usize>,
    pub score: i64,
}

impl Choice {
    fn leaf(score: i64) -> Self {
        Choice {
            column: None,
            score,
        }
    }
}

/// Minimax search with alpha-beta pruning, always scored from the computer's
/// side. The computer is the maximizing player.
///
/// Columns are tried in ascending order and only a strictly better score
/// replaces the incumbent, so ties go to the lowest column.
///
/// Fails with [`SearchError::NoLegalMoves`] if `board` is full and nobody
/// has a line. A board that is already won is not an error, full or not: it
/// comes back as a leaf with the win or loss score and no column.
pub fn choose_move(
    board: &Board,
    depth: u32,
    alpha: i64,
    beta: i64,
    maximizing: bool,
) -> Result<Choice, SearchError> {
    let decided = has_win(board, Piece::Computer) || has_win(board, Piece::Player);
    if !decided && board.is_full() {
        return Err(SearchError::NoLegalMoves);
    }
    Ok(minimax(board, depth, alpha, beta, maximizing))
}

fn minimax(board: &Board, depth: u32, mut alpha: i64, mut beta: i64, maximizing: bool) -> Choice {
    // Terminal positions take priority over the depth cutoff
    if has_win(board, Piece::Computer) {
        return Choice::leaf(WIN_SCORE);
    }
    if has_win(board, Piece::Player) {
        return Choice::leaf(LOSS_SCORE);
    }
    let moves = board.open_cells();
    let Some(&(_, first_col)) = moves.first() else {
        return Choice::leaf(0);
    };
    if depth == 0 {
        return Choice::leaf(score_position(board, Piece::Computer));
    }

    let (piece, worst) = if maximizing {
        (Piece::Computer, NEG_INFINITY)
    } else {
        (Piece::Player, INFINITY)
    };
    let mut best = Choice {
        column: Some(first_col),
        score: worst,
    };

    for &(row, col) in &moves {
        let mut child = *board;
        child.drop_piece(row, col, piece);
        let score = minimax(&child, depth - 1, alpha, beta, !maximizing).score;

        if maximizing {
            if score > best.score {
                best = Choice {
                    column: Some(col),
                    score,
                };
            }
            alpha = alpha.max(best.score);
        } else {
            if score < best.score {
                best = Choice {
                    column: Some(col),
                    score,
                };
            }
            beta = beta.min(best.score);
        }

        if alpha >= beta {
            break;
        }
    }

    best
}

/// Computer opponent backed by [`choose_move`].
pub struct MinimaxAgent {
    depth: u32,
}

impl MinimaxAgent {
    /// Search `depth` plies ahead. A depth of zero would never produce a
    /// column, so it is raised to one.
    pub fn new(depth: u32) -> Self {
        MinimaxAgent {
            depth: depth.max(1),
        }
    }

    pub fn depth(&self) -> u32 {
        self.depth
    }
}

impl Default for MinimaxAgent {
    fn default() -> Self {
        Self::new(SEARCH_DEPTH)
    }
}

impl Agent for MinimaxAgent {
    fn select_action(&mut self, board: &Board) -> Result<usize, SearchError> {
        let choice = choose_move(board, self.depth, NEG_INFINITY, INFINITY, true)?;
        debug!(
            column = ?choice.column,
            score = choice.score,
            depth = self.depth,
            "minimax choice"
        );
        choice.column.ok_or(SearchError::PositionDecided)
    }

    fn name(&self) -> &str {
        "Minimax"
    }
}
