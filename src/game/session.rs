use tracing::{debug, info, trace};

use super::board::Board;
use super::lines::{self, GameOutcome};
use super::player::Piece;
use crate::error::MoveError;

/// One game in progress: the live board, whose turn it is, and how the game
/// ended. Only confirmed moves reach this board; the search works on copies.
#[derive(Debug, Clone, PartialEq)]
pub struct GameSession {
    board: Board,
    to_move: Piece,
    outcome: Option<GameOutcome>,
    moves_played: usize,
}

impl GameSession {
    /// Start a game on an empty board with `first` to move
    pub fn new(first: Piece) -> Self {
        info!(first = first.name(), "new game");
        GameSession {
            board: Board::new(),
            to_move: first,
            outcome: None,
            moves_played: 0,
        }
    }

    /// Side whose turn it is
    pub fn to_move(&self) -> Piece {
        self.to_move
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Get game outcome if game is over
    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    /// Check if game is over
    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    pub fn moves_played(&self) -> usize {
        self.moves_played
    }

    /// Columns the side to move may play; empty once the game is over.
    pub fn legal_columns(&self) -> Vec<usize> {
        if self.is_over() {
            return Vec::new();
        }
        self.board.valid_columns()
    }

    /// Drop the piece of the side to move into `column` and hand the turn
    /// over. Returns the row the piece landed in.
    pub fn apply_move(&mut self, column: usize) -> Result<usize, MoveError> {
        if self.is_over() {
            return Err(MoveError::GameOver);
        }

        let piece = self.to_move;
        let row = self.board.play(column, piece)?;
        self.moves_played += 1;
        debug!(side = piece.name(), column, row, "move applied");
        trace!("board:\n{}", self.board);

        self.outcome = lines::outcome(&self.board);
        if let Some(outcome) = self.outcome {
            match outcome {
                GameOutcome::Winner(winner) => {
                    info!(winner = winner.name(), moves = self.moves_played, "game over")
                }
                GameOutcome::Draw => info!(moves = self.moves_played, "game over: draw"),
            }
        }

        self.to_move = piece.opponent();
        Ok(row)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arbitrary::drawn_board;
    use crate::game::{Cell, COLS, ROWS};

    #[test]
    fn test_new_session() {
        let session = GameSession::new(Piece::Player);
        assert_eq!(session.to_move(), Piece::Player);
        assert!(!session.is_over());
        assert_eq!(session.legal_columns().len(), COLS);
        assert_eq!(session.moves_played(), 0);
    }

    #[test]
    fn test_apply_move_switches_sides() {
        let mut session = GameSession::new(Piece::Computer);
        let row = session.apply_move(3).unwrap();

        assert_eq!(row, 0);
        assert_eq!(session.to_move(), Piece::Player);
        assert_eq!(session.board().get(0, 3), Cell::Computer);

        session.apply_move(3).unwrap();
        assert_eq!(session.board().get(1, 3), Cell::Player);
        assert_eq!(session.moves_played(), 2);
    }

    #[test]
    fn test_rejected_move_keeps_turn() {
        let mut session = GameSession::new(Piece::Player);
        assert_eq!(
            session.apply_move(COLS),
            Err(MoveError::InvalidColumn { column: COLS })
        );
        assert_eq!(session.to_move(), Piece::Player);

        for _ in 0..ROWS {
            session.apply_move(0).unwrap();
        }
        let before = session.clone();
        assert_eq!(
            session.apply_move(0),
            Err(MoveError::ColumnFull { column: 0 })
        );
        assert_eq!(session, before);
    }

    #[test]
    fn test_win_detection() {
        let mut session = GameSession::new(Piece::Player);

        // Player builds the bottom row, computer stacks on top of it
        for col in 0..4 {
            session.apply_move(col).unwrap();
            if col < 3 {
                session.apply_move(col).unwrap();
            }
        }

        assert!(session.is_over());
        assert_eq!(session.outcome(), Some(GameOutcome::Winner(Piece::Player)));
        assert!(session.legal_columns().is_empty());
        assert_eq!(session.apply_move(5), Err(MoveError::GameOver));
    }

    #[test]
    fn test_draw() {
        let mut session = GameSession::new(Piece::Player);

        // Every row is filled in the same column order, which with strict
        // alternation makes each row the inverse of the one below it.
        let row_order = [0, 2, 1, 3, 4, 6, 5];
        for _ in 0..ROWS {
            for &col in &row_order {
                assert!(!session.is_over(), "nobody should win this game");
                session.apply_move(col).unwrap();
            }
        }

        assert_eq!(session.board(), &drawn_board());
        assert_eq!(session.outcome(), Some(GameOutcome::Draw));
        assert_eq!(session.moves_played(), ROWS * COLS);
    }
}
