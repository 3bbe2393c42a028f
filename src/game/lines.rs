use super::board::{Board, Cell, COLS, ROWS};
use super::player::Piece;

/// Number of pieces in a winning line, and the length of a scored window.
pub const WINDOW_LEN: usize = 4;

/// Coordinates (row, col) of the cells of one window.
pub type Window = [(usize, usize); WINDOW_LEN];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Winner(Piece),
    Draw,
}

/// The four orientations a line of four can run in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Horizontal,
    Vertical,
    /// Row and column both increasing (/).
    PositiveDiagonal,
    /// Row decreasing as column increases (\).
    NegativeDiagonal,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Horizontal,
        Direction::Vertical,
        Direction::PositiveDiagonal,
        Direction::NegativeDiagonal,
    ];

    /// Every window on the board running in this direction.
    pub fn windows(self) -> impl Iterator<Item = Window> {
        let last = WINDOW_LEN - 1;
        let (rows, cols, d_row, d_col) = match self {
            Direction::Horizontal => (0..ROWS, 0..COLS - last, 0, 1),
            Direction::Vertical => (0..ROWS - last, 0..COLS, 1, 0),
            Direction::PositiveDiagonal => (0..ROWS - last, 0..COLS - last, 1, 1),
            Direction::NegativeDiagonal => (last..ROWS, 0..COLS - last, -1, 1),
        };

        rows.flat_map(move |row| {
            cols.clone().map(move |col| {
                std::array::from_fn(|i| {
                    let step = i as isize;
                    (
                        row.wrapping_add_signed(d_row * step),
                        col.wrapping_add_signed(d_col * step),
                    )
                })
            })
        })
    }
}

/// Every window on the board, in all four directions.
pub fn all_windows() -> impl Iterator<Item = Window> {
    Direction::ALL.into_iter().flat_map(Direction::windows)
}

/// The cells a window covers.
pub fn window_cells(board: &Board, window: &Window) -> [Cell; WINDOW_LEN] {
    window.map(|(row, col)| board.get(row, col))
}

/// True iff `piece` owns four in a row in any direction.
pub fn has_win(board: &Board, piece: Piece) -> bool {
    winning_line(board, piece).is_some()
}

/// The first line of four owned by `piece`, scanning horizontal, vertical,
/// positive diagonal and negative diagonal windows in that order.
pub fn winning_line(board: &Board, piece: Piece) -> Option<Window> {
    let cell = piece.to_cell();
    all_windows().find(|window| {
        window
            .iter()
            .all(|&(row, col)| board.get(row, col) == cell)
    })
}

/// The game is over once either side has a line or the board is full.
pub fn is_terminal(board: &Board) -> bool {
    has_win(board, Piece::Player)
        || has_win(board, Piece::Computer)
        || board.valid_columns().is_empty()
}

/// How the game on `board` ended, if it has.
///
/// Only one side can own a line in a real game. If a constructed board gives
/// both sides a line, the computer is reported, matching the order the
/// search checks terminal positions in.
pub fn outcome(board: &Board) -> Option<GameOutcome> {
    if has_win(board, Piece::Computer) {
        Some(GameOutcome::Winner(Piece::Computer))
    } else if has_win(board, Piece::Player) {
        Some(GameOutcome::Winner(Piece::Player))
    } else if board.is_full() {
        Some(GameOutcome::Draw)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use quickcheck::quickcheck;

    use super::*;
    use crate::arbitrary::{drawn_board, transform, PlayedBoard, ScatteredBoard};

    #[test]
    fn test_window_counts() {
        assert_eq!(Direction::Horizontal.windows().count(), 24);
        assert_eq!(Direction::Vertical.windows().count(), 21);
        assert_eq!(Direction::PositiveDiagonal.windows().count(), 12);
        assert_eq!(Direction::NegativeDiagonal.windows().count(), 12);
        assert_eq!(all_windows().count(), 69);
    }

    #[test]
    fn test_window_shapes() {
        let first = |d: Direction| d.windows().next().unwrap();
        assert_eq!(first(Direction::Horizontal), [(0, 0), (0, 1), (0, 2), (0, 3)]);
        assert_eq!(first(Direction::Vertical), [(0, 0), (1, 0), (2, 0), (3, 0)]);
        assert_eq!(first(Direction::PositiveDiagonal), [(0, 0), (1, 1), (2, 2), (3, 3)]);
        assert_eq!(first(Direction::NegativeDiagonal), [(3, 0), (2, 1), (1, 2), (0, 3)]);

        let last = Direction::NegativeDiagonal.windows().last().unwrap();
        assert_eq!(last, [(5, 3), (4, 4), (3, 5), (2, 6)]);
    }

    #[test]
    fn test_empty_board_has_no_win() {
        let board = Board::new();
        assert!(!has_win(&board, Piece::Player));
        assert!(!has_win(&board, Piece::Computer));
        assert!(!is_terminal(&board));
        assert_eq!(outcome(&board), None);
    }

    #[test]
    fn test_vertical_win() {
        let mut board = Board::new();
        for _ in 0..4 {
            board.play(3, Piece::Computer).unwrap();
        }
        assert!(has_win(&board, Piece::Computer));
        assert!(!has_win(&board, Piece::Player));
        assert_eq!(
            winning_line(&board, Piece::Computer),
            Some([(0, 3), (1, 3), (2, 3), (3, 3)])
        );
        assert!(is_terminal(&board));
        assert_eq!(outcome(&board), Some(GameOutcome::Winner(Piece::Computer)));
    }

    #[test]
    fn test_horizontal_win() {
        let mut board = Board::new();
        for col in 2..6 {
            board.play(col, Piece::Player).unwrap();
        }
        assert!(has_win(&board, Piece::Player));
        assert_eq!(outcome(&board), Some(GameOutcome::Winner(Piece::Player)));
    }

    #[test]
    fn test_positive_diagonal_win() {
        let mut board = Board::new();
        // Create diagonal / pattern
        board.play(0, Piece::Player).unwrap();

        board.play(1, Piece::Computer).unwrap();
        board.play(1, Piece::Player).unwrap();

        board.play(2, Piece::Computer).unwrap();
        board.play(2, Piece::Computer).unwrap();
        board.play(2, Piece::Player).unwrap();

        board.play(3, Piece::Computer).unwrap();
        board.play(3, Piece::Computer).unwrap();
        board.play(3, Piece::Computer).unwrap();
        assert!(!has_win(&board, Piece::Player));
        board.play(3, Piece::Player).unwrap();

        assert!(has_win(&board, Piece::Player));
        assert!(!has_win(&board, Piece::Computer));
    }

    #[test]
    fn test_negative_diagonal_win() {
        let mut board = Board::new();
        // Create diagonal \ pattern
        board.play(6, Piece::Computer).unwrap();

        board.play(5, Piece::Player).unwrap();
        board.play(5, Piece::Computer).unwrap();

        board.play(4, Piece::Player).unwrap();
        board.play(4, Piece::Player).unwrap();
        board.play(4, Piece::Computer).unwrap();

        board.play(3, Piece::Player).unwrap();
        board.play(3, Piece::Player).unwrap();
        board.play(3, Piece::Player).unwrap();
        board.play(3, Piece::Computer).unwrap();

        assert!(has_win(&board, Piece::Computer));
        assert_eq!(
            winning_line(&board, Piece::Computer),
            Some([(3, 3), (2, 4), (1, 5), (0, 6)])
        );
    }

    #[test]
    fn test_no_win_with_three() {
        let mut board = Board::new();
        for col in 0..3 {
            board.play(col, Piece::Player).unwrap();
        }
        assert!(!has_win(&board, Piece::Player));
        assert!(!is_terminal(&board));
    }

    #[test]
    fn test_gap_breaks_line() {
        let mut board = Board::new();
        for col in [0, 1, 3, 4] {
            board.play(col, Piece::Computer).unwrap();
        }
        assert!(!has_win(&board, Piece::Computer));
    }

    #[test]
    fn test_full_board_without_line_is_draw() {
        let board = drawn_board();
        assert!(board.is_full());
        assert!(!has_win(&board, Piece::Player));
        assert!(!has_win(&board, Piece::Computer));
        assert!(is_terminal(&board));
        assert_eq!(outcome(&board), Some(GameOutcome::Draw));
    }

    quickcheck! {
        fn win_survives_rotation_and_mirror(input: ScatteredBoard) -> bool {
            // A 180 degree rotation followed by a horizontal mirror flips the
            // board upside down.
            let flipped = transform(&input.board, |row, col| (ROWS - 1 - row, col));
            [Piece::Player, Piece::Computer]
                .iter()
                .all(|&piece| has_win(&input.board, piece) == has_win(&flipped, piece))
        }
    }

    quickcheck! {
        fn win_survives_mirror(input: PlayedBoard) -> bool {
            let mirrored = transform(&input.board, |row, col| (row, COLS - 1 - col));
            [Piece::Player, Piece::Computer]
                .iter()
                .all(|&piece| has_win(&input.board, piece) == has_win(&mirrored, piece))
        }
    }

    quickcheck! {
        fn terminal_iff_outcome(input: PlayedBoard) -> bool {
            is_terminal(&input.board) == outcome(&input.board).is_some()
        }
    }
}
