use quickcheck::{Arbitrary, Gen};

use crate::game::{Board, Cell, Piece, COLS, ROWS};

/// A board reached by alternating legal moves from the empty board. Play does
/// not stop at a win, so both sides may own a line.
#[derive(Clone, Debug)]
pub struct PlayedBoard {
    pub board: Board,
}

impl Arbitrary for PlayedBoard {
    fn arbitrary(g: &mut Gen) -> Self {
        let mut board = Board::new();
        let mut piece = if bool::arbitrary(g) {
            Piece::Player
        } else {
            Piece::Computer
        };
        let num_moves = usize::arbitrary(g) % (ROWS * COLS + 1);
        for _ in 0..num_moves {
            let legal = board.valid_columns();
            let Some(&col) = g.choose(&legal) else {
                break;
            };
            board.play(col, piece).unwrap();
            piece = piece.opponent();
        }
        PlayedBoard { board }
    }
}

/// A board with every cell drawn independently, ignoring gravity.
#[derive(Clone, Debug)]
pub struct ScatteredBoard {
    pub board: Board,
}

impl Arbitrary for ScatteredBoard {
    fn arbitrary(g: &mut Gen) -> Self {
        let choices = [None, Some(Piece::Player), Some(Piece::Computer)];
        let mut board = Board::new();
        for row in 0..ROWS {
            for col in 0..COLS {
                if let Some(piece) = *g.choose(&choices).unwrap() {
                    board.drop_piece(row, col, piece);
                }
            }
        }
        ScatteredBoard { board }
    }
}

/// Rebuild `board` with each cell moved by `map`.
pub fn transform(board: &Board, map: impl Fn(usize, usize) -> (usize, usize)) -> Board {
    let mut out = Board::new();
    for row in 0..ROWS {
        for col in 0..COLS {
            let (new_row, new_col) = map(row, col);
            match board.get(row, col) {
                Cell::Empty => {}
                Cell::Player => out.drop_piece(new_row, new_col, Piece::Player),
                Cell::Computer => out.drop_piece(new_row, new_col, Piece::Computer),
            }
        }
    }
    out
}

/// A full board with no line of four for either side: columns come in
/// pairs, and every row inverts the one below it.
pub fn drawn_board() -> Board {
    let mut board = Board::new();
    for row in 0..ROWS {
        for col in 0..COLS {
            let piece = if (col / 2 + row) % 2 == 0 {
                Piece::Player
            } else {
                Piece::Computer
            };
            board.drop_piece(row, col, piece);
        }
    }
    board
}
