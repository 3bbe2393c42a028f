use std::fmt;

use super::player::Piece;
use crate::error::MoveError;

pub const ROWS: usize = 6;
pub const COLS: usize = 7;

/// Index of the middle column.
pub const CENTER_COL: usize = COLS / 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Player,
    Computer,
}

/// A 6x7 grid. Row 0 is the bottom row, so columns fill upward from index 0.
///
/// `Board` is `Copy`: every clone is an independent grid, which is what the
/// search relies on when it explores hypothetical moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[Cell; COLS]; ROWS],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            cells: [[Cell::Empty; COLS]; ROWS],
        }
    }

    /// Get the cell at a specific position
    /// Row 0 is the bottom, row 5 is the top
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    /// A column accepts a piece iff it is on the board and its top cell is empty.
    pub fn is_valid_column(&self, col: usize) -> bool {
        col < COLS && self.cells[ROWS - 1][col] == Cell::Empty
    }

    /// Lowest empty row in `col`.
    pub fn next_open_row(&self, col: usize) -> Result<usize, MoveError> {
        if col >= COLS {
            return Err(MoveError::InvalidColumn { column: col });
        }
        (0..ROWS)
            .find(|&row| self.cells[row][col] == Cell::Empty)
            .ok_or(MoveError::ColumnFull { column: col })
    }

    /// Set the cell at (`row`, `col`) to `piece`.
    ///
    /// This is the unchecked primitive: it neither applies gravity nor checks
    /// that the cell is empty. Callers must get `row` from
    /// [`Board::next_open_row`] after checking [`Board::is_valid_column`], or
    /// use [`Board::play`] which does both.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is outside the board.
    pub fn drop_piece(&mut self, row: usize, col: usize, piece: Piece) {
        self.cells[row][col] = piece.to_cell();
    }

    /// Drop `piece` into `col`, returns the row where it landed
    pub fn play(&mut self, col: usize, piece: Piece) -> Result<usize, MoveError> {
        let row = self.next_open_row(col)?;
        self.drop_piece(row, col, piece);
        Ok(row)
    }

    /// All columns that accept a piece, in ascending order. Empty iff the
    /// board is full.
    pub fn valid_columns(&self) -> Vec<usize> {
        (0..COLS).filter(|&col| self.is_valid_column(col)).collect()
    }

    /// The (row, col) each legal column would place a piece at, in ascending
    /// column order. Feeding these to [`Board::drop_piece`] is always a legal
    /// move.
    pub fn open_cells(&self) -> Vec<(usize, usize)> {
        (0..COLS)
            .filter(|&col| self.is_valid_column(col))
            .filter_map(|col| {
                (0..ROWS)
                    .find(|&row| self.cells[row][col] == Cell::Empty)
                    .map(|row| (row, col))
            })
            .collect()
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        (0..COLS).all(|col| !self.is_valid_column(col))
    }

    /// Number of non-empty cells
    pub fn piece_count(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|&&cell| cell != Cell::Empty)
            .count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Top row first, the way the board looks when played.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (0..ROWS).rev() {
            for col in 0..COLS {
                let symbol = match self.cells[row][col] {
                    Cell::Empty => '.',
                    Cell::Player => 'X',
                    Cell::Computer => 'O',
                };
                if col > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{symbol}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
