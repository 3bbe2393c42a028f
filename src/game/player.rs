use super::board::Cell;

/// The two sides of the game. The human plays `Player`, the engine plays
/// `Computer`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Piece {
    Player,
    Computer,
}

impl Piece {
    /// Get the opposing piece
    pub fn opponent(self) -> Piece {
        match self {
            Piece::Player => Piece::Computer,
            Piece::Computer => Piece::Player,
        }
    }

    /// Convert piece to cell type
    pub fn to_cell(self) -> Cell {
        match self {
            Piece::Player => Cell::Player,
            Piece::Computer => Cell::Computer,
        }
    }

    /// Get side name for display
    pub fn name(self) -> &'static str {
        match self {
            Piece::Player => "You",
            Piece::Computer => "Computer",
        }
    }
}
