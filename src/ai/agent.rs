use crate::error::SearchError;
use crate::game::Board;

/// Anything that can pick a column for its side.
pub trait Agent {
    /// Select a column to play on `board`.
    ///
    /// Fails if the board is full or already decided; the driver is expected
    /// to stop asking once the game is over.
    fn select_action(&mut self, board: &Board) -> Result<usize, SearchError>;

    /// Return the agent's display name.
    fn name(&self) -> &str;
}
