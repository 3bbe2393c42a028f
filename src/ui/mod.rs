//! Terminal UI: the board, a column cursor for the human, and the computer's
//! replies.

mod app;
mod game_view;

pub use app::App;
