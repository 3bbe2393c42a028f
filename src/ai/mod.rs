//! Computer opponents: the position evaluator, the minimax search built on
//! it, and the `Agent` trait the game driver talks to.

mod agent;
pub mod eval;
pub mod minimax;
mod random;

pub use agent::Agent;
pub use eval::{evaluate_window, score_position};
pub use minimax::{
    choose_move, Choice, MinimaxAgent, INFINITY, LOSS_SCORE, NEG_INFINITY, SEARCH_DEPTH,
    WIN_SCORE,
};
pub use random::RandomAgent;
