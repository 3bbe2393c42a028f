use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use rand::rngs::StdRng;
use rand::SeedableRng;
use ratatui::{backend::Backend, Terminal};
use tracing::{error, info};

use crate::ai::{Agent, MinimaxAgent};
use crate::config::{AppConfig, FirstPlayer};
use crate::error::MoveError;
use crate::game::{GameOutcome, GameSession, Piece, CENTER_COL, COLS};

pub struct App {
    session: GameSession,
    agent: MinimaxAgent,
    first_player: FirstPlayer,
    rng: StdRng,
    think_delay: Duration,
    selected_column: usize,
    should_quit: bool,
    message: Option<String>,
}

impl App {
    pub fn new(config: &AppConfig) -> Self {
        let mut rng = match config.game.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let first = config.game.first_player.resolve(&mut rng);
        let mut app = App {
            session: GameSession::new(first),
            agent: MinimaxAgent::default(),
            first_player: config.game.first_player,
            rng,
            think_delay: Duration::from_millis(config.ui.think_delay_ms),
            selected_column: CENTER_COL,
            should_quit: false,
            message: None,
        };
        app.message = Some(app.opening_message());
        app
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        info!(engine = self.agent.name(), depth = self.agent.depth(), "starting UI");
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            // The "thinking" frame is already on screen; the search blocks
            // until the reply is ready.
            if self.computer_to_move() {
                self.play_computer_turn();
                continue;
            }

            self.handle_events()?;
        }
        Ok(())
    }

    fn computer_to_move(&self) -> bool {
        !self.session.is_over() && self.session.to_move() == Piece::Computer
    }

    fn opening_message(&self) -> String {
        match self.session.to_move() {
            Piece::Player => "You go first.".to_string(),
            Piece::Computer => "Computer goes first. Thinking...".to_string(),
        }
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key);
                }
            }
        }
        Ok(())
    }

    /// Handle key press
    fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left => {
                self.selected_column = self.selected_column.saturating_sub(1);
            }
            KeyCode::Right => {
                if self.selected_column < COLS - 1 {
                    self.selected_column += 1;
                }
            }
            KeyCode::Char(c @ '1'..='7') => {
                self.selected_column = c as usize - '1' as usize;
                self.play_human_turn();
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.play_human_turn();
            }
            KeyCode::Char('r') => {
                self.restart();
            }
            _ => {}
        }
    }

    fn restart(&mut self) {
        let first = self.first_player.resolve(&mut self.rng);
        self.session = GameSession::new(first);
        self.selected_column = CENTER_COL;
        self.message = Some(format!("New game! {}", self.opening_message()));
    }

    /// Drop the human's piece in the selected column
    fn play_human_turn(&mut self) {
        if self.session.is_over() {
            self.message = Some("Game over! Press 'r' to restart.".to_string());
            return;
        }

        match self.session.apply_move(self.selected_column) {
            Ok(_) => {
                self.message = Some(match self.session.outcome() {
                    Some(outcome) => Self::outcome_message(outcome),
                    None => "Computer is thinking...".to_string(),
                });
            }
            Err(MoveError::ColumnFull { .. }) => {
                self.message = Some("Column is full!".to_string());
            }
            Err(MoveError::InvalidColumn { .. }) => {
                self.message = Some("Invalid column!".to_string());
            }
            Err(MoveError::GameOver) => {
                self.message = Some("Game is over!".to_string());
            }
        }
    }

    fn play_computer_turn(&mut self) {
        if !self.think_delay.is_zero() {
            std::thread::sleep(self.think_delay);
        }

        let column = match self.agent.select_action(self.session.board()) {
            Ok(column) => column,
            Err(err) => {
                error!(%err, "engine could not pick a move");
                self.message = Some(format!("Engine error: {err}"));
                self.should_quit = true;
                return;
            }
        };

        match self.session.apply_move(column) {
            Ok(_) => {
                self.message = Some(match self.session.outcome() {
                    Some(outcome) => Self::outcome_message(outcome),
                    None => format!("Computer played column {}. Your turn.", column + 1),
                });
            }
            Err(err) => {
                error!(%err, column, "engine picked an illegal column");
                self.message = Some(format!("Engine error: {err}"));
                self.should_quit = true;
            }
        }
    }

    fn outcome_message(outcome: GameOutcome) -> String {
        match outcome {
            GameOutcome::Winner(Piece::Player) => "You win! Press 'r' to play again.",
            GameOutcome::Winner(Piece::Computer) => "Computer wins! Press 'r' to play again.",
            GameOutcome::Draw => "It's a draw! Press 'r' to play again.",
        }
        .to_string()
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        super::game_view::render(frame, &self.session, self.selected_column, &self.message);
    }
}
