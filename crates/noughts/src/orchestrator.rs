//! Game orchestration between players.

use crate::console::Console;
use crate::players::{Player, Turn};
use anyhow::Result;
use noughts_core::{Game, GameState, Mark};
use tracing::{info, instrument, warn};

/// How a session ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// A player completed a line.
    Won {
        /// Winner's display name.
        name: String,
        /// Winner's mark.
        mark: Mark,
    },
    /// Board filled with no line.
    Draw,
    /// A player quit before the game finished.
    Quit,
}

/// Orchestrates gameplay between two players.
pub struct Orchestrator {
    game: Game,
    players: [Box<dyn Player>; 2],
    console: Console,
}

impl Orchestrator {
    /// Creates a new orchestrator; `players` are X then O.
    pub fn new(players: [Box<dyn Player>; 2], console: Console) -> Self {
        Self {
            game: Game::new(),
            players,
            console,
        }
    }

    /// The game being played.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Runs the game loop until a result or a quit.
    #[instrument(skip(self))]
    pub async fn run(&mut self) -> Result<Outcome> {
        info!("Starting game orchestration");
        self.console.say("Initial board:")?;
        self.console.say(self.game.board())?;

        while self.game.state() == GameState::InProgress {
            let player = &mut self.players[seat(self.game.current_mark())];
            let mv = match player.get_move(&self.game, &mut self.console).await? {
                Turn::Play(mv) => mv,
                Turn::Quit => {
                    info!(player = player.name(), "Player quit");
                    self.console.say("Goodbye!")?;
                    return Ok(Outcome::Quit);
                }
            };

            match self.game.play(mv.row, mv.col) {
                Ok(()) => {}
                Err(e) if e.is_retryable() => {
                    warn!(error = %e, %mv, "Move rejected");
                    self.console.say(format!("{e} Try again."))?;
                    continue;
                }
                Err(e) => {
                    warn!(error = %e, "Game ended before move");
                    self.console.say(e)?;
                    break;
                }
            }

            self.console.say("")?;
            self.console.say(self.game.board())?;
        }

        let outcome = match self.game.state() {
            GameState::Won(mark) => {
                let name = self.players[seat(mark)].name().to_string();
                self.console
                    .say(format!("\nGame over: {name} ({mark}) wins!"))?;
                Outcome::Won { name, mark }
            }
            GameState::Draw => {
                self.console.say("\nGame over: it's a draw.")?;
                Outcome::Draw
            }
            GameState::InProgress => anyhow::bail!("Game stopped without a result"),
        };

        info!(?outcome, "Game finished");
        Ok(outcome)
    }
}

fn seat(mark: Mark) -> usize {
    match mark {
        Mark::X => 0,
        Mark::O => 1,
    }
}
