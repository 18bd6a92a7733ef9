use std::num::IntErrorKind;

use crate::config::{FirstPlayerMode, GameConfig, OpeningMode};
use crate::engine::SessionRng;
use crate::log;
use super::board::Board;
use super::errors::{InputError, MoveError};
use super::search::{ComputerMove, computer_next_move};
use super::types::{CELL_COUNT, GameOutcome, Mark};

/// One round of human (X) against computer (O). Built fresh for every round.
pub struct GameSession {
    board: Board,
    rng: SessionRng,
    opening: OpeningMode,
    first_player: Mark,
    last_move: Option<usize>,
}

impl GameSession {
    pub fn new(config: &GameConfig, mut rng: SessionRng) -> Self {
        let first_player = match config.first_player {
            FirstPlayerMode::Human => Mark::X,
            FirstPlayerMode::Computer => Mark::O,
            FirstPlayerMode::Random => {
                if rng.coin_flip() {
                    Mark::O
                } else {
                    Mark::X
                }
            }
        };

        log!("New round (seed {}), {} moves first", rng.seed(), first_player);

        Self {
            board: Board::new(),
            rng,
            opening: config.opening,
            first_player,
            last_move: None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn first_player(&self) -> Mark {
        self.first_player
    }

    pub fn last_move(&self) -> Option<usize> {
        self.last_move
    }

    /// Turns raw player text into a playable cell index.
    pub fn parse_player_input(&self, raw: &str) -> Result<usize, InputError> {
        let value = match raw.trim().parse::<i64>() {
            Ok(value) => value,
            Err(e) => match e.kind() {
                IntErrorKind::PosOverflow => i64::MAX,
                IntErrorKind::NegOverflow => i64::MIN,
                _ => {
                    return Err(InputError::NotAnInteger {
                        raw: raw.to_string(),
                    });
                }
            },
        };

        let index = match usize::try_from(value) {
            Ok(index) if index < CELL_COUNT => index,
            _ => return Err(MoveError::OutOfRange { index: value }.into()),
        };

        self.board.validate_move(index)?;
        Ok(index)
    }

    /// Parses `raw` and plays it for X; the board is untouched on error.
    pub fn play_human_input(&mut self, raw: &str) -> Result<usize, InputError> {
        let index = self.parse_player_input(raw)?;
        self.play_human_move(index)?;
        Ok(index)
    }

    pub fn play_human_move(&mut self, index: usize) -> Result<(), MoveError> {
        self.board.apply_move(index, Mark::X)?;
        self.last_move = Some(index);
        log!("X played cell {}", index);
        Ok(())
    }

    pub fn play_computer_move(&mut self) -> Option<ComputerMove> {
        let chosen = computer_next_move(&self.board, self.opening, &mut self.rng)?;

        if let Err(e) = self.board.apply_move(chosen.index, Mark::O) {
            log!("Computer picked an unplayable cell {}: {}", chosen.index, e);
            return None;
        }
        self.last_move = Some(chosen.index);

        match chosen.score {
            Some(score) => log!("O played cell {} (score {})", chosen.index, score),
            None => log!("O opened in corner {}", chosen.index),
        }
        Some(chosen)
    }

    /// Checks whether `mark`'s last move ended the round.
    ///
    /// Only `mark` is tested for a win; a draw needs a full board with no line
    /// for either side.
    pub fn terminate(&self, mark: Mark) -> Option<GameOutcome> {
        let outcome = if self.board.has_won(mark) {
            match mark {
                Mark::X => GameOutcome::HumanWon,
                Mark::O => GameOutcome::ComputerWon,
                Mark::Empty => return None,
            }
        } else if self.board.is_draw() {
            GameOutcome::Draw
        } else {
            return None;
        };

        match self.board.winning_line(mark) {
            Some(line) => log!("Round over: {:?}, line {}", outcome, line),
            None => log!("Round over: {:?}", outcome),
        }
        Some(outcome)
    }
}
