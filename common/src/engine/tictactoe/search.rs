use std::ops::{Deref, DerefMut};

use rand::prelude::IndexedRandom;

use crate::config::OpeningMode;
use crate::engine::SessionRng;
use super::board::Board;
use super::types::{CORNER_CELLS, Mark};

const SCORE_FLOOR: i32 = -10_000;

struct TrialMove<'a> {
    board: &'a mut Board,
    index: usize,
}

impl<'a> TrialMove<'a> {
    fn place(board: &'a mut Board, index: usize, mark: Mark) -> Self {
        board.set(index, mark);
        Self { board, index }
    }
}

impl Deref for TrialMove<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        &*self.board
    }
}

impl DerefMut for TrialMove<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        &mut *self.board
    }
}

impl Drop for TrialMove<'_> {
    fn drop(&mut self) {
        self.board.clear(self.index);
    }
}

fn terminal_score(board: &Board) -> Option<i32> {
    let speed_bonus = board.empty_count() as i32 + 1;
    if board.has_won(Mark::O) {
        Some(speed_bonus)
    } else if board.has_won(Mark::X) {
        Some(-speed_bonus)
    } else if board.is_full() {
        Some(0)
    } else {
        None
    }
}

pub fn minimax(board: &mut Board, last_move: Option<usize>, maximizing: bool) -> (i32, Option<usize>) {
    if let Some(score) = terminal_score(board) {
        return (score, last_move);
    }

    let (mark, mut best_score) = if maximizing {
        (Mark::O, i32::MIN)
    } else {
        (Mark::X, i32::MAX)
    };
    let mut best_move = None;

    for cell in board.empty_cells() {
        let (score, _) = {
            let mut trial = TrialMove::place(board, cell, mark);
            minimax(&mut trial, Some(cell), !maximizing)
        };

        let improves = if maximizing { score > best_score } else { score < best_score };
        if improves {
            best_score = score;
            best_move = Some(cell);
        }
    }

    (best_score, best_move)
}

pub fn optimal_move(board: &Board, mark: Mark) -> Option<(usize, i32)> {
    let maximizing = match mark {
        Mark::O => true,
        Mark::X => false,
        Mark::Empty => return None,
    };
    let mut scratch = board.clone();
    match minimax(&mut scratch, None, maximizing) {
        (score, Some(index)) if board.cell(index) == Some(Mark::Empty) => Some((index, score)),
        _ => None,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComputerMove {
    pub index: usize,
    pub score: Option<i32>,
}

pub fn computer_next_move(board: &Board, opening: OpeningMode, rng: &mut SessionRng) -> Option<ComputerMove> {
    if board.is_full() {
        return None;
    }

    if board.is_empty() && opening == OpeningMode::RandomCorner {
        return CORNER_CELLS
            .choose(rng.inner())
            .map(|&index| ComputerMove { index, score: None });
    }

    let mut scratch = board.clone();
    let mut best_score = SCORE_FLOOR;
    let mut best_cell = None;

    for cell in scratch.empty_cells() {
        let (score, _) = {
            let mut trial = TrialMove::place(&mut scratch, cell, Mark::O);
            minimax(&mut trial, Some(cell), false)
        };

        if score > best_score {
            best_score = score;
            best_cell = Some(cell);
        }
    }

    best_cell.map(|index| ComputerMove { index, score: Some(best_score) })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::tictactoe::board::board_from;
    use crate::engine::tictactoe::types::GameStatus;

    #[test]
    fn test_trial_move_restores_cell_on_drop() {
        let mut board = board_from("X        ");
        let before = board.clone();

        {
            let trial = TrialMove::place(&mut board, 4, Mark::O);
            assert_eq!(trial.cell(4), Some(Mark::O));
            assert_eq!(trial.played_count(), 2);
        }

        assert_eq!(board, before);
    }

    #[test]
    fn test_minimax_scores_o_win_at_root() {
        let mut board = board_from("OOOXX    ");

        let (score, best) = minimax(&mut board, Some(2), false);

        assert_eq!(score, 4 + 1);
        assert_eq!(best, Some(2));
    }

    #[test]
    fn test_minimax_scores_x_win_at_root() {
        let mut board = board_from("XXXOO O  ");

        let (score, best) = minimax(&mut board, Some(1), true);

        assert_eq!(score, -(3 + 1));
        assert_eq!(best, Some(1));
    }

    #[test]
    fn test_minimax_scores_full_board_draw() {
        let mut board = board_from("XOXXOOOXX");

        assert_eq!(minimax(&mut board, Some(8), true), (0, Some(8)));
    }

    #[test]
    fn test_minimax_leaves_board_untouched() {
        let mut board = board_from("X   O    ");
        let before = board.clone();

        minimax(&mut board, None, false);

        assert_eq!(board, before);
    }

    #[test]
    fn test_o_completes_own_row() {
        let mut board = board_from("OO XX    ");

        let (score, best) = minimax(&mut board, None, true);

        // Winning at 2 leaves 4 empty cells.
        assert_eq!(best, Some(2));
        assert_eq!(score, 4 + 1);
    }

    #[test]
    fn test_o_prefers_own_win_over_block() {
        let board = board_from("XX OO    ");
        let mut rng = SessionRng::new(7);

        let chosen = computer_next_move(&board, OpeningMode::RandomCorner, &mut rng).unwrap();

        assert_eq!(chosen.index, 5);
        assert_eq!(chosen.score, Some(4 + 1));
    }

    #[test]
    fn test_o_blocks_x_row() {
        let board = board_from("XX  O    ");
        let mut rng = SessionRng::new(7);

        let chosen = computer_next_move(&board, OpeningMode::RandomCorner, &mut rng).unwrap();

        assert_eq!(chosen.index, 2);
    }

    #[test]
    fn test_x_takes_centre_against_fork() {
        let board = board_from("OX O  X  ");

        let (index, score) = optimal_move(&board, Mark::X).unwrap();

        // The centre stops O forking on 5 and 8 and forks 2 and 7 for X.
        assert_eq!(index, 4);
        assert_eq!(score, -(2 + 1));
    }

    #[test]
    fn test_top_level_matches_root_minimax() {
        let board = board_from("X   O   X");
        let mut rng = SessionRng::new(1);

        let chosen = computer_next_move(&board, OpeningMode::RandomCorner, &mut rng).unwrap();
        let (score, best) = minimax(&mut board.clone(), None, true);

        assert_eq!(Some(chosen.index), best);
        assert_eq!(chosen.score, Some(score));
    }

    #[test]
    fn test_opening_move_is_a_corner() {
        for seed in 0..20 {
            let mut rng = SessionRng::new(seed);

            let chosen = computer_next_move(&Board::new(), OpeningMode::RandomCorner, &mut rng).unwrap();

            assert!(CORNER_CELLS.contains(&chosen.index));
            assert_eq!(chosen.score, None);
        }
    }

    #[test]
    fn test_full_search_opening_picks_first_drawing_cell() {
        let mut rng = SessionRng::new(0);

        let chosen = computer_next_move(&Board::new(), OpeningMode::FullSearch, &mut rng).unwrap();

        assert_eq!(chosen, ComputerMove { index: 0, score: Some(0) });
    }

    #[test]
    fn test_no_move_on_full_board() {
        let board = board_from("XOXXOOOXX");
        let mut rng = SessionRng::new(3);

        assert_eq!(computer_next_move(&board, OpeningMode::RandomCorner, &mut rng), None);
        assert_eq!(optimal_move(&board, Mark::X), None);
    }

    #[test]
    fn test_self_play_from_each_corner_is_a_draw() {
        for corner in CORNER_CELLS {
            let mut board = Board::new();
            board.apply_move(corner, Mark::O).unwrap();
            let mut rng = SessionRng::new(corner as u64);
            let mut to_move = Mark::X;

            while board.status() == GameStatus::InProgress {
                let index = match to_move {
                    Mark::X => optimal_move(&board, Mark::X).unwrap().0,
                    _ => computer_next_move(&board, OpeningMode::RandomCorner, &mut rng).unwrap().index,
                };
                board.apply_move(index, to_move).unwrap();
                to_move = to_move.opponent().unwrap();
            }

            assert_eq!(board.status(), GameStatus::Draw, "opening corner {}", corner);
        }
    }
}
