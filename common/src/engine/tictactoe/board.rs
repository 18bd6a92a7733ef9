use super::errors::MoveError;
use super::types::{CELL_COUNT, GameStatus, Mark, WinningLine};
use super::win_detector;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Board {
    cells: [Mark; CELL_COUNT],
    played: u16,
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_cells(cells: [Mark; CELL_COUNT]) -> Self {
        let mut board = Self::new();
        for (index, &mark) in cells.iter().enumerate() {
            if mark != Mark::Empty {
                board.set(index, mark);
            }
        }
        board
    }

    pub fn cells(&self) -> &[Mark; CELL_COUNT] {
        &self.cells
    }

    pub fn cell(&self, index: usize) -> Option<Mark> {
        self.cells.get(index).copied()
    }

    pub fn empty_cells(&self) -> Vec<usize> {
        let mut moves = Vec::with_capacity(CELL_COUNT);
        for (index, &cell) in self.cells.iter().enumerate() {
            if cell == Mark::Empty {
                moves.push(index);
            }
        }
        moves
    }

    pub fn empty_count(&self) -> usize {
        CELL_COUNT - self.played_count()
    }

    pub fn played_cells(&self) -> Vec<usize> {
        (0..CELL_COUNT).filter(|&i| self.is_played(i)).collect()
    }

    pub fn played_count(&self) -> usize {
        self.played.count_ones() as usize
    }

    pub fn is_played(&self, index: usize) -> bool {
        index < CELL_COUNT && self.played & (1 << index) != 0
    }

    pub fn is_empty(&self) -> bool {
        self.played == 0
    }

    pub fn is_full(&self) -> bool {
        self.played_count() == CELL_COUNT
    }

    pub fn has_won(&self, mark: Mark) -> bool {
        win_detector::has_won(&self.cells, mark)
    }

    pub fn winning_line(&self, mark: Mark) -> Option<WinningLine> {
        win_detector::find_line(&self.cells, mark).map(|cells| WinningLine::new(mark, cells))
    }

    pub fn is_draw(&self) -> bool {
        self.is_full() && !self.has_won(Mark::X) && !self.has_won(Mark::O)
    }

    pub fn status(&self) -> GameStatus {
        match win_detector::check_win(&self.cells) {
            Some(Mark::X) => GameStatus::XWon,
            Some(Mark::O) => GameStatus::OWon,
            _ if self.is_full() => GameStatus::Draw,
            _ => GameStatus::InProgress,
        }
    }

    pub fn validate_move(&self, index: usize) -> Result<(), MoveError> {
        if index >= CELL_COUNT {
            return Err(MoveError::OutOfRange {
                index: i64::try_from(index).unwrap_or(i64::MAX),
            });
        }
        if self.is_played(index) {
            return Err(MoveError::Occupied { index });
        }
        Ok(())
    }

    pub fn apply_move(&mut self, index: usize, mark: Mark) -> Result<(), MoveError> {
        self.validate_move(index)?;
        if mark == Mark::Empty {
            return Err(MoveError::NoPlayerMark { index });
        }
        self.set(index, mark);
        Ok(())
    }

    pub(crate) fn set(&mut self, index: usize, mark: Mark) {
        self.cells[index] = mark;
        self.played |= 1 << index;
    }

    pub(crate) fn clear(&mut self, index: usize) {
        self.cells[index] = Mark::Empty;
        self.played &= !(1 << index);
    }
}

#[cfg(test)]
pub(crate) fn board_from(layout: &str) -> Board {
    let mut cells = [Mark::Empty; CELL_COUNT];
    for (i, c) in layout.chars().enumerate() {
        cells[i] = Mark::from_symbol(c).unwrap();
    }
    Board::from_cells(cells)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();

        assert!(board.is_empty());
        assert_eq!(board.empty_cells(), (0..9).collect::<Vec<_>>());
        assert!(!board.has_won(Mark::X));
        assert!(!board.has_won(Mark::O));
        assert!(!board.is_draw());
        assert_eq!(board.status(), GameStatus::InProgress);
    }

    #[test]
    fn test_apply_move_records_played_cell() {
        let mut board = Board::new();

        board.apply_move(4, Mark::X).unwrap();

        assert_eq!(board.cell(4), Some(Mark::X));
        assert_eq!(board.played_cells(), vec![4]);
        assert_eq!(board.empty_cells(), vec![0, 1, 2, 3, 5, 6, 7, 8]);
    }

    #[test]
    fn test_apply_move_on_occupied_cell_leaves_board_unchanged() {
        let mut board = Board::new();
        board.apply_move(0, Mark::O).unwrap();
        let before = board.clone();

        let result = board.apply_move(0, Mark::X);

        assert_eq!(result, Err(MoveError::Occupied { index: 0 }));
        assert_eq!(board, before);
        assert_eq!(board.played_cells(), vec![0]);
    }

    #[test]
    fn test_apply_move_out_of_range() {
        let mut board = Board::new();

        let result = board.apply_move(9, Mark::X);

        assert_eq!(result, Err(MoveError::OutOfRange { index: 9 }));
        assert!(board.is_empty());
    }

    #[test]
    fn test_apply_move_rejects_empty_mark() {
        let mut board = board_from("X        ");

        let result = board.apply_move(3, Mark::Empty);

        assert_eq!(result, Err(MoveError::NoPlayerMark { index: 3 }));
        assert_eq!(board.played_cells(), vec![0]);
        assert_eq!(board.empty_count(), board.empty_cells().len());
        assert_eq!(board.validate_move(3), Ok(()));
    }

    #[test]
    fn test_single_line_winner() {
        let board = board_from("XXXOO    ");

        assert!(board.has_won(Mark::X));
        assert!(!board.has_won(Mark::O));
        assert_eq!(board.status(), GameStatus::XWon);
        assert_eq!(board.winning_line(Mark::X).map(|l| l.cells), Some([0, 1, 2]));
        assert_eq!(board.winning_line(Mark::O), None);
    }

    #[test]
    fn test_full_board_without_line_is_draw() {
        let board = board_from("XOXXOOOXX");

        assert!(board.is_full());
        assert!(board.is_draw());
        assert_eq!(board.status(), GameStatus::Draw);
    }

    #[test]
    fn test_full_board_with_line_is_not_draw() {
        let board = board_from("XXXOOXOXO");

        assert!(board.is_full());
        assert!(!board.is_draw());
    }

    #[test]
    fn test_queries_do_not_mutate() {
        let board = board_from("XO  X   O");
        let before = board.clone();

        let first = board.empty_cells();
        let second = board.empty_cells();
        for _ in 0..3 {
            board.has_won(Mark::X);
            board.has_won(Mark::O);
        }

        assert_eq!(first, second);
        assert_eq!(board, before);
    }

    #[test]
    fn test_played_set_tracks_non_empty_cells() {
        let board = board_from("X O  X O ");

        assert_eq!(board.played_cells(), vec![0, 2, 5, 7]);
        assert_eq!(board.played_count(), 4);
        assert_eq!(board.empty_count(), 5);
    }

    #[test]
    fn test_clear_restores_empty_cell() {
        let mut board = Board::new();
        board.set(6, Mark::O);

        board.clear(6);

        assert_eq!(board, Board::new());
    }
}
