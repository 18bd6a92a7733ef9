use super::types::{CELL_COUNT, Mark, WIN_LINES, WinningLine};

/// First line fully owned by `mark`, scanning rows, columns, then diagonals.
pub fn find_line(cells: &[Mark; CELL_COUNT], mark: Mark) -> Option<[usize; 3]> {
    if mark == Mark::Empty {
        return None;
    }

    WIN_LINES
        .iter()
        .find(|line| line.iter().all(|&i| cells[i] == mark))
        .copied()
}

pub fn has_won(cells: &[Mark; CELL_COUNT], mark: Mark) -> bool {
    find_line(cells, mark).is_some()
}

pub fn check_win(cells: &[Mark; CELL_COUNT]) -> Option<Mark> {
    check_win_with_line(cells).map(|line| line.mark)
}

// X is checked before O; a legal game never has both.
pub fn check_win_with_line(cells: &[Mark; CELL_COUNT]) -> Option<WinningLine> {
    for mark in [Mark::X, Mark::O] {
        if let Some(line) = find_line(cells, mark) {
            return Some(WinningLine::new(mark, line));
        }
    }
    None
}
