mod board;
mod errors;
mod game_loop;
mod search;
mod session;
mod types;
mod view;
mod win_detector;

pub use board::Board;
pub use errors::{InputError, InputErrorKind, MoveError};
pub use game_loop::play_round;
pub use search::{ComputerMove, computer_next_move, minimax, optimal_move};
pub use session::GameSession;
pub use types::{BOARD_SIDE, CELL_COUNT, CORNER_CELLS, GameOutcome, GameStatus, Mark, WIN_LINES, WinningLine};
pub use view::GameView;
pub use win_detector::{check_win, check_win_with_line};
