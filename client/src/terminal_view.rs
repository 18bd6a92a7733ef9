use std::io::{BufRead, Write};

use tictactoe_common::log;
use tictactoe_common::tictactoe::{Board, GameView, InputErrorKind};

const INPUT_PROMPT: &str = "> Next move for X (state a valid cell num): ";

/// Line-oriented terminal front end. Generic over its streams so tests can
/// drive it with in-memory buffers.
pub struct TerminalView<R: BufRead, W: Write> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> TerminalView<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn display_welcome(&mut self) {
        self.write_line("Welcome to Tic-Tac-Toe!\n");
        self.write_line("You play X and the computer plays O.\n");
        self.write_line("I, as the computer, will play strategically!\n");
        self.write_line("Let's determine who goes first! I call heads.\n");
    }

    /// Reads one line after printing `prompt`; `None` on end of input.
    pub fn read_line(&mut self, prompt: &str) -> Option<String> {
        self.write_raw(prompt);
        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) => None,
            Ok(_) => Some(line.trim_end_matches(['\r', '\n']).to_string()),
            Err(e) => {
                log!("Failed to read player input: {}", e);
                None
            }
        }
    }

    fn write_raw(&mut self, text: &str) {
        if let Err(e) = write!(self.output, "{}", text).and_then(|_| self.output.flush()) {
            log!("Failed to write to terminal: {}", e);
        }
    }

    fn write_line(&mut self, text: &str) {
        self.write_raw(&format!("{}\n", text));
    }
}

pub fn render_board(board: &Board) -> String {
    let c = board.cells();
    format!(
        "   {} | {} | {}    0 | 1 | 2\n   --+---+--    --+---+--\n   {} | {} | {}    3 | 4 | 5\n   --+---+--    --+---+--\n   {} | {} | {}    6 | 7 | 8",
        c[0], c[1], c[2], c[3], c[4], c[5], c[6], c[7], c[8]
    )
}

pub fn input_error_message(raw_input: &str, kind: InputErrorKind) -> String {
    match kind {
        InputErrorKind::Type => format!("'{}' is not an Integer! Please try again...", raw_input),
        InputErrorKind::Range => format!("'{}' is out of range! Choose a cell from 0 to 8", raw_input),
        InputErrorKind::Occupied => format!("'{}' is occupied! Try another valid cell number", raw_input),
    }
}

impl<R: BufRead, W: Write> GameView for TerminalView<R, W> {
    fn display_board(&mut self, board: &Board) {
        self.write_line("");
        self.write_line(&render_board(board));
        self.write_line("");
    }

    fn display_message(&mut self, text: &str) {
        self.write_line(text);
    }

    fn display_game_status(&mut self, text: &str) {
        self.write_line(text);
    }

    fn display_input_error(&mut self, raw_input: &str, kind: InputErrorKind) {
        self.write_line(&input_error_message(raw_input, kind));
    }

    fn get_player_input(&mut self) -> Option<String> {
        self.read_line(INPUT_PROMPT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use tictactoe_common::tictactoe::Mark;

    #[test]
    fn test_render_board_with_legend() {
        let mut board = Board::new();
        board.apply_move(0, Mark::X).unwrap();
        board.apply_move(4, Mark::O).unwrap();

        let rendered = render_board(&board);

        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], "   X |   |      0 | 1 | 2");
        assert_eq!(lines[2], "     | O |      3 | 4 | 5");
    }

    #[test]
    fn test_input_error_messages() {
        assert_eq!(
            input_error_message("abc", InputErrorKind::Type),
            "'abc' is not an Integer! Please try again..."
        );
        assert!(input_error_message("9", InputErrorKind::Range).contains("out of range"));
        assert!(input_error_message("4", InputErrorKind::Occupied).contains("is occupied"));
    }

    #[test]
    fn test_get_player_input_strips_newline() {
        let mut output = Vec::new();
        let mut view = TerminalView::new(Cursor::new("7\r\n"), &mut output);

        assert_eq!(view.get_player_input(), Some("7".to_string()));
        assert_eq!(view.get_player_input(), None);

        let printed = String::from_utf8(output).unwrap();
        assert!(printed.starts_with(INPUT_PROMPT));
    }
}
