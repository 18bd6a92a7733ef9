use super::board::Board;
use super::errors::InputErrorKind;

/// The presentation side of a round: everything the player sees or types.
pub trait GameView {
    fn display_board(&mut self, board: &Board);

    fn display_message(&mut self, text: &str);

    fn display_game_status(&mut self, text: &str);

    fn display_input_error(&mut self, raw_input: &str, kind: InputErrorKind);

    /// Next line typed by the player, or `None` once input is exhausted.
    fn get_player_input(&mut self) -> Option<String>;
}
