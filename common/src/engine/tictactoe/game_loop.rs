use crate::log;
use super::session::GameSession;
use super::types::{GameOutcome, Mark};
use super::view::GameView;

/// Plays one round to the end. Returns `None` if the player's input runs out.
pub fn play_round<V: GameView>(session: &mut GameSession, view: &mut V) -> Option<GameOutcome> {
    if session.first_player() == Mark::O {
        view.display_message("Heads. I go first!");
        if let Some(outcome) = computer_turn(session, view) {
            return Some(outcome);
        }
    } else {
        view.display_message("Tails. You go first!");
    }
    view.display_board(session.board());

    loop {
        human_turn(session, view)?;
        if let Some(outcome) = finish_if_over(session, view, Mark::X) {
            return Some(outcome);
        }

        if let Some(outcome) = computer_turn(session, view) {
            return Some(outcome);
        }
    }
}

fn human_turn<V: GameView>(session: &mut GameSession, view: &mut V) -> Option<()> {
    loop {
        let Some(raw) = view.get_player_input() else {
            log!("Player input closed, abandoning round");
            return None;
        };

        match session.play_human_input(&raw) {
            Ok(index) => {
                view.display_message(&format!("You chose cell {}", index));
                view.display_board(session.board());
                return Some(());
            }
            Err(e) => {
                log!("Rejected input {:?}: {}", raw, e);
                view.display_input_error(raw.trim(), e.kind());
            }
        }
    }
}

fn computer_turn<V: GameView>(session: &mut GameSession, view: &mut V) -> Option<GameOutcome> {
    if let Some(chosen) = session.play_computer_move() {
        view.display_message(&format!("I chose cell {}", chosen.index));
        view.display_board(session.board());
    }
    finish_if_over(session, view, Mark::O)
}

fn finish_if_over<V: GameView>(session: &GameSession, view: &mut V, mark: Mark) -> Option<GameOutcome> {
    let outcome = session.terminate(mark)?;
    view.display_message(outcome.message());
    Some(outcome)
}
