mod config;
mod terminal_view;

use std::io;

use clap::Parser;
use tictactoe_common::config::{DEFAULT_CONFIG_FILE, GameConfig};
use tictactoe_common::tictactoe::{GameSession, GameView, play_round};
use tictactoe_common::{SessionRng, log, logger};

use config::FirstPlayerArg;
use terminal_view::TerminalView;

#[derive(Parser)]
#[command(name = "tictactoe", about = "Play tic-tac-toe against an unbeatable computer")]
pub struct Args {
    /// YAML settings file; defaults are used when it does not exist.
    #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
    config: String,

    /// Seed for the coin flip and opening corner.
    #[arg(long)]
    seed: Option<u64>,

    #[arg(long, value_enum)]
    first_player: Option<FirstPlayerArg>,

    #[arg(long)]
    use_log_prefix: bool,

    /// Write the effective settings back to the config file.
    #[arg(long)]
    save_config: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config_manager = config::get_config_manager(&args.config);
    let config = config::apply_overrides(config_manager.get_config()?, &args);

    logger::init_logger(config.log_prefix.clone());
    log!("Loaded settings from {}: {:?}", config_manager.file_path(), config);

    if args.save_config {
        config_manager.set_config(&config)?;
        log!("Saved settings to {}", config_manager.file_path());
    }

    let stdin = io::stdin();
    let mut view = TerminalView::new(stdin.lock(), io::stdout());
    run(&config, &mut view);

    Ok(())
}

fn run<R: io::BufRead, W: io::Write>(config: &GameConfig, view: &mut TerminalView<R, W>) {
    let mut master_rng = match config.seed {
        Some(seed) => SessionRng::new(seed),
        None => SessionRng::from_random(),
    };
    log!("Master seed {}", master_rng.seed());

    loop {
        view.display_welcome();
        if view.read_line("Press [Enter] to flip a coin ...").is_none() {
            break;
        }

        let mut session = GameSession::new(config, master_rng.fork());
        if play_round(&mut session, view).is_none() {
            break;
        }

        view.display_game_status("Press [1] to continue game. Press anything else to end.");
        match view.read_line("> ") {
            Some(option) if option.trim() == "1" => continue,
            _ => break,
        }
    }
}
