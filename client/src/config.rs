use tictactoe_common::config::{
    ConfigManager, FileContentConfigProvider, FirstPlayerMode, GameConfig, YamlConfigSerializer,
};

use crate::Args;

pub fn get_config_manager(path: &str) -> ConfigManager<FileContentConfigProvider, GameConfig, YamlConfigSerializer> {
    ConfigManager::from_yaml_file(path)
}

/// Command-line flags win over the file.
pub fn apply_overrides(mut config: GameConfig, args: &Args) -> GameConfig {
    if let Some(seed) = args.seed {
        config.seed = Some(seed);
    }
    if let Some(first_player) = args.first_player {
        config.first_player = first_player.into();
    }
    if args.use_log_prefix && config.log_prefix.is_none() {
        config.log_prefix = Some("TicTacToe".to_string());
    }
    config
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum FirstPlayerArg {
    Random,
    Human,
    Computer,
}

impl From<FirstPlayerArg> for FirstPlayerMode {
    fn from(arg: FirstPlayerArg) -> Self {
        match arg {
            FirstPlayerArg::Random => FirstPlayerMode::Random,
            FirstPlayerArg::Human => FirstPlayerMode::Human,
            FirstPlayerArg::Computer => FirstPlayerMode::Computer,
        }
    }
}
