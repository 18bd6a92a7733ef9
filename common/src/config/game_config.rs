use serde::{Deserialize, Serialize};

use super::Validate;

/// Who opens each round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FirstPlayerMode {
    /// Coin flip; the computer calls heads.
    #[default]
    Random,
    Human,
    Computer,
}

/// How the computer plays into an empty board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OpeningMode {
    /// Any corner, uniformly at random. Every corner is minimax-optimal.
    #[default]
    RandomCorner,
    /// Search the whole tree like any other position.
    FullSearch,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub first_player: FirstPlayerMode,
    pub opening: OpeningMode,
    pub seed: Option<u64>,
    pub log_prefix: Option<String>,
}

impl Validate for GameConfig {
    fn validate(&self) -> Result<(), String> {
        if let Some(ref prefix) = self.log_prefix {
            if prefix.trim().is_empty() {
                return Err("log_prefix must not be blank".to_string());
            }
            if prefix.contains(['\n', '\r']) {
                return Err("log_prefix must be a single line".to_string());
            }
        }
        Ok(())
    }
}
