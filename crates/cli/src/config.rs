//! Configuration loaded from `woodpusher.toml`.
//!
//! Every field is optional; a missing file means defaults. Example:
//!
//! ```toml
//! engine = "bruteforce"
//! engine_side = "white"
//! depth = 3
//! play_self = false
//! debug = false
//! svg_path = "board.svg"
//! ```

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use chess_rules::Color;
use serde::Deserialize;

/// Which side the engine plays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EngineSide {
    White,
    Black,
}

impl From<EngineSide> for Color {
    fn from(side: EngineSide) -> Color {
        match side {
            EngineSide::White => Color::White,
            EngineSide::Black => Color::Black,
        }
    }
}

/// Which engine makes the bot's decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EngineKind {
    Bruteforce,
    Greedy,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub engine: EngineKind,
    pub engine_side: EngineSide,
    /// Search depth in plies
    pub depth: u8,
    /// Engine plays both sides
    pub play_self: bool,
    /// Print per-decision search diagnostics
    pub debug: bool,
    /// Where the board diagram is written after every shown position
    pub svg_path: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            engine: EngineKind::Bruteforce,
            engine_side: EngineSide::Black,
            depth: 3,
            play_self: false,
            debug: false,
            svg_path: "board.svg".to_string(),
        }
    }
}

impl Config {
    /// Reads the config file, falling back to defaults when it is absent.
    pub fn load(path: &Path) -> Result<Config> {
        if !path.exists() {
            return Ok(Config::default());
        }
        let contents = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        toml::from_str(&contents).with_context(|| format!("failed to parse {}", path.display()))
    }
}
