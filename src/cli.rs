use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use serde::Deserialize;

use chess_board_core::game_state::chess_types::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Light,
    Dark,
}

impl From<Side> for Color {
    fn from(side: Side) -> Self {
        match side {
            Side::Light => Color::Light,
            Side::Dark => Color::Dark,
        }
    }
}

#[derive(Parser, Debug)]
#[command(
    name = "chess_board_core",
    version,
    about = "Play the chess board core in a terminal"
)]
pub struct Cli {
    /// Let the random engine play this side
    #[arg(long, value_enum)]
    pub ai: Option<Side>,

    /// Seed for the random engine
    #[arg(long)]
    pub seed: Option<u64>,

    /// Draw the board with letters instead of Unicode glyphs
    #[arg(long)]
    pub ascii: bool,

    /// YAML settings file (falls back to $CHESS_CORE_CONFIG)
    #[arg(long)]
    pub config: Option<PathBuf>,
}
