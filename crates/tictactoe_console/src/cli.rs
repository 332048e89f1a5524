//! Command-line interface for the console game.

use clap::Parser;
use std::path::PathBuf;
use tictactoe_engine::Symbol;

/// Two-player tic-tac-toe on the console
#[derive(Parser, Debug, Default)]
#[command(name = "tictactoe")]
#[command(about = "Two-player tic-tac-toe on the console", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Board side length (overrides the config file)
    #[arg(short, long)]
    pub size: Option<usize>,

    /// Symbol that moves first: x or o (overrides the config file)
    #[arg(long)]
    pub first: Option<Symbol>,

    /// Path to a TOML config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Play X from a script instead of the console, e.g. "0,0 1,1 2,2"
    #[arg(long)]
    pub x_moves: Option<String>,

    /// Play O from a script instead of the console, e.g. "0,1 0,2"
    #[arg(long)]
    pub o_moves: Option<String>,

    /// Write logs to this file instead of stderr
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}
