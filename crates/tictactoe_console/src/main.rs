//! Tic-tac-toe console game.

use anyhow::Result;
use clap::Parser;
use std::cell::RefCell;
use std::rc::Rc;
use tictactoe_console::{
    Cli, ConsolePresenter, GameConfig, SharedInput, create_player, initialize_tracing,
};
use tictactoe_engine::{Board, BoardLogger, Game, Symbol};
use tracing::{info, instrument};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = GameConfig::resolve(&cli)?;

    initialize_tracing(config.log_file().as_deref())?;

    run_game(&config)
}

/// Plays one game to completion on stdin/stdout.
#[instrument(skip_all, fields(size = config.board_size()))]
fn run_game(config: &GameConfig) -> Result<()> {
    let mut board = Board::new(*config.board_size())?;
    board.add_observer(Rc::new(RefCell::new(BoardLogger::new())));

    // One lock on stdin for the whole game; both seats read through it.
    let input = SharedInput::new(std::io::stdin().lock());
    let player_x = create_player(
        config.player_kind(Symbol::X)?,
        Symbol::X,
        &input,
        std::io::stdout(),
    );
    let player_o = create_player(
        config.player_kind(Symbol::O)?,
        Symbol::O,
        &input,
        std::io::stdout(),
    );

    let mut game = Game::new(board, player_x, player_o)?.starting_with(*config.first());
    let mut presenter = ConsolePresenter::new(std::io::stdout());

    let status = game.run(&mut presenter)?;
    info!(%status, "Exiting");
    Ok(())
}
