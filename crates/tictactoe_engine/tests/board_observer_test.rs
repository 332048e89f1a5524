//! Observer notification through the board and the turn loop.

use std::cell::{Cell as Counter, RefCell};
use std::io;
use std::rc::Rc;
use tictactoe_engine::{
    Board, BoardLogger, BoardObserver, Coordinate, Game, GameStatus, Move, MoveError, Player,
    PlayerError, Presenter, ScriptedPlayer, Symbol,
};

struct Silent;

impl Presenter for Silent {
    fn show_board(&mut self, _board: &Board) -> io::Result<()> {
        Ok(())
    }
    fn announce_turn(&mut self, _symbol: Symbol) -> io::Result<()> {
        Ok(())
    }
    fn reject_move(&mut self, _attempt: Move, _error: &MoveError) -> io::Result<()> {
        Ok(())
    }
    fn announce_outcome(&mut self, _status: GameStatus) -> io::Result<()> {
        Ok(())
    }
}

/// Scripted player that reports notifications into a shared log.
struct Watching {
    inner: ScriptedPlayer,
    log: Rc<RefCell<Vec<Symbol>>>,
}

impl BoardObserver for Watching {
    fn update(&mut self, _board: &Board) {
        self.log.borrow_mut().push(self.inner.symbol());
    }
}

impl Player for Watching {
    fn symbol(&self) -> Symbol {
        self.inner.symbol()
    }
    fn name(&self) -> &str {
        self.inner.name()
    }
    fn next_move(&mut self, board: &Board) -> Result<Coordinate, PlayerError> {
        self.inner.next_move(board)
    }
}

struct Tally(Rc<Counter<usize>>);

impl BoardObserver for Tally {
    fn update(&mut self, _board: &Board) {
        self.0.set(self.0.get() + 1);
    }
}

fn coords(list: &[(usize, usize)]) -> Vec<Coordinate> {
    list.iter().map(|&(r, c)| Coordinate::new(r, c)).collect()
}

#[test]
fn test_notifications_equal_updates_times_observers() {
    let count = Rc::new(Counter::new(0));
    let mut board = Board::standard();
    for _ in 0..3 {
        board.add_observer(Rc::new(RefCell::new(Tally(count.clone()))));
    }

    let moves = [(0, 0, Symbol::X), (1, 1, Symbol::O), (2, 2, Symbol::X), (0, 2, Symbol::O)];
    for (k, &(row, col, symbol)) in moves.iter().enumerate() {
        board.update_board(Coordinate::new(row, col), symbol).unwrap();
        assert_eq!(count.get(), (k + 1) * 3);
    }

    assert!(board.update_board(Coordinate::new(1, 1), Symbol::X).is_err());
    assert_eq!(count.get(), 12);
}

#[test]
fn test_players_notified_in_registration_order() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let player_x = Watching {
        inner: ScriptedPlayer::new(Symbol::X, coords(&[(0, 0), (0, 1), (0, 2)])),
        log: log.clone(),
    };
    let player_o = Watching {
        inner: ScriptedPlayer::new(Symbol::O, coords(&[(1, 1), (1, 1), (2, 2)])),
        log: log.clone(),
    };
    let mut game = Game::new(Board::standard(), player_x, player_o).unwrap();

    let status = game.run(&mut Silent).unwrap();

    // Five applied moves, one rejected retry that must not notify.
    assert_eq!(status, GameStatus::Won(Symbol::X));
    assert_eq!(game.moves_played(), 5);
    let log = log.borrow();
    assert_eq!(log.len(), 10);
    assert!(log.chunks(2).all(|pair| pair == [Symbol::X, Symbol::O]));
}

#[test]
fn test_extra_observer_sees_every_game_move() {
    let logger = Rc::new(RefCell::new(BoardLogger::new()));
    let mut board = Board::standard();
    board.add_observer(logger.clone());

    let mut game = Game::new(
        board,
        ScriptedPlayer::new(Symbol::X, coords(&[(0, 0), (1, 1), (2, 2)])),
        ScriptedPlayer::new(Symbol::O, coords(&[(0, 1), (0, 2)])),
    )
    .unwrap();
    game.run(&mut Silent).unwrap();

    assert_eq!(game.board().observer_count(), 3);
    assert_eq!(logger.borrow().updates(), 5);
}
