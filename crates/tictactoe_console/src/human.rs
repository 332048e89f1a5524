//! Human player that reads coordinates from the console.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::io::{BufRead, Write};
use std::rc::Rc;
use tictactoe_engine::{Board, BoardObserver, Coordinate, Player, PlayerError, Symbol};
use tracing::{debug, instrument, warn};

/// Whitespace-separated tokens read from one console, shared by every
/// human seat.
///
/// Clones hand out the same reader and the same queue of tokens typed ahead,
/// so `0 0 1 0` on one line answers X's move and then O's.
pub struct SharedInput<R> {
    inner: Rc<RefCell<TokenReader<R>>>,
}

struct TokenReader<R> {
    reader: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> SharedInput<R> {
    /// Wraps `reader` as the single input source for the game.
    pub fn new(reader: R) -> Self {
        Self {
            inner: Rc::new(RefCell::new(TokenReader {
                reader,
                pending: VecDeque::new(),
            })),
        }
    }

    /// Next token, reading more lines as needed.
    ///
    /// # Errors
    ///
    /// Returns [`PlayerError::InputClosed`] at end of input.
    pub fn next_token(&self) -> Result<String, PlayerError> {
        let mut source = self.inner.borrow_mut();
        while source.pending.is_empty() {
            let mut line = String::new();
            if source.reader.read_line(&mut line)? == 0 {
                return Err(PlayerError::InputClosed);
            }
            source
                .pending
                .extend(line.split_whitespace().map(str::to_string));
        }
        source.pending.pop_front().ok_or(PlayerError::InputClosed)
    }
}

impl<R> Clone for SharedInput<R> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<R> std::fmt::Debug for SharedInput<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SharedInput")
            .field("pending", &self.inner.borrow().pending)
            .finish()
    }
}

/// Human player typing a row and a column per move.
///
/// Tokens are whitespace separated and may span lines, so `1 2` on one line
/// answers both prompts. Anything that is not a non-negative integer is
/// reported and asked for again.
pub struct HumanPlayer<R, W> {
    name: String,
    symbol: Symbol,
    input: SharedInput<R>,
    prompt: W,
}

impl<R: BufRead, W: Write> HumanPlayer<R, W> {
    /// Creates a console player reading from `input` and prompting on `prompt`.
    pub fn new(symbol: Symbol, input: SharedInput<R>, prompt: W) -> Self {
        Self {
            name: format!("Player {}", symbol),
            symbol,
            input,
            prompt,
        }
    }

    /// Consumes the player, returning the prompt writer.
    pub fn into_prompt(self) -> W {
        self.prompt
    }

    fn read_index(&mut self, label: &str, size: usize) -> Result<usize, PlayerError> {
        loop {
            writeln!(
                self.prompt,
                "Player {} enter {} (0-{}): ",
                self.symbol,
                label,
                size.saturating_sub(1)
            )?;
            self.prompt.flush()?;

            let token = self.input.next_token()?;
            match parse_index(&token) {
                Ok(index) => return Ok(index),
                Err(err @ PlayerError::MalformedInput { .. }) => {
                    warn!(player = %self.name, %err, "Malformed input");
                    writeln!(self.prompt, "{}, try again.", err)?;
                }
                Err(err) => return Err(err),
            }
        }
    }
}

fn parse_index(token: &str) -> Result<usize, PlayerError> {
    token.parse::<usize>().map_err(|_| PlayerError::MalformedInput {
        input: token.to_string(),
    })
}

impl<R, W> BoardObserver for HumanPlayer<R, W> {}

impl<R: BufRead, W: Write> Player for HumanPlayer<R, W> {
    fn symbol(&self) -> Symbol {
        self.symbol
    }

    fn name(&self) -> &str {
        &self.name
    }

    #[instrument(skip(self, board), fields(player = %self.name))]
    fn next_move(&mut self, board: &Board) -> Result<Coordinate, PlayerError> {
        let row = self.read_index("row", board.size())?;
        let col = self.read_index("col", board.size())?;
        let coordinate = Coordinate::new(row, col);
        debug!(%coordinate, "Human chose coordinate");
        Ok(coordinate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn player(input: &str) -> HumanPlayer<Cursor<Vec<u8>>, Vec<u8>> {
        let input = SharedInput::new(Cursor::new(input.as_bytes().to_vec()));
        HumanPlayer::new(Symbol::X, input, Vec::new())
    }

    #[test]
    fn test_reads_row_then_col() {
        let board = Board::standard();
        let mut human = player("1\n2\n");

        assert_eq!(human.next_move(&board).unwrap(), Coordinate::new(1, 2));

        let prompts = String::from_utf8(human.into_prompt()).unwrap();
        assert_eq!(
            prompts,
            "Player X enter row (0-2): \nPlayer X enter col (0-2): \n"
        );
    }

    #[test]
    fn test_both_numbers_on_one_line() {
        let board = Board::standard();
        let mut human = player("2 0\n0 1\n");

        assert_eq!(human.next_move(&board).unwrap(), Coordinate::new(2, 0));
        assert_eq!(human.next_move(&board).unwrap(), Coordinate::new(0, 1));
    }

    #[test]
    fn test_seats_share_typed_ahead_tokens() {
        let board = Board::standard();
        let input = SharedInput::new(Cursor::new(b"0 0 1 0\n2 2".to_vec()));
        let mut x = HumanPlayer::new(Symbol::X, input.clone(), Vec::new());
        let mut o = HumanPlayer::new(Symbol::O, input, Vec::new());

        assert_eq!(x.next_move(&board).unwrap(), Coordinate::new(0, 0));
        assert_eq!(o.next_move(&board).unwrap(), Coordinate::new(1, 0));
        assert_eq!(x.next_move(&board).unwrap(), Coordinate::new(2, 2));
        assert!(matches!(o.next_move(&board), Err(PlayerError::InputClosed)));
    }

    #[test]
    fn test_parse_index() {
        assert_eq!(parse_index("7").unwrap(), 7);
        assert!(matches!(
            parse_index("-1"),
            Err(PlayerError::MalformedInput { input }) if input == "-1"
        ));
    }
}
