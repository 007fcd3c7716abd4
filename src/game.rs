use crate::board::{BOARD_SIZE, Board};
use crate::types::{Color, GameResult, GameState, Move, Position};

/// Outcome of a victory scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Victory {
    None,
    BlackWins,
    WhiteWins,
}

/// One game in progress. Owns the board exclusively; hosts read it through
/// `board()` and mutate it only through the methods here.
pub struct GameInstance {
    board: Board,
    pub turn: Color,
    pub is_over: bool,
    /// Squares cleared by the most recent move, for host animation.
    pub captured: Vec<u8>,
}

impl GameInstance {
    /// Starts a fresh game, black to move. Starting over means
    /// constructing a new instance.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            turn: Color::Black,
            is_over: false,
            captured: Vec::new(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the moves available to the piece on `(x, y)`. An owned piece
    /// with nothing to do yields an empty list, not an error.
    pub fn legal_moves_at(&self, x: u8, y: u8) -> Result<Vec<Move>, String> {
        if self.is_over {
            return Err("game is already over".to_string());
        }

        let piece = self.board.get(x as usize, y as usize)?;
        if piece.is_empty() {
            return Err("no piece at the selected square".to_string());
        }
        if piece.color() != Some(self.turn) {
            return Err("it is not that piece's turn".to_string());
        }

        Ok(self.board.legal_moves(piece, x as usize, y as usize))
    }

    /// Plays one full turn: re-enumerates the piece's moves, applies the
    /// chosen one, scans for victory, and flips the turn when the game
    /// continues. A winning move ends the game without flipping.
    pub fn play_at(&mut self, x: u8, y: u8, index: usize) -> Result<(), String> {
        let moves = self.legal_moves_at(x, y)?;
        let mv = moves
            .get(index)
            .ok_or_else(|| format!("move index {index} out of range"))?;

        self.apply_move(x, y, mv);
        if self.check_victory() == Victory::None {
            self.next_turn();
        }
        Ok(())
    }

    /// Applies a move previously obtained from `legal_moves_at` and records
    /// its captures. No legality re-check and no turn bookkeeping.
    pub fn apply_move(&mut self, x: u8, y: u8, mv: &Move) {
        let captured = self.board.apply_move(x as usize, y as usize, mv);
        self.captured = captured.iter().map(square_index).collect();
    }

    /// Scans the board for a side with no pieces left. Sets `is_over` on a
    /// win and never clears it.
    pub fn check_victory(&mut self) -> Victory {
        if self.board.count_by_color(Color::White) == 0 {
            self.is_over = true;
            Victory::BlackWins
        } else if self.board.count_by_color(Color::Black) == 0 {
            self.is_over = true;
            Victory::WhiteWins
        } else {
            Victory::None
        }
    }

    /// Unconditional turn flip.
    pub fn next_turn(&mut self) {
        self.turn = self.turn.opponent();
    }

    pub fn to_game_state(&self) -> GameState {
        GameState {
            board: self.board.to_array().to_vec(),
            turn: self.turn.code(),
            black_count: self.board.count_by_color(Color::Black),
            white_count: self.board.count_by_color(Color::White),
            is_over: self.is_over,
            captured: self.captured.clone(),
        }
    }

    pub fn to_game_result(&self) -> GameResult {
        let black_count = self.board.count_by_color(Color::Black);
        let white_count = self.board.count_by_color(Color::White);
        GameResult {
            winner: if white_count == 0 {
                Color::Black.code()
            } else if black_count == 0 {
                Color::White.code()
            } else {
                0
            },
            black_count,
            white_count,
        }
    }

    #[cfg(test)]
    fn set_board_for_test(&mut self, board: Board, turn: Color) {
        self.board = board;
        self.turn = turn;
        self.is_over = false;
        self.captured.clear();
    }
}

impl Default for GameInstance {
    fn default() -> Self {
        Self::new()
    }
}

fn square_index(position: &Position) -> u8 {
    position.y * BOARD_SIZE as u8 + position.x
}
