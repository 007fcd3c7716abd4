use serde::Serialize;

/// A side in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Black,
    White,
}

impl Color {
    /// Returns the other side.
    pub fn opponent(self) -> Color {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }

    /// Player code used across the WASM boundary: 1=black, 2=white.
    pub fn code(self) -> u8 {
        match self {
            Color::Black => 1,
            Color::White => 2,
        }
    }
}

/// One square of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Empty,
    Man(Color),
    King(Color),
}

impl Cell {
    /// Returns the owning side, `None` for an empty square.
    pub fn color(self) -> Option<Color> {
        match self {
            Cell::Empty => None,
            Cell::Man(color) | Cell::King(color) => Some(color),
        }
    }

    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    /// Cell code used across the WASM boundary:
    /// 0=empty, 1=black man, 2=white man, 3=black king, 4=white king.
    pub fn code(self) -> u8 {
        match self {
            Cell::Empty => 0,
            Cell::Man(color) => color.code(),
            Cell::King(color) => color.code() + 2,
        }
    }
}

/// A board coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Position {
    pub x: u8,
    pub y: u8,
}

/// A move the selected piece can make.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Move {
    Slide { to: Position },
    /// Contract:
    /// - `captures` and `landings` have equal length >= 1, in chain order.
    /// - `landings[i]` is two diagonal steps from the previous position,
    ///   with `captures[i]` on the square in between.
    Jump {
        captures: Vec<Position>,
        landings: Vec<Position>,
    },
}

/// Public game state returned from WASM APIs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameState {
    pub board: Vec<u8>,
    pub turn: u8,
    pub black_count: u8,
    pub white_count: u8,
    pub is_over: bool,
    /// Contract:
    /// - Jump: squares (0..=99) cleared by the last move.
    /// - Slide: must be an empty list.
    pub captured: Vec<u8>,
}

/// Final result after game over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GameResult {
    pub winner: u8,
    pub black_count: u8,
    pub white_count: u8,
}
