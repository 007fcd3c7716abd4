use std::io::{self, Write};

use checkers::board::BOARD_SIZE;
use checkers::game::GameInstance;
use checkers::types::{Cell, Color, Move, Position};

fn main() {
    let mut game = GameInstance::new();

    loop {
        print_board(&game);

        if game.is_over {
            let winner = if game.to_game_result().winner == Color::Black.code() {
                Color::Black
            } else {
                Color::White
            };
            println!("{} wins", color_name(winner));
            return;
        }

        let Some(input) = prompt(&format!(
            "{} to move, select a square (a0-j9): ",
            color_name(game.turn)
        )) else {
            return;
        };
        let Some((x, y)) = parse_square(&input) else {
            println!("enter a column letter a-j followed by a row digit 0-9");
            continue;
        };

        let moves = match game.legal_moves_at(x, y) {
            Ok(moves) => moves,
            Err(err) => {
                println!("{err}");
                continue;
            }
        };
        if moves.is_empty() {
            println!("no legal moves for that piece");
            continue;
        }

        for (index, mv) in moves.iter().enumerate() {
            println!("  {index}: {}", describe_move(mv));
        }
        let Some(input) = prompt("pick a move index (or c to cancel): ") else {
            return;
        };
        if input == "c" {
            continue;
        }
        let Ok(index) = input.parse::<usize>() else {
            println!("enter a move index or c");
            continue;
        };
        if let Err(err) = game.play_at(x, y, index) {
            println!("{err}");
        }
    }
}

/// Reads one trimmed, lowercased line; `None` on EOF or IO failure.
fn prompt(message: &str) -> Option<String> {
    print!("{message}");
    io::stdout().flush().ok()?;

    let mut input = String::new();
    if io::stdin().read_line(&mut input).ok()? == 0 {
        return None;
    }
    Some(input.trim().to_ascii_lowercase())
}

/// Parses square input such as `b6` into `(x, y)`.
fn parse_square(input: &str) -> Option<(u8, u8)> {
    let mut chars = input.chars();
    let column = chars.next()?;
    let row = chars.next()?;
    if chars.next().is_some() {
        return None;
    }
    if !column.is_ascii_lowercase() || column > 'j' || !row.is_ascii_digit() {
        return None;
    }
    Some((column as u8 - b'a', row as u8 - b'0'))
}

fn print_board(game: &GameInstance) {
    println!("   a b c d e f g h i j");
    for y in 0..BOARD_SIZE {
        print!(" {y} ");
        for x in 0..BOARD_SIZE {
            let glyph = game.board().get(x, y).map_or(' ', cell_glyph);
            print!("{glyph} ");
        }
        println!();
    }
}

fn color_name(color: Color) -> &'static str {
    match color {
        Color::Black => "black",
        Color::White => "white",
    }
}

fn cell_glyph(cell: Cell) -> char {
    match cell {
        Cell::Empty => '.',
        Cell::Man(Color::Black) => 'b',
        Cell::Man(Color::White) => 'w',
        Cell::King(Color::Black) => 'B',
        Cell::King(Color::White) => 'W',
    }
}

fn describe_move(mv: &Move) -> String {
    match mv {
        Move::Slide { to } => format!("slide to {}", square_name(to)),
        Move::Jump { captures, landings } => {
            let path: Vec<String> = landings.iter().map(square_name).collect();
            format!(
                "jump to {} capturing {}",
                path.join(" then "),
                captures.len()
            )
        }
    }
}

fn square_name(position: &Position) -> String {
    format!("{}{}", (b'a' + position.x) as char, position.y)
}
