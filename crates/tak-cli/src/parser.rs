//! Text commands typed at the prompt.
//!
//! Grammar (separators are spaces or commas):
//!
//! ```text
//! p <r|w|c> <row> <col>
//! m <row> <col> <u|d|l|r> [drop...]
//! ```
//!
//! A move without drops carries the top pawn one cell, i.e. `[1]`.

use nom::{
    branch::alt,
    character::complete::{char, digit1, one_of},
    combinator::{all_consuming, map, map_res},
    multi::many0,
    sequence::{preceded, tuple},
    IResult,
};
use tak_core::{Action, Direction, PieceKind, Position};
use thiserror::Error;

/// Something the player typed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Play(Action),
    Inventory,
    Board,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("no command entered")]
    Empty,

    #[error("could not parse {0:?} as a 'place' or a 'move'")]
    Unrecognized(String),
}

pub const USAGE: &str = "Place piece 'p [r|w|c] x y' or move 'm x y u|d|l|r [num_to_drop...]'";

/// Parse one line of input
pub fn parse_command(input: &str) -> Result<Command, ParseError> {
    let input = input.trim();
    match input {
        "" => return Err(ParseError::Empty),
        "inventory" | "i" => return Ok(Command::Inventory),
        "board" | "b" => return Ok(Command::Board),
        "help" | "h" | "?" => return Ok(Command::Help),
        "quit" | "q" | "exit" => return Ok(Command::Quit),
        _ => {}
    }

    all_consuming(alt((place, movement)))(input)
        .map(|(_, action)| Command::Play(action))
        .map_err(|_| ParseError::Unrecognized(input.to_string()))
}

fn separators(i: &str) -> IResult<&str, Vec<char>> {
    many0(one_of(" ,"))(i)
}

fn coordinate(i: &str) -> IResult<&str, i32> {
    preceded(separators, map_res(digit1, str::parse))(i)
}

fn piece_kind(i: &str) -> IResult<&str, PieceKind> {
    preceded(
        separators,
        map(one_of("rwc"), |c| match c {
            'r' => PieceKind::Road,
            'w' => PieceKind::Wall,
            _ => PieceKind::Capstone,
        }),
    )(i)
}

fn direction(i: &str) -> IResult<&str, Direction> {
    preceded(
        separators,
        map(one_of("udlr"), |c| match c {
            'u' => Direction::Up,
            'd' => Direction::Down,
            'l' => Direction::Left,
            _ => Direction::Right,
        }),
    )(i)
}

fn drops(i: &str) -> IResult<&str, Vec<u32>> {
    let (i, list) = many0(preceded(separators, map_res(digit1, str::parse)))(i)?;
    let (i, _) = separators(i)?;
    Ok((i, if list.is_empty() { vec![1] } else { list }))
}

fn place(i: &str) -> IResult<&str, Action> {
    map(
        tuple((char('p'), piece_kind, coordinate, coordinate, separators)),
        |(_, kind, row, col, _)| Action::place(Position::new(row, col), kind),
    )(i)
}

fn movement(i: &str) -> IResult<&str, Action> {
    map(
        tuple((char('m'), coordinate, coordinate, direction, drops)),
        |(_, row, col, dir, drop_list)| Action::move_stack(Position::new(row, col), dir, drop_list),
    )(i)
}
