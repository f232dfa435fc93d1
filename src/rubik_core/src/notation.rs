use itertools::Itertools;
use pest::{Parser, iterators::Pair};
use pest_derive::Parser;
use thiserror::Error;

use crate::moves::{Move, RotationKind, Side};

#[derive(Parser)]
#[grammar = "./notation.pest"]
struct NotationParser;

#[derive(Error, Debug)]
pub enum NotationError {
    #[error("Invalid command sequence:\n{0}")]
    InvalidSequence(#[from] Box<pest::error::Error<Rule>>),
    #[error("Can not resolve a move from text: [{0}]")]
    UnrecognizedMove(String),
}

/// Parses a whole command sequence such as `"F R U R' U' F'"`. Tokens are
/// separated by exactly one space or tab. Either every token is valid and the
/// full list is returned, or nothing is.
///
/// # Errors
///
/// If any token or separator does not match the notation grammar.
pub fn parse_sequence(text: &str) -> Result<Vec<Move>, NotationError> {
    let sequence = NotationParser::parse(Rule::sequence, text)
        .map_err(Box::new)?
        .next()
        .expect("a successful parse yields the sequence rule");

    let mut moves = Vec::new();

    for pair in sequence.into_inner() {
        match pair.as_rule() {
            Rule::turn => moves.push(parse_turn(pair)),
            Rule::EOI => break,
            rule => unreachable!("{rule:?}, {}", pair.as_str()),
        }
    }

    Ok(moves)
}

/// Parses exactly one move token.
///
/// # Errors
///
/// If the text is not one of the 18 valid tokens.
pub fn parse_move(text: &str) -> Result<Move, NotationError> {
    let Ok(mut pairs) = NotationParser::parse(Rule::single, text) else {
        return Err(NotationError::UnrecognizedMove(text.to_owned()));
    };

    pairs
        .next()
        .and_then(|single| single.into_inner().find(|pair| pair.as_rule() == Rule::turn))
        .map(parse_turn)
        .ok_or_else(|| NotationError::UnrecognizedMove(text.to_owned()))
}

fn parse_turn(pair: Pair<'_, Rule>) -> Move {
    let mut parts = pair.into_inner();

    let side = parts
        .next()
        .and_then(|side| side.as_str().chars().next())
        .and_then(Side::from_letter)
        .expect("the grammar only admits side letters");

    let kind = match parts.next().map(|modifier| modifier.as_str()) {
        None => RotationKind::Clockwise,
        Some("'") => RotationKind::CounterClockwise,
        Some("2") => RotationKind::HalfTurn,
        Some(other) => unreachable!("the grammar admits no modifier {other:?}"),
    };

    Move::new(side, kind)
}

/// Formats moves the way `parse_sequence` reads them.
#[must_use]
pub fn format_sequence(moves: &[Move]) -> String {
    moves.iter().join(" ")
}
