//! Move representation and long-algebraic move text.

use crate::{Color, Piece, PieceKind, Rank, Square};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors produced when decoding move text.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MoveParseError {
    #[error("invalid move length: expected 4 or 5 characters, got {0}")]
    InvalidLength(usize),

    #[error("invalid square: '{0}'")]
    InvalidSquare(String),

    #[error("invalid promotion piece: '{0}'")]
    InvalidPromotion(char),
}

/// A chess move: origin, destination, and the piece a pawn promotes to.
///
/// Castling is a two-file king move; the rook follows when the move is
/// applied. `promotion` always carries the mover's color when present.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    from: Square,
    to: Square,
    promotion: Option<Piece>,
}

impl Move {
    /// Creates a non-promoting move.
    #[inline]
    pub const fn new(from: Square, to: Square) -> Self {
        Move {
            from,
            to,
            promotion: None,
        }
    }

    /// Creates a promotion to `piece`.
    #[inline]
    pub const fn promoting(from: Square, to: Square, piece: Piece) -> Self {
        Move {
            from,
            to,
            promotion: Some(piece),
        }
    }

    #[inline]
    pub const fn from(self) -> Square {
        self.from
    }

    #[inline]
    pub const fn to(self) -> Square {
        self.to
    }

    #[inline]
    pub const fn promotion(self) -> Option<Piece> {
        self.promotion
    }

    /// Returns the text form (e.g., "e2e4", "e7e8q").
    pub fn to_uci(self) -> String {
        match self.promotion {
            Some(piece) => format!("{}{}{}", self.from, self.to, piece.kind().to_char()),
            None => format!("{}{}", self.from, self.to),
        }
    }

    /// Decodes move text.
    ///
    /// A promotion is white when the destination is on rank 8 and black
    /// otherwise. Legality is not checked.
    pub fn parse(s: &str) -> Result<Self, MoveParseError> {
        let chars: Vec<char> = s.chars().collect();
        if !(4..=5).contains(&chars.len()) {
            return Err(MoveParseError::InvalidLength(chars.len()));
        }
        let square = |pair: &[char]| {
            let text: String = pair.iter().collect();
            Square::from_algebraic(&text).ok_or(MoveParseError::InvalidSquare(text))
        };
        let from = square(&chars[0..2])?;
        let to = square(&chars[2..4])?;

        let Some(&letter) = chars.get(4) else {
            return Ok(Move::new(from, to));
        };
        let kind = match PieceKind::from_char(letter) {
            Some(kind) if PieceKind::PROMOTIONS.contains(&kind) => kind,
            _ => return Err(MoveParseError::InvalidPromotion(letter)),
        };
        let color = if to.rank() == Rank::R8 {
            Color::White
        } else {
            Color::Black
        };
        Ok(Move::promoting(from, to, Piece::new(kind, color)))
    }
}

impl FromStr for Move {
    type Err = MoveParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Move::parse(s)
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({})", self.to_uci())
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_uci())
    }
}
