//! Core types for chess.
//!
//! This crate provides the leaf types shared by every board representation:
//! - [`Color`], [`PieceKind`] and [`Piece`] for piece identity
//! - [`Square`], [`File`], and [`Rank`] for board coordinates
//! - [`Move`] and its long-algebraic text codec
//! - [`CastlingRights`]
//! - [`Setup`], the result of loading a FEN string
//!
//! An empty square is `None` wherever an `Option<Piece>` appears, which gives
//! the thirteen square states (empty plus twelve colored pieces).

mod castling;
mod color;
mod fen;
mod mov;
mod piece;
mod square;

pub use castling::CastlingRights;
pub use color::Color;
pub use fen::{FenError, Setup};
pub use mov::{Move, MoveParseError};
pub use piece::{color_of, Piece, PieceKind};
pub use square::{File, Rank, Square};
