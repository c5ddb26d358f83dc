//! Chess rules over two interchangeable board representations.
//!
//! This crate provides:
//! - [`Board`] - the capability every representation implements: legal move
//!   generation, move application and checkmate/stalemate classification
//! - [`ArrayBoard`] - a flat array of 64 optional pieces
//! - [`MaskBoard`] - one [`Bitboard`] per piece identity plus one per color
//! - [`new_board`] / [`start_board`] - pick a representation by [`BoardKind`]
//!   at construction
//! - [`perft`] and [`perft_divide`] for validating move generation
//!
//! Legality is decided by probing: each pseudo-legal move is applied to a
//! copy of the board and kept only if the mover's king is not attacked.
//!
//! # Example
//!
//! ```
//! use chess_engine::{new_board, Board, BoardKind, GameStatus};
//! use chess_core::Move;
//!
//! let mut board = new_board(BoardKind::Bitboard, None).unwrap();
//! assert_eq!(board.legal_moves().len(), 20);
//!
//! for text in ["f2f3", "e7e5", "g2g4", "d8h4"] {
//!     board.apply_move(Move::parse(text).unwrap());
//! }
//! assert_eq!(board.status(), GameStatus::Checkmate);
//! ```

mod array;
pub mod attacks;
mod bitboard;
mod board;
mod mask;
mod movelist;
mod perft;

pub use array::ArrayBoard;
pub use bitboard::{Bitboard, Squares};
pub use board::{
    legal_moves_by_probing, new_board, start_board, Board, BoardKind, GameStatus,
};
pub use mask::MaskBoard;
pub use movelist::MoveList;
pub use perft::{perft, perft_divide};
