//! The board capability shared by every representation.

use crate::{ArrayBoard, MaskBoard, MoveList};
use chess_core::{CastlingRights, Color, FenError, Move, Piece, PieceKind, Setup, Square};
use std::fmt;

/// Which representation backs a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BoardKind {
    /// Flat array of 64 optional pieces.
    #[default]
    Array,
    /// One occupancy mask per piece identity plus one per color.
    Bitboard,
}

impl BoardKind {
    pub const ALL: [BoardKind; 2] = [BoardKind::Array, BoardKind::Bitboard];

    /// Configuration name of this representation.
    pub const fn as_str(self) -> &'static str {
        match self {
            BoardKind::Array => "array",
            BoardKind::Bitboard => "bitboard",
        }
    }

    /// Looks up a representation by its configuration name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == name)
    }
}

impl fmt::Display for BoardKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Terminal classification of a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    Ongoing,
    /// The side to move has no legal move and is in check.
    Checkmate,
    /// The side to move has no legal move and is not in check.
    Stalemate,
}

/// A chess position that can enumerate and apply legal moves.
///
/// Both representations implement this trait and must agree on every
/// observable result. Callers hold a `Box<dyn Board>` chosen once at
/// construction by [`new_board`].
pub trait Board: fmt::Debug {
    fn kind(&self) -> BoardKind;

    fn side_to_move(&self) -> Color;

    fn piece_at(&self, sq: Square) -> Option<Piece>;

    fn castling_rights(&self) -> CastlingRights;

    /// Cached king location, maintained on every applied move.
    fn king_square(&self, color: Color) -> Square;

    /// True if any piece of `by` attacks `sq`, regardless of whose turn it is.
    fn is_attacked(&self, sq: Square, by: Color) -> bool;

    /// Moves obeying piece movement and occupancy, ignoring self-check.
    fn pseudo_legal_moves(&self) -> MoveList;

    /// Pseudo-legal moves that do not leave the mover's king attacked.
    fn legal_moves(&self) -> MoveList;

    /// Applies a move in place and flips the side to move.
    ///
    /// The move is trusted to come from [`legal_moves`](Self::legal_moves).
    fn apply_move(&mut self, m: Move);

    fn clone_box(&self) -> Box<dyn Board>;

    fn in_check(&self) -> bool {
        let us = self.side_to_move();
        self.is_attacked(self.king_square(us), us.opposite())
    }

    fn is_checkmate(&self) -> bool {
        self.legal_moves().is_empty() && self.in_check()
    }

    fn is_stalemate(&self) -> bool {
        self.legal_moves().is_empty() && !self.in_check()
    }

    fn status(&self) -> GameStatus {
        if !self.legal_moves().is_empty() {
            GameStatus::Ongoing
        } else if self.in_check() {
            GameStatus::Checkmate
        } else {
            GameStatus::Stalemate
        }
    }

    /// Snapshot of the position as a loader [`Setup`].
    fn to_setup(&self) -> Setup {
        let mut board = [None; 64];
        for sq in Square::all() {
            board[sq.index() as usize] = self.piece_at(sq);
        }
        Setup {
            board,
            side_to_move: self.side_to_move(),
            castling: self.castling_rights(),
            king_squares: [
                self.king_square(Color::White),
                self.king_square(Color::Black),
            ],
        }
    }

    fn to_fen(&self) -> String {
        self.to_setup().to_fen()
    }
}

impl Clone for Box<dyn Board> {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}

/// Creates a board of the given representation, from `fen` or the start
/// position when `fen` is `None`.
pub fn new_board(kind: BoardKind, fen: Option<&str>) -> Result<Box<dyn Board>, FenError> {
    match fen {
        Some(fen) => Ok(board_from_setup(kind, &Setup::parse(fen)?)),
        None => Ok(start_board(kind)),
    }
}

/// Creates a board of the given representation at the start position.
pub fn start_board(kind: BoardKind) -> Box<dyn Board> {
    board_from_setup(kind, &Setup::startpos())
}

fn board_from_setup(kind: BoardKind, setup: &Setup) -> Box<dyn Board> {
    tracing::debug!(representation = %kind, fen = %setup.to_fen(), "creating board");
    match kind {
        BoardKind::Array => Box::new(ArrayBoard::from_setup(setup)),
        BoardKind::Bitboard => Box::new(MaskBoard::from_setup(setup)),
    }
}

/// Filters pseudo-legal moves by applying each one to a copy of the board
/// and checking the mover's king in the result.
pub fn legal_moves_by_probing<B: Board + Clone>(board: &B) -> MoveList {
    let us = board.side_to_move();
    let mut moves = board.pseudo_legal_moves();
    moves.retain(|&m| {
        let mut probe = board.clone();
        probe.apply_move(m);
        !probe.is_attacked(probe.king_square(us), us.opposite())
    });
    moves
}

/// Pushes a pawn move, expanding arrivals on the last rank into the four
/// promotions in queen, rook, bishop, knight order.
pub(crate) fn push_pawn_move(moves: &mut MoveList, from: Square, to: Square, color: Color) {
    if to.rank().index() == color.promotion_rank() {
        push_promotions(moves, from, to, color);
    } else {
        moves.push(Move::new(from, to));
    }
}

/// Pushes the four promotions of one pawn move, queen first.
pub(crate) fn push_promotions(moves: &mut MoveList, from: Square, to: Square, color: Color) {
    for kind in PieceKind::PROMOTIONS {
        moves.push(Move::promoting(from, to, Piece::new(kind, color)));
    }
}

/// Pushes the castle moves available to the side to move.
///
/// A castle needs the right, an empty path between king and rook, and no
/// attack on the king's square, the square it crosses or its destination.
pub(crate) fn push_castles<B: Board + ?Sized>(board: &B, moves: &mut MoveList) {
    let us = board.side_to_move();
    let them = us.opposite();
    let rights = board.castling_rights();
    let (home, kingside, queenside) = match us {
        Color::White => (
            Square::E1,
            [Square::F1, Square::G1],
            [Square::D1, Square::C1, Square::B1],
        ),
        Color::Black => (
            Square::E8,
            [Square::F8, Square::G8],
            [Square::D8, Square::C8, Square::B8],
        ),
    };
    if board.king_square(us) != home || board.is_attacked(home, them) {
        return;
    }

    let empty = |path: &[Square]| path.iter().all(|&sq| board.piece_at(sq).is_none());
    let safe = |path: &[Square]| path.iter().all(|&sq| !board.is_attacked(sq, them));

    if rights.can_castle_kingside(us) && empty(&kingside) && safe(&kingside) {
        moves.push(Move::new(home, kingside[1]));
    }
    if rights.can_castle_queenside(us) && empty(&queenside) && safe(&queenside[..2]) {
        moves.push(Move::new(home, queenside[1]));
    }
}

/// Rook origin and destination when `piece` making `m` is a castling king.
pub(crate) fn castle_rook_squares(piece: Piece, m: Move) -> Option<(Square, Square)> {
    if piece.kind() != PieceKind::King || m.from().file_distance(m.to()) != 2 {
        return None;
    }
    if m.to().index() > m.from().index() {
        Some((m.to().offset(1)?, m.to().offset(-1)?))
    } else {
        Some((m.to().offset(-2)?, m.to().offset(1)?))
    }
}

/// Castling rights after `piece` makes `m`.
///
/// A king move drops both rights of its color. A move that starts or ends
/// on a rook home square drops that corner's right, which also covers a
/// rook captured before it ever moved.
pub(crate) fn rights_after(rights: CastlingRights, piece: Piece, m: Move) -> CastlingRights {
    let mut rights = rights;
    if piece.kind() == PieceKind::King {
        rights.remove_color(piece.color());
    }
    rights.revoke_for_square(m.from());
    rights.revoke_for_square(m.to());
    rights
}
