//! Bitboard-backed board representation.
//!
//! Placement is kept twice: one mask per piece identity and one per color.
//! Every occupied square is set in exactly one piece mask and in the mask
//! of that piece's color.

use crate::attacks::{bishop_attacks, king_attacks, knight_attacks, pawn_attacks, rook_attacks};
use crate::board::{castle_rook_squares, push_castles, push_promotions, rights_after};
use crate::{legal_moves_by_probing, Bitboard, Board, BoardKind, MoveList};
use chess_core::{CastlingRights, Color, FenError, Move, Piece, PieceKind, Setup, Square};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaskBoard {
    pieces: [Bitboard; 12],
    colors: [Bitboard; 2],
    side_to_move: Color,
    castling: CastlingRights,
    kings: [Square; 2],
}

impl MaskBoard {
    pub fn from_setup(setup: &Setup) -> Self {
        let mut board = MaskBoard {
            pieces: [Bitboard::EMPTY; 12],
            colors: [Bitboard::EMPTY; 2],
            side_to_move: setup.side_to_move,
            castling: setup.castling,
            kings: setup.king_squares,
        };
        for sq in Square::all() {
            if let Some(piece) = setup.piece_at(sq) {
                board.put(piece, sq);
            }
        }
        board
    }

    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        Setup::parse(fen).map(|setup| Self::from_setup(&setup))
    }

    pub fn startpos() -> Self {
        Self::from_setup(&Setup::startpos())
    }

    /// Mask of one piece identity.
    #[inline]
    pub fn pieces(&self, piece: Piece) -> Bitboard {
        self.pieces[piece.index()]
    }

    /// Mask of every piece of one color.
    #[inline]
    pub fn color(&self, color: Color) -> Bitboard {
        self.colors[color.index()]
    }

    #[inline]
    pub fn occupied(&self) -> Bitboard {
        self.colors[0] | self.colors[1]
    }

    /// Checks that the piece masks are pairwise disjoint and that each
    /// color mask is exactly the union of that color's piece masks.
    pub fn is_consistent(&self) -> bool {
        let mut seen = Bitboard::EMPTY;
        let mut by_color = [Bitboard::EMPTY; 2];
        for piece in Piece::ALL {
            let mask = self.pieces(piece);
            if (seen & mask).any() {
                return false;
            }
            seen |= mask;
            by_color[piece.color().index()] |= mask;
        }
        by_color == self.colors
    }

    #[inline]
    fn put(&mut self, piece: Piece, sq: Square) {
        self.pieces[piece.index()].set(sq);
        self.colors[piece.color().index()].set(sq);
    }

    #[inline]
    fn remove(&mut self, piece: Piece, sq: Square) {
        self.pieces[piece.index()].clear(sq);
        self.colors[piece.color().index()].clear(sq);
    }

    #[inline]
    fn ours(&self, kind: PieceKind) -> Bitboard {
        self.pieces(Piece::new(kind, self.side_to_move))
    }

    fn push_targets(moves: &mut MoveList, from: Square, targets: Bitboard) {
        for to in targets {
            moves.push(Move::new(from, to));
        }
    }

    fn push_pawn_moves(&self, moves: &mut MoveList) {
        let us = self.side_to_move;
        let pawns = self.ours(PieceKind::Pawn);
        let empty = !self.occupied();
        let (forward, start_rank, last_rank): (fn(Bitboard) -> Bitboard, Bitboard, Bitboard) =
            match us {
                Color::White => (Bitboard::north, Bitboard::RANK_2, Bitboard::RANK_8),
                Color::Black => (Bitboard::south, Bitboard::RANK_7, Bitboard::RANK_1),
            };
        let back = -us.pawn_push();
        let push = |moves: &mut MoveList, from: Square, to: Square| {
            if last_rank.contains(to) {
                push_promotions(moves, from, to, us);
            } else {
                moves.push(Move::new(from, to));
            }
        };

        let single = forward(pawns) & empty;
        for to in single {
            if let Some(from) = to.offset(back) {
                push(moves, from, to);
            }
        }

        let double = forward(forward(pawns & start_rank) & empty) & empty;
        for to in double {
            if let Some(from) = to.offset(2 * back) {
                moves.push(Move::new(from, to));
            }
        }

        let enemies = self.color(us.opposite());
        for from in pawns {
            for to in pawn_attacks(from, us) & enemies {
                push(moves, from, to);
            }
        }
    }
}

impl Default for MaskBoard {
    fn default() -> Self {
        Self::startpos()
    }
}

impl Board for MaskBoard {
    fn kind(&self) -> BoardKind {
        BoardKind::Bitboard
    }

    fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    fn piece_at(&self, sq: Square) -> Option<Piece> {
        let color = Color::ALL
            .into_iter()
            .find(|&color| self.color(color).contains(sq))?;
        PieceKind::ALL
            .into_iter()
            .map(|kind| Piece::new(kind, color))
            .find(|&piece| self.pieces(piece).contains(sq))
    }

    fn castling_rights(&self) -> CastlingRights {
        self.castling
    }

    fn king_square(&self, color: Color) -> Square {
        self.kings[color.index()]
    }

    fn is_attacked(&self, sq: Square, by: Color) -> bool {
        let occupied = self.occupied();
        let of = |kind: PieceKind| self.pieces(Piece::new(kind, by));
        let queens = of(PieceKind::Queen);

        // a pawn of `by` reaches `sq` from where an opposing pawn on `sq` would capture
        (pawn_attacks(sq, by.opposite()) & of(PieceKind::Pawn)).any()
            || (knight_attacks(sq) & of(PieceKind::Knight)).any()
            || (king_attacks(sq) & of(PieceKind::King)).any()
            || (rook_attacks(sq, occupied) & (of(PieceKind::Rook) | queens)).any()
            || (bishop_attacks(sq, occupied) & (of(PieceKind::Bishop) | queens)).any()
    }

    fn pseudo_legal_moves(&self) -> MoveList {
        let mut moves = MoveList::new();
        let occupied = self.occupied();
        let not_own = !self.color(self.side_to_move);

        self.push_pawn_moves(&mut moves);
        for from in self.ours(PieceKind::Knight) {
            Self::push_targets(&mut moves, from, knight_attacks(from) & not_own);
        }
        for from in self.ours(PieceKind::Bishop) {
            Self::push_targets(&mut moves, from, bishop_attacks(from, occupied) & not_own);
        }
        for from in self.ours(PieceKind::Rook) {
            Self::push_targets(&mut moves, from, rook_attacks(from, occupied) & not_own);
        }
        for from in self.ours(PieceKind::Queen) {
            let targets = rook_attacks(from, occupied) | bishop_attacks(from, occupied);
            Self::push_targets(&mut moves, from, targets & not_own);
        }
        for from in self.ours(PieceKind::King) {
            Self::push_targets(&mut moves, from, king_attacks(from) & not_own);
            push_castles(self, &mut moves);
        }
        moves
    }

    fn legal_moves(&self) -> MoveList {
        legal_moves_by_probing(self)
    }

    fn apply_move(&mut self, m: Move) {
        let Some(piece) = self.piece_at(m.from()) else {
            return;
        };

        if let Some(victim) = self.piece_at(m.to()) {
            self.remove(victim, m.to());
        }
        if let Some((rook_from, rook_to)) = castle_rook_squares(piece, m) {
            if let Some(rook) = self.piece_at(rook_from) {
                self.remove(rook, rook_from);
                self.put(rook, rook_to);
            }
        }

        self.remove(piece, m.from());
        self.put(m.promotion().unwrap_or(piece), m.to());

        if piece.kind() == PieceKind::King {
            self.kings[piece.color().index()] = m.to();
        }
        self.castling = rights_after(self.castling, piece, m);
        self.side_to_move = self.side_to_move.opposite();
        debug_assert!(self.is_consistent());
    }

    fn clone_box(&self) -> Box<dyn Board> {
        Box::new(self.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(s: &str) -> Square {
        Square::from_algebraic(s).unwrap()
    }

    #[test]
    fn startpos_masks() {
        let board = MaskBoard::startpos();
        assert!(board.is_consistent());
        assert_eq!(board.occupied().count(), 32);
        assert_eq!(board.color(Color::White), Bitboard(0xFFFF));
        assert_eq!(board.pieces(Piece::WhitePawn), Bitboard::RANK_2);
        assert_eq!(board.pieces(Piece::BlackPawn), Bitboard::RANK_7);
        assert_eq!(board.piece_at(Square::E8), Some(Piece::BlackKing));
        assert_eq!(board.piece_at(sq("e4")), None);
        assert_eq!(board.legal_moves().len(), 20);
    }

    #[test]
    fn capture_clears_victim_masks() {
        let mut board =
            MaskBoard::from_fen("4k3/8/8/3p4/8/4N3/8/4K3 w - - 0 1").unwrap();
        board.apply_move(Move::parse("e3d5").unwrap());
        assert!(board.is_consistent());
        assert!(board.pieces(Piece::BlackPawn).is_empty());
        assert!(!board.color(Color::Black).contains(sq("d5")));
        assert_eq!(board.piece_at(sq("d5")), Some(Piece::WhiteKnight));
        assert_eq!(board.color(Color::Black).count(), 1);
    }

    #[test]
    fn inconsistent_masks_are_detected() {
        let mut board = MaskBoard::startpos();
        board.colors[Color::White.index()].clear(Square::A1);
        assert!(!board.is_consistent());

        let mut board = MaskBoard::startpos();
        board.pieces[Piece::BlackQueen.index()].set(Square::E8);
        assert!(!board.is_consistent());
    }

    #[test]
    fn castle_and_promotion_keep_masks_mirrored() {
        let mut board =
            MaskBoard::from_fen("r3k2r/1P6/8/8/8/8/8/R3K2R w KQkq - 0 1").unwrap();
        board.apply_move(Move::new(Square::E1, Square::C1));
        assert!(board.is_consistent());
        assert_eq!(board.piece_at(Square::D1), Some(Piece::WhiteRook));
        assert_eq!(board.king_square(Color::White), Square::C1);

        board.apply_move(Move::new(Square::E8, Square::G8));
        board.apply_move(Move::parse("b7a8q").unwrap());
        assert!(board.is_consistent());
        assert_eq!(board.piece_at(Square::A8), Some(Piece::WhiteQueen));
        assert!(board.pieces(Piece::WhitePawn).is_empty());
        assert_eq!(board.to_fen(), "Q4rk1/8/8/8/8/8/8/2KR3R b - - 0 1");
    }

    #[test]
    fn pawn_pushes_by_color() {
        let board = MaskBoard::from_fen("4k3/3p4/8/8/8/8/4P3/4K3 b - - 0 1").unwrap();
        let moves = board.pseudo_legal_moves();
        assert!(moves.contains(&Move::parse("d7d6").unwrap()));
        assert!(moves.contains(&Move::parse("d7d5").unwrap()));
        assert!(!moves.contains(&Move::parse("e2e4").unwrap()));
    }

    #[test]
    fn pawns_promote_only_on_the_last_rank() {
        let board = MaskBoard::from_fen("4k3/8/8/8/8/8/1p6/R3K3 b - - 0 1").unwrap();
        let from_b2: Vec<Move> = board
            .pseudo_legal_moves()
            .as_slice()
            .iter()
            .copied()
            .filter(|m| m.from() == sq("b2"))
            .collect();
        assert_eq!(from_b2.len(), 8);
        assert!(from_b2
            .iter()
            .all(|m| m.promotion().is_some_and(|p| p.color() == Color::Black)));

        // one rank short stays a plain push
        let board = MaskBoard::from_fen("4k3/8/1P6/8/8/8/8/4K3 w - - 0 1").unwrap();
        assert!(board.pseudo_legal_moves().contains(&Move::parse("b6b7").unwrap()));
    }
}
