//! Flat-array board representation.
//!
//! Every square holds an optional piece. Moves are generated by adding
//! index offsets and rejecting any step whose file distance shows it has
//! wrapped around the board edge.

use crate::board::{castle_rook_squares, push_castles, push_pawn_move, rights_after};
use crate::{legal_moves_by_probing, Board, BoardKind, MoveList};
use chess_core::{
    color_of, CastlingRights, Color, FenError, Move, Piece, PieceKind, Setup, Square,
};

const KNIGHT_OFFSETS: [i8; 8] = [17, 15, 10, 6, -6, -10, -15, -17];
const KING_OFFSETS: [i8; 8] = [9, 8, 7, 1, -1, -7, -8, -9];
const ROOK_STEPS: [i8; 4] = [8, -8, 1, -1];
const BISHOP_STEPS: [i8; 4] = [9, 7, -7, -9];

/// Steps `delta` from `from`, rejecting results that leave the board or
/// land more than `max_files` files away.
#[inline]
fn step(from: Square, delta: i8, max_files: u8) -> Option<Square> {
    from.offset(delta)
        .filter(|&to| from.file_distance(to) <= max_files)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArrayBoard {
    squares: [Option<Piece>; 64],
    side_to_move: Color,
    castling: CastlingRights,
    kings: [Square; 2],
}

impl ArrayBoard {
    pub fn from_setup(setup: &Setup) -> Self {
        ArrayBoard {
            squares: setup.board,
            side_to_move: setup.side_to_move,
            castling: setup.castling,
            kings: setup.king_squares,
        }
    }

    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        Setup::parse(fen).map(|setup| Self::from_setup(&setup))
    }

    pub fn startpos() -> Self {
        Self::from_setup(&Setup::startpos())
    }

    #[inline]
    fn at(&self, sq: Square) -> Option<Piece> {
        self.squares[sq.index() as usize]
    }

    #[inline]
    fn set(&mut self, sq: Square, occupant: Option<Piece>) {
        self.squares[sq.index() as usize] = occupant;
    }

    /// Walks `steps` from `from` one square at a time. Calls `visit` on each
    /// square reached, stopping each ray after the first occupied square.
    fn walk_rays(&self, from: Square, steps: &[i8], mut visit: impl FnMut(Square, Option<Piece>)) {
        for &delta in steps {
            let mut current = from;
            while let Some(next) = step(current, delta, 1) {
                let occupant = self.at(next);
                visit(next, occupant);
                if occupant.is_some() {
                    break;
                }
                current = next;
            }
        }
    }

    /// True if the first piece met along any of `steps` is one of `attackers`.
    fn ray_hits(&self, sq: Square, steps: &[i8], attackers: [Piece; 2]) -> bool {
        let mut hit = false;
        self.walk_rays(sq, steps, |_, occupant| {
            hit |= occupant.is_some_and(|piece| attackers.contains(&piece));
        });
        hit
    }

    fn push_leaper_moves(&self, moves: &mut MoveList, from: Square, offsets: &[i8], max_files: u8) {
        let us = self.side_to_move;
        for &delta in offsets {
            if let Some(to) = step(from, delta, max_files) {
                if color_of(self.at(to)) != Some(us) {
                    moves.push(Move::new(from, to));
                }
            }
        }
    }

    fn push_slider_moves(&self, moves: &mut MoveList, from: Square, steps: &[i8]) {
        let us = self.side_to_move;
        self.walk_rays(from, steps, |to, occupant| {
            if color_of(occupant) != Some(us) {
                moves.push(Move::new(from, to));
            }
        });
    }

    fn push_pawn_moves(&self, moves: &mut MoveList, from: Square) {
        let us = self.side_to_move;
        let push = us.pawn_push();

        if let Some(one) = from.offset(push).filter(|&to| self.at(to).is_none()) {
            push_pawn_move(moves, from, one, us);
            if from.rank().index() == us.pawn_rank() {
                if let Some(two) = one.offset(push).filter(|&to| self.at(to).is_none()) {
                    moves.push(Move::new(from, two));
                }
            }
        }

        for side in [-1, 1] {
            if let Some(to) = step(from, push + side, 1) {
                if color_of(self.at(to)) == Some(us.opposite()) {
                    push_pawn_move(moves, from, to, us);
                }
            }
        }
    }
}

impl Default for ArrayBoard {
    fn default() -> Self {
        Self::startpos()
    }
}

impl Board for ArrayBoard {
    fn kind(&self) -> BoardKind {
        BoardKind::Array
    }

    fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.at(sq)
    }

    fn castling_rights(&self) -> CastlingRights {
        self.castling
    }

    fn king_square(&self, color: Color) -> Square {
        self.kings[color.index()]
    }

    fn is_attacked(&self, sq: Square, by: Color) -> bool {
        let is = |target: Option<Square>, kind: PieceKind| {
            target.is_some_and(|t| self.at(t) == Some(Piece::new(kind, by)))
        };

        // a pawn of `by` attacks diagonally forward, so look one rank behind
        let behind = -by.pawn_push();
        if [-1, 1]
            .into_iter()
            .any(|side| is(step(sq, behind + side, 1), PieceKind::Pawn))
        {
            return true;
        }
        if KNIGHT_OFFSETS
            .iter()
            .any(|&delta| is(step(sq, delta, 2), PieceKind::Knight))
        {
            return true;
        }
        if KING_OFFSETS
            .iter()
            .any(|&delta| is(step(sq, delta, 1), PieceKind::King))
        {
            return true;
        }

        let queen = Piece::new(PieceKind::Queen, by);
        self.ray_hits(sq, &ROOK_STEPS, [Piece::new(PieceKind::Rook, by), queen])
            || self.ray_hits(sq, &BISHOP_STEPS, [Piece::new(PieceKind::Bishop, by), queen])
    }

    fn pseudo_legal_moves(&self) -> MoveList {
        let mut moves = MoveList::new();
        let us = self.side_to_move;

        for from in Square::all() {
            let Some(piece) = self.at(from).filter(|p| p.color() == us) else {
                continue;
            };
            match piece.kind() {
                PieceKind::Pawn => self.push_pawn_moves(&mut moves, from),
                PieceKind::Knight => self.push_leaper_moves(&mut moves, from, &KNIGHT_OFFSETS, 2),
                PieceKind::Bishop => self.push_slider_moves(&mut moves, from, &BISHOP_STEPS),
                PieceKind::Rook => self.push_slider_moves(&mut moves, from, &ROOK_STEPS),
                PieceKind::Queen => {
                    self.push_slider_moves(&mut moves, from, &ROOK_STEPS);
                    self.push_slider_moves(&mut moves, from, &BISHOP_STEPS);
                }
                PieceKind::King => {
                    self.push_leaper_moves(&mut moves, from, &KING_OFFSETS, 1);
                    push_castles(self, &mut moves);
                }
            }
        }
        moves
    }

    fn legal_moves(&self) -> MoveList {
        legal_moves_by_probing(self)
    }

    fn apply_move(&mut self, m: Move) {
        let Some(piece) = self.at(m.from()) else {
            return;
        };

        if let Some((rook_from, rook_to)) = castle_rook_squares(piece, m) {
            let rook = self.at(rook_from);
            self.set(rook_from, None);
            self.set(rook_to, rook);
        }

        // overwriting the destination removes any captured piece
        self.set(m.to(), Some(m.promotion().unwrap_or(piece)));
        self.set(m.from(), None);

        if piece.kind() == PieceKind::King {
            self.kings[piece.color().index()] = m.to();
        }
        self.castling = rights_after(self.castling, piece, m);
        self.side_to_move = self.side_to_move.opposite();
    }

    fn clone_box(&self) -> Box<dyn Board> {
        Box::new(self.clone())
    }
}
