//! FEN (Forsyth-Edwards Notation) loading.

use crate::{CastlingRights, Color, Piece, PieceKind, Square};
use thiserror::Error;

/// Errors that can occur when loading FEN strings.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FenError {
    #[error("invalid FEN: expected 2 to 6 fields, got {0}")]
    InvalidFieldCount(usize),

    #[error("invalid piece placement: {0}")]
    InvalidPiecePlacement(String),

    #[error("invalid active color: expected 'w' or 'b', got '{0}'")]
    InvalidActiveColor(String),

    #[error("invalid castling rights: '{0}'")]
    InvalidCastlingRights(String),

    #[error("expected exactly one {color} king, found {count}")]
    KingCount { color: Color, count: usize },

    #[error("{0} is in check but not to move")]
    OpponentInCheck(Color),
}

/// A loaded position, ready to seed any board representation.
///
/// Only placement, side to move and castling rights are interpreted.
/// En-passant and move-counter fields may be present but are ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Setup {
    /// Occupant of each square, indexed a1 = 0 .. h8 = 63.
    pub board: [Option<Piece>; 64],
    pub side_to_move: Color,
    pub castling: CastlingRights,
    /// King square per color, indexed by [`Color::index`].
    pub king_squares: [Square; 2],
}

impl Setup {
    /// The standard starting position FEN.
    pub const STARTPOS: &'static str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

    /// Loads the standard starting position.
    pub fn startpos() -> Self {
        Self::parse(Self::STARTPOS).expect("STARTPOS is valid")
    }

    /// Parses a FEN string.
    ///
    /// The castling field is optional. Castling rights whose king and rook
    /// are not both on their home squares are dropped.
    pub fn parse(fen: &str) -> Result<Self, FenError> {
        let fields: Vec<&str> = fen.split_whitespace().collect();
        if !(2..=6).contains(&fields.len()) {
            return Err(FenError::InvalidFieldCount(fields.len()));
        }

        let board = Self::parse_placement(fields[0])?;
        let side_to_move = Color::from_fen_field(fields[1])
            .ok_or_else(|| FenError::InvalidActiveColor(fields[1].to_string()))?;

        let king_squares = [
            Self::find_king(&board, Color::White)?,
            Self::find_king(&board, Color::Black)?,
        ];
        let waiting = side_to_move.opposite();
        if Self::is_attacked(&board, king_squares[waiting.index()], side_to_move) {
            return Err(FenError::OpponentInCheck(waiting));
        }

        let declared = match fields.get(2) {
            Some(field) => CastlingRights::from_fen_field(field)
                .ok_or_else(|| FenError::InvalidCastlingRights(field.to_string()))?,
            None => CastlingRights::NONE,
        };

        Ok(Setup {
            castling: Self::consistent_castling(&board, declared),
            board,
            side_to_move,
            king_squares,
        })
    }

    /// Walks ranks 8 to 1 and files a to h.
    fn parse_placement(placement: &str) -> Result<[Option<Piece>; 64], FenError> {
        let ranks: Vec<&str> = placement.split('/').collect();
        if ranks.len() != 8 {
            return Err(FenError::InvalidPiecePlacement(format!(
                "expected 8 ranks, got {}",
                ranks.len()
            )));
        }

        let mut board = [None; 64];
        for (i, rank_text) in ranks.iter().enumerate() {
            let rank = 7 - i;
            let mut file = 0usize;
            for c in rank_text.chars() {
                if let Some(run) = c.to_digit(10).filter(|d| (1..=8).contains(d)) {
                    file += run as usize;
                } else if let Some(piece) = Piece::from_fen_char(c) {
                    if file < 8 {
                        board[rank * 8 + file] = Some(piece);
                    }
                    file += 1;
                } else {
                    return Err(FenError::InvalidPiecePlacement(format!(
                        "invalid character '{}' in rank {}",
                        c,
                        rank + 1
                    )));
                }
            }
            if file != 8 {
                return Err(FenError::InvalidPiecePlacement(format!(
                    "rank {} has {} squares, expected 8",
                    rank + 1,
                    file
                )));
            }
        }
        Ok(board)
    }

    fn find_king(board: &[Option<Piece>; 64], color: Color) -> Result<Square, FenError> {
        let king = Some(Piece::new(PieceKind::King, color));
        let mut found = Square::all().filter(|sq| board[sq.index() as usize] == king);
        match (found.next(), found.count()) {
            (Some(sq), 0) => Ok(sq),
            (first, rest) => Err(FenError::KingCount {
                color,
                count: first.map_or(0, |_| 1 + rest),
            }),
        }
    }

    /// Attack test on a bare placement, walking (file, rank) steps.
    fn is_attacked(board: &[Option<Piece>; 64], target: Square, by: Color) -> bool {
        const KNIGHT_STEPS: [(i8, i8); 8] =
            [(1, 2), (2, 1), (2, -1), (1, -2), (-1, -2), (-2, -1), (-2, 1), (-1, 2)];
        const ROOK_STEPS: [(i8, i8); 4] = [(0, 1), (1, 0), (0, -1), (-1, 0)];
        const BISHOP_STEPS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, -1), (-1, 1)];

        let (file, rank) = (target.file().index() as i8, target.rank().index() as i8);
        let at = |df: i8, dr: i8| {
            let (f, r) = (file + df, rank + dr);
            ((0..8).contains(&f) && (0..8).contains(&r)).then(|| board[(r * 8 + f) as usize])
        };
        let holds = |df: i8, dr: i8, kind: PieceKind| at(df, dr) == Some(Some(Piece::new(kind, by)));
        let slides = |steps: &[(i8, i8)], kind: PieceKind| {
            steps.iter().any(|&(df, dr)| {
                let mut n = 1;
                while let Some(occupant) = at(df * n, dr * n) {
                    if let Some(piece) = occupant {
                        return piece.color() == by
                            && (piece.kind() == kind || piece.kind() == PieceKind::Queen);
                    }
                    n += 1;
                }
                false
            })
        };

        // a pawn of `by` sits one rank behind the square it attacks
        let behind = -by.pawn_push() / 8;
        holds(-1, behind, PieceKind::Pawn)
            || holds(1, behind, PieceKind::Pawn)
            || KNIGHT_STEPS.iter().any(|&(df, dr)| holds(df, dr, PieceKind::Knight))
            || ROOK_STEPS
                .iter()
                .chain(&BISHOP_STEPS)
                .any(|&(df, dr)| holds(df, dr, PieceKind::King))
            || slides(&ROOK_STEPS[..], PieceKind::Rook)
            || slides(&BISHOP_STEPS[..], PieceKind::Bishop)
    }

    fn consistent_castling(board: &[Option<Piece>; 64], declared: CastlingRights) -> CastlingRights {
        let mut rights = declared;
        for color in Color::ALL {
            let home = if color == Color::White { Square::E1 } else { Square::E8 };
            let (kingside_rook, queenside_rook) = match color {
                Color::White => (Square::H1, Square::A1),
                Color::Black => (Square::H8, Square::A8),
            };
            let holds = |sq: Square, kind: PieceKind| {
                board[sq.index() as usize] == Some(Piece::new(kind, color))
            };
            if !holds(home, PieceKind::King) {
                rights.remove_color(color);
            }
            if !holds(kingside_rook, PieceKind::Rook) {
                rights.remove_kingside(color);
            }
            if !holds(queenside_rook, PieceKind::Rook) {
                rights.remove_queenside(color);
            }
        }
        rights
    }

    /// Returns the occupant of a square.
    #[inline]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.board[sq.index() as usize]
    }

    #[inline]
    pub fn king_square(&self, color: Color) -> Square {
        self.king_squares[color.index()]
    }

    fn placement_field(&self) -> String {
        let mut field = String::new();
        for (i, rank) in self.board.chunks(8).rev().enumerate() {
            if i > 0 {
                field.push('/');
            }
            let mut empty_run = 0;
            for occupant in rank {
                match occupant {
                    Some(piece) => {
                        if empty_run > 0 {
                            field.push_str(&empty_run.to_string());
                            empty_run = 0;
                        }
                        field.push(piece.to_fen_char());
                    }
                    None => empty_run += 1,
                }
            }
            if empty_run > 0 {
                field.push_str(&empty_run.to_string());
            }
        }
        field
    }

    /// Writes the position back as FEN, with no en-passant square and
    /// counters "0 1".
    pub fn to_fen(&self) -> String {
        format!(
            "{} {} {} - 0 1",
            self.placement_field(),
            self.side_to_move.fen_char(),
            self.castling.to_fen_field()
        )
    }
}

impl Default for Setup {
    fn default() -> Self {
        Self::startpos()
    }
}
