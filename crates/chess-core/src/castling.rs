//! Castling rights.

use crate::{Color, Square};

/// The four castling rights, one bit each.
///
/// Rights are set when a position is loaded and only ever cleared afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CastlingRights(u8);

impl CastlingRights {
    pub const NONE: CastlingRights = CastlingRights(0);
    pub const WHITE_KINGSIDE: u8 = 0b0001;
    pub const WHITE_QUEENSIDE: u8 = 0b0010;
    pub const BLACK_KINGSIDE: u8 = 0b0100;
    pub const BLACK_QUEENSIDE: u8 = 0b1000;
    pub const ALL: CastlingRights = CastlingRights(0b1111);

    /// Parses the FEN castling field ("KQkq" subset or "-").
    pub fn from_fen_field(field: &str) -> Option<Self> {
        let mut flags = 0u8;
        for c in field.chars() {
            flags |= match c {
                'K' => Self::WHITE_KINGSIDE,
                'Q' => Self::WHITE_QUEENSIDE,
                'k' => Self::BLACK_KINGSIDE,
                'q' => Self::BLACK_QUEENSIDE,
                '-' if field.len() == 1 => 0,
                _ => return None,
            };
        }
        Some(CastlingRights(flags))
    }

    /// Writes the FEN castling field.
    pub fn to_fen_field(self) -> String {
        if self.0 == 0 {
            return "-".to_string();
        }
        [
            (Self::WHITE_KINGSIDE, 'K'),
            (Self::WHITE_QUEENSIDE, 'Q'),
            (Self::BLACK_KINGSIDE, 'k'),
            (Self::BLACK_QUEENSIDE, 'q'),
        ]
        .iter()
        .filter(|(flag, _)| self.0 & flag != 0)
        .map(|(_, c)| *c)
        .collect()
    }

    #[inline]
    const fn kingside_flag(color: Color) -> u8 {
        match color {
            Color::White => Self::WHITE_KINGSIDE,
            Color::Black => Self::BLACK_KINGSIDE,
        }
    }

    #[inline]
    const fn queenside_flag(color: Color) -> u8 {
        match color {
            Color::White => Self::WHITE_QUEENSIDE,
            Color::Black => Self::BLACK_QUEENSIDE,
        }
    }

    #[inline]
    pub const fn can_castle_kingside(self, color: Color) -> bool {
        self.0 & Self::kingside_flag(color) != 0
    }

    #[inline]
    pub const fn can_castle_queenside(self, color: Color) -> bool {
        self.0 & Self::queenside_flag(color) != 0
    }

    /// Removes both rights for a color.
    #[inline]
    pub fn remove_color(&mut self, color: Color) {
        self.0 &= !(Self::kingside_flag(color) | Self::queenside_flag(color));
    }

    #[inline]
    pub fn remove_kingside(&mut self, color: Color) {
        self.0 &= !Self::kingside_flag(color);
    }

    #[inline]
    pub fn remove_queenside(&mut self, color: Color) {
        self.0 &= !Self::queenside_flag(color);
    }

    /// Clears the right tied to a rook home square, if `sq` is one.
    ///
    /// Called with both the origin and the destination of every move, so a
    /// rook leaving its corner and a rook captured on its corner both revoke.
    pub fn revoke_for_square(&mut self, sq: Square) {
        match sq {
            Square::A1 => self.remove_queenside(Color::White),
            Square::H1 => self.remove_kingside(Color::White),
            Square::A8 => self.remove_queenside(Color::Black),
            Square::H8 => self.remove_kingside(Color::Black),
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fen_field_roundtrip() {
        for field in ["KQkq", "Kq", "k", "-"] {
            let rights = CastlingRights::from_fen_field(field).unwrap();
            assert_eq!(rights.to_fen_field(), field);
        }
    }

    #[test]
    fn fen_field_rejects_garbage() {
        assert_eq!(CastlingRights::from_fen_field("KX"), None);
        assert_eq!(CastlingRights::from_fen_field("K-"), None);
    }

    #[test]
    fn remove_kingside_keeps_queenside() {
        let mut rights = CastlingRights::ALL;
        rights.remove_kingside(Color::White);
        assert!(!rights.can_castle_kingside(Color::White));
        assert!(rights.can_castle_queenside(Color::White));
        assert!(rights.can_castle_kingside(Color::Black));
    }

    #[test]
    fn remove_color() {
        let mut rights = CastlingRights::ALL;
        rights.remove_color(Color::Black);
        assert!(!rights.can_castle_kingside(Color::Black));
        assert!(!rights.can_castle_queenside(Color::Black));
        assert!(rights.can_castle_kingside(Color::White));
        assert!(rights.can_castle_queenside(Color::White));
    }

    #[test]
    fn revoke_for_rook_home_squares() {
        let mut rights = CastlingRights::ALL;
        rights.revoke_for_square(Square::H8);
        assert!(!rights.can_castle_kingside(Color::Black));
        rights.revoke_for_square(Square::A1);
        assert!(!rights.can_castle_queenside(Color::White));
        rights.revoke_for_square(Square::E1);
        assert_eq!(rights.to_fen_field(), "Kq");
    }
}
