//! Attack sets for the bitboard representation.
//!
//! Leaper attacks (knight, king, pawn) are precomputed at compile time.
//! Slider attacks are ray walks over the occupancy mask.

use crate::Bitboard;
use chess_core::{Color, Square};

/// Orthogonal ray directions as (file, rank) steps.
pub const ROOK_DIRECTIONS: [(i8, i8); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];

/// Diagonal ray directions as (file, rank) steps.
pub const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (-1, 1), (1, -1), (-1, -1)];

const KNIGHT_ATTACKS: [Bitboard; 64] =
    leaper_table(&[(1, 2), (2, 1), (2, -1), (1, -2), (-1, -2), (-2, -1), (-2, 1), (-1, 2)]);

const KING_ATTACKS: [Bitboard; 64] =
    leaper_table(&[(0, 1), (1, 1), (1, 0), (1, -1), (0, -1), (-1, -1), (-1, 0), (-1, 1)]);

/// Indexed by [color][square].
const PAWN_ATTACKS: [[Bitboard; 64]; 2] = pawn_table();

#[inline]
pub fn knight_attacks(sq: Square) -> Bitboard {
    KNIGHT_ATTACKS[sq.index() as usize]
}

#[inline]
pub fn king_attacks(sq: Square) -> Bitboard {
    KING_ATTACKS[sq.index() as usize]
}

/// Squares a pawn of `color` standing on `sq` attacks.
#[inline]
pub fn pawn_attacks(sq: Square, color: Color) -> Bitboard {
    PAWN_ATTACKS[color.index()][sq.index() as usize]
}

/// Walks each direction from `sq`, including the first occupied square
/// and stopping there.
pub fn ray_attacks(sq: Square, occupied: Bitboard, directions: &[(i8, i8)]) -> Bitboard {
    let mut attacks = Bitboard::EMPTY;
    let file = sq.file().index() as i8;
    let rank = sq.rank().index() as i8;

    for &(df, dr) in directions {
        let (mut f, mut r) = (file + df, rank + dr);
        while (0..8).contains(&f) && (0..8).contains(&r) {
            let Some(target) = Square::from_index((r * 8 + f) as u8) else {
                break;
            };
            attacks.set(target);
            if occupied.contains(target) {
                break;
            }
            f += df;
            r += dr;
        }
    }
    attacks
}

#[inline]
pub fn rook_attacks(sq: Square, occupied: Bitboard) -> Bitboard {
    ray_attacks(sq, occupied, &ROOK_DIRECTIONS)
}

#[inline]
pub fn bishop_attacks(sq: Square, occupied: Bitboard) -> Bitboard {
    ray_attacks(sq, occupied, &BISHOP_DIRECTIONS)
}

const fn leaper_table(steps: &[(i8, i8)]) -> [Bitboard; 64] {
    let mut table = [Bitboard::EMPTY; 64];
    let mut sq = 0;
    while sq < 64 {
        let file = (sq % 8) as i8;
        let rank = (sq / 8) as i8;
        let mut bits = 0u64;
        let mut i = 0;
        while i < steps.len() {
            let f = file + steps[i].0;
            let r = rank + steps[i].1;
            if f >= 0 && f < 8 && r >= 0 && r < 8 {
                bits |= 1u64 << (r * 8 + f);
            }
            i += 1;
        }
        table[sq] = Bitboard(bits);
        sq += 1;
    }
    table
}

const fn pawn_table() -> [[Bitboard; 64]; 2] {
    let mut table = [[Bitboard::EMPTY; 64]; 2];
    let mut sq = 0;
    while sq < 64 {
        let bit = 1u64 << sq;
        // a diagonal step that lands on the opposite edge file has wrapped
        table[0][sq] =
            Bitboard(((bit << 7) & !Bitboard::FILE_H.0) | ((bit << 9) & !Bitboard::FILE_A.0));
        table[1][sq] =
            Bitboard(((bit >> 9) & !Bitboard::FILE_H.0) | ((bit >> 7) & !Bitboard::FILE_A.0));
        sq += 1;
    }
    table
}
