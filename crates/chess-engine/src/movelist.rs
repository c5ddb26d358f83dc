//! Fixed-capacity move buffer.

use chess_core::{Move, Square};

/// A list of moves with a fixed maximum capacity.
///
/// Chess positions have at most 218 legal moves, so a fixed-size array
/// avoids heap allocation during generation. Order carries no meaning.
#[derive(Clone)]
pub struct MoveList {
    moves: [Move; Self::MAX_MOVES],
    len: usize,
}

impl MoveList {
    pub const MAX_MOVES: usize = 256;

    const FILLER: Move = Move::new(Square::A1, Square::A1);

    #[inline]
    pub const fn new() -> Self {
        MoveList {
            moves: [Self::FILLER; Self::MAX_MOVES],
            len: 0,
        }
    }

    #[inline]
    pub fn push(&mut self, m: Move) {
        debug_assert!(self.len < Self::MAX_MOVES);
        self.moves[self.len] = m;
        self.len += 1;
    }

    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn as_slice(&self) -> &[Move] {
        &self.moves[..self.len]
    }

    #[inline]
    pub fn contains(&self, m: &Move) -> bool {
        self.as_slice().contains(m)
    }

    /// Retains only moves for which the predicate returns true.
    pub fn retain<F>(&mut self, mut f: F)
    where
        F: FnMut(&Move) -> bool,
    {
        let mut write = 0;
        for read in 0..self.len {
            if f(&self.moves[read]) {
                self.moves[write] = self.moves[read];
                write += 1;
            }
        }
        self.len = write;
    }
}

impl Default for MoveList {
    fn default() -> Self {
        Self::new()
    }
}

impl std::ops::Index<usize> for MoveList {
    type Output = Move;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.as_slice()[index]
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

impl std::fmt::Debug for MoveList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mv(text: &str) -> Move {
        Move::parse(text).unwrap()
    }

    #[test]
    fn push_and_index() {
        let mut list = MoveList::new();
        assert!(list.is_empty());
        list.push(mv("e2e4"));
        list.push(mv("d2d4"));
        assert_eq!(list.len(), 2);
        assert_eq!(list[0], mv("e2e4"));
        assert_eq!(list[1], mv("d2d4"));
        assert!(list.contains(&mv("d2d4")));
        assert!(!list.contains(&mv("c2c4")));
    }

    #[test]
    fn retain_keeps_matching_moves() {
        let mut list = MoveList::default();
        list.push(mv("e2e3"));
        list.push(mv("e2e4"));
        list.push(mv("e3e4"));
        let e2 = Square::from_algebraic("e2").unwrap();
        list.retain(|m| m.from() == e2);
        assert_eq!(list.len(), 2);
        assert_eq!(format!("{:?}", list), "[Move(e2e3), Move(e2e4)]");
    }
}
