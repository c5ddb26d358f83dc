//! Move selection.

use chess_core::Move;
use chess_engine::Board;
use rand::rngs::ThreadRng;
use rand::seq::SliceRandom;
use rand::Rng;

/// Picks the move to answer `go` with.
pub trait MoveChooser {
    /// Returns `None` when the side to move has no legal move.
    fn choose(&mut self, board: &dyn Board) -> Option<Move>;
}

/// Picks uniformly among the legal moves.
pub struct RandomChooser<R: Rng = ThreadRng> {
    rng: R,
}

impl RandomChooser<ThreadRng> {
    pub fn new() -> Self {
        Self::with_rng(rand::thread_rng())
    }
}

impl Default for RandomChooser<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> RandomChooser<R> {
    pub fn with_rng(rng: R) -> Self {
        RandomChooser { rng }
    }
}

impl<R: Rng> MoveChooser for RandomChooser<R> {
    fn choose(&mut self, board: &dyn Board) -> Option<Move> {
        board.legal_moves().as_slice().choose(&mut self.rng).copied()
    }
}
