//! Perft (performance test) for move generator validation.
//!
//! Perft counts the number of leaf nodes at a given depth, which can be
//! compared against known-correct values to validate the move generator.

use crate::Board;

/// Counts the number of leaf nodes at the given depth.
pub fn perft(board: &dyn Board, depth: u32) -> u64 {
    if depth == 0 {
        return 1;
    }

    let moves = board.legal_moves();

    if depth == 1 {
        return moves.len() as u64;
    }

    let mut nodes = 0u64;
    for &m in &moves {
        let mut child = board.clone_box();
        child.apply_move(m);
        nodes += perft(child.as_ref(), depth - 1);
    }
    nodes
}

/// Perft with divide: node count below each root move, sorted by move text.
pub fn perft_divide(board: &dyn Board, depth: u32) -> Vec<(String, u64)> {
    let moves = board.legal_moves();
    let mut results = Vec::with_capacity(moves.len());

    for &m in &moves {
        let mut child = board.clone_box();
        child.apply_move(m);
        let nodes = if depth > 1 {
            perft(child.as_ref(), depth - 1)
        } else {
            1
        };
        results.push((m.to_uci(), nodes));
    }

    results.sort_by(|a, b| a.0.cmp(&b.0));
    results
}
