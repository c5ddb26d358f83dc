//! Perft reference counts for both board representations.
//!
//! Positions other than the start position are only checked to depths
//! where their published counts contain no en-passant captures.

use chess_engine::{new_board, perft, perft_divide, BoardKind};

const KIWIPETE: &str = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";
const POSITION_3: &str = "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1";
const POSITION_4: &str = "r3k2r/Pppp1ppp/1b3nbN/nP6/BBP1P3/q4N2/Pp1P2PP/R2Q1RK1 w kq - 0 1";
const POSITION_5: &str = "rnbq1k1r/pp1Pbppp/2p5/8/2B5/8/PPP1NnPP/RNBQK2R w KQ - 1 8";

fn check(fen: Option<&str>, expected: &[u64]) {
    for kind in BoardKind::ALL {
        let board = new_board(kind, fen).unwrap();
        for (depth, &nodes) in expected.iter().enumerate() {
            let depth = depth as u32 + 1;
            assert_eq!(
                perft(board.as_ref(), depth),
                nodes,
                "{} board, depth {}, {}",
                kind,
                depth,
                fen.unwrap_or("startpos")
            );
        }
    }
}

#[test]
fn perft_startpos() {
    check(None, &[20, 400, 8902, 197281]);
}

#[test]
fn perft_kiwipete() {
    check(Some(KIWIPETE), &[48]);
}

#[test]
fn perft_position_3() {
    check(Some(POSITION_3), &[14, 191]);
}

#[test]
fn perft_position_4() {
    check(Some(POSITION_4), &[6, 264]);
}

#[test]
fn perft_position_5() {
    check(Some(POSITION_5), &[44, 1486]);
}

#[test]
fn divide_agrees_between_representations() {
    let array = new_board(BoardKind::Array, Some(KIWIPETE)).unwrap();
    let mask = new_board(BoardKind::Bitboard, Some(KIWIPETE)).unwrap();
    assert_eq!(perft_divide(array.as_ref(), 2), perft_divide(mask.as_ref(), 2));
}
