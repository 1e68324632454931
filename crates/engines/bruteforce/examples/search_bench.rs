//! Search timing harness for profiling runs.
//!
//! Usage:
//!   cargo run --release --example search_bench -p bruteforce_engine -- [depth] [fen]
//!
//! Examples:
//!   # Default: depth 3 over the built-in positions
//!   cargo run --release --example search_bench -p bruteforce_engine
//!
//!   # Custom depth and position
//!   cargo run --release --example search_bench -p bruteforce_engine -- 4 \
//!       "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1"

use std::env;
use std::time::Instant;

use bruteforce_engine::BruteForceEngine;
use chess_rules::{Engine, Position, SearchLimits};

/// Positions covering different game phases.
const TEST_POSITIONS: &[(&str, &str)] = &[
    (
        "Start",
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
    ),
    (
        "Kiwipete",
        "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
    ),
    ("Endgame", "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1"),
];

fn main() {
    let args: Vec<String> = env::args().collect();
    let depth: u8 = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(3);

    if let Some(fen) = args.get(2) {
        run("Custom", fen, depth);
        return;
    }
    for (name, fen) in TEST_POSITIONS {
        run(name, fen, depth);
    }
}

fn run(name: &str, fen: &str, depth: u8) {
    let pos = Position::from_fen(fen).expect("valid FEN");
    let mut engine = BruteForceEngine::new();

    let start = Instant::now();
    let result = engine.choose_move(&pos, pos.side_to_move(), SearchLimits::depth(depth));
    let elapsed = start.elapsed();

    let nps = result.nodes as f64 / elapsed.as_secs_f64();
    println!(
        "{name}: depth {depth}, {} nodes in {elapsed:?} ({nps:.0} nodes/s)",
        result.nodes
    );
}
