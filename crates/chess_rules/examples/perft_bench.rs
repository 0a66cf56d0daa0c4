//! Perft benchmark for profiling with cargo-flamegraph.
//!
//! Usage:
//!   cargo run --release --example perft_bench -p chess_rules -- [depth] [placement] [w|b]
//!
//! Examples:
//!   # Default: depth 4 over the built-in positions
//!   cargo flamegraph --example perft_bench -p chess_rules
//!
//!   # Custom depth and position
//!   cargo run --release --example perft_bench -p chess_rules -- 3 "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8" w

use chess_rules::{Board, Color, perft};
use std::env;
use std::time::{Duration, Instant};

const TEST_POSITIONS: &[(&str, &str, Color)] = &[
    (
        "Starting position",
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR",
        Color::White,
    ),
    ("Rook endgame", "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8", Color::White),
    (
        "Middlegame",
        "r4rk1/1pp1qppp/p1np1n2/2b1p1B1/2B1P1b1/P1NP1N2/1PP1QPPP/R4RK1",
        Color::White,
    ),
];

fn main() {
    let args: Vec<String> = env::args().collect();

    let depth: u8 = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(4);

    if let Some(placement) = args.get(2) {
        let side = match args.get(3).map(String::as_str) {
            Some("b") => Color::Black,
            _ => Color::White,
        };
        match Board::from_placement(placement) {
            Ok(board) => run_single_position(&board, side, depth),
            Err(e) => eprintln!("{e}"),
        }
    } else {
        run_all_positions(depth);
    }
}

fn nps(nodes: u64, elapsed: Duration) -> f64 {
    if elapsed.as_secs_f64() > 0.0 {
        nodes as f64 / elapsed.as_secs_f64()
    } else {
        0.0
    }
}

fn run_single_position(board: &Board, side: Color, depth: u8) {
    println!("Position: {}", board.placement());
    println!("Depth: {depth}");
    println!();

    let start = Instant::now();
    let nodes = perft(board, side, depth);
    let elapsed = start.elapsed();

    println!("Nodes: {nodes}");
    println!("Time: {elapsed:.3?}");
    println!("NPS: {:.0}", nps(nodes, elapsed));
}

fn run_all_positions(depth: u8) {
    println!("=== Perft Benchmark Suite ===");
    println!("Depth: {depth}");
    println!();

    let mut total_nodes = 0u64;
    let mut total_time = Duration::ZERO;

    for (name, placement, side) in TEST_POSITIONS {
        let Ok(board) = Board::from_placement(placement) else {
            eprintln!("{name}: bad placement");
            continue;
        };

        print!("{name:.<30}");

        let start = Instant::now();
        let nodes = perft(&board, *side, depth);
        let elapsed = start.elapsed();

        total_nodes += nodes;
        total_time += elapsed;

        println!(
            " {nodes:>12} nodes in {elapsed:>8.3?} ({:>10.0} nps)",
            nps(nodes, elapsed)
        );
    }

    println!();
    println!("{:=<70}", "");
    println!(
        "TOTAL: {total_nodes} nodes in {total_time:.3?} ({:.0} nps)",
        nps(total_nodes, total_time)
    );
}
