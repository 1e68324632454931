//! Interactive play loop: human vs engine on stdin/stdout.
//!
//! Shows the board with both sides' heuristic scores, writes an SVG diagram
//! after every position, and alternates between engine decisions and UCI
//! moves typed by the human. `toggledebug` flips search diagnostics;
//! `youtakethis` hands a single human turn to the engine.

mod config;

use std::fs;
use std::io::{self, BufRead, Write};
use std::path::Path;

use anyhow::{Context, Result};
use bruteforce_engine::{evaluate, BruteForceEngine};
use chess_rules::{render, Color, Engine, Move, Position, SearchLimits};
use greedy_engine::GreedyEngine;

use config::{Config, EngineKind};

fn create_engine(kind: EngineKind) -> Box<dyn Engine> {
    match kind {
        EngineKind::Bruteforce => Box::new(BruteForceEngine::new()),
        EngineKind::Greedy => Box::new(GreedyEngine::new()),
    }
}

/// Diagram plus both colors' scores, Black's above the board and White's
/// below it.
fn show_board(pos: &Position) {
    println!("{} {}", render::FILE_HEADER, evaluate(pos, Color::Black));
    print!("{}", render::ascii_board(pos));
    println!(" {}", evaluate(pos, Color::White));
}

fn save_svg(pos: &Position, config: &Config, last_move: Option<Move>) -> Result<()> {
    // Keep the human's side at the bottom of the diagram.
    let flipped = Color::from(config.engine_side) == Color::White;
    let svg = render::svg_board(pos, flipped, last_move);
    fs::write(&config.svg_path, svg).with_context(|| format!("failed to write {}", config.svg_path))
}

fn main() -> Result<()> {
    let config = Config::load(Path::new("woodpusher.toml"))?;
    let my_color = Color::from(config.engine_side);
    let mut engine = create_engine(config.engine);
    let mut debug = config.debug;

    let mut pos = Position::startpos();
    let mut last_move: Option<Move> = None;
    let mut take_this_one = false;

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        println!();
        show_board(&pos);
        save_svg(&pos, &config, last_move)?;

        if pos.is_checkmate() {
            break;
        }
        if pos.legal_moves().is_empty() {
            println!("Stalemate");
            break;
        }
        if pos.is_check() {
            println!("CHECK!");
        }

        if pos.side_to_move() == my_color || config.play_self || take_this_one {
            // The engine always judges from its own side, even when it is
            // asked to move for the other one.
            println!("My Move");
            let result = engine.choose_move(&pos, my_color, SearchLimits::depth(config.depth));
            println!("Considering {} moves", result.nodes);

            let Some(mv) = result.best_move else {
                println!("No moves available");
                break;
            };
            if debug {
                println!(
                    "{}: depth {} nodes {} fen {}",
                    engine.name(),
                    result.depth,
                    result.nodes,
                    pos
                );
            }
            println!(
                "I move {}, a move with a score of {}",
                pos.move_to_uci(mv),
                result.score
            );
            pos = pos.apply(mv);
            last_move = Some(mv);
            take_this_one = false;
        } else {
            println!("Your move");
            loop {
                print!(" > ");
                io::stdout().flush().ok();
                let Some(line) = lines.next() else {
                    return Ok(());
                };
                let line = line.context("failed to read stdin")?;
                let text = line.trim();
                match text {
                    "toggledebug" => {
                        debug = !debug;
                        println!("{debug}");
                    }
                    "youtakethis" => {
                        take_this_one = true;
                        break;
                    }
                    _ => match pos.play_uci(text) {
                        Ok(mv) => {
                            last_move = Some(mv);
                            break;
                        }
                        Err(_) => println!("Illegal Move"),
                    },
                }
            }
        }
    }
    Ok(())
}
