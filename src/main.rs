//! Mini-Go: a 5x5 territory-capture game with an alpha-beta engine.
//!
//! ## Usage
//!
//! - `minigo` - Play against the engine in the terminal
//! - `minigo play --depth 3` - Play at a higher search depth
//! - `minigo demo` - Watch the engine against a random mover

use std::io::{self, BufRead, Write};
use std::time::Duration;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};

use minigo::board::{Color, parse_coord, str_coord};
use minigo::constants::{DEFAULT_DEPTH, HISTORY_TAIL, MAX_DEPTH};
use minigo::game::GameSession;
use minigo::rules;

/// Mini-Go: a small Go variant with an alpha-beta engine
#[derive(Parser)]
#[command(name = "minigo")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play against the engine: you are White, the engine replies as Black
    Play {
        /// Engine search depth (higher is stronger but slower)
        #[arg(long, default_value_t = DEFAULT_DEPTH)]
        depth: usize,
        /// Soft time budget per engine move, in milliseconds
        #[arg(long)]
        budget_ms: Option<u64>,
    },
    /// Engine (Black) against a uniformly random legal mover (White)
    Demo {
        /// Engine search depth
        #[arg(long, default_value_t = DEFAULT_DEPTH)]
        depth: usize,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Play { depth, budget_ms }) => run_play(depth, budget_ms),
        Some(Commands::Demo { depth }) => run_demo(depth),
        None => run_play(DEFAULT_DEPTH, None),
    }
}

fn check_depth(depth: usize) -> Result<()> {
    if depth == 0 || depth > MAX_DEPTH {
        bail!("depth must be between 1 and {MAX_DEPTH}, got {depth}");
    }
    Ok(())
}

/// Interactive game loop: the human plays White on stdin, the engine
/// replies as Black. `quit` ends the game, `score` prints the current
/// material balance.
fn run_play(depth: usize, budget_ms: Option<u64>) -> Result<()> {
    check_depth(depth)?;

    let mut game = GameSession::new(Color::White, depth);
    if let Some(ms) = budget_ms {
        game = game.with_time_budget(Duration::from_millis(ms));
    }

    println!("Mini-Go: you are White (O), the engine is Black (X).");
    println!("Enter a coordinate like C3, or 'score' / 'quit'.\n");
    print!("{}", game.board());

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        if game.is_over() {
            break;
        }

        // Human turn; a blocked human passes.
        if !game.side_has_move() {
            println!("White has no legal move and passes.");
            game.pass();
        } else {
            print!("\nWhite> ");
            stdout.flush().context("flushing prompt")?;
            let Some(line) = stdin.lock().lines().next() else {
                return Ok(()); // stdin closed
            };
            let line = line.context("reading move")?;
            let input = line.trim();

            match input {
                "" => continue,
                "quit" | "exit" => return Ok(()),
                "score" => {
                    let result = game.search();
                    println!(
                        "material (for {}): {}, searched {} nodes",
                        game.to_move(),
                        result.score,
                        result.nodes
                    );
                    continue;
                }
                _ => {}
            }

            let Some((r, c)) = parse_coord(input) else {
                println!("cannot parse '{input}' as a coordinate");
                continue;
            };
            if let Err(e) = game.play(r, c) {
                println!("{e}");
                continue;
            }
        }

        // Engine turn; a blocked engine passes.
        if !game.is_over() {
            match game.engine_reply() {
                Some(pt) => println!("\nBlack plays {}", str_coord(pt)),
                None => {
                    println!("\nBlack has no legal move and passes.");
                    game.pass();
                }
            }
        }

        print!("{}", game.board());
        print_history_tail(&game);
    }

    println!("\nGame over.");
    print!("{}", game.board());
    match game.winner() {
        Some(color) => println!("{color} wins on material."),
        None => println!("Draw."),
    }
    Ok(())
}

/// Self-play demo: the engine (Black) against uniformly random legal
/// White moves, until neither side can place a stone.
fn run_demo(depth: usize) -> Result<()> {
    check_depth(depth)?;

    let mut game = GameSession::new(Color::Black, depth);
    println!("Engine (X, depth {depth}) vs random mover (O)\n");

    while !game.is_over() {
        match game.to_move() {
            Color::Black => match game.engine_reply() {
                Some(pt) => println!("Black plays {}", str_coord(pt)),
                None => {
                    println!("Black passes");
                    game.pass();
                }
            },
            Color::White => {
                let moves = rules::legal_moves(game.board(), Color::White);
                if moves.is_empty() {
                    println!("White passes");
                    game.pass();
                } else {
                    let (r, c) = moves[fastrand::usize(..moves.len())];
                    game.play(r, c).expect("picked from legal_moves");
                    println!("White plays {}", str_coord((r, c)));
                }
            }
        }
    }

    println!("\nFinal position after {} moves:", game.history().len());
    print!("{}", game.board());
    match game.winner() {
        Some(color) => println!("{color} wins on material."),
        None => println!("Draw."),
    }
    Ok(())
}

fn print_history_tail(game: &GameSession) {
    let history = game.history();
    if history.is_empty() {
        return;
    }
    println!("last moves:");
    for entry in history.iter().rev().take(HISTORY_TAIL) {
        println!("  {} at {}", entry.player, str_coord(entry.coord));
    }
}
