//! chess_play CLI
//!
//! Interactive two-player chess in the terminal, and random self-play.

use anyhow::{Context, Result, bail};
use chess_play::{GameRecord, PlayConfig, Session, run_selfplay};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::env;
use std::io;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn print_usage() {
    println!("chess_play");
    println!();
    println!("Usage:");
    println!("  chess_play [--config PATH] [play]");
    println!("  chess_play [--config PATH] selfplay [--seed N] [--games N] [--max-moves N] [--save DIR]");
    println!();
    println!("Config is read from chess_play.toml in the working directory when present.");
    println!("RUST_LOG overrides the configured log level.");
    println!();
    println!("Examples:");
    println!("  chess_play play");
    println!("  chess_play selfplay --seed 7 --games 20");
}

fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn value_of<'a>(args: &'a [String], i: usize, flag: &str) -> Result<&'a str> {
    args.get(i + 1)
        .map(String::as_str)
        .with_context(|| format!("{flag} needs a value"))
}

fn run_play(config: &PlayConfig) -> Result<()> {
    let mut session = Session::new(&config.display);
    println!("Type 'help' for commands.");
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    session.run(stdin.lock(), &mut stdout)
}

fn run_selfplay_cmd(config: &PlayConfig, args: &[String]) -> Result<()> {
    let mut sp = config.selfplay.clone();
    let mut save_dir: Option<PathBuf> = None;

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--seed" | "-s" => {
                sp.seed = Some(value_of(args, i, "--seed")?.parse().context("bad --seed")?);
                i += 1;
            }
            "--games" | "-g" => {
                sp.games = value_of(args, i, "--games")?.parse().context("bad --games")?;
                i += 1;
            }
            "--max-moves" | "-m" => {
                sp.max_moves = value_of(args, i, "--max-moves")?
                    .parse()
                    .context("bad --max-moves")?;
                i += 1;
            }
            "--save" => {
                save_dir = Some(PathBuf::from(value_of(args, i, "--save")?));
                i += 1;
            }
            other => bail!("unknown selfplay option: {other}"),
        }
        i += 1;
    }

    let seed = sp.seed.unwrap_or_else(rand::random);
    info!(seed, games = sp.games, max_moves = sp.max_moves, "starting self-play");
    println!("=== Self-play: {} game(s), seed {} ===", sp.games, seed);

    let mut rng = StdRng::seed_from_u64(seed);
    let (games, summary) = run_selfplay(&mut rng, &sp);

    for (n, (game, outcome)) in games.iter().enumerate() {
        println!(
            "Game {}: {} after {} plies, {} captures",
            n + 1,
            outcome.result_tag(),
            outcome.plies,
            outcome.captures
        );
        print!("{}", game.board());
        if let Some(dir) = &save_dir {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("failed to create {}", dir.display()))?;
            GameRecord::from_game(game).save(&dir.join(format!("game_{:03}.json", n + 1)))?;
        }
    }

    println!();
    println!("=== Summary ===");
    println!(
        "White wins: {}, Black wins: {}, Stalemates: {}, Unfinished: {}",
        summary.white_wins, summary.black_wins, summary.stalemates, summary.unfinished
    );
    Ok(())
}

fn main() -> Result<()> {
    let args: Vec<String> = env::args().skip(1).collect();

    let mut config_path: Option<PathBuf> = None;
    let mut rest = &args[..];
    if let Some(first) = rest.first()
        && (first == "--config" || first == "-c")
    {
        config_path = Some(PathBuf::from(value_of(rest, 0, "--config")?));
        rest = &rest[2..];
    }

    if let Some(cmd) = rest.first()
        && matches!(cmd.as_str(), "help" | "--help" | "-h")
    {
        print_usage();
        return Ok(());
    }

    let config = PlayConfig::resolve(config_path.as_deref())?;
    init_tracing(&config.log.level);

    match rest.first().map(String::as_str) {
        None | Some("play") => run_play(&config),
        Some("selfplay") => run_selfplay_cmd(&config, &rest[1..]),
        Some(other) => {
            eprintln!("Unknown command: {other}");
            print_usage();
            bail!("unknown command: {other}")
        }
    }
}
