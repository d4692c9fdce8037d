use std::io;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{error, info};

use morpion::config::{Command, Config};
use morpion::player::{HumanPlayer, MinimaxPlayer};
use morpion::search::{self, minimax, GameTree};
use morpion::tourny;
use morpion::BoardState;

fn init_tracing(level: &str) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();
}

fn play(depth: usize, computer_first: bool) -> Result<()> {
    let mut human = HumanPlayer::new(io::stdin().lock(), io::stdout());
    let mut computer = MinimaxPlayer::new(depth);

    println!("Building the game tree...");

    let show = |board: &BoardState| println!("{board}");
    let end = if computer_first {
        tourny::play_out(&mut computer, &mut human, show)
    } else {
        tourny::play_out(&mut human, &mut computer, show)
    };
    let end = end.inspect_err(|e| error!(error = %e, "game aborted"))?;

    match end.winner() {
        Some(mark) => println!("Player {mark} wins"),
        None => println!("Draw"),
    }

    Ok(())
}

fn run_tourny(rounds: usize, depth: usize) -> Result<()> {
    let elos = tourny::round_robin(&tourny::roster(), rounds, depth)
        .context("tournament aborted")?;

    let mut table: Vec<_> = elos.into_iter().collect();
    table.sort_by(|a, b| b.1.total_cmp(&a.1));

    for (ident, elo) in table {
        println!("{ident:>10} {elo:7.1}");
    }

    Ok(())
}

fn analyze(board: BoardState, depth: usize) -> Result<()> {
    print!("{board}");
    println!("{} to move", board.turn());

    let tree = GameTree::build(board, depth);
    println!(
        "tree: {} nodes, {} leaves",
        tree.node_count(),
        tree.leaf_count()
    );

    if tree.is_leaf() {
        println!("no move to make");
        return Ok(());
    }

    for child in tree.children() {
        if let Some(mov) = board.diff(child.board()) {
            println!("  {mov}: {}", minimax(child, depth, true));
        }
    }

    let mov = search::select_move_with_depth(&board, &tree, depth)
        .context("move selection failed")?;
    println!("recommended: {mov}");

    Ok(())
}

fn main() -> Result<()> {
    let config = Config::parse();
    config.validate()?;

    init_tracing(&config.log_level);
    info!(depth = config.depth, "starting");

    match config.command {
        Command::Play { computer_first } => play(config.depth, computer_first),
        Command::Tourny { rounds } => run_tourny(rounds, config.depth),
        Command::Analyze { board } => analyze(board, config.depth),
    }
}
