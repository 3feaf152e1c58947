//! Strictly Minimax - Unified CLI
//!
//! Analyze positions, ask for the optimal move, or play full games.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use serde_json::json;
use strictly_minimax::{
    Board, GameEvent, MatchConfig, MinimaxPlayer, Orchestrator, PlayerKind, evaluate,
    is_terminal, legal_actions, outcome, player_to_move, utility, winner,
};
use tracing::{info, instrument, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Best { board, json } => run_best(&board, json),
        Command::Analyze { board, json } => run_analyze(&board, json),
        Command::Play { config, x, o } => run_play(&config, x, o),
        Command::SelfPlay { json } => run_self_play(json),
    }
}

/// Parses a board argument, rejecting mark counts that play cannot produce.
#[instrument]
fn parse_board(text: &str) -> Result<Board> {
    let board: Board = text
        .parse()
        .with_context(|| format!("Invalid board {text:?}"))?;
    if !board.has_reachable_counts() {
        anyhow::bail!(
            "Board {text:?} is unreachable: X has {} marks, O has {} (X moves first)",
            board.count(strictly_minimax::TicTacToePlayer::X),
            board.count(strictly_minimax::TicTacToePlayer::O),
        );
    }
    Ok(board)
}

/// Print the optimal move
#[instrument]
fn run_best(text: &str, as_json: bool) -> Result<()> {
    let board = parse_board(text)?;
    let eval = evaluate(&board);

    if as_json {
        let report = json!({
            "board": board.notation(),
            "to_move": player_to_move(&board),
            "best_action": eval.action(),
            "value": eval.value(),
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    match eval.action() {
        Some(action) => println!(
            "{} plays {} [{}]",
            player_to_move(&board),
            action,
            action.label().unwrap_or("?")
        ),
        None => println!("Game over: {}", outcome(&board)),
    }
    Ok(())
}

/// Describe a board
#[instrument]
fn run_analyze(text: &str, as_json: bool) -> Result<()> {
    let board = parse_board(text)?;
    let terminal = is_terminal(&board);
    let eval = evaluate(&board);
    let actions = legal_actions(&board);

    if as_json {
        let report = json!({
            "board": board.notation(),
            "to_move": player_to_move(&board),
            "legal_actions": actions,
            "winner": winner(&board),
            "terminal": terminal,
            "utility": terminal.then(|| utility(&board)),
            "result": outcome(&board),
            "value": eval.value(),
            "best_action": eval.action(),
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    let listed: Vec<String> = actions.iter().map(ToString::to_string).collect();
    println!("{board}\n");
    println!("To move:       {}", player_to_move(&board));
    println!("Legal actions: {}", listed.join(" "));
    println!(
        "Winner:        {}",
        winner(&board).map_or_else(|| "none".to_string(), |p| p.to_string())
    );
    println!("Terminal:      {terminal}");
    if terminal {
        println!("Utility:       {}", utility(&board));
    }
    println!("Result:        {}", outcome(&board));
    println!("Minimax value: {}", eval.value());
    if let Some(action) = eval.action() {
        println!("Best action:   {action}");
    }
    info!(nodes = eval.nodes(), "Analysis complete");
    Ok(())
}

/// Play a configured match
#[instrument(skip_all, fields(config_path = %config.display()))]
fn run_play(
    config: &std::path::Path,
    x: Option<PlayerKind>,
    o: Option<PlayerKind>,
) -> Result<()> {
    let config = if config.exists() {
        MatchConfig::from_file(config)?
    } else {
        warn!("Config file not found, using defaults");
        MatchConfig::default()
    }
    .override_kinds(x, o);

    let mut orchestrator = Orchestrator::new(config.x().build(), config.o().build());
    orchestrator.run(print_event)?;
    Ok(())
}

/// Minimax against itself
#[instrument]
fn run_self_play(as_json: bool) -> Result<()> {
    let mut orchestrator = Orchestrator::new(
        Box::new(MinimaxPlayer::new("Minimax X")),
        Box::new(MinimaxPlayer::new("Minimax O")),
    );

    if as_json {
        let record = orchestrator.run(|_| {})?;
        println!("{}", serde_json::to_string_pretty(&record)?);
    } else {
        orchestrator.run(print_event)?;
    }
    Ok(())
}

fn print_event(event: &GameEvent) {
    match event {
        GameEvent::AwaitingMove { .. } => {}
        GameEvent::MoveMade {
            mark,
            player,
            action,
            board,
        } => println!("{player} ({mark}) plays {action}\n{board}\n"),
        GameEvent::GameOver { result, winner } => match winner {
            Some(name) => println!("{result} ({name})"),
            None => println!("{result}"),
        },
    }
}
