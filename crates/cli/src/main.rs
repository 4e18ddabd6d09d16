// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Showdown CLI.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};
use log::{info, warn};
use std::{fs, path::PathBuf, time::Instant};

use showdown_eval::{Deck, Game, Games, Solver, winners};

mod report;
use report::{HandReport, ShowdownReport};

#[derive(Debug, Parser)]
#[clap(version, about = "Poker hands solver")]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Solves a hand.
    Solve {
        #[clap(flatten)]
        opts: GameOpts,
        /// The hand cards, for example Ah Kd 10c or Ah,Kd,10c.
        #[clap(required = true)]
        cards: Vec<String>,
    },
    /// Solves hands and prints the winners.
    Winners {
        #[clap(flatten)]
        opts: GameOpts,
        /// The hands as comma separated cards, for example Ah,Kd,10c.
        #[clap(required = true)]
        hands: Vec<String>,
    },
    /// Lists the registered games.
    Games {
        /// Load a custom game from a JSON file.
        #[clap(long, short)]
        rules: Option<PathBuf>,
    },
    /// Solves every hand of a deck and prints the hand types counts.
    Census {
        /// The game name.
        #[clap(long, short, default_value = Game::STANDARD)]
        game: String,
        /// Number of cards per hand.
        #[clap(long, short, default_value_t = 5, value_parser = clap::value_parser!(u8).range(2..=7))]
        cards: u8,
    },
}

#[derive(Debug, Args)]
struct GameOpts {
    /// The game name, defaults to the rules game or to standard.
    #[clap(long, short)]
    game: Option<String>,
    /// Load a custom game from a JSON file.
    #[clap(long, short)]
    rules: Option<PathBuf>,
    /// Check if hands qualify.
    #[clap(long, short)]
    disqualify: bool,
    /// Print JSON output.
    #[clap(long)]
    json: bool,
}

fn main() -> Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .format_target(false)
        .format_timestamp_millis()
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Solve { opts, cards } => solve(&opts, &cards),
        Command::Winners { opts, hands } => showdown(&opts, &hands),
        Command::Games { rules } => {
            let (solver, _) = load_solver(rules.as_ref())?;
            for game in solver.games().iter() {
                for line in report::game_lines(game) {
                    println!("{line}");
                }
            }

            Ok(())
        }
        Command::Census { game, cards } => census(&game, cards as usize),
    }
}

/// Creates a solver with the default games and an optional custom game.
fn load_solver(rules: Option<&PathBuf>) -> Result<(Solver, Option<String>)> {
    let mut games = Games::default();
    let mut custom = None;

    if let Some(path) = rules {
        let json = fs::read_to_string(path)
            .with_context(|| format!("Cannot read rules file {}", path.display()))?;
        let game = serde_json::from_str::<Game>(&json)
            .with_context(|| format!("Invalid rules file {}", path.display()))?;

        info!("Loaded game {} from {}", game.name, path.display());
        custom = Some(game.name.clone());
        games.insert(game)?;
    }

    Ok((Solver::new(games), custom))
}

/// Resolves the game name for the command options.
fn game_name(opts: &GameOpts, solver: &Solver, custom: Option<String>) -> String {
    let name = opts
        .game
        .clone()
        .or(custom)
        .unwrap_or_else(|| Game::STANDARD.to_string());

    if !solver.games().contains(&name) {
        warn!("Unknown game {name}, using {}", Game::STANDARD);
    }

    name
}

/// Splits card arguments on commas and whitespace.
fn tokens<S: AsRef<str>>(args: &[S]) -> Vec<&str> {
    args.iter()
        .flat_map(|a| a.as_ref().split([',', ' ']))
        .filter(|t| !t.is_empty())
        .collect()
}

fn solve(opts: &GameOpts, cards: &[String]) -> Result<()> {
    let (solver, custom) = load_solver(opts.rules.as_ref())?;
    let name = game_name(opts, &solver, custom);
    let hand = solver.solve_with(&tokens(cards), &name, opts.disqualify, None)?;

    if opts.json {
        println!("{}", serde_json::to_string_pretty(&HandReport::from(&hand))?);
    } else {
        println!("{}: {}", hand.name(), report::hand_line(&hand));
    }

    Ok(())
}

fn showdown(opts: &GameOpts, hands: &[String]) -> Result<()> {
    let (solver, custom) = load_solver(opts.rules.as_ref())?;
    let name = game_name(opts, &solver, custom);

    let solved = hands
        .iter()
        .enumerate()
        .map(|(pos, hand)| {
            let id = (pos + 1).to_string();
            solver
                .solve_with(&tokens(&[hand]), &name, opts.disqualify, Some(id.as_str()))
                .with_context(|| format!("Hand {id}: {hand}"))
        })
        .collect::<Result<Vec<_>>>()?;

    let winners = winners(&solved);
    let winner_ids = winners.iter().filter_map(|h| h.id()).collect::<Vec<_>>();

    if opts.json {
        let report = ShowdownReport {
            hands: solved.iter().map(HandReport::from).collect(),
            winners: winner_ids,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        for hand in &solved {
            let id = hand.id().unwrap_or_default();
            let mark = if winner_ids.contains(&id) { '*' } else { ' ' };
            println!("{mark} {id:>2} {}", report::hand_line(hand));
        }

        if winners.is_empty() {
            println!("No qualifying hands");
        }
    }

    Ok(())
}

fn census(name: &str, k: usize) -> Result<()> {
    let solver = Solver::default();
    if !solver.games().contains(name) {
        bail!("Unknown game {name}");
    }

    let game = solver.games().get(name);
    let mut counts = vec![0usize; game.hand_types.len()];
    let mut error = None;

    let now = Instant::now();
    Deck::default().for_each(k, |cards| match solver.solve_cards(cards, game, false, None) {
        Ok(hand) => counts[game.hand_types.len() - hand.rank()] += 1,
        Err(e) => {
            error.get_or_insert(e);
        }
    });

    if let Some(e) = error {
        return Err(e.into());
    }

    let elapsed = now.elapsed().as_secs_f64();
    let total = counts.iter().sum::<usize>();
    println!("Total hands      {total}");
    println!("Elapsed:         {elapsed:.3}s");
    println!("Hands/sec:       {:.0}\n", total as f64 / elapsed);

    for (hand_type, count) in game.hand_types.iter().zip(counts) {
        println!("{:<34} {count}", format!("{}:", hand_type.name()));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_tokens() {
        assert_eq!(tokens(&["Ah,Kd", "10c"]), vec!["Ah", "Kd", "10c"]);
        assert_eq!(tokens(&["Ah Kd,,Qs"]), vec!["Ah", "Kd", "Qs"]);
    }

    #[test]
    fn cli_args() {
        let cli = Cli::try_parse_from(["showdown", "solve", "-g", "boss", "Ah", "Kd"]).unwrap();
        let Command::Solve { opts, cards } = cli.command else {
            panic!("expected solve");
        };
        assert_eq!(opts.game.as_deref(), Some("boss"));
        assert_eq!(cards, vec!["Ah", "Kd"]);

        assert!(Cli::try_parse_from(["showdown", "census", "--cards", "8"]).is_err());
        assert!(Cli::try_parse_from(["showdown", "solve"]).is_err());
    }

    #[test]
    fn reports() {
        let solver = Solver::default();
        let hand = solver
            .solve_with(&["Ah", "As", "Kd", "7c", "2h"], "standard", false, Some("1"))
            .unwrap();

        let json = serde_json::to_value(HandReport::from(&hand)).unwrap();
        assert_eq!(json["id"], "1");
        assert_eq!(json["hand_type"], "one_pair");
        assert_eq!(json["description"], "Pair, A's");
        assert_eq!(json["cards"][0], "Ah");
    }
}
