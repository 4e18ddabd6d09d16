// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Showdown poker hand solver.
//!
//! The solver classifies a set of cards into the strongest hand type of a
//! game, selects the cards that make the hand and compares hands to find the
//! winners. Games are data: a [Game] lists the hand types it recognizes from
//! the strongest to the weakest, its wild card and its straight rules, so the
//! same solver handles standard poker, draws, wild card games and pai gow.
//!
//! To solve a hand use a [Solver] with a registered game name:
//!
//! ```
//! # use showdown_eval::*;
//! let solver = Solver::default();
//! let hand = solver.solve(&["Ad", "As", "Jc", "Th", "2d"], "standard").unwrap();
//! assert_eq!(hand.name(), "Pair");
//! assert_eq!(hand.description(), "Pair, A's");
//! assert_eq!(hand.tokens(), vec!["Ad", "As", "Jc", "10h", "2d"]);
//! ```
//!
//! and [winners] to find the best hands:
//!
//! ```
//! # use showdown_eval::*;
//! let solver = Solver::default();
//! let h1 = solver.solve(&["Ad", "As", "Jc", "Th", "2d"], "standard").unwrap();
//! let h2 = solver.solve(&["Ks", "Qs", "Js", "Ts", "9s"], "standard").unwrap();
//! let hands = [h1, h2];
//! let winners = winners(&hands);
//! assert_eq!(winners.len(), 1);
//! assert_eq!(winners[0].name(), "Straight Flush");
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
pub mod error;
pub use error::{Error, Result};

pub mod eval;
pub use eval::Match;

pub mod game;
pub use game::{Game, HandType, WheelPolicy, WildPolicy};

pub mod hand;
pub use hand::{SolvedHand, winners};

pub mod pool;
pub use pool::PlayedCard;

pub mod registry;
pub use registry::{GameRef, Games};

pub mod solver;
pub use solver::Solver;

// Reexport cards types.
pub use showdown_cards::{Card, Deck, Face, ParseCardError, Rank, Suit};
