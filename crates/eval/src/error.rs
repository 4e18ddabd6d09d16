// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Solver errors.
use showdown_cards::{Card, ParseCardError};
use thiserror::Error;

/// Errors returned by the solver and the games registry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A card token could not be parsed.
    #[error(transparent)]
    Card(#[from] ParseCardError),
    /// The same card was given twice in a game that forbids it.
    #[error("duplicate card {0}")]
    DuplicateCard(Card),
    /// A joker was given to a game where jokers are not wild.
    #[error("joker {card} is not wild in game {game}")]
    Joker {
        /// The joker card.
        card: Card,
        /// The game name.
        game: String,
    },
    /// There are no cards to solve.
    #[error("no cards to solve")]
    Empty,
    /// A game configuration is not valid.
    #[error("invalid game {name}: {reason}")]
    InvalidGame {
        /// The game name.
        name: String,
        /// What is wrong with the game.
        reason: String,
    },
    /// No hand type in the game matched the cards.
    #[error("no hand type matched in game {0}")]
    NoMatch(String),
}

/// Result type for the solver.
pub type Result<T> = std::result::Result<T, Error>;
