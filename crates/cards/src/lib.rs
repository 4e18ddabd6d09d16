// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Showdown cards types.
//!
//! This crate define types to create and parse cards:
//!
//! ```
//! # use showdown_cards::{Card, Rank, Suit};
//! let ah = Card::new(Rank::Ace, Suit::Hearts);
//! let td = "10d".parse::<Card>().unwrap();
//! assert_eq!(td, Card::new(Rank::Ten, Suit::Diamonds));
//! assert_eq!("Ah".parse::<Card>().unwrap(), ah);
//! ```
//!
//! Jokers are written with an `O` face followed by any suit character:
//!
//! ```
//! # use showdown_cards::Card;
//! let joker = "Oc".parse::<Card>().unwrap();
//! assert!(joker.is_joker());
//! ```
//!
//! and a [Deck] type for shuffling and iterating cards in the deck.
//!
//! For example to iterate through all 5 cards hands:
//!
//! ```no_run
//! # use showdown_cards::Deck;
//! let mut counter = 0;
//! Deck::default().for_each(5, |hand| {
//!     counter += 1;
//! });
//! assert_eq!(counter, 2_598_960);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod deck;
pub use deck::{Card, Deck, Face, ParseCardError, Rank, Suit};
