// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Command output types.
use serde::Serialize;

use showdown_eval::{Face, Game, HandType, SolvedHand};

/// A solved hand report.
#[derive(Debug, Serialize)]
pub struct HandReport<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<&'a str>,
    pub game: &'a str,
    pub hand_type: HandType,
    pub name: &'a str,
    pub description: &'a str,
    pub cards: Vec<String>,
    pub rank: usize,
    pub qualifies: bool,
}

impl<'a> From<&'a SolvedHand> for HandReport<'a> {
    fn from(hand: &'a SolvedHand) -> Self {
        Self {
            id: hand.id(),
            game: hand.game(),
            hand_type: hand.hand_type(),
            name: hand.name(),
            description: hand.description(),
            cards: hand.tokens(),
            rank: hand.rank(),
            qualifies: hand.qualifies(),
        }
    }
}

/// A showdown report.
#[derive(Debug, Serialize)]
pub struct ShowdownReport<'a> {
    pub hands: Vec<HandReport<'a>>,
    pub winners: Vec<&'a str>,
}

/// One line per hand for terminal output.
pub fn hand_line(hand: &SolvedHand) -> String {
    let mut line = format!("{:<28} {}", hand.description(), hand.tokens().join(" "));
    if !hand.qualifies() {
        line.push_str(" (disqualified)");
    }

    line
}

/// A game summary for terminal output.
pub fn game_lines(game: &Game) -> Vec<String> {
    let mut lines = vec![format!(
        "{} ({} cards{})",
        game.name,
        game.cards_in_hand,
        match game.wild {
            Some(Face::Joker) => ", jokers wild".to_string(),
            Some(Face::Rank(rank)) => format!(", {rank}'s wild"),
            None => String::new(),
        }
    )];

    lines.extend(
        game.hand_types
            .iter()
            .enumerate()
            .map(|(pos, ht)| format!("  {:>2}. {}", pos + 1, ht.name())),
    );

    lines
}
