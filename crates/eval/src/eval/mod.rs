// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hand type evaluators.
//!
//! Each [HandType] has an evaluator that looks for its pattern in an
//! [Attempt] and returns a [Match] with the selected cards, the cascade in
//! [Game](crate::Game) decides which evaluators run and in what order.
use log::trace;

use crate::{
    game::HandType,
    pool::{Attempt, PlayedCard, rank_label},
};

mod draws;
mod flush;
mod gaps;
mod kinds;
mod straight;

pub use gaps::{Run, runs, scan};

/// The cards and names selected by a successful evaluator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match {
    /// The selected cards, the cards that make the hand first.
    pub cards: Vec<PlayedCard>,
    /// The hand name.
    pub name: String,
    /// The hand description.
    pub description: String,
    /// The straight flush window tops at the ace.
    pub royal: bool,
    /// A wild card is part of the straight run.
    pub wild_in_run: bool,
}

impl Match {
    fn new(attempt: &Attempt<'_>, name: impl Into<String>, description: String) -> Self {
        Self {
            cards: attempt.played(),
            name: name.into(),
            description,
            royal: false,
            wild_in_run: false,
        }
    }
}

/// Runs the evaluator for a hand type.
pub fn attempt(hand_type: HandType, attempt: &mut Attempt<'_>) -> Option<Match> {
    use HandType::*;

    let m = match hand_type {
        RoyalFlush => straight::royal_flush(attempt, hand_type, |_| true),
        NaturalRoyalFlush => straight::royal_flush(attempt, hand_type, |m| !m.wild_in_run),
        WildRoyalFlush => straight::royal_flush(attempt, hand_type, |m| m.wild_in_run),
        FiveOfAKind => kinds::of_a_kind(attempt, hand_type, 5),
        StraightFlush => straight::straight_flush(attempt),
        FourOfAKindPairPlus => kinds::groups(attempt, hand_type, &[4, 2]),
        FourOfAKind => kinds::of_a_kind(attempt, hand_type, 4),
        FourWilds => kinds::four_wilds(attempt),
        TwoThreeOfAKind => kinds::groups(attempt, hand_type, &[3, 3]),
        ThreeOfAKindTwoPair => kinds::groups(attempt, hand_type, &[3, 2, 2]),
        FullHouse => kinds::groups(attempt, hand_type, &[3, 2]),
        Flush => flush::flush(attempt),
        Straight => straight::straight(attempt),
        ThreeOfAKind => kinds::of_a_kind(attempt, hand_type, 3),
        ThreePair => kinds::groups(attempt, hand_type, &[2, 2, 2]),
        TwoPair => kinds::groups(attempt, hand_type, &[2, 2]),
        FlushDrawNoPair => draws::flush_draw(attempt, hand_type, false),
        FlushDrawWithPair => draws::flush_draw(attempt, hand_type, true),
        StraightFlushDrawNoPair => draws::straight_flush_draw(attempt, hand_type, false),
        StraightFlushDrawWithPair => draws::straight_flush_draw(attempt, hand_type, true),
        StraightDrawNoPair => draws::straight_draw(attempt, hand_type, false),
        StraightDrawWithPair => draws::straight_draw(attempt, hand_type, true),
        OnePair => kinds::of_a_kind(attempt, hand_type, 2),
        HighCard => kinds::high_card(attempt),
    };

    trace!(
        "{hand_type:?} {}",
        m.as_ref().map_or("no match", |m| m.description.as_str())
    );

    m
}

/// The rank label of the first selected card.
fn top_label(attempt: &Attempt<'_>) -> String {
    attempt
        .played()
        .first()
        .map(|c| rank_label(c.rank()))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Game, pool::Pool};
    use showdown_cards::Card;

    pub(super) fn solve(game: &Game, hand_type: HandType, tokens: &str) -> Option<Match> {
        let cards = tokens
            .split_whitespace()
            .map(|t| t.parse::<Card>().unwrap())
            .collect::<Vec<_>>();
        let pool = Pool::new(game, &cards);
        let mut a = Attempt::new(&pool);
        attempt(hand_type, &mut a)
    }

    pub(super) fn tokens(m: &Match) -> Vec<String> {
        m.cards.iter().map(|c| c.token()).collect()
    }

    #[test]
    fn fresh_attempt_per_evaluator() {
        let game = Game::preset("joker").unwrap();
        let cards = ["Kh", "Kd", "7c", "Oh", "3s"]
            .iter()
            .map(|t| t.parse::<Card>().unwrap())
            .collect::<Vec<_>>();
        let pool = Pool::new(&game, &cards);

        // A failed evaluator leaves no state behind for the next one.
        let mut a = Attempt::new(&pool);
        assert!(attempt(HandType::FourOfAKind, &mut a).is_none());

        let mut a = Attempt::new(&pool);
        let m = attempt(HandType::ThreeOfAKind, &mut a).unwrap();
        assert_eq!(m.description, "Three of a Kind, K's");
        // Joker poker drops kickers.
        assert_eq!(tokens(&m), vec!["Kh", "Kd", "Kh"]);
    }
}
