// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Solved hands and showdown.
use std::cmp::Ordering;
use std::fmt;

use showdown_cards::Card;

use crate::{game::HandType, pool::PlayedCard};

/// The number of cards compared to break ties.
const TIE_BREAK_CARDS: usize = 5;

/// A classified hand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolvedHand {
    pub(crate) id: Option<String>,
    pub(crate) game: String,
    pub(crate) hand_type: HandType,
    pub(crate) name: String,
    pub(crate) description: String,
    pub(crate) pool: Vec<Card>,
    pub(crate) cards: Vec<PlayedCard>,
    pub(crate) rank: usize,
    pub(crate) qualifies: bool,
}

impl SolvedHand {
    /// The caller id for this hand.
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// The name of the game that solved this hand.
    pub fn game(&self) -> &str {
        &self.game
    }

    /// The matching hand type.
    pub fn hand_type(&self) -> HandType {
        self.hand_type
    }

    /// The hand name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The hand description.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// The cards that were solved, sorted by rank with wild cards last.
    pub fn pool(&self) -> &[Card] {
        &self.pool
    }

    /// The selected cards.
    pub fn cards(&self) -> &[PlayedCard] {
        &self.cards
    }

    /// The selected cards tokens.
    pub fn tokens(&self) -> Vec<String> {
        self.cards.iter().map(|c| c.token()).collect()
    }

    /// The hand type strength in its game, higher is stronger.
    pub fn rank(&self) -> usize {
        self.rank
    }

    /// Checks if this hand qualifies.
    pub fn qualifies(&self) -> bool {
        self.qualifies
    }

    /// Compares this hand with another hand of the same game.
    ///
    /// Hands compare by strength first and then by the ranks of the selected
    /// cards position by position.
    pub fn compare(&self, other: &SolvedHand) -> Ordering {
        self.rank.cmp(&other.rank).then_with(|| {
            let n = self.cards.len().min(other.cards.len()).min(TIE_BREAK_CARDS);
            let lhs = self.cards[..n].iter().map(|c| c.rank());
            let rhs = other.cards[..n].iter().map(|c| c.rank());
            lhs.cmp(rhs)
        })
    }

    /// Checks if this hand loses to another hand.
    pub fn loses_to(&self, other: &SolvedHand) -> bool {
        self.compare(other) == Ordering::Less
    }
}

impl fmt::Display for SolvedHand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tokens().join(", "))
    }
}

/// Returns the winning hands, ties return more than one hand.
///
/// Hands that don't qualify never win.
pub fn winners(hands: &[SolvedHand]) -> Vec<&SolvedHand> {
    let qualified = hands.iter().filter(|h| h.qualifies).collect::<Vec<_>>();
    let Some(top) = qualified.iter().map(|h| h.rank).max() else {
        return Vec::new();
    };

    let contenders = qualified
        .into_iter()
        .filter(|h| h.rank == top)
        .collect::<Vec<_>>();

    contenders
        .iter()
        .copied()
        .filter(|h| !contenders.iter().any(|other| h.loses_to(other)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Solver;

    fn solve(tokens: &str) -> SolvedHand {
        let cards = tokens.split_whitespace().collect::<Vec<_>>();
        Solver::default().solve(&cards, "standard").unwrap()
    }

    #[test]
    fn categories_order() {
        let hands = [
            "2h 3h 4h 5h 6h",
            "9c 9d 9h 9s 2c",
            "9c 9d 9h 2s 2c",
            "Kd 9d 7d 4d 2d",
            "6c 5d 4h 3s 2c",
            "9c 9d 9h 3s 2c",
            "9c 9d 4h 4s 2c",
            "9c 9d 5h 4s 2c",
            "Ac Kd Qh Js 9c",
        ]
        .map(solve);

        for pair in hands.windows(2) {
            assert!(pair[1].loses_to(&pair[0]), "{} vs {}", pair[1], pair[0]);
            assert_eq!(pair[0].compare(&pair[1]), Ordering::Greater);
        }
    }

    #[test]
    fn tie_breaks() {
        let a = solve("Ah Ad Kc 7s 2d");
        let b = solve("Ac As Kd 7h 2c");
        assert_eq!(a.compare(&b), Ordering::Equal);
        assert!(!a.loses_to(&b));

        let c = solve("Ac As Kd 8h 2c");
        assert!(a.loses_to(&c));

        let wheel = solve("Ah 2d 3c 4s 5d");
        let six = solve("2h 3d 4c 5s 6d");
        assert!(wheel.loses_to(&six));
    }

    #[test]
    fn winners_with_ties() {
        let hands = [
            solve("Ah Ad Kc 7s 2d"),
            solve("Ac As Kd 7h 2c"),
            solve("Kh Kd Ac 7c 2h"),
            solve("Qh Jd 9c 7d 2s"),
        ];

        let winners = winners(&hands);
        assert_eq!(winners.len(), 2);
        assert!(winners.iter().all(|h| h.name() == "Pair"));
        assert_eq!(winners[0].description(), "Pair, A's");
    }

    #[test]
    fn winners_skip_unqualified() {
        let solver = Solver::default();
        let hands = [
            solver
                .solve_with(&["Tc", "Td", "4h", "3s", "2c"], "jacksbetter", true, Some("p1"))
                .unwrap(),
            solver
                .solve_with(&["Kc", "Qd", "8h", "3s", "2c"], "jacksbetter", true, Some("p2"))
                .unwrap(),
        ];

        assert!(!hands[0].qualifies());
        assert!(!hands[1].qualifies());
        assert!(winners(&hands).is_empty());

        let hand = solver
            .solve_with(&["Qc", "Qd", "4h", "3s", "2c"], "jacksbetter", true, Some("p3"))
            .unwrap();
        assert!(hand.qualifies());
        assert_eq!(winners(std::slice::from_ref(&hand))[0].id(), Some("p3"));
    }
}
