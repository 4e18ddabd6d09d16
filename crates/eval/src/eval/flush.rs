// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Flush evaluator.
use showdown_cards::Rank;

use super::Match;
use crate::{game::HandType, pool::Attempt};

/// The best suit with at least `need` cards, wild cards included.
///
/// Each free wild card takes the highest rank missing from the suit. The
/// cards are returned as `(pool index, rank)` pairs, highest rank first.
pub fn best_suit(attempt: &Attempt<'_>, need: usize) -> Option<Vec<(usize, Rank)>> {
    let pool = attempt.pool();
    let wilds = attempt.free_wilds();

    let mut best: Option<Vec<(usize, Rank)>> = None;
    for (_, indices) in pool.suits() {
        let mut cards = indices
            .iter()
            .filter_map(|&idx| pool.natural_rank(idx).map(|r| (idx, r)))
            .collect::<Vec<_>>();

        for &idx in &wilds {
            let rank = Rank::ranks()
                .rev()
                .find(|r| cards.iter().all(|(_, held)| held != r))
                .unwrap_or(Rank::Ace);
            cards.push((idx, rank));
        }

        if cards.len() < need {
            continue;
        }

        cards.sort_by(|a, b| b.1.cmp(&a.1));
        let better = best.as_ref().is_none_or(|best| {
            let ranks = cards.iter().map(|c| c.1);
            ranks.gt(best.iter().map(|c| c.1))
        });

        if better {
            best = Some(cards);
        }
    }

    best
}

/// The highest suited cards plus kickers.
pub fn flush(attempt: &mut Attempt<'_>) -> Option<Match> {
    let game = attempt.game();
    let cards = best_suit(attempt, game.sf_qualify)?;

    for (idx, rank) in cards.into_iter().take(game.cards_in_hand) {
        attempt.take(idx, rank);
    }

    if !game.no_kickers {
        attempt.fill(game.cards_in_hand);
    }

    let played = attempt.played();
    let top = played.first().map(|c| c.token()).unwrap_or_default();
    let description = format!("{}, {top} High", HandType::Flush.name());
    Some(Match::new(attempt, HandType::Flush.name(), description))
}

#[cfg(test)]
mod tests {
    use super::super::tests::{solve, tokens};
    use crate::{Game, HandType};

    #[test]
    fn flush() {
        let game = Game::standard();
        let m = solve(&game, HandType::Flush, "Ah 5h 7h Jh 2h").unwrap();
        assert_eq!(m.description, "Flush, Ah High");
        assert_eq!(tokens(&m), vec!["Ah", "Jh", "7h", "5h", "2h"]);

        assert!(solve(&game, HandType::Flush, "Ah 5h 7h Jh 2c").is_none());
    }

    #[test]
    fn best_suit_wins() {
        let game = Game::preset("paigowpokerfull").unwrap();
        let m = solve(&game, HandType::Flush, "Kh 9h 7h 5h 3h Qc Jc").unwrap();
        assert_eq!(m.description, "Flush, Kh High");
        assert_eq!(m.cards.len(), 7);
        assert_eq!(tokens(&m)[5..], ["Qc", "Jc"]);
    }

    #[test]
    fn wild_takes_missing_rank() {
        let game = Game::preset("joker").unwrap();
        let m = solve(&game, HandType::Flush, "Ah Th 7h 4h Os").unwrap();
        assert_eq!(m.description, "Flush, Ah High");
        assert_eq!(tokens(&m), vec!["Ah", "Ks", "10h", "7h", "4h"]);
        assert!(m.cards[1].is_wild());
    }

    #[test]
    fn six_card_flush_truncated() {
        let game = Game::preset("paigowpokerhi").unwrap();
        let cards = "2d 9d Kd 4d 6d Td";
        let m = solve(&game, HandType::Flush, cards).unwrap();
        assert_eq!(tokens(&m), vec!["Kd", "10d", "9d", "6d", "4d"]);
    }
}
