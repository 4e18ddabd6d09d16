// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Straight and straight flush evaluators.
use showdown_cards::{Rank, Suit};

use super::{Match, Run, scan};
use crate::{
    game::{HandType, WheelPolicy},
    pool::{Attempt, Pool, rank_label},
};

/// One natural card per rank, highest rank first.
pub fn run_naturals(pool: &Pool<'_>) -> Vec<(usize, Rank)> {
    pool.ranks()
        .iter()
        .filter_map(|(rank, indices)| indices.first().map(|&idx| (idx, *rank)))
        .collect()
}

/// Selects the run cards and up to `wilds` free wild cards for its gaps.
///
/// Returns true if a wild card was placed in the run.
pub fn take_run(attempt: &mut Attempt<'_>, run: &Run, wilds: usize) -> bool {
    let mut slots = run.slots.clone();
    let free = attempt.free_wilds();
    let mut wild_in_run = false;
    for (pos, idx) in run.fill_order().into_iter().zip(free).take(wilds) {
        slots[pos].1 = Some(idx);
        wild_in_run = true;
    }

    if is_high_wheel(attempt, run) {
        // The ace leads a wheel that ranks below the ace high straight.
        if let Some((rank, idx)) = slots.pop() {
            debug_assert_eq!(rank, Rank::LowAce);
            slots.insert(0, (Rank::Ace, idx));
        }
    }

    for (rank, idx) in slots {
        if let Some(idx) = idx {
            attempt.take(idx, rank);
        }
    }

    wild_in_run
}

fn is_high_wheel(attempt: &Attempt<'_>, run: &Run) -> bool {
    attempt.game().wheel_policy == WheelPolicy::SecondHighest && run.is_wheel()
}

/// The highest run of `sf_qualify` consecutive ranks plus kickers.
pub fn straight(attempt: &mut Attempt<'_>) -> Option<Match> {
    let game = attempt.game();
    let naturals = run_naturals(attempt.pool());
    let wilds = attempt.free_wilds().len();
    let run = scan(
        &naturals,
        game.sf_qualify,
        game.sf_qualify,
        wilds,
        game.wheel_policy,
    )?;

    let high_wheel = is_high_wheel(attempt, &run);
    take_run(attempt, &run, wilds);
    if !game.no_kickers {
        attempt.fill(game.cards_in_hand);
    }

    let name = HandType::Straight.name();
    let description = if high_wheel {
        format!("{name}, Wheel")
    } else {
        let top = run.slots.first().map(|&(r, _)| rank_label(r)).unwrap_or_default();
        format!("{name}, {top} High")
    };

    Some(Match::new(attempt, name, description))
}

/// The highest run of `sf_qualify` consecutive ranks in one suit.
fn best_run(attempt: &Attempt<'_>) -> Option<(Suit, Run)> {
    let game = attempt.game();
    let pool = attempt.pool();
    let wilds = attempt.free_wilds().len();

    pool.suits()
        .iter()
        .filter_map(|(suit, indices)| {
            let naturals = indices
                .iter()
                .filter_map(|&idx| pool.natural_rank(idx).map(|r| (idx, r)))
                .collect::<Vec<_>>();
            scan(
                &naturals,
                game.sf_qualify,
                game.sf_qualify,
                wilds,
                game.wheel_policy,
            )
            .map(|run| (*suit, run))
        })
        .min_by_key(|(_, run)| run.priority)
}

/// A straight with all cards of the same suit plus kickers.
pub fn straight_flush(attempt: &mut Attempt<'_>) -> Option<Match> {
    let game = attempt.game();
    let (suit, run) = best_run(attempt)?;

    let high_wheel = is_high_wheel(attempt, &run);
    let wilds = attempt.free_wilds().len();
    let wild_in_run = take_run(attempt, &run, wilds);
    if !game.no_kickers {
        attempt.fill(game.cards_in_hand);
    }

    let royal = run.top == Rank::Ace.index();
    let (name, description) = if royal {
        let name = HandType::RoyalFlush.name();
        (name, name.to_string())
    } else {
        let name = HandType::StraightFlush.name();
        let played = attempt.played();
        let top = played
            .get(usize::from(high_wheel))
            .map(|c| rank_label(c.rank()))
            .unwrap_or_default();
        let suit = suit.to_string().to_lowercase();
        (name, format!("{name}, {top}{suit} High"))
    };

    Some(Match {
        royal,
        wild_in_run,
        ..Match::new(attempt, name, description)
    })
}

/// A royal straight flush accepted by `accept`.
pub fn royal_flush<F>(attempt: &mut Attempt<'_>, hand_type: HandType, accept: F) -> Option<Match>
where
    F: Fn(&Match) -> bool,
{
    let m = straight_flush(attempt)?;
    (m.royal && accept(&m)).then(|| Match {
        name: hand_type.name().to_string(),
        description: hand_type.name().to_string(),
        ..m
    })
}

#[cfg(test)]
mod tests {
    use super::super::tests::{solve, tokens};
    use crate::{Game, HandType};

    #[test]
    fn straights() {
        let game = Game::standard();
        let m = solve(&game, HandType::Straight, "Ah Kc Qc Jh Td").unwrap();
        assert_eq!(m.description, "Straight, A High");
        assert_eq!(tokens(&m), vec!["Ah", "Kc", "Qc", "Jh", "10d"]);

        let m = solve(&game, HandType::Straight, "Ah 2c 3c 4h 5d").unwrap();
        assert_eq!(m.description, "Straight, 5 High");
        assert_eq!(tokens(&m), vec!["5d", "4h", "3c", "2c", "1h"]);

        assert!(solve(&game, HandType::Straight, "Kh Ac 2c 3h 4d").is_none());
    }

    #[test]
    fn pai_gow_wheel() {
        let game = Game::preset("paigowpokerfull").unwrap();
        let m = solve(&game, HandType::Straight, "Ah 2c 3c 4h 5d 9s 9c").unwrap();
        assert_eq!(m.description, "Straight, Wheel");
        assert_eq!(tokens(&m), vec!["Ah", "5d", "4h", "3c", "2c", "9s", "9c"]);

        // The joker completes a straight.
        let m = solve(&game, HandType::Straight, "Kh Qc Oc Th 9d 3s 2c").unwrap();
        assert_eq!(m.description, "Straight, K High");
        assert_eq!(m.cards[2].rank(), showdown_cards::Rank::Jack);
    }

    #[test]
    fn wild_extends_straight() {
        let game = Game::preset("joker").unwrap();
        let m = solve(&game, HandType::Straight, "9h 8c 7c 6h Od").unwrap();
        assert_eq!(m.description, "Straight, 10 High");
        assert_eq!(tokens(&m), vec!["10d", "9h", "8c", "7c", "6h"]);
    }

    #[test]
    fn straight_flush() {
        let game = Game::standard();
        let m = solve(&game, HandType::StraightFlush, "Ah 2h 4h 3h 5h").unwrap();
        assert_eq!(m.name, "Straight Flush");
        assert_eq!(m.description, "Straight Flush, 5h High");
        assert!(!m.royal);

        let m = solve(&game, HandType::StraightFlush, "Ac Qc Tc Jc Kc").unwrap();
        assert_eq!(m.name, "Royal Flush");
        assert_eq!(m.description, "Royal Flush");
        assert!(m.royal);

        assert!(solve(&game, HandType::StraightFlush, "Ac Qc Tc Jc Kd").is_none());
    }

    #[test]
    fn wild_top_takes_run_suit() {
        let game = Game::preset("joker").unwrap();
        let m = solve(&game, HandType::StraightFlush, "Oc Qh Jh Th 9h").unwrap();
        assert_eq!(m.description, "Straight Flush, Kh High");
        assert_eq!(tokens(&m), vec!["Kc", "Qh", "Jh", "10h", "9h"]);
        assert!(m.wild_in_run);
    }

    #[test]
    fn royal_flushes() {
        let game = Game::preset("joker").unwrap();
        let natural = "Ah Kh Qh Jh Th";
        let wild = "Ah Kh Qh Jh Oc";

        let m = solve(&game, HandType::NaturalRoyalFlush, natural).unwrap();
        assert_eq!(m.description, "Royal Flush");
        assert!(solve(&game, HandType::WildRoyalFlush, natural).is_none());

        let m = solve(&game, HandType::WildRoyalFlush, wild).unwrap();
        assert_eq!(m.description, "Wild Royal Flush");
        assert!(m.wild_in_run);
        assert!(solve(&game, HandType::NaturalRoyalFlush, wild).is_none());

        let game = Game::standard();
        assert!(solve(&game, HandType::RoyalFlush, "Kh Qh Jh Th 9h").is_none());
    }
}
