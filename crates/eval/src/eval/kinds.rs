// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Rank groups evaluators.
use showdown_cards::Rank;

use super::{Match, top_label};
use crate::{
    game::HandType,
    pool::{Attempt, rank_label},
};

/// A group of `n` cards of the same rank plus kickers.
pub fn of_a_kind(attempt: &mut Attempt<'_>, hand_type: HandType, n: usize) -> Option<Match> {
    let rank = attempt.find_group(n, &[])?;
    attempt.take_group(rank, n);

    let game = attempt.game();
    if !game.no_kickers {
        attempt.fill(game.cards_in_hand);
    }

    let description = format!("{}, {}'s", hand_type.name(), rank_label(rank));
    Some(Match::new(attempt, hand_type.name(), description))
}

/// Distinct rank groups of the given sizes plus kickers.
pub fn groups(attempt: &mut Attempt<'_>, hand_type: HandType, sizes: &[usize]) -> Option<Match> {
    let mut ranks: Vec<Rank> = Vec::with_capacity(sizes.len());
    for &n in sizes {
        let rank = attempt.find_group(n, &ranks)?;
        attempt.take_group(rank, n);
        ranks.push(rank);
    }

    let game = attempt.game();
    if game.no_kickers && hand_type == HandType::TwoPair {
        attempt.truncate(4);
    } else {
        attempt.fill(game.cards_in_hand);
    }

    let labels = ranks
        .iter()
        .map(|&r| format!("{}'s", rank_label(r)))
        .collect::<Vec<_>>();
    let groups = match (sizes.first(), labels.split_first()) {
        (Some(&n), Some((first, rest))) if n > 2 => {
            format!("{first} over {}", rest.join(" & "))
        }
        _ => labels.join(" & "),
    };

    let description = format!("{}, {groups}", hand_type.name());
    Some(Match::new(attempt, hand_type.name(), description))
}

/// Four wild cards playing as aces plus kickers.
pub fn four_wilds(attempt: &mut Attempt<'_>) -> Option<Match> {
    if attempt.free_wilds().len() < 4 {
        return None;
    }

    for _ in 0..4 {
        attempt.take_wild(Rank::Ace);
    }

    let game = attempt.game();
    if !game.no_kickers {
        attempt.fill(game.cards_in_hand);
    }

    let name = HandType::FourWilds.name();
    Some(Match::new(attempt, name, name.to_string()))
}

/// The highest cards, always matches.
pub fn high_card(attempt: &mut Attempt<'_>) -> Option<Match> {
    let game = attempt.game();
    attempt.fill(if game.no_kickers { 1 } else { game.cards_in_hand });

    let description = format!("{} High", top_label(attempt));
    Some(Match::new(attempt, HandType::HighCard.name(), description))
}

#[cfg(test)]
mod tests {
    use super::super::tests::{solve, tokens};
    use crate::{Game, HandType};

    #[test]
    fn pairs_and_kickers() {
        let game = Game::standard();
        let m = solve(&game, HandType::OnePair, "9c Ah 9d 4s Kd").unwrap();
        assert_eq!(m.name, "Pair");
        assert_eq!(m.description, "Pair, 9's");
        assert_eq!(tokens(&m), vec!["9c", "9d", "Ah", "Kd", "4s"]);

        let m = solve(&game, HandType::TwoPair, "9c Ah 9d 4s Ad").unwrap();
        assert_eq!(m.description, "Two Pair, A's & 9's");
        assert_eq!(tokens(&m), vec!["Ah", "Ad", "9c", "9d", "4s"]);

        assert!(solve(&game, HandType::TwoPair, "9c Ah 9d 4s Kd").is_none());
    }

    #[test]
    fn full_house() {
        let game = Game::standard();
        let m = solve(&game, HandType::FullHouse, "Tc Th 3d Td 3s").unwrap();
        assert_eq!(m.description, "Full House, 10's over 3's");
        assert_eq!(tokens(&m), vec!["10c", "10h", "10d", "3d", "3s"]);

        assert!(solve(&game, HandType::FullHouse, "Tc Th 3d Td 4s").is_none());
    }

    #[test]
    fn no_kickers() {
        let game = Game::preset("jacksbetter").unwrap();
        let m = solve(&game, HandType::OnePair, "Jc 4h Jd 3s 2c").unwrap();
        assert_eq!(tokens(&m), vec!["Jc", "Jd"]);

        let m = solve(&game, HandType::TwoPair, "Jc 4h Jd 4s 2c").unwrap();
        assert_eq!(tokens(&m), vec!["Jc", "Jd", "4h", "4s"]);

        let m = solve(&game, HandType::HighCard, "Jc 4h Qd 3s 2c").unwrap();
        assert_eq!(m.description, "Q High");
        assert_eq!(tokens(&m), vec!["Qd"]);
    }

    #[test]
    fn wild_groups() {
        let game = Game::preset("deuceswild").unwrap();
        let m = solve(&game, HandType::FiveOfAKind, "9c 9h 2d 9s 2s").unwrap();
        assert_eq!(m.description, "Five of a Kind, 9's");
        assert!(m.cards.iter().all(|c| c.rank() == showdown_cards::Rank::Nine));

        let m = solve(&game, HandType::FourWilds, "2c 2h 2d 9s 2s").unwrap();
        assert_eq!(m.description, "Four Wild Cards");
        assert_eq!(m.cards.len(), 4);

        assert!(solve(&game, HandType::FourWilds, "2c 2h 2d 9s 8s").is_none());
    }

    #[test]
    fn pai_gow_groups() {
        let game = Game::preset("paigowpokerfull").unwrap();
        let m = solve(
            &game,
            HandType::ThreeOfAKindTwoPair,
            "Kc Kh Kd 9s 9d 4c 4s",
        )
        .unwrap();
        assert_eq!(m.description, "Three of a Kind with Two Pair, K's over 9's & 4's");
        assert_eq!(m.cards.len(), 7);

        // The joker only plays as an ace.
        assert!(solve(&game, HandType::ThreeOfAKind, "Kc Kh Od 9s 8d 4c 3s").is_none());
        let m = solve(&game, HandType::OnePair, "Ac Kh Od 9s 8d 4c 3s").unwrap();
        assert_eq!(m.description, "Pair, A's");
    }

    #[test]
    fn high_card() {
        let game = Game::standard();
        let m = solve(&game, HandType::HighCard, "2c 9h Td 4s 7c").unwrap();
        assert_eq!(m.name, "High Card");
        assert_eq!(m.description, "10 High");
        assert_eq!(tokens(&m), vec!["10d", "9h", "7c", "4s", "2c"]);
    }
}
