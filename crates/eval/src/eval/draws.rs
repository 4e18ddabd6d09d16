// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Draw evaluators.
//!
//! A draw is a hand one card short of a flush or a straight, a straight draw
//! is open ended when its cards are consecutive with no ace, otherwise it is
//! a gutshot.
use super::{
    Match, Run,
    flush::best_suit,
    runs,
    straight::{run_naturals, take_run},
    top_label,
};
use crate::{game::HandType, pool::Attempt};

/// A suit with at least `draw_qualify` cards.
pub fn flush_draw(attempt: &mut Attempt<'_>, hand_type: HandType, pair: bool) -> Option<Match> {
    if pair && !attempt.has_pair() {
        return None;
    }

    let game = attempt.game();
    let cards = best_suit(attempt, game.draw_qualify)?;
    take_suited(attempt, cards);

    let description = format!("{}, {} High", hand_type.name(), top_token(attempt));
    Some(Match::new(attempt, hand_type.name(), description))
}

/// A window of `sf_qualify` ranks holding at least `draw_qualify` cards.
pub fn straight_draw(attempt: &mut Attempt<'_>, hand_type: HandType, pair: bool) -> Option<Match> {
    if pair && !attempt.has_pair() {
        return None;
    }

    let game = attempt.game();
    let (run, wilds) = find_draw(attempt)?;
    take_run(attempt, &run, wilds);
    attempt.fill(game.cards_in_hand);

    let name = draw_name(hand_type, is_open_ended(&run, wilds));
    let description = format!("{name}, {} High", top_label(attempt));
    Some(Match::new(attempt, name, description))
}

/// A suit with at least `draw_qualify` cards and a straight draw.
///
/// The suited cards and the straight draw are checked independently, the
/// straight draw may use cards of any suit.
pub fn straight_flush_draw(
    attempt: &mut Attempt<'_>,
    hand_type: HandType,
    pair: bool,
) -> Option<Match> {
    if pair && !attempt.has_pair() {
        return None;
    }

    let game = attempt.game();
    let suited = best_suit(attempt, game.draw_qualify)?;
    let suit = suited
        .first()
        .map(|&(idx, _)| attempt.pool().cards()[idx].suit().to_string().to_lowercase())
        .unwrap_or_default();

    let (run, wilds) = find_draw(attempt)?;
    take_run(attempt, &run, wilds);
    attempt.fill(game.cards_in_hand);

    let name = draw_name(hand_type, is_open_ended(&run, wilds));
    let description = format!("{name}, {}{suit} High", top_label(attempt));
    Some(Match::new(attempt, name, description))
}

/// Finds the best straight draw and the wild cards needed to complete it.
///
/// The highest window wins unless a lower one is open ended.
fn find_draw(attempt: &Attempt<'_>) -> Option<(Run, usize)> {
    let game = attempt.game();
    let naturals = run_naturals(attempt.pool());
    let free = attempt.free_wilds().len();
    let with_wilds = |run: Run| {
        let wilds = game.draw_qualify.saturating_sub(run.present()).min(free);
        (run, wilds)
    };

    let mut candidates = runs(
        &naturals,
        game.sf_qualify,
        game.draw_qualify,
        free,
        game.wheel_policy,
    )
    .map(with_wilds);

    let best = candidates.next()?;
    if is_open_ended(&best.0, best.1) {
        return Some(best);
    }

    candidates
        .find(|(run, wilds)| is_open_ended(run, *wilds))
        .or(Some(best))
}

fn take_suited(attempt: &mut Attempt<'_>, cards: Vec<(usize, showdown_cards::Rank)>) {
    let size = attempt.game().cards_in_hand;
    for (idx, rank) in cards.into_iter().take(size) {
        attempt.take(idx, rank);
    }

    attempt.fill(size);
}

fn top_token(attempt: &Attempt<'_>) -> String {
    attempt
        .played()
        .first()
        .map(|c| c.token())
        .unwrap_or_default()
}

fn draw_name(hand_type: HandType, open_ended: bool) -> String {
    if open_ended {
        hand_type.name().to_string()
    } else {
        format!("Gutshot {}", hand_type.name())
    }
}

/// Checks if the run cards, with `wilds` wild cards in its gaps, are
/// consecutive and have no ace.
fn is_open_ended(run: &Run, wilds: usize) -> bool {
    let mut occupied = run
        .slots
        .iter()
        .enumerate()
        .filter_map(|(pos, (_, idx))| idx.map(|_| pos))
        .chain(run.fill_order().into_iter().take(wilds))
        .collect::<Vec<_>>();
    occupied.sort_unstable();

    let consecutive = match (occupied.first(), occupied.last()) {
        (Some(first), Some(last)) => last - first + 1 == occupied.len(),
        _ => false,
    };

    consecutive && occupied.iter().all(|&pos| !run.slots[pos].0.is_ace())
}
