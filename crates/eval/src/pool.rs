// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Cards pool and evaluation attempts.
//!
//! A [Pool] holds the cards being solved sorted by rank and grouped by rank
//! and suit. Every evaluator works on a fresh [Attempt] that records which
//! pool cards it used and the ranks it assigned to wild cards, the pool
//! cards are never mutated.
use std::fmt;

use showdown_cards::{Card, Rank, Suit};

use crate::game::{Game, WildPolicy};

/// A card selected by an evaluator with the rank it plays as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PlayedCard {
    card: Card,
    rank: Rank,
    wild: bool,
}

impl PlayedCard {
    /// The pool card.
    pub fn card(&self) -> Card {
        self.card
    }

    /// The rank this card plays as.
    pub fn rank(&self) -> Rank {
        self.rank
    }

    /// Checks if this card is a wild card.
    pub fn is_wild(&self) -> bool {
        self.wild
    }

    /// The card token with the played rank and a lowercase suit.
    pub fn token(&self) -> String {
        let suit = self.card.suit().to_string().to_lowercase();
        format!("{}{suit}", rank_label(self.rank))
    }
}

impl fmt::Display for PlayedCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.token())
    }
}

/// Rank label used in tokens and descriptions, ten is rendered as 10.
pub fn rank_label(rank: Rank) -> String {
    match rank {
        Rank::Ten => "10".to_string(),
        rank => rank.to_string(),
    }
}

/// The cards to solve grouped by rank and suit.
#[derive(Debug)]
pub struct Pool<'g> {
    game: &'g Game,
    cards: Vec<Card>,
    wild: Vec<bool>,
    ranks: Vec<(Rank, Vec<usize>)>,
    suits: Vec<(Suit, Vec<usize>)>,
    wilds: Vec<usize>,
}

impl<'g> Pool<'g> {
    /// Creates a pool for a game.
    pub fn new(game: &'g Game, cards: &[Card]) -> Self {
        let mut naturals = cards
            .iter()
            .filter_map(|&c| if game.is_wild(c) { None } else { c.rank().map(|r| (c, r)) })
            .collect::<Vec<_>>();
        // Stable sort keeps the input order for equal ranks.
        naturals.sort_by(|a, b| b.1.cmp(&a.1));

        let mut sorted = naturals.iter().map(|&(c, _)| c).collect::<Vec<_>>();
        let num_naturals = sorted.len();
        sorted.extend(cards.iter().copied().filter(|&c| game.is_wild(c)));

        let mut ranks: Vec<(Rank, Vec<usize>)> = Vec::new();
        let mut suits: Vec<(Suit, Vec<usize>)> = Vec::new();
        for (idx, &(card, rank)) in naturals.iter().enumerate() {
            match ranks.last_mut() {
                Some((r, indices)) if *r == rank => indices.push(idx),
                _ => ranks.push((rank, vec![idx])),
            }

            match suits.iter_mut().find(|(s, _)| *s == card.suit()) {
                Some((_, indices)) => indices.push(idx),
                None => suits.push((card.suit(), vec![idx])),
            }
        }

        Self {
            game,
            wild: (0..sorted.len()).map(|idx| idx >= num_naturals).collect(),
            wilds: (num_naturals..sorted.len()).collect(),
            cards: sorted,
            ranks,
            suits,
        }
    }

    /// The game for this pool.
    pub fn game(&self) -> &'g Game {
        self.game
    }

    /// The pool cards, natural cards by rank and then wild cards.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// The number of cards in the pool.
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Checks if the pool is empty.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Natural cards indices grouped by rank, highest rank first.
    pub fn ranks(&self) -> &[(Rank, Vec<usize>)] {
        &self.ranks
    }

    /// Natural cards indices grouped by suit in order of appearance.
    pub fn suits(&self) -> &[(Suit, Vec<usize>)] {
        &self.suits
    }

    /// Wild cards indices.
    pub fn wilds(&self) -> &[usize] {
        &self.wilds
    }

    /// Checks if the card at the given index is wild.
    pub fn is_wild(&self, idx: usize) -> bool {
        self.wild[idx]
    }

    /// The natural rank of the card at the given index.
    pub fn natural_rank(&self, idx: usize) -> Option<Rank> {
        if self.wild[idx] {
            None
        } else {
            self.cards[idx].rank()
        }
    }

    /// Checks if any natural card in the pool has the given rank.
    pub fn holds(&self, rank: Rank) -> bool {
        self.ranks.iter().any(|(r, _)| *r == rank)
    }
}

/// An evaluator attempt over a pool.
#[derive(Debug)]
pub struct Attempt<'a> {
    pool: &'a Pool<'a>,
    used: Vec<bool>,
    resolved: Vec<Option<Rank>>,
    selected: Vec<usize>,
}

impl<'a> Attempt<'a> {
    /// Creates an attempt with all pool cards available.
    pub fn new(pool: &'a Pool<'a>) -> Self {
        Self {
            pool,
            used: vec![false; pool.len()],
            resolved: vec![None; pool.len()],
            selected: Vec::with_capacity(pool.len()),
        }
    }

    /// The pool for this attempt.
    pub fn pool(&self) -> &'a Pool<'a> {
        self.pool
    }

    /// The game for this attempt.
    pub fn game(&self) -> &'a Game {
        self.pool.game()
    }

    /// The number of cards selected so far.
    pub fn num_selected(&self) -> usize {
        self.selected.len()
    }

    /// Wild cards not used yet.
    pub fn free_wilds(&self) -> Vec<usize> {
        self.pool
            .wilds()
            .iter()
            .copied()
            .filter(|&idx| !self.used[idx])
            .collect()
    }

    /// Natural cards of the given rank not used yet.
    fn free_naturals(&self, rank: Rank) -> impl Iterator<Item = usize> + '_ {
        self.pool
            .ranks()
            .iter()
            .filter(move |(r, _)| *r == rank)
            .flat_map(|(_, indices)| indices.iter().copied())
            .filter(move |&idx| !self.used[idx])
    }

    /// The number of free cards that can play as the given rank.
    pub fn count(&self, rank: Rank) -> usize {
        let naturals = self.free_naturals(rank).count();
        if self.game().wild_policy.counts_as(rank) {
            naturals + self.free_wilds().len()
        } else {
            naturals
        }
    }

    /// Finds the highest rank with at least `n` free cards that is not in
    /// `skip`.
    pub fn find_group(&self, n: usize, skip: &[Rank]) -> Option<Rank> {
        (0..Rank::SLOTS)
            .rev()
            .filter_map(Rank::from_index)
            .filter(|r| !skip.contains(r))
            .find(|&r| self.count(r) >= n)
    }

    /// Checks if the pool has a pair or better.
    pub fn has_pair(&self) -> bool {
        self.find_group(2, &[]).is_some()
    }

    /// Selects `n` cards of the given rank, natural cards first.
    pub fn take_group(&mut self, rank: Rank, n: usize) -> Vec<usize> {
        let mut taken = self.free_naturals(rank).take(n).collect::<Vec<_>>();
        if taken.len() < n && self.game().wild_policy.counts_as(rank) {
            let wilds = self.free_wilds();
            taken.extend(wilds.into_iter().take(n - taken.len()));
        }

        for &idx in &taken {
            self.take(idx, rank);
        }

        taken
    }

    /// Selects a free wild card playing as the given rank.
    pub fn take_wild(&mut self, rank: Rank) -> Option<usize> {
        let idx = self.free_wilds().into_iter().next()?;
        self.take(idx, rank);
        Some(idx)
    }

    /// Selects the card at the given index playing as the given rank.
    pub fn take(&mut self, idx: usize, rank: Rank) {
        debug_assert!(!self.used[idx], "card {idx} already used");
        self.used[idx] = true;
        self.resolved[idx] = Some(rank);
        self.selected.push(idx);
    }

    /// Adds the highest free cards until the selection has `size` cards.
    ///
    /// Wild cards used as kickers play as the policy fixed rank or as the
    /// highest rank not held by the pool or by the selected cards.
    pub fn fill(&mut self, size: usize) {
        if self.selected.len() >= size {
            return;
        }

        let mut held = self
            .selected
            .iter()
            .filter_map(|&idx| self.resolved[idx])
            .collect::<Vec<_>>();

        let mut kickers = Vec::new();
        for idx in 0..self.pool.len() {
            if self.used[idx] {
                continue;
            }

            let rank = match self.pool.natural_rank(idx) {
                Some(rank) => rank,
                None => match self.game().wild_policy {
                    WildPolicy::Fixed(rank) => rank,
                    WildPolicy::Any => Rank::ranks()
                        .rev()
                        .find(|&r| !self.pool.holds(r) && !held.contains(&r))
                        .unwrap_or(Rank::Ace),
                },
            };

            held.push(rank);
            kickers.push((idx, rank));
        }

        kickers.sort_by(|a, b| b.1.cmp(&a.1));
        let needed = size - self.selected.len();
        for (idx, rank) in kickers.into_iter().take(needed) {
            self.take(idx, rank);
        }
    }

    /// Drops selected cards after the first `len`.
    pub fn truncate(&mut self, len: usize) {
        for idx in self.selected.drain(len.min(self.selected.len())..) {
            self.used[idx] = false;
            self.resolved[idx] = None;
        }
    }

    /// The selected cards in selection order.
    pub fn played(&self) -> Vec<PlayedCard> {
        self.selected
            .iter()
            .map(|&idx| {
                let card = self.pool.cards()[idx];
                PlayedCard {
                    card,
                    rank: self.resolved[idx]
                        .or_else(|| card.rank())
                        .unwrap_or(Rank::Ace),
                    wild: self.pool.is_wild(idx),
                }
            })
            .collect()
    }
}
