// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hand solver.
use ahash::AHashSet;
use log::debug;

use showdown_cards::Card;

use crate::{
    error::{Error, Result},
    eval,
    game::Game,
    hand::SolvedHand,
    pool::{Attempt, Pool},
    registry::{GameRef, Games},
};

/// Classifies cards with the rules of a game.
///
/// The solver holds no mutable state and can be shared across threads.
#[derive(Debug, Clone, Default)]
pub struct Solver {
    games: Games,
}

impl Solver {
    /// Creates a solver with the given games registry.
    pub fn new(games: Games) -> Self {
        Self { games }
    }

    /// The games registry.
    pub fn games(&self) -> &Games {
        &self.games
    }

    /// Solves card tokens.
    pub fn solve<'a, S, G>(&'a self, tokens: &[S], game: G) -> Result<SolvedHand>
    where
        S: AsRef<str>,
        G: Into<GameRef<'a>>,
    {
        self.solve_with(tokens, game, false, None)
    }

    /// Solves card tokens, checks qualification if `can_disqualify` and tags
    /// the hand with `id`.
    pub fn solve_with<'a, S, G>(
        &'a self,
        tokens: &[S],
        game: G,
        can_disqualify: bool,
        id: Option<&str>,
    ) -> Result<SolvedHand>
    where
        S: AsRef<str>,
        G: Into<GameRef<'a>>,
    {
        let cards = tokens
            .iter()
            .map(|t| t.as_ref().parse::<Card>())
            .collect::<std::result::Result<Vec<_>, _>>()?;

        let game = match game.into() {
            GameRef::Game(game) => {
                game.validate()?;
                game
            }
            name => self.games.resolve(name),
        };

        self.solve_cards(&cards, game, can_disqualify, id)
    }

    /// Solves parsed cards.
    pub fn solve_cards(
        &self,
        cards: &[Card],
        game: &Game,
        can_disqualify: bool,
        id: Option<&str>,
    ) -> Result<SolvedHand> {
        if cards.is_empty() {
            return Err(Error::Empty);
        }

        if let Some(&card) = cards.iter().find(|c| c.is_joker() && !game.is_wild(**c)) {
            return Err(Error::Joker {
                card,
                game: game.name.clone(),
            });
        }

        if game.unique_cards {
            let mut seen = AHashSet::with_capacity(cards.len());
            if let Some(&card) = cards.iter().find(|&&c| !seen.insert(c)) {
                return Err(Error::DuplicateCard(card));
            }
        }

        let mut hand = classify(cards, game)?;
        hand.id = id.map(str::to_string);
        hand.qualifies = !can_disqualify || self.qualifies(&hand, game)?;

        debug!(
            "{} {}: {} ({})",
            game.name,
            hand,
            hand.description,
            if hand.qualifies { "qualifies" } else { "disqualified" }
        );

        Ok(hand)
    }

    fn qualifies(&self, hand: &SolvedHand, game: &Game) -> Result<bool> {
        match game.lowest_qualified_cards()? {
            Some(lowest) => {
                let lowest = classify(&lowest, game)?;
                Ok(!hand.loses_to(&lowest))
            }
            None => Ok(true),
        }
    }
}

/// Runs the game cascade and returns the first match.
fn classify(cards: &[Card], game: &Game) -> Result<SolvedHand> {
    let pool = Pool::new(game, cards);
    for (pos, &hand_type) in game.hand_types.iter().enumerate() {
        let mut attempt = Attempt::new(&pool);
        if let Some(m) = eval::attempt(hand_type, &mut attempt) {
            return Ok(SolvedHand {
                id: None,
                game: game.name.clone(),
                hand_type,
                name: m.name,
                description: m.description,
                pool: pool.cards().to_vec(),
                cards: m.cards,
                rank: game.hand_types.len() - pos,
                qualifies: true,
            });
        }
    }

    Err(Error::NoMatch(game.name.clone()))
}
