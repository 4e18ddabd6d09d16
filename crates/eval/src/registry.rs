// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Games registry.
use ahash::AHashMap;
use log::debug;

use crate::{error::Result, game::Game};

/// A reference to a game, by name or by value.
#[derive(Debug, Clone, Copy)]
pub enum GameRef<'a> {
    /// A registered game name.
    Name(&'a str),
    /// A custom game.
    Game(&'a Game),
}

impl<'a> From<&'a str> for GameRef<'a> {
    fn from(name: &'a str) -> Self {
        GameRef::Name(name)
    }
}

impl<'a> From<&'a String> for GameRef<'a> {
    fn from(name: &'a String) -> Self {
        GameRef::Name(name.as_str())
    }
}

impl<'a> From<&'a Game> for GameRef<'a> {
    fn from(game: &'a Game) -> Self {
        GameRef::Game(game)
    }
}

/// Registered games by name.
#[derive(Debug, Clone)]
pub struct Games {
    games: AHashMap<String, Game>,
    fallback: Game,
}

impl Default for Games {
    fn default() -> Self {
        let games = Game::PRESETS
            .iter()
            .filter_map(|name| Game::preset(name))
            .map(|game| (game.name.clone(), game))
            .collect();

        Self {
            games,
            fallback: Game::standard(),
        }
    }
}

impl Games {
    /// Validates and registers a game, replacing a game with the same name.
    pub fn insert(&mut self, game: Game) -> Result<()> {
        game.validate()?;
        debug!("Registered game {}", game.name);
        self.games.insert(game.name.clone(), game);
        Ok(())
    }

    /// Returns a game by name, unknown names resolve to the standard game.
    pub fn get(&self, name: &str) -> &Game {
        match self.games.get(name) {
            Some(game) => game,
            None => {
                debug!("Unknown game {name}, using {}", Game::STANDARD);
                self.games.get(Game::STANDARD).unwrap_or(&self.fallback)
            }
        }
    }

    /// Checks if a game is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.games.contains_key(name)
    }

    /// Resolves a game reference.
    pub fn resolve<'a>(&'a self, game: GameRef<'a>) -> &'a Game {
        match game {
            GameRef::Name(name) => self.get(name),
            GameRef::Game(game) => game,
        }
    }

    /// The registered games sorted by name.
    pub fn iter(&self) -> impl Iterator<Item = &Game> {
        let mut games = self.games.values().collect::<Vec<_>>();
        games.sort_by(|a, b| a.name.cmp(&b.name));
        games.into_iter()
    }

    /// The number of registered games.
    pub fn len(&self) -> usize {
        self.games.len()
    }

    /// Checks if no games are registered.
    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Error, HandType};

    #[test]
    fn default_presets() {
        let games = Games::default();
        assert_eq!(games.len(), Game::PRESETS.len());
        assert!(games.contains("deuceswild"));
        assert_eq!(games.get("boss").draw_qualify, 4);

        let names = games.iter().map(|g| g.name.as_str()).collect::<Vec<_>>();
        let mut sorted = names.clone();
        sorted.sort();
        assert_eq!(names, sorted);
    }

    #[test]
    fn unknown_falls_back() {
        let games = Games::default();
        assert_eq!(games.get("holdem").name, Game::STANDARD);
        assert_eq!(games.resolve("holdem".into()).name, Game::STANDARD);
    }

    #[test]
    fn insert_validates() {
        let mut games = Games::default();
        let custom = Game {
            name: "twocard".to_string(),
            cards_in_hand: 2,
            hand_types: vec![HandType::OnePair, HandType::HighCard],
            ..Game::standard()
        };

        games.insert(custom.clone()).unwrap();
        assert_eq!(games.get("twocard"), &custom);

        let broken = Game {
            name: "broken".to_string(),
            hand_types: vec![],
            ..Game::standard()
        };
        assert!(matches!(
            games.insert(broken),
            Err(Error::InvalidGame { .. })
        ));
        assert!(!games.contains("broken"));
    }
}
