// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Game rules.
//!
//! A [Game] selects the hand types a variant recognizes, their strength
//! order, and the variant parameters for wild cards, straights and
//! qualification. The presets are the games listed in [Game::PRESETS].
use serde::{Deserialize, Serialize};
use std::fmt;

use showdown_cards::{Card, Face, Rank};

use crate::error::{Error, Result};

/// A hand category recognized by an evaluator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HandType {
    /// Ace high straight flush.
    RoyalFlush,
    /// Ace high straight flush without wild cards.
    NaturalRoyalFlush,
    /// Ace high straight flush using a wild card.
    WildRoyalFlush,
    /// Five cards of the same rank.
    FiveOfAKind,
    /// Straight with all cards of the same suit.
    StraightFlush,
    /// Four of a kind with a pair or better.
    FourOfAKindPairPlus,
    /// Four cards of the same rank.
    FourOfAKind,
    /// Four wild cards.
    FourWilds,
    /// Two groups of three cards.
    TwoThreeOfAKind,
    /// Three of a kind with two pairs.
    ThreeOfAKindTwoPair,
    /// Three of a kind and a pair.
    FullHouse,
    /// Cards of the same suit.
    Flush,
    /// Consecutive ranks.
    Straight,
    /// Three cards of the same rank.
    ThreeOfAKind,
    /// Three pairs.
    ThreePair,
    /// Two pairs.
    TwoPair,
    /// One card short of a flush.
    FlushDrawNoPair,
    /// One card short of a flush with a pair.
    FlushDrawWithPair,
    /// One card short of a straight flush.
    StraightFlushDrawNoPair,
    /// One card short of a straight flush with a pair.
    StraightFlushDrawWithPair,
    /// One card short of a straight.
    StraightDrawNoPair,
    /// One card short of a straight with a pair.
    StraightDrawWithPair,
    /// Two cards of the same rank.
    OnePair,
    /// No pattern.
    HighCard,
}

impl HandType {
    /// The hand type display name.
    pub fn name(self) -> &'static str {
        match self {
            HandType::RoyalFlush => "Royal Flush",
            HandType::NaturalRoyalFlush => "Royal Flush",
            HandType::WildRoyalFlush => "Wild Royal Flush",
            HandType::FiveOfAKind => "Five of a Kind",
            HandType::StraightFlush => "Straight Flush",
            HandType::FourOfAKindPairPlus => "Four of a Kind with Pair or Better",
            HandType::FourOfAKind => "Four of a Kind",
            HandType::FourWilds => "Four Wild Cards",
            HandType::TwoThreeOfAKind => "Two Three Of a Kind",
            HandType::ThreeOfAKindTwoPair => "Three of a Kind with Two Pair",
            HandType::FullHouse => "Full House",
            HandType::Flush => "Flush",
            HandType::Straight => "Straight",
            HandType::ThreeOfAKind => "Three of a Kind",
            HandType::ThreePair => "Three Pair",
            HandType::TwoPair => "Two Pair",
            HandType::FlushDrawNoPair => "Flush Draw No Pair",
            HandType::FlushDrawWithPair => "Flush Draw With Pair",
            HandType::StraightFlushDrawNoPair => "Straight Flush Draw No Pair",
            HandType::StraightFlushDrawWithPair => "Straight Flush Draw With Pair",
            HandType::StraightDrawNoPair => "Straight Draw No Pair",
            HandType::StraightDrawWithPair => "Straight Draw With Pair",
            HandType::OnePair => "Pair",
            HandType::HighCard => "High Card",
        }
    }
}

impl fmt::Display for HandType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// How a wild card counts when it is not completing a straight or a flush.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WildPolicy {
    /// The wild card counts as any rank.
    #[default]
    Any,
    /// The wild card only counts as the given rank (the pai gow bug).
    Fixed(Rank),
}

impl WildPolicy {
    /// Checks if a wild card can join a group of the given rank.
    pub fn counts_as(self, rank: Rank) -> bool {
        match self {
            WildPolicy::Any => true,
            WildPolicy::Fixed(fixed) => fixed == rank,
        }
    }
}

/// How the A-2-3-4-5 straight ranks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WheelPolicy {
    /// The ace plays low and the wheel is the lowest straight.
    #[default]
    Lowest,
    /// The wheel ranks right below the ace high straight.
    SecondHighest,
    /// The ace never plays low.
    Off,
}

fn default_sf_qualify() -> usize {
    5
}

fn default_draw_qualify() -> usize {
    4
}

/// The rules of a game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    /// The game name.
    pub name: String,
    /// The number of cards that make a hand.
    pub cards_in_hand: usize,
    /// Hand types from the strongest to the weakest.
    pub hand_types: Vec<HandType>,
    /// The wild card face if any.
    #[serde(default)]
    pub wild: Option<Face>,
    /// How wild cards count.
    #[serde(default)]
    pub wild_policy: WildPolicy,
    /// How the wheel ranks.
    #[serde(default)]
    pub wheel_policy: WheelPolicy,
    /// The number of cards needed for a straight or a flush.
    #[serde(default = "default_sf_qualify")]
    pub sf_qualify: usize,
    /// The number of cards needed for a straight or flush draw.
    #[serde(default = "default_draw_qualify")]
    pub draw_qualify: usize,
    /// The lowest hand that qualifies when a hand can be disqualified.
    #[serde(default)]
    pub lowest_qualified: Option<Vec<String>>,
    /// Keep only the cards that define a hand.
    #[serde(default)]
    pub no_kickers: bool,
    /// Reject hands with repeated cards.
    #[serde(default)]
    pub unique_cards: bool,
}

impl Game {
    /// The name of the default game.
    pub const STANDARD: &'static str = "standard";

    /// The names of the preset games.
    pub const PRESETS: [&'static str; 14] = [
        "standard",
        "boss",
        "jacksbetter",
        "joker",
        "deuceswild",
        "threecard",
        "fourcard",
        "fourcardbonus",
        "paigowpokerfull",
        "paigowpokeralt",
        "paigowpokersf6",
        "paigowpokersf7",
        "paigowpokerhi",
        "paigowpokerlo",
    ];

    /// Returns a preset game by name.
    pub fn preset(name: &str) -> Option<Game> {
        use HandType::*;

        let standard = Game::standard();
        let paigow = Game {
            cards_in_hand: 7,
            wild: Some(Face::Joker),
            wild_policy: WildPolicy::Fixed(Rank::Ace),
            wheel_policy: WheelPolicy::SecondHighest,
            unique_cards: false,
            ..standard.clone()
        };

        let game = match name {
            "standard" => standard,
            "boss" => Game {
                hand_types: vec![
                    StraightFlush,
                    FourOfAKind,
                    FullHouse,
                    Flush,
                    StraightFlushDrawWithPair,
                    Straight,
                    StraightFlushDrawNoPair,
                    ThreeOfAKind,
                    FlushDrawWithPair,
                    StraightDrawWithPair,
                    TwoPair,
                    FlushDrawNoPair,
                    StraightDrawNoPair,
                    OnePair,
                    HighCard,
                ],
                unique_cards: false,
                ..standard
            },
            "jacksbetter" => Game {
                lowest_qualified: Some(tokens(&["Jc", "Jd", "4h", "3s", "2c"])),
                no_kickers: true,
                unique_cards: false,
                ..standard
            },
            "joker" => Game {
                hand_types: vec![
                    NaturalRoyalFlush,
                    FiveOfAKind,
                    WildRoyalFlush,
                    StraightFlush,
                    FourOfAKind,
                    FullHouse,
                    Flush,
                    Straight,
                    ThreeOfAKind,
                    TwoPair,
                    HighCard,
                ],
                wild: Some(Face::Joker),
                lowest_qualified: Some(tokens(&["4c", "3d", "3h", "2s", "2c"])),
                no_kickers: true,
                unique_cards: false,
                ..standard
            },
            "deuceswild" => Game {
                hand_types: vec![
                    NaturalRoyalFlush,
                    FourWilds,
                    WildRoyalFlush,
                    FiveOfAKind,
                    StraightFlush,
                    FourOfAKind,
                    FullHouse,
                    Flush,
                    Straight,
                    ThreeOfAKind,
                    HighCard,
                ],
                wild: Some(Face::Rank(Rank::Deuce)),
                lowest_qualified: Some(tokens(&["5c", "4d", "3h", "3s", "3c"])),
                no_kickers: true,
                unique_cards: false,
                ..standard
            },
            "threecard" => Game {
                cards_in_hand: 3,
                hand_types: vec![StraightFlush, ThreeOfAKind, Straight, Flush, OnePair, HighCard],
                sf_qualify: 3,
                draw_qualify: 2,
                lowest_qualified: Some(tokens(&["Qh", "3s", "2c"])),
                unique_cards: false,
                ..standard
            },
            "fourcard" | "fourcardbonus" => Game {
                cards_in_hand: 4,
                hand_types: vec![
                    FourOfAKind,
                    StraightFlush,
                    ThreeOfAKind,
                    Flush,
                    Straight,
                    TwoPair,
                    OnePair,
                    HighCard,
                ],
                sf_qualify: 4,
                lowest_qualified: (name == "fourcardbonus")
                    .then(|| tokens(&["Ac", "Ad", "3h", "2s"])),
                no_kickers: true,
                unique_cards: false,
                ..standard
            },
            "paigowpokerfull" => Game {
                hand_types: vec![
                    FiveOfAKind,
                    FourOfAKindPairPlus,
                    StraightFlush,
                    Flush,
                    Straight,
                    FourOfAKind,
                    TwoThreeOfAKind,
                    ThreeOfAKindTwoPair,
                    FullHouse,
                    ThreeOfAKind,
                    ThreePair,
                    TwoPair,
                    OnePair,
                    HighCard,
                ],
                ..paigow
            },
            "paigowpokeralt" => Game {
                hand_types: vec![
                    FourOfAKind,
                    FullHouse,
                    ThreeOfAKind,
                    ThreePair,
                    TwoPair,
                    OnePair,
                    HighCard,
                ],
                ..paigow
            },
            "paigowpokersf6" | "paigowpokersf7" => Game {
                hand_types: vec![StraightFlush, Flush, Straight, HighCard],
                sf_qualify: if name == "paigowpokersf6" { 6 } else { 7 },
                ..paigow
            },
            "paigowpokerhi" => Game {
                cards_in_hand: 5,
                hand_types: vec![
                    FiveOfAKind,
                    StraightFlush,
                    FourOfAKind,
                    FullHouse,
                    Flush,
                    Straight,
                    ThreeOfAKind,
                    TwoPair,
                    OnePair,
                    HighCard,
                ],
                ..paigow
            },
            "paigowpokerlo" => Game {
                cards_in_hand: 2,
                hand_types: vec![OnePair, HighCard],
                ..paigow
            },
            _ => return None,
        };

        Some(Game {
            name: name.to_string(),
            ..game
        })
    }

    /// The standard five cards game.
    pub fn standard() -> Game {
        use HandType::*;

        Game {
            name: Self::STANDARD.to_string(),
            cards_in_hand: 5,
            hand_types: vec![
                StraightFlush,
                FourOfAKind,
                FullHouse,
                Flush,
                Straight,
                ThreeOfAKind,
                TwoPair,
                OnePair,
                HighCard,
            ],
            wild: None,
            wild_policy: WildPolicy::Any,
            wheel_policy: WheelPolicy::Lowest,
            sf_qualify: default_sf_qualify(),
            draw_qualify: default_draw_qualify(),
            lowest_qualified: None,
            no_kickers: false,
            unique_cards: true,
        }
    }

    /// Checks if a card is wild in this game.
    pub fn is_wild(&self, card: Card) -> bool {
        self.wild == Some(card.face())
    }

    /// The strength of a hand type in this game, higher is stronger.
    pub fn strength(&self, hand_type: HandType) -> Option<usize> {
        self.hand_types
            .iter()
            .position(|&ht| ht == hand_type)
            .map(|pos| self.hand_types.len() - pos)
    }

    /// Parses the lowest qualifying hand.
    pub fn lowest_qualified_cards(&self) -> Result<Option<Vec<Card>>> {
        self.lowest_qualified
            .as_ref()
            .map(|tokens| tokens.iter().map(|t| t.parse::<Card>().map_err(Error::from)).collect())
            .transpose()
    }

    /// Checks that this game can classify any hand.
    pub fn validate(&self) -> Result<()> {
        let invalid = |reason: &str| Error::InvalidGame {
            name: self.name.clone(),
            reason: reason.to_string(),
        };

        if self.cards_in_hand == 0 {
            return Err(invalid("a hand needs at least one card"));
        }

        if !self.hand_types.contains(&HandType::HighCard) {
            return Err(invalid("hand types must include high card"));
        }

        if !(2..Rank::SLOTS).contains(&self.sf_qualify) {
            return Err(invalid("straight and flush length must be 2..=13"));
        }

        if self.draw_qualify == 0 || self.draw_qualify > self.sf_qualify {
            return Err(invalid("draw length must be 1..=straight length"));
        }

        if self.wild == Some(Face::Rank(Rank::LowAce)) {
            return Err(invalid("the low ace cannot be wild"));
        }

        self.lowest_qualified_cards().map_err(|e| invalid(&e.to_string()))?;

        Ok(())
    }
}

fn tokens(cards: &[&str]) -> Vec<String> {
    cards.iter().map(|s| s.to_string()).collect()
}
