// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker cards definitions.
use rand::prelude::*;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use thiserror::Error;

/// Face bits value used for a joker.
const JOKER_BITS: u8 = 0xE;

/// A Poker card.
///
/// A card is packed in a single byte with the following format:
///
/// ```text
///   +--------+
///   |xxssffff|
///   +--------+
///   f = face (low ace=0,deuce=1,trey=2,...,king=12,ace=13,joker=14)
///   s = suit of card (clubs=0,diamonds=1,hearts=2,spades=3)
/// ```
///
/// Jokers keep the suit found in their token, evaluators ignore it.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Card(u8);

/// A Poker card.
impl Card {
    /// Create a card given a suit and rank.
    pub fn new(rank: Rank, suit: Suit) -> Card {
        Self(rank as u8 | ((suit as u8) << 4))
    }

    /// Create a joker.
    pub fn joker(suit: Suit) -> Card {
        Self(JOKER_BITS | ((suit as u8) << 4))
    }

    /// This card unique id.
    pub fn id(&self) -> u8 {
        self.0
    }

    /// Returns the card face.
    pub fn face(&self) -> Face {
        match self.rank() {
            Some(rank) => Face::Rank(rank),
            None => Face::Joker,
        }
    }

    /// Returns the card rank, `None` for a joker.
    pub fn rank(&self) -> Option<Rank> {
        let face_bits = self.face_bits();
        if face_bits == JOKER_BITS {
            None
        } else {
            Some(Rank::from_index(face_bits as usize).expect("Valid face bits"))
        }
    }

    /// Returns the card suit.
    pub fn suit(&self) -> Suit {
        match self.suit_bits() {
            0 => Suit::Clubs,
            1 => Suit::Diamonds,
            2 => Suit::Hearts,
            _ => Suit::Spades,
        }
    }

    /// Checks if this card is a joker.
    pub fn is_joker(&self) -> bool {
        self.face_bits() == JOKER_BITS
    }

    /// Returns the face bits.
    #[inline]
    fn face_bits(&self) -> u8 {
        self.0 & 0xf
    }

    /// Returns the suit bits.
    #[inline]
    fn suit_bits(&self) -> u8 {
        (self.0 >> 4) & 0x3
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.face(), self.suit())
    }
}

impl fmt::Debug for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Card({}{})", self.face(), self.suit())
    }
}

/// Error returned when parsing a card token fails.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseCardError {
    /// The token is too short or too long.
    #[error("invalid card token {0:?}")]
    InvalidToken(String),
    /// Unknown rank character.
    #[error("invalid rank in card token {0:?}")]
    InvalidRank(String),
    /// Unknown suit character.
    #[error("invalid suit in card token {0:?}")]
    InvalidSuit(String),
}

impl FromStr for Card {
    type Err = ParseCardError;

    /// Parses a card token like `Ah`, `TD`, `10c` or `Os` (joker).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        let (face, suit) = match token.strip_prefix("10") {
            Some(suit) => ("T", suit),
            None if token.is_char_boundary(1) && token.len() > 1 => token.split_at(1),
            None => return Err(ParseCardError::InvalidToken(s.to_string())),
        };

        let mut suit_chars = suit.chars();
        let suit = match (suit_chars.next(), suit_chars.next()) {
            (Some(c), None) => {
                Suit::from_char(c).ok_or_else(|| ParseCardError::InvalidSuit(s.to_string()))?
            }
            _ => return Err(ParseCardError::InvalidToken(s.to_string())),
        };

        match face {
            "O" | "o" => Ok(Card::joker(suit)),
            _ => {
                let rank = face
                    .chars()
                    .next()
                    .and_then(Rank::from_char)
                    .ok_or_else(|| ParseCardError::InvalidRank(s.to_string()))?;
                Ok(Card::new(rank, suit))
            }
        }
    }
}

/// Card rank.
///
/// The ranks include a low ace slot below the deuce that is used when an
/// ace plays low in a straight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rank {
    /// Ace playing low.
    LowAce = 0,
    /// Deuce
    Deuce,
    /// Trey
    Trey,
    /// Four
    Four,
    /// Five
    Five,
    /// Six
    Six,
    /// Seven
    Seven,
    /// Eight
    Eight,
    /// Nine
    Nine,
    /// Ten
    Ten,
    /// Jack
    Jack,
    /// Queen
    Queen,
    /// King
    King,
    /// Ace
    Ace,
}

impl Rank {
    /// The number of rank slots including the low ace.
    pub const SLOTS: usize = 14;

    /// Returns all natural ranks from deuce to ace.
    pub fn ranks() -> impl DoubleEndedIterator<Item = Rank> {
        use Rank::*;
        [
            Deuce, Trey, Four, Five, Six, Seven, Eight, Nine, Ten, Jack, Queen, King, Ace,
        ]
        .into_iter()
    }

    /// Returns the rank for a slot index.
    pub fn from_index(index: usize) -> Option<Rank> {
        let rank = match index {
            0 => Rank::LowAce,
            1 => Rank::Deuce,
            2 => Rank::Trey,
            3 => Rank::Four,
            4 => Rank::Five,
            5 => Rank::Six,
            6 => Rank::Seven,
            7 => Rank::Eight,
            8 => Rank::Nine,
            9 => Rank::Ten,
            10 => Rank::Jack,
            11 => Rank::Queen,
            12 => Rank::King,
            13 => Rank::Ace,
            _ => return None,
        };

        Some(rank)
    }

    /// Parses a rank character.
    pub fn from_char(c: char) -> Option<Rank> {
        let rank = match c.to_ascii_uppercase() {
            '1' => Rank::LowAce,
            '2' => Rank::Deuce,
            '3' => Rank::Trey,
            '4' => Rank::Four,
            '5' => Rank::Five,
            '6' => Rank::Six,
            '7' => Rank::Seven,
            '8' => Rank::Eight,
            '9' => Rank::Nine,
            'T' => Rank::Ten,
            'J' => Rank::Jack,
            'Q' => Rank::Queen,
            'K' => Rank::King,
            'A' => Rank::Ace,
            _ => return None,
        };

        Some(rank)
    }

    /// The slot index for this rank.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Checks if this rank is an ace, high or low.
    pub fn is_ace(self) -> bool {
        matches!(self, Rank::Ace | Rank::LowAce)
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rank = match self {
            Rank::LowAce => '1',
            Rank::Deuce => '2',
            Rank::Trey => '3',
            Rank::Four => '4',
            Rank::Five => '5',
            Rank::Six => '6',
            Rank::Seven => '7',
            Rank::Eight => '8',
            Rank::Nine => '9',
            Rank::Ten => 'T',
            Rank::Jack => 'J',
            Rank::Queen => 'Q',
            Rank::King => 'K',
            Rank::Ace => 'A',
        };

        write!(f, "{rank}")
    }
}

/// A card face, a rank or a joker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Face {
    /// A ranked card.
    Rank(Rank),
    /// The joker.
    Joker,
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Face::Rank(rank) => write!(f, "{rank}"),
            Face::Joker => write!(f, "O"),
        }
    }
}

/// Card suit.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Suit {
    /// Clubs suit.
    Clubs = 0,
    /// Diamonds suit.
    Diamonds,
    /// Hearts suit.
    Hearts,
    /// Spades suit.
    Spades,
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let suit = match self {
            Suit::Clubs => 'C',
            Suit::Diamonds => 'D',
            Suit::Hearts => 'H',
            Suit::Spades => 'S',
        };

        write!(f, "{suit}")
    }
}

impl Suit {
    /// Returns all suits.
    pub fn suits() -> impl DoubleEndedIterator<Item = Suit> {
        [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades].into_iter()
    }

    /// Parses a suit character, case insensitive.
    pub fn from_char(c: char) -> Option<Suit> {
        match c.to_ascii_lowercase() {
            'c' => Some(Suit::Clubs),
            'd' => Some(Suit::Diamonds),
            'h' => Some(Suit::Hearts),
            's' => Some(Suit::Spades),
            _ => None,
        }
    }
}

/// A cards Deck
#[derive(Debug)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// The number of cards in the deck.
    pub const SIZE: usize = 52;

    /// Creates a new shuffled deck.
    pub fn new_and_shuffled<R: Rng>(rng: &mut R) -> Self {
        let mut deck = Self::default();
        deck.cards.shuffle(rng);
        deck
    }

    /// Deals a card from the deck, `None` if the deck is empty.
    pub fn deal(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Checks if the deck is empty.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Number of cards in the deck.
    pub fn count(&self) -> usize {
        self.cards.len()
    }

    /// Calls the `f` closure for each k-cards hand.
    ///
    /// Panics if k is not 2 <= k <= 7.
    pub fn for_each<F>(&self, k: usize, mut f: F)
    where
        F: FnMut(&[Card]),
    {
        assert!((2..=7).contains(&k), "2 <= k <= 7");

        let n = self.cards.len();
        if k > n {
            return;
        }

        // Indices of the current k-subset in lexicographic order.
        let mut idx = (0..k).collect::<Vec<_>>();
        let mut hand = idx.iter().map(|&i| self.cards[i]).collect::<Vec<_>>();

        loop {
            f(&hand);

            // Find the rightmost index that can move forward.
            let Some(pos) = (0..k).rev().find(|&i| idx[i] < n - k + i) else {
                break;
            };

            idx[pos] += 1;
            hand[pos] = self.cards[idx[pos]];
            for i in (pos + 1)..k {
                idx[i] = idx[i - 1] + 1;
                hand[i] = self.cards[idx[i]];
            }
        }
    }
}

impl Default for Deck {
    fn default() -> Self {
        let cards = Suit::suits()
            .flat_map(|s| Rank::ranks().map(move |r| Card::new(r, s)))
            .collect::<Vec<_>>();
        Self { cards }
    }
}

impl IntoIterator for Deck {
    type Item = Card;
    type IntoIter = std::vec::IntoIter<Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ahash::HashSet;

    #[test]
    fn card_encoding() {
        let mut cards = HashSet::default();
        let mut deck = Deck::new_and_shuffled(&mut rand::rng());

        while let Some(card) = deck.deal() {
            let rank = card.rank().unwrap();
            assert_eq!(card.id() & 0xF, rank as u8);
            assert_eq!((card.id() >> 4) & 0x3, card.suit() as u8);
            assert!(!card.is_joker());
            assert_ne!(rank, Rank::LowAce);
            cards.insert(card.id());
        }

        // Check uniquness.
        assert_eq!(cards.len(), Deck::SIZE);

        let joker = Card::joker(Suit::Spades);
        assert!(joker.is_joker());
        assert_eq!(joker.rank(), None);
        assert_eq!(joker.face(), Face::Joker);
        assert_eq!(joker.suit(), Suit::Spades);
        assert_ne!(joker, Card::joker(Suit::Hearts));
    }

    #[test]
    fn card_to_string() {
        let c = Card::new(Rank::King, Suit::Diamonds);
        assert_eq!(c.to_string(), "KD");

        let c = Card::new(Rank::Five, Suit::Spades);
        assert_eq!(c.to_string(), "5S");

        let c = Card::new(Rank::Ten, Suit::Hearts);
        assert_eq!(c.to_string(), "TH");

        let c = Card::new(Rank::LowAce, Suit::Clubs);
        assert_eq!(c.to_string(), "1C");

        let c = Card::joker(Suit::Clubs);
        assert_eq!(c.to_string(), "OC");
    }

    #[test]
    fn parse_cards() {
        let c = "Ah".parse::<Card>().unwrap();
        assert_eq!(c, Card::new(Rank::Ace, Suit::Hearts));

        let c = "TD".parse::<Card>().unwrap();
        assert_eq!(c, Card::new(Rank::Ten, Suit::Diamonds));

        let c = "10c".parse::<Card>().unwrap();
        assert_eq!(c, Card::new(Rank::Ten, Suit::Clubs));

        let c = "1s".parse::<Card>().unwrap();
        assert_eq!(c.rank(), Some(Rank::LowAce));

        let c = "Or".parse::<Card>();
        assert!(matches!(c, Err(ParseCardError::InvalidSuit(_))));

        let c = "OS".parse::<Card>().unwrap();
        assert!(c.is_joker());

        assert!(matches!("Xh".parse::<Card>(), Err(ParseCardError::InvalidRank(_))));
        assert!(matches!("A".parse::<Card>(), Err(ParseCardError::InvalidToken(_))));
        assert!(matches!("Ahh".parse::<Card>(), Err(ParseCardError::InvalidToken(_))));
        assert!(matches!("".parse::<Card>(), Err(ParseCardError::InvalidToken(_))));
    }

    #[test]
    fn parse_display_round_trip() {
        for card in Deck::default() {
            assert_eq!(card.to_string().parse::<Card>().unwrap(), card);
        }
    }

    #[test]
    fn rank_slots() {
        for index in 0..Rank::SLOTS {
            assert_eq!(Rank::from_index(index).unwrap().index(), index);
        }

        assert_eq!(Rank::from_index(Rank::SLOTS), None);
        assert_eq!(Rank::ranks().count(), 13);
        assert!(Rank::LowAce < Rank::Deuce);
        assert!(Rank::LowAce.is_ace() && Rank::Ace.is_ace());
    }

    #[test]
    fn deck_for_each() {
        let deck = Deck::default();
        assert_eq!(deck.count(), Deck::SIZE);

        let mut hands = HashSet::default();
        deck.for_each(5, |cards| {
            assert_eq!(cards.len(), 5);
            hands.insert(cards.to_owned());
        });
        assert_eq!(hands.len(), 2_598_960);

        hands.clear();
        deck.for_each(2, |cards| {
            assert_eq!(cards.len(), 2);
            hands.insert(cards.to_owned());
        });
        assert_eq!(hands.len(), 1_326);

        hands.clear();
        deck.for_each(3, |cards| {
            assert_eq!(cards.len(), 3);
            hands.insert(cards.to_owned());
        });
        assert_eq!(hands.len(), 22_100);
    }
}
