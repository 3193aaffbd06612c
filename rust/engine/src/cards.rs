use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::GameError;

const RANK_CHARS: &[u8; 13] = b"23456789TJQKA";
const SUIT_CHARS: &[u8; 4] = b"CDHS";

/// Represents one of the four suits in a standard 52-card deck.
/// Discriminants are the suit index used by the card code (`rank * 10 + suit`).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Suit {
    /// Clubs suit (♣)
    Clubs = 0,
    /// Diamonds suit (♦)
    Diamonds = 1,
    /// Hearts suit (♥)
    Hearts = 2,
    /// Spades suit (♠)
    Spades = 3,
}

impl Suit {
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(v: u8) -> Option<Suit> {
        match v {
            0 => Some(Suit::Clubs),
            1 => Some(Suit::Diamonds),
            2 => Some(Suit::Hearts),
            3 => Some(Suit::Spades),
            _ => None,
        }
    }
}

/// Represents the rank (face value) of a playing card from Two through Ace.
/// Numeric values are assigned for comparison and hand evaluation purposes.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Rank {
    /// Rank 2
    Two = 2,
    /// Rank 3
    Three,
    /// Rank 4
    Four,
    /// Rank 5
    Five,
    /// Rank 6
    Six,
    /// Rank 7
    Seven,
    /// Rank 8
    Eight,
    /// Rank 9
    Nine,
    /// Rank 10
    Ten,
    /// Jack (11)
    Jack,
    /// Queen (12)
    Queen,
    /// King (13)
    King,
    /// Ace (14)
    Ace,
}

impl Rank {
    pub fn value(self) -> u8 {
        self as u8
    }

    pub fn from_u8(v: u8) -> Option<Rank> {
        match v {
            2 => Some(Rank::Two),
            3 => Some(Rank::Three),
            4 => Some(Rank::Four),
            5 => Some(Rank::Five),
            6 => Some(Rank::Six),
            7 => Some(Rank::Seven),
            8 => Some(Rank::Eight),
            9 => Some(Rank::Nine),
            10 => Some(Rank::Ten),
            11 => Some(Rank::Jack),
            12 => Some(Rank::Queen),
            13 => Some(Rank::King),
            14 => Some(Rank::Ace),
            _ => None,
        }
    }
}

/// Represents a single playing card with a suit and rank.
/// Cards are the fundamental unit of the game, used in hole cards, the board, and the deck.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct Card {
    /// The suit of the card (Clubs, Diamonds, Hearts, or Spades)
    pub suit: Suit,
    /// The rank of the card (Two through Ace)
    pub rank: Rank,
}

impl Card {
    pub fn new(rank: Rank, suit: Suit) -> Self {
        Self { suit, rank }
    }

    /// Integer code exposed to hosts: `rank * 10 + suit`.
    ///
    /// The suit index is always below 10, so the code is unambiguous.
    ///
    /// ```
    /// use holdem_engine::cards::{Card, Rank, Suit};
    ///
    /// let ace = Card::new(Rank::Ace, Suit::Spades);
    /// assert_eq!(ace.encode(), 143);
    /// assert_eq!(Card::decode(143), Ok(ace));
    /// ```
    pub fn encode(self) -> u8 {
        self.rank.value() * 10 + self.suit as u8
    }

    pub fn decode(code: u8) -> Result<Card, GameError> {
        let rank = Rank::from_u8(code / 10).ok_or(GameError::InvalidCardCode(code))?;
        let suit = Suit::from_index(code % 10).ok_or(GameError::InvalidCardCode(code))?;
        Ok(Card { suit, rank })
    }

    /// Parses the two-character form produced by `Display`, e.g. `"TD"` or `"AS"`.
    pub fn parse(s: &str) -> Option<Card> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return None;
        }
        let ri = RANK_CHARS
            .iter()
            .position(|&c| c == bytes[0].to_ascii_uppercase())?;
        let si = SUIT_CHARS
            .iter()
            .position(|&c| c == bytes[1].to_ascii_uppercase())?;
        Some(Card {
            rank: Rank::from_u8(ri as u8 + 2)?,
            suit: Suit::from_index(si as u8)?,
        })
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let r = RANK_CHARS[(self.rank.value() - 2) as usize] as char;
        let s = SUIT_CHARS[self.suit.index()] as char;
        write!(f, "{}{}", r, s)
    }
}

pub fn all_suits() -> [Suit; 4] {
    [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades]
}

pub fn all_ranks() -> [Rank; 13] {
    [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ]
}

/// All 52 cards in canonical order: suit-major, rank-ascending.
pub fn full_deck() -> Vec<Card> {
    let mut v = Vec::with_capacity(52);
    for &s in &all_suits() {
        for &r in &all_ranks() {
            v.push(Card { suit: s, rank: r });
        }
    }
    v
}
