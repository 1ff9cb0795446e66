use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::RoundError;

/// A card rank. Suits play no part in blackjack scoring, so a card is its rank.
///
/// Declaration order is the rank order, Ace low.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Card {
    Ace,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
}

impl Card {
    pub const ALL: [Card; 13] = [
        Card::Ace,
        Card::Two,
        Card::Three,
        Card::Four,
        Card::Five,
        Card::Six,
        Card::Seven,
        Card::Eight,
        Card::Nine,
        Card::Ten,
        Card::Jack,
        Card::Queen,
        Card::King,
    ];

    /// Base value, with the Ace counted high.
    pub fn value(self) -> u8 {
        match self {
            Card::Ace => 11,
            other => other.hard_value(),
        }
    }

    /// Value with the Ace counted as 1.
    pub fn hard_value(self) -> u8 {
        match self {
            Card::Jack | Card::Queen | Card::King => 10,
            other => other as u8 + 1,
        }
    }

    pub fn is_ace(self) -> bool {
        self == Card::Ace
    }

    pub fn is_face(self) -> bool {
        matches!(self, Card::Jack | Card::Queen | Card::King)
    }

    pub fn rank(self) -> &'static str {
        match self {
            Card::Ace => "A",
            Card::Two => "2",
            Card::Three => "3",
            Card::Four => "4",
            Card::Five => "5",
            Card::Six => "6",
            Card::Seven => "7",
            Card::Eight => "8",
            Card::Nine => "9",
            Card::Ten => "10",
            Card::Jack => "J",
            Card::Queen => "Q",
            Card::King => "K",
        }
    }
}

impl FromStr for Card {
    type Err = RoundError;

    fn from_str(rank: &str) -> Result<Self, Self::Err> {
        let card = match rank.trim().to_ascii_uppercase().as_str() {
            "A" => Card::Ace,
            "2" => Card::Two,
            "3" => Card::Three,
            "4" => Card::Four,
            "5" => Card::Five,
            "6" => Card::Six,
            "7" => Card::Seven,
            "8" => Card::Eight,
            "9" => Card::Nine,
            "10" | "T" => Card::Ten,
            "J" => Card::Jack,
            "Q" => Card::Queen,
            "K" => Card::King,
            _ => return Err(RoundError::UnknownRank(rank.to_string())),
        };
        Ok(card)
    }
}

impl TryFrom<String> for Card {
    type Error = RoundError;

    fn try_from(rank: String) -> Result<Self, Self::Error> {
        rank.parse()
    }
}

impl From<Card> for String {
    fn from(card: Card) -> Self {
        card.rank().to_string()
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.rank())
    }
}
