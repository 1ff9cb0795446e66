use serde::Serialize;

use crate::{card::Card, hand::Hand};

/// The house. Holds one hand; when to stop drawing is decided by the round.
#[derive(Clone, Debug, Default, Serialize)]
pub struct Dealer {
    hand: Hand,
}

impl Dealer {
    pub fn new<I>(cards: I) -> Self
    where
        I: IntoIterator<Item = Card>,
    {
        Dealer {
            hand: Hand::new(cards),
        }
    }

    pub fn hand(&self) -> &Hand {
        &self.hand
    }

    pub fn add_card(&mut self, card: Card) {
        self.hand.add(card);
    }

    pub fn into_hand(self) -> Hand {
        self.hand
    }
}

impl From<Hand> for Dealer {
    fn from(hand: Hand) -> Self {
        Dealer { hand }
    }
}
