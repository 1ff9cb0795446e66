use std::fmt;

use serde::Serialize;

use crate::card::Card;

pub const BLACKJACK: u8 = 21;

/// Scores a run of cards. Returns the total and whether an Ace is being
/// counted as 11.
///
/// Aces start at 1; a single Ace is promoted to 11 when the hard total leaves
/// room for it, so the bonus is never applied twice.
pub fn hand_value(cards: &[Card]) -> (u8, bool) {
    let mut total: u8 = 0;
    let mut has_ace = false;

    for &card in cards {
        total = total.saturating_add(card.hard_value());
        if card.is_ace() { has_ace = true; }
    }

    if has_ace && total <= 11 {
        (total + 10, true)
    } else {
        (total, false)
    }
}

pub fn is_blackjack(cards: &[Card]) -> bool {
    cards.len() == 2 && hand_value(cards).0 == BLACKJACK
}

/// Cards held by one party, in the order they were received.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    pub fn new<I>(cards: I) -> Self
    where
        I: IntoIterator<Item = Card>,
    {
        Hand {
            cards: cards.into_iter().collect(),
        }
    }

    pub fn add(&mut self, card: Card) {
        self.cards.push(card);
    }

    pub fn value(&self) -> u8 {
        hand_value(&self.cards).0
    }

    pub fn is_soft(&self) -> bool {
        hand_value(&self.cards).1
    }

    /// Two cards totalling 21. A longer 21 is just 21.
    pub fn is_blackjack(&self) -> bool {
        is_blackjack(&self.cards)
    }

    pub fn is_bust(&self) -> bool {
        self.value() > BLACKJACK
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl FromIterator<Card> for Hand {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Hand::new(iter)
    }
}

impl Extend<Card> for Hand {
    fn extend<I: IntoIterator<Item = Card>>(&mut self, iter: I) {
        self.cards.extend(iter);
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ranks: Vec<&str> = self.cards.iter().map(|c| c.rank()).collect();
        write!(f, "{}", ranks.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::Card::*;

    fn hand(cards: &[Card]) -> Hand {
        Hand::new(cards.iter().copied())
    }

    #[test]
    fn single_card_values() {
        assert_eq!(hand(&[Three]).value(), 3);
        assert_eq!(hand(&[Ten]).value(), 10);
        assert_eq!(hand(&[Jack]).value(), 10);
        assert_eq!(hand(&[Queen]).value(), 10);
        assert_eq!(hand(&[King]).value(), 10);
        assert_eq!(hand(&[Ace]).value(), 11);
        assert_eq!(Hand::default().value(), 0);
    }

    #[test]
    fn two_card_value() {
        assert_eq!(hand(&[Three, Five]).value(), 8);
    }

    #[test]
    fn ace_with_ten_valued_card_is_blackjack() {
        assert!(!hand(&[Three, Five]).is_blackjack());
        for other in [Jack, Queen, King, Ten] {
            assert!(hand(&[Ace, other]).is_blackjack());
            assert!(hand(&[other, Ace]).is_blackjack());
        }
    }

    #[test]
    fn three_card_twenty_one_is_not_blackjack() {
        let h = hand(&[Five, Six, Queen]);
        assert_eq!(h.value(), 21);
        assert!(!h.is_blackjack());
        assert!(!h.is_bust());
    }

    #[test]
    fn bust_detection() {
        assert!(!hand(&[Four, Three]).is_bust());
        assert!(!hand(&[Eight, Ten]).is_bust());
        assert!(hand(&[Four, Jack, King]).is_bust());
        assert_eq!(hand(&[Four, Jack, King]).value(), 24);
        assert!(!hand(&[Four, Two, Three]).is_bust());
        assert!(!hand(&[Ace, King]).is_bust());
    }

    #[test]
    fn ace_drops_to_one_once_hand_is_full() {
        let h = hand(&[Ten, Ace, Ten]);
        assert_eq!(h.value(), 21);
        assert!(!h.is_bust());
        assert!(!h.is_blackjack());
        assert!(!h.is_soft());
    }

    #[test]
    fn soft_bonus_is_applied_once() {
        assert_eq!(hand(&[Ace, Ace]).value(), 12);
        assert_eq!(hand(&[Ace, King, Ace]).value(), 12);
        assert_eq!(hand(&[Ace, Ace, Nine]).value(), 21);
        assert_eq!(hand(&[Three, Six, Ace, Three, Ace, King]).value(), 24);
    }

    #[test]
    fn soft_flag_tracks_promoted_ace() {
        assert_eq!(hand_value(&[Ace, Six]), (17, true));
        assert_eq!(hand_value(&[Ace, Six, King]), (17, false));
        assert_eq!(hand_value(&[Nine, Seven]), (16, false));
    }

    #[test]
    fn adding_cards_rescores() {
        let mut h = hand(&[Two, Three]);
        h.add(Ace);
        assert_eq!(h.value(), 16);
        h.add(Ten);
        assert_eq!(h.value(), 16);
        h.add(Four);
        assert_eq!(h.value(), 20);
        assert_eq!(h.cards(), &[Two, Three, Ace, Ten, Four]);
    }

    #[test]
    fn bust_and_blackjack_agree_with_value() {
        for &a in &Card::ALL {
            for &b in &Card::ALL {
                for &c in &Card::ALL {
                    let two = hand(&[a, b]);
                    assert_eq!(two.is_blackjack(), two.value() == 21);
                    let three = hand(&[a, b, c]);
                    assert_eq!(three.is_bust(), three.value() > 21);
                    assert!(!three.is_blackjack());
                }
            }
        }
    }

    #[test]
    fn displays_ranks_in_order() {
        let mut h: Hand = [Ace, Ten].into_iter().collect();
        h.extend([Two]);
        assert_eq!(h.to_string(), "A 10 2");
        assert_eq!(h.len(), 3);
    }
}
