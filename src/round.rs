use std::collections::HashMap;

use serde::Serialize;
use tracing::{debug, trace, warn};

use crate::{card::Card, dealer::Dealer, error::RoundError, hand::Hand};

/// The dealer keeps drawing while below this total.
pub const DEALER_STANDS_ON: u8 = 17;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum WinReason {
    Blackjack,
    DealerBust,
    HigherScore,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum LossReason {
    DealerBlackjack,
    Bust,
    NotHigher,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Outcome {
    Win(WinReason),
    Lose(LossReason),
}

impl Outcome {
    pub fn is_win(&self) -> bool {
        matches!(self, Outcome::Win(_))
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::Win(_) => "win",
            Outcome::Lose(_) => "lose",
        }
    }

    pub fn reason(&self) -> &'static str {
        match self {
            Outcome::Win(WinReason::Blackjack) => "blackjack",
            Outcome::Win(WinReason::DealerBust) => "dealerBust",
            Outcome::Win(WinReason::HigherScore) => "higherScore",
            Outcome::Lose(LossReason::DealerBlackjack) => "dealerBlackjack",
            Outcome::Lose(LossReason::Bust) => "bust",
            Outcome::Lose(LossReason::NotHigher) => "notHigher",
        }
    }
}

/// Decides one player's hand against the dealer's final hand.
///
/// A dealer blackjack beats everything, including a player blackjack. A bust
/// dealer pays every standing player. Otherwise a player blackjack wins
/// outright and any other hand must beat the dealer strictly; ties go to the
/// house.
pub fn settle(player: &Hand, dealer: &Hand) -> Outcome {
    if dealer.is_blackjack() {
        return Outcome::Lose(LossReason::DealerBlackjack);
    }
    if dealer.is_bust() {
        return if player.is_bust() {
            Outcome::Lose(LossReason::Bust)
        } else {
            Outcome::Win(WinReason::DealerBust)
        };
    }
    if player.is_blackjack() {
        Outcome::Win(WinReason::Blackjack)
    } else if player.is_bust() {
        Outcome::Lose(LossReason::Bust)
    } else if player.value() > dealer.value() {
        Outcome::Win(WinReason::HigherScore)
    } else {
        Outcome::Lose(LossReason::NotHigher)
    }
}

/// One round against the house.
///
/// Building a round plays the dealer out: cards are taken from the front of
/// the draw pile until the dealer reaches [`DEALER_STANDS_ON`]. The player
/// hands are only read.
#[derive(Debug)]
pub struct Round<'a> {
    dealer: Dealer,
    players: &'a HashMap<String, Hand>,
    drawn: usize,
}

impl<'a> Round<'a> {
    /// Fails with [`RoundError::DrawPileExhausted`] when the pile runs out
    /// before the dealer reaches the threshold. The caller must supply enough
    /// cards; there is no partial round.
    pub fn new<I>(
        mut dealer: Dealer,
        players: &'a HashMap<String, Hand>,
        draw_pile: I,
    ) -> Result<Self, RoundError>
    where
        I: IntoIterator<Item = Card>,
    {
        let mut pile = draw_pile.into_iter();
        let mut drawn = 0usize;

        while dealer.hand().value() < DEALER_STANDS_ON {
            let Some(card) = pile.next() else {
                let value = dealer.hand().value();
                warn!(value, drawn, "draw pile exhausted before dealer could stand");
                return Err(RoundError::DrawPileExhausted { value, drawn });
            };
            dealer.add_card(card);
            drawn += 1;
            debug!(card = %card, value = dealer.hand().value(), "dealer draws");
        }

        debug!(
            hand = %dealer.hand(),
            value = dealer.hand().value(),
            drawn,
            "dealer stands"
        );

        Ok(Round {
            dealer,
            players,
            drawn,
        })
    }

    pub fn dealer(&self) -> &Dealer {
        &self.dealer
    }

    pub fn into_dealer(self) -> Dealer {
        self.dealer
    }

    /// Number of cards the dealer took from the pile.
    pub fn drawn(&self) -> usize {
        self.drawn
    }

    pub fn players(&self) -> &'a HashMap<String, Hand> {
        self.players
    }

    pub fn outcome(&self, name: &str) -> Option<Outcome> {
        self.players
            .get(name)
            .map(|hand| settle(hand, self.dealer.hand()))
    }

    /// Every player's outcome, sorted by name.
    pub fn outcomes(&self) -> Vec<(&'a str, Outcome)> {
        let mut outcomes: Vec<(&'a str, Outcome)> = self
            .players
            .iter()
            .map(|(name, hand)| {
                let outcome = settle(hand, self.dealer.hand());
                trace!(player = %name, hand = %hand, outcome = outcome.reason(), "settled");
                (name.as_str(), outcome)
            })
            .collect();
        outcomes.sort_unstable_by(|a, b| a.0.cmp(b.0));
        outcomes
    }

    /// Names of the winning players in ascending order. Empty when the dealer
    /// holds a blackjack.
    pub fn winners(&self) -> Vec<String> {
        self.outcomes()
            .into_iter()
            .filter(|(_, outcome)| outcome.is_win())
            .map(|(name, _)| name.to_string())
            .collect()
    }
}
