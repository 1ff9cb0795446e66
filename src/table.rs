use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::{
    card::Card,
    dealer::Dealer,
    error::RoundError,
    hand::Hand,
    round::Round,
};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundInput {
    pub dealer: Vec<Card>,
    #[serde(default)]
    pub players: HashMap<String, Vec<Card>>,
    #[serde(default)]
    pub draw_pile: Vec<Card>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerReport {
    pub name: String,
    pub cards: Vec<Card>,
    pub value: u8,
    pub blackjack: bool,
    pub bust: bool,
    pub outcome: String,
    pub reason: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundReport {
    pub winners: Vec<String>,
    pub dealer_cards: Vec<Card>,
    pub dealer_value: u8,
    pub dealer_blackjack: bool,
    pub dealer_bust: bool,
    pub cards_drawn: usize,
    pub players: Vec<PlayerReport>,
}

pub fn run(input: RoundInput) -> Result<RoundReport, RoundError> {
    let players: HashMap<String, Hand> = input
        .players
        .into_iter()
        .map(|(name, cards)| (name, Hand::new(cards)))
        .collect();
    let round = Round::new(Dealer::new(input.dealer), &players, input.draw_pile)?;

    let dealer = round.dealer().hand();
    let player_reports = round
        .outcomes()
        .into_iter()
        .map(|(name, outcome)| {
            let hand = &players[name];
            PlayerReport {
                name: name.to_string(),
                cards: hand.cards().to_vec(),
                value: hand.value(),
                blackjack: hand.is_blackjack(),
                bust: hand.is_bust(),
                outcome: outcome.as_str().to_string(),
                reason: outcome.reason().to_string(),
            }
        })
        .collect();

    Ok(RoundReport {
        winners: round.winners(),
        dealer_cards: dealer.cards().to_vec(),
        dealer_value: dealer.value(),
        dealer_blackjack: dealer.is_blackjack(),
        dealer_bust: dealer.is_bust(),
        cards_drawn: round.drawn(),
        players: player_reports,
    })
}

pub fn run_json(input: &str) -> Result<String, RoundError> {
    let input: RoundInput = serde_json::from_str(input)?;
    let report = run(input)?;
    Ok(serde_json::to_string(&report)?)
}
