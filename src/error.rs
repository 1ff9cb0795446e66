use thiserror::Error;

#[derive(Debug, Error)]
pub enum RoundError {
    #[error("Draw pile exhausted after {drawn} card(s) with dealer on {value}")]
    DrawPileExhausted { value: u8, drawn: usize },
    #[error("Unknown card rank: {0:?}")]
    UnknownRank(String),
    #[error("Invalid input: {0}")]
    InvalidInput(#[from] serde_json::Error),
}
