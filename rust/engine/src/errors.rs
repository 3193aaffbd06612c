use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("Deck exhausted: need {needed} card(s), {remaining} remaining")]
    DeckExhausted { needed: usize, remaining: usize },
    #[error("Invalid seat index {seat} (table has {seats} seats)")]
    InvalidSeatIndex { seat: usize, seats: usize },
    #[error("Invalid player count {count}: must be between 2 and 22")]
    InvalidPlayerCount { count: usize },
    #[error("Unknown action kind {0}")]
    InvalidActionKind(i32),
    #[error("Invalid raise amount: {amount}")]
    InvalidRaiseAmount { amount: i64 },
    #[error("Raise to {amount} is below the {committed} already committed this street")]
    RaiseBelowCommitment { amount: u32, committed: u32 },
    #[error("Chip arithmetic overflow")]
    ChipOverflow,
    #[error("Invalid card code {0}")]
    InvalidCardCode(u8),
    #[error("No hand in progress")]
    NoHandInProgress,
    #[error("Hand still in progress")]
    HandInProgress,
    #[error("Betting street incomplete, seats still to act: {pending:?}")]
    BettingIncomplete { pending: Vec<usize> },
    #[error("Street already dealt or dealt out of order")]
    BoardComplete,
    #[error("Blinds already posted this hand")]
    BlindsAlreadyPosted,
    #[error("Invalid table config: {0}")]
    InvalidConfig(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}
