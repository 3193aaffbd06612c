use serde::{Deserialize, Serialize};

/// What one seat can see of the table, with cards encoded as `rank * 10 + suit`.
///
/// Per-seat vectors are indexed by seat and cover the whole table, including
/// the observing seat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Observation {
    /// The observing seat
    pub seat: usize,
    /// Own hole cards (empty before the first deal)
    pub hole_cards: Vec<u8>,
    /// Community cards revealed so far
    pub board_cards: Vec<u8>,
    pub pot: u32,
    /// Highest commitment on the current street
    pub current_bet: u32,
    /// Own stack
    pub chips: u32,
    pub seat_chips: Vec<u32>,
    pub seat_bets: Vec<u32>,
    pub folded: Vec<bool>,
}

impl Observation {
    /// Chips the observing seat needs to add to match the current bet.
    pub fn to_call(&self) -> u32 {
        let own = self.seat_bets.get(self.seat).copied().unwrap_or(0);
        self.current_bet.saturating_sub(own)
    }

    pub fn active_seats(&self) -> usize {
        self.folded.iter().filter(|&&f| !f).count()
    }
}
