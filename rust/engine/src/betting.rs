use serde::{Deserialize, Serialize};

/// Represents a betting street in Texas Hold'em poker.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub enum Street {
    /// Before flop (hole cards dealt)
    Preflop,
    /// After flop (3 community cards)
    Flop,
    /// After turn (4th community card)
    Turn,
    /// After river (5th community card)
    River,
}

/// Where a hand stands in the engine's state machine.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub enum Stage {
    /// No hand dealt yet, or the last one was settled.
    Idle,
    Betting(Street),
    /// Settled by comparing hands.
    Showdown,
    /// Settled because every other seat folded.
    FoldWin,
}

impl Stage {
    pub fn street(self) -> Option<Street> {
        match self {
            Stage::Betting(s) => Some(s),
            _ => None,
        }
    }

    pub fn is_settled(self) -> bool {
        matches!(self, Stage::Showdown | Stage::FoldWin)
    }
}

/// Tracks which seats still owe an action on the current street.
///
/// Each active seat owes exactly one action per street. Turn order is not
/// enforced; `start` only fixes the rotation used to report pending seats.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BettingRound {
    street: Street,
    start: usize,
    pending: Vec<bool>,
}

impl BettingRound {
    pub fn open(street: Street, start: usize, active: &[bool]) -> Self {
        Self {
            street,
            start: start % active.len().max(1),
            pending: active.to_vec(),
        }
    }

    pub fn street(&self) -> Street {
        self.street
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn mark_acted(&mut self, seat: usize) {
        if let Some(p) = self.pending.get_mut(seat) {
            *p = false;
        }
    }

    pub fn owes(&self, seat: usize) -> bool {
        self.pending.get(seat).copied().unwrap_or(false)
    }

    /// Seats that still owe an action, in rotation order from `start`.
    pub fn pending_seats(&self) -> Vec<usize> {
        let n = self.pending.len();
        (0..n)
            .map(|i| (self.start + i) % n)
            .filter(|&seat| self.pending[seat])
            .collect()
    }

    pub fn next_to_act(&self) -> Option<usize> {
        self.pending_seats().first().copied()
    }

    pub fn is_complete(&self) -> bool {
        !self.pending.iter().any(|&p| p)
    }
}
