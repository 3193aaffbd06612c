use crate::cards::Card;
use crate::errors::GameError;
use serde::{Deserialize, Serialize};

/// Wire codes for action kinds, as exchanged with hosts.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum ActionKind {
    Fold = 0,
    Call = 1,
    Raise = 2,
}

impl ActionKind {
    pub fn from_code(code: i32) -> Result<ActionKind, GameError> {
        match code {
            0 => Ok(ActionKind::Fold),
            1 => Ok(ActionKind::Call),
            2 => Ok(ActionKind::Raise),
            other => Err(GameError::InvalidActionKind(other)),
        }
    }
}

/// Represents a player action during a betting street.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum PlayerAction {
    /// Fold and forfeit the hand
    Fold,
    /// Match the street's current bet, or go all-in trying
    Call,
    /// Raise to an absolute commitment for this street
    Raise(u32),
}

impl PlayerAction {
    /// Decodes a host-supplied `(kind, amount)` pair.
    ///
    /// `amount` is only read for raises and must fit in `0..=u32::MAX`.
    ///
    /// ```
    /// use holdem_engine::player::PlayerAction;
    ///
    /// assert_eq!(PlayerAction::from_wire(2, 150), Ok(PlayerAction::Raise(150)));
    /// assert_eq!(PlayerAction::from_wire(1, -5), Ok(PlayerAction::Call));
    /// assert!(PlayerAction::from_wire(2, -5).is_err());
    /// ```
    pub fn from_wire(kind: i32, amount: i64) -> Result<PlayerAction, GameError> {
        match ActionKind::from_code(kind)? {
            ActionKind::Fold => Ok(PlayerAction::Fold),
            ActionKind::Call => Ok(PlayerAction::Call),
            ActionKind::Raise => u32::try_from(amount)
                .map(PlayerAction::Raise)
                .map_err(|_| GameError::InvalidRaiseAmount { amount }),
        }
    }

    pub fn kind(&self) -> ActionKind {
        match self {
            PlayerAction::Fold => ActionKind::Fold,
            PlayerAction::Call => ActionKind::Call,
            PlayerAction::Raise(_) => ActionKind::Raise,
        }
    }
}

/// Default starting stack size for each player in chips
pub const STARTING_STACK: u32 = 1_000;

/// One seat at the table: stack, fold flag, street commitment and hole cards.
///
/// `chips` persists across hands; everything else is cleared by
/// [`Player::reset_for_hand`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    name: String,
    chips: u32,
    folded: bool,
    current_bet: u32,
    hole: Vec<Card>,
}

impl Player {
    pub fn new(name: impl Into<String>, chips: u32) -> Self {
        Self {
            name: name.into(),
            chips,
            folded: false,
            current_bet: 0,
            hole: Vec::with_capacity(2),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn chips(&self) -> u32 {
        self.chips
    }
    pub fn is_folded(&self) -> bool {
        self.folded
    }
    pub fn current_bet(&self) -> u32 {
        self.current_bet
    }
    pub fn hole_cards(&self) -> &[Card] {
        &self.hole
    }

    pub(crate) fn set_hole(&mut self, cards: [Card; 2]) {
        self.hole.clear();
        self.hole.extend_from_slice(&cards);
    }

    pub fn reset_for_hand(&mut self) {
        self.hole.clear();
        self.folded = false;
        self.current_bet = 0;
    }

    pub fn fold(&mut self) {
        self.folded = true;
    }

    pub fn clear_bet(&mut self) {
        self.current_bet = 0;
    }

    /// Moves `amount` from the stack into this street's commitment.
    /// Callers clip `amount` to the stack beforehand.
    pub(crate) fn commit(&mut self, amount: u32) {
        debug_assert!(amount <= self.chips);
        self.chips -= amount;
        self.current_bet += amount;
    }

    pub(crate) fn add_chips(&mut self, amount: u32) -> Result<(), GameError> {
        self.chips = self
            .chips
            .checked_add(amount)
            .ok_or(GameError::ChipOverflow)?;
        Ok(())
    }
}
