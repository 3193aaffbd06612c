use crate::errors::GameError;
use crate::player::PlayerAction as A;

/// Chip movement an action resolves to, computed before anything is mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidatedAction {
    Fold,
    /// `commit` chips move to the pot; `all_in` when the stack could not cover
    /// the full call.
    Call { commit: u32, all_in: bool },
    /// The seat's street commitment becomes `to`, moving `commit` chips.
    Raise { to: u32, commit: u32, all_in: bool },
}

/// Resolves an action against a seat's stack and the street's high-water mark.
///
/// Amounts above what the seat can afford are clipped to its stack (soft
/// all-in); shortage is never an error. There is no minimum raise size.
///
/// # Arguments
///
/// * `chips` - Seat's remaining stack
/// * `seat_bet` - What the seat already committed this street
/// * `table_bet` - The street's current bet
/// * `action` - The requested action
///
/// # Errors
///
/// - [`GameError::ChipOverflow`] - `chips + seat_bet` does not fit in `u32`
/// - [`GameError::RaiseBelowCommitment`] - a raise target below `seat_bet`
///
/// # Examples
///
/// ```
/// use holdem_engine::rules::{validate_action, ValidatedAction};
/// use holdem_engine::player::PlayerAction;
///
/// // Short call goes all-in
/// let r = validate_action(30, 0, 50, PlayerAction::Call);
/// assert_eq!(r, Ok(ValidatedAction::Call { commit: 30, all_in: true }));
///
/// // Raise beyond the stack is clipped to chips + seat_bet
/// let r = validate_action(100, 50, 50, PlayerAction::Raise(1_000));
/// assert_eq!(r, Ok(ValidatedAction::Raise { to: 150, commit: 100, all_in: true }));
/// ```
pub fn validate_action(
    chips: u32,
    seat_bet: u32,
    table_bet: u32,
    action: A,
) -> Result<ValidatedAction, GameError> {
    match action {
        A::Fold => Ok(ValidatedAction::Fold),
        A::Call => {
            let owed = table_bet.saturating_sub(seat_bet);
            let commit = owed.min(chips);
            Ok(ValidatedAction::Call {
                commit,
                all_in: owed > 0 && owed >= chips,
            })
        }
        A::Raise(amount) => {
            let max = chips.checked_add(seat_bet).ok_or(GameError::ChipOverflow)?;
            let to = amount.min(max);
            if to < seat_bet {
                return Err(GameError::RaiseBelowCommitment {
                    amount,
                    committed: seat_bet,
                });
            }
            Ok(ValidatedAction::Raise {
                to,
                commit: to - seat_bet,
                all_in: to == max,
            })
        }
    }
}

/// Chips a seat actually posts for a blind of `amount`.
pub fn blind_commit(chips: u32, amount: u32) -> u32 {
    amount.min(chips)
}
