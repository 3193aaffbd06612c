use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use tracing::{debug, info, warn};

use crate::betting::{BettingRound, Stage, Street};
use crate::cards::Card;
use crate::config::{TableConfig, MAX_PLAYERS};
use crate::deck::Deck;
use crate::errors::GameError;
use crate::hand::{best_hands, evaluate_hand, HandEvaluation};
use crate::logger::{format_hand_id, ActionRecord, BlindRecord, HandRecord, ShowdownInfo};
use crate::player::{Player, PlayerAction};
use crate::rules::{blind_commit, validate_action, ValidatedAction};
use crate::state::Observation;

/// Result of [`Engine::apply_action`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionOutcome {
    /// The action moved chips or folded the seat as described.
    Applied(ValidatedAction),
    /// The seat had already folded; nothing changed.
    SeatFolded,
}

/// How a finished hand pays out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settlement {
    /// `Stage::Showdown` or `Stage::FoldWin`
    pub outcome: Stage,
    pub pot: u32,
    pub payouts: Vec<u32>,
    pub winners: Vec<usize>,
    /// Per-seat evaluation, `None` for folded seats or fold wins
    pub evaluations: Vec<Option<HandEvaluation>>,
    /// Chips an uneven split leaves undistributed
    pub remainder: u32,
}

/// Turn-based Texas Hold'em session driven one call at a time by an external
/// controller.
///
/// The engine never picks actions. A hand runs as:
/// [`new_round`](Engine::new_round) → [`post_blinds`](Engine::post_blinds) →
/// one [`apply_action`](Engine::apply_action) per active seat →
/// [`deal_flop`](Engine::deal_flop) → actions → turn → actions → river →
/// [`showdown`](Engine::showdown) once [`is_done`](Engine::is_done).
///
/// # Examples
///
/// ```
/// use holdem_engine::engine::Engine;
/// use holdem_engine::player::PlayerAction;
///
/// let mut engine = Engine::new_session(3).unwrap();
/// engine.start_hand().unwrap();
///
/// // seat 0 deals, seats 1 and 2 post blinds; seat 0 acts first
/// engine.apply_action(0, PlayerAction::Fold).unwrap();
/// engine.apply_action(1, PlayerAction::Fold).unwrap();
/// assert!(engine.is_done());
///
/// let reward = engine.get_reward();
/// assert_eq!(reward, vec![0, 0, 75]);
/// ```
#[derive(Debug)]
pub struct Engine {
    /// The deck used for dealing cards
    deck: Deck,
    /// Draws one deck seed per hand
    rng: ChaCha20Rng,
    session_seed: u64,
    players: Vec<Player>,
    /// Community cards on the board (up to 5 cards: flop, turn, river)
    board: Vec<Card>,
    dealer_pos: usize,
    small_blind: u32,
    big_blind: u32,
    pot: u32,
    /// Highest commitment on the current street
    current_bet: u32,
    stage: Stage,
    round: Option<BettingRound>,
    blinds_posted: bool,
    settlement: Option<Settlement>,
    record: Option<HandRecord>,
    hand_seq: u32,
}

impl Engine {
    /// Fresh session with default stacks and blinds, dealer at seat 0.
    pub fn new_session(num_players: usize) -> Result<Self, GameError> {
        Self::from_config(&TableConfig::with_players(num_players))
    }

    pub fn from_config(cfg: &TableConfig) -> Result<Self, GameError> {
        if !(2..=MAX_PLAYERS).contains(&cfg.num_players) {
            return Err(GameError::InvalidPlayerCount {
                count: cfg.num_players,
            });
        }
        cfg.validate().map_err(|e| GameError::InvalidConfig(e.to_string()))?;
        let seed = cfg.seed.unwrap_or_else(rand::random);
        let players = (0..cfg.num_players)
            .map(|i| Player::new(format!("Player {i}"), cfg.starting_stack))
            .collect();
        info!(
            players = cfg.num_players,
            stack = cfg.starting_stack,
            seed,
            "session created"
        );
        Ok(Self {
            deck: Deck::new_with_seed(seed),
            rng: ChaCha20Rng::seed_from_u64(seed),
            session_seed: seed,
            players,
            board: Vec::with_capacity(5),
            dealer_pos: 0,
            small_blind: cfg.small_blind,
            big_blind: cfg.big_blind,
            pot: 0,
            current_bet: 0,
            stage: Stage::Idle,
            round: None,
            blinds_posted: false,
            settlement: None,
            record: None,
            hand_seq: 0,
        })
    }

    pub fn num_players(&self) -> usize {
        self.players.len()
    }
    pub fn players(&self) -> &[Player] {
        &self.players
    }
    pub fn player(&self, seat: usize) -> Result<&Player, GameError> {
        self.check_seat(seat)?;
        Ok(&self.players[seat])
    }
    pub fn board(&self) -> &[Card] {
        &self.board
    }
    pub fn pot(&self) -> u32 {
        self.pot
    }
    pub fn current_bet(&self) -> u32 {
        self.current_bet
    }
    pub fn stage(&self) -> Stage {
        self.stage
    }
    pub fn dealer_pos(&self) -> usize {
        self.dealer_pos
    }
    pub fn small_blind(&self) -> u32 {
        self.small_blind
    }
    pub fn big_blind(&self) -> u32 {
        self.big_blind
    }
    pub fn deck_remaining(&self) -> usize {
        self.deck.remaining()
    }
    pub fn betting_round(&self) -> Option<&BettingRound> {
        self.round.as_ref()
    }
    pub fn settlement(&self) -> Option<&Settlement> {
        self.settlement.as_ref()
    }
    /// History of the current (or last settled) hand.
    pub fn hand_record(&self) -> Option<&HandRecord> {
        self.record.as_ref()
    }

    /// Seed the session was created with. Per-hand deck seeds derive from it.
    pub fn session_seed(&self) -> u64 {
        self.session_seed
    }

    pub fn set_dealer_pos(&mut self, seat: usize) -> Result<(), GameError> {
        self.check_seat(seat)?;
        self.dealer_pos = seat;
        Ok(())
    }

    /// Shuffles a fresh deck, clears the table and deals two hole cards per seat.
    ///
    /// The deck seed is drawn from the session RNG and stored in the hand
    /// record, so [`Engine::new_round_seeded`] can replay the deal.
    pub fn new_round(&mut self) -> Result<(), GameError> {
        let hand_seed = self.rng.random::<u64>();
        self.new_round_seeded(hand_seed)
    }

    /// Like [`Engine::new_round`], but shuffling with the given deck seed.
    pub fn new_round_seeded(&mut self, seed: u64) -> Result<(), GameError> {
        self.deck.reseed(seed);
        self.deck.shuffle();
        self.begin_hand(Some(seed))
    }

    /// Like [`Engine::new_round`], but dealing `top` first in the given order.
    /// See [`Deck::scripted_order`] for building a replay order.
    pub fn new_round_stacked(&mut self, top: &[Card]) -> Result<(), GameError> {
        self.deck.restack(top);
        self.begin_hand(None)
    }

    /// [`Engine::new_round`] followed by [`Engine::post_blinds`].
    pub fn start_hand(&mut self) -> Result<(), GameError> {
        self.new_round()?;
        self.post_blinds()
    }

    fn begin_hand(&mut self, seed: Option<u64>) -> Result<(), GameError> {
        let n = self.players.len();
        self.deck.ensure(2 * n)?;
        if self.pot > 0 {
            warn!(pot = self.pot, "discarding chips left in the pot");
        }
        self.board.clear();
        self.pot = 0;
        self.current_bet = 0;
        for p in &mut self.players {
            p.reset_for_hand();
        }
        // one card per seat per pass
        let dealt = self.deck.deal_n(2 * n)?;
        for (i, p) in self.players.iter_mut().enumerate() {
            p.set_hole([dealt[i], dealt[i + n]]);
        }
        self.stage = Stage::Betting(Street::Preflop);
        self.round = Some(BettingRound::open(
            Street::Preflop,
            self.dealer_pos + 3,
            &self.active_mask(),
        ));
        self.blinds_posted = false;
        self.settlement = None;
        self.hand_seq += 1;
        let date = chrono::Utc::now().format("%Y%m%d").to_string();
        self.record = Some(HandRecord::new(
            format_hand_id(&date, self.hand_seq),
            seed,
            self.dealer_pos,
        ));
        info!(hand = self.hand_seq, dealer = self.dealer_pos, "hand started");
        Ok(())
    }

    /// Small blind from the seat after the dealer, big blind from the one
    /// after that. Short stacks post what they have.
    pub fn post_blinds(&mut self) -> Result<(), GameError> {
        if self.stage != Stage::Betting(Street::Preflop) {
            return Err(if self.stage.street().is_some() {
                GameError::BlindsAlreadyPosted
            } else {
                GameError::NoHandInProgress
            });
        }
        if self.blinds_posted {
            return Err(GameError::BlindsAlreadyPosted);
        }
        let n = self.players.len();
        let sb_seat = (self.dealer_pos + 1) % n;
        let bb_seat = (self.dealer_pos + 2) % n;
        let sb = blind_commit(self.players[sb_seat].chips(), self.small_blind);
        let bb = blind_commit(self.players[bb_seat].chips(), self.big_blind);
        let pot = self
            .pot
            .checked_add(sb)
            .and_then(|p| p.checked_add(bb))
            .ok_or(GameError::ChipOverflow)?;

        self.players[sb_seat].commit(sb);
        self.players[bb_seat].commit(bb);
        self.pot = pot;
        self.current_bet = self.big_blind;
        self.blinds_posted = true;
        if let Some(rec) = &mut self.record {
            rec.blinds.push(BlindRecord {
                seat: sb_seat,
                amount: sb,
            });
            rec.blinds.push(BlindRecord {
                seat: bb_seat,
                amount: bb,
            });
        }
        debug!(sb_seat, sb, bb_seat, bb, "blinds posted");
        Ok(())
    }

    /// Applies one externally chosen action for `seat`.
    ///
    /// Actions on a folded seat are ignored and reported as
    /// [`ActionOutcome::SeatFolded`]. Outside a betting street every seat,
    /// folded or not, gets [`GameError::NoHandInProgress`]. Turn order is the
    /// caller's responsibility; see [`Engine::next_to_act`].
    pub fn apply_action(
        &mut self,
        seat: usize,
        action: PlayerAction,
    ) -> Result<ActionOutcome, GameError> {
        self.check_seat(seat)?;
        let street = self.stage.street().ok_or(GameError::NoHandInProgress)?;
        if self.players[seat].is_folded() {
            debug!(seat, ?action, "ignoring action on folded seat");
            return Ok(ActionOutcome::SeatFolded);
        }

        let p = &self.players[seat];
        let validated = validate_action(p.chips(), p.current_bet(), self.current_bet, action)?;
        let commit = match validated {
            ValidatedAction::Fold => 0,
            ValidatedAction::Call { commit, .. } | ValidatedAction::Raise { commit, .. } => commit,
        };
        let pot = self.pot.checked_add(commit).ok_or(GameError::ChipOverflow)?;

        match validated {
            ValidatedAction::Fold => self.players[seat].fold(),
            ValidatedAction::Call { commit, .. } => self.players[seat].commit(commit),
            ValidatedAction::Raise { to, commit, .. } => {
                self.players[seat].commit(commit);
                self.current_bet = to;
            }
        }
        self.pot = pot;
        if let Some(round) = &mut self.round {
            round.mark_acted(seat);
        }
        if let Some(rec) = &mut self.record {
            rec.actions.push(ActionRecord {
                seat,
                street,
                action,
                committed: commit,
            });
        }
        debug!(seat, ?street, ?validated, pot = self.pot, "action applied");
        Ok(ActionOutcome::Applied(validated))
    }

    /// First seat, in rotation order, that still owes an action this street.
    pub fn next_to_act(&self) -> Option<usize> {
        self.stage.street()?;
        self.round.as_ref()?.next_to_act()
    }

    /// Burns one card and reveals three.
    pub fn deal_flop(&mut self) -> Result<(), GameError> {
        self.deal_street(Street::Flop, 0, 3)
    }

    /// Burns one card and reveals one.
    pub fn deal_turn(&mut self) -> Result<(), GameError> {
        self.deal_street(Street::Turn, 3, 1)
    }

    /// Burns one card and reveals one.
    pub fn deal_river(&mut self) -> Result<(), GameError> {
        self.deal_street(Street::River, 4, 1)
    }

    fn deal_street(&mut self, street: Street, expected: usize, reveal: usize) -> Result<(), GameError> {
        if self.stage.street().is_none() {
            return Err(GameError::NoHandInProgress);
        }
        if self.board.len() != expected {
            return Err(GameError::BoardComplete);
        }
        if let Some(round) = &self.round {
            if !round.is_complete() {
                return Err(GameError::BettingIncomplete {
                    pending: round.pending_seats(),
                });
            }
        }
        self.deck.ensure(1 + reveal)?;

        self.deck.burn()?;
        let cards = self.deck.deal_n(reveal)?;
        self.board.extend_from_slice(&cards);
        if let Some(rec) = &mut self.record {
            rec.board.extend_from_slice(&cards);
        }

        // a new street starts with no commitments
        self.current_bet = 0;
        for p in &mut self.players {
            p.clear_bet();
        }
        self.stage = Stage::Betting(street);
        self.round = Some(BettingRound::open(
            street,
            self.dealer_pos + 1,
            &self.active_mask(),
        ));
        debug!(?street, board = ?self.board, "street dealt");
        Ok(())
    }

    pub fn active_players(&self) -> usize {
        self.players.iter().filter(|p| !p.is_folded()).count()
    }

    /// True once at most one seat is left, or the board holds five cards.
    ///
    /// River betting need not have been applied for this to turn true.
    pub fn is_done(&self) -> bool {
        self.active_players() <= 1 || self.board.len() == 5
    }

    /// Settles a finished hand: pays the winners, empties the pot and moves
    /// the dealer button one seat.
    pub fn showdown(&mut self) -> Result<Settlement, GameError> {
        if self.stage.street().is_none() {
            return Err(GameError::NoHandInProgress);
        }
        if !self.is_done() {
            return Err(GameError::HandInProgress);
        }
        let settlement = self.compute_settlement();

        // check every credit before moving any chips
        let credited = self
            .players
            .iter()
            .zip(&settlement.payouts)
            .map(|(p, &amount)| p.chips().checked_add(amount).map(|_| amount))
            .collect::<Option<Vec<u32>>>()
            .ok_or(GameError::ChipOverflow)?;
        for (p, amount) in self.players.iter_mut().zip(credited) {
            p.add_chips(amount)?;
        }

        self.pot = 0;
        self.stage = settlement.outcome;
        self.round = None;
        self.dealer_pos = (self.dealer_pos + 1) % self.players.len();
        if settlement.remainder > 0 {
            warn!(
                remainder = settlement.remainder,
                winners = settlement.winners.len(),
                "uneven split left chips undistributed"
            );
        }
        info!(
            outcome = ?settlement.outcome,
            winners = ?settlement.winners,
            pot = settlement.pot,
            "hand settled"
        );
        if let Some(rec) = &mut self.record {
            rec.payouts = settlement.payouts.clone();
            rec.outcome = Some(settlement.outcome);
            if settlement.outcome == Stage::Showdown {
                rec.showdown = Some(ShowdownInfo {
                    winners: settlement.winners.clone(),
                    categories: settlement
                        .evaluations
                        .iter()
                        .map(|ev| ev.as_ref().map(|ev| ev.category))
                        .collect(),
                    remainder: settlement.remainder,
                });
            }
        }
        self.settlement = Some(settlement.clone());
        Ok(settlement)
    }

    /// Per-seat payout for the current hand.
    ///
    /// After [`Engine::showdown`] this is what was paid. Before it, a finished
    /// hand reports what showdown would pay, and an unfinished one all zeros.
    pub fn get_reward(&self) -> Vec<u32> {
        if let Some(s) = &self.settlement {
            return s.payouts.clone();
        }
        if self.stage.street().is_some() && self.is_done() {
            return self.compute_settlement().payouts;
        }
        vec![0; self.players.len()]
    }

    fn compute_settlement(&self) -> Settlement {
        let n = self.players.len();
        let mut payouts = vec![0u32; n];
        let active: Vec<usize> = (0..n).filter(|&i| !self.players[i].is_folded()).collect();

        if active.len() <= 1 {
            for &i in &active {
                payouts[i] = self.pot;
            }
            return Settlement {
                outcome: Stage::FoldWin,
                pot: self.pot,
                payouts,
                winners: active.clone(),
                evaluations: vec![None; n],
                // nobody left to pay when every seat folded
                remainder: if active.is_empty() { self.pot } else { 0 },
            };
        }

        let evaluations: Vec<Option<HandEvaluation>> = self
            .players
            .iter()
            .map(|p| {
                if p.is_folded() {
                    return None;
                }
                let mut cards = p.hole_cards().to_vec();
                cards.extend_from_slice(&self.board);
                Some(evaluate_hand(&cards))
            })
            .collect();
        let winners = best_hands(&evaluations);
        let count = winners.len().max(1) as u32;
        let share = self.pot / count;
        for &i in &winners {
            payouts[i] = share;
        }
        Settlement {
            outcome: Stage::Showdown,
            pot: self.pot,
            payouts,
            winners,
            evaluations,
            remainder: self.pot % count,
        }
    }

    /// Snapshot of the table as seen from `seat`.
    pub fn get_state(&self, seat: usize) -> Result<Observation, GameError> {
        self.check_seat(seat)?;
        let p = &self.players[seat];
        Ok(Observation {
            seat,
            hole_cards: p.hole_cards().iter().map(|c| c.encode()).collect(),
            board_cards: self.board.iter().map(|c| c.encode()).collect(),
            pot: self.pot,
            current_bet: self.current_bet,
            chips: p.chips(),
            seat_chips: self.players.iter().map(|p| p.chips()).collect(),
            seat_bets: self.players.iter().map(|p| p.current_bet()).collect(),
            folded: self.players.iter().map(|p| p.is_folded()).collect(),
        })
    }

    pub fn reset_pot(&mut self) {
        self.pot = 0;
    }

    /// Zeroes every seat's street commitment. The table's current bet is kept.
    pub fn reset_bets(&mut self) {
        for p in &mut self.players {
            p.clear_bet();
        }
    }

    /// Credits `amount` chips to `seat` outside of settlement.
    pub fn award(&mut self, seat: usize, amount: u32) -> Result<(), GameError> {
        self.check_seat(seat)?;
        self.players[seat].add_chips(amount)?;
        debug!(seat, amount, "chips awarded");
        Ok(())
    }

    fn check_seat(&self, seat: usize) -> Result<(), GameError> {
        if seat >= self.players.len() {
            return Err(GameError::InvalidSeatIndex {
                seat,
                seats: self.players.len(),
            });
        }
        Ok(())
    }

    fn active_mask(&self) -> Vec<bool> {
        self.players.iter().map(|p| !p.is_folded()).collect()
    }
}
