mod helpers;

use helpers::{call_around, cards, check_down, scripted_engine};
use holdem_engine::betting::{Stage, Street};
use holdem_engine::engine::Engine;
use holdem_engine::errors::GameError;
use holdem_engine::hand::Category;
use holdem_engine::player::PlayerAction as A;

#[test]
fn showdown_trips_beat_two_pair() {
    let mut eng = scripted_engine(
        &[["AS", "KS"], ["2C", "2D"]],
        &["AH", "KD", "2H", "3S", "4C"],
    );
    check_down(&mut eng);
    assert_eq!(eng.board(), cards(&["AH", "KD", "2H", "3S", "4C"]).as_slice());
    assert!(eng.is_done());
    assert_eq!(eng.pot(), 100);

    let s = eng.showdown().expect("showdown");
    let p0 = s.evaluations[0].as_ref().unwrap();
    let p1 = s.evaluations[1].as_ref().unwrap();
    assert_eq!(p0.category, Category::TwoPair);
    assert_eq!(p0.tiebreak, vec![14, 13, 4]);
    assert_eq!(p1.category, Category::ThreeOfAKind);
    assert_eq!(s.winners, vec![1]);
    assert_eq!(s.payouts, vec![0, 100]);
    assert_eq!(eng.get_reward(), vec![0, 100]);
    assert_eq!(eng.players()[0].chips(), 950);
    assert_eq!(eng.players()[1].chips(), 1050);
    assert_eq!(eng.pot(), 0);
    assert_eq!(eng.stage(), Stage::Showdown);
}

#[test]
fn two_folds_preflop_end_the_hand() {
    let mut eng = Engine::new_session(3).unwrap();
    eng.start_hand().unwrap();
    assert_eq!(eng.next_to_act(), Some(0));
    eng.apply_action(0, A::Fold).unwrap();
    assert!(!eng.is_done());
    eng.apply_action(1, A::Fold).unwrap();
    assert!(eng.is_done());
    assert_eq!(eng.get_reward(), vec![0, 0, 75]);

    let s = eng.showdown().unwrap();
    assert_eq!(s.outcome, Stage::FoldWin);
    assert_eq!(s.winners, vec![2]);
    assert!(s.evaluations.iter().all(|e| e.is_none()));
    let chips: Vec<u32> = eng.players().iter().map(|p| p.chips()).collect();
    assert_eq!(chips, vec![1000, 975, 1025]);
    assert_eq!(eng.get_reward(), vec![0, 0, 75]);
}

#[test]
fn tied_hands_split_and_odd_chip_stays_undistributed() {
    // broadway on board plays for both seats
    let mut eng = scripted_engine(
        &[["2C", "3D"], ["4C", "5D"]],
        &["AH", "KH", "QD", "JC", "TS"],
    );
    eng.apply_action(1, A::Call).unwrap();
    eng.apply_action(0, A::Raise(51)).unwrap();
    assert_eq!(eng.pot(), 101);
    eng.deal_flop().unwrap();
    call_around(&mut eng);
    eng.deal_turn().unwrap();
    call_around(&mut eng);
    eng.deal_river().unwrap();

    let s = eng.showdown().unwrap();
    assert_eq!(s.winners, vec![0, 1]);
    assert_eq!(s.payouts, vec![50, 50]);
    assert_eq!(s.remainder, 1);
    assert_eq!(eng.players()[0].chips(), 999);
    assert_eq!(eng.players()[1].chips(), 1000);
    let info = eng.hand_record().unwrap().showdown.clone().unwrap();
    assert_eq!(info.remainder, 1);
    assert_eq!(
        info.categories,
        vec![Some(Category::Straight), Some(Category::Straight)]
    );
}

#[test]
fn blinds_follow_the_dealer() {
    let mut eng = Engine::new_session(4).unwrap();
    eng.set_dealer_pos(2).unwrap();
    eng.start_hand().unwrap();
    let st = eng.get_state(0).unwrap();
    // dealer 2: small blind from seat 3, big blind wraps to seat 0
    assert_eq!(st.seat_bets, vec![50, 0, 0, 25]);
    assert_eq!(st.seat_chips, vec![950, 1000, 1000, 975]);
    assert_eq!(st.pot, 75);
    assert_eq!(st.current_bet, 50);
    // first to act pre-flop sits after the big blind
    assert_eq!(eng.next_to_act(), Some(1));
}

#[test]
fn streets_progress_and_reset_commitments() {
    let mut eng = Engine::new_session(2).unwrap();
    eng.start_hand().unwrap();
    assert_eq!(eng.stage(), Stage::Betting(Street::Preflop));
    assert_eq!(eng.deck_remaining(), 48);
    call_around(&mut eng);

    eng.deal_flop().unwrap();
    assert_eq!(eng.stage(), Stage::Betting(Street::Flop));
    assert_eq!(eng.board().len(), 3);
    assert_eq!(eng.current_bet(), 0);
    assert!(eng.players().iter().all(|p| p.current_bet() == 0));
    // post-flop action starts after the dealer
    assert_eq!(eng.next_to_act(), Some(1));
    call_around(&mut eng);

    eng.deal_turn().unwrap();
    assert_eq!(eng.board().len(), 4);
    call_around(&mut eng);
    eng.deal_river().unwrap();
    assert_eq!(eng.board().len(), 5);
    assert_eq!(eng.stage(), Stage::Betting(Street::River));
    assert_eq!(eng.deck_remaining(), 52 - 4 - 3 - 1 - 1 - 3);
}

#[test]
fn board_of_five_is_done_before_river_betting() {
    let mut eng = Engine::new_session(2).unwrap();
    eng.start_hand().unwrap();
    call_around(&mut eng);
    eng.deal_flop().unwrap();
    call_around(&mut eng);
    eng.deal_turn().unwrap();
    call_around(&mut eng);
    eng.deal_river().unwrap();
    assert!(eng.next_to_act().is_some());
    assert!(eng.is_done());
    assert!(eng.showdown().is_ok());
}

#[test]
fn street_deal_requires_completed_betting() {
    let mut eng = Engine::new_session(2).unwrap();
    eng.start_hand().unwrap();
    assert_eq!(
        eng.deal_flop(),
        Err(GameError::BettingIncomplete {
            pending: vec![1, 0]
        })
    );
    eng.apply_action(1, A::Call).unwrap();
    assert_eq!(
        eng.deal_flop(),
        Err(GameError::BettingIncomplete { pending: vec![0] })
    );
    assert!(eng.board().is_empty());
    eng.apply_action(0, A::Call).unwrap();
    eng.deal_flop().unwrap();
}

#[test]
fn streets_must_be_dealt_in_order() {
    let mut eng = Engine::new_session(2).unwrap();
    eng.start_hand().unwrap();
    call_around(&mut eng);
    assert_eq!(eng.deal_turn(), Err(GameError::BoardComplete));
    assert_eq!(eng.deal_river(), Err(GameError::BoardComplete));
    eng.deal_flop().unwrap();
    call_around(&mut eng);
    assert_eq!(eng.deal_flop(), Err(GameError::BoardComplete));
    assert_eq!(eng.board().len(), 3);
}

#[test]
fn operations_outside_a_hand_are_rejected() {
    let mut eng = Engine::new_session(2).unwrap();
    assert_eq!(eng.stage(), Stage::Idle);
    assert_eq!(eng.apply_action(0, A::Call), Err(GameError::NoHandInProgress));
    assert_eq!(eng.deal_flop(), Err(GameError::NoHandInProgress));
    assert_eq!(eng.post_blinds(), Err(GameError::NoHandInProgress));
    assert_eq!(eng.showdown(), Err(GameError::NoHandInProgress));
    assert!(!eng.is_done());
    assert_eq!(eng.get_reward(), vec![0, 0]);
    assert_eq!(eng.next_to_act(), None);
}

#[test]
fn showdown_waits_for_the_hand_to_finish() {
    let mut eng = Engine::new_session(2).unwrap();
    eng.start_hand().unwrap();
    assert_eq!(eng.showdown(), Err(GameError::HandInProgress));
    assert_eq!(eng.get_reward(), vec![0, 0]);
}

#[test]
fn settled_hand_accepts_no_more_actions() {
    let mut eng = Engine::new_session(2).unwrap();
    eng.start_hand().unwrap();
    eng.apply_action(1, A::Fold).unwrap();
    eng.showdown().unwrap();
    assert_eq!(eng.showdown(), Err(GameError::NoHandInProgress));
    assert_eq!(eng.apply_action(0, A::Call), Err(GameError::NoHandInProgress));
}

#[test]
fn folded_seat_after_settlement_sees_no_hand() {
    let mut eng = Engine::new_session(3).unwrap();
    eng.start_hand().unwrap();
    eng.apply_action(0, A::Fold).unwrap();
    eng.apply_action(1, A::Fold).unwrap();
    eng.showdown().unwrap();
    assert!(eng.players()[0].is_folded());
    assert_eq!(eng.apply_action(0, A::Call), Err(GameError::NoHandInProgress));
}

#[test]
fn betting_round_tracks_who_owes_action() {
    let mut eng = Engine::new_session(3).unwrap();
    eng.start_hand().unwrap();
    let round = eng.betting_round().unwrap();
    assert_eq!(round.street(), Street::Preflop);
    assert!((0..3).all(|seat| round.owes(seat)));

    eng.apply_action(0, A::Call).unwrap();
    eng.apply_action(1, A::Fold).unwrap();
    let round = eng.betting_round().unwrap();
    assert!(!round.owes(0));
    assert!(!round.owes(1));
    assert!(round.owes(2));
    assert!(!eng.stage().is_settled());

    eng.apply_action(2, A::Call).unwrap();
    eng.deal_flop().unwrap();
    let round = eng.betting_round().unwrap();
    assert_eq!(round.street(), Street::Flop);
    // the folded seat owes nothing on later streets
    assert!(!round.owes(1));
    assert_eq!(round.pending_seats(), vec![2, 0]);

    eng.apply_action(2, A::Fold).unwrap();
    eng.showdown().unwrap();
    assert!(eng.stage().is_settled());
    assert!(eng.betting_round().is_none());
}

#[test]
fn dealer_advances_after_each_settled_hand() {
    let mut eng = Engine::new_session(3).unwrap();
    for expected in [0, 1, 2, 0] {
        assert_eq!(eng.dealer_pos(), expected);
        eng.start_hand().unwrap();
        let first = eng.next_to_act().unwrap();
        eng.apply_action(first, A::Fold).unwrap();
        let second = eng.next_to_act().unwrap();
        eng.apply_action(second, A::Fold).unwrap();
        eng.showdown().unwrap();
    }
}

#[test]
fn blinds_post_once_per_hand() {
    let mut eng = Engine::new_session(2).unwrap();
    eng.start_hand().unwrap();
    assert_eq!(eng.post_blinds(), Err(GameError::BlindsAlreadyPosted));
    assert_eq!(eng.pot(), 75);
}

#[test]
fn new_round_clears_previous_hand() {
    let mut eng = Engine::new_session(2).unwrap();
    eng.start_hand().unwrap();
    eng.apply_action(1, A::Fold).unwrap();
    eng.showdown().unwrap();

    eng.new_round().unwrap();
    assert_eq!(eng.stage(), Stage::Betting(Street::Preflop));
    assert!(eng.board().is_empty());
    assert_eq!(eng.pot(), 0);
    assert!(eng.settlement().is_none());
    for p in eng.players() {
        assert!(!p.is_folded());
        assert_eq!(p.current_bet(), 0);
        assert_eq!(p.hole_cards().len(), 2);
    }
}

#[test]
fn player_count_is_validated() {
    assert_eq!(
        Engine::new_session(1).err(),
        Some(GameError::InvalidPlayerCount { count: 1 })
    );
    assert_eq!(
        Engine::new_session(23).err(),
        Some(GameError::InvalidPlayerCount { count: 23 })
    );
    let mut eng = Engine::new_session(22).unwrap();
    eng.start_hand().unwrap();
    assert_eq!(eng.deck_remaining(), 52 - 44);
}

#[test]
fn full_table_can_run_to_showdown() {
    let mut eng = Engine::new_session(22).unwrap();
    eng.start_hand().unwrap();
    check_down(&mut eng);
    assert_eq!(eng.deck_remaining(), 0);
    let s = eng.showdown().unwrap();
    assert!(!s.winners.is_empty());
}
