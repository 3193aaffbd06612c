#![allow(dead_code)]

use holdem_engine::cards::Card;
use holdem_engine::deck::Deck;
use holdem_engine::engine::Engine;
use holdem_engine::player::PlayerAction;

pub fn cards(s: &[&str]) -> Vec<Card> {
    s.iter()
        .map(|c| Card::parse(c).unwrap_or_else(|| panic!("bad card {c}")))
        .collect()
}

/// Session of `holes.len()` seats whose next hand deals exactly these cards.
/// Blinds are posted; seat 0 holds the button.
pub fn scripted_engine(holes: &[[&str; 2]], board: &[&str; 5]) -> Engine {
    let mut engine = Engine::new_session(holes.len()).expect("session");
    let holes: Vec<[Card; 2]> = holes
        .iter()
        .map(|h| {
            let v = cards(h);
            [v[0], v[1]]
        })
        .collect();
    let order = Deck::scripted_order(&holes, &cards(board));
    engine.new_round_stacked(&order).expect("deal");
    engine.post_blinds().expect("blinds");
    engine
}

/// Every seat still owing an action calls.
pub fn call_around(engine: &mut Engine) {
    while let Some(seat) = engine.next_to_act() {
        engine.apply_action(seat, PlayerAction::Call).expect("call");
    }
}

/// Calls every street down and deals through the river.
pub fn check_down(engine: &mut Engine) {
    call_around(engine);
    engine.deal_flop().expect("flop");
    call_around(engine);
    engine.deal_turn().expect("turn");
    call_around(engine);
    engine.deal_river().expect("river");
    call_around(engine);
}

pub fn total_chips(engine: &Engine) -> u64 {
    engine.players().iter().map(|p| p.chips() as u64).sum()
}
