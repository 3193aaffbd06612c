//! # holdem-engine: Turn-Based Texas Hold'em Engine
//!
//! A Texas Hold'em hand simulator driven one call at a time by an external
//! controller (a scripted player, a reinforcement-learning loop, or a UI).
//! The engine deals, tracks betting streets, keeps a single pot and settles
//! hands; it never chooses actions itself.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (Suit, Rank, Card) and the `rank*10+suit` code
//! - [`deck`] - Seeded deck with ChaCha20 shuffling and scripted deal orders
//! - [`hand`] - Seven-card hand evaluation and hand comparison
//! - [`player`] - Seat state and externally supplied actions
//! - [`rules`] - Chip arithmetic for calls, raises and blinds (soft all-in)
//! - [`betting`] - Hand stages and the per-street action tracker
//! - [`engine`] - Session orchestration, street dealing and settlement
//! - [`state`] - Per-seat observation snapshots
//! - [`logger`] - HandRecord history and JSONL writer
//! - [`logging`] - `tracing` subscriber setup
//! - [`config`] - Table configuration from file and environment
//! - [`errors`] - Error types for game and config operations
//!
//! ## Quick Start
//!
//! ```rust
//! use holdem_engine::cards::{Card, Rank, Suit};
//! use holdem_engine::hand::{evaluate_hand, Category};
//!
//! // Evaluate a 7-card poker hand
//! let cards = [
//!     Card { suit: Suit::Hearts, rank: Rank::Ace },
//!     Card { suit: Suit::Hearts, rank: Rank::King },
//!     Card { suit: Suit::Hearts, rank: Rank::Queen },
//!     Card { suit: Suit::Hearts, rank: Rank::Jack },
//!     Card { suit: Suit::Hearts, rank: Rank::Ten },
//!     Card { suit: Suit::Clubs, rank: Rank::Two },
//!     Card { suit: Suit::Diamonds, rank: Rank::Three },
//! ];
//!
//! let ev = evaluate_hand(&cards);
//! assert_eq!(ev.category, Category::StraightFlush);
//! ```
//!
//! ## Driving a Hand
//!
//! ```rust
//! use holdem_engine::config::TableConfig;
//! use holdem_engine::engine::Engine;
//! use holdem_engine::player::PlayerAction;
//!
//! let cfg = TableConfig { seed: Some(7), ..TableConfig::default() };
//! let mut engine = Engine::from_config(&cfg).unwrap();
//! engine.start_hand().unwrap();
//!
//! while !engine.is_done() {
//!     while let Some(seat) = engine.next_to_act() {
//!         engine.apply_action(seat, PlayerAction::Call).unwrap();
//!     }
//!     match engine.board().len() {
//!         0 => engine.deal_flop().unwrap(),
//!         3 => engine.deal_turn().unwrap(),
//!         _ => engine.deal_river().unwrap(),
//!     }
//! }
//!
//! let settlement = engine.showdown().unwrap();
//! assert_eq!(settlement.pot, 100);
//! ```

pub mod betting;
pub mod cards;
pub mod config;
pub mod deck;
pub mod engine;
pub mod errors;
pub mod hand;
pub mod logger;
pub mod logging;
pub mod player;
pub mod rules;
pub mod state;
