use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use crate::cards::{full_deck, Card};
use crate::errors::GameError;

/// A 52-card deck dealt from the end of its sequence.
///
/// Each deck owns its RNG, so two decks built from the same seed shuffle identically.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
    rng: ChaCha20Rng,
    seed: u64,
}

impl Deck {
    pub fn new_with_seed(seed: u64) -> Self {
        let rng = ChaCha20Rng::seed_from_u64(seed);
        // Keep canonical order until shuffle is called explicitly
        Self {
            cards: full_deck(),
            rng,
            seed,
        }
    }

    /// Builds a deck whose first deals are `top`, in order, followed by the
    /// remaining cards of a full deck. Used to replay or script a hand.
    pub fn stacked(top: &[Card]) -> Self {
        let mut deck = Self::new_with_seed(0);
        deck.restack(top);
        deck
    }

    /// Reorders a full deck so that `top` is dealt first, keeping the RNG.
    ///
    /// Duplicate cards in `top` are dealt only once.
    pub fn restack(&mut self, top: &[Card]) {
        let mut order: Vec<Card> = Vec::with_capacity(52);
        for &c in top {
            if !order.contains(&c) {
                order.push(c);
            }
        }
        for c in full_deck() {
            if !order.contains(&c) {
                order.push(c);
            }
        }
        // dealing pops from the end
        order.reverse();
        self.cards = order;
    }

    /// Deal order that hands each seat `holes[seat]` and reveals `board`
    /// street by street, with unused cards filling the burn slots.
    ///
    /// Feed the result to [`Deck::restack`] to replay a known hand.
    pub fn scripted_order(holes: &[[Card; 2]], board: &[Card]) -> Vec<Card> {
        let mut order: Vec<Card> = Vec::with_capacity(52);
        for pass in 0..2 {
            order.extend(holes.iter().map(|h| h[pass]));
        }
        let mut fillers = full_deck()
            .into_iter()
            .filter(|c| !board.contains(c) && !holes.iter().any(|h| h.contains(c)));
        for (i, &c) in board.iter().enumerate() {
            // a burn precedes the flop, the turn and the river
            if i == 0 || i >= 3 {
                order.extend(fillers.next());
            }
            order.push(c);
        }
        order
    }

    /// Restores a full canonical deck with a fresh RNG seeded from `seed`.
    pub fn reseed(&mut self, seed: u64) {
        self.rng = ChaCha20Rng::seed_from_u64(seed);
        self.seed = seed;
        self.cards = full_deck();
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Permutes the current contents in place.
    pub fn shuffle(&mut self) {
        self.cards.shuffle(&mut self.rng);
    }

    pub fn deal(&mut self) -> Result<Card, GameError> {
        self.cards.pop().ok_or(GameError::DeckExhausted {
            needed: 1,
            remaining: 0,
        })
    }

    /// Deals `n` cards, or none at all if fewer than `n` remain.
    pub fn deal_n(&mut self, n: usize) -> Result<Vec<Card>, GameError> {
        self.ensure(n)?;
        let at = self.cards.len() - n;
        let mut dealt = self.cards.split_off(at);
        dealt.reverse();
        Ok(dealt)
    }

    pub fn burn(&mut self) -> Result<(), GameError> {
        self.deal().map(|_| ())
    }

    pub fn ensure(&self, needed: usize) -> Result<(), GameError> {
        if self.cards.len() < needed {
            return Err(GameError::DeckExhausted {
                needed,
                remaining: self.cards.len(),
            });
        }
        Ok(())
    }

    /// Restores all 52 cards in canonical order.
    pub fn reset(&mut self) {
        self.cards = full_deck();
    }

    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}
