use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cards::Card;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
pub enum Category {
    HighCard = 0,
    OnePair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
}

impl Category {
    pub fn value(self) -> u8 {
        self as u8
    }

    pub fn name(self) -> &'static str {
        match self {
            Category::HighCard => "High Card",
            Category::OnePair => "One Pair",
            Category::TwoPair => "Two Pair",
            Category::ThreeOfAKind => "Three of a Kind",
            Category::Straight => "Straight",
            Category::Flush => "Flush",
            Category::FullHouse => "Full House",
            Category::FourOfAKind => "Four of a Kind",
            Category::StraightFlush => "Straight Flush",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Best five-card hand found among a set of cards.
///
/// Ordering compares `category` first, then `tiebreak` element-wise; a shorter
/// tiebreak that is a prefix of a longer one compares lower.
#[derive(Debug, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
pub struct HandEvaluation {
    pub category: Category,
    // ranks relevant to the category, most significant first
    pub tiebreak: Vec<u8>,
}

impl HandEvaluation {
    fn new(category: Category, tiebreak: Vec<u8>) -> Self {
        Self { category, tiebreak }
    }
}

/// Classifies the best five-card hand among `cards` (2 hole + 5 board at showdown).
///
/// # Examples
///
/// ```
/// use holdem_engine::cards::Card;
/// use holdem_engine::hand::{evaluate_hand, Category};
///
/// let cards: Vec<Card> = ["AS", "KS", "AH", "KD", "2H", "3S", "4C"]
///     .iter()
///     .filter_map(|s| Card::parse(s))
///     .collect();
/// let ev = evaluate_hand(&cards);
/// assert_eq!(ev.category, Category::TwoPair);
/// assert_eq!(ev.tiebreak, vec![14, 13, 4]);
/// ```
pub fn evaluate_hand(cards: &[Card]) -> HandEvaluation {
    // Count ranks and suits
    let mut rank_counts = [0u8; 15]; // 2..14 used
    let mut rank_mask: u16 = 0;
    let mut suit_counts = [0u8; 4];
    let mut by_suit_mask = [0u16; 4];
    for c in cards {
        let r = c.rank.value();
        let s = c.suit.index();
        rank_counts[r as usize] += 1;
        rank_mask |= 1 << r;
        suit_counts[s] += 1;
        by_suit_mask[s] |= 1 << r;
    }

    // At most one suit can reach five among seven cards
    let flush_mask = suit_counts
        .iter()
        .position(|&n| n >= 5)
        .map(|s| by_suit_mask[s]);

    if let Some(high) = flush_mask.and_then(straight_high_from_mask) {
        return HandEvaluation::new(Category::StraightFlush, vec![high]);
    }

    let groups = rank_groups(&rank_counts);
    let (top_count, top_rank) = groups.first().copied().unwrap_or((0, 0));

    if top_count == 4 {
        let kicker = kickers(&rank_counts, &[top_rank], 1);
        let mut tb = vec![top_rank];
        tb.extend(kicker);
        return HandEvaluation::new(Category::FourOfAKind, tb);
    }

    if top_count == 3 {
        // a second set of trips can serve as the pair
        if let Some(&(_, pair)) = groups[1..].iter().find(|&&(n, _)| n >= 2) {
            return HandEvaluation::new(Category::FullHouse, vec![top_rank, pair]);
        }
    }

    if let Some(mask) = flush_mask {
        let top5: Vec<u8> = ranks_from_mask(mask).into_iter().take(5).collect();
        return HandEvaluation::new(Category::Flush, top5);
    }

    if let Some(high) = straight_high_from_mask(rank_mask) {
        return HandEvaluation::new(Category::Straight, vec![high]);
    }

    if top_count == 3 {
        let mut tb = vec![top_rank];
        tb.extend(kickers(&rank_counts, &[top_rank], 2));
        return HandEvaluation::new(Category::ThreeOfAKind, tb);
    }

    if top_count == 2 {
        if let Some(&(2, low)) = groups.get(1) {
            let mut tb = vec![top_rank, low];
            tb.extend(kickers(&rank_counts, &[top_rank, low], 1));
            return HandEvaluation::new(Category::TwoPair, tb);
        }
        let mut tb = vec![top_rank];
        tb.extend(kickers(&rank_counts, &[top_rank], 3));
        return HandEvaluation::new(Category::OnePair, tb);
    }

    HandEvaluation::new(Category::HighCard, kickers(&rank_counts, &[], 5))
}

pub fn compare_hands(a: &HandEvaluation, b: &HandEvaluation) -> Ordering {
    match a.category.cmp(&b.category) {
        Ordering::Equal => a.tiebreak.cmp(&b.tiebreak),
        ord => ord,
    }
}

/// Indices of every evaluation not strictly beaten by another one.
///
/// `None` entries (folded seats) never win. Returns an empty vector when every
/// entry is `None`.
pub fn best_hands(evals: &[Option<HandEvaluation>]) -> Vec<usize> {
    let best = evals.iter().flatten().max_by(|a, b| compare_hands(a, b));
    let Some(best) = best else {
        return Vec::new();
    };
    evals
        .iter()
        .enumerate()
        .filter(|(_, ev)| {
            ev.as_ref()
                .is_some_and(|ev| compare_hands(ev, best) == Ordering::Equal)
        })
        .map(|(i, _)| i)
        .collect()
}

/// (count, rank) pairs sorted by count desc, then rank desc.
fn rank_groups(rank_counts: &[u8; 15]) -> Vec<(u8, u8)> {
    let mut groups: Vec<(u8, u8)> = (2..=14u8)
        .filter(|&r| rank_counts[r as usize] > 0)
        .map(|r| (rank_counts[r as usize], r))
        .collect();
    groups.sort_unstable_by(|a, b| b.cmp(a));
    groups
}

/// Highest `n` present ranks not in `exclude`, descending.
fn kickers(rank_counts: &[u8; 15], exclude: &[u8], n: usize) -> Vec<u8> {
    (2..=14u8)
        .rev()
        .filter(|&r| rank_counts[r as usize] > 0 && !exclude.contains(&r))
        .take(n)
        .collect()
}

fn ranks_from_mask(mask: u16) -> Vec<u8> {
    (2..=14u8).rev().filter(|&r| mask & (1 << r) != 0).collect()
}

fn straight_high_from_mask(mask: u16) -> Option<u8> {
    // Treat Ace as 14 and optionally as 1
    let mut m = mask;
    if (m & (1 << 14)) != 0 {
        m |= 1 << 1;
    }
    // Sliding 5-bit window from Ace(14) down to 5
    for high in (5..=14u8).rev() {
        let window = 0b11111u16 << (high - 4);
        if (m & window) == window {
            return Some(high);
        }
    }
    None
}
