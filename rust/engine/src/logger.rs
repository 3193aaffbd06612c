use serde::{Deserialize, Serialize};

use crate::betting::{Stage, Street};
use crate::cards::Card;
use crate::hand::Category;
use crate::player::PlayerAction;

/// Records a single applied action.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct ActionRecord {
    pub seat: usize,
    /// The betting street when this action occurred
    pub street: Street,
    pub action: PlayerAction,
    /// Chips actually moved to the pot after clipping
    pub committed: u32,
}

/// A posted blind.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub struct BlindRecord {
    pub seat: usize,
    pub amount: u32,
}

/// Complete record of one hand: blinds, actions, board and settlement.
/// Serialized to JSONL format for hand history storage and replay.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct HandRecord {
    /// Unique identifier for this hand (format: YYYYMMDD-NNNNNN)
    pub hand_id: String,
    /// Deck seed of this hand, replayable with `Engine::new_round_seeded`
    /// (None when the deck was stacked by the caller)
    pub seed: Option<u64>,
    pub dealer: usize,
    #[serde(default)]
    pub blinds: Vec<BlindRecord>,
    /// Chronological list of all applied actions
    pub actions: Vec<ActionRecord>,
    /// Community cards on the board (up to 5 cards)
    pub board: Vec<Card>,
    /// Per-seat payouts, filled at settlement
    #[serde(default)]
    pub payouts: Vec<u32>,
    /// `Showdown` or `FoldWin` once settled
    #[serde(default)]
    pub outcome: Option<Stage>,
    /// Timestamp when the hand was written (RFC3339 format)
    #[serde(default)]
    pub ts: Option<String>,
    /// Showdown information if hand went to showdown
    #[serde(default)]
    pub showdown: Option<ShowdownInfo>,
}

impl HandRecord {
    pub fn new(hand_id: String, seed: Option<u64>, dealer: usize) -> Self {
        Self {
            hand_id,
            seed,
            dealer,
            blinds: Vec::new(),
            actions: Vec::new(),
            board: Vec::new(),
            payouts: Vec::new(),
            outcome: None,
            ts: None,
            showdown: None,
        }
    }
}

/// Information about the showdown phase when hands are revealed.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct ShowdownInfo {
    /// Seats that split the pot
    pub winners: Vec<usize>,
    /// Per-seat category, `None` for folded seats
    pub categories: Vec<Option<Category>>,
    /// Chips left in the pot by an uneven split
    #[serde(default)]
    pub remainder: u32,
}

pub fn format_hand_id(yyyymmdd: &str, seq: u32) -> String {
    format!("{}-{:06}", yyyymmdd, seq)
}

use chrono::{SecondsFormat, Utc};
use std::fs::{create_dir_all, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

/// Appends [`HandRecord`]s to a JSON-lines file.
pub struct HandLogger<W: Write = std::fs::File> {
    writer: BufWriter<W>,
    date: String,
    seq: u32,
}

impl HandLogger {
    pub fn create<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        if let Some(parent) = path.as_ref().parent() {
            if !parent.as_os_str().is_empty() {
                create_dir_all(parent)?;
            }
        }
        let f = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self {
            writer: BufWriter::new(f),
            date: Utc::now().format("%Y%m%d").to_string(),
            seq: 0,
        })
    }
}

impl<W: Write> HandLogger<W> {
    pub fn from_writer(w: W) -> Self {
        Self {
            writer: BufWriter::new(w),
            date: Utc::now().format("%Y%m%d").to_string(),
            seq: 0,
        }
    }

    pub fn next_id(&mut self) -> String {
        self.seq += 1;
        format_hand_id(&self.date, self.seq)
    }

    pub fn write(&mut self, record: &HandRecord) -> std::io::Result<()> {
        // inject timestamp if missing
        let mut rec = record.clone();
        if rec.ts.is_none() {
            rec.ts = Some(Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true));
        }
        let line = serde_json::to_string(&rec).map_err(std::io::Error::other)?;
        self.writer.write_all(line.as_bytes())?;
        self.writer.write_all(b"\n")?;
        self.writer.flush()?;
        tracing::debug!(hand_id = %rec.hand_id, "hand record written");
        Ok(())
    }
}
