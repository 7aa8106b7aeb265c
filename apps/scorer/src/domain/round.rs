//! Round records: the immutable facts of one scored hand.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use ulid::Ulid;

use crate::domain::rules::{RulesConfig, Seat};
use crate::errors::domain::{DomainError, ValidationKind};

/// Stable round identity, independent of position in the history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoundId(Ulid);

impl RoundId {
    pub fn new() -> Self {
        Self(Ulid::new())
    }

    fn parse_or_new(raw: &str) -> Self {
        raw.parse().map(Self).unwrap_or_default()
    }
}

impl Default for RoundId {
    fn default() -> Self {
        Self::new()
    }
}

impl FromStr for RoundId {
    type Err = ulid::DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(Self)
    }
}

impl fmt::Display for RoundId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// How the winner closed the round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum WinMethod {
    NormalWin,
    Tongits,
    Fight,
}

impl WinMethod {
    pub const ALL: [WinMethod; 3] = [WinMethod::NormalWin, WinMethod::Tongits, WinMethod::Fight];

    pub const fn as_str(&self) -> &'static str {
        match self {
            WinMethod::NormalWin => "normalWin",
            WinMethod::Tongits => "tongits",
            WinMethod::Fight => "fight",
        }
    }
}

impl fmt::Display for WinMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WinMethod {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        WinMethod::ALL
            .into_iter()
            .find(|m| m.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                DomainError::validation(
                    ValidationKind::UnknownMethod,
                    format!("unknown win method: {s}"),
                )
            })
    }
}

/// Special cards and melds credited to the winner of a round.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SpecialCounts {
    pub king: u32,
    pub ace: u32,
    pub queen: u32,
    pub jack: u32,
    pub quadra: u32,
    pub straight: u32,
    pub multiple_melds: u32,
}

/// Everything recorded about one seat in a round.
///
/// The winner's marks are carried but never scored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeatMarks {
    /// Player failed to lay down any meld.
    pub no_meld: bool,
    /// Player contested a fight win (only read when method is `Fight`).
    pub fighter: bool,
    /// Unmelded card value (only read for fighters with deadwood counting).
    pub deadwood: u32,
    /// Player collects the quadra-upgrade bonus from the winner.
    pub quadra_upgrade_owner: bool,
}

/// One completed round, append-ordered in the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RoundRecordWire", into = "RoundRecordWire")]
pub struct RoundRecord {
    pub id: RoundId,
    /// 1-based display position; the store keeps it equal to index + 1.
    pub round_number: u32,
    pub recorded_at: Option<OffsetDateTime>,
    pub winner: Seat,
    pub method: WinMethod,
    pub special_counts: SpecialCounts,
    pub seats: Vec<SeatMarks>,
}

impl RoundRecord {
    /// Fresh record for an `n`-player session with default marks on every seat.
    pub fn new(winner: Seat, method: WinMethod, n: usize) -> Self {
        Self {
            id: RoundId::new(),
            round_number: 0,
            recorded_at: Some(OffsetDateTime::now_utc()),
            winner,
            method,
            special_counts: SpecialCounts::default(),
            seats: vec![SeatMarks::default(); n],
        }
    }

    pub fn with_specials(mut self, counts: SpecialCounts) -> Self {
        self.special_counts = counts;
        self
    }

    pub fn with_no_meld(mut self, seat: Seat) -> Self {
        self.seat_mut(seat).no_meld = true;
        self
    }

    pub fn with_fighter(mut self, seat: Seat, deadwood: u32) -> Self {
        let marks = self.seat_mut(seat);
        marks.fighter = true;
        marks.deadwood = deadwood;
        self
    }

    pub fn with_quadra_upgrade_owner(mut self, seat: Seat) -> Self {
        self.seat_mut(seat).quadra_upgrade_owner = true;
        self
    }

    /// Marks for `seat`, or defaults when the seat was never recorded.
    pub fn seat(&self, seat: Seat) -> SeatMarks {
        self.seats.get(seat).copied().unwrap_or_default()
    }

    pub fn seat_mut(&mut self, seat: Seat) -> &mut SeatMarks {
        if seat >= self.seats.len() {
            self.seats.resize(seat + 1, SeatMarks::default());
        }
        &mut self.seats[seat]
    }

    /// Check the record against the session rules and pad per-seat data to
    /// the player count. Seats past the player count are rejected.
    pub fn normalize_for(&mut self, rules: &RulesConfig) -> Result<(), DomainError> {
        let n = rules.player_count();
        if self.winner >= n {
            return Err(DomainError::validation(
                ValidationKind::WinnerOutOfRange,
                format!("winner index {} outside 0..{n}", self.winner),
            ));
        }
        if self.seats.len() > n {
            return Err(DomainError::validation(
                ValidationKind::SeatCountMismatch,
                format!("{} seats recorded for {n} players", self.seats.len()),
            ));
        }
        self.seats.resize(n, SeatMarks::default());
        Ok(())
    }
}

/// Persisted shape: per-seat data as parallel arrays, derived fields omitted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RoundRecordWire {
    /// Older snapshots carry free-form ids; anything that is not a ULID is
    /// replaced on load.
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    round_number: u32,
    #[serde(default, with = "crate::domain::snapshot::stamp")]
    recorded_at: Option<OffsetDateTime>,
    /// Older snapshots kept the record time here as Unix milliseconds.
    #[serde(
        default,
        skip_serializing,
        deserialize_with = "crate::domain::snapshot::stamp::deserialize"
    )]
    timestamp: Option<OffsetDateTime>,
    winner_index: Seat,
    method: WinMethod,
    #[serde(default)]
    special_counts: SpecialCounts,
    #[serde(default)]
    no_melds: Vec<bool>,
    #[serde(default)]
    fighters: Vec<bool>,
    #[serde(default)]
    deadwood: Vec<u32>,
    #[serde(default)]
    quadra_upgrade_owners: Vec<bool>,
}

impl From<RoundRecordWire> for RoundRecord {
    fn from(w: RoundRecordWire) -> Self {
        let n = w
            .no_melds
            .len()
            .max(w.fighters.len())
            .max(w.deadwood.len())
            .max(w.quadra_upgrade_owners.len());
        let seats = (0..n)
            .map(|i| SeatMarks {
                no_meld: w.no_melds.get(i).copied().unwrap_or(false),
                fighter: w.fighters.get(i).copied().unwrap_or(false),
                deadwood: w.deadwood.get(i).copied().unwrap_or(0),
                quadra_upgrade_owner: w.quadra_upgrade_owners.get(i).copied().unwrap_or(false),
            })
            .collect();

        RoundRecord {
            id: w.id.as_deref().map(RoundId::parse_or_new).unwrap_or_default(),
            round_number: w.round_number,
            recorded_at: w.recorded_at.or(w.timestamp),
            winner: w.winner_index,
            method: w.method,
            special_counts: w.special_counts,
            seats,
        }
    }
}

impl From<RoundRecord> for RoundRecordWire {
    fn from(r: RoundRecord) -> Self {
        RoundRecordWire {
            id: Some(r.id.to_string()),
            round_number: r.round_number,
            recorded_at: r.recorded_at,
            timestamp: None,
            winner_index: r.winner,
            method: r.method,
            special_counts: r.special_counts,
            no_melds: r.seats.iter().map(|s| s.no_meld).collect(),
            fighters: r.seats.iter().map(|s| s.fighter).collect(),
            deadwood: r.seats.iter().map(|s| s.deadwood).collect(),
            quadra_upgrade_owners: r.seats.iter().map(|s| s.quadra_upgrade_owner).collect(),
        }
    }
}
