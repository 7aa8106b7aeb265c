//! Round drafts: an in-progress round as entered, before validation.

use serde::{Deserialize, Serialize};

use crate::domain::round::{RoundRecord, SeatMarks, SpecialCounts, WinMethod};
use crate::domain::rules::Seat;
use crate::errors::domain::{DomainError, ValidationKind};

/// Unsaved round input. Winner and method may still be missing; every
/// counter defaults to 0 and every flag to `false`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RoundDraft {
    pub winner_index: Option<Seat>,
    pub method: Option<WinMethod>,
    pub special_counts: SpecialCounts,
    pub no_melds: Vec<bool>,
    pub fighters: Vec<bool>,
    pub deadwood: Vec<u32>,
    pub quadra_upgrade_owners: Vec<bool>,
}

impl RoundDraft {
    /// True when both winner and method are filled in.
    pub fn is_complete(&self) -> bool {
        self.winner_index.is_some() && self.method.is_some()
    }

    /// Validate the draft into a record for an `n`-player session.
    pub fn into_record(self, n: usize) -> Result<RoundRecord, DomainError> {
        let winner = self.winner_index.ok_or_else(|| {
            DomainError::validation(ValidationKind::NoWinner, "please select a winner")
        })?;
        let method = self.method.ok_or_else(|| {
            DomainError::validation(
                ValidationKind::MissingMethod,
                "please choose a method of winning",
            )
        })?;
        if winner >= n {
            return Err(DomainError::validation(
                ValidationKind::WinnerOutOfRange,
                format!("winner index {winner} outside 0..{n}"),
            ));
        }

        let mut record = RoundRecord::new(winner, method, n).with_specials(self.special_counts);
        for (seat, marks) in record.seats.iter_mut().enumerate() {
            *marks = SeatMarks {
                no_meld: flag(&self.no_melds, seat),
                fighter: flag(&self.fighters, seat),
                deadwood: self.deadwood.get(seat).copied().unwrap_or(0),
                quadra_upgrade_owner: flag(&self.quadra_upgrade_owners, seat),
            };
        }
        Ok(record)
    }
}

impl From<&RoundRecord> for RoundDraft {
    /// Load a stored round back into an editable draft.
    fn from(record: &RoundRecord) -> Self {
        Self {
            winner_index: Some(record.winner),
            method: Some(record.method),
            special_counts: record.special_counts,
            no_melds: record.seats.iter().map(|s| s.no_meld).collect(),
            fighters: record.seats.iter().map(|s| s.fighter).collect(),
            deadwood: record.seats.iter().map(|s| s.deadwood).collect(),
            quadra_upgrade_owners: record.seats.iter().map(|s| s.quadra_upgrade_owner).collect(),
        }
    }
}

fn flag(flags: &[bool], seat: Seat) -> bool {
    flags.get(seat).copied().unwrap_or(false)
}
