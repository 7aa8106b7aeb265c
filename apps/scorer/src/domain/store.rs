//! Round record store.
//!
//! Owns the session rules, the ordered record list and the ledger derived
//! from them. Every mutation validates first, then rebuilds the ledger with
//! a full replay before committing, so a rejected call leaves the store
//! exactly as it was.

use tracing::{info, warn};

use crate::domain::replay::{replay, ComputedRound, Ledger};
use crate::domain::round::{RoundId, RoundRecord};
use crate::domain::rules::RulesConfig;
use crate::errors::domain::{DomainError, NotFoundKind, ValidationKind};

#[derive(Debug, Clone)]
pub struct RoundStore {
    rules: RulesConfig,
    records: Vec<RoundRecord>,
    ledger: Ledger,
}

impl RoundStore {
    /// Start an empty session. Fails on malformed rules.
    pub fn new(rules: RulesConfig) -> Result<Self, DomainError> {
        rules.validate()?;
        let ledger = Ledger::empty(rules.player_count());
        Ok(Self {
            rules,
            records: Vec::new(),
            ledger,
        })
    }

    /// Rebuild a session from stored records, renumbering them by position.
    pub fn with_records(
        rules: RulesConfig,
        records: Vec<RoundRecord>,
    ) -> Result<Self, DomainError> {
        let mut store = Self::new(rules)?;
        let mut records = records;
        for (index, record) in records.iter_mut().enumerate() {
            record.normalize_for(&store.rules).map_err(|e| {
                DomainError::validation(
                    e.validation_kind()
                        .cloned()
                        .unwrap_or(ValidationKind::SeatCountMismatch),
                    format!("stored round {}: {e}", index + 1),
                )
            })?;
        }
        store.commit(records);
        info!(rounds = store.records.len(), "Session loaded");
        Ok(store)
    }

    pub fn rules(&self) -> &RulesConfig {
        &self.rules
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&RoundRecord> {
        self.records.get(index)
    }

    pub fn all(&self) -> &[RoundRecord] {
        &self.records
    }

    pub fn computed(&self, index: usize) -> Option<&ComputedRound> {
        self.ledger.computed_rounds.get(index)
    }

    pub fn position_of(&self, id: RoundId) -> Option<usize> {
        self.records.iter().position(|r| r.id == id)
    }

    /// Like `position_of`, but an unknown id is an error.
    pub fn index_of(&self, id: RoundId) -> Result<usize, DomainError> {
        self.position_of(id)
            .ok_or_else(|| DomainError::not_found(NotFoundKind::Round, format!("no round with id {id}")))
    }

    /// Add a round at the end. Returns its index.
    pub fn append(&mut self, mut record: RoundRecord) -> Result<usize, DomainError> {
        if let Err(e) = record.normalize_for(&self.rules) {
            warn!(error = %e, "Rejected round append");
            return Err(e);
        }
        let index = self.records.len();
        let mut next = self.records.clone();
        next.push(record);
        self.commit(next);
        info!(round = index + 1, "Round appended");
        Ok(index)
    }

    /// Replace the round at `index`, keeping its id and round number, then
    /// replay so every later streak is refreshed.
    pub fn overwrite(&mut self, index: usize, mut record: RoundRecord) -> Result<(), DomainError> {
        let current = self.checked(index, "overwrite")?;
        record.id = current.id;
        record.round_number = current.round_number;
        if let Err(e) = record.normalize_for(&self.rules) {
            warn!(error = %e, index, "Rejected round overwrite");
            return Err(e);
        }
        let mut next = self.records.clone();
        next[index] = record;
        self.commit(next);
        info!(round = index + 1, "Round overwritten");
        Ok(())
    }

    /// Remove the round at `index`, renumber the rest and replay.
    pub fn delete(&mut self, index: usize) -> Result<RoundRecord, DomainError> {
        self.checked(index, "delete")?;
        let mut next = self.records.clone();
        let removed = next.remove(index);
        self.commit(next);
        info!(round = index + 1, remaining = self.records.len(), "Round deleted");
        Ok(removed)
    }

    fn checked(&self, index: usize, op: &str) -> Result<&RoundRecord, DomainError> {
        self.records.get(index).ok_or_else(|| {
            warn!(index, len = self.records.len(), op, "Round index out of range");
            DomainError::validation(
                ValidationKind::IndexOutOfRange,
                format!(
                    "cannot {op} round index {index}: {} rounds stored",
                    self.records.len()
                ),
            )
        })
    }

    /// Renumber and replay `records`, then swap them in. Infallible once the
    /// records have been normalized.
    fn commit(&mut self, mut records: Vec<RoundRecord>) {
        for (index, record) in records.iter_mut().enumerate() {
            record.round_number = index as u32 + 1;
        }
        let ledger = replay(&records, &self.rules);
        self.records = records;
        self.ledger = ledger;
    }
}
