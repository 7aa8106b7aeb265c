//! Saved-game snapshot: rules, source records and an optional unsaved draft.
//!
//! Only source facts are written. Computed rounds, streak counters and
//! totals found in older blobs are ignored on load and rebuilt by replay.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::domain::draft::RoundDraft;
use crate::domain::round::RoundRecord;
use crate::domain::rules::RulesConfig;
use crate::domain::store::RoundStore;
use crate::errors::domain::DomainError;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SavedGame {
    pub rules: Option<RulesConfig>,
    pub rounds: Vec<RoundRecord>,
    #[serde(with = "stamp")]
    pub last_updated: Option<OffsetDateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_form: Option<RoundDraft>,
}

impl SavedGame {
    /// Snapshot of a store, stamped with the current time.
    pub fn capture(store: &RoundStore, current_form: Option<RoundDraft>) -> Self {
        Self {
            rules: Some(store.rules().clone()),
            rounds: store.all().to_vec(),
            last_updated: Some(OffsetDateTime::now_utc()),
            current_form,
        }
    }

    /// Restore the store; the draft (if any) is handed back untouched.
    pub fn into_store(self) -> Result<(RoundStore, Option<RoundDraft>), DomainError> {
        let rules = RulesConfig::require(self.rules)?;
        let store = RoundStore::with_records(rules, self.rounds)?;
        Ok((store, self.current_form))
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// Timestamps are written as RFC 3339; older snapshots stored Unix
/// milliseconds, which are still accepted on read.
pub(crate) mod stamp {
    use serde::{Deserialize, Deserializer, Serializer};
    use time::format_description::well_known::Rfc3339;
    use time::OffsetDateTime;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Millis(i64),
        Text(String),
    }

    pub fn serialize<S>(value: &Option<OffsetDateTime>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        time::serde::rfc3339::option::serialize(value, serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<OffsetDateTime>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<Raw>::deserialize(deserializer)?;
        match raw {
            None => Ok(None),
            Some(Raw::Millis(ms)) => {
                OffsetDateTime::from_unix_timestamp_nanos(i128::from(ms) * 1_000_000)
                    .map(Some)
                    .map_err(serde::de::Error::custom)
            }
            Some(Raw::Text(s)) => OffsetDateTime::parse(&s, &Rfc3339)
                .map(Some)
                .map_err(serde::de::Error::custom),
        }
    }
}
