//! Session rules configuration.
//!
//! The shape mirrors the persisted rules blob: camelCase keys, every
//! numeric field defaults to 0 and every flag to `false` when absent.

use serde::{Deserialize, Serialize};

use crate::errors::domain::{ConfigKind, DomainError, NotFoundKind};

/// Monetary amount. All configured values are whole units.
pub type Amount = i64;

/// Seat position in `RulesConfig::players` (0-based).
pub type Seat = usize;

pub const MIN_PLAYERS: usize = 2;

/// A checkbox-plus-number rule entry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Toggle {
    pub enabled: bool,
    pub value: Amount,
}

impl Toggle {
    pub const fn on(value: Amount) -> Self {
        Self {
            enabled: true,
            value,
        }
    }

    /// Configured value when enabled, 0 otherwise.
    #[inline]
    pub fn active_value(&self) -> Amount {
        if self.enabled {
            self.value
        } else {
            0
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CardValues {
    pub king: Toggle,
    pub queen: Toggle,
    pub jack: Toggle,
    pub ace: Toggle,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WinBonuses {
    pub normal_win: Toggle,
    pub tongits: Toggle,
    pub fight: Toggle,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Melds {
    pub quadra: Toggle,
    pub quadra_upgrade: Toggle,
    pub straight: Toggle,
    pub multiple_melds: Toggle,
    pub no_meld: Toggle,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WinStreak {
    pub stackable: bool,
    pub base: Amount,
    pub per_stack: Amount,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FightRules {
    pub fighter_pays_more: bool,
    pub fighter_loss: Amount,
    pub non_fighter_loss: Amount,
    pub count_deadwood: bool,
    pub deadwood_value: Amount,
}

/// Static scoring parameters for one session.
///
/// Read-only to the ledger. Changing rules mid-session does not recompute
/// anything by itself; callers replay explicitly.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RulesConfig {
    pub players: Vec<String>,
    pub card_values: CardValues,
    pub win_bonuses: WinBonuses,
    pub melds: Melds,
    pub win_streak: WinStreak,
    pub fight_rules: FightRules,
}

impl RulesConfig {
    /// Rules with the given player names and every bonus disabled.
    pub fn for_players<I, S>(players: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            players: players.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    #[inline]
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    pub fn player_name(&self, seat: Seat) -> Option<&str> {
        self.players.get(seat).map(String::as_str)
    }

    /// Resolve a player given as a 0-based seat number or a name. Names
    /// match case-insensitively.
    pub fn seat_of(&self, who: &str) -> Result<Seat, DomainError> {
        let who = who.trim();
        if let Ok(seat) = who.parse::<Seat>() {
            if seat < self.player_count() {
                return Ok(seat);
            }
        }
        self.players
            .iter()
            .position(|p| p.trim().eq_ignore_ascii_case(who))
            .ok_or_else(|| DomainError::not_found(NotFoundKind::Player, format!("no player '{who}'")))
    }

    /// Refuse to start a session with fewer than two players or a blank name.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.players.len() < MIN_PLAYERS {
            return Err(DomainError::config(
                ConfigKind::TooFewPlayers,
                format!(
                    "at least {MIN_PLAYERS} players required, got {}",
                    self.players.len()
                ),
            ));
        }
        if let Some(seat) = self.players.iter().position(|p| p.trim().is_empty()) {
            return Err(DomainError::config(
                ConfigKind::BlankPlayerName,
                format!("player {} has no name", seat + 1),
            ));
        }
        Ok(())
    }

    /// Unwrap an optional rules blob, treating absence as fatal.
    pub fn require(rules: Option<RulesConfig>) -> Result<RulesConfig, DomainError> {
        let rules = rules.ok_or_else(|| {
            DomainError::config(ConfigKind::MissingRules, "no rules configured for session")
        })?;
        rules.validate()?;
        Ok(rules)
    }
}
