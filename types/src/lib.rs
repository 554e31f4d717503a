//! Shared value and configuration types for Warclaw
//!
//! This crate contains the small serializable types that cross the boundary
//! between the scoring engine (warclaw-core) and its callers: player
//! identity, tagged game identifiers, and the scoring configuration.

use std::fmt;

use serde::{Deserialize, Serialize};

// ─────────────────────────────────────────────────────────────────────────────
// Identity
// ─────────────────────────────────────────────────────────────────────────────

/// Value-typed player identity with structural equality and hashing.
///
/// Replaces the `"name|profession|account"` join-strings the upstream log
/// format uses for keying; `Display` still renders that form so report
/// output stays byte-compatible.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerKey {
    /// Character name as it appears in the log
    pub name: String,
    /// Profession (elite spec name, e.g. "Firebrand")
    pub profession: String,
    /// Account name, including the numeric suffix
    pub account: String,
}

impl PlayerKey {
    pub fn new(
        name: impl Into<String>,
        profession: impl Into<String>,
        account: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            profession: profession.into(),
            account: account.into(),
        }
    }
}

impl fmt::Display for PlayerKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}|{}|{}", self.name, self.profession, self.account)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Game Identifiers
// ─────────────────────────────────────────────────────────────────────────────

/// Numeric skill identifier (upstream encodes these as `"s12345"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SkillId(pub u32);

/// Numeric buff identifier (upstream encodes these as `"b740"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BuffId(pub u32);

/// A tagged skill-or-buff identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Identifier {
    Skill(SkillId),
    Buff(BuffId),
}

impl Identifier {
    /// Parse the upstream prefixed form (`"s12345"` / `"b740"`).
    pub fn from_prefixed(raw: &str) -> Option<Self> {
        let (prefix, digits) = raw.split_at(raw.len().min(1));
        let id: u32 = digits.parse().ok()?;
        match prefix {
            "s" => Some(Identifier::Skill(SkillId(id))),
            "b" => Some(Identifier::Buff(BuffId(id))),
            _ => None,
        }
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Identifier::Skill(SkillId(id)) => write!(f, "s{id}"),
            Identifier::Buff(BuffId(id)) => write!(f, "b{id}"),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Configuration
// ─────────────────────────────────────────────────────────────────────────────

/// Scoring configuration supplied by the caller.
///
/// Loading this from disk is the caller's job; the engine only reads it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// Accounts excluded from per-player statistics (anonymous opt-outs).
    #[serde(default)]
    pub blacklist: Vec<String>,
}

impl ScoringConfig {
    pub fn is_blacklisted(&self, account: &str) -> bool {
        self.blacklist.iter().any(|entry| entry == account)
    }
}
