//! # Storage Traits
//!
//! This module defines the storage abstraction traits that allow different
//! storage backends to be used interchangeably in the domain layer.

use anyhow::Result;

use crate::domain::models::participant::Participant;
use crate::domain::models::session::Session;

/// Trait defining a raw string key-value store
///
/// Mirrors the browser `localStorage` contract: string keys, string values,
/// and any call may fail (storage disabled, quota exceeded, I/O error).
/// Callers that must never fail go through [`super::JsonSlotStore`].
pub trait KeyValueStore: Send + Sync {
    /// Read the raw value stored under `key`, `None` if the slot is empty
    fn get_item(&self, key: &str) -> Result<Option<String>>;

    /// Replace the value stored under `key`
    fn set_item(&self, key: &str, value: &str) -> Result<()>;

    /// Clear the slot under `key`; clearing an empty slot is not an error
    fn remove_item(&self, key: &str) -> Result<()>;
}

/// Which schema a loaded roster was read from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RosterSource {
    /// The canonical slot
    Current,
    /// The legacy slot, converted in memory and not yet written back
    Legacy,
    /// Nothing readable was stored
    Empty,
}

/// A participant list together with where it came from
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedRoster {
    pub participants: Vec<Participant>,
    pub source: RosterSource,
}

impl LoadedRoster {
    /// A legacy roster has to be written in the canonical schema once
    pub fn needs_migration(&self) -> bool {
        self.source == RosterSource::Legacy && !self.participants.is_empty()
    }
}

/// Trait defining the interface for participant storage operations
pub trait ParticipantStorage: Send + Sync {
    /// Load the full participant list, newest first.
    /// Absent or unreadable data yields an empty roster.
    fn load_participants(&self) -> LoadedRoster;

    /// Rewrite every participant slot from `participants`.
    /// Returns false when the backing store rejected the write.
    fn save_participants(&self, participants: &[Participant]) -> bool;
}

/// Trait defining the interface for session storage operations
pub trait SessionStorage: Send + Sync {
    /// Load the full session list. Absent or unreadable data yields an empty list.
    fn load_sessions(&self) -> Vec<Session>;

    /// Rewrite the session slot from `sessions`.
    /// Returns false when the backing store rejected the write.
    fn save_sessions(&self, sessions: &[Session]) -> bool;
}
