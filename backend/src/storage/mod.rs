//! # Storage Module
//!
//! Handles all data persistence for the archery journal.
//!
//! Everything is stored as JSON documents in named slots of a key-value
//! store, the same model as browser `localStorage`. The backend behind the
//! slots can be swapped (memory, files, the browser) without affecting the
//! domain layer.
//!
//! ## Key Responsibilities
//!
//! - **Slot Access**: typed JSON reads and writes that never fail the caller
//! - **Schema Compatibility**: reading the legacy participant schema and
//!   keeping it mirrored for older readers
//! - **Storage Abstraction**: the domain only sees [`ParticipantStorage`] and
//!   [`SessionStorage`]

pub mod json_slot;
pub mod kv;
pub mod participant_repository;
pub mod session_repository;
pub mod traits;

#[cfg(test)]
pub mod test_utils;

pub use json_slot::JsonSlotStore;
pub use participant_repository::ParticipantRepository;
pub use session_repository::SessionRepository;
pub use traits::{KeyValueStore, LoadedRoster, ParticipantStorage, RosterSource, SessionStorage};
