//! # Archery Journal Backend
//!
//! Non-UI logic for a small archery training journal: a participant roster
//! and a list of shooting sessions.
//!
//! ## Architecture
//!
//! ```text
//! UI Layer
//!     ↓
//! IO Layer (JournalApi, DTO mappers)
//!     ↓
//! Domain Layer (services, form state, table projections)
//!     ↓
//! Storage Layer (JSON slots over a key-value store)
//! ```
//!
//! The backend is single-threaded and synchronous. Storage failures never
//! reach the UI: the journal keeps working in memory and logs a warning.

pub mod config;
pub mod domain;
pub mod io;
pub mod storage;

use anyhow::Result;
use log::info;
use std::sync::Arc;

pub use config::JournalConfig;
pub use io::JournalApi;

use domain::{ParticipantService, SessionService};
use storage::{JsonSlotStore, KeyValueStore, ParticipantRepository, SessionRepository};

/// Initialize the journal on the platform's default store
pub fn initialize_journal(config: JournalConfig) -> Result<JournalApi> {
    #[cfg(not(target_arch = "wasm32"))]
    let store: Arc<dyn KeyValueStore> = {
        let data_directory = config.resolve_data_directory()?;
        info!("Setting up file storage in {:?}", data_directory);
        Arc::new(storage::kv::FileStore::new(data_directory)?)
    };

    #[cfg(target_arch = "wasm32")]
    let store: Arc<dyn KeyValueStore> = {
        info!("Setting up browser storage");
        Arc::new(storage::kv::BrowserStore::new())
    };

    Ok(initialize_with_store(store, config))
}

/// Initialize the journal over an explicit store
pub fn initialize_with_store(store: Arc<dyn KeyValueStore>, config: JournalConfig) -> JournalApi {
    let slots = JsonSlotStore::new(store);

    info!("Setting up domain model");
    let participant_service = ParticipantService::new(Arc::new(ParticipantRepository::new(slots.clone())));
    let session_service = if config.persist_sessions {
        SessionService::persistent(Arc::new(SessionRepository::new(slots)))
    } else {
        SessionService::in_memory()
    };

    JournalApi::new(config, participant_service, session_service)
}
