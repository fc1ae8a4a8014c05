//! # Session Repository
//!
//! Persists sessions in the single versioned slot `archery.sessions.v1`.
//! Only used when session persistence is enabled in the journal config;
//! otherwise sessions live in memory for the lifetime of the process.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use log::{debug, warn};
use shared::{SessionRecord, SESSIONS_V1_KEY};

use super::json_slot::JsonSlotStore;
use super::traits::SessionStorage;
use crate::domain::models::session::Session;
use crate::domain::models::{parse_timestamp, DATE_FORMAT};

#[derive(Clone)]
pub struct SessionRepository {
    slots: JsonSlotStore,
}

impl SessionRepository {
    pub fn new(slots: JsonSlotStore) -> Self {
        Self { slots }
    }

    fn record_to_domain(record: SessionRecord) -> Result<Session> {
        let date = NaiveDate::parse_from_str(&record.date, DATE_FORMAT)
            .with_context(|| format!("Failed to parse date of session {}", record.id))?;
        let created_at = parse_timestamp(&record.created_at)
            .with_context(|| format!("Failed to parse createdAt of session {}", record.id))?;

        Ok(Session {
            id: record.id,
            date,
            title: record.title,
            notes: record.notes,
            distance: record.distance,
            environment: record.environment,
            sets_count: record.sets_count,
            arrows_per_set: record.arrows_per_set,
            scoring_mode: record.scoring_mode,
            participants: record.participants,
            created_at,
        })
    }

    fn domain_to_record(session: &Session) -> SessionRecord {
        SessionRecord {
            id: session.id.clone(),
            date: session.date.format(DATE_FORMAT).to_string(),
            title: session.title.clone(),
            notes: session.notes.clone(),
            distance: session.distance,
            environment: session.environment,
            sets_count: session.sets_count,
            arrows_per_set: session.arrows_per_set,
            scoring_mode: session.scoring_mode,
            participants: session.participants.clone(),
            created_at: session.created_at.to_rfc3339(),
        }
    }
}

impl SessionStorage for SessionRepository {
    fn load_sessions(&self) -> Vec<Session> {
        let records: Vec<SessionRecord> = self.slots.load(SESSIONS_V1_KEY);
        let sessions: Vec<Session> = records
            .into_iter()
            .filter_map(|record| match Self::record_to_domain(record) {
                Ok(session) => Some(session),
                Err(e) => {
                    warn!("Skipping unreadable session record: {:#}", e);
                    None
                }
            })
            .collect();

        debug!("Loaded {} sessions from {}", sessions.len(), SESSIONS_V1_KEY);
        sessions
    }

    fn save_sessions(&self, sessions: &[Session]) -> bool {
        let records: Vec<SessionRecord> = sessions.iter().map(Self::domain_to_record).collect();
        self.slots.save(SESSIONS_V1_KEY, &records)
    }
}
