//! # Participant Repository
//!
//! Persists the participant roster in two slots:
//!
//! ```text
//! archery.athletes.v2   [{id, firstName, lastName, birthDate?, createdAt}]   ← canonical
//! archery.athletes.v1   [{id, name, createdAt}]                              ← mirror for older readers
//! ```
//!
//! Loading tries the newest schema first and falls back through older ones.
//! Saving always writes every schema so both readers stay in sync.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use log::{debug, info, warn};
use shared::{LegacyParticipantRecord, ParticipantRecord, ATHLETES_V1_KEY, ATHLETES_V2_KEY};

use super::json_slot::JsonSlotStore;
use super::traits::{LoadedRoster, ParticipantStorage, RosterSource};
use crate::domain::models::participant::Participant;
use crate::domain::models::{parse_timestamp, DATE_FORMAT};

/// Slot-backed participant repository with legacy migration
#[derive(Clone)]
pub struct ParticipantRepository {
    slots: JsonSlotStore,
}

impl ParticipantRepository {
    pub fn new(slots: JsonSlotStore) -> Self {
        Self { slots }
    }

    /// Decode the canonical slot; `None` when it is absent or unreadable
    fn load_current(&self) -> Option<Vec<Participant>> {
        let records: Vec<ParticipantRecord> = self.slots.try_load(ATHLETES_V2_KEY)?;
        Some(
            records
                .into_iter()
                .filter_map(|record| match Self::record_to_domain(record) {
                    Ok(participant) => Some(participant),
                    Err(e) => {
                        warn!("Skipping unreadable participant record: {:#}", e);
                        None
                    }
                })
                .collect(),
        )
    }

    /// Decode and migrate the legacy slot; `None` when it is absent or unreadable
    fn load_legacy(&self) -> Option<Vec<Participant>> {
        let records: Vec<LegacyParticipantRecord> = self.slots.try_load(ATHLETES_V1_KEY)?;
        Some(
            records
                .into_iter()
                .filter_map(|record| match Self::legacy_record_to_domain(record) {
                    Ok(participant) => Some(participant),
                    Err(e) => {
                        warn!("Skipping unreadable legacy participant record: {:#}", e);
                        None
                    }
                })
                .collect(),
        )
    }

    /// Canonical record to domain; a blank birth date means none
    fn record_to_domain(record: ParticipantRecord) -> Result<Participant> {
        let birth_date = match record.birth_date.as_deref().map(str::trim) {
            Some(raw) if !raw.is_empty() => Some(
                NaiveDate::parse_from_str(raw, DATE_FORMAT)
                    .with_context(|| format!("Failed to parse birthDate of participant {}", record.id))?,
            ),
            _ => None,
        };
        let created_at = parse_timestamp(&record.created_at)
            .with_context(|| format!("Failed to parse createdAt of participant {}", record.id))?;

        Ok(Participant {
            id: record.id,
            first_name: record.first_name,
            last_name: record.last_name,
            birth_date,
            created_at,
        })
    }

    /// Legacy record to domain, splitting the single name field
    fn legacy_record_to_domain(record: LegacyParticipantRecord) -> Result<Participant> {
        let (first_name, last_name) = Participant::split_legacy_name(&record.name);
        let created_at = parse_timestamp(&record.created_at)
            .with_context(|| format!("Failed to parse createdAt of legacy participant {}", record.id))?;

        Ok(Participant {
            id: record.id,
            first_name,
            last_name,
            birth_date: None,
            created_at,
        })
    }

    fn domain_to_record(participant: &Participant) -> ParticipantRecord {
        ParticipantRecord {
            id: participant.id.clone(),
            first_name: participant.first_name.clone(),
            last_name: participant.last_name.clone(),
            birth_date: participant.birth_date.map(|d| d.format(DATE_FORMAT).to_string()),
            created_at: participant.created_at.to_rfc3339(),
        }
    }

    fn domain_to_legacy_record(participant: &Participant) -> LegacyParticipantRecord {
        LegacyParticipantRecord {
            id: participant.id.clone(),
            name: participant.full_name().trim().to_string(),
            created_at: participant.created_at.to_rfc3339(),
        }
    }
}

impl ParticipantStorage for ParticipantRepository {
    fn load_participants(&self) -> LoadedRoster {
        if let Some(participants) = self.load_current() {
            debug!("Loaded {} participants from {}", participants.len(), ATHLETES_V2_KEY);
            return LoadedRoster {
                participants,
                source: RosterSource::Current,
            };
        }

        if let Some(participants) = self.load_legacy() {
            info!(
                "Read {} participants from legacy slot {}",
                participants.len(),
                ATHLETES_V1_KEY
            );
            return LoadedRoster {
                participants,
                source: RosterSource::Legacy,
            };
        }

        debug!("No stored participants found");
        LoadedRoster {
            participants: Vec::new(),
            source: RosterSource::Empty,
        }
    }

    fn save_participants(&self, participants: &[Participant]) -> bool {
        let current: Vec<ParticipantRecord> =
            participants.iter().map(Self::domain_to_record).collect();
        let legacy: Vec<LegacyParticipantRecord> =
            participants.iter().map(Self::domain_to_legacy_record).collect();

        // Both writes are attempted even if the first one fails
        let saved_current = self.slots.save(ATHLETES_V2_KEY, &current);
        let saved_legacy = self.slots.save(ATHLETES_V1_KEY, &legacy);
        saved_current && saved_legacy
    }
}
