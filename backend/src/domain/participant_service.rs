use chrono::{NaiveDate, Utc};
use log::{debug, info, warn};
use std::sync::Arc;

use crate::domain::commands::participants::CreateParticipantCommand;
use crate::domain::models::participant::{Participant, ParticipantValidationError};
use crate::domain::models::DATE_FORMAT;
use crate::storage::ParticipantStorage;

/// Service for managing the participant roster
///
/// Holds the in-memory list (newest first) and mirrors it to storage after
/// every mutation.
#[derive(Clone)]
pub struct ParticipantService {
    storage: Arc<dyn ParticipantStorage>,
    participants: Vec<Participant>,
}

impl ParticipantService {
    /// Create a service and load whatever the storage holds
    pub fn new(storage: Arc<dyn ParticipantStorage>) -> Self {
        let mut service = Self {
            storage,
            participants: Vec::new(),
        };
        service.load_all();
        service
    }

    /// Reload the roster from storage, replacing the in-memory list.
    ///
    /// A roster read from the legacy slot is written straight back so it
    /// becomes canonical immediately. A canonical roster is never rewritten
    /// by a load, so records this version cannot read stay in storage.
    pub fn load_all(&mut self) -> &[Participant] {
        let loaded = self.storage.load_participants();
        let migrate = loaded.needs_migration();
        self.participants = loaded.participants;
        info!("Loaded {} participants", self.participants.len());

        if migrate {
            info!("Writing migrated roster in the current schema");
            self.persist();
        }
        &self.participants
    }

    /// Current roster snapshot, newest first
    pub fn list(&self) -> &[Participant] {
        &self.participants
    }

    pub fn get(&self, participant_id: &str) -> Option<&Participant> {
        let participant = self.participants.iter().find(|p| p.id == participant_id);
        if participant.is_none() {
            debug!("Participant not found: {}", participant_id);
        }
        participant
    }

    /// Add a participant to the top of the roster.
    ///
    /// Rejected without side effects when a name is blank or the birth date is unusable.
    pub fn add(
        &mut self,
        command: CreateParticipantCommand,
    ) -> Result<Participant, ParticipantValidationError> {
        let today = Utc::now().date_naive();
        let (first_name, last_name, birth_date) = Self::validate_create_command(&command, today)?;

        let participant = Participant {
            id: self.fresh_id(),
            first_name,
            last_name,
            birth_date,
            created_at: Utc::now(),
        };

        self.participants.insert(0, participant.clone());
        self.persist();

        info!("Added participant {} with ID: {}", participant.full_name(), participant.id);
        Ok(participant)
    }

    /// Remove a participant by ID. Returns false when no participant matched.
    pub fn remove(&mut self, participant_id: &str) -> bool {
        let before = self.participants.len();
        self.participants.retain(|p| p.id != participant_id);

        if self.participants.len() == before {
            warn!("Cannot remove unknown participant: {}", participant_id);
            return false;
        }

        self.persist();
        info!("Removed participant with ID: {}", participant_id);
        true
    }

    fn persist(&self) {
        if !self.storage.save_participants(&self.participants) {
            warn!("Participant roster kept in memory only; storage write failed");
        }
    }

    /// A UUID not already used by this roster
    fn fresh_id(&self) -> String {
        loop {
            let id = Participant::generate_id();
            if !self.participants.iter().any(|p| p.id == id) {
                return id;
            }
        }
    }

    /// Validate and normalize create input
    fn validate_create_command(
        command: &CreateParticipantCommand,
        today: NaiveDate,
    ) -> Result<(String, String, Option<NaiveDate>), ParticipantValidationError> {
        let first_name = command.first_name.trim();
        if first_name.is_empty() {
            return Err(ParticipantValidationError::EmptyFirstName);
        }

        let last_name = command.last_name.trim();
        if last_name.is_empty() {
            return Err(ParticipantValidationError::EmptyLastName);
        }

        let birth_date = match command.birth_date.as_deref().map(str::trim) {
            Some(raw) if !raw.is_empty() => {
                let date = NaiveDate::parse_from_str(raw, DATE_FORMAT)
                    .map_err(|_| ParticipantValidationError::InvalidBirthDate(raw.to_string()))?;
                if date > today {
                    return Err(ParticipantValidationError::BirthDateInFuture);
                }
                Some(date)
            }
            _ => None,
        };

        Ok((first_name.to_string(), last_name.to_string(), birth_date))
    }
}
