use chrono::Utc;
use log::{debug, info, warn};
use std::sync::Arc;

use crate::domain::commands::sessions::CreateSessionCommand;
use crate::domain::models::session::{
    clamp_count, clean_optional_text, dedupe_participants, default_mode_for_distance,
    normalize_title, sanitize_distance, Session, SessionValidationError,
};
use crate::storage::SessionStorage;

/// Service for recording shooting sessions
///
/// Sessions are kept in memory, newest first. When constructed with a
/// storage the list is also loaded from and mirrored to it.
#[derive(Clone)]
pub struct SessionService {
    storage: Option<Arc<dyn SessionStorage>>,
    sessions: Vec<Session>,
}

impl SessionService {
    /// Sessions that live only as long as this service
    pub fn in_memory() -> Self {
        Self {
            storage: None,
            sessions: Vec::new(),
        }
    }

    /// Sessions persisted through `storage`
    pub fn persistent(storage: Arc<dyn SessionStorage>) -> Self {
        let sessions = storage.load_sessions();
        info!("Loaded {} sessions", sessions.len());
        Self {
            storage: Some(storage),
            sessions,
        }
    }

    pub fn is_persistent(&self) -> bool {
        self.storage.is_some()
    }

    /// Current sessions, most recently added first
    pub fn list(&self) -> &[Session] {
        &self.sessions
    }

    pub fn get(&self, session_id: &str) -> Option<&Session> {
        self.sessions.iter().find(|s| s.id == session_id)
    }

    /// Whether a non-blank title collides with an existing one (trimmed, case-insensitive)
    pub fn is_title_taken(&self, title: &str) -> bool {
        match normalize_title(Some(title)) {
            Some(key) => self
                .sessions
                .iter()
                .any(|s| s.title_key().as_deref() == Some(key.as_str())),
            None => false,
        }
    }

    /// Record a new session at the top of the list.
    ///
    /// Rejected without side effects when no participant is selected or the
    /// title is already used.
    pub fn add(&mut self, command: CreateSessionCommand) -> Result<Session, SessionValidationError> {
        let participants = dedupe_participants(command.participants);
        if participants.is_empty() {
            debug!("Rejected session without participants");
            return Err(SessionValidationError::NoParticipants);
        }

        let title = clean_optional_text(command.title.as_deref());
        if let Some(ref title) = title {
            if self.is_title_taken(title) {
                debug!("Rejected session with duplicate title: {}", title);
                return Err(SessionValidationError::TitleTaken(title.clone()));
            }
        }

        let distance = sanitize_distance(command.distance);
        let session = Session {
            id: self.fresh_id(),
            date: command.date,
            title,
            notes: clean_optional_text(command.notes.as_deref()),
            distance,
            environment: command.environment,
            sets_count: clamp_count(command.sets_count),
            arrows_per_set: clamp_count(command.arrows_per_set),
            scoring_mode: command
                .scoring_mode
                .unwrap_or_else(|| default_mode_for_distance(distance)),
            participants,
            created_at: Utc::now(),
        };

        self.sessions.insert(0, session.clone());
        self.persist();

        info!(
            "Added session {} on {} at {}m with {} participants",
            session.id,
            session.date,
            session.distance,
            session.participants.len()
        );
        Ok(session)
    }

    /// Remove a session by ID. Returns false when no session matched.
    pub fn remove(&mut self, session_id: &str) -> bool {
        let before = self.sessions.len();
        self.sessions.retain(|s| s.id != session_id);

        if self.sessions.len() == before {
            warn!("Cannot remove unknown session: {}", session_id);
            return false;
        }

        self.persist();
        info!("Removed session with ID: {}", session_id);
        true
    }

    fn persist(&self) {
        if let Some(storage) = &self.storage {
            if !storage.save_sessions(&self.sessions) {
                warn!("Sessions kept in memory only; storage write failed");
            }
        }
    }

    fn fresh_id(&self) -> String {
        loop {
            let id = Session::generate_id();
            if !self.sessions.iter().any(|s| s.id == id) {
                return id;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::kv::MemoryStore;
    use crate::storage::test_utils::init_test_logging;
    use crate::storage::{JsonSlotStore, SessionRepository};
    use chrono::NaiveDate;
    use shared::{Environment, ScoringMode, SessionParticipant, TargetZone};

    fn participant(id: &str) -> SessionParticipant {
        SessionParticipant {
            athlete_id: id.to_string(),
            target: TargetZone::Head,
        }
    }

    fn command(title: Option<&str>, distance: f64) -> CreateSessionCommand {
        init_test_logging();
        CreateSessionCommand {
            date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            title: title.map(str::to_string),
            notes: None,
            distance,
            environment: Environment::Indoor,
            sets_count: 7.0,
            arrows_per_set: 5.0,
            scoring_mode: None,
            participants: vec![participant("p1")],
        }
    }

    #[test]
    fn test_add_session() {
        let mut service = SessionService::in_memory();

        let session = service
            .add(CreateSessionCommand {
                notes: Some("  light wind ".to_string()),
                ..command(Some("  Morning "), 18.0)
            })
            .expect("Failed to add session");

        assert_eq!(session.title.as_deref(), Some("Morning"));
        assert_eq!(session.notes.as_deref(), Some("light wind"));
        assert_eq!(session.sets_count, 7);
        assert_eq!(session.arrows_per_set, 5);
        assert_eq!(service.list().len(), 1);
        assert!(service.get(&session.id).is_some());
    }

    #[test]
    fn test_duplicate_title_is_rejected_case_insensitively() {
        let mut service = SessionService::in_memory();
        service.add(command(Some("Morning"), 18.0)).unwrap();

        let result = service.add(command(Some("morning"), 18.0));
        assert_eq!(result, Err(SessionValidationError::TitleTaken("morning".to_string())));

        let result = service.add(command(Some("  MORNING  "), 18.0));
        assert!(result.is_err());
        assert_eq!(service.list().len(), 1);
    }

    #[test]
    fn test_blank_titles_never_collide() {
        let mut service = SessionService::in_memory();
        service.add(command(None, 18.0)).unwrap();
        service.add(command(Some("   "), 18.0)).unwrap();
        service.add(command(None, 18.0)).unwrap();

        assert_eq!(service.list().len(), 3);
        assert!(service.list().iter().all(|s| s.title.is_none()));
        assert!(!service.is_title_taken(""));
    }

    #[test]
    fn test_empty_participants_are_rejected() {
        let mut service = SessionService::in_memory();

        let result = service.add(CreateSessionCommand {
            participants: Vec::new(),
            ..command(Some("X"), 18.0)
        });

        assert_eq!(result, Err(SessionValidationError::NoParticipants));
        assert!(service.list().is_empty());
        // The rejected title was not reserved
        assert!(!service.is_title_taken("X"));
    }

    #[test]
    fn test_scoring_mode_defaults_from_distance() {
        let mut service = SessionService::in_memory();

        let far = service.add(command(None, 90.0)).unwrap();
        assert_eq!(far.scoring_mode, ScoringMode::HitsOnly);

        let near = service.add(command(None, 18.0)).unwrap();
        assert_eq!(near.scoring_mode, ScoringMode::Normal);

        let explicit = service
            .add(CreateSessionCommand {
                scoring_mode: Some(ScoringMode::CenterOnly),
                ..command(None, 90.0)
            })
            .unwrap();
        assert_eq!(explicit.scoring_mode, ScoringMode::CenterOnly);
    }

    #[test]
    fn test_counts_are_truncated_and_clamped() {
        let mut service = SessionService::in_memory();

        let session = service
            .add(CreateSessionCommand {
                sets_count: 3.9,
                arrows_per_set: 0.0,
                ..command(None, 18.0)
            })
            .unwrap();

        assert_eq!(session.sets_count, 3);
        assert_eq!(session.arrows_per_set, 1);
    }

    #[test]
    fn test_non_finite_distance_falls_back_to_default() {
        let mut service = SessionService::in_memory();
        let session = service.add(command(None, f64::NAN)).unwrap();
        assert_eq!(session.distance, 18.0);
        assert_eq!(session.scoring_mode, ScoringMode::Normal);
    }

    #[test]
    fn test_duplicate_athletes_are_collapsed() {
        let mut service = SessionService::in_memory();

        let session = service
            .add(CreateSessionCommand {
                participants: vec![
                    participant("p1"),
                    SessionParticipant {
                        athlete_id: "p1".to_string(),
                        target: TargetZone::Belly,
                    },
                    participant("p2"),
                ],
                ..command(None, 18.0)
            })
            .unwrap();

        assert_eq!(session.participants.len(), 2);
        assert_eq!(session.participants[0].target, TargetZone::Belly);
    }

    #[test]
    fn test_remove_session() {
        let mut service = SessionService::in_memory();
        let first = service.add(command(Some("First"), 18.0)).unwrap();
        let second = service.add(command(Some("Second"), 18.0)).unwrap();

        assert_eq!(service.list()[0].id, second.id);
        assert!(service.remove(&first.id));
        assert!(!service.remove(&first.id));
        assert_eq!(service.list().len(), 1);
        // A removed title can be used again
        assert!(service.add(command(Some("first"), 18.0)).is_ok());
    }

    #[test]
    fn test_persistent_sessions_survive_reload() {
        let store = MemoryStore::new();
        let storage = || {
            Arc::new(SessionRepository::new(JsonSlotStore::new(Arc::new(store.clone()))))
                as Arc<dyn SessionStorage>
        };

        let mut service = SessionService::persistent(storage());
        let session = service.add(command(Some("Morning"), 70.0)).unwrap();

        let reloaded = SessionService::persistent(storage());
        assert!(reloaded.is_persistent());
        assert_eq!(reloaded.list(), &[session][..]);
        assert!(reloaded.is_title_taken("MORNING"));
    }
}
