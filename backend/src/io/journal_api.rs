//! # Journal API
//!
//! The single entry point the presentation layer talks to. Requests and
//! responses are the `shared` DTOs; validation failures come back as
//! `success: false` with a message instead of an error.

use chrono::{NaiveDate, Utc};
use log::{info, warn};
use shared::{
    CreateParticipantRequest, CreateParticipantResponse, CreateSessionRequest,
    CreateSessionResponse, DeleteResponse, ParticipantListRequest, ParticipantListResponse,
    ParticipantRow, SessionListResponse,
};

use crate::config::JournalConfig;
use crate::domain::labels::session_error_message;
use crate::domain::models::session::{Session, SessionValidationError};
use crate::domain::{participant_view, session_view};
use crate::domain::{ParticipantService, SessionDraft, SessionService};
use crate::io::mappers::{ParticipantMapper, SessionMapper};

/// Application state: configuration plus the two services
#[derive(Clone)]
pub struct JournalApi {
    config: JournalConfig,
    participant_service: ParticipantService,
    session_service: SessionService,
}

impl JournalApi {
    pub fn new(
        config: JournalConfig,
        participant_service: ParticipantService,
        session_service: SessionService,
    ) -> Self {
        Self {
            config,
            participant_service,
            session_service,
        }
    }

    pub fn config(&self) -> &JournalConfig {
        &self.config
    }

    pub fn participants(&self) -> &ParticipantService {
        &self.participant_service
    }

    pub fn sessions(&self) -> &SessionService {
        &self.session_service
    }

    pub fn create_participant(&mut self, request: CreateParticipantRequest) -> CreateParticipantResponse {
        info!("Create participant request: {:?}", request);

        match self.participant_service.add(ParticipantMapper::to_command(request)) {
            Ok(participant) => CreateParticipantResponse {
                success: true,
                message: format!("Added {}", participant.full_name()),
                participant: Some(ParticipantMapper::to_dto(&participant)),
            },
            Err(e) => {
                warn!("Participant rejected: {}", e);
                CreateParticipantResponse {
                    success: false,
                    participant: None,
                    message: e.to_string(),
                }
            }
        }
    }

    pub fn delete_participant(&mut self, participant_id: &str) -> DeleteResponse {
        let deleted = self.participant_service.remove(participant_id);
        DeleteResponse {
            deleted,
            message: if deleted {
                "Participant removed".to_string()
            } else {
                format!("Participant not found: {}", participant_id)
            },
        }
    }

    /// Re-read the roster from storage
    pub fn reload_participants(&mut self) -> ParticipantListResponse {
        self.participant_service.load_all();
        self.list_participants(ParticipantListRequest::default(), Utc::now().date_naive())
    }

    /// The participant table for the given search, filter and sort
    pub fn list_participants(&self, request: ParticipantListRequest, today: NaiveDate) -> ParticipantListResponse {
        let roster = self.participant_service.list();
        let query = ParticipantMapper::to_query(request, today);

        ParticipantListResponse {
            rows: participant_view::project(roster, &query)
                .into_iter()
                .map(|p| ParticipantMapper::to_row(p, today))
                .collect(),
            total: roster.len(),
        }
    }

    /// Athletes for the session form, alphabetically
    pub fn participant_options(&self, today: NaiveDate) -> Vec<ParticipantRow> {
        participant_view::selection_list(self.participant_service.list())
            .into_iter()
            .map(|p| ParticipantMapper::to_row(p, today))
            .collect()
    }

    pub fn create_session(&mut self, request: CreateSessionRequest) -> CreateSessionResponse {
        info!("Create session request: {:?}", request);

        let result = SessionMapper::to_command(request)
            .and_then(|command| self.session_service.add(command));
        self.session_response(result)
    }

    /// Submit the form; on success the draft is reset for the next entry
    pub fn submit_draft(&mut self, draft: &mut SessionDraft) -> CreateSessionResponse {
        let result = self.session_service.add(draft.to_command());
        if result.is_ok() {
            draft.reset_after_submit();
        }
        self.session_response(result)
    }

    pub fn delete_session(&mut self, session_id: &str) -> DeleteResponse {
        let deleted = self.session_service.remove(session_id);
        DeleteResponse {
            deleted,
            message: if deleted {
                "Session removed".to_string()
            } else {
                format!("Session not found: {}", session_id)
            },
        }
    }

    /// Sessions newest first, with names resolved against the current roster
    pub fn list_sessions(&self) -> SessionListResponse {
        let roster = self.participant_service.list();
        let labels = self.config.session_labels();

        SessionListResponse {
            rows: session_view::sorted(self.session_service.list())
                .into_iter()
                .map(|s| SessionMapper::to_row(s, roster, labels))
                .collect(),
        }
    }

    fn session_response(&self, result: Result<Session, SessionValidationError>) -> CreateSessionResponse {
        match result {
            Ok(session) => CreateSessionResponse {
                success: true,
                message: format!(
                    "Added {}",
                    session_view::display_name(&session, self.config.session_labels())
                ),
                session: Some(SessionMapper::to_dto(&session)),
            },
            Err(e) => {
                warn!("Session rejected: {}", e);
                CreateSessionResponse {
                    success: false,
                    session: None,
                    message: session_error_message(self.config.locale, &e).to_string(),
                }
            }
        }
    }
}
