//! backend/src/io/mappers/session_mapper.rs

use crate::domain::commands::sessions::CreateSessionCommand;
use crate::domain::labels::scoring_badge;
use crate::domain::models::participant::Participant;
use crate::domain::models::session::{Session as DomainSession, SessionValidationError};
use crate::domain::models::DATE_FORMAT;
use crate::domain::session_view::{self, SessionLabels};
use chrono::NaiveDate;
use shared::{CreateSessionRequest, SessionRecord, SessionRow};

/// Mapper between session DTOs and domain types.
pub struct SessionMapper;

impl SessionMapper {
    /// Converts a domain session to the DTO returned after a create.
    pub fn to_dto(domain: &DomainSession) -> SessionRecord {
        SessionRecord {
            id: domain.id.clone(),
            date: domain.date.format(DATE_FORMAT).to_string(),
            title: domain.title.clone(),
            notes: domain.notes.clone(),
            distance: domain.distance,
            environment: domain.environment,
            sets_count: domain.sets_count,
            arrows_per_set: domain.arrows_per_set,
            scoring_mode: domain.scoring_mode,
            participants: domain.participants.clone(),
            created_at: domain.created_at.to_rfc3339(),
        }
    }

    /// Converts a create request to a domain command. The date must be YYYY-MM-DD.
    pub fn to_command(
        request: CreateSessionRequest,
    ) -> Result<CreateSessionCommand, SessionValidationError> {
        let raw_date = request.date.trim();
        let date = NaiveDate::parse_from_str(raw_date, DATE_FORMAT)
            .map_err(|_| SessionValidationError::InvalidDate(raw_date.to_string()))?;

        Ok(CreateSessionCommand {
            date,
            title: request.title,
            notes: request.notes,
            distance: request.distance,
            environment: request.environment,
            sets_count: request.sets_count,
            arrows_per_set: request.arrows_per_set,
            scoring_mode: request.scoring_mode,
            participants: request.participants,
        })
    }

    /// Builds the table row, resolving athlete names against `roster`.
    pub fn to_row(domain: &DomainSession, roster: &[Participant], labels: SessionLabels) -> SessionRow {
        SessionRow {
            id: domain.id.clone(),
            date: domain.date.format(DATE_FORMAT).to_string(),
            display_name: session_view::display_name(domain, labels),
            notes: domain.notes.clone(),
            format_line: session_view::format_line(domain, labels.locale),
            volume_line: session_view::volume_line(domain, labels.locale),
            scoring_badge: scoring_badge(labels.locale, domain.scoring_mode).to_string(),
            participant_count: domain.participants.len(),
            participant_names: session_view::participant_names(domain, roster),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use shared::{Environment, ScoringMode, SessionParticipant, TargetZone};

    fn session() -> DomainSession {
        DomainSession {
            id: "s1".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            title: Some("Morning".to_string()),
            notes: None,
            distance: 70.0,
            environment: Environment::Outdoor,
            sets_count: 6,
            arrows_per_set: 6,
            scoring_mode: ScoringMode::HitsOnly,
            participants: vec![SessionParticipant {
                athlete_id: "p1".to_string(),
                target: TargetZone::Belly,
            }],
            created_at: Utc.with_ymd_and_hms(2024, 6, 1, 8, 0, 0).unwrap(),
        }
    }

    #[test]
    fn test_domain_to_dto() {
        let dto = SessionMapper::to_dto(&session());
        assert_eq!(dto.date, "2024-06-01");
        assert_eq!(dto.created_at, "2024-06-01T08:00:00+00:00");
        assert_eq!(dto.scoring_mode, ScoringMode::HitsOnly);
        assert_eq!(dto.participants[0].target, TargetZone::Belly);
    }

    fn request(date: &str) -> CreateSessionRequest {
        CreateSessionRequest {
            date: date.to_string(),
            title: None,
            notes: None,
            distance: 90.0,
            environment: Environment::Outdoor,
            sets_count: 6.0,
            arrows_per_set: 3.0,
            scoring_mode: None,
            participants: session().participants,
        }
    }

    #[test]
    fn test_request_to_command() {
        let command = SessionMapper::to_command(request(" 2024-06-01 ")).unwrap();
        assert_eq!(command.date, NaiveDate::from_ymd_opt(2024, 6, 1).unwrap());
        assert_eq!(command.participants.len(), 1);

        assert_eq!(
            SessionMapper::to_command(request("01.06.2024")).unwrap_err(),
            SessionValidationError::InvalidDate("01.06.2024".to_string())
        );
    }

    #[test]
    fn test_row_resolves_names_and_labels() {
        let domain = session();
        let roster = vec![Participant {
            id: "p1".to_string(),
            first_name: "Ana".to_string(),
            last_name: "Lopez".to_string(),
            birth_date: None,
            created_at: domain.created_at,
        }];

        let row = SessionMapper::to_row(&domain, &roster, SessionLabels::default());
        assert_eq!(row.display_name, "Morning");
        assert_eq!(row.format_line, "70m · Outdoor");
        assert_eq!(row.volume_line, "6 × 6 · hits-only");
        assert_eq!(row.scoring_badge, "hits-only");
        assert_eq!(row.participant_count, 1);
        assert_eq!(row.participant_names, vec!["Ana Lopez"]);
    }
}
