//! backend/src/io/mappers/participant_mapper.rs

use crate::domain::commands::participants::{
    CreateParticipantCommand, ParticipantQuery, ParticipantSort,
};
use crate::domain::models::participant::Participant as DomainParticipant;
use crate::domain::models::DATE_FORMAT;
use chrono::NaiveDate;
use shared::{
    CreateParticipantRequest, ParticipantListRequest, ParticipantRecord, ParticipantRow,
    ParticipantSortKey,
};

/// Mapper between participant DTOs and domain types.
pub struct ParticipantMapper;

impl ParticipantMapper {
    /// Converts a domain participant to the DTO returned after a create.
    pub fn to_dto(domain: &DomainParticipant) -> ParticipantRecord {
        ParticipantRecord {
            id: domain.id.clone(),
            first_name: domain.first_name.clone(),
            last_name: domain.last_name.clone(),
            birth_date: domain.birth_date.map(|d| d.format(DATE_FORMAT).to_string()),
            created_at: domain.created_at.to_rfc3339(),
        }
    }

    pub fn to_row(domain: &DomainParticipant, today: NaiveDate) -> ParticipantRow {
        ParticipantRow {
            id: domain.id.clone(),
            full_name: domain.full_name(),
            birth_date: domain.birth_date.map(|d| d.format(DATE_FORMAT).to_string()),
            age: domain.age_on(today),
            created_at: domain.created_at.to_rfc3339(),
        }
    }

    pub fn to_command(request: CreateParticipantRequest) -> CreateParticipantCommand {
        CreateParticipantCommand {
            first_name: request.first_name,
            last_name: request.last_name,
            birth_date: request.birth_date,
        }
    }

    /// Table inputs from the UI, with ages computed as of `today`
    pub fn to_query(request: ParticipantListRequest, today: NaiveDate) -> ParticipantQuery {
        ParticipantQuery {
            search: request.search,
            age_under: request.age_under,
            sort: match request.sort {
                ParticipantSortKey::Name => ParticipantSort::FullName,
                ParticipantSortKey::AgeAscending => ParticipantSort::AgeAscending,
                ParticipantSortKey::AgeDescending => ParticipantSort::AgeDescending,
            },
            today,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn participant() -> DomainParticipant {
        DomainParticipant {
            id: "p1".to_string(),
            first_name: "Ana".to_string(),
            last_name: "Maria Lopez".to_string(),
            birth_date: NaiveDate::from_ymd_opt(2011, 4, 2),
            created_at: Utc.with_ymd_and_hms(2024, 5, 1, 10, 0, 0).unwrap(),
        }
    }

    #[test]
    fn test_domain_to_dto() {
        let dto = ParticipantMapper::to_dto(&participant());
        assert_eq!(dto.first_name, "Ana");
        assert_eq!(dto.last_name, "Maria Lopez");
        assert_eq!(dto.birth_date.as_deref(), Some("2011-04-02"));
        assert_eq!(dto.created_at, "2024-05-01T10:00:00+00:00");
    }

    #[test]
    fn test_domain_to_row() {
        let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        let row = ParticipantMapper::to_row(&participant(), today);
        assert_eq!(row.full_name, "Ana Maria Lopez");
        assert_eq!(row.age, Some(13));

        let mut unborn = participant();
        unborn.birth_date = None;
        let row = ParticipantMapper::to_row(&unborn, today);
        assert_eq!(row.age, None);
        assert_eq!(row.birth_date, None);
    }

    #[test]
    fn test_list_request_to_query() {
        let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        let query = ParticipantMapper::to_query(
            ParticipantListRequest {
                search: "ana".to_string(),
                age_under: Some(12),
                sort: ParticipantSortKey::AgeDescending,
            },
            today,
        );

        assert_eq!(query.search, "ana");
        assert_eq!(query.age_under, Some(12));
        assert_eq!(query.sort, ParticipantSort::AgeDescending);
        assert_eq!(query.today, today);
    }
}
