// backend/src/domain/commands.rs

//! Domain-level command and query types
//! These structs are used by services inside the domain layer and are **not**
//! exposed to the presentation layer. The `io` layer is responsible for
//! mapping the public DTOs defined in the `shared` crate to these internal
//! types.

pub mod participants {
    use chrono::NaiveDate;

    /// Input for adding a participant.
    #[derive(Debug, Clone, Default)]
    pub struct CreateParticipantCommand {
        pub first_name: String,
        pub last_name: String,
        /// Raw YYYY-MM-DD input; blank means no birth date
        pub birth_date: Option<String>,
    }

    /// How the participant table is ordered.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub enum ParticipantSort {
        #[default]
        FullName,
        AgeAscending,
        AgeDescending,
    }

    /// Transient table inputs for the participant view.
    #[derive(Debug, Clone)]
    pub struct ParticipantQuery {
        /// Case-insensitive substring of the full name; blank matches everyone
        pub search: String,
        /// Keep only participants strictly younger than this many years
        pub age_under: Option<u32>,
        pub sort: ParticipantSort,
        /// Reference date for ages
        pub today: NaiveDate,
    }

    impl ParticipantQuery {
        /// Unfiltered, name-sorted query as of `today`
        pub fn new(today: NaiveDate) -> Self {
            Self {
                search: String::new(),
                age_under: None,
                sort: ParticipantSort::FullName,
                today,
            }
        }
    }
}

pub mod sessions {
    use chrono::NaiveDate;
    use shared::{Environment, ScoringMode, SessionParticipant};

    /// Input for creating a session. Counts and distance carry raw form numbers.
    #[derive(Debug, Clone)]
    pub struct CreateSessionCommand {
        pub date: NaiveDate,
        pub title: Option<String>,
        pub notes: Option<String>,
        pub distance: f64,
        pub environment: Environment,
        pub sets_count: f64,
        pub arrows_per_set: f64,
        /// `None` picks the default for the distance
        pub scoring_mode: Option<ScoringMode>,
        pub participants: Vec<SessionParticipant>,
    }
}
