//! Domain model for a participant (athlete).
use chrono::{DateTime, Datelike, NaiveDate, Utc};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq)]
pub struct Participant {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub birth_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
}

impl Participant {
    pub fn generate_id() -> String {
        Uuid::new_v4().to_string()
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Completed years on `today`; `None` without a birth date
    pub fn age_on(&self, today: NaiveDate) -> Option<u32> {
        self.birth_date.map(|birth| completed_years(birth, today))
    }

    /// Split a legacy single-field name: first token is the first name,
    /// the rest (single-space joined) is the last name.
    pub fn split_legacy_name(name: &str) -> (String, String) {
        let mut tokens = name.split_whitespace();
        let first = tokens.next().unwrap_or_default().to_string();
        let rest = tokens.collect::<Vec<_>>().join(" ");
        (first, rest)
    }
}

/// Whole years between `birth` and `today`, one less if this year's birthday
/// has not been reached yet. Birth dates after `today` count as zero.
pub fn completed_years(birth: NaiveDate, today: NaiveDate) -> u32 {
    let mut years = today.year() - birth.year();
    if (today.month(), today.day()) < (birth.month(), birth.day()) {
        years -= 1;
    }
    years.max(0) as u32
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParticipantValidationError {
    #[error("First name cannot be empty")]
    EmptyFirstName,
    #[error("Last name cannot be empty")]
    EmptyLastName,
    #[error("Birth date must be in YYYY-MM-DD format: {0}")]
    InvalidBirthDate(String),
    #[error("Birth date cannot be in the future")]
    BirthDateInFuture,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_completed_years() {
        let birth = date(2010, 6, 15);

        assert_eq!(completed_years(birth, date(2024, 6, 14)), 13);
        assert_eq!(completed_years(birth, date(2024, 6, 15)), 14);
        assert_eq!(completed_years(birth, date(2024, 12, 31)), 14);
        assert_eq!(completed_years(birth, date(2010, 6, 15)), 0);
        assert_eq!(completed_years(birth, date(2009, 1, 1)), 0);
    }

    #[test]
    fn test_completed_years_leap_day_birthday() {
        let birth = date(2012, 2, 29);

        assert_eq!(completed_years(birth, date(2023, 2, 28)), 10);
        assert_eq!(completed_years(birth, date(2023, 3, 1)), 11);
        assert_eq!(completed_years(birth, date(2024, 2, 29)), 12);
    }

    #[test]
    fn test_full_name_and_age() {
        let participant = Participant {
            id: "p1".to_string(),
            first_name: "Ana".to_string(),
            last_name: "Lopez".to_string(),
            birth_date: Some(date(2000, 1, 1)),
            created_at: Utc::now(),
        };

        assert_eq!(participant.full_name(), "Ana Lopez");
        assert_eq!(participant.age_on(date(2020, 1, 1)), Some(20));

        let no_birth = Participant {
            birth_date: None,
            ..participant
        };
        assert_eq!(no_birth.age_on(date(2020, 1, 1)), None);
    }

    #[test]
    fn test_split_legacy_name() {
        assert_eq!(
            Participant::split_legacy_name("Ana Maria Lopez"),
            ("Ana".to_string(), "Maria Lopez".to_string())
        );
        assert_eq!(
            Participant::split_legacy_name("  Pasha  "),
            ("Pasha".to_string(), String::new())
        );
        assert_eq!(
            Participant::split_legacy_name("Ana   Maria\tLopez"),
            ("Ana".to_string(), "Maria Lopez".to_string())
        );
        assert_eq!(Participant::split_legacy_name(""), (String::new(), String::new()));
    }

    #[test]
    fn test_generated_ids_are_unique() {
        let a = Participant::generate_id();
        let b = Participant::generate_id();
        assert_ne!(a, b);
        assert_eq!(a.len(), 36);
    }
}
