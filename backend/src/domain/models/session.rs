//! Domain model for a shooting session.
use chrono::{DateTime, NaiveDate, Utc};
use shared::{Environment, ScoringMode, SessionParticipant};
use uuid::Uuid;

/// Distance used when the form holds no usable number
pub const DEFAULT_DISTANCE_METERS: f64 = 18.0;
pub const DEFAULT_SETS_COUNT: u32 = 7;
pub const DEFAULT_ARROWS_PER_SET: u32 = 5;
/// From this distance on, sessions default to hits-only scoring
pub const HITS_ONLY_FROM_METERS: f64 = 70.0;
/// Distances offered as suggestions next to the free-form distance input
pub const DISTANCE_SUGGESTIONS: [u32; 7] = [18, 35, 50, 70, 90, 120, 150];

#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub id: String,
    pub date: NaiveDate,
    pub title: Option<String>,
    pub notes: Option<String>,
    pub distance: f64,
    pub environment: Environment,
    pub sets_count: u32,
    pub arrows_per_set: u32,
    pub scoring_mode: ScoringMode,
    pub participants: Vec<SessionParticipant>,
    pub created_at: DateTime<Utc>,
}

impl Session {
    pub fn generate_id() -> String {
        Uuid::new_v4().to_string()
    }

    /// Title used for uniqueness checks: trimmed and lowercased, `None` if blank
    pub fn title_key(&self) -> Option<String> {
        normalize_title(self.title.as_deref())
    }
}

/// Trim and lowercase a title for comparison; blank titles have no key
pub fn normalize_title(title: Option<&str>) -> Option<String> {
    let trimmed = title?.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_lowercase())
    }
}

/// Trim optional free text, turning blank input into `None`
pub fn clean_optional_text(text: Option<&str>) -> Option<String> {
    let trimmed = text?.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Scoring mode picked automatically for a distance
pub fn default_mode_for_distance(distance: f64) -> ScoringMode {
    if distance >= HITS_ONLY_FROM_METERS {
        ScoringMode::HitsOnly
    } else {
        ScoringMode::Normal
    }
}

/// Truncate a raw count toward zero and floor it at 1.
/// Non-finite input (a cleared number field) also becomes 1.
pub fn clamp_count(raw: f64) -> u32 {
    if !raw.is_finite() || raw < 1.0 {
        return 1;
    }
    let truncated = raw.trunc();
    if truncated >= u32::MAX as f64 {
        u32::MAX
    } else {
        truncated as u32
    }
}

/// Use the raw distance when it is a finite number, otherwise the default
pub fn sanitize_distance(raw: f64) -> f64 {
    if raw.is_finite() {
        raw
    } else {
        DEFAULT_DISTANCE_METERS
    }
}

/// Collapse repeated athletes so each appears once; the last entry's target wins
/// and the position of the first entry is kept.
pub fn dedupe_participants(participants: Vec<SessionParticipant>) -> Vec<SessionParticipant> {
    let mut unique: Vec<SessionParticipant> = Vec::with_capacity(participants.len());
    for participant in participants {
        match unique
            .iter_mut()
            .find(|existing| existing.athlete_id == participant.athlete_id)
        {
            Some(existing) => existing.target = participant.target,
            None => unique.push(participant),
        }
    }
    unique
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SessionValidationError {
    #[error("Select at least one participant")]
    NoParticipants,
    #[error("Title must be unique: {0}")]
    TitleTaken(String),
    #[error("Date must be in YYYY-MM-DD format: {0}")]
    InvalidDate(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::TargetZone;

    #[test]
    fn test_default_mode_for_distance() {
        assert_eq!(default_mode_for_distance(18.0), ScoringMode::Normal);
        assert_eq!(default_mode_for_distance(69.9), ScoringMode::Normal);
        assert_eq!(default_mode_for_distance(70.0), ScoringMode::HitsOnly);
        assert_eq!(default_mode_for_distance(90.0), ScoringMode::HitsOnly);
    }

    #[test]
    fn test_clamp_count() {
        assert_eq!(clamp_count(7.0), 7);
        assert_eq!(clamp_count(5.9), 5);
        assert_eq!(clamp_count(1.0), 1);
        assert_eq!(clamp_count(0.5), 1);
        assert_eq!(clamp_count(0.0), 1);
        assert_eq!(clamp_count(-3.0), 1);
        assert_eq!(clamp_count(f64::NAN), 1);
        assert_eq!(clamp_count(f64::INFINITY), 1);
    }

    #[test]
    fn test_sanitize_distance() {
        assert_eq!(sanitize_distance(70.0), 70.0);
        assert_eq!(sanitize_distance(f64::NAN), DEFAULT_DISTANCE_METERS);
        assert_eq!(sanitize_distance(f64::NEG_INFINITY), DEFAULT_DISTANCE_METERS);
    }

    #[test]
    fn test_normalize_title() {
        assert_eq!(normalize_title(Some("  Morning ")), Some("morning".to_string()));
        assert_eq!(normalize_title(Some("   ")), None);
        assert_eq!(normalize_title(None), None);
    }

    #[test]
    fn test_clean_optional_text() {
        assert_eq!(clean_optional_text(Some(" windy ")), Some("windy".to_string()));
        assert_eq!(clean_optional_text(Some("")), None);
        assert_eq!(clean_optional_text(None), None);
    }

    #[test]
    fn test_dedupe_participants_keeps_last_target() {
        let participants = vec![
            SessionParticipant { athlete_id: "a".to_string(), target: TargetZone::Head },
            SessionParticipant { athlete_id: "b".to_string(), target: TargetZone::Head },
            SessionParticipant { athlete_id: "a".to_string(), target: TargetZone::Belly },
        ];

        let unique = dedupe_participants(participants);
        assert_eq!(unique.len(), 2);
        assert_eq!(unique[0].athlete_id, "a");
        assert_eq!(unique[0].target, TargetZone::Belly);
        assert_eq!(unique[1].athlete_id, "b");
    }

    #[test]
    fn test_distance_suggestions() {
        assert!(DISTANCE_SUGGESTIONS.windows(2).all(|pair| pair[0] < pair[1]));
        assert_eq!(DISTANCE_SUGGESTIONS[0] as f64, DEFAULT_DISTANCE_METERS);
        assert!(DISTANCE_SUGGESTIONS.contains(&(HITS_ONLY_FROM_METERS as u32)));
    }
}
