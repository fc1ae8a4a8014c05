use serde::{Deserialize, Serialize};
use std::fmt;

/// Storage slot holding the legacy single-name participant list
pub const ATHLETES_V1_KEY: &str = "archery.athletes.v1";

/// Storage slot holding the canonical participant list
pub const ATHLETES_V2_KEY: &str = "archery.athletes.v2";

/// Storage slot holding the session list (only written when session persistence is enabled)
pub const SESSIONS_V1_KEY: &str = "archery.sessions.v1";

/// Participant as persisted in the canonical (v2) slot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParticipantRecord {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    /// ISO 8601 date format (YYYY-MM-DD)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<String>,
    /// RFC 3339 timestamp
    pub created_at: String,
}

/// Participant as persisted in the legacy (v1) slot, read by older consumers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegacyParticipantRecord {
    pub id: String,
    pub name: String,
    /// RFC 3339 timestamp
    pub created_at: String,
}

/// Where a session was shot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Indoor,
    Outdoor,
}

impl Default for Environment {
    fn default() -> Self {
        Environment::Indoor
    }
}

/// Rule set determining how hits are scored
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ScoringMode {
    /// hit = 1, center = 2 (belly) or 3 (head)
    Normal,
    /// hit = 1, center scoring disabled
    HitsOnly,
    /// center = 1, plain hits disabled
    CenterOnly,
}

impl fmt::Display for ScoringMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScoringMode::Normal => write!(f, "normal"),
            ScoringMode::HitsOnly => write!(f, "hitsOnly"),
            ScoringMode::CenterOnly => write!(f, "centerOnly"),
        }
    }
}

/// Aim area assigned to a participant within a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetZone {
    Head,
    Belly,
}

impl Default for TargetZone {
    fn default() -> Self {
        TargetZone::Head
    }
}

/// One athlete's participation in a session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionParticipant {
    pub athlete_id: String,
    pub target: TargetZone,
}

/// Session as persisted and as handed to the presentation layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionRecord {
    pub id: String,
    /// ISO 8601 date format (YYYY-MM-DD)
    pub date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Shooting distance in meters
    pub distance: f64,
    pub environment: Environment,
    pub sets_count: u32,
    pub arrows_per_set: u32,
    pub scoring_mode: ScoringMode,
    pub participants: Vec<SessionParticipant>,
    /// RFC 3339 timestamp
    pub created_at: String,
}

/// Request for adding a participant
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreateParticipantRequest {
    pub first_name: String,
    pub last_name: String,
    /// ISO 8601 date format (YYYY-MM-DD)
    pub birth_date: Option<String>,
}

/// Response after adding a participant.
/// `participant` is `None` when the request was rejected.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CreateParticipantResponse {
    pub success: bool,
    pub participant: Option<ParticipantRecord>,
    pub message: String,
}

/// Request for creating a session.
/// Numeric fields carry raw form input; the backend truncates and clamps them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreateSessionRequest {
    /// ISO 8601 date format (YYYY-MM-DD)
    pub date: String,
    pub title: Option<String>,
    pub notes: Option<String>,
    pub distance: f64,
    pub environment: Environment,
    pub sets_count: f64,
    pub arrows_per_set: f64,
    /// `None` lets the backend pick the default for the distance
    pub scoring_mode: Option<ScoringMode>,
    pub participants: Vec<SessionParticipant>,
}

/// Response after creating a session.
/// `session` is `None` when the request was rejected.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CreateSessionResponse {
    pub success: bool,
    pub session: Option<SessionRecord>,
    pub message: String,
}

/// Response after removing a participant or a session
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DeleteResponse {
    pub deleted: bool,
    pub message: String,
}

/// Sort key for the participant table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ParticipantSortKey {
    Name,
    AgeAscending,
    AgeDescending,
}

impl Default for ParticipantSortKey {
    fn default() -> Self {
        ParticipantSortKey::Name
    }
}

/// Transient participant table inputs (search box, age filter toggle, sort selector)
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ParticipantListRequest {
    pub search: String,
    /// When set, only participants strictly younger than this many years are shown
    pub age_under: Option<u32>,
    pub sort: ParticipantSortKey,
}

/// A participant row ready for display
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ParticipantRow {
    pub id: String,
    pub full_name: String,
    pub birth_date: Option<String>,
    pub age: Option<u32>,
    pub created_at: String,
}

/// Response containing the participant table
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ParticipantListResponse {
    pub rows: Vec<ParticipantRow>,
    /// Size of the roster before filtering
    pub total: usize,
}

/// A session row ready for display
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SessionRow {
    pub id: String,
    pub date: String,
    pub display_name: String,
    pub notes: Option<String>,
    /// e.g. "70m · Outdoor"
    pub format_line: String,
    /// e.g. "7 × 5 · hits-only"
    pub volume_line: String,
    pub scoring_badge: String,
    pub participant_count: usize,
    pub participant_names: Vec<String>,
}

/// Response containing the session table
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SessionListResponse {
    pub rows: Vec<SessionRow>,
}
