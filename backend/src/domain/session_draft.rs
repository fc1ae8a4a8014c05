//! Session form state for the archery journal.
//!
//! The draft holds what the operator has typed so far, keeps the scoring mode
//! in step with the distance until the operator picks a mode by hand, and
//! tracks which athletes are selected with which target zone. The UI only
//! renders the draft and forwards input events to it.

use chrono::NaiveDate;
use shared::{Environment, ScoringMode, SessionParticipant, TargetZone};

use crate::domain::commands::sessions::CreateSessionCommand;
use crate::domain::models::session::{
    default_mode_for_distance, DEFAULT_ARROWS_PER_SET, DEFAULT_DISTANCE_METERS, DEFAULT_SETS_COUNT,
};
use crate::domain::session_service::SessionService;

/// Editable session form
#[derive(Debug, Clone, PartialEq)]
pub struct SessionDraft {
    pub date: NaiveDate,
    pub title: String,
    pub notes: String,
    pub environment: Environment,
    pub sets_count: f64,
    pub arrows_per_set: f64,
    distance: f64,
    scoring_mode: ScoringMode,
    mode_touched: bool,
    /// Selected athletes in selection order
    selected: Vec<SessionParticipant>,
}

/// Live validation state of a draft against the current session list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DraftValidation {
    pub title_taken: bool,
    pub needs_participants: bool,
}

impl DraftValidation {
    pub fn can_submit(&self) -> bool {
        !self.title_taken && !self.needs_participants
    }
}

impl SessionDraft {
    /// Fresh form dated `today` with the standard defaults
    pub fn new(today: NaiveDate) -> Self {
        Self {
            date: today,
            title: String::new(),
            notes: String::new(),
            environment: Environment::Indoor,
            sets_count: DEFAULT_SETS_COUNT as f64,
            arrows_per_set: DEFAULT_ARROWS_PER_SET as f64,
            distance: DEFAULT_DISTANCE_METERS,
            scoring_mode: default_mode_for_distance(DEFAULT_DISTANCE_METERS),
            mode_touched: false,
            selected: Vec::new(),
        }
    }

    pub fn distance(&self) -> f64 {
        self.distance
    }

    pub fn scoring_mode(&self) -> ScoringMode {
        self.scoring_mode
    }

    pub fn is_mode_touched(&self) -> bool {
        self.mode_touched
    }

    /// Change the distance; the scoring mode follows unless it was picked by hand
    pub fn set_distance(&mut self, distance: f64) {
        self.distance = distance;
        if !self.mode_touched {
            self.scoring_mode = default_mode_for_distance(distance);
        }
    }

    /// Manual scoring mode pick; stops automatic selection for this draft
    pub fn set_scoring_mode(&mut self, mode: ScoringMode) {
        self.scoring_mode = mode;
        self.mode_touched = true;
    }

    pub fn selected(&self) -> &[SessionParticipant] {
        &self.selected
    }

    pub fn is_selected(&self, athlete_id: &str) -> bool {
        self.selected.iter().any(|p| p.athlete_id == athlete_id)
    }

    /// Target for an athlete; unselected athletes show the default head target
    pub fn target_for(&self, athlete_id: &str) -> TargetZone {
        self.selected
            .iter()
            .find(|p| p.athlete_id == athlete_id)
            .map(|p| p.target)
            .unwrap_or_default()
    }

    /// Select an athlete (aiming at the head) or deselect them
    pub fn toggle_athlete(&mut self, athlete_id: &str) {
        if self.is_selected(athlete_id) {
            self.selected.retain(|p| p.athlete_id != athlete_id);
        } else {
            self.selected.push(SessionParticipant {
                athlete_id: athlete_id.to_string(),
                target: TargetZone::Head,
            });
        }
    }

    /// Set an athlete's target, selecting them if needed
    pub fn set_target(&mut self, athlete_id: &str, target: TargetZone) {
        match self.selected.iter_mut().find(|p| p.athlete_id == athlete_id) {
            Some(existing) => existing.target = target,
            None => self.selected.push(SessionParticipant {
                athlete_id: athlete_id.to_string(),
                target,
            }),
        }
    }

    /// Drop selections whose athlete no longer exists
    pub fn retain_athletes<'a, I>(&mut self, athlete_ids: I)
    where
        I: IntoIterator<Item = &'a str>,
    {
        let known: Vec<&str> = athlete_ids.into_iter().collect();
        self.selected
            .retain(|p| known.contains(&p.athlete_id.as_str()));
    }

    pub fn validate(&self, sessions: &SessionService) -> DraftValidation {
        DraftValidation {
            title_taken: sessions.is_title_taken(&self.title),
            needs_participants: self.selected.is_empty(),
        }
    }

    pub fn to_command(&self) -> CreateSessionCommand {
        CreateSessionCommand {
            date: self.date,
            title: Some(self.title.clone()),
            notes: Some(self.notes.clone()),
            distance: self.distance,
            environment: self.environment,
            sets_count: self.sets_count,
            arrows_per_set: self.arrows_per_set,
            scoring_mode: Some(self.scoring_mode),
            participants: self.selected.clone(),
        }
    }

    /// Clear the per-session fields after a successful submit.
    /// Date, distance, format and scoring mode carry over to the next entry.
    pub fn reset_after_submit(&mut self) {
        self.title.clear();
        self.notes.clear();
        self.selected.clear();
    }
}
