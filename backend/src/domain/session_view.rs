//! Session table projection and the strings derived from a session.

use std::cmp::Ordering;

use crate::domain::labels::{auto_name_prefix, environment_label, scoring_badge, Locale};
use crate::domain::models::participant::Participant;
use crate::domain::models::session::Session;
use crate::domain::models::DATE_FORMAT;

/// Presentation settings that affect derived session strings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionLabels {
    pub locale: Locale,
    /// Put the localized "Auto name" prefix before generated names
    pub show_auto_name_prefix: bool,
}

impl Default for SessionLabels {
    fn default() -> Self {
        Self {
            locale: Locale::En,
            show_auto_name_prefix: true,
        }
    }
}

/// Sessions ordered newest date first; same-day sessions by creation time, newest first
pub fn sorted(sessions: &[Session]) -> Vec<&Session> {
    let mut rows: Vec<&Session> = sessions.iter().collect();
    rows.sort_by(|a, b| newest_first(a, b));
    rows
}

fn newest_first(a: &Session, b: &Session) -> Ordering {
    b.date
        .cmp(&a.date)
        .then_with(|| b.created_at.cmp(&a.created_at))
}

/// Whole meters print without a fractional part
pub fn format_distance(distance: f64) -> String {
    if distance.is_finite() && distance.fract() == 0.0 {
        format!("{:.0}", distance)
    } else {
        distance.to_string()
    }
}

/// `"<distance>m · <environment>"`
pub fn format_line(session: &Session, locale: Locale) -> String {
    format!(
        "{}m · {}",
        format_distance(session.distance),
        environment_label(locale, session.environment)
    )
}

/// `"<sets> × <arrows> · <badge>"`
pub fn volume_line(session: &Session, locale: Locale) -> String {
    format!(
        "{} × {} · {}",
        session.sets_count,
        session.arrows_per_set,
        scoring_badge(locale, session.scoring_mode)
    )
}

/// The trimmed title, or a name generated from date, distance and environment
pub fn display_name(session: &Session, labels: SessionLabels) -> String {
    if let Some(title) = session.title.as_deref().map(str::trim) {
        if !title.is_empty() {
            return title.to_string();
        }
    }

    let generated = format!(
        "{} · {}",
        session.date.format(DATE_FORMAT),
        format_line(session, labels.locale)
    );
    if labels.show_auto_name_prefix {
        format!("{}: {}", auto_name_prefix(labels.locale), generated)
    } else {
        generated
    }
}

/// Full names of the session's athletes in session order.
/// Athletes missing from the roster show their raw id.
pub fn participant_names(session: &Session, roster: &[Participant]) -> Vec<String> {
    session
        .participants
        .iter()
        .map(|sp| {
            roster
                .iter()
                .find(|p| p.id == sp.athlete_id)
                .map(Participant::full_name)
                .unwrap_or_else(|| sp.athlete_id.clone())
        })
        .collect()
}
