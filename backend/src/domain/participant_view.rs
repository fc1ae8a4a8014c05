//! Participant table projection.
//!
//! Pure functions over the roster: nothing here mutates or persists. The
//! same roster and query always produce the same rows.

use std::cmp::Ordering;

use crate::domain::collation::{compare_names, contains_ignore_case};
use crate::domain::commands::participants::{ParticipantQuery, ParticipantSort};
use crate::domain::models::participant::Participant;

/// Filter and order the roster for the participant table
pub fn project<'a>(participants: &'a [Participant], query: &ParticipantQuery) -> Vec<&'a Participant> {
    let mut rows: Vec<&Participant> = participants
        .iter()
        .filter(|p| contains_ignore_case(&p.full_name(), &query.search))
        .filter(|p| match query.age_under {
            Some(limit) => p.age_on(query.today).is_some_and(|age| age < limit),
            None => true,
        })
        .collect();

    match query.sort {
        ParticipantSort::FullName => rows.sort_by(|a, b| by_full_name(a, b)),
        ParticipantSort::AgeAscending => {
            rows.sort_by(|a, b| by_age(a, b, query, false).then_with(|| by_full_name(a, b)))
        }
        ParticipantSort::AgeDescending => {
            rows.sort_by(|a, b| by_age(a, b, query, true).then_with(|| by_full_name(a, b)))
        }
    }
    rows
}

/// Athletes offered in the session form, alphabetically
pub fn selection_list(participants: &[Participant]) -> Vec<&Participant> {
    let mut list: Vec<&Participant> = participants.iter().collect();
    list.sort_by(|a, b| by_full_name(a, b));
    list
}

fn by_full_name(a: &Participant, b: &Participant) -> Ordering {
    compare_names(&a.full_name(), &b.full_name())
}

// Missing ages sort last whichever way the ages run
fn by_age(a: &Participant, b: &Participant, query: &ParticipantQuery, descending: bool) -> Ordering {
    match (a.age_on(query.today), b.age_on(query.today)) {
        (Some(x), Some(y)) if descending => y.cmp(&x),
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
