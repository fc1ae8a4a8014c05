//! Localized display labels.
//!
//! Only the strings that end up inside computed values (generated session
//! names, badges, format lines) live here; page copy belongs to the
//! presentation layer.

use serde::{Deserialize, Deserializer, Serialize};
use shared::{Environment, ScoringMode, TargetZone};

use crate::domain::models::session::SessionValidationError;

/// Supported UI languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Ru,
    Tr,
}

impl Locale {
    pub const ALL: [Locale; 3] = [Locale::En, Locale::Ru, Locale::Tr];

    /// Resolve a locale code; anything unknown falls back to English
    pub fn from_code(code: &str) -> Self {
        match code.trim().to_ascii_lowercase().as_str() {
            "ru" => Locale::Ru,
            "tr" => Locale::Tr,
            _ => Locale::En,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Ru => "ru",
            Locale::Tr => "tr",
        }
    }
}

// Unknown codes read as English instead of failing the whole document
impl<'de> Deserialize<'de> for Locale {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let code = String::deserialize(deserializer)?;
        Ok(Locale::from_code(&code))
    }
}

/// Label for where the session was shot
pub fn environment_label(locale: Locale, environment: Environment) -> &'static str {
    match (locale, environment) {
        (Locale::En, Environment::Indoor) => "Indoor",
        (Locale::En, Environment::Outdoor) => "Outdoor",
        (Locale::Ru, Environment::Indoor) => "Закрытое",
        (Locale::Ru, Environment::Outdoor) => "Открытое",
        (Locale::Tr, Environment::Indoor) => "Kapalı alan",
        (Locale::Tr, Environment::Outdoor) => "Açık alan",
    }
}

/// Short badge shown next to a session's format
pub fn scoring_badge(locale: Locale, mode: ScoringMode) -> &'static str {
    match (locale, mode) {
        (Locale::En, ScoringMode::Normal) => "normal",
        (Locale::En, ScoringMode::HitsOnly) => "hits-only",
        (Locale::En, ScoringMode::CenterOnly) => "center-only",
        (Locale::Ru, ScoringMode::Normal) => "обычный",
        (Locale::Ru, ScoringMode::HitsOnly) => "только попад.",
        (Locale::Ru, ScoringMode::CenterOnly) => "только центр",
        (Locale::Tr, ScoringMode::Normal) => "normal",
        (Locale::Tr, ScoringMode::HitsOnly) => "sadece isabet",
        (Locale::Tr, ScoringMode::CenterOnly) => "sadece merkez",
    }
}

/// Long description used in the scoring mode selector
pub fn scoring_description(locale: Locale, mode: ScoringMode) -> &'static str {
    match (locale, mode) {
        (Locale::En, ScoringMode::Normal) => "Normal (hit=1, center=2/3)",
        (Locale::En, ScoringMode::HitsOnly) => "Hits only (hit=1, center disabled)",
        (Locale::En, ScoringMode::CenterOnly) => "Center only (center=1, hit disabled)",
        (Locale::Ru, ScoringMode::Normal) => "Обычный (попад=1, центр=2/3)",
        (Locale::Ru, ScoringMode::HitsOnly) => "Только попадания (попад=1, центр нельзя)",
        (Locale::Ru, ScoringMode::CenterOnly) => "Только центр (центр=1, попад нельзя)",
        (Locale::Tr, ScoringMode::Normal) => "Normal (isabet=1, merkez=2/3)",
        (Locale::Tr, ScoringMode::HitsOnly) => "Sadece isabet (isabet=1, merkez kapalı)",
        (Locale::Tr, ScoringMode::CenterOnly) => "Sadece merkez (merkez=1, isabet kapalı)",
    }
}

pub fn target_label(locale: Locale, target: TargetZone) -> &'static str {
    match (locale, target) {
        (Locale::En, TargetZone::Head) => "Head (3 in normal)",
        (Locale::En, TargetZone::Belly) => "Belly (2 in normal)",
        (Locale::Ru, TargetZone::Head) => "Голова (3 в обычном)",
        (Locale::Ru, TargetZone::Belly) => "Живот (2 в обычном)",
        (Locale::Tr, TargetZone::Head) => "Kafa (normalde 3)",
        (Locale::Tr, TargetZone::Belly) => "Göbek (normalde 2)",
    }
}

/// Prefix optionally placed before generated session names
pub fn auto_name_prefix(locale: Locale) -> &'static str {
    match locale {
        Locale::En => "Auto name",
        Locale::Ru => "Авто-имя",
        Locale::Tr => "Oto ad",
    }
}

/// Message shown under the session form for a rejected submit
pub fn session_error_message(locale: Locale, error: &SessionValidationError) -> &'static str {
    match (locale, error) {
        (Locale::En, SessionValidationError::TitleTaken(_)) => "Title must be unique.",
        (Locale::En, SessionValidationError::NoParticipants) => "Select at least one participant.",
        (Locale::En, SessionValidationError::InvalidDate(_)) => "Enter a valid date.",
        (Locale::Ru, SessionValidationError::TitleTaken(_)) => "Название должно быть уникальным.",
        (Locale::Ru, SessionValidationError::NoParticipants) => "Выбери хотя бы одного участника.",
        (Locale::Ru, SessionValidationError::InvalidDate(_)) => "Укажи корректную дату.",
        (Locale::Tr, SessionValidationError::TitleTaken(_)) => "Başlık benzersiz olmalı.",
        (Locale::Tr, SessionValidationError::NoParticipants) => "En az bir katılımcı seç.",
        (Locale::Tr, SessionValidationError::InvalidDate(_)) => "Geçerli bir tarih gir.",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locale_from_code() {
        assert_eq!(Locale::from_code("ru"), Locale::Ru);
        assert_eq!(Locale::from_code(" TR "), Locale::Tr);
        assert_eq!(Locale::from_code("en"), Locale::En);
        assert_eq!(Locale::from_code("de"), Locale::En);
        assert_eq!(Locale::from_code(""), Locale::En);
    }

    #[test]
    fn test_locale_codes_round_trip() {
        for locale in Locale::ALL {
            assert_eq!(Locale::from_code(locale.code()), locale);
        }
    }

    #[test]
    fn test_english_badges() {
        assert_eq!(scoring_badge(Locale::En, ScoringMode::Normal), "normal");
        assert_eq!(scoring_badge(Locale::En, ScoringMode::HitsOnly), "hits-only");
        assert_eq!(scoring_badge(Locale::En, ScoringMode::CenterOnly), "center-only");
    }

    #[test]
    fn test_environment_labels() {
        assert_eq!(environment_label(Locale::En, Environment::Outdoor), "Outdoor");
        assert_eq!(environment_label(Locale::Ru, Environment::Indoor), "Закрытое");
        assert_eq!(environment_label(Locale::Tr, Environment::Outdoor), "Açık alan");
    }

    #[test]
    fn test_session_error_messages() {
        assert_eq!(
            session_error_message(Locale::En, &SessionValidationError::NoParticipants),
            "Select at least one participant."
        );
        assert_eq!(
            session_error_message(Locale::Ru, &SessionValidationError::TitleTaken("x".to_string())),
            "Название должно быть уникальным."
        );
    }

    #[test]
    fn test_locale_serde_codes() {
        assert_eq!(serde_json::to_string(&Locale::Ru).unwrap(), "\"ru\"");
        let locale: Locale = serde_json::from_str("\"tr\"").unwrap();
        assert_eq!(locale, Locale::Tr);
        let unknown: Locale = serde_json::from_str("\"de\"").unwrap();
        assert_eq!(unknown, Locale::En);
    }

    #[test]
    fn test_scoring_descriptions() {
        let cases = [
            (Locale::En, ScoringMode::Normal, "Normal (hit=1, center=2/3)"),
            (Locale::En, ScoringMode::CenterOnly, "Center only (center=1, hit disabled)"),
            (Locale::Ru, ScoringMode::HitsOnly, "Только попадания (попад=1, центр нельзя)"),
            (Locale::Tr, ScoringMode::HitsOnly, "Sadece isabet (isabet=1, merkez kapalı)"),
        ];
        for (locale, mode, expected) in cases {
            assert_eq!(scoring_description(locale, mode), expected);
        }
    }

    #[test]
    fn test_target_labels() {
        let cases = [
            (Locale::En, TargetZone::Head, "Head (3 in normal)"),
            (Locale::En, TargetZone::Belly, "Belly (2 in normal)"),
            (Locale::Ru, TargetZone::Belly, "Живот (2 в обычном)"),
            (Locale::Tr, TargetZone::Head, "Kafa (normalde 3)"),
        ];
        for (locale, target, expected) in cases {
            assert_eq!(target_label(locale, target), expected);
        }
    }
}
