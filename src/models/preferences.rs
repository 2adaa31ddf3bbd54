//! Modelo de UserPreferences
//!
//! Preferencias resueltas del usuario. El núcleo nunca lee storage ni
//! base de datos: la capa externa resuelve las preferencias y nos pasa
//! el registro ya montado.

use serde::{Deserialize, Serialize};

/// Unidad de distancia preferida - valores wire en minúsculas
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DistanceUnit {
    Miles,
    Kilometers,
}

/// Idioma de la interfaz
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    En,
    Es,
    Fr,
}

/// Tema de la interfaz
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
}

/// Preferencias del usuario
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserPreferences {
    pub distance_unit: DistanceUnit,
    pub language: Language,
    pub theme: Theme,
    pub email_reminders: bool,
    pub push_notifications: bool,
    pub reminder_days_before: i64,
}

impl Default for UserPreferences {
    fn default() -> Self {
        Self {
            distance_unit: DistanceUnit::Miles,
            language: Language::En,
            theme: Theme::Light,
            email_reminders: true,
            push_notifications: true,
            reminder_days_before: 7,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_registration_settings() {
        let prefs = UserPreferences::default();
        assert_eq!(prefs.distance_unit, DistanceUnit::Miles);
        assert_eq!(prefs.theme, Theme::Light);
        assert!(prefs.email_reminders);
        assert!(prefs.push_notifications);
        assert_eq!(prefs.reminder_days_before, 7);
    }

    #[test]
    fn test_unit_wire_values() {
        assert_eq!(
            serde_json::to_string(&DistanceUnit::Kilometers).unwrap(),
            "\"kilometers\""
        );
        let parsed: DistanceUnit = serde_json::from_str("\"miles\"").unwrap();
        assert_eq!(parsed, DistanceUnit::Miles);
    }
}
