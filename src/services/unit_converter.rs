//! Conversor de unidades de distancia
//!
//! Las distancias se almacenan siempre en millas (unidad canónica). Este
//! módulo convierte hacia la unidad preferida del usuario al mostrar y de
//! vuelta a millas al aceptar entrada. El redondeo es al entero más
//! cercano, mitades hacia fuera de cero (`f64::round`), así que el ciclo
//! km -> mi -> km es lossy con tolerancia de ±1 milla.

use crate::config::environment::MILES_TO_KM;
use crate::models::preferences::{DistanceUnit, Language};
use crate::utils::errors::{field_error, AppResult};
use crate::utils::validation::validate_non_negative;

/// Conversor de distancias entre la unidad canónica y la de display
#[derive(Debug, Clone)]
pub struct UnitConverter;

impl UnitConverter {
    pub fn new() -> Self {
        Self
    }

    /// Convertir millas canónicas al valor numérico de display
    pub fn to_display(&self, miles: i64, unit: DistanceUnit) -> AppResult<i64> {
        validate_non_negative(miles).map_err(|e| field_error("miles", e))?;

        Ok(match unit {
            DistanceUnit::Miles => miles,
            DistanceUnit::Kilometers => (miles as f64 * MILES_TO_KM).round() as i64,
        })
    }

    /// Convertir un valor de display de vuelta a millas canónicas
    pub fn to_canonical(&self, display_value: i64, unit: DistanceUnit) -> AppResult<i64> {
        validate_non_negative(display_value).map_err(|e| field_error("display_value", e))?;

        Ok(match unit {
            DistanceUnit::Miles => display_value,
            DistanceUnit::Kilometers => (display_value as f64 / MILES_TO_KM).round() as i64,
        })
    }

    /// Renderizar una distancia para la UI
    ///
    /// Cero o ausente se muestra como el placeholder "no disponible" del
    /// idioma, nunca como "0".
    pub fn format_label(
        &self,
        miles: Option<i64>,
        unit: DistanceUnit,
        show_unit: bool,
        language: Language,
    ) -> AppResult<String> {
        let canonical = match miles {
            None | Some(0) => return Ok(not_available_label(language).to_string()),
            Some(value) => value,
        };

        let display_value = self.to_display(canonical, unit)?;
        let grouped = group_thousands(display_value, thousands_separator(language));

        Ok(if show_unit {
            format!("{} {}", grouped, unit_suffix(unit))
        } else {
            grouped
        })
    }
}

impl Default for UnitConverter {
    fn default() -> Self {
        Self::new()
    }
}

fn unit_suffix(unit: DistanceUnit) -> &'static str {
    match unit {
        DistanceUnit::Miles => "mi",
        DistanceUnit::Kilometers => "km",
    }
}

fn not_available_label(language: Language) -> &'static str {
    match language {
        Language::En => "N/A",
        Language::Es => "N/D",
        Language::Fr => "N/D",
    }
}

fn thousands_separator(language: Language) -> char {
    match language {
        Language::En => ',',
        Language::Es => '.',
        Language::Fr => ' ',
    }
}

/// Agrupar dígitos de tres en tres; solo valores no negativos
fn group_thousands(value: i64, separator: char) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(digit);
    }

    grouped
}
