//! Configuración de variables de entorno
//!
//! Este módulo maneja los umbrales de urgencia del motor de estado.
//! Son configuración de proceso: se leen una sola vez al arrancar y
//! nunca se mutan después.

use std::env;

use lazy_static::lazy_static;

/// Factor de conversión de millas a kilómetros
pub const MILES_TO_KM: f64 = 1.60934;

/// Umbrales de urgencia del motor de estado
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Ventana de millas para considerar una tarea "due soon"
    pub due_soon_miles_threshold: i64,
    /// Ventana de días para considerar una tarea "due soon"
    pub due_soon_days_threshold: i64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            due_soon_miles_threshold: env::var("DUE_SOON_MILES_THRESHOLD")
                .unwrap_or_else(|_| "500".to_string())
                .parse()
                .unwrap_or(500),
            due_soon_days_threshold: env::var("DUE_SOON_DAYS_THRESHOLD")
                .unwrap_or_else(|_| "14".to_string())
                .parse()
                .unwrap_or(14),
        }
    }
}

lazy_static! {
    /// Configuración compartida del motor, cargada al primer acceso
    pub static ref ENGINE_CONFIG: EngineConfig = EngineConfig::default();
}
