//! Servicio de historial de kilometraje
//!
//! Registra lecturas de odómetro y mantiene la regla de avance del
//! kilometraje del vehículo: el odómetro solo sube con una lectura mayor.
//! Las lecturas en sí se aceptan fuera de orden; el historial es un
//! registro de lo que el usuario tecleó, no una serie saneada.

use chrono::NaiveDate;
use tracing::info;
use uuid::Uuid;
use validator::Validate;

use crate::models::mileage_log::{MileageLogEntry, NewMileageLog};
use crate::models::vehicle::Vehicle;
use crate::utils::errors::{validation_error, AppResult};

/// Servicio de registro de kilometraje
pub struct MileageService;

impl MileageService {
    pub fn new() -> Self {
        Self
    }

    /// Registrar una lectura de odómetro
    ///
    /// Devuelve la entrada de historial y el vehículo con el odómetro
    /// avanzado cuando la lectura lo supera.
    pub fn record(
        &self,
        vehicle: &Vehicle,
        request: NewMileageLog,
        today: NaiveDate,
    ) -> AppResult<(MileageLogEntry, Vehicle)> {
        request.validate()?;

        if request.vehicle_id != vehicle.id {
            return Err(validation_error(
                "vehicle_id",
                "log entry does not belong to this vehicle",
            ));
        }

        let entry = MileageLogEntry {
            id: Uuid::new_v4(),
            vehicle_id: vehicle.id,
            user_id: vehicle.user_id,
            mileage: request.mileage,
            date: request.date.unwrap_or(today),
            notes: request.notes,
        };

        let updated_vehicle = vehicle.register_mileage(request.mileage);

        info!(
            "📈 Lectura de {} millas registrada para vehículo {}",
            entry.mileage, entry.vehicle_id
        );

        Ok((entry, updated_vehicle))
    }

    /// Ordenar el historial para mostrarlo: fecha más reciente primero
    pub fn history(&self, mut entries: Vec<MileageLogEntry>) -> Vec<MileageLogEntry> {
        entries.sort_by(|a, b| b.date.cmp(&a.date));
        entries
    }
}

impl Default for MileageService {
    fn default() -> Self {
        Self::new()
    }
}
