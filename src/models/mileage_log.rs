//! Modelo de MileageLogEntry
//!
//! Historial de lecturas de odómetro por vehículo. Secuencia append-only:
//! las entradas no se editan, solo se añaden o se borran explícitamente.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Entrada del historial de kilometraje
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MileageLogEntry {
    pub id: Uuid,
    pub vehicle_id: Uuid,
    pub user_id: Uuid,
    pub mileage: i64,
    pub date: NaiveDate,
    pub notes: Option<String>,
}

/// Request para registrar una nueva lectura
#[derive(Debug, Deserialize, Validate)]
pub struct NewMileageLog {
    pub vehicle_id: Uuid,

    #[validate(range(min = 0))]
    pub mileage: i64,

    /// Fecha de la lectura; cuando falta se usa la fecha actual
    pub date: Option<NaiveDate>,

    #[validate(length(max = 1000))]
    pub notes: Option<String>,
}
