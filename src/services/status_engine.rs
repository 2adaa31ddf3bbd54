//! Motor de estado de mantenimiento
//!
//! Este módulo clasifica la urgencia de una tarea a partir del kilometraje
//! actual del vehículo y la fecha de hoy. Es una función pura de sus
//! entradas más los dos umbrales de configuración; no toca base de datos
//! ni reloj del sistema.

use chrono::{Months, NaiveDate};
use serde::Serialize;

use crate::config::environment::{EngineConfig, ENGINE_CONFIG};
use crate::models::task::{MaintenanceTask, TaskStatus};
use crate::utils::errors::{field_error, validation_error, AppResult};
use crate::utils::validation::{validate_non_negative, validate_positive};

/// Resultado de evaluar una tarea
#[derive(Debug, Clone, Serialize)]
pub struct StatusReport {
    pub next_due_mileage: i64,
    pub next_due_date: NaiveDate,
    pub status: TaskStatus,
    pub miles_remaining: i64,
    pub days_remaining: i64,
}

/// Motor de estado con sus umbrales de urgencia
#[derive(Debug, Clone)]
pub struct StatusEngine {
    due_soon_miles_threshold: i64,
    due_soon_days_threshold: i64,
}

impl StatusEngine {
    pub fn new(config: &EngineConfig) -> Self {
        Self {
            due_soon_miles_threshold: config.due_soon_miles_threshold,
            due_soon_days_threshold: config.due_soon_days_threshold,
        }
    }

    /// Evaluar una tarea contra el kilometraje actual y la fecha de hoy
    ///
    /// Precedencia de clasificación:
    /// 1. `replacement_requested` activo gana siempre
    /// 2. overdue cuando cualquiera de las dos dimensiones llegó a cero
    /// 3. due_soon cuando cualquiera entra en su ventana de umbral
    /// 4. good en el resto de casos
    ///
    /// Millas y fecha son disparadores independientes (OR, no AND): basta
    /// con que una dimensión cruce su umbral.
    pub fn evaluate(
        &self,
        task: &MaintenanceTask,
        current_mileage: i64,
        today: NaiveDate,
    ) -> AppResult<StatusReport> {
        // Un intervalo cero o negativo deja "next due" sin definir
        validate_positive(task.interval_miles)
            .map_err(|e| field_error("interval_miles", e))?;
        validate_positive(task.interval_months)
            .map_err(|e| field_error("interval_months", e))?;
        validate_non_negative(task.last_performed_mileage)
            .map_err(|e| field_error("last_performed_mileage", e))?;
        validate_non_negative(current_mileage)
            .map_err(|e| field_error("current_mileage", e))?;

        let next_due_mileage = task.last_performed_mileage + task.interval_miles;

        // Suma de meses de calendario: el día se recorta al último día
        // válido del mes destino (31 ene + 1 mes = 28/29 feb)
        let next_due_date = task
            .last_performed_date
            .checked_add_months(Months::new(task.interval_months as u32))
            .ok_or_else(|| validation_error("interval_months", "next due date out of range"))?;

        let miles_remaining = next_due_mileage - current_mileage;
        let days_remaining = next_due_date.signed_duration_since(today).num_days();

        let status = if task.replacement_requested {
            TaskStatus::ReplacementRequested
        } else if miles_remaining <= 0 || days_remaining <= 0 {
            TaskStatus::Overdue
        } else if miles_remaining <= self.due_soon_miles_threshold
            || days_remaining <= self.due_soon_days_threshold
        {
            TaskStatus::DueSoon
        } else {
            TaskStatus::Good
        };

        tracing::debug!(
            "🔎 Tarea {} ({}) -> {} (millas restantes: {}, días restantes: {})",
            task.id,
            task.task_type.as_str(),
            status.as_str(),
            miles_remaining,
            days_remaining
        );

        Ok(StatusReport {
            next_due_mileage,
            next_due_date,
            status,
            miles_remaining,
            days_remaining,
        })
    }
}

impl Default for StatusEngine {
    fn default() -> Self {
        Self::new(&ENGINE_CONFIG)
    }
}
