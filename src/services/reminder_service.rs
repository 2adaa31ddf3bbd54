//! Servicio de recordatorios de mantenimiento
//!
//! Decide qué tareas merecen un aviso según la ventana de días que el
//! usuario configuró. Este módulo solo produce los avisos; enviarlos por
//! email o push es trabajo de la capa externa.

use chrono::NaiveDate;
use serde::Serialize;
use tracing::debug;
use uuid::Uuid;

use crate::models::preferences::UserPreferences;
use crate::models::task::{MaintenanceTask, TaskStatus};
use crate::models::task_type::TaskType;
use crate::models::vehicle::Vehicle;
use crate::services::status_engine::StatusEngine;
use crate::utils::errors::{field_error, AppResult};
use crate::utils::validation::validate_range;

/// Aviso de mantenimiento pendiente, listo para que la capa externa lo envíe
#[derive(Debug, Clone, Serialize)]
pub struct ReminderNotice {
    pub task_id: Uuid,
    pub vehicle_id: Uuid,
    pub vehicle_name: String,
    pub task_type: TaskType,
    pub status: TaskStatus,
    pub next_due_mileage: i64,
    pub next_due_date: NaiveDate,
    pub miles_remaining: i64,
    pub days_remaining: i64,
}

/// Servicio de cálculo de recordatorios
pub struct ReminderService {
    engine: StatusEngine,
}

impl ReminderService {
    pub fn new(engine: StatusEngine) -> Self {
        Self { engine }
    }

    /// Calcular los avisos pendientes de un usuario
    ///
    /// Una tarea genera aviso cuando ya está vencida, cuando entra en la
    /// ventana de urgencia del motor, o cuando su fecha de vencimiento cae
    /// dentro de los `reminder_days_before` configurados. Las tareas con
    /// reemplazo ya solicitado no generan aviso: el usuario ya actuó sobre
    /// ellas. Las tareas sin vehículo conocido se omiten.
    pub fn pending(
        &self,
        preferences: &UserPreferences,
        vehicles: &[Vehicle],
        tasks: &[MaintenanceTask],
        today: NaiveDate,
    ) -> AppResult<Vec<ReminderNotice>> {
        if !preferences.email_reminders && !preferences.push_notifications {
            return Ok(Vec::new());
        }

        validate_range(preferences.reminder_days_before, 0, 365)
            .map_err(|e| field_error("reminder_days_before", e))?;

        let mut notices = Vec::new();

        for task in tasks {
            let vehicle = match vehicles.iter().find(|v| v.id == task.vehicle_id) {
                Some(vehicle) => vehicle,
                None => continue,
            };

            let report = self.engine.evaluate(task, vehicle.current_mileage, today)?;

            let should_notify = match report.status {
                TaskStatus::Overdue | TaskStatus::DueSoon => true,
                TaskStatus::Good => report.days_remaining <= preferences.reminder_days_before,
                TaskStatus::ReplacementRequested => false,
            };

            if should_notify {
                notices.push(ReminderNotice {
                    task_id: task.id,
                    vehicle_id: vehicle.id,
                    vehicle_name: vehicle.display_name(),
                    task_type: task.task_type,
                    status: report.status,
                    next_due_mileage: report.next_due_mileage,
                    next_due_date: report.next_due_date,
                    miles_remaining: report.miles_remaining,
                    days_remaining: report.days_remaining,
                });
            }
        }

        debug!(
            "🔔 {} avisos pendientes de {} tareas",
            notices.len(),
            tasks.len()
        );

        Ok(notices)
    }
}

impl Default for ReminderService {
    fn default() -> Self {
        Self::new(StatusEngine::default())
    }
}
