//! Servicio de estadísticas del dashboard
//!
//! Agrega los contadores que muestra la pantalla principal: total de
//! vehículos y tareas del usuario, y cuántas tareas hay en cada estado.

use chrono::NaiveDate;
use serde::Serialize;

use crate::models::task::{MaintenanceTask, TaskStatus};
use crate::models::vehicle::Vehicle;
use crate::services::status_engine::StatusEngine;
use crate::utils::errors::AppResult;

/// Contadores agregados para el dashboard
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct DashboardStats {
    pub total_vehicles: usize,
    pub total_tasks: usize,
    pub good: usize,
    pub due_soon: usize,
    pub overdue: usize,
    pub replacement_requested: usize,
}

/// Servicio de agregación para el dashboard
pub struct DashboardService {
    engine: StatusEngine,
}

impl DashboardService {
    pub fn new(engine: StatusEngine) -> Self {
        Self { engine }
    }

    /// Resumir el estado de todas las tareas de un usuario
    ///
    /// Cada tarea se evalúa contra el kilometraje de su propio vehículo;
    /// una tarea cuyo vehículo no aparece se evalúa contra kilometraje 0.
    pub fn summarize(
        &self,
        vehicles: &[Vehicle],
        tasks: &[MaintenanceTask],
        today: NaiveDate,
    ) -> AppResult<DashboardStats> {
        let mut stats = DashboardStats {
            total_vehicles: vehicles.len(),
            total_tasks: tasks.len(),
            good: 0,
            due_soon: 0,
            overdue: 0,
            replacement_requested: 0,
        };

        for task in tasks {
            let current_mileage = vehicles
                .iter()
                .find(|v| v.id == task.vehicle_id)
                .map(|v| v.current_mileage)
                .unwrap_or(0);

            let report = self.engine.evaluate(task, current_mileage, today)?;
            match report.status {
                TaskStatus::Good => stats.good += 1,
                TaskStatus::DueSoon => stats.due_soon += 1,
                TaskStatus::Overdue => stats.overdue += 1,
                TaskStatus::ReplacementRequested => stats.replacement_requested += 1,
            }
        }

        Ok(stats)
    }
}

impl Default for DashboardService {
    fn default() -> Self {
        Self::new(StatusEngine::default())
    }
}
