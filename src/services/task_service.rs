//! Servicio de tareas de mantenimiento
//!
//! Operaciones de ciclo de vida sobre tareas: creación con valores por
//! defecto del registro de tipos, completado, solicitud y cancelación de
//! reemplazo, y evaluación de estado para listados. Todas las operaciones
//! reciben registros y devuelven registros nuevos; persistirlos es
//! responsabilidad de la capa externa.

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use tracing::info;
use uuid::Uuid;
use validator::Validate;

use crate::models::task::{
    CompleteTaskRequest, CreateTaskRequest, MaintenanceTask, ReplacementRequest, TaskStatus,
};
use crate::models::task_type::TaskType;
use crate::models::vehicle::Vehicle;
use crate::services::status_engine::{StatusEngine, StatusReport};
use crate::utils::errors::{field_error, validation_error, AppResult};
use crate::utils::validation::validate_not_empty;

/// Tarea junto con su estado derivado, lista para devolver al caller
#[derive(Debug, Clone, Serialize)]
pub struct TaskWithStatus {
    pub id: Uuid,
    pub vehicle_id: Uuid,
    pub user_id: Uuid,
    pub task_type: TaskType,
    pub description: Option<String>,
    pub last_performed_mileage: i64,
    pub last_performed_date: NaiveDate,
    pub next_due_mileage: i64,
    pub next_due_date: NaiveDate,
    pub interval_miles: i64,
    pub interval_months: i32,
    pub cost: Option<f64>,
    pub notes: Option<String>,
    pub status: TaskStatus,
    pub replacement_requested: bool,
    pub replacement_reason: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl TaskWithStatus {
    fn from_report(task: &MaintenanceTask, report: StatusReport) -> Self {
        Self {
            id: task.id,
            vehicle_id: task.vehicle_id,
            user_id: task.user_id,
            task_type: task.task_type,
            description: task.description.clone(),
            last_performed_mileage: task.last_performed_mileage,
            last_performed_date: task.last_performed_date,
            next_due_mileage: report.next_due_mileage,
            next_due_date: report.next_due_date,
            interval_miles: task.interval_miles,
            interval_months: task.interval_months,
            cost: task.cost,
            notes: task.notes.clone(),
            status: report.status,
            replacement_requested: task.replacement_requested,
            replacement_reason: task.replacement_reason.clone(),
            created_at: task.created_at,
        }
    }
}

/// Servicio de tareas de mantenimiento
pub struct TaskService {
    engine: StatusEngine,
}

impl TaskService {
    pub fn new(engine: StatusEngine) -> Self {
        Self { engine }
    }

    /// Crear una tarea nueva
    ///
    /// Los intervalos ausentes se toman del registro de valores por
    /// defecto del tipo de tarea.
    pub fn create(&self, user_id: Uuid, request: CreateTaskRequest) -> AppResult<MaintenanceTask> {
        request.validate()?;

        let defaults = request.task_type.defaults();
        let task = MaintenanceTask {
            id: Uuid::new_v4(),
            vehicle_id: request.vehicle_id,
            user_id,
            task_type: request.task_type,
            description: request.description,
            last_performed_mileage: request.last_performed_mileage,
            last_performed_date: request.last_performed_date,
            interval_miles: request.interval_miles.unwrap_or(defaults.interval_miles),
            interval_months: request.interval_months.unwrap_or(defaults.interval_months),
            cost: request.cost,
            notes: request.notes,
            replacement_requested: false,
            replacement_reason: None,
            created_at: Utc::now(),
        };

        info!(
            "🆕 Tarea {} creada para vehículo {} (cada {} millas / {} meses)",
            task.task_type.as_str(),
            task.vehicle_id,
            task.interval_miles,
            task.interval_months
        );

        Ok(task)
    }

    /// Completar una tarea
    ///
    /// El kilometraje de completado no puede retroceder respecto al último
    /// servicio registrado; en ese caso la operación falla y los registros
    /// de entrada quedan intactos. Completar limpia cualquier solicitud de
    /// reemplazo pendiente y avanza el odómetro del vehículo si procede.
    pub fn complete(
        &self,
        task: &MaintenanceTask,
        vehicle: &Vehicle,
        request: CompleteTaskRequest,
        completed_on: NaiveDate,
    ) -> AppResult<(MaintenanceTask, Vehicle)> {
        request.validate()?;

        if task.vehicle_id != vehicle.id {
            return Err(validation_error(
                "vehicle_id",
                "task does not belong to this vehicle",
            ));
        }

        if request.mileage < task.last_performed_mileage {
            return Err(validation_error(
                "mileage",
                "completion mileage cannot be lower than the last performed mileage",
            ));
        }

        let mut completed = task.clone();
        completed.last_performed_mileage = request.mileage;
        completed.last_performed_date = completed_on;
        completed.replacement_requested = false;
        completed.replacement_reason = None;

        let updated_vehicle = vehicle.register_mileage(request.mileage);

        info!(
            "✅ Tarea {} completada a {} millas",
            completed.task_type.as_str(),
            request.mileage
        );

        Ok((completed, updated_vehicle))
    }

    /// Solicitar el reemplazo anticipado de una pieza
    ///
    /// Solo toca el flag y el motivo; kilometrajes e intervalos quedan
    /// como estaban.
    pub fn request_replacement(
        &self,
        task: &MaintenanceTask,
        request: ReplacementRequest,
    ) -> AppResult<MaintenanceTask> {
        request.validate()?;
        validate_not_empty(&request.reason).map_err(|e| field_error("reason", e))?;

        let mut flagged = task.clone();
        flagged.replacement_requested = true;
        flagged.replacement_reason = Some(request.reason.trim().to_string());

        info!(
            "🔧 Reemplazo solicitado para tarea {} ({})",
            flagged.id,
            flagged.task_type.as_str()
        );

        Ok(flagged)
    }

    /// Cancelar una solicitud de reemplazo
    pub fn cancel_replacement(&self, task: &MaintenanceTask) -> MaintenanceTask {
        let mut cleared = task.clone();
        cleared.replacement_requested = false;
        cleared.replacement_reason = None;

        info!("↩️ Solicitud de reemplazo cancelada para tarea {}", cleared.id);

        cleared
    }

    /// Evaluar una tarea y montar la vista con estado
    pub fn with_status(
        &self,
        task: &MaintenanceTask,
        current_mileage: i64,
        today: NaiveDate,
    ) -> AppResult<TaskWithStatus> {
        let report = self.engine.evaluate(task, current_mileage, today)?;
        Ok(TaskWithStatus::from_report(task, report))
    }

    /// Evaluar un listado completo de tareas
    ///
    /// Cada tarea se evalúa contra el kilometraje de su propio vehículo.
    /// Una tarea cuyo vehículo no aparece se evalúa contra kilometraje 0.
    pub fn list_with_status(
        &self,
        vehicles: &[Vehicle],
        tasks: &[MaintenanceTask],
        today: NaiveDate,
    ) -> AppResult<Vec<TaskWithStatus>> {
        let mut result = Vec::with_capacity(tasks.len());

        for task in tasks {
            let current_mileage = vehicles
                .iter()
                .find(|v| v.id == task.vehicle_id)
                .map(|v| v.current_mileage)
                .unwrap_or(0);

            result.push(self.with_status(task, current_mileage, today)?);
        }

        Ok(result)
    }
}

impl Default for TaskService {
    fn default() -> Self {
        Self::new(StatusEngine::default())
    }
}
