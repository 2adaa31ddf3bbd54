//! Modelo de MaintenanceTask
//!
//! Este módulo contiene el struct MaintenanceTask y sus variantes de
//! request. El campo `status` nunca se persiste como verdad: se recalcula
//! en cada lectura con el motor de estado. La única excepción es el flag
//! `replacement_requested`, que el usuario activa y desactiva a mano.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::task_type::TaskType;
use crate::utils::errors::AppResult;

/// Estado derivado de una tarea de mantenimiento
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    Good,
    DueSoon,
    Overdue,
    ReplacementRequested,
}

impl TaskStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Good => "good",
            TaskStatus::DueSoon => "due_soon",
            TaskStatus::Overdue => "overdue",
            TaskStatus::ReplacementRequested => "replacement_requested",
        }
    }
}

/// Tarea de mantenimiento - registro tal y como lo almacena la capa externa
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MaintenanceTask {
    pub id: Uuid,
    pub vehicle_id: Uuid,
    pub user_id: Uuid,
    pub task_type: TaskType,
    pub description: Option<String>,
    pub last_performed_mileage: i64,
    pub last_performed_date: NaiveDate,
    pub interval_miles: i64,
    pub interval_months: i32,
    pub cost: Option<f64>,
    pub notes: Option<String>,
    pub replacement_requested: bool,
    pub replacement_reason: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Request para crear una nueva tarea de mantenimiento
///
/// Los intervalos son opcionales: cuando faltan se toman del registro
/// de valores por defecto del tipo de tarea.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateTaskRequest {
    pub vehicle_id: Uuid,

    pub task_type: TaskType,

    #[validate(length(min = 1, max = 500))]
    pub description: Option<String>,

    #[validate(range(min = 0))]
    pub last_performed_mileage: i64,

    pub last_performed_date: NaiveDate,

    #[validate(range(min = 1))]
    pub interval_miles: Option<i64>,

    #[validate(range(min = 1))]
    pub interval_months: Option<i32>,

    #[validate(range(min = 0.0))]
    pub cost: Option<f64>,

    #[validate(length(max = 1000))]
    pub notes: Option<String>,
}

/// Request para actualizar una tarea existente
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateTaskRequest {
    pub task_type: Option<TaskType>,

    #[validate(length(min = 1, max = 500))]
    pub description: Option<String>,

    #[validate(range(min = 0))]
    pub last_performed_mileage: Option<i64>,

    pub last_performed_date: Option<NaiveDate>,

    #[validate(range(min = 1))]
    pub interval_miles: Option<i64>,

    #[validate(range(min = 1))]
    pub interval_months: Option<i32>,

    #[validate(range(min = 0.0))]
    pub cost: Option<f64>,

    #[validate(length(max = 1000))]
    pub notes: Option<String>,
}

/// Request para completar una tarea
#[derive(Debug, Deserialize, Validate)]
pub struct CompleteTaskRequest {
    #[validate(range(min = 0))]
    pub mileage: i64,
}

/// Request para solicitar el reemplazo anticipado de una pieza
#[derive(Debug, Deserialize, Validate)]
pub struct ReplacementRequest {
    #[validate(length(min = 1, max = 500))]
    pub reason: String,
}

impl MaintenanceTask {
    /// Aplicar una actualización parcial campo a campo
    ///
    /// Los campos ausentes conservan su valor actual. Devuelve un registro
    /// nuevo; el original queda intacto.
    pub fn apply_update(&self, request: UpdateTaskRequest) -> AppResult<MaintenanceTask> {
        request.validate()?;

        Ok(MaintenanceTask {
            id: self.id,
            vehicle_id: self.vehicle_id,
            user_id: self.user_id,
            task_type: request.task_type.unwrap_or(self.task_type),
            description: request.description.or_else(|| self.description.clone()),
            last_performed_mileage: request
                .last_performed_mileage
                .unwrap_or(self.last_performed_mileage),
            last_performed_date: request
                .last_performed_date
                .unwrap_or(self.last_performed_date),
            interval_miles: request.interval_miles.unwrap_or(self.interval_miles),
            interval_months: request.interval_months.unwrap_or(self.interval_months),
            cost: request.cost.or(self.cost),
            notes: request.notes.or_else(|| self.notes.clone()),
            replacement_requested: self.replacement_requested,
            replacement_reason: self.replacement_reason.clone(),
            created_at: self.created_at,
        })
    }
}
