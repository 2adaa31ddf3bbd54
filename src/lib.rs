//! Núcleo de seguimiento de mantenimiento de vehículos
//!
//! Este crate implementa la lógica de dominio de la aplicación: el motor
//! de estado que clasifica la urgencia de cada tarea, el conversor de
//! unidades de distancia y las operaciones de ciclo de vida sobre tareas,
//! vehículos y lecturas de odómetro.
//!
//! Todo el crate es síncrono y sin estado compartido mutable: cada
//! operación es una función pura de los registros que recibe más la
//! configuración de proceso. HTTP, autenticación y persistencia viven en
//! la capa externa que nos invoca.

pub mod config;
pub mod models;
pub mod services;
pub mod utils;

pub use models::mileage_log::{MileageLogEntry, NewMileageLog};
pub use models::preferences::{DistanceUnit, Language, Theme, UserPreferences};
pub use models::task::{
    CompleteTaskRequest, CreateTaskRequest, MaintenanceTask, ReplacementRequest, TaskStatus,
    UpdateTaskRequest,
};
pub use models::task_type::{TaskType, TaskTypeDefaults};
pub use models::vehicle::{CreateVehicleRequest, UpdateVehicleRequest, Vehicle};
pub use services::{
    DashboardService, DashboardStats, MileageService, ReminderNotice, ReminderService,
    StatusEngine, StatusReport, TaskService, TaskWithStatus, UnitConverter,
};
pub use utils::errors::{AppError, AppResult};
