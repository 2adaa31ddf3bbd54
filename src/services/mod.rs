//! Services module
//!
//! Este módulo contiene la lógica de negocio del núcleo: el motor de
//! estado, el conversor de unidades y los servicios de ciclo de vida que
//! la capa externa invoca con registros ya cargados.

pub mod dashboard_service;
pub mod mileage_service;
pub mod reminder_service;
pub mod status_engine;
pub mod task_service;
pub mod unit_converter;

pub use dashboard_service::{DashboardService, DashboardStats};
pub use mileage_service::MileageService;
pub use reminder_service::{ReminderNotice, ReminderService};
pub use status_engine::{StatusEngine, StatusReport};
pub use task_service::{TaskService, TaskWithStatus};
pub use unit_converter::UnitConverter;
