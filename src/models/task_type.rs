//! Tipos de tarea de mantenimiento
//!
//! Catálogo cerrado de tipos de tarea con sus valores por defecto
//! (etiqueta, icono e intervalos de servicio). El registro sustituye
//! al matching ad hoc sobre strings libres.

use std::collections::HashMap;

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};

/// Tipo de tarea de mantenimiento - valores wire en snake_case
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum TaskType {
    OilChange,
    AirFilter,
    CabinFilter,
    Coolant,
    Brakes,
    BrakeFluid,
    Battery,
    TireRotation,
    Transmission,
    SparkPlugs,
}

/// Valores por defecto asociados a un tipo de tarea
#[derive(Debug, Clone, Copy, Serialize)]
pub struct TaskTypeDefaults {
    pub label: &'static str,
    pub icon: &'static str,
    pub interval_miles: i64,
    pub interval_months: i32,
}

/// Fallback para tipos sin entrada en el registro
pub const GENERIC_DEFAULTS: TaskTypeDefaults = TaskTypeDefaults {
    label: "Maintenance",
    icon: "wrench",
    interval_miles: 5000,
    interval_months: 6,
};

lazy_static! {
    static ref DEFAULTS_REGISTRY: HashMap<TaskType, TaskTypeDefaults> = {
        let mut registry = HashMap::new();
        registry.insert(TaskType::OilChange, TaskTypeDefaults {
            label: "Oil Change",
            icon: "droplet",
            interval_miles: 5000,
            interval_months: 6,
        });
        registry.insert(TaskType::AirFilter, TaskTypeDefaults {
            label: "Air Filter",
            icon: "wind",
            interval_miles: 15000,
            interval_months: 12,
        });
        registry.insert(TaskType::CabinFilter, TaskTypeDefaults {
            label: "Cabin Filter",
            icon: "fan",
            interval_miles: 15000,
            interval_months: 12,
        });
        registry.insert(TaskType::Coolant, TaskTypeDefaults {
            label: "Coolant",
            icon: "thermometer",
            interval_miles: 30000,
            interval_months: 24,
        });
        registry.insert(TaskType::Brakes, TaskTypeDefaults {
            label: "Brake Pads",
            icon: "disc",
            interval_miles: 25000,
            interval_months: 24,
        });
        registry.insert(TaskType::BrakeFluid, TaskTypeDefaults {
            label: "Brake Fluid",
            icon: "droplets",
            interval_miles: 24000,
            interval_months: 24,
        });
        registry.insert(TaskType::Battery, TaskTypeDefaults {
            label: "Battery",
            icon: "battery",
            interval_miles: 50000,
            interval_months: 48,
        });
        registry.insert(TaskType::TireRotation, TaskTypeDefaults {
            label: "Tire Rotation",
            icon: "refresh-cw",
            interval_miles: 7500,
            interval_months: 6,
        });
        registry.insert(TaskType::Transmission, TaskTypeDefaults {
            label: "Transmission Fluid",
            icon: "settings",
            interval_miles: 60000,
            interval_months: 48,
        });
        registry.insert(TaskType::SparkPlugs, TaskTypeDefaults {
            label: "Spark Plugs",
            icon: "zap",
            interval_miles: 60000,
            interval_months: 60,
        });
        registry
    };
}

impl TaskType {
    /// Todos los tipos registrados
    pub const ALL: [TaskType; 10] = [
        TaskType::OilChange,
        TaskType::AirFilter,
        TaskType::CabinFilter,
        TaskType::Coolant,
        TaskType::Brakes,
        TaskType::BrakeFluid,
        TaskType::Battery,
        TaskType::TireRotation,
        TaskType::Transmission,
        TaskType::SparkPlugs,
    ];

    /// Valores por defecto del tipo, con fallback genérico
    pub fn defaults(&self) -> TaskTypeDefaults {
        DEFAULTS_REGISTRY.get(self).copied().unwrap_or(GENERIC_DEFAULTS)
    }

    /// Valor wire del tipo
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskType::OilChange => "oil_change",
            TaskType::AirFilter => "air_filter",
            TaskType::CabinFilter => "cabin_filter",
            TaskType::Coolant => "coolant",
            TaskType::Brakes => "brakes",
            TaskType::BrakeFluid => "brake_fluid",
            TaskType::Battery => "battery",
            TaskType::TireRotation => "tire_rotation",
            TaskType::Transmission => "transmission",
            TaskType::SparkPlugs => "spark_plugs",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_format_is_snake_case() {
        let json = serde_json::to_string(&TaskType::OilChange).unwrap();
        assert_eq!(json, "\"oil_change\"");

        let parsed: TaskType = serde_json::from_str("\"brake_fluid\"").unwrap();
        assert_eq!(parsed, TaskType::BrakeFluid);
    }

    #[test]
    fn test_every_type_has_registry_entry() {
        for task_type in TaskType::ALL {
            let defaults = task_type.defaults();
            assert!(defaults.interval_miles > 0);
            assert!(defaults.interval_months > 0);
            assert!(!defaults.label.is_empty());
        }
    }

    #[test]
    fn test_oil_change_keeps_original_defaults() {
        let defaults = TaskType::OilChange.defaults();
        assert_eq!(defaults.interval_miles, 5000);
        assert_eq!(defaults.interval_months, 6);
    }

    #[test]
    fn test_as_str_matches_serde() {
        for task_type in TaskType::ALL {
            let json = serde_json::to_string(&task_type).unwrap();
            assert_eq!(json, format!("\"{}\"", task_type.as_str()));
        }
    }
}
