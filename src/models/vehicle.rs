//! Modelo de Vehicle
//!
//! Este módulo contiene el struct Vehicle y sus variantes de request.
//! El kilometraje se almacena siempre en millas (unidad canónica); la
//! conversión a otras unidades es cosa de la capa de presentación.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::utils::errors::AppResult;

/// Vehicle principal - registro tal y como lo almacena la capa externa
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vehicle {
    pub id: Uuid,
    pub user_id: Uuid,
    pub make: String,
    pub model: String,
    pub year: i32,
    pub color: Option<String>,
    pub license_plate: Option<String>,
    pub vin: Option<String>,
    pub current_mileage: i64,
    pub created_at: DateTime<Utc>,
}

/// Request para crear un nuevo vehículo
#[derive(Debug, Deserialize, Validate)]
pub struct CreateVehicleRequest {
    #[validate(length(min = 1, max = 100))]
    pub make: String,

    #[validate(length(min = 1, max = 100))]
    pub model: String,

    #[validate(range(min = 1900, max = 2030))]
    pub year: i32,

    #[validate(length(min = 1, max = 50))]
    pub color: Option<String>,

    #[validate(length(min = 2, max = 20))]
    pub license_plate: Option<String>,

    #[validate(length(min = 11, max = 17))]
    pub vin: Option<String>,

    #[validate(range(min = 0))]
    pub current_mileage: Option<i64>,
}

/// Request para actualizar un vehículo existente
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateVehicleRequest {
    #[validate(length(min = 1, max = 100))]
    pub make: Option<String>,

    #[validate(length(min = 1, max = 100))]
    pub model: Option<String>,

    #[validate(range(min = 1900, max = 2030))]
    pub year: Option<i32>,

    #[validate(length(min = 1, max = 50))]
    pub color: Option<String>,

    #[validate(length(min = 2, max = 20))]
    pub license_plate: Option<String>,

    #[validate(length(min = 11, max = 17))]
    pub vin: Option<String>,

    #[validate(range(min = 0))]
    pub current_mileage: Option<i64>,
}

impl Vehicle {
    /// Construir un vehículo nuevo a partir de un request validado
    pub fn from_request(user_id: Uuid, request: CreateVehicleRequest) -> AppResult<Vehicle> {
        request.validate()?;

        Ok(Vehicle {
            id: Uuid::new_v4(),
            user_id,
            make: request.make,
            model: request.model,
            year: request.year,
            color: request.color,
            license_plate: request.license_plate,
            vin: request.vin,
            current_mileage: request.current_mileage.unwrap_or(0),
            created_at: Utc::now(),
        })
    }

    /// Aplicar una actualización parcial campo a campo
    pub fn apply_update(&self, request: UpdateVehicleRequest) -> AppResult<Vehicle> {
        request.validate()?;

        Ok(Vehicle {
            id: self.id,
            user_id: self.user_id,
            make: request.make.unwrap_or_else(|| self.make.clone()),
            model: request.model.unwrap_or_else(|| self.model.clone()),
            year: request.year.unwrap_or(self.year),
            color: request.color.or_else(|| self.color.clone()),
            license_plate: request.license_plate.or_else(|| self.license_plate.clone()),
            vin: request.vin.or_else(|| self.vin.clone()),
            current_mileage: request.current_mileage.unwrap_or(self.current_mileage),
            created_at: self.created_at,
        })
    }

    /// Registrar una lectura de odómetro
    ///
    /// El kilometraje del vehículo solo avanza: una lectura menor que la
    /// actual deja el registro como estaba.
    pub fn register_mileage(&self, mileage: i64) -> Vehicle {
        let mut updated = self.clone();
        if mileage > updated.current_mileage {
            updated.current_mileage = mileage;
        }
        updated
    }

    /// Nombre legible del vehículo, como lo muestra la UI
    pub fn display_name(&self) -> String {
        format!("{} {} {}", self.year, self.make, self.model)
    }
}
