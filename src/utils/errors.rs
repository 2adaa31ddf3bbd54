//! Sistema de manejo de errores
//!
//! Este módulo define los tipos de errores del núcleo de mantenimiento.
//! Todos los fallos son sincrónicos: la capa externa que nos invoca es
//! responsable de traducirlos a mensajes de usuario o respuestas HTTP.

use thiserror::Error;
use validator::{ValidationError, ValidationErrors};

/// Errores principales del núcleo
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationErrors),
}

/// Resultado tipado para operaciones que pueden fallar
pub type AppResult<T> = Result<T, AppError>;

/// Función helper para crear errores de validación
pub fn validation_error(field: &'static str, message: &'static str) -> AppError {
    let mut error = ValidationError::new("custom");
    error.add_param("field".into(), &field);
    error.add_param("message".into(), &message);

    let mut errors = ValidationErrors::new();
    errors.add(field, error);

    AppError::Validation(errors)
}

/// Función helper para asociar un `ValidationError` suelto a un campo
pub fn field_error(field: &'static str, error: ValidationError) -> AppError {
    let mut errors = ValidationErrors::new();
    errors.add(field, error);
    AppError::Validation(errors)
}

impl AppError {
    /// Verificar si el error referencia un campo concreto
    pub fn concerns_field(&self, field: &str) -> bool {
        match self {
            AppError::Validation(errors) => errors.field_errors().contains_key(field),
        }
    }
}
