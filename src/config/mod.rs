//! Configuración del proyecto
//!
//! Este módulo contiene los umbrales configurables del motor de estado
//! y las constantes de conversión de unidades.

pub mod environment;

pub use environment::*;
