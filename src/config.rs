//! Configuración de la demo desde variables de entorno (.env opcional).
//!
//! - `ATTRBIND_DIRECTION`: `in` | `out` | `inout` (por defecto `inout`).
//! - `ATTRBIND_PARAMS`: objeto JSON con los parámetros de entrada (por
//!   defecto `{}`).

use std::env;

use attrbind_core::{BindingDirection, Parameters};
use dotenvy::dotenv;
use once_cell::sync::Lazy;
use serde_json::Value;

use crate::errors::AppError;

pub const DIRECTION_VAR: &str = "ATTRBIND_DIRECTION";
pub const PARAMS_VAR: &str = "ATTRBIND_PARAMS";

// Carga perezosa del archivo .env una sola vez.
static DOTENV_LOADED: Lazy<()> = Lazy::new(|| {
    let _ = dotenv(); // ignora error si no existe .env
});

#[derive(Debug, Clone)]
pub struct DemoConfig {
    pub direction: BindingDirection,
    pub params: Parameters,
}

impl DemoConfig {
    pub fn from_env() -> Result<Self, AppError> {
        Lazy::force(&DOTENV_LOADED);
        Self::from_values(env::var(DIRECTION_VAR).ok().as_deref(), env::var(PARAMS_VAR).ok().as_deref())
    }

    /// Construye la configuración a partir de los valores crudos (sin tocar
    /// el entorno).
    pub fn from_values(direction: Option<&str>, params: Option<&str>) -> Result<Self, AppError> {
        let direction = match direction {
            Some(raw) => raw.parse::<BindingDirection>().map_err(|e| AppError::Config(format!("{DIRECTION_VAR}: {e}")))?,
            None => BindingDirection::InOut,
        };
        let params = match params {
            Some(raw) => match serde_json::from_str::<Value>(raw)? {
                Value::Object(map) => map,
                other => return Err(AppError::Config(format!("{PARAMS_VAR} must be a JSON object, got {other}"))),
            },
            None => Parameters::new(),
        };
        Ok(Self { direction, params })
    }
}
