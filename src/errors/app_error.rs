use attrbind_core::BindError;
use thiserror::Error;

/// Errores de la aplicación demo (configuración + binding).
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Error de configuración: {0}")]
    Config(String),
    #[error("Error de binding: {0}")]
    Bind(#[from] BindError),
    #[error("Error JSON: {0}")]
    Json(#[from] serde_json::Error),
}
