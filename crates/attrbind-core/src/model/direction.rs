use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Dirección de transferencia entre el mapa de parámetros y los campos.
///
/// Se usa en dos lugares: como dirección declarada de cada atributo y como
/// dirección solicitada en cada llamada a `bind`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BindingDirection {
    /// mapa -> campo
    In,
    /// campo -> mapa
    Out,
    /// ambas (IN se aplica antes que OUT)
    InOut,
}

impl BindingDirection {
    pub fn includes_in(self) -> bool {
        matches!(self, BindingDirection::In | BindingDirection::InOut)
    }

    pub fn includes_out(self) -> bool {
        matches!(self, BindingDirection::Out | BindingDirection::InOut)
    }
}

impl fmt::Display for BindingDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            BindingDirection::In => "in",
            BindingDirection::Out => "out",
            BindingDirection::InOut => "inout",
        };
        f.write_str(s)
    }
}

/// Error al interpretar una dirección desde texto.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown binding direction: {0}")]
pub struct ParseDirectionError(pub String);

impl FromStr for BindingDirection {
    type Err = ParseDirectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "in" => Ok(BindingDirection::In),
            "out" => Ok(BindingDirection::Out),
            "inout" | "in_out" | "in-out" => Ok(BindingDirection::InOut),
            other => Err(ParseDirectionError(other.to_string())),
        }
    }
}
