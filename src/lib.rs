//! attrbind
//!
//! Crate de aplicación sobre `attrbind-core`:
//! - `config`: dirección y parámetros de la demo desde el entorno (.env).
//! - `errors`: errores de aplicación (configuración + binding).
//! - `pipeline`: grafo de componentes de ejemplo declarado con `bindable!`.

pub mod config;
pub mod errors;
pub mod pipeline;
